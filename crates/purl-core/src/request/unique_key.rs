//! Unique-key derivation for requests that do not carry one.

use url::Url;

/// Normalizes a parsed URL into a deduplication key.
///
/// Scheme and host are already lower-cased by `Url`. On top of that the
/// fragment is dropped (unless `keep_fragment`), query pairs are sorted by
/// key then value, and trailing slashes of a non-root path are removed.
pub fn compute_unique_key(url: &Url, keep_fragment: bool) -> String {
    let mut key = url.clone();

    if !keep_fragment {
        key.set_fragment(None);
    }

    let mut pairs: Vec<(String, String)> = key.query_pairs().into_owned().collect();
    if pairs.is_empty() {
        key.set_query(None);
    } else {
        pairs.sort();
        key.query_pairs_mut().clear().extend_pairs(pairs);
    }

    let path = key.path();
    if path.len() > 1 && path.ends_with('/') {
        let trimmed = path.trim_end_matches('/').to_string();
        key.set_path(if trimmed.is_empty() { "/" } else { &trimmed });
    }

    key.to_string()
}
