//! PURL → regex source translation.
//!
//! A single forward pass with one depth counter. Only the outermost `[`/`]`
//! pair is recognised as a section boundary; brackets nested inside a section
//! adjust the counter but are copied through as regex syntax.

use super::error::PurlError;

const ANCHOR_START: char = '^';
const ANCHOR_END: char = '$';
const GROUP_OPEN: &str = "(?:";
const GROUP_CLOSE: char = ')';

/// Translates a pseudo-URL into an anchored regular-expression source string.
///
/// Text outside `[...]` is matched literally: ASCII letters and digits are
/// kept, every other char becomes a hex escape. Text inside a section is
/// trusted regex syntax and is wrapped in a non-capturing group.
///
/// An unterminated section is not rejected here. The open group makes the
/// source invalid, so the engine rejects it when the matcher is built.
///
/// # Examples
///
/// - `compile_purl("a.b")` → `"^a\x2eb$"`
/// - `compile_purl("a[b+]c")` → `"^a(?:b+)c$"`
pub fn compile_purl(purl: &str) -> Result<String, PurlError> {
    let trimmed = purl.trim();
    if trimmed.is_empty() {
        return Err(PurlError::malformed(purl, "it must be a non-empty string"));
    }

    let mut out = String::with_capacity(trimmed.len() * 2 + 2);
    out.push(ANCHOR_START);

    let mut depth: usize = 0;
    for ch in trimmed.chars() {
        if ch == '[' {
            depth += 1;
            if depth == 1 {
                out.push_str(GROUP_OPEN);
                continue;
            }
        } else if ch == ']' && depth > 0 {
            depth -= 1;
            if depth == 0 {
                out.push(GROUP_CLOSE);
                continue;
            }
        }

        if depth > 0 {
            out.push(ch);
        } else {
            push_literal(&mut out, ch);
        }
    }

    out.push(ANCHOR_END);
    Ok(out)
}

/// Appends one literal char: alphanumerics as-is, everything else escaped.
fn push_literal(out: &mut String, ch: char) {
    if ch.is_ascii_alphanumeric() {
        out.push(ch);
        return;
    }
    let code = u32::from(ch);
    if code <= 0xff {
        out.push_str(&format!("\\x{:02x}", code));
    } else {
        // Two hex digits cannot express this code point.
        out.push_str(&format!("\\x{{{:x}}}", code));
    }
}
