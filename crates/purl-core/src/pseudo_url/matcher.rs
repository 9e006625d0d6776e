//! Compiled pseudo-URL: match predicate and request factory.

use regex::{Regex, RegexBuilder};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::request::{Request, RequestError};

use super::compile::compile_purl;
use super::error::PurlError;
use super::template::RequestTemplate;

/// Default cap on the compiled regex size, in bytes.
pub const DEFAULT_REGEX_SIZE_LIMIT: usize = 10 * (1 << 20);

/// A pseudo-URL compiled to an anchored regex, plus the template used for
/// requests created from matching URLs.
///
/// Immutable after construction and safe to share between threads.
#[derive(Debug, Clone)]
pub struct PseudoUrl {
    purl: String,
    regex: Regex,
    template: RequestTemplate,
}

impl PseudoUrl {
    pub fn new(purl: &str, template: RequestTemplate) -> Result<Self, PurlError> {
        Self::with_size_limit(purl, template, DEFAULT_REGEX_SIZE_LIMIT)
    }

    /// Pseudo-URL with an empty request template.
    pub fn parse(purl: &str) -> Result<Self, PurlError> {
        Self::new(purl, RequestTemplate::new())
    }

    /// Like [`new`](Self::new), with an explicit limit on the compiled regex
    /// size. A pattern over the limit is reported as malformed.
    pub fn with_size_limit(
        purl: &str,
        template: RequestTemplate,
        size_limit: usize,
    ) -> Result<Self, PurlError> {
        let source = compile_purl(purl)?;
        let regex = RegexBuilder::new(&source)
            .size_limit(size_limit)
            .build()
            .map_err(|e| PurlError::malformed(purl, e))?;

        tracing::debug!("PURL parsed: purl={} regex={}", purl, source);

        Ok(Self {
            purl: purl.to_string(),
            regex,
            template,
        })
    }

    /// Construction from untyped input such as a decoded JSON document.
    ///
    /// Argument shapes are checked before anything is compiled: `purl` must be
    /// a string and `template`, when present, an object.
    pub fn from_json(purl: &Value, template: Option<&Value>) -> Result<Self, PurlError> {
        let purl = purl.as_str().ok_or(PurlError::InvalidArgument {
            name: "purl",
            expected: "a string",
        })?;
        let template = match template {
            Some(value) => RequestTemplate::from_value(value.clone())?,
            None => RequestTemplate::new(),
        };
        Self::new(purl, template)
    }

    /// True if the whole of `url` matches the pattern.
    pub fn matches(&self, url: &str) -> bool {
        let matched = self.regex.is_match(url);
        tracing::trace!("purl={} url={} matched={}", self.purl, url, matched);
        matched
    }

    /// [`matches`](Self::matches) for untyped input. Anything that is not a
    /// string does not match.
    pub fn matches_value(&self, candidate: &Value) -> bool {
        candidate.as_str().is_some_and(|url| self.matches(url))
    }

    /// Builds a request from the template with `url` set.
    ///
    /// Does not check that `url` matches; callers normally test with
    /// [`matches`](Self::matches) first. Errors come from request validation.
    pub fn create_request(&self, url: &str) -> Result<Request, RequestError> {
        let request = Request::from_fields(self.template.merged_with_url(url))?;
        tracing::debug!("created request url={} purl={}", request.url, self.purl);
        Ok(request)
    }

    /// The pseudo-URL exactly as given at construction.
    pub fn purl(&self) -> &str {
        &self.purl
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Compiled regex source.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn template(&self) -> &RequestTemplate {
        &self.template
    }
}

impl FromStr for PseudoUrl {
    type Err = PurlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PseudoUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.purl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn matches_whole_string_only() {
        let p = PseudoUrl::parse("http://a.com/x").unwrap();
        assert!(p.matches("http://a.com/x"));
        assert!(!p.matches("http://a.com/xy"));
        assert!(!p.matches("zhttp://a.com/x"));
    }

    #[test]
    fn dot_is_literal() {
        let p = PseudoUrl::parse("a.b").unwrap();
        assert!(p.matches("a.b"));
        assert!(!p.matches("axb"));
    }

    #[test]
    fn accessors() {
        let p: PseudoUrl = " a[b*]c ".parse().unwrap();
        assert_eq!(p.purl(), " a[b*]c ");
        assert_eq!(p.as_str(), "^a(?:b*)c$");
        assert_eq!(p.to_string(), " a[b*]c ");
        assert!(p.template().is_empty());
    }

    #[test]
    fn blank_pattern_is_malformed() {
        match PseudoUrl::parse("   ") {
            Err(PurlError::MalformedPattern { purl, .. }) => assert_eq!(purl, "   "),
            other => panic!("expected MalformedPattern, got {other:?}"),
        }
    }

    #[test]
    fn invalid_section_regex_is_malformed() {
        let err = PseudoUrl::parse("http://a.com/[(]").unwrap_err();
        match err {
            PurlError::MalformedPattern { purl, reason } => {
                assert_eq!(purl, "http://a.com/[(]");
                assert!(!reason.is_empty());
            }
            other => panic!("expected MalformedPattern, got {other:?}"),
        }
    }

    #[test]
    fn unterminated_section_is_malformed() {
        assert!(matches!(
            PseudoUrl::parse("http://a.com/[.*"),
            Err(PurlError::MalformedPattern { .. })
        ));
    }

    #[test]
    fn size_limit_is_enforced() {
        let err = PseudoUrl::with_size_limit("x/[\\w{1000}]", RequestTemplate::new(), 64)
            .unwrap_err();
        assert!(matches!(err, PurlError::MalformedPattern { .. }));
    }

    #[test]
    fn from_json_checks_shapes() {
        assert!(matches!(
            PseudoUrl::from_json(&json!(42), None),
            Err(PurlError::InvalidArgument { name: "purl", .. })
        ));
        assert!(matches!(
            PseudoUrl::from_json(&json!("http://a.com/"), Some(&json!([1]))),
            Err(PurlError::InvalidTemplate { found: "array" })
        ));
        let p = PseudoUrl::from_json(
            &json!("http://a.com/[.*]"),
            Some(&json!({ "method": "HEAD" })),
        )
        .unwrap();
        assert_eq!(p.template().get("method"), Some(&json!("HEAD")));
    }

    #[test]
    fn matches_value_rejects_non_strings() {
        let p = PseudoUrl::parse("[.*]").unwrap();
        assert!(p.matches_value(&json!("anything")));
        for v in [json!(null), json!(1), json!(true), json!(["a"]), json!({ "url": "a" })] {
            assert!(!p.matches_value(&v));
        }
    }

    #[test]
    fn create_request_merges_template() {
        let template = RequestTemplate::new()
            .with("method", json!("POST"))
            .with("payload", json!("q=1"));
        let p = PseudoUrl::new("http://a.com/[.*]", template).unwrap();
        let req = p.create_request("http://a.com/search").unwrap();
        assert_eq!(req.url, "http://a.com/search");
        assert_eq!(req.method, crate::request::Method::Post);
        assert_eq!(req.payload.as_deref(), Some("q=1"));
    }

    #[test]
    fn create_request_does_not_check_match() {
        let p = PseudoUrl::parse("http://a.com/only").unwrap();
        let req = p.create_request("http://other.com/").unwrap();
        assert_eq!(req.url, "http://other.com/");
    }

    #[test]
    fn create_request_propagates_validation_errors() {
        let p = PseudoUrl::new(
            "[.*]",
            RequestTemplate::new().with("method", json!("FETCH")),
        )
        .unwrap();
        assert!(matches!(
            p.create_request("http://a.com/"),
            Err(RequestError::InvalidFields(_))
        ));
        let p = PseudoUrl::parse("[.*]").unwrap();
        assert!(matches!(
            p.create_request("not a url"),
            Err(RequestError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PseudoUrl>();

        let p = PseudoUrl::parse("http://a.com/[\\d+]").unwrap();
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|i| {
                    let p = &p;
                    s.spawn(move || p.matches(&format!("http://a.com/{i}")))
                })
                .collect();
            for h in handles {
                assert!(h.join().unwrap());
            }
        });
    }
}
