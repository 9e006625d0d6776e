//! Request template held by a pseudo-URL.

use serde_json::{Map, Value};

use super::error::{json_kind, PurlError};

/// Field map merged into every request a [`PseudoUrl`](super::PseudoUrl)
/// creates. Keys are request field names (`method`, `userData`, ...).
///
/// The template is copied into the matcher and never changed afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestTemplate {
    fields: Map<String, Value>,
}

impl RequestTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts any JSON value; only objects are valid templates.
    pub fn from_value(value: Value) -> Result<Self, PurlError> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(PurlError::InvalidTemplate {
                found: json_kind(&other),
            }),
        }
    }

    /// Builder-style insert, for templates assembled in code.
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Copy of the template with `url` set. The given URL replaces any `url`
    /// key the template carries.
    pub(crate) fn merged_with_url(&self, url: &str) -> Map<String, Value> {
        let mut merged = self.fields.clone();
        merged.insert("url".to_string(), Value::String(url.to_string()));
        merged
    }
}

impl From<Map<String, Value>> for RequestTemplate {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_value_accepts_objects_only() {
        let t = RequestTemplate::from_value(json!({ "method": "POST" })).unwrap();
        assert_eq!(t.get("method"), Some(&json!("POST")));

        for bad in [json!(null), json!("x"), json!([1, 2]), json!(3)] {
            assert!(matches!(
                RequestTemplate::from_value(bad),
                Err(PurlError::InvalidTemplate { .. })
            ));
        }
    }

    #[test]
    fn merged_url_overrides_template_url() {
        let t = RequestTemplate::new()
            .with("url", json!("http://ignored.example/"))
            .with("userData", json!({ "x": 1 }));
        let merged = t.merged_with_url("http://example.com/a");
        assert_eq!(merged.get("url"), Some(&json!("http://example.com/a")));
        assert_eq!(merged.get("userData"), Some(&json!({ "x": 1 })));
        // the template itself is untouched
        assert_eq!(t.get("url"), Some(&json!("http://ignored.example/")));
    }

    #[test]
    fn default_is_empty() {
        assert!(RequestTemplate::default().is_empty());
    }
}
