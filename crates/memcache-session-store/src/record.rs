//! Session record data model.
//!
//! A session record is an opaque, application-defined mapping from string
//! keys to JSON values. The store recognizes exactly one convention inside
//! it: an optional `cookie.maxAge` field carrying the session's remaining
//! lifetime in milliseconds, which drives TTL computation on writes.
//! Records are encoded as UTF-8 JSON on the wire, with the `maxAge` spelling
//! preserved for compatibility with middleware that shares the cache.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A server-side session record.
///
/// Created and owned by the calling middleware; the store only serializes
/// and deserializes it, never retaining it beyond a single operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Cookie settings, if the middleware tracks them in the session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie: Option<SessionCookie>,

    /// All remaining session values, keyed by application-defined names.
    #[serde(flatten)]
    pub values: Map<String, Value>,
}

impl SessionRecord {
    /// Create an empty session record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cookie settings.
    pub fn with_cookie(mut self, cookie: SessionCookie) -> Self {
        self.cookie = Some(cookie);
        self
    }

    /// Set a session value.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Get a session value by key.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// The cookie's `maxAge` in milliseconds, if present and numeric.
    pub fn max_age_ms(&self) -> Option<f64> {
        self.cookie.as_ref().and_then(|c| c.max_age)
    }
}

/// Cookie settings carried inside a session record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionCookie {
    /// Remaining cookie lifetime in milliseconds.
    #[serde(rename = "maxAge", default, skip_serializing_if = "Option::is_none")]
    pub max_age: Option<f64>,

    /// Any other cookie fields (path, httpOnly, expires, ...), passed through
    /// untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SessionCookie {
    /// Create cookie settings with the given `maxAge` in milliseconds.
    pub fn with_max_age_ms(ms: f64) -> Self {
        Self {
            max_age: Some(ms),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_age_lookup() {
        let record = SessionRecord::new().with_cookie(SessionCookie::with_max_age_ms(2500.0));
        assert_eq!(record.max_age_ms(), Some(2500.0));

        let record = SessionRecord::new();
        assert_eq!(record.max_age_ms(), None);
    }

    #[test]
    fn test_wire_format_uses_max_age_spelling() {
        let record = SessionRecord::new()
            .with_cookie(SessionCookie::with_max_age_ms(60000.0))
            .with_value("user", "alice");

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"maxAge\":60000.0"));
        assert!(json.contains("\"user\":\"alice\""));
    }

    #[test]
    fn test_unknown_cookie_fields_round_trip() {
        let json = r#"{"cookie":{"maxAge":1000.0,"path":"/","httpOnly":true},"views":3}"#;
        let record: SessionRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.max_age_ms(), Some(1000.0));
        assert_eq!(record.value("views"), Some(&Value::from(3)));

        let cookie = record.cookie.as_ref().unwrap();
        assert_eq!(cookie.extra.get("path"), Some(&Value::from("/")));

        let back: SessionRecord =
            serde_json::from_str(&serde_json::to_string(&record).unwrap()).unwrap();
        assert_eq!(back, record);
    }
}
