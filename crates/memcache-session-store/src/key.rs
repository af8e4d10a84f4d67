//! Cache key derivation.

/// Translate a session id into a cache key, namespaced by `prefix`.
///
/// Pure concatenation: for a fixed prefix, distinct sids always map to
/// distinct keys.
pub fn derive_key(prefix: &str, sid: &str) -> String {
    format!("{prefix}{sid}")
}
