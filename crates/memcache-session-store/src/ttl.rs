//! TTL policy for session writes.

use crate::record::SessionRecord;

/// Default TTL for sessions that carry no `cookie.maxAge`: one day.
pub const ONE_DAY_SECS: i64 = 86_400;

/// Compute the TTL in whole seconds for a session write.
///
/// A numeric `cookie.maxAge` (milliseconds) yields `maxAge / 1000` truncated
/// toward zero; a record without one defaults to [`ONE_DAY_SECS`]. Negative
/// values are passed through unclamped — whether a negative TTL means
/// "already expired" is the cache client's concern.
pub fn session_ttl(record: &SessionRecord) -> i64 {
    match record.max_age_ms() {
        Some(ms) => (ms / 1000.0) as i64,
        None => ONE_DAY_SECS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::SessionCookie;

    fn record_with_max_age(ms: f64) -> SessionRecord {
        SessionRecord::new().with_cookie(SessionCookie::with_max_age_ms(ms))
    }

    #[test]
    fn test_max_age_truncates_to_whole_seconds() {
        assert_eq!(session_ttl(&record_with_max_age(2500.0)), 2);
        assert_eq!(session_ttl(&record_with_max_age(999.0)), 0);
        assert_eq!(session_ttl(&record_with_max_age(60000.0)), 60);
    }

    #[test]
    fn test_missing_max_age_defaults_to_one_day() {
        assert_eq!(session_ttl(&SessionRecord::new()), 86_400);

        // A cookie without maxAge also falls back to the default.
        let record = SessionRecord::new().with_cookie(SessionCookie::default());
        assert_eq!(session_ttl(&record), 86_400);
    }

    #[test]
    fn test_negative_max_age_is_not_clamped() {
        assert_eq!(session_ttl(&record_with_max_age(-2500.0)), -2);
    }
}
