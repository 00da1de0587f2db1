//! Staleness and timeout arithmetic.

use std::time::{Duration, SystemTime};

/// Returns true if a timeout in milliseconds can be scheduled.
pub fn is_valid_timeout(ms: f64) -> bool {
    ms >= 0.0 && ms.is_finite()
}

/// Returns how long data updated at `updated_at` stays fresh, as seen at
/// `now`. Already stale data yields zero.
pub fn time_until_stale(updated_at: SystemTime, stale_time: Duration, now: SystemTime) -> Duration {
    match updated_at.checked_add(stale_time) {
        Some(stale_at) => stale_at.duration_since(now).unwrap_or(Duration::ZERO),
        None => Duration::MAX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_timeout() {
        assert!(is_valid_timeout(0.0));
        assert!(is_valid_timeout(300_000.0));
        assert!(!is_valid_timeout(-1.0));
        assert!(!is_valid_timeout(f64::INFINITY));
        assert!(!is_valid_timeout(f64::NAN));
    }

    #[test]
    fn test_time_until_stale() {
        let updated_at = SystemTime::UNIX_EPOCH + Duration::from_secs(100);
        let stale_time = Duration::from_secs(30);

        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(110);
        assert_eq!(time_until_stale(updated_at, stale_time, now), Duration::from_secs(20));

        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(200);
        assert_eq!(time_until_stale(updated_at, stale_time, now), Duration::ZERO);

        assert_eq!(time_until_stale(updated_at, Duration::ZERO, updated_at), Duration::ZERO);
    }
}
