//! Pure computations over complaint records.
//!
//! Nothing in here performs I/O or reads the clock: callers pass `now`
//! explicitly and own the fetch/apply/persist cycle around these functions.

pub mod intake;
pub mod policy;
pub mod statistics;
pub mod transition;

#[cfg(test)]
pub mod test_utils;

pub use intake::*;
pub use policy::*;
pub use statistics::*;
pub use transition::*;

use chrono::{DateTime, Utc};

/// Days a complaint may stay unanswered before it is overdue
pub const EXPIRATION_DAYS: i64 = 15;

/// Whole days between two instants, truncated and sign-insensitive.
pub fn whole_days_between(a: DateTime<Utc>, b: DateTime<Utc>) -> i64 {
    (b - a).num_days().abs()
}

/// Rounds to two decimal places, half away from zero.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_whole_days_truncates_and_ignores_sign() {
        let a = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(whole_days_between(a, a + Duration::hours(47)), 1);
        assert_eq!(whole_days_between(a, a + Duration::days(20)), 20);
        assert_eq!(whole_days_between(a + Duration::days(20), a), 20);
        assert_eq!(whole_days_between(a, a), 0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(66.666_666), 66.67);
        assert_eq!(round2(33.333_333), 33.33);
        assert_eq!(round2(0.0), 0.0);
    }
}
