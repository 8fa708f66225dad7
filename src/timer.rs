//! Pure tick math for the countdown card and the hero word rotation. The
//! owning components drive these once per interval tick and drop the
//! interval handle on unmount.

use chrono::{DateTime, Utc};

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

/// Remaining time until `deadline`, clamped at zero once it has passed.
pub fn time_left(deadline: DateTime<Utc>, now: DateTime<Utc>) -> TimeLeft {
    let remaining = (deadline - now).num_milliseconds().max(0);
    TimeLeft {
        days: remaining / MS_PER_DAY,
        hours: remaining % MS_PER_DAY / MS_PER_HOUR,
        minutes: remaining % MS_PER_HOUR / MS_PER_MINUTE,
        seconds: remaining % MS_PER_MINUTE / MS_PER_SECOND,
    }
}

/// Next slot in a fixed rotation, wrapping modulo `len`.
pub fn next_index(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index + 1) % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_time_left_ninety_seconds_out() {
        let now = base();
        let left = time_left(now + Duration::seconds(90), now);
        assert_eq!(
            left,
            TimeLeft { days: 0, hours: 0, minutes: 1, seconds: 30 }
        );
    }

    #[test]
    fn test_time_left_decomposes_mixed_duration() {
        let now = base();
        let deadline =
            now + Duration::days(3) + Duration::hours(4) + Duration::minutes(5) + Duration::seconds(6);
        let left = time_left(deadline, now);
        assert_eq!(
            left,
            TimeLeft { days: 3, hours: 4, minutes: 5, seconds: 6 }
        );
    }

    #[test]
    fn test_time_left_clamps_after_deadline() {
        let now = base();
        let left = time_left(now - Duration::seconds(1), now);
        assert_eq!(left, TimeLeft::default());

        let left = time_left(now - Duration::days(400), now);
        assert_eq!(left, TimeLeft::default());
    }

    #[test]
    fn test_time_left_at_exact_deadline_is_zero() {
        let now = base();
        assert_eq!(time_left(now, now), TimeLeft::default());
    }

    #[test]
    fn test_rotation_cycle_closes() {
        let mut index = 0;
        for _ in 0..6 {
            index = next_index(index, 6);
        }
        assert_eq!(index, 0);
    }

    #[test]
    fn test_rotation_advances_in_order() {
        assert_eq!(next_index(0, 6), 1);
        assert_eq!(next_index(4, 6), 5);
        assert_eq!(next_index(5, 6), 0);
    }

    #[test]
    fn test_rotation_handles_empty_list() {
        assert_eq!(next_index(3, 0), 0);
    }
}
