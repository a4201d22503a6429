//! Overdue fine arithmetic.
//!
//! Pure functions of the clock: nothing here reads `Utc::now()` or touches an
//! item. `lend`/`return` and the overdue/report views all go through
//! [`fine_for`], and amounts stay unrounded until they cross a presentation or
//! snapshot boundary via [`round_currency`].

use chrono::{DateTime, Duration, Utc};

pub const DEFAULT_RATE_PER_DAY: f64 = 0.50;
pub const DEFAULT_LOAN_DAYS: i64 = 14;

const MS_PER_DAY: f64 = 86_400_000.0;

/// Fine owed on a loan due at `due_at`, as of `now`.
///
/// Zero while the loan is not yet overdue. Past due, every started day counts
/// as a full day: one minute late is one day's fine.
pub fn fine_for(due_at: DateTime<Utc>, now: DateTime<Utc>, rate_per_day: f64) -> f64 {
    let late = now.signed_duration_since(due_at);
    if late <= Duration::zero() {
        return 0.0;
    }
    let days_late = (late.num_milliseconds() as f64 / MS_PER_DAY).ceil();
    days_late * rate_per_day
}

/// Round a monetary amount to 2 decimal places.
pub fn round_currency(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn no_fine_before_due_date() {
        let now = Utc::now();
        assert_eq!(fine_for(now + Duration::days(3), now, 0.5), 0.0);
    }

    #[test]
    fn no_fine_exactly_at_due_date() {
        let now = Utc::now();
        assert_eq!(fine_for(now, now, 0.5), 0.0);
    }

    #[test]
    fn three_days_late_at_half_dollar_is_one_fifty() {
        let now = Utc::now();
        assert_eq!(fine_for(now - Duration::days(3), now, 0.5), 1.5);
    }

    #[test]
    fn partial_day_rounds_up_to_a_full_day() {
        let now = Utc::now();
        assert_eq!(fine_for(now - Duration::minutes(1), now, 0.5), 0.5);
    }

    #[test]
    fn a_day_and_a_minute_counts_as_two_days() {
        let now = Utc::now();
        let due = now - Duration::days(1) - Duration::minutes(1);
        assert_eq!(fine_for(due, now, 0.5), 1.0);
    }

    #[test]
    fn rate_scales_linearly() {
        let now = Utc::now();
        assert_eq!(fine_for(now - Duration::days(4), now, 0.25), 1.0);
    }

    #[test]
    fn round_currency_to_two_decimals() {
        assert_eq!(round_currency(1.2345), 1.23);
        assert_eq!(round_currency(1.236), 1.24);
        assert_eq!(round_currency(0.1 + 0.2), 0.3);
        assert_eq!(round_currency(2.0), 2.0);
    }
}
