//! Calendar shift applied to `created_at` during replication.
//!
//! The producer and the analytical consumer live in different clock
//! domains; every record replicated downstream gets a fixed calendar
//! delta applied to its `created_at`. The delta is a parameter of the
//! consumer so the transform can be tested independent of its value.

use chrono::{Days, Months};

use crate::types::Timestamp;

/// A signed calendar delta of years, months and days.
///
/// Months are applied first (with end-of-month clamping), then days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatedAtShift {
    pub years: i32,
    pub months: i32,
    pub days: i64,
}

impl Default for CreatedAtShift {
    /// The delta the replication pipeline has always applied.
    fn default() -> Self {
        Self {
            years: -18,
            months: -5,
            days: 18,
        }
    }
}

impl CreatedAtShift {
    /// Apply the shift to a timestamp.
    ///
    /// Out-of-range results (beyond chrono's representable dates) leave
    /// the affected component unapplied rather than panicking; real
    /// `created_at` values are nowhere near those bounds.
    pub fn apply(&self, ts: Timestamp) -> Timestamp {
        let months = i64::from(self.years) * 12 + i64::from(self.months);
        let shifted = if months >= 0 {
            ts.checked_add_months(Months::new(months as u32))
        } else {
            ts.checked_sub_months(Months::new(months.unsigned_abs() as u32))
        }
        .unwrap_or(ts);

        if self.days >= 0 {
            shifted.checked_add_days(Days::new(self.days as u64))
        } else {
            shifted.checked_sub_days(Days::new(self.days.unsigned_abs()))
        }
        .unwrap_or(shifted)
    }
}
