use crate::calendar::{date_key, days_before};
use chrono::NaiveDate;
use std::collections::HashSet;

/// Counts consecutive completed days ending at `today`, inclusive.
///
/// The scan walks backwards one calendar day at a time and stops at the
/// first day missing from `completed_dates`, so a missed `today` always
/// yields zero. Each counted day is a distinct entry, which bounds the scan
/// by the number of entries.
pub fn compute_streak<S: AsRef<str>>(completed_dates: &[S], today: NaiveDate) -> u32 {
    let keys: HashSet<&str> = completed_dates.iter().map(|entry| entry.as_ref()).collect();

    let mut streak = 0u32;
    while let Some(date) = days_before(today, streak) {
        if !keys.contains(date_key(date).as_str()) {
            break;
        }
        streak += 1;
    }
    streak
}
