use crate::calendar::date_key;
use chrono::NaiveDate;

/// Reports whether `date` appears in a completion list. Entries are matched
/// as exact canonical keys, so malformed ones never match.
pub fn is_completed_on<S: AsRef<str>>(completed_dates: &[S], date: NaiveDate) -> bool {
    let key = date_key(date);
    completed_dates.iter().any(|entry| entry.as_ref() == key)
}
