use chrono::{DateTime, Datelike, Duration, FixedOffset, Local, NaiveDate, Utc, Weekday};

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Which calendar a "day" belongs to when turning an instant into a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalendarZone {
    #[default]
    Local,
    Fixed(FixedOffset),
}

impl CalendarZone {
    pub fn from_offset_minutes(minutes: i32) -> Option<Self> {
        FixedOffset::east_opt(minutes.checked_mul(60)?).map(Self::Fixed)
    }

    pub fn date_of(&self, now: DateTime<Utc>) -> NaiveDate {
        match self {
            Self::Local => now.with_timezone(&Local).date_naive(),
            Self::Fixed(offset) => now.with_timezone(offset).date_naive(),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.date_of(Utc::now())
    }
}

pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Strict inverse of [`date_key`]: non-canonical spellings such as
/// `2026-1-5` are rejected.
pub fn parse_date_key(value: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(value, DATE_KEY_FORMAT).ok()?;
    (date_key(date) == value).then_some(date)
}

pub fn days_before(today: NaiveDate, days: u32) -> Option<NaiveDate> {
    today.checked_sub_signed(Duration::days(i64::from(days)))
}

pub fn weekday_label(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn date_key_is_zero_padded() {
        assert_eq!(date_key(ymd(2026, 1, 5)), "2026-01-05");
    }

    #[test]
    fn parse_date_key_rejects_non_canonical_input() {
        assert_eq!(parse_date_key("2026-01-05"), Some(ymd(2026, 1, 5)));
        assert_eq!(parse_date_key("2026-1-5"), None);
        assert_eq!(parse_date_key("2026-02-30"), None);
        assert_eq!(parse_date_key("yesterday"), None);
        assert_eq!(parse_date_key(""), None);
    }

    #[test]
    fn days_before_crosses_leap_day_and_year_end() {
        assert_eq!(days_before(ymd(2024, 3, 1), 1), Some(ymd(2024, 2, 29)));
        assert_eq!(days_before(ymd(2026, 1, 1), 1), Some(ymd(2025, 12, 31)));
        assert_eq!(days_before(ymd(2026, 1, 1), 0), Some(ymd(2026, 1, 1)));
    }

    #[test]
    fn fixed_zone_uses_its_own_calendar_day() {
        let instant = Utc.with_ymd_and_hms(2026, 3, 10, 23, 30, 0).unwrap();
        let utc = CalendarZone::from_offset_minutes(0).unwrap();
        let tokyo = CalendarZone::from_offset_minutes(9 * 60).unwrap();
        let new_york = CalendarZone::from_offset_minutes(-5 * 60).unwrap();

        assert_eq!(utc.date_of(instant), ymd(2026, 3, 10));
        assert_eq!(tokyo.date_of(instant), ymd(2026, 3, 11));
        assert_eq!(new_york.date_of(instant), ymd(2026, 3, 10));
    }

    #[test]
    fn offsets_beyond_a_day_are_rejected() {
        assert!(CalendarZone::from_offset_minutes(24 * 60).is_none());
        assert!(CalendarZone::from_offset_minutes(i32::MAX).is_none());
    }

    #[test]
    fn weekday_labels_are_short_names() {
        assert_eq!(weekday_label(ymd(2026, 10, 19)), "Mon");
        assert_eq!(weekday_label(ymd(2026, 10, 25)), "Sun");
    }
}
