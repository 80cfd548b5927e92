use crate::calendar::{date_key, days_before, weekday_label};
use crate::habits::Habit;
use crate::models::{DailyPoint, StatsResponse, Summary};
use chrono::NaiveDate;

pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// `part / total` as a whole percent, rounding halves up. Zero when there is
/// nothing to divide by.
pub fn percentage(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let part = part.min(total) as u64;
    let total = total as u64;
    ((200 * part + total) / (2 * total)) as u8
}

pub fn build_stats_at(today: NaiveDate, habits: &[Habit]) -> StatsResponse {
    StatsResponse {
        date: date_key(today),
        summary: compute_summary(habits, today),
        last_7_days: compute_weekly_series(habits, today, DEFAULT_WINDOW_DAYS),
    }
}

/// Per-day completion percentages for the `window_days` days ending at
/// `today`, oldest first.
pub fn compute_weekly_series(habits: &[Habit], today: NaiveDate, window_days: u32) -> Vec<DailyPoint> {
    // Days before the earliest representable date are skipped outright.
    let representable = (today - NaiveDate::MIN).num_days() + 1;
    let window = i64::from(window_days).min(representable) as u32;

    let mut series = Vec::new();
    for offset in (0..window).rev() {
        let Some(date) = days_before(today, offset) else {
            continue;
        };
        let completed = habits.iter().filter(|habit| habit.is_completed_on(date)).count();
        series.push(DailyPoint {
            date: date_key(date),
            weekday: weekday_label(date).to_string(),
            completion_percentage: percentage(completed, habits.len()),
        });
    }
    series
}

/// Totals for `today`. The streak sum reads each habit's cached `streak`.
pub fn compute_summary(habits: &[Habit], today: NaiveDate) -> Summary {
    let total_habits = habits.len();
    let completed_today = habits.iter().filter(|habit| habit.is_completed_on(today)).count();
    let total_streak_sum = habits.iter().map(|habit| u64::from(habit.streak)).sum();

    Summary {
        total_habits,
        completed_today,
        completion_rate: percentage(completed_today, total_habits),
        total_streak_sum,
    }
}
