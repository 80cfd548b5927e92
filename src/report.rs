use crate::calendar::date_key;
use crate::habits::Habit;
use crate::models::{Report, ReportRow};
use crate::stats::{compute_summary, compute_weekly_series, DEFAULT_WINDOW_DAYS};
use chrono::{DateTime, NaiveDate, Utc};

/// Data behind the printable summary page. Layout and printing happen
/// elsewhere; rows keep the order of `habits`.
pub fn build_report_at(now: DateTime<Utc>, today: NaiveDate, habits: &[Habit]) -> Report {
    let rows = habits
        .iter()
        .map(|habit| ReportRow {
            id: habit.id,
            name: habit.name.clone(),
            completed_today: habit.is_completed_on(today),
            streak: habit.streak,
            last_completed: habit.last_completed().map(date_key),
        })
        .collect();

    Report {
        generated_at: now,
        report_date: today.format("%B %-d, %Y").to_string(),
        summary: compute_summary(habits, today),
        habits: rows,
        last_7_days: compute_weekly_series(habits, today, DEFAULT_WINDOW_DAYS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habits::HabitName;
    use chrono::TimeZone;

    fn habit(name: &str, dates: &[&str]) -> Habit {
        let created = Utc.with_ymd_and_hms(2026, 10, 1, 9, 0, 0).unwrap();
        let mut habit = Habit::new(HabitName::parse(name).unwrap(), created);
        habit.completed_dates = dates.iter().map(|date| date.to_string()).collect();
        habit
    }

    #[test]
    fn report_lists_each_habit_with_status() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 15, 0, 0).unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let mut habits = vec![
            habit("Run", &["2026-10-18", "2026-10-19"]),
            habit("Read", &["2026-10-12"]),
            habit("Sleep early", &[]),
        ];
        for habit in &mut habits {
            habit.refresh_streak(today);
        }

        let report = build_report_at(now, today, &habits);

        assert_eq!(report.generated_at, now);
        assert_eq!(report.report_date, "October 19, 2026");
        assert_eq!(report.summary.total_habits, 3);
        assert_eq!(report.summary.completed_today, 1);
        assert_eq!(report.summary.completion_rate, 33);
        assert_eq!(report.summary.total_streak_sum, 2);

        let run = &report.habits[0];
        assert_eq!(run.name, "Run");
        assert!(run.completed_today);
        assert_eq!(run.streak, 2);
        assert_eq!(run.last_completed.as_deref(), Some("2026-10-19"));

        assert!(!report.habits[1].completed_today);
        assert_eq!(report.habits[1].last_completed.as_deref(), Some("2026-10-12"));
        assert_eq!(report.habits[2].last_completed, None);

        assert_eq!(report.last_7_days.len(), 7);
        assert_eq!(report.last_7_days[5].completion_percentage, 33);
        assert_eq!(report.last_7_days[6].completion_percentage, 33);
    }

    #[test]
    fn report_date_has_no_day_padding() {
        let now = Utc.with_ymd_and_hms(2026, 3, 4, 0, 0, 0).unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 3, 4).unwrap();
        let report = build_report_at(now, today, &[]);
        assert_eq!(report.report_date, "March 4, 2026");
        assert!(report.habits.is_empty());
        assert_eq!(report.summary.completion_rate, 0);
    }
}
