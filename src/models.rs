use crate::habits::Habit;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    #[serde(default)]
    pub habits: Vec<Habit>,
}

impl AppData {
    pub fn find_mut(&mut self, id: Uuid) -> Option<&mut Habit> {
        self.habits.iter_mut().find(|habit| habit.id == id)
    }

    pub fn remove(&mut self, id: Uuid) -> Option<Habit> {
        let index = self.habits.iter().position(|habit| habit.id == id)?;
        Some(self.habits.remove(index))
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateHabitRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct SeriesQuery {
    pub days: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToggleResponse {
    pub date: String,
    pub completed: bool,
    pub habit: Habit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: String,
    pub weekday: String,
    pub completion_percentage: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Summary {
    pub total_habits: usize,
    pub completed_today: usize,
    pub completion_rate: u8,
    pub total_streak_sum: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub date: String,
    pub summary: Summary,
    pub last_7_days: Vec<DailyPoint>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReportRow {
    pub id: Uuid,
    pub name: String,
    pub completed_today: bool,
    pub streak: u32,
    pub last_completed: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub report_date: String,
    pub summary: Summary,
    pub habits: Vec<ReportRow>,
    pub last_7_days: Vec<DailyPoint>,
}
