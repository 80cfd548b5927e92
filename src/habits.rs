use crate::calendar::{date_key, parse_date_key};
use crate::completion::is_completed_on;
use crate::streak::compute_streak;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HabitError {
    #[error("habit name must not be empty")]
    EmptyName,
}

/// A trimmed, non-empty habit label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitName(String);

impl HabitName {
    pub fn parse(raw: &str) -> Result<Self, HabitError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(HabitError::EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub id: Uuid,
    pub name: String,
    /// Canonical `YYYY-MM-DD` keys in insertion order. Kept as strings so a
    /// malformed stored entry survives a load and simply never matches.
    #[serde(default)]
    pub completed_dates: Vec<String>,
    /// Cached value of [`compute_streak`] over `completed_dates`.
    #[serde(default)]
    pub streak: u32,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

impl Habit {
    pub fn new(name: HabitName, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into_inner(),
            completed_dates: Vec::new(),
            streak: 0,
            created_at: now,
            last_updated: None,
        }
    }

    pub fn is_completed_on(&self, date: NaiveDate) -> bool {
        is_completed_on(&self.completed_dates, date)
    }

    /// Marks or unmarks `today` and recomputes the streak. Returns whether
    /// the habit is completed today afterwards.
    pub fn toggle(&mut self, today: NaiveDate, now: DateTime<Utc>) -> bool {
        let key = date_key(today);
        let completed = if self.is_completed_on(today) {
            self.completed_dates.retain(|entry| *entry != key);
            false
        } else {
            self.completed_dates.push(key);
            true
        };
        self.refresh_streak(today);
        self.last_updated = Some(now);
        completed
    }

    /// Recomputes the cached streak; returns true when it changed.
    pub fn refresh_streak(&mut self, today: NaiveDate) -> bool {
        let streak = compute_streak(&self.completed_dates, today);
        let changed = streak != self.streak;
        self.streak = streak;
        changed
    }

    pub fn last_completed(&self) -> Option<NaiveDate> {
        self.completed_dates
            .iter()
            .filter_map(|entry| parse_date_key(entry))
            .max()
    }
}

pub fn sort_newest_first(habits: &mut [Habit]) {
    habits.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
