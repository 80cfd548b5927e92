use crate::calendar::date_key;
use crate::errors::AppError;
use crate::habits::{sort_newest_first, Habit, HabitName};
use crate::models::{
    AppData, CreateHabitRequest, DailyPoint, Report, SeriesQuery, StatsResponse, ToggleResponse,
};
use crate::report::build_report_at;
use crate::state::AppState;
use crate::stats::{build_stats_at, compute_weekly_series, DEFAULT_WINDOW_DAYS};
use crate::storage::persist_data;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{NaiveDate, Utc};
use tracing::info;
use uuid::Uuid;

const MAX_WINDOW_DAYS: u32 = 366;

pub async fn list_habits(State(state): State<AppState>) -> Json<Vec<Habit>> {
    let today = state.zone.today();
    let data = state.data.lock().await;
    Json(fresh_snapshot(&data, today))
}

// Mutations build the next store on a copy and swap it in only once it is on
// disk, so a failed write leaves the served state untouched.
pub async fn create_habit(
    State(state): State<AppState>,
    Json(payload): Json<CreateHabitRequest>,
) -> Result<(StatusCode, Json<Habit>), AppError> {
    let name = HabitName::parse(&payload.name)?;
    let habit = Habit::new(name, Utc::now());

    let mut data = state.data.lock().await;
    let mut next = data.clone();
    next.habits.push(habit.clone());
    persist_data(&state.data_path, &next).await?;
    *data = next;

    info!(id = %habit.id, name = %habit.name, "habit created");
    Ok((StatusCode::CREATED, Json(habit)))
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    let mut next = data.clone();
    let removed = next
        .remove(id)
        .ok_or_else(|| AppError::not_found(format!("habit {id} not found")))?;
    persist_data(&state.data_path, &next).await?;
    *data = next;

    info!(id = %removed.id, name = %removed.name, "habit deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn toggle_habit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ToggleResponse>, AppError> {
    let now = Utc::now();
    let today = state.zone.date_of(now);

    let mut data = state.data.lock().await;
    let mut next = data.clone();
    let habit = next
        .find_mut(id)
        .ok_or_else(|| AppError::not_found(format!("habit {id} not found")))?;
    let completed = habit.toggle(today, now);
    let habit = habit.clone();
    persist_data(&state.data_path, &next).await?;
    *data = next;

    info!(id = %habit.id, completed, streak = habit.streak, "habit toggled");
    Ok(Json(ToggleResponse {
        date: date_key(today),
        completed,
        habit,
    }))
}

pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let today = state.zone.today();
    let data = state.data.lock().await;
    Json(build_stats_at(today, &fresh_snapshot(&data, today)))
}

pub async fn get_series(
    State(state): State<AppState>,
    Query(query): Query<SeriesQuery>,
) -> Result<Json<Vec<DailyPoint>>, AppError> {
    let days = query.days.unwrap_or(DEFAULT_WINDOW_DAYS);
    if days == 0 || days > MAX_WINDOW_DAYS {
        return Err(AppError::bad_request(format!(
            "days must be between 1 and {MAX_WINDOW_DAYS}"
        )));
    }

    let today = state.zone.today();
    let data = state.data.lock().await;
    Ok(Json(compute_weekly_series(&data.habits, today, days)))
}

pub async fn get_report(State(state): State<AppState>) -> Json<Report> {
    let now = Utc::now();
    let today = state.zone.date_of(now);
    let data = state.data.lock().await;
    Json(build_report_at(now, today, &fresh_snapshot(&data, today)))
}

/// Copy of the store with streaks brought up to `today`, newest first.
/// Stored streaks go stale once a day passes without a toggle.
fn fresh_snapshot(data: &AppData, today: NaiveDate) -> Vec<Habit> {
    let mut habits = data.habits.clone();
    for habit in &mut habits {
        habit.refresh_streak(today);
    }
    sort_newest_first(&mut habits);
    habits
}
