use crate::handlers;
use crate::state::AppState;
use axum::{routing::{delete, get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/habits", get(handlers::list_habits).post(handlers::create_habit))
        .route("/api/habits/:id", delete(handlers::delete_habit))
        .route("/api/habits/:id/toggle", post(handlers::toggle_habit))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/stats/series", get(handlers::get_series))
        .route("/api/report", get(handlers::get_report))
        .with_state(state)
}
