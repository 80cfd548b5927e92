pub mod app;
pub mod calendar;
pub mod completion;
pub mod config;
pub mod errors;
pub mod habits;
pub mod handlers;
pub mod models;
pub mod report;
pub mod state;
pub mod stats;
pub mod storage;
pub mod streak;

pub use app::router;
pub use calendar::CalendarZone;
pub use completion::is_completed_on;
pub use config::Config;
pub use habits::{Habit, HabitError, HabitName};
pub use state::AppState;
pub use stats::{compute_summary, compute_weekly_series};
pub use storage::load_data;
pub use streak::compute_streak;
