use crate::calendar::CalendarZone;
use crate::models::AppData;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub zone: CalendarZone,
    pub data: Arc<Mutex<AppData>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, zone: CalendarZone, data: AppData) -> Self {
        Self {
            data_path,
            zone,
            data: Arc::new(Mutex::new(data)),
        }
    }
}
