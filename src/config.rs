use crate::calendar::CalendarZone;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_PATH: &str = "data/habits.json";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("HABITS_UTC_OFFSET_MINUTES must be a whole number of minutes, got {0:?}")]
    InvalidOffset(String),

    #[error("HABITS_UTC_OFFSET_MINUTES is out of range: {0}")]
    OffsetOutOfRange(i32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    pub zone: CalendarZone,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let data_path = lookup("HABITS_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        let zone = match lookup("HABITS_UTC_OFFSET_MINUTES") {
            None => CalendarZone::Local,
            Some(raw) => {
                let minutes = raw
                    .trim()
                    .parse::<i32>()
                    .map_err(|_| ConfigError::InvalidOffset(raw.clone()))?;
                CalendarZone::from_offset_minutes(minutes)
                    .ok_or(ConfigError::OffsetOutOfRange(minutes))?
            }
        };

        Ok(Self {
            port,
            data_path,
            zone,
        })
    }
}
