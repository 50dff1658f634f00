use serde::Deserialize;
use thiserror::Error;

use crate::time::period::ParsePeriodError;

#[derive(Error, Debug)]
pub enum ManagerError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    JsonParse(#[from] serde_json::Error),

    #[error("key '{0}' not found")]
    NameNotFound(String),

    #[error(transparent)]
    PeriodParse(#[from] ParsePeriodError),

    #[error("invalid holiday in calendar '{calendar}': {reason}")]
    InvalidHoliday {
        calendar: String,
        reason: String
    },

    #[error("invalid rate in benchmark '{benchmark}': {reason}")]
    InvalidRate {
        benchmark: String,
        reason: String
    }
}

/// Deserializes `json_value` into `T`, reporting failures as `JsonParse`.
pub fn parse_json_value<T>(json_value: serde_json::Value) -> Result<T, ManagerError>
where
    T: for<'de> Deserialize<'de>
{
    Ok(serde_json::from_value(json_value)?)
}
