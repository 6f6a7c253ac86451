use std::panic::Location;
use std::result::Result as StdResult;

use chrono::NaiveDate;
use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Already played on {date}, come back tomorrow {location}")]
    AlreadyPlayed {
        date: NaiveDate,
        location: ErrorLocation,
    },
}

impl GameError {
    #[track_caller]
    pub fn already_played(date: NaiveDate) -> Self {
        Self::AlreadyPlayed {
            date,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, GameError>;
