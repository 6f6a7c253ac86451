use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Unknown account: {name} {location}")]
    UnknownAccount {
        name: String,
        location: ErrorLocation,
    },
}

impl SessionError {
    #[track_caller]
    pub fn unknown_account(name: impl Into<String>) -> Self {
        Self::UnknownAccount {
            name: name.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, SessionError>;
