use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid shop mode: {value} {location}")]
    InvalidShopMode {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid theme override: {value} {location}")]
    InvalidThemeOverride {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn invalid_shop_mode(value: impl Into<String>) -> Self {
        Self::InvalidShopMode {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_theme_override(value: impl Into<String>) -> Self {
        Self::InvalidThemeOverride {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
