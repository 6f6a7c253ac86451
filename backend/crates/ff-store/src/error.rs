use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures of the JSON file backend.
///
/// Never returned through `KeyValueStore`; they only decide whether the file
/// backend opens, and are logged otherwise.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage directory {path} is unusable: {source} {location}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Cannot read {path}: {source} {location}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Cannot write {path}: {source} {location}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("{path} is not a storage map: {message} {location}")]
    Corrupted {
        path: PathBuf,
        message: String,
        location: ErrorLocation,
    },

    #[error("Cannot encode the storage map: {source} {location}")]
    Encode {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Cannot move {path} aside: {source} {location}")]
    Backup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl StoreError {
    /// What the user should do once the app has fallen back to memory.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::Directory { .. } | Self::Write { .. } => {
                "Points, profiles and the admin flag will be forgotten on exit. \
                   Point FF_STORAGE_DIR at a writable directory to keep them."
            }
            Self::Read { .. } => "Check the storage file's permissions, then restart.",
            Self::Corrupted { .. } | Self::Backup { .. } => {
                "Saved data was reset. Look for a .corrupted copy next to the storage file."
            }
            Self::Encode { .. } => "Storage data could not be encoded. Please report this.",
        }
    }

    #[track_caller]
    pub fn directory(path: PathBuf, source: std::io::Error) -> Self {
        Self::Directory {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn read(path: PathBuf, source: std::io::Error) -> Self {
        Self::Read {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn write(path: PathBuf, source: std::io::Error) -> Self {
        Self::Write {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn corrupted(path: PathBuf, message: impl Into<String>) -> Self {
        Self::Corrupted {
            path,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn backup(path: PathBuf, source: std::io::Error) -> Self {
        Self::Backup {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Encode {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
