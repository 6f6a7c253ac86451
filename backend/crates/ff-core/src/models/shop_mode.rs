use crate::{CoreError, Result as CoreErrorResult};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which shop the hub currently offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShopMode {
    /// Normal shop open, Shop+ shown as closed
    #[default]
    Normal,
    /// Shop+ open, normal shop hidden
    Plus,
}

impl ShopMode {
    /// Persisted string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Plus => "plus",
        }
    }
}

impl FromStr for ShopMode {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "normal" => Ok(Self::Normal),
            "plus" => Ok(Self::Plus),
            _ => Err(CoreError::invalid_shop_mode(s)),
        }
    }
}

impl std::fmt::Display for ShopMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
