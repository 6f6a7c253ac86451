//! Seasonal colour scheme picked from the calendar date.

use crate::{CoreError, Result as CoreErrorResult};

use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

const CANDY_CANE_BORDER: &str = "repeating-linear-gradient(45deg,#f97373 0 10px,#ffffff 10px 20px)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    Default,
    /// Christmas Eve
    Night,
    /// Christmas Day
    Day,
    /// The rest of December
    Season,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "",
            Self::Night => "night",
            Self::Day => "day",
            Self::Season => "season",
        }
    }
}

/// Forces a Christmas theme regardless of the date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeOverride {
    Xmas,
    XmasEve,
    XmasDay,
}

impl FromStr for ThemeOverride {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "xmas" => Ok(Self::Xmas),
            "xmas_eve" => Ok(Self::XmasEve),
            "xmas_day" => Ok(Self::XmasDay),
            _ => Err(CoreError::invalid_theme_override(s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub background: &'static str,
    pub accent: &'static str,
    pub text: &'static str,
    pub candy_border: Option<&'static str>,
    pub mode: ThemeMode,
}

impl Theme {
    /// Picks the theme for `date`. An override always wins.
    pub fn for_date(date: NaiveDate, theme_override: Option<ThemeOverride>) -> Self {
        let mode = match theme_override {
            Some(ThemeOverride::XmasEve) => ThemeMode::Night,
            Some(ThemeOverride::XmasDay) => ThemeMode::Day,
            Some(ThemeOverride::Xmas) => ThemeMode::Season,
            None if date.month() == 12 => match date.day() {
                24 => ThemeMode::Night,
                25 => ThemeMode::Day,
                _ => ThemeMode::Season,
            },
            None => ThemeMode::Default,
        };
        Self::for_mode(mode)
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Night => Self {
                background: "radial-gradient(circle at top,#020617,#111827 60%)",
                accent: "#f97316",
                text: "#e5e7eb",
                candy_border: Some(CANDY_CANE_BORDER),
                mode,
            },
            ThemeMode::Day => Self {
                background: "radial-gradient(circle at top,#fef9c3,#b91c1c 65%)",
                accent: "#16a34a",
                text: "#0f172a",
                candy_border: Some(CANDY_CANE_BORDER),
                mode,
            },
            ThemeMode::Season => Self {
                background: "radial-gradient(circle at top,#fee2e2,#064e3b 60%)",
                accent: "#b91c1c",
                text: "#f9fafb",
                candy_border: Some(CANDY_CANE_BORDER),
                mode,
            },
            ThemeMode::Default => Self {
                background: "radial-gradient(circle at top,#4c1d95,#020617 55%)",
                accent: "#8b5cf6",
                text: "#e5e7eb",
                candy_border: None,
                mode,
            },
        }
    }

    pub fn is_festive(&self) -> bool {
        self.candy_border.is_some()
    }
}
