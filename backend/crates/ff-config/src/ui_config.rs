use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_NAVIGATE_DELAY_MS, DEFAULT_TOAST_DISMISS_MS,
    MAX_DELAY_MS,
};

use ff_core::ThemeOverride;

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Pause between a success notification and the page change it announces
    pub navigate_delay_ms: u64,
    /// How long a notification stays on screen
    pub toast_dismiss_ms: u64,
    /// Forces a Christmas theme; None picks by date
    pub theme_override: Option<ThemeOverride>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            navigate_delay_ms: DEFAULT_NAVIGATE_DELAY_MS,
            toast_dismiss_ms: DEFAULT_TOAST_DISMISS_MS,
            theme_override: None,
        }
    }
}

impl UiConfig {
    pub fn navigate_delay(&self) -> Duration {
        Duration::from_millis(self.navigate_delay_ms)
    }

    pub fn toast_dismiss(&self) -> Duration {
        Duration::from_millis(self.toast_dismiss_ms)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.navigate_delay_ms > MAX_DELAY_MS {
            return Err(ConfigError::ui(format!(
                "ui.navigate_delay_ms must be at most {MAX_DELAY_MS}, got {}",
                self.navigate_delay_ms
            )));
        }

        if self.toast_dismiss_ms == 0 || self.toast_dismiss_ms > MAX_DELAY_MS {
            return Err(ConfigError::ui(format!(
                "ui.toast_dismiss_ms must be between 1 and {MAX_DELAY_MS}, got {}",
                self.toast_dismiss_ms
            )));
        }

        Ok(())
    }
}
