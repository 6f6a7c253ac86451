use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIRECTORY,
    GameConfig, LoggingConfig, StorageConfig, UiConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub ui: UiConfig,
    pub game: GameConfig,
}

impl Config {
    /// Load config from the default config directory.
    ///
    /// Loading order:
    /// 1. Check for FF_CONFIG_DIR env var, else use ./.fundsflow/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply FF_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        Self::load_from(&Self::config_dir()?)
    }

    /// Same as load(), with an explicit config directory.
    pub fn load_from(config_dir: &Path) -> ConfigErrorResult<Self> {
        if !config_dir.exists() {
            std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.to_path_buf(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: FF_CONFIG_DIR env var > ./.fundsflow/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIRECTORY))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.storage.validate()?;
        self.ui.validate()?;
        self.game.validate()?;
        Ok(())
    }

    /// Absolute directory holding the storage file.
    pub fn storage_dir(&self, config_dir: &Path) -> PathBuf {
        config_dir.join(&self.storage.dir)
    }

    /// Absolute log file path, if logging to a file.
    pub fn log_file_path(&self, config_dir: &Path) -> Option<PathBuf> {
        self.logging
            .file
            .as_ref()
            .map(|file| config_dir.join(&self.logging.dir).join(file))
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  storage: {}/{}", self.storage.dir, self.storage.file);
        info!(
            "  logging: {} (colored: {}, output: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.destination()
        );
        info!(
            "  ui: navigate_delay={}ms, toast={}ms, theme_override={:?}",
            self.ui.navigate_delay_ms, self.ui.toast_dismiss_ms, self.ui.theme_override
        );
        info!(
            "  game: {}s, {} collectibles, arena={}x{}, walls={}",
            self.game.duration_secs,
            self.game.collectibles,
            self.game.arena_width,
            self.game.arena_height,
            self.game.walls.len()
        );
    }

    fn apply_env_overrides(&mut self) {
        // Storage
        Self::apply_env_string("FF_STORAGE_DIR", &mut self.storage.dir);
        Self::apply_env_string("FF_STORAGE_FILE", &mut self.storage.file);

        // Logging
        Self::apply_env_parse("FF_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("FF_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("FF_LOG_FILE", &mut self.logging.file);

        // Ui
        Self::apply_env_parse("FF_NAVIGATE_DELAY_MS", &mut self.ui.navigate_delay_ms);
        Self::apply_env_parse("FF_TOAST_DISMISS_MS", &mut self.ui.toast_dismiss_ms);
        Self::apply_env_option_parse("FF_THEME_OVERRIDE", &mut self.ui.theme_override);

        // Game
        Self::apply_env_parse("FF_GAME_DURATION_SECS", &mut self.game.duration_secs);
        Self::apply_env_parse("FF_GAME_COLLECTIBLES", &mut self.game.collectibles);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = if val.is_empty() { None } else { Some(val) };
        }
    }

    /// Helper: Apply environment variable override for optional parseable values.
    /// An empty value clears the option; an unparseable one is ignored.
    fn apply_env_option_parse<T: std::str::FromStr>(var_name: &str, target: &mut Option<T>) {
        if let Ok(val) = std::env::var(var_name) {
            if val.is_empty() {
                *target = None;
            } else if let Ok(parsed) = val.parse() {
                *target = Some(parsed);
            }
        }
    }
}
