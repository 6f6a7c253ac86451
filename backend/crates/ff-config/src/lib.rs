mod config;
mod error;
mod game_config;
mod log_level;
mod logging_config;
mod storage_config;
mod ui_config;
mod wall_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use game_config::GameConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;
pub use ui_config::UiConfig;
pub use wall_config::WallConfig;

const CONFIG_DIR_ENV: &str = "FF_CONFIG_DIR";
const DEFAULT_CONFIG_DIRECTORY: &str = ".fundsflow";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_STORAGE_DIRECTORY: &str = "data";
const DEFAULT_STORAGE_FILENAME: &str = "storage.json";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_NAVIGATE_DELAY_MS: u64 = 300;
const DEFAULT_TOAST_DISMISS_MS: u64 = 2500;
const MAX_DELAY_MS: u64 = 10_000;

const DEFAULT_GAME_DURATION_SECS: u32 = 60;
const DEFAULT_GAME_COLLECTIBLES: usize = 5;
const DEFAULT_ARENA_WIDTH: u32 = 400;
const DEFAULT_ARENA_HEIGHT: u32 = 400;
const DEFAULT_STEP: u32 = 10;
const DEFAULT_PICKUP_RADIUS: f64 = 30.0;
const MIN_ARENA_SIZE: u32 = 80;

#[cfg(test)]
mod tests;
