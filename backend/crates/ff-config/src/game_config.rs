use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ARENA_HEIGHT, DEFAULT_ARENA_WIDTH,
    DEFAULT_GAME_COLLECTIBLES, DEFAULT_GAME_DURATION_SECS, DEFAULT_PICKUP_RADIUS, DEFAULT_STEP,
    MIN_ARENA_SIZE, WallConfig,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub duration_secs: u32,
    pub collectibles: usize,
    pub arena_width: u32,
    pub arena_height: u32,
    pub step: u32,
    pub pickup_radius: f64,
    /// Empty for the open arena
    pub walls: Vec<WallConfig>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_GAME_DURATION_SECS,
            collectibles: DEFAULT_GAME_COLLECTIBLES,
            arena_width: DEFAULT_ARENA_WIDTH,
            arena_height: DEFAULT_ARENA_HEIGHT,
            step: DEFAULT_STEP,
            pickup_radius: DEFAULT_PICKUP_RADIUS,
            walls: Vec::new(),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.duration_secs == 0 {
            return Err(ConfigError::game("game.duration_secs must be positive"));
        }

        if self.collectibles == 0 {
            return Err(ConfigError::game("game.collectibles must be positive"));
        }

        if self.arena_width < MIN_ARENA_SIZE || self.arena_height < MIN_ARENA_SIZE {
            return Err(ConfigError::game(format!(
                "game arena must be at least {MIN_ARENA_SIZE}x{MIN_ARENA_SIZE}, got {}x{}",
                self.arena_width, self.arena_height
            )));
        }

        if self.step == 0 {
            return Err(ConfigError::game("game.step must be positive"));
        }

        if !self.pickup_radius.is_finite() || self.pickup_radius <= 0.0 {
            return Err(ConfigError::game(
                "game.pickup_radius must be a positive number",
            ));
        }

        for (i, wall) in self.walls.iter().enumerate() {
            let sizes = [wall.x, wall.y, wall.width, wall.height];
            if sizes.iter().any(|v| !v.is_finite()) || wall.width <= 0.0 || wall.height <= 0.0 {
                return Err(ConfigError::game(format!(
                    "game.walls[{i}] needs finite coordinates and a positive size"
                )));
            }
        }

        Ok(())
    }
}
