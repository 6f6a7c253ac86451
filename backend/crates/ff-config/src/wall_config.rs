use serde::Deserialize;

/// A maze wall in arena pixels, `[[game.walls]]` in TOML.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct WallConfig {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}
