pub mod daily_lock;
pub mod direction;
pub mod error;
pub mod game_session;
pub mod game_settings;
pub mod geometry;

pub use daily_lock::DailyPlayLock;
pub use direction::Direction;
pub use error::{GameError, Result};
pub use game_session::{GameSession, GameStatus};
pub use game_settings::GameSettings;
pub use geometry::{Point, Rect};

/// Player box used for clamping to the arena.
const PLAYER_BOUND: f64 = 40.0;
/// Player box used for wall collisions.
const PLAYER_HITBOX: f64 = 26.0;
/// Collectibles are kept this far from the right and bottom edges.
const COLLECTIBLE_MARGIN: f64 = 30.0;
const PLAYER_START: Point = Point { x: 180.0, y: 180.0 };

#[cfg(test)]
mod tests;
