mod daily_lock;
mod game_session;

use crate::{GameSettings, Point};

/// Coins far from the start position.
pub(crate) fn far_coins(count: usize) -> Vec<Point> {
    (0..count).map(|i| Point::new(10.0 + 40.0 * i as f64, 10.0)).collect()
}

pub(crate) fn settings() -> GameSettings {
    GameSettings::default()
}
