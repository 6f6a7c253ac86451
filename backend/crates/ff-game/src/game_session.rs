use crate::{
    COLLECTIBLE_MARGIN, Direction, GameSettings, PLAYER_BOUND, PLAYER_HITBOX, PLAYER_START, Point,
    Rect,
};

use log::{debug, info};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
        }
    }

    pub fn is_over(&self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// One run of the collect-the-coins game.
///
/// Moves and ticks are ignored once the game is over.
#[derive(Debug, Clone)]
pub struct GameSession {
    settings: GameSettings,
    walls: Vec<Rect>,
    player: Point,
    collectibles: Vec<Point>,
    target: usize,
    score: usize,
    remaining_secs: u32,
    status: GameStatus,
}

impl GameSession {
    /// Places `settings.collectibles` coins at random inside the arena.
    pub fn new<R: Rng + ?Sized>(settings: GameSettings, walls: Vec<Rect>, rng: &mut R) -> Self {
        let max_x = (settings.arena_width - COLLECTIBLE_MARGIN).max(1.0);
        let max_y = (settings.arena_height - COLLECTIBLE_MARGIN).max(1.0);
        let positions = (0..settings.collectibles)
            .map(|_| Point::new(rng.random_range(0.0..max_x), rng.random_range(0.0..max_y)))
            .collect();

        Self::with_collectibles(settings, walls, positions)
    }

    /// Fixed coin positions; the target is the number of coins given.
    pub fn with_collectibles(
        settings: GameSettings,
        walls: Vec<Rect>,
        collectibles: Vec<Point>,
    ) -> Self {
        info!(
            "New game: {} collectibles, {}s, {} walls",
            collectibles.len(),
            settings.duration_secs,
            walls.len()
        );

        Self {
            remaining_secs: settings.duration_secs,
            target: collectibles.len(),
            settings,
            walls,
            player: PLAYER_START,
            collectibles,
            score: 0,
            status: GameStatus::Playing,
        }
    }

    pub fn player(&self) -> Point {
        self.player
    }

    pub fn collectibles(&self) -> &[Point] {
        &self.collectibles
    }

    pub fn walls(&self) -> &[Rect] {
        &self.walls
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Remaining time as `m:ss`.
    pub fn clock(&self) -> String {
        format!("{}:{:02}", self.remaining_secs / 60, self.remaining_secs % 60)
    }

    /// Moves one step, then collects anything in reach.
    ///
    /// Returns how many coins this move picked up. A move into a wall leaves
    /// the player where it was.
    pub fn move_player(&mut self, direction: Direction) -> usize {
        if self.status.is_over() {
            return 0;
        }

        let (dx, dy) = direction.delta(self.settings.step);
        let next = Point::new(
            (self.player.x + dx).clamp(0.0, self.max_x()),
            (self.player.y + dy).clamp(0.0, self.max_y()),
        );

        if self.hits_wall(next) {
            debug!("Move {direction:?} blocked at ({}, {})", next.x, next.y);
            return 0;
        }

        self.player = next;
        self.collect()
    }

    /// Advances the countdown by one second.
    pub fn tick(&mut self) -> GameStatus {
        if self.status.is_over() {
            return self.status;
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.status = GameStatus::Lost;
            info!("Time up with {}/{} collected", self.score, self.target);
        }
        self.status
    }

    fn collect(&mut self) -> usize {
        let player = self.player;
        let radius = self.settings.pickup_radius;
        let before = self.collectibles.len();
        self.collectibles.retain(|coin| player.distance(coin) >= radius);

        let picked = before - self.collectibles.len();
        self.score += picked;
        if picked > 0 && self.score >= self.target {
            self.status = GameStatus::Won;
            info!("All {} collected with {} left", self.target, self.clock());
        }
        picked
    }

    fn hits_wall(&self, at: Point) -> bool {
        let hitbox = Rect::square(at, PLAYER_HITBOX);
        self.walls.iter().any(|wall| wall.overlaps(&hitbox))
    }

    fn max_x(&self) -> f64 {
        (self.settings.arena_width - PLAYER_BOUND).max(0.0)
    }

    fn max_y(&self) -> f64 {
        (self.settings.arena_height - PLAYER_BOUND).max(0.0)
    }
}
