/// Tunables for one game. Validated upstream by the config layer.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSettings {
    pub duration_secs: u32,
    pub collectibles: usize,
    pub arena_width: f64,
    pub arena_height: f64,
    pub step: f64,
    pub pickup_radius: f64,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            duration_secs: 60,
            collectibles: 5,
            arena_width: 400.0,
            arena_height: 400.0,
            step: 10.0,
            pickup_radius: 30.0,
        }
    }
}
