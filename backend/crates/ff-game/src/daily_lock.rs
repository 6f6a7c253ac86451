use crate::{GameError, Result as GameResult};

use ff_store::SessionStore;

use chrono::NaiveDate;
use log::info;

/// One game per calendar day, recorded in the store when a game starts.
pub struct DailyPlayLock;

impl DailyPlayLock {
    pub fn can_play(store: &SessionStore, today: NaiveDate) -> bool {
        store.played_on() != Some(today)
    }

    /// Claims today's play. Fails if today was already claimed.
    #[track_caller]
    pub fn claim(store: &mut SessionStore, today: NaiveDate) -> GameResult<()> {
        if !Self::can_play(store, today) {
            return Err(GameError::already_played(today));
        }

        store.set_played_on(today);
        info!("Game started for {today}");
        Ok(())
    }
}
