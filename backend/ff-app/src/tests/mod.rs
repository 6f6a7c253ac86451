mod app;

use crate::App;

use ff_config::Config;
use ff_core::Roster;
use ff_store::SessionStore;

use std::io::Cursor;

use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub(crate) fn ordinary_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
}

pub(crate) fn fresh_store() -> SessionStore {
    SessionStore::in_memory(Roster::household())
}

/// Runs the app over `script` and returns the store and everything printed.
pub(crate) fn run_script(
    store: SessionStore,
    today: NaiveDate,
    script: &str,
) -> (SessionStore, String) {
    let mut config = Config::default();
    config.ui.navigate_delay_ms = 0;

    let mut app = App::new(
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
        store,
        &config,
        today,
        Box::new(StdRng::seed_from_u64(42)),
    );
    app.run().unwrap();

    let (store, output) = app.into_parts();
    (store, String::from_utf8(output).unwrap())
}
