use ff_app::{App, Cli, logger};
use ff_config::Config;
use ff_core::Roster;
use ff_store::{SessionStore, open_with_fallback};

use std::error::Error;
use std::io;

use clap::Parser;
use log::info;

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // Load and validate configuration
    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => Config::config_dir()?,
    };
    let config = Config::load_from(&config_dir)?;
    config.validate()?;

    let log_file_path = config.log_file_path(&config_dir);
    if let Some(parent) = log_file_path.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(parent)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting fundsflow v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let backend = open_with_fallback(&config.storage_dir(&config_dir), &config.storage.file);
    let store = SessionStore::new(backend, Roster::household());

    let today = cli
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let mut app = App::new(
        io::stdin().lock(),
        io::stdout().lock(),
        store,
        &config,
        today,
        Box::new(rand::rng()),
    );
    app.run()?;

    info!("Shutdown complete");
    Ok(())
}
