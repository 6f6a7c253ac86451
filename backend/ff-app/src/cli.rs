use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "fundsflow")]
#[command(about = "FundsFlow household points app")]
#[command(version)]
pub struct Cli {
    /// Config directory (defaults to FF_CONFIG_DIR, then ./.fundsflow)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Pretend today is this date (YYYY-MM-DD); drives the theme and the daily game lock
    #[arg(long)]
    pub today: Option<NaiveDate>,
}
