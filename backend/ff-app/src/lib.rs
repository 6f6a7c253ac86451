pub mod app;
pub mod cli;
pub mod error;
pub mod logger;
pub mod terminal;

pub use app::App;
pub use cli::Cli;
pub use error::{AppError, Result};

#[cfg(test)]
mod tests;
