/// The current version of filecap, sourced from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod commands;
pub mod error;
pub mod truncator;
pub mod types;
