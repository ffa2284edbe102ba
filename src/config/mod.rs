/// Database connection management
pub mod database;

/// Seed fixture loading from seed.toml
pub mod seed;

/// Application settings from config.toml
pub mod settings;

pub use settings::{AppConfig, load_config, load_default_config};
