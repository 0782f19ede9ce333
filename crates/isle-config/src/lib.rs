//! Configuration for island generation.
//!
//! Settings persist to disk as RON, accept CLI overrides via clap, and are
//! clamped into their valid ranges before use.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    BiomeConfig, Config, DebugConfig, FoliageConfig, MapConfig, PlacementConfig,
    config_file, default_config_dir,
};
pub use error::ConfigError;
