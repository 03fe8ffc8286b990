//! Configuration for the Selene orbit demo.
//!
//! Settings persist to disk as RON, accept CLI overrides via clap, and tolerate
//! missing or unknown fields so older and newer files keep loading.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    Config, DebugConfig, DemoConfig, OrbitConfig, ReferenceConfig, WaveConfig, default_config_dir,
};
pub use error::ConfigError;
