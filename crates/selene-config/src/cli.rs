//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Selene command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "selene", about = "Moon orbit around a reference body")]
pub struct CliArgs {
    /// Orbit radius in meters.
    #[arg(long)]
    pub radius: Option<f32>,

    /// Time for one orbit in milliseconds.
    #[arg(long)]
    pub period_ms: Option<u32>,

    /// Start with the orbit paused.
    #[arg(long)]
    pub paused: bool,

    /// Run duration in seconds.
    #[arg(long)]
    pub duration: Option<f64>,

    /// Reference body yaw rate in degrees per second.
    #[arg(long)]
    pub yaw_rate: Option<f32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(r) = args.radius {
            self.orbit.radius_m = r;
        }
        if let Some(p) = args.period_ms {
            self.orbit.period_ms = p;
        }
        if args.paused {
            self.orbit.start_paused = true;
        }
        if let Some(d) = args.duration {
            self.demo.duration_s = d;
        }
        if let Some(rate) = args.yaw_rate {
            self.reference.yaw_rate_deg_s = rate;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
