//! Headless moon-orbit demo.
//!
//! Drives the orbit controller and the displacement-shader panels from a
//! fixed-timestep loop, with a reference body standing in for the aircraft the
//! moon circles. Poses are logged instead of drawn.
//!
//! Run with: `cargo run -p selene-demo -- --radius 25 --period-ms 2000`

mod error;
mod game_loop;
mod scene;

use std::path::Path;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use selene_config::{CliArgs, Config, default_config_dir};
use selene_orbit::{Clock, MonotonicClock};
use tracing::{error, info, trace, warn};

use crate::error::DemoError;
use crate::game_loop::{FIXED_DT, GameLoop};
use crate::scene::MoonScene;

/// Simulation seconds between config file checks.
const RELOAD_INTERVAL_S: f64 = 2.0;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);

    // Load or create config, then apply CLI overrides
    let file_config = match Config::load_or_create(&config_dir) {
        Ok(config) => config,
        Err(e) => {
            // Logging is not up yet: it is configured from this file.
            eprintln!("Failed to load config: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut config = file_config.clone();
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    selene_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    match run(&config, file_config, &args, &config_dir) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Demo failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(
    config: &Config,
    mut file_config: Config,
    args: &CliArgs,
    config_dir: &Path,
) -> Result<(), DemoError> {
    info!(
        "Orbit: radius={} m, period={} ms, paused={}",
        config.orbit.radius_m, config.orbit.period_ms, config.orbit.start_paused
    );
    info!(
        "Reference at {:?}, yaw {} deg/s",
        config.reference.position, config.reference.yaw_rate_deg_s
    );

    let mut scene = MoonScene::from_config(config, MonotonicClock::new())?;
    scene.log_panels();

    let log_every = u64::from(config.demo.log_every_n_ticks);
    let ticks_per_reload = (RELOAD_INTERVAL_S / FIXED_DT).round() as u64;
    let mut failure = None;

    let mut game_loop = GameLoop::new();
    let started = Instant::now();
    while started.elapsed().as_secs_f64() < config.demo.duration_s && failure.is_none() {
        game_loop.tick(
            |dt, sim_time| {
                if failure.is_some() {
                    return;
                }
                let moon = match scene.update(dt, sim_time + dt) {
                    Ok(moon) => moon,
                    Err(e) => {
                        failure = Some(e);
                        return;
                    }
                };
                let tick = scene.ticks();
                if log_every > 0
                    && tick % log_every == 0
                    && let Some(moon) = moon
                {
                    info!(
                        tick,
                        t = scene.orbit().parametric_time(),
                        paused = scene.orbit().is_paused(),
                        "moon at ({:.2}, {:.2}, {:.2}) facing ({:.3}, {:.3}, {:.3})",
                        moon.position.x,
                        moon.position.y,
                        moon.position.z,
                        moon.forward().x,
                        moon.forward().y,
                        moon.forward().z
                    );
                }
                if tick % ticks_per_reload == 0 {
                    reload_settings(&mut scene, &mut file_config, args, config_dir);
                }
            },
            |alpha| trace!(alpha, "render"),
        );
        std::thread::sleep(Duration::from_secs_f64(FIXED_DT));
    }

    if let Some(e) = failure {
        return Err(e);
    }

    info!(
        "Done: {} frames, {} ticks, {:.3} revolutions, {} degenerate ticks",
        game_loop.frame_count(),
        game_loop.update_count(),
        scene.orbit().parametric_time(),
        scene.degenerate_ticks()
    );
    if let Some(moon) = scene.moon() {
        info!("Final moon pose:\n{}", moon.to_mat4());
    }
    scene.log_panels();
    Ok(())
}

/// Re-read `config.ron` and push changes into the scene.
///
/// A file that fails to parse, or whose values the scene rejects, is logged and
/// skipped, and the scene keeps running on its previous settings. Returns `true`
/// when new settings were applied.
fn reload_settings<C: Clock>(
    scene: &mut MoonScene<C>,
    file_config: &mut Config,
    args: &CliArgs,
    config_dir: &Path,
) -> bool {
    let new_file_config = match file_config.reload(config_dir) {
        Ok(Some(config)) => config,
        Ok(None) => return false,
        Err(e) => {
            warn!("Config reload skipped: {e}");
            return false;
        }
    };

    let mut live = new_file_config.clone();
    live.apply_cli_overrides(args);
    *file_config = new_file_config;
    match scene.apply_settings(&live) {
        Ok(()) => {
            scene.log_panels();
            true
        }
        Err(e) => {
            warn!("Reloaded config rejected, keeping previous settings: {e}");
            false
        }
    }
}
