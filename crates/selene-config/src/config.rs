//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Moon orbit parameters.
    pub orbit: OrbitConfig,
    /// Displacement wave exponents.
    pub wave: WaveConfig,
    /// The body being orbited.
    pub reference: ReferenceConfig,
    /// Headless demo run settings.
    pub demo: DemoConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Moon orbit configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OrbitConfig {
    /// Orbit radius in meters. The panel offers 1–100.
    pub radius_m: f32,
    /// Time for one revolution in milliseconds. The panel offers 50–10000.
    pub period_ms: u32,
    /// Start with the orbit frozen.
    pub start_paused: bool,
}

/// Displacement shader wave configuration. Each value is a power of two.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WaveConfig {
    /// Exponent for the wave speed multiplier.
    pub speed_power: f32,
    /// Exponent for the wave frequency multiplier.
    pub frequency_power: f32,
    /// Exponent for the displacement height scale.
    pub height_power: f32,
}

/// The reference body the moon orbits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReferenceConfig {
    /// World position in meters.
    pub position: [f32; 3],
    /// Yaw rate about the body's up axis, in degrees per second.
    pub yaw_rate_deg_s: f32,
}

/// Headless demo run configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    /// How long to run, in wall-clock seconds.
    pub duration_s: f64,
    /// Log the moon pose every N simulation ticks (0 disables).
    pub log_every_n_ticks: u32,
    /// Simulation times (seconds) at which the orbit pause button is pressed.
    pub toggle_pause_at_s: Vec<f64>,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            radius_m: 100.0,
            period_ms: 5000,
            start_paused: false,
        }
    }
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            speed_power: 0.0,
            frequency_power: 0.0,
            height_power: 1.0,
        }
    }
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 10.0],
            yaw_rate_deg_s: 0.0,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            duration_s: 10.0,
            log_every_n_ticks: 30,
            toggle_pause_at_s: Vec::new(),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Platform config directory for Selene, e.g. `~/.config/selene` on Linux.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("selene")
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        let path = config_dir.join(CONFIG_FILE);
        std::fs::write(&path, serialized).map_err(|source| ConfigError::Write { path, source })
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE))?;

        if &new_config != self {
            info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
