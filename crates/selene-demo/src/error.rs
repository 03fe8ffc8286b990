//! Demo error types.

use selene_config::ConfigError;
use selene_orbit::OrbitError;
use selene_ui::PanelError;

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Orbit(#[from] OrbitError),

    #[error("invalid setting: {0}")]
    Panel(#[from] PanelError),

    #[error("invalid setting {0}: {1}")]
    Setting(&'static str, f32),
}
