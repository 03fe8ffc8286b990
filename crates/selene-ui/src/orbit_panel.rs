//! The "Moon Spy" panel: pause button and orbit sliders.

use selene_orbit::{Clock, OrbitPoseController, PERIOD_RANGE_MS, RADIUS_RANGE_M};
use tracing::info;

use crate::panel::{Panel, ValueFormat};

pub const ORBIT_PANEL_TITLE: &str = "Moon Spy";
pub const PAUSE_BUTTON: &str = "pause";
pub const RADIUS_SLIDER: &str = "Radius (m)";
pub const PERIOD_SLIDER: &str = "Orbit time (msec)";

/// Controls for one orbit. Ranges are enforced here; the controller only
/// rejects degenerate values.
pub fn orbit_panel<C: Clock>() -> Panel<OrbitPoseController<C>> {
    let period_range = *PERIOD_RANGE_MS.start() as f32..=*PERIOD_RANGE_MS.end() as f32;

    Panel::<OrbitPoseController<C>>::new(ORBIT_PANEL_TITLE)
        .button(
            PAUSE_BUTTON,
            |ctl| {
                if ctl.is_paused() {
                    "Resume Motion"
                } else {
                    "Pause Motion"
                }
            },
            |ctl| {
                ctl.toggle_pause();
                info!("Moon orbiter paused: {}", ctl.is_paused());
            },
        )
        .slider(
            RADIUS_SLIDER,
            RADIUS_RANGE_M,
            ValueFormat::Decimal(3),
            |ctl| ctl.radius_m(),
            |ctl, v| {
                ctl.set_radius(v)?;
                info!("Adjusted moon orbiter radius to {v} meters");
                Ok(())
            },
        )
        .slider(
            PERIOD_SLIDER,
            period_range,
            ValueFormat::Integer,
            |ctl| ctl.period_ms() as f32,
            |ctl, v| {
                ctl.set_period_ms(v as u32)?;
                info!("Adjusted moon orbiter period to {v} milliseconds");
                Ok(())
            },
        )
}
