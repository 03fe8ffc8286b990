//! Declarative debug panels for the orbit and the displacement shader.
//!
//! A [`Panel`] is a list of control descriptors (label, range, getter, setter)
//! over some target type. Any immediate-mode UI can walk
//! [`Panel::view`] to draw it and route edits back through [`Panel::set`] and
//! [`Panel::press`]; nothing here knows how widgets are rendered.

mod error;
mod orbit_panel;
mod panel;
mod uniforms;
mod wave;

pub use error::PanelError;
pub use orbit_panel::{
    ORBIT_PANEL_TITLE, PAUSE_BUTTON, PERIOD_SLIDER, RADIUS_SLIDER, orbit_panel,
};
pub use panel::{Button, Control, ControlView, Panel, Slider, ValueFormat};
pub use uniforms::{
    DISPLACEMENT_SCALE, DisplacementUniforms, FREQUENCY_MULTIPLIER, SPEED_MULTIPLIER, TIME,
    UniformSink,
};
pub use wave::{
    FREQUENCY_POWER_RANGE, FREQUENCY_SLIDER, HEIGHT_POWER_RANGE, HEIGHT_SLIDER,
    SPEED_POWER_RANGE, SPEED_SLIDER, WAVE_PANEL_TITLE, WaveControls, wave_panel,
};
