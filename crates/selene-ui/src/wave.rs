//! Wave controls: power-of-two sliders feeding the displacement shader.

use std::ops::RangeInclusive;

use tracing::{info, warn};

use crate::panel::{Panel, ValueFormat};
use crate::uniforms::{
    DISPLACEMENT_SCALE, DisplacementUniforms, FREQUENCY_MULTIPLIER, SPEED_MULTIPLIER, UniformSink,
};

pub const WAVE_PANEL_TITLE: &str = "Wave Controls";
pub const SPEED_SLIDER: &str = "Speed Power";
pub const FREQUENCY_SLIDER: &str = "Frequency Power";
pub const HEIGHT_SLIDER: &str = "Height Power";

pub const SPEED_POWER_RANGE: RangeInclusive<f32> = -3.0..=2.0;
pub const FREQUENCY_POWER_RANGE: RangeInclusive<f32> = -2.0..=3.0;
pub const HEIGHT_POWER_RANGE: RangeInclusive<f32> = -3.0..=6.0;

/// Exponents for the wave multipliers, plus the shader they drive.
///
/// Exponents are kept even while no shader is attached, so a shader that
/// finishes loading late still gets the user's settings.
#[derive(Debug, Clone)]
pub struct WaveControls<S = DisplacementUniforms> {
    speed_power: f32,
    frequency_power: f32,
    height_power: f32,
    shader: Option<S>,
}

impl<S: UniformSink> Default for WaveControls<S> {
    fn default() -> Self {
        Self::with_powers(0.0, 0.0, 1.0)
    }
}

impl<S: UniformSink> WaveControls<S> {
    pub fn with_powers(speed_power: f32, frequency_power: f32, height_power: f32) -> Self {
        Self {
            speed_power,
            frequency_power,
            height_power,
            shader: None,
        }
    }

    /// Bind a shader and push the current multipliers into it.
    pub fn attach_shader(&mut self, shader: S) {
        self.shader = Some(shader);
        self.push(SPEED_MULTIPLIER, self.speed_multiplier());
        self.push(FREQUENCY_MULTIPLIER, self.frequency_multiplier());
        self.push(DISPLACEMENT_SCALE, self.height_scale());
    }

    pub fn shader(&self) -> Option<&S> {
        self.shader.as_ref()
    }

    pub fn shader_mut(&mut self) -> Option<&mut S> {
        self.shader.as_mut()
    }

    pub fn set_speed_power(&mut self, power: f32) -> f32 {
        self.speed_power = power;
        let speed = self.speed_multiplier();
        self.push(SPEED_MULTIPLIER, speed);
        info!("Speed multiplier set to {speed} (2^{power})");
        speed
    }

    pub fn set_frequency_power(&mut self, power: f32) -> f32 {
        self.frequency_power = power;
        let freq = self.frequency_multiplier();
        self.push(FREQUENCY_MULTIPLIER, freq);
        info!("Frequency multiplier set to {freq} (2^{power})");
        freq
    }

    pub fn set_height_power(&mut self, power: f32) -> f32 {
        self.height_power = power;
        let height = self.height_scale();
        self.push(DISPLACEMENT_SCALE, height);
        info!("Height multiplier set to {height} (2^{power})");
        height
    }

    pub fn speed_power(&self) -> f32 {
        self.speed_power
    }

    pub fn frequency_power(&self) -> f32 {
        self.frequency_power
    }

    pub fn height_power(&self) -> f32 {
        self.height_power
    }

    pub fn speed_multiplier(&self) -> f32 {
        self.speed_power.exp2()
    }

    pub fn frequency_multiplier(&self) -> f32 {
        self.frequency_power.exp2()
    }

    pub fn height_scale(&self) -> f32 {
        self.height_power.exp2()
    }

    fn push(&mut self, name: &str, value: f32) {
        if let Some(shader) = self.shader.as_mut()
            && !shader.set_uniform(name, value)
        {
            warn!("Shader has no uniform {name}, value {value} dropped");
        }
    }
}

/// The "Wave Controls" panel.
pub fn wave_panel<S: UniformSink>() -> Panel<WaveControls<S>> {
    Panel::<WaveControls<S>>::new(WAVE_PANEL_TITLE)
        .slider(
            SPEED_SLIDER,
            SPEED_POWER_RANGE,
            ValueFormat::PowerOfTwo,
            |w| w.speed_power(),
            |w, v| {
                w.set_speed_power(v);
                Ok(())
            },
        )
        .slider(
            FREQUENCY_SLIDER,
            FREQUENCY_POWER_RANGE,
            ValueFormat::PowerOfTwo,
            |w| w.frequency_power(),
            |w, v| {
                w.set_frequency_power(v);
                Ok(())
            },
        )
        .slider(
            HEIGHT_SLIDER,
            HEIGHT_POWER_RANGE,
            ValueFormat::PowerOfTwo,
            |w| w.height_power(),
            |w, v| {
                w.set_height_power(v);
                Ok(())
            },
        )
}
