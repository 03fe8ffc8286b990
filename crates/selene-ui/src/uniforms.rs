//! The shader capability seam: anything that accepts named float uniforms.

/// Vertical displacement applied to the heightmap sample.
pub const DISPLACEMENT_SCALE: &str = "DisplacementScale";
/// Seconds of animation time.
pub const TIME: &str = "Time";
/// Multiplier on how fast the waves travel.
pub const SPEED_MULTIPLIER: &str = "SpeedMultiplier";
/// Multiplier on the spatial wave frequency.
pub const FREQUENCY_MULTIPLIER: &str = "FrequencyMultiplier";

/// A shader (or anything standing in for one) with settable float uniforms.
pub trait UniformSink {
    /// Set `name` to `value`. Returns `false` if the uniform does not exist.
    fn set_uniform(&mut self, name: &str, value: f32) -> bool;
}

/// CPU-side copy of the displacement shader's uniform block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplacementUniforms {
    pub displacement_scale: f32,
    pub time: f32,
    pub speed_multiplier: f32,
    pub frequency_multiplier: f32,
}

impl Default for DisplacementUniforms {
    fn default() -> Self {
        Self {
            displacement_scale: 2.0,
            time: 0.0,
            speed_multiplier: 1.0,
            frequency_multiplier: 1.0,
        }
    }
}

impl DisplacementUniforms {
    pub fn get(&self, name: &str) -> Option<f32> {
        match name {
            DISPLACEMENT_SCALE => Some(self.displacement_scale),
            TIME => Some(self.time),
            SPEED_MULTIPLIER => Some(self.speed_multiplier),
            FREQUENCY_MULTIPLIER => Some(self.frequency_multiplier),
            _ => None,
        }
    }

    /// All uniforms as `(name, value)` pairs, in upload order.
    pub fn values(&self) -> [(&'static str, f32); 4] {
        [
            (DISPLACEMENT_SCALE, self.displacement_scale),
            (TIME, self.time),
            (SPEED_MULTIPLIER, self.speed_multiplier),
            (FREQUENCY_MULTIPLIER, self.frequency_multiplier),
        ]
    }
}

impl UniformSink for DisplacementUniforms {
    fn set_uniform(&mut self, name: &str, value: f32) -> bool {
        let slot = match name {
            DISPLACEMENT_SCALE => &mut self.displacement_scale,
            TIME => &mut self.time,
            SPEED_MULTIPLIER => &mut self.speed_multiplier,
            FREQUENCY_MULTIPLIER => &mut self.frequency_multiplier,
            _ => return false,
        };
        *slot = value;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shader_defaults() {
        let u = DisplacementUniforms::default();
        assert_eq!(u.get(DISPLACEMENT_SCALE), Some(2.0));
        assert_eq!(u.get(TIME), Some(0.0));
        assert_eq!(u.get(SPEED_MULTIPLIER), Some(1.0));
        assert_eq!(u.get(FREQUENCY_MULTIPLIER), Some(1.0));
    }

    #[test]
    fn test_set_known_and_unknown_uniforms() {
        let mut u = DisplacementUniforms::default();
        assert!(u.set_uniform(TIME, 3.5));
        assert_eq!(u.time, 3.5);
        assert!(!u.set_uniform("ModelMatrix", 1.0));
        assert_eq!(u.get("ModelMatrix"), None);
    }

    #[test]
    fn test_values_cover_every_uniform() {
        let u = DisplacementUniforms::default();
        for (name, value) in u.values() {
            assert_eq!(u.get(name), Some(value), "{name} mismatch");
        }
    }
}
