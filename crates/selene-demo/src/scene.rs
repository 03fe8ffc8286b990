//! The moon scene: a reference body, the moon orbiting it, and the debug panels.

use glam::Vec3;
use selene_config::Config;
use selene_orbit::{Clock, OrbitPoseController, OrbitState, Pose};
use selene_ui::{
    DisplacementUniforms, FREQUENCY_SLIDER, HEIGHT_SLIDER, PAUSE_BUTTON, PERIOD_SLIDER, Panel,
    RADIUS_SLIDER, SPEED_SLIDER, TIME, UniformSink, WaveControls, orbit_panel, wave_panel,
};
use tracing::{info, warn};

use crate::error::DemoError;

/// Values `apply_settings` may change, kept so a rejected config can be rolled back.
struct Settings {
    radius_m: f32,
    period_ms: u32,
    speed_power: f32,
    frequency_power: f32,
    height_power: f32,
    yaw_rate_rad_s: f32,
}

pub struct MoonScene<C: Clock> {
    reference: Pose,
    yaw_rate_rad_s: f32,
    orbit: OrbitPoseController<C>,
    orbit_panel: Panel<OrbitPoseController<C>>,
    wave: WaveControls<DisplacementUniforms>,
    wave_panel: Panel<WaveControls<DisplacementUniforms>>,
    pause_schedule: Vec<f64>,
    next_toggle: usize,
    moon: Option<Pose>,
    ticks: u64,
    degenerate_ticks: u64,
}

impl<C: Clock> MoonScene<C> {
    /// Build the scene from config. Orbit and wave values go through the panels,
    /// so they are clamped to the same ranges a user could pick.
    pub fn from_config(config: &Config, clock: C) -> Result<Self, DemoError> {
        let orbit = OrbitPoseController::with_clock(
            clock,
            OrbitState::DEFAULT_RADIUS_M,
            OrbitState::DEFAULT_PERIOD_MS,
        )?;
        let mut wave = WaveControls::default();
        wave.attach_shader(DisplacementUniforms::default());

        let mut pause_schedule: Vec<f64> = config
            .demo
            .toggle_pause_at_s
            .iter()
            .copied()
            .filter(|t| t.is_finite())
            .collect();
        pause_schedule.sort_by(f64::total_cmp);

        let [x, y, z] = config.reference.position;
        let mut scene = Self {
            reference: Pose::at(Vec3::new(x, y, z)),
            yaw_rate_rad_s: 0.0,
            orbit,
            orbit_panel: orbit_panel(),
            wave,
            wave_panel: wave_panel(),
            pause_schedule,
            next_toggle: 0,
            moon: None,
            ticks: 0,
            degenerate_ticks: 0,
        };
        scene.apply_settings(config)?;
        if config.orbit.start_paused {
            scene.toggle_pause()?;
        }
        Ok(scene)
    }

    /// Push the tunable parts of `config` into the live scene.
    ///
    /// Either every setting lands or none does: on error the scene keeps the
    /// values it had before the call.
    pub fn apply_settings(&mut self, config: &Config) -> Result<(), DemoError> {
        let previous = self.settings();
        if let Err(e) = self.try_apply_settings(config) {
            self.restore_settings(&previous)?;
            return Err(e);
        }
        Ok(())
    }

    fn try_apply_settings(&mut self, config: &Config) -> Result<(), DemoError> {
        let yaw_rate = config.reference.yaw_rate_deg_s;
        if !yaw_rate.is_finite() {
            return Err(DemoError::Setting("reference.yaw_rate_deg_s", yaw_rate));
        }

        let radius = self
            .orbit_panel
            .set(&mut self.orbit, RADIUS_SLIDER, config.orbit.radius_m)?;
        let period =
            self.orbit_panel
                .set(&mut self.orbit, PERIOD_SLIDER, config.orbit.period_ms as f32)?;
        if radius != config.orbit.radius_m || period != config.orbit.period_ms as f32 {
            warn!(
                "Orbit settings clamped to radius={radius} m, period={period} ms (requested {} m, {} ms)",
                config.orbit.radius_m, config.orbit.period_ms
            );
        }

        let wave = &config.wave;
        self.wave_panel
            .set(&mut self.wave, SPEED_SLIDER, wave.speed_power)?;
        self.wave_panel
            .set(&mut self.wave, FREQUENCY_SLIDER, wave.frequency_power)?;
        self.wave_panel
            .set(&mut self.wave, HEIGHT_SLIDER, wave.height_power)?;

        self.yaw_rate_rad_s = yaw_rate.to_radians();
        Ok(())
    }

    fn settings(&self) -> Settings {
        Settings {
            radius_m: self.orbit.radius_m(),
            period_ms: self.orbit.period_ms(),
            speed_power: self.wave.speed_power(),
            frequency_power: self.wave.frequency_power(),
            height_power: self.wave.height_power(),
            yaw_rate_rad_s: self.yaw_rate_rad_s,
        }
    }

    fn restore_settings(&mut self, settings: &Settings) -> Result<(), DemoError> {
        self.orbit.set_radius(settings.radius_m)?;
        self.orbit.set_period_ms(settings.period_ms)?;
        self.wave.set_speed_power(settings.speed_power);
        self.wave.set_frequency_power(settings.frequency_power);
        self.wave.set_height_power(settings.height_power);
        self.yaw_rate_rad_s = settings.yaw_rate_rad_s;
        Ok(())
    }

    pub fn toggle_pause(&mut self) -> Result<(), DemoError> {
        self.orbit_panel.press(&mut self.orbit, PAUSE_BUTTON)?;
        Ok(())
    }

    /// Advance one simulation tick of `dt` seconds ending at `sim_time`.
    pub fn update(&mut self, dt: f64, sim_time: f64) -> Result<Option<Pose>, DemoError> {
        self.ticks += 1;
        self.reference = self.reference.yawed(self.yaw_rate_rad_s * dt as f32);

        while let Some(&at) = self.pause_schedule.get(self.next_toggle) {
            if at > sim_time {
                break;
            }
            self.next_toggle += 1;
            self.toggle_pause()?;
        }

        if let Some(shader) = self.wave.shader_mut() {
            shader.set_uniform(TIME, sim_time as f32);
        }

        match self.orbit.compute_pose(&self.reference) {
            Ok(pose) => self.moon = Some(pose),
            Err(e) => {
                // Keep the last good pose on screen rather than a NaN transform.
                if self.degenerate_ticks == 0 {
                    warn!("Moon pose unavailable: {e}");
                }
                self.degenerate_ticks += 1;
            }
        }
        Ok(self.moon)
    }

    pub fn reference(&self) -> &Pose {
        &self.reference
    }

    pub fn moon(&self) -> Option<&Pose> {
        self.moon.as_ref()
    }

    pub fn orbit(&self) -> &OrbitPoseController<C> {
        &self.orbit
    }

    pub fn shader(&self) -> Option<&DisplacementUniforms> {
        self.wave.shader()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn degenerate_ticks(&self) -> u64 {
        self.degenerate_ticks
    }

    /// Log both panels the way a UI would see them.
    pub fn log_panels(&self) {
        info!("[{}] {:?}", self.orbit_panel.title, self.orbit_panel.view(&self.orbit));
        info!("[{}] {:?}", self.wave_panel.title, self.wave_panel.view(&self.wave));
    }
}
