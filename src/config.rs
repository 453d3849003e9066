//! Configuration constants and the validated [`SandboxConfig`] for the sandbox.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::types::WorldBounds;

/// Default integration timestep (in time units).
pub const DEFAULT_TIME_STEP: f32 = 1.0 / 60.0;

/// Default world-to-pixel scale.
pub const DEFAULT_PIXELS_PER_UNIT: f32 = 1000.0;

/// Fraction of velocity removed every tick.
pub const DEFAULT_FRICTION_COEFFICIENT: f32 = 0.012;

/// Magnitude of thrust acceleration (1.2·e).
pub const DEFAULT_ACCELERATION: f32 = 1.2 * std::f32::consts::E;

/// Hard speed limit, in units per time unit.
pub const DEFAULT_MAX_SPEED: f32 = 1.0;

/// Deadzone half-extent as a fraction of the smaller viewport dimension.
pub const DEFAULT_DEADZONE_COEFFICIENT: f32 = 0.25;

/// Default world extent `[left, top, right, bottom]`.
pub const DEFAULT_WORLD_EXTENT: [f32; 4] = [0.0, 0.0, 2.048, 2.048];

/// Depth of the soft containment band outside the world extent.
pub const DEFAULT_BORDER_WIDTH: f32 = 0.1;

/// Radius of the tracked particle.
pub const DEFAULT_PARTICLE_RADIUS: f32 = 0.01;

/// Mass of the tracked particle.
pub const DEFAULT_PARTICLE_MASS: f32 = 10.0;

/// Number of frames between FPS samples.
pub const DEFAULT_FPS_SAMPLE_INTERVAL: u32 = 20;

/// Wall-clock budget for a single tick, in milliseconds.
pub const DEFAULT_FRAME_BUDGET_MS: f32 = 1000.0 / 60.0;

/// Spacing between background grid lines, in world units.
pub const DEFAULT_GRID_SPACING: f32 = 0.032;

/// Background grid line width, in world units.
pub const DEFAULT_GRID_LINE_WIDTH: f32 = 0.001;

/// Upper bound on ticks run by a single `Session::advance` call.
pub const MAX_CATCH_UP_TICKS: u32 = 240;

/// Share of the window occupied by the canvas on each axis.
pub const CANVAS_FILL_RATIO: f32 = 0.98;

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("world extent is degenerate: {axis} range [{min}, {max}]")]
    DegenerateWorld { axis: char, min: f32, max: f32 },
    #[error("`{field}` must be {requirement}, got {value}")]
    OutOfRange {
        field: &'static str,
        requirement: &'static str,
        value: f32,
    },
    #[error("`fps_sample_interval` must be at least 1")]
    ZeroSampleInterval,
    #[error("failed to parse configuration: {0}")]
    Parse(String),
}

/// Physical properties of the tracked particle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleSettings {
    pub radius: f32,
    pub mass: f32,
}

impl Default for ParticleSettings {
    fn default() -> Self {
        Self {
            radius: DEFAULT_PARTICLE_RADIUS,
            mass: DEFAULT_PARTICLE_MASS,
        }
    }
}

/// Fixed session configuration.
///
/// Every field has a documented default, so a TOML document only needs the
/// values it overrides:
///
/// ```
/// use particle_sandbox::config::SandboxConfig;
///
/// let config = SandboxConfig::from_toml_str("max_speed = 2.0").unwrap();
/// assert_eq!(config.max_speed, 2.0);
/// assert_eq!(config.pixels_per_unit, 1000.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    pub time_step: f32,
    pub pixels_per_unit: f32,
    pub friction_coefficient: f32,
    pub acceleration: f32,
    pub max_speed: f32,
    pub deadzone_coefficient: f32,
    pub overflow_world_boundaries: bool,
    pub world: WorldBounds,
    pub particle: ParticleSettings,
    pub fps_sample_interval: u32,
    pub frame_budget_ms: f32,
    pub grid_spacing: f32,
    pub grid_line_width: f32,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        let [left, top, right, bottom] = DEFAULT_WORLD_EXTENT;
        Self {
            time_step: DEFAULT_TIME_STEP,
            pixels_per_unit: DEFAULT_PIXELS_PER_UNIT,
            friction_coefficient: DEFAULT_FRICTION_COEFFICIENT,
            acceleration: DEFAULT_ACCELERATION,
            max_speed: DEFAULT_MAX_SPEED,
            deadzone_coefficient: DEFAULT_DEADZONE_COEFFICIENT,
            overflow_world_boundaries: false,
            world: WorldBounds::new(left, top, right, bottom, DEFAULT_BORDER_WIDTH),
            particle: ParticleSettings::default(),
            fps_sample_interval: DEFAULT_FPS_SAMPLE_INTERVAL,
            frame_budget_ms: DEFAULT_FRAME_BUDGET_MS,
            grid_spacing: DEFAULT_GRID_SPACING,
            grid_line_width: DEFAULT_GRID_LINE_WIDTH,
        }
    }
}

impl SandboxConfig {
    /// Parses a (possibly partial) TOML document and validates the result.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(source).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every invariant the per-tick code relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let world = &self.world;
        if !(world.right > world.left) || !world.left.is_finite() || !world.right.is_finite() {
            return Err(ConfigError::DegenerateWorld {
                axis: 'x',
                min: world.left,
                max: world.right,
            });
        }
        if !(world.bottom > world.top) || !world.top.is_finite() || !world.bottom.is_finite() {
            return Err(ConfigError::DegenerateWorld {
                axis: 'y',
                min: world.top,
                max: world.bottom,
            });
        }

        non_negative("world.border_width", world.border_width)?;
        positive("time_step", self.time_step)?;
        positive("pixels_per_unit", self.pixels_per_unit)?;
        positive("max_speed", self.max_speed)?;
        non_negative("acceleration", self.acceleration)?;
        non_negative("deadzone_coefficient", self.deadzone_coefficient)?;
        non_negative("particle.radius", self.particle.radius)?;
        positive("particle.mass", self.particle.mass)?;
        positive("grid_spacing", self.grid_spacing)?;
        non_negative("grid_line_width", self.grid_line_width)?;
        positive("frame_budget_ms", self.frame_budget_ms)?;

        let friction = self.friction_coefficient;
        if !(friction.is_finite() && (0.0..1.0).contains(&friction)) {
            return Err(ConfigError::OutOfRange {
                field: "friction_coefficient",
                requirement: "in [0, 1)",
                value: friction,
            });
        }

        if self.fps_sample_interval == 0 {
            return Err(ConfigError::ZeroSampleInterval);
        }

        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            requirement: "finite and positive",
            value,
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            requirement: "finite and non-negative",
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SandboxConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.acceleration - 3.2619).abs() < 1e-3);
        assert_eq!(config.world.right, 2.048);
    }

    #[test]
    fn rejects_degenerate_world() {
        let mut config = SandboxConfig::default();
        config.world.right = config.world.left;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DegenerateWorld { axis: 'x', .. })
        ));
    }

    #[test]
    fn rejects_non_positive_time_step_and_scale() {
        let mut config = SandboxConfig::default();
        config.time_step = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange { field: "time_step", .. })
        ));

        let mut config = SandboxConfig::default();
        config.pixels_per_unit = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange { field: "pixels_per_unit", .. })
        ));
    }

    #[test]
    fn rejects_full_friction() {
        let mut config = SandboxConfig::default();
        config.friction_coefficient = 1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_toml_overrides_named_fields_only() {
        let config = SandboxConfig::from_toml_str(
            r#"
            overflow_world_boundaries = true

            [world]
            border_width = 0.25
            "#,
        )
        .unwrap();

        assert!(config.overflow_world_boundaries);
        assert_eq!(config.world.border_width, 0.25);
        assert_eq!(config.world.right, 2.048);
        assert_eq!(config.max_speed, DEFAULT_MAX_SPEED);
    }

    #[test]
    fn invalid_toml_reports_parse_error() {
        let err = SandboxConfig::from_toml_str("max_speed = \"fast\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn toml_values_are_validated() {
        let err = SandboxConfig::from_toml_str("fps_sample_interval = 0").unwrap_err();
        assert_eq!(err, ConfigError::ZeroSampleInterval);
    }
}
