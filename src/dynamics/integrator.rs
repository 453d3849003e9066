use glam::Vec2;

use crate::config::SandboxConfig;
use crate::core::{particle::Particle, types::WorldBounds};

use super::{boundary::SoftBoundary, friction::Friction};

/// Advances a particle by one fixed timestep.
///
/// A step runs, in order: acceleration update, velocity update with the speed
/// clamp, soft boundary correction, explicit Euler position update, friction.
/// Friction therefore decays the velocity used by the *next* tick.
#[derive(Debug, Clone)]
pub struct Integrator {
    pub dt: f32,
    pub acceleration: f32,
    pub max_speed: f32,
    pub boundary: SoftBoundary,
    pub friction: Friction,
}

impl Integrator {
    pub fn new(dt: f32, acceleration: f32, max_speed: f32, friction_coefficient: f32) -> Self {
        Self {
            dt,
            acceleration,
            max_speed,
            boundary: SoftBoundary::new(acceleration),
            friction: Friction::new(friction_coefficient),
        }
    }

    pub fn from_config(config: &SandboxConfig) -> Self {
        Self::new(
            config.time_step,
            config.acceleration,
            config.max_speed,
            config.friction_coefficient,
        )
    }

    /// Turns the pending thrust into an acceleration of magnitude exactly
    /// `acceleration` (or zero) and clears the accumulator.
    ///
    /// The thrust is divided by its largest component before normalizing, so
    /// components whose squared length overflows `f32` still give a direction.
    pub fn update_acceleration(&self, particle: &mut Particle) {
        let thrust = std::mem::take(&mut particle.thrust);
        let scale = thrust.abs().max_element();
        let direction = if scale > 0.0 && scale.is_finite() {
            (thrust / scale).try_normalize()
        } else {
            None
        };

        match direction {
            Some(direction) => {
                particle.acceleration = direction * self.acceleration;
                particle.computed_acceleration = self.acceleration;
            }
            None => {
                particle.acceleration = Vec2::ZERO;
                particle.computed_acceleration = 0.0;
            }
        }
    }

    /// Integrates acceleration and hard-clamps speed to `max_speed`, keeping direction.
    pub fn integrate_velocity(&self, particle: &mut Particle) {
        particle.velocity += particle.acceleration * self.dt;

        let speed = particle.speed();
        if speed > self.max_speed {
            particle.velocity *= self.max_speed / speed;
            particle.computed_speed = self.max_speed;
        } else {
            particle.computed_speed = speed;
        }
    }

    pub fn integrate_position(&self, particle: &mut Particle) {
        particle.position += particle.velocity * self.dt;
    }

    pub fn step(&self, particle: &mut Particle, world: &WorldBounds) {
        self.update_acceleration(particle);
        self.integrate_velocity(particle);
        self.boundary.apply(particle, world, self.dt);
        self.integrate_position(particle);
        self.friction.apply(particle);
    }
}
