use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::ParticleSettings;
use crate::utils::allocator::ParticleId;

/// Circular body driven by thrust input.
///
/// `position` is the center of the body. `thrust` is the pending directional
/// intent for the next tick; the integrator consumes and clears it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub id: ParticleId,
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub thrust: Vec2,
    pub radius: f32,
    pub mass: f32,
    /// Speed after the last velocity update, before friction.
    pub computed_speed: f32,
    /// Acceleration magnitude after the last acceleration update.
    pub computed_acceleration: f32,
}

impl Default for Particle {
    fn default() -> Self {
        Self::new(Vec2::ZERO, ParticleSettings::default())
    }
}

impl Particle {
    /// Creates a particle at rest.
    pub fn new(position: Vec2, settings: ParticleSettings) -> Self {
        Self {
            id: ParticleId::default(),
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            thrust: Vec2::ZERO,
            radius: settings.radius,
            mass: settings.mass,
            computed_speed: 0.0,
            computed_acceleration: 0.0,
        }
    }

    /// Adds a directional intent to the pending accumulator.
    pub fn add_thrust(&mut self, direction: Vec2) {
        self.thrust += direction;
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    pub fn speed_squared(&self) -> f32 {
        self.velocity.length_squared()
    }

    pub fn acceleration_magnitude(&self) -> f32 {
        self.acceleration.length()
    }
}
