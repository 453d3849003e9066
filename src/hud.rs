//! Read-only snapshot of the tracked particle for the stats overlay.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::particle::Particle;
use crate::utils::math::round_to;

const DECIMALS: i32 = 2;

/// Values shown in the stats overlay, rounded for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HudStats {
    pub is_animating: bool,
    pub fps: f32,
    pub position: Vec2,
    pub speed: f32,
    pub velocity: Vec2,
    pub acceleration_magnitude: f32,
    pub acceleration: Vec2,
}

impl HudStats {
    pub fn capture(particle: &Particle, is_animating: bool, fps: f32) -> Self {
        let round = |v: Vec2| Vec2::new(round_to(v.x, DECIMALS), round_to(v.y, DECIMALS));
        Self {
            is_animating,
            fps: round_to(fps, DECIMALS),
            position: round(particle.position),
            speed: round_to(particle.computed_speed, DECIMALS),
            velocity: round(particle.velocity),
            acceleration_magnitude: round_to(particle.computed_acceleration, DECIMALS),
            acceleration: round(particle.acceleration),
        }
    }

    /// One `key: value` line per stat, in display order.
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("isAnimating: {}", self.is_animating),
            format!("fps: {}", self.fps),
            format!("position: {}, {}", self.position.x, self.position.y),
            format!(
                "velocity: {} ({}, {})",
                self.speed, self.velocity.x, self.velocity.y
            ),
            format!(
                "acceleration: {} ({}, {})",
                self.acceleration_magnitude, self.acceleration.x, self.acceleration.y
            ),
        ]
    }
}

impl fmt::Display for HudStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
