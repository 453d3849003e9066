use glam::Vec2;

use crate::core::{particle::Particle, types::WorldBounds};
use crate::utils::math::sign;

/// Two-tier soft containment.
///
/// Once the body crosses the nominal world edge its velocity on that axis is
/// turned toward the center, keeping its magnitude. Past the outer border band
/// an extra push proportional to the distance is added. The push switches on
/// discontinuously at the outer border.
#[derive(Debug, Clone, Copy)]
pub struct SoftBoundary {
    pub acceleration: f32,
}

impl SoftBoundary {
    pub fn new(acceleration: f32) -> Self {
        Self { acceleration }
    }

    pub fn apply(&self, particle: &mut Particle, world: &WorldBounds, dt: f32) {
        let center = world.center();
        let distance_max = world.half_extents() - Vec2::splat(particle.radius);

        particle.velocity.x = self.correct_axis(
            center.x - particle.position.x,
            particle.velocity.x,
            distance_max.x,
            world.border_width,
            dt,
        );
        particle.velocity.y = self.correct_axis(
            center.y - particle.position.y,
            particle.velocity.y,
            distance_max.y,
            world.border_width,
            dt,
        );
    }

    /// `to_center` is the signed offset from the particle to the world center.
    fn correct_axis(
        &self,
        to_center: f32,
        velocity: f32,
        distance_max: f32,
        border_width: f32,
        dt: f32,
    ) -> f32 {
        let distance = to_center.abs();
        if distance <= distance_max {
            return velocity;
        }

        let overflow_distance = distance_max + border_width;
        let push = if distance > overflow_distance {
            dt * self.acceleration * distance / overflow_distance
        } else {
            0.0
        };
        sign(to_center) * (velocity.abs() + push)
    }
}
