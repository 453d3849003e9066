use glam::Vec2;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::types::{Viewport, WorldBounds};
use crate::utils::allocator::ParticleId;
use crate::utils::math::{clamp_lower_wins, lerp, sign};

/// Base interpolation factor of the catch-up lerp.
pub const CATCH_UP_RATE: f32 = 0.1;

/// Deadzone follow camera.
///
/// `position` is the world coordinate shown at the top-left corner of the
/// viewport. The camera tracks its target by id and never owns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    pub position: Vec2,
    pub target: Option<ParticleId>,
    pub deadzone_coefficient: f32,
    pub overflow_world_boundaries: bool,
    pub pixels_per_unit: f32,
}

impl Camera {
    pub fn new(deadzone_coefficient: f32, pixels_per_unit: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            target: None,
            deadzone_coefficient,
            overflow_world_boundaries: false,
            pixels_per_unit,
        }
    }

    /// Places the camera so the viewport is centered on `point`.
    pub fn center_on(&mut self, point: Vec2, viewport: &Viewport) {
        self.position = point - viewport.size() / (2.0 * self.pixels_per_unit);
    }

    pub fn follow(&mut self, target: ParticleId) {
        debug!("camera now tracking {target:?}");
        self.target = Some(target);
    }

    pub fn unfollow(&mut self) {
        self.target = None;
    }

    /// Half-extent, in pixels, of the deadzone band on each side.
    pub fn deadzone_width(&self, viewport: &Viewport) -> f32 {
        self.deadzone_coefficient * viewport.min_dimension()
    }

    /// Distance from the viewport center, per axis and in pixels, the target may
    /// drift before the camera starts moving.
    pub fn free_extents(&self, viewport: &Viewport) -> Vec2 {
        viewport.center() - Vec2::splat(self.deadzone_width(viewport))
    }

    /// Maps a world position to viewport pixels.
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        (world - self.position) * self.pixels_per_unit
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen / self.pixels_per_unit + self.position
    }

    /// Moves the camera toward the tracked position for one tick.
    ///
    /// `target_position` is the world position of the tracked particle, or
    /// `None` when nothing resolves for the target id. A zero-area viewport
    /// leaves the camera untouched.
    pub fn update(
        &mut self,
        target_position: Option<Vec2>,
        world: &WorldBounds,
        viewport: &Viewport,
    ) {
        let Some(target_position) = target_position else {
            return;
        };
        if self.target.is_none() || viewport.is_degenerate() {
            return;
        }

        let scale = self.pixels_per_unit;
        let free = self.free_extents(viewport);
        let offset = self.world_to_screen(target_position) - viewport.center();
        let distance = offset.abs();

        let speed_factor = 1f32
            .max(distance.x / viewport.width)
            .max(distance.y / viewport.height);
        let t = CATCH_UP_RATE * speed_factor;

        if distance.x > free.x {
            let goal = self.position.x + sign(offset.x) * (distance.x - free.x) / scale;
            self.position.x = lerp(self.position.x, goal, t);
        }
        if distance.y > free.y {
            let goal = self.position.y + sign(offset.y) * (distance.y - free.y) / scale;
            self.position.y = lerp(self.position.y, goal, t);
        }

        if !self.overflow_world_boundaries {
            self.clamp_to_world(world, viewport);
        }
    }

    /// Keeps the visible rectangle inside the world plus its border band.
    pub fn clamp_to_world(&mut self, world: &WorldBounds, viewport: &Viewport) {
        let visible = viewport.size() / self.pixels_per_unit;
        let lower = world.outer_min();
        let upper = world.outer_max() - visible;
        self.position.x = clamp_lower_wins(self.position.x, lower.x, upper.x);
        self.position.y = clamp_lower_wins(self.position.y, lower.y, upper.y);
    }
}
