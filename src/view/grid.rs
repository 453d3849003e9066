use glam::Vec2;

use crate::core::types::WorldBounds;

/// Background grid drawn over the world extent.
#[derive(Debug, Clone, Copy)]
pub struct WorldGrid {
    pub spacing: f32,
    pub line_width: f32,
}

impl WorldGrid {
    pub fn new(spacing: f32, line_width: f32) -> Self {
        Self {
            spacing,
            line_width,
        }
    }

    /// X coordinates of vertical lines spanning `[left, right]`.
    pub fn vertical_lines(&self, world: &WorldBounds) -> Vec<f32> {
        self.lines(world.left, world.right)
    }

    /// Y coordinates of horizontal lines spanning `[top, bottom]`.
    pub fn horizontal_lines(&self, world: &WorldBounds) -> Vec<f32> {
        self.lines(world.top, world.bottom)
    }

    /// Background rectangle as `(min, max)`, border band included.
    pub fn background(&self, world: &WorldBounds) -> (Vec2, Vec2) {
        (world.outer_min(), world.outer_max())
    }

    fn lines(&self, start: f32, end: f32) -> Vec<f32> {
        if !(self.spacing > 0.0) {
            return Vec::new();
        }
        // Multiply instead of accumulating so rounding error does not drop the last line.
        let limit = end + self.line_width;
        (0u32..)
            .map(|k| start + k as f32 * self.spacing)
            .take_while(|&line| line <= limit)
            .collect()
    }
}
