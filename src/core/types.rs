use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::{CANVAS_FILL_RATIO, DEFAULT_BORDER_WIDTH, DEFAULT_WORLD_EXTENT};

/// Rectangular play area plus the soft containment band around it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldBounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    /// Depth of the band extending outward past the nominal extent.
    pub border_width: f32,
}

impl Default for WorldBounds {
    fn default() -> Self {
        let [left, top, right, bottom] = DEFAULT_WORLD_EXTENT;
        Self::new(left, top, right, bottom, DEFAULT_BORDER_WIDTH)
    }
}

impl WorldBounds {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32, border_width: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
            border_width,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.left + self.width() / 2.0,
            self.top + self.height() / 2.0,
        )
    }

    /// Half of the nominal extent on each axis.
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width(), self.height()) * 0.5
    }

    /// Top-left corner of the world including the border band.
    pub fn outer_min(&self) -> Vec2 {
        Vec2::new(self.left, self.top) - Vec2::splat(self.border_width)
    }

    /// Bottom-right corner of the world including the border band.
    pub fn outer_max(&self) -> Vec2 {
        Vec2::new(self.right, self.bottom) + Vec2::splat(self.border_width)
    }
}

/// Screen-space drawing surface, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Canvas dimensions for a window of the given inner size.
    pub fn from_window(inner_width: f32, inner_height: f32) -> Self {
        Self::new(inner_width * CANVAS_FILL_RATIO, inner_height * CANVAS_FILL_RATIO)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.size() * 0.5
    }

    pub fn min_dimension(&self) -> f32 {
        self.width.min(self.height)
    }

    /// True when either dimension has no area to project onto.
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}
