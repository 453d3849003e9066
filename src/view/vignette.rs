use serde::{Deserialize, Serialize};

use crate::core::types::Viewport;

/// Fraction of the deadzone width used for the darkened edge band.
pub const VIGNETTE_BAND_RATIO: f32 = 0.1;

/// A single gradient stop: position along the axis in `[0, 1]` and opacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset: f32,
    pub alpha: f32,
}

/// Opaque at both ends of an axis, transparent in between.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeGradient {
    pub stops: [GradientStop; 4],
}

impl EdgeGradient {
    fn across(band: f32, length: f32) -> Self {
        let edge = band / length;
        Self {
            stops: [
                GradientStop { offset: 0.0, alpha: 1.0 },
                GradientStop { offset: edge, alpha: 0.0 },
                GradientStop { offset: 1.0 - edge, alpha: 0.0 },
                GradientStop { offset: 1.0, alpha: 1.0 },
            ],
        }
    }
}

/// Darkened viewport edges, scaled from the camera deadzone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Vignette {
    pub active: bool,
}

impl Default for Vignette {
    fn default() -> Self {
        Self { active: true }
    }
}

impl Vignette {
    /// Band width in pixels for a deadzone of `deadzone_width` pixels.
    pub fn band_width(deadzone_width: f32) -> f32 {
        deadzone_width * VIGNETTE_BAND_RATIO
    }

    /// Horizontal then vertical gradients, or `None` when inactive or the
    /// viewport has no area.
    pub fn gradients(
        &self,
        viewport: &Viewport,
        deadzone_width: f32,
    ) -> Option<(EdgeGradient, EdgeGradient)> {
        if !self.active || viewport.is_degenerate() {
            return None;
        }
        let band = Self::band_width(deadzone_width);
        Some((
            EdgeGradient::across(band, viewport.width),
            EdgeGradient::across(band, viewport.height),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_mirror_around_the_center() {
        let viewport = Viewport::new(800.0, 400.0);
        let (horizontal, vertical) = Vignette::default().gradients(&viewport, 100.0).unwrap();

        assert_eq!(horizontal.stops[1].offset, 10.0 / 800.0);
        assert_eq!(horizontal.stops[2].offset, 1.0 - 10.0 / 800.0);
        assert_eq!(vertical.stops[1].offset, 10.0 / 400.0);
        assert_eq!(vertical.stops[0].alpha, 1.0);
        assert_eq!(vertical.stops[2].alpha, 0.0);
    }

    #[test]
    fn inactive_or_empty_viewport_draws_nothing() {
        let viewport = Viewport::new(800.0, 400.0);
        assert!(Vignette { active: false }.gradients(&viewport, 100.0).is_none());
        assert!(Vignette::default()
            .gradients(&Viewport::new(800.0, 0.0), 100.0)
            .is_none());
    }
}
