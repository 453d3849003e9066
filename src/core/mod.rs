//! Core types describing the world extent, the viewport, and the tracked particle.

pub mod particle;
pub mod types;

pub use particle::Particle;
pub use types::{Viewport, WorldBounds};
