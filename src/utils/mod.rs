//! Utility helpers: the particle registry, scalar math, and profiling.

pub mod allocator;
pub mod math;
pub mod profiling;

pub use allocator::{Arena, ParticleId};
pub use math::*;
pub use profiling::{FpsCounter, TickProfile};
