//! Motion model: thrust-driven integration, soft boundary containment, and friction.

pub mod boundary;
pub mod friction;
pub mod integrator;

pub use boundary::SoftBoundary;
pub use friction::Friction;
pub use integrator::Integrator;
