//! Particle Sandbox – a single thrust-driven particle in a bounded 2D world.
//!
//! The crate covers the numerical core of the sandbox: the motion integrator
//! (thrust, speed clamp, soft boundary containment, friction) and the deadzone
//! follow camera, plus the small pieces of state around them (key bindings,
//! frame loop, FPS counter, HUD snapshot, vignette and grid geometry).
//! Drawing is left to the caller.
//!
//! ```
//! use particle_sandbox::{SandboxConfig, Session, Viewport};
//!
//! let mut session = Session::new(SandboxConfig::default(), Viewport::new(800.0, 600.0)).unwrap();
//! session.keyboard().press("w");
//! for _ in 0..30 {
//!     session.tick();
//! }
//! let output = session.output().unwrap();
//! assert!(output.velocity.y < 0.0);
//! ```

pub mod config;
pub mod core;
pub mod dynamics;
pub mod hud;
pub mod input;
pub mod session;
pub mod utils;
pub mod view;

pub use glam::Vec2;

pub use config::{ConfigError, ParticleSettings, SandboxConfig};
pub use crate::core::{
    particle::Particle,
    types::{Viewport, WorldBounds},
};
pub use dynamics::{Friction, Integrator, SoftBoundary};
pub use hud::HudStats;
pub use input::{Controls, Direction, Hotkey, KeyboardState, ThrustIntent};
pub use session::{FrameLoop, Session, TickOutput};
pub use utils::allocator::{Arena, ParticleId};
pub use view::{Camera, Vignette, WorldGrid};
