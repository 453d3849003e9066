//! World-to-screen mapping: the follow camera and the data behind edge vignette and grid drawing.

pub mod camera;
pub mod grid;
pub mod vignette;

pub use camera::Camera;
pub use grid::WorldGrid;
pub use vignette::{EdgeGradient, GradientStop, Vignette};
