use crate::core::particle::Particle;

/// Constant fractional velocity decay applied every tick.
#[derive(Debug, Clone, Copy)]
pub struct Friction {
    pub coefficient: f32,
}

impl Friction {
    pub fn new(coefficient: f32) -> Self {
        Self { coefficient }
    }

    /// Multiplier applied to both velocity components.
    pub fn retention(&self) -> f32 {
        1.0 - self.coefficient
    }

    pub fn apply(&self, particle: &mut Particle) {
        particle.velocity *= self.retention();
    }
}
