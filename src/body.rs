// Defines the particle record: position, velocity, and the per-step
// scratch acceleration written by the force phase.

use ultraviolet::Vec2;

#[derive(Clone, Debug)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Scratch state: rewritten from zero by every force phase, never
    /// carried across steps.
    pub acc: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            acc: Vec2::zero(),
        }
    }
}
