// Particle initialization: evenly spaced lattice slots visited in shuffled
// order, with small random velocities.

use crate::body::Body;
use ultraviolet::Vec2;

/// Fixed seed so benchmark runs are repeatable.
const SPAWN_SEED: u64 = 0;

/// Place `n` particles on a shuffled lattice inside the square domain,
/// with per-component velocities uniform in [-1, 1).
///
/// Lattice placement guarantees proper spacing; shuffling the slot order
/// keeps the array from being spatially sorted.
pub fn scattered_lattice(n: usize, size: f32) -> Vec<Body> {
    fastrand::seed(SPAWN_SEED);

    let sx = (n as f32).sqrt().ceil() as usize;
    let sy = (n + sx - 1) / sx;

    let mut slots: Vec<usize> = (0..n).collect();
    fastrand::shuffle(&mut slots);

    let mut bodies = Vec::with_capacity(n);
    for &k in &slots {
        let pos = Vec2::new(
            size * (1 + k % sx) as f32 / (1 + sx) as f32,
            size * (1 + k / sx) as f32 / (1 + sy) as f32,
        );
        let vel = Vec2::new(fastrand::f32() * 2.0 - 1.0, fastrand::f32() * 2.0 - 1.0);
        bodies.push(Body::new(pos, vel));
    }
    bodies
}
