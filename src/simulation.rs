// Contains the simulation struct and per-step orchestration: rebuild the
// cell grid, evaluate short-range forces, then integrate.

use crate::body::Body;
use crate::cell_list::CellList;
use crate::config::SimParams;
use crate::diagnostics::StepStats;
use crate::forces;
use crate::profile_scope;
use crate::spawn;

pub struct Simulation {
    pub params: SimParams,
    pub size: f32,
    pub frame: usize,
    pub bodies: Vec<Body>,
    pub cell_list: CellList,
}

impl Simulation {
    pub fn new(n: usize, params: SimParams) -> Self {
        let size = params.domain_size(n);
        let bodies = spawn::scattered_lattice(n, size);
        let cell_list = CellList::new(size, params.cutoff);
        Self {
            params,
            size,
            frame: 0,
            bodies,
            cell_list,
        }
    }

    /// Build a simulation around hand-placed bodies.
    pub fn with_bodies(bodies: Vec<Body>, size: f32, params: SimParams) -> Self {
        let cell_list = CellList::new(size, params.cutoff);
        Self {
            params,
            size,
            frame: 0,
            bodies,
            cell_list,
        }
    }

    /// Advance one step. Phases run strictly in order: the grid must be
    /// fully rebuilt before force evaluation starts, and every
    /// acceleration must be final before integration moves anything.
    pub fn step(&mut self) -> StepStats {
        {
            profile_scope!("grid_rebuild");
            self.cell_list.rebuild(&self.bodies);
        }

        let mut stats = StepStats::new();
        {
            profile_scope!("forces");
            forces::accumulate_forces(&mut self.bodies, &self.cell_list, &self.params, &mut stats);
        }

        {
            profile_scope!("integrate");
            self.iterate();
        }

        self.frame += 1;
        stats
    }

    /// Advance positions and velocities from the freshly computed
    /// accelerations, reflecting off the domain walls.
    fn iterate(&mut self) {
        let dt = self.params.dt;
        let size = self.size;
        for body in &mut self.bodies {
            body.vel += body.acc * dt;
            body.pos += body.vel * dt;

            // Reflect from walls
            for axis in 0..2 {
                let pos = if axis == 0 { &mut body.pos.x } else { &mut body.pos.y };
                let vel = if axis == 0 { &mut body.vel.x } else { &mut body.vel.y };
                while *pos < 0.0 || *pos > size {
                    *pos = if *pos < 0.0 { -*pos } else { 2.0 * size - *pos };
                    *vel = -*vel;
                }
            }
        }
    }
}

#[test]
fn repulsion_pushes_close_pair_apart() {
    use ultraviolet::Vec2;
    let params = SimParams::default();
    // Half a cutoff apart, at rest.
    let bodies = vec![
        Body::new(Vec2::new(0.010, 0.015), Vec2::zero()),
        Body::new(Vec2::new(0.015, 0.015), Vec2::zero()),
    ];
    let mut sim = Simulation::with_bodies(bodies, 0.05, params);
    let stats = sim.step();
    assert_eq!(stats.navg, 1);
    assert!(sim.bodies[0].acc.x < 0.0);
    assert!(sim.bodies[1].acc.x > 0.0);
    assert_eq!(sim.bodies[0].acc.y, 0.0);
    assert_eq!(sim.bodies[1].acc.y, 0.0);
}

#[test]
fn isolated_bodies_never_accelerate() {
    use ultraviolet::Vec2;
    let params = SimParams::default();
    // Every pair at least ten cutoffs apart, at rest.
    let positions = [(0.05, 0.05), (0.25, 0.05), (0.05, 0.25)];
    let bodies: Vec<Body> = positions
        .iter()
        .map(|&(x, y)| Body::new(Vec2::new(x, y), Vec2::zero()))
        .collect();
    let mut sim = Simulation::with_bodies(bodies, 0.3, params);
    for _ in 0..5 {
        let stats = sim.step();
        assert_eq!(stats.navg, 0);
    }
    for (body, &(x, y)) in sim.bodies.iter().zip(positions.iter()) {
        assert_eq!(body.acc, Vec2::zero());
        assert_eq!(body.pos, Vec2::new(x, y));
    }
}

#[test]
fn walls_reflect_outbound_bodies() {
    use ultraviolet::Vec2;
    let params = SimParams::default();
    let bodies = vec![Body::new(Vec2::new(0.001, 0.02), Vec2::new(-10.0, 0.0))];
    let mut sim = Simulation::with_bodies(bodies, 0.04, params);
    sim.step();
    let body = &sim.bodies[0];
    assert!(body.pos.x > 0.0 && body.pos.x <= 0.04);
    assert!(body.vel.x > 0.0);
}
