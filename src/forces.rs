//! Short-range pairwise repulsion, evaluated over the 3x3 cell
//! neighborhood of each particle.

use crate::body::Body;
use crate::cell_list::CellList;
use crate::config::SimParams;
use crate::diagnostics::StepStats;
use ultraviolet::Vec2;

/// Repulsive kick on particle `i` from candidate `j`, accumulated into `acc`.
///
/// The force law owns pair admission: it skips self-pairs, rejects anything
/// beyond the cutoff, and records each unordered pair's scaled distance
/// into `stats` exactly once (by the lower index).
pub fn apply_force(
    bodies: &[Body],
    i: usize,
    j: usize,
    params: &SimParams,
    acc: &mut Vec2,
    stats: &mut StepStats,
) {
    if i == j {
        return;
    }
    let cutoff = params.cutoff;
    let d = bodies[j].pos - bodies[i].pos;
    let mut r2 = d.mag_sq();
    if r2 > cutoff * cutoff {
        return;
    }
    if r2 > 0.0 && i < j {
        stats.observe(r2.sqrt() / cutoff);
    }

    let min_r = params.min_r();
    r2 = r2.max(min_r * min_r);
    let r = r2.sqrt();

    // coef < 0 for r < cutoff, pushing i away from j.
    let coef = (1.0 - cutoff / r) / r2 / params.mass;
    *acc += coef * d;
}

/// Recompute every body's acceleration from scratch.
///
/// Each body re-derives its own cell with the same floor division the grid
/// uses, then visits the up-to-9 surrounding cells, clipped at the domain
/// edges (walls, not periodic boundaries). Cell side equals the cutoff, so
/// any in-range pair sits in the same or an adjacent cell; changing the
/// cell sizing breaks that guarantee.
pub fn accumulate_forces(
    bodies: &mut [Body],
    grid: &CellList,
    params: &SimParams,
    stats: &mut StepStats,
) {
    let dim = grid.dim() as isize;
    for i in 0..bodies.len() {
        let (a, b) = grid.coord(bodies[i].pos);
        let mut acc = Vec2::zero();
        for da in -1..=1 {
            for db in -1..=1 {
                let ca = a as isize + da;
                let cb = b as isize + db;
                if ca < 0 || cb < 0 || ca >= dim || cb >= dim {
                    continue;
                }
                for &j in grid.cell(ca as usize, cb as usize) {
                    apply_force(bodies, i, j, params, &mut acc, stats);
                }
            }
        }
        bodies[i].acc = acc;
    }
}
