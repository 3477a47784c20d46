use crate::body::Body;
use smallvec::SmallVec;
use ultraviolet::Vec2;

/// Uniform grid over the square domain, one cell per cutoff length.
///
/// The grid is a derived index over the body slice: membership is
/// recomputed from positions on every `rebuild` and never carries state
/// across steps. The body slice stays the sole source of truth.
pub struct CellList {
    pub size: f32,
    pub cell_size: f32,
    dim: usize,
    cells: Vec<SmallVec<[usize; 4]>>,
}

impl CellList {
    pub fn new(size: f32, cell_size: f32) -> Self {
        // Two cells of padding so edge particles always have a clippable
        // 3x3 neighborhood without modular wraparound.
        let dim = (size / cell_size).floor() as usize + 2;
        Self {
            size,
            cell_size,
            dim,
            cells: vec![SmallVec::new(); dim * dim],
        }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Cell coordinates of a position, by cutoff-scaled floor division.
    ///
    /// Positions outside `[0, size]` break the caller's contract; the
    /// integrator's wall reflection keeps every body inside.
    pub fn coord(&self, pos: Vec2) -> (usize, usize) {
        debug_assert!(
            pos.x >= 0.0 && pos.y >= 0.0 && pos.x <= self.size && pos.y <= self.size,
            "position {:?} outside the simulation domain",
            pos
        );
        let a = (pos.x / self.cell_size).floor() as usize;
        let b = (pos.y / self.cell_size).floor() as usize;
        (a, b)
    }

    /// Drop all previous membership and re-bin every body by its current
    /// position.
    pub fn rebuild(&mut self, bodies: &[Body]) {
        for cell in &mut self.cells {
            cell.clear();
        }
        for (i, body) in bodies.iter().enumerate() {
            let (a, b) = self.coord(body.pos);
            self.cells[a * self.dim + b].push(i);
        }
    }

    /// Indices of the bodies currently in cell (a, b). Callers clip
    /// neighborhood coordinates to `[0, dim)` before asking.
    pub fn cell(&self, a: usize, b: usize) -> &[usize] {
        &self.cells[a * self.dim + b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_at(x: f32, y: f32) -> Body {
        Body::new(Vec2::new(x, y), Vec2::zero())
    }

    #[test]
    fn coord_uses_cutoff_scaled_floor_division() {
        let grid = CellList::new(1.0, 0.25);
        assert_eq!(grid.dim(), 6);
        assert_eq!(grid.coord(Vec2::new(0.1, 0.6)), (0, 2));
        assert_eq!(grid.coord(Vec2::new(0.99, 0.0)), (3, 0));
    }

    #[test]
    fn rebuild_bins_every_body() {
        let mut grid = CellList::new(1.0, 0.25);
        let bodies = vec![body_at(0.1, 0.1), body_at(0.1, 0.12), body_at(0.8, 0.9)];
        grid.rebuild(&bodies);
        assert_eq!(grid.cell(0, 0), &[0, 1]);
        assert_eq!(grid.cell(3, 3), &[2]);
        assert!(grid.cell(1, 1).is_empty());
    }

    #[test]
    fn rebuild_drops_stale_membership() {
        let mut grid = CellList::new(1.0, 0.25);
        let mut bodies = vec![body_at(0.1, 0.1)];
        grid.rebuild(&bodies);
        assert_eq!(grid.cell(0, 0), &[0]);

        // Cross a cell boundary; the old cell must forget the body.
        bodies[0].pos = Vec2::new(0.3, 0.1);
        grid.rebuild(&bodies);
        assert!(grid.cell(0, 0).is_empty());
        assert_eq!(grid.cell(1, 0), &[0]);
    }
}
