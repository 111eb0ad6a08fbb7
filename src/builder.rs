//! Randomized depth-first maze carving.
//!
//! The builder turns a fully walled [`Grid`] into a spanning-tree maze: every cell ends up
//! connected to every other cell through exactly one corridor path. Each removed wall-pair is
//! recorded in carve order so a consumer can replay how the maze was built.

use rand::{rngs::StdRng, seq::SliceRandom as _, Rng, SeedableRng as _};

use crate::{direction::Direction, grid::Grid};

/// One removed wall-pair, reported from both sides.
///
/// This structure records a single carving step: the wall opened on the previously visited cell
/// and the mirrored wall opened on the cell the traversal advanced into. The two sides always
/// name opposite directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarveEvent {
    /// `(row, col, opened_side)` of the cell the traversal came from.
    pub prev: (usize, usize, Direction),
    /// `(row, col, opened_side)` of the cell the traversal advanced into.
    pub cur: (usize, usize, Direction),
}

/// Spanning-tree maze carver.
///
/// This structure owns the random generator that drives maze variety. The generator is injected
/// rather than global so a fixed seed reproduces an identical maze, event log included,
/// byte for byte.
#[derive(Debug)]
pub struct MazeBuilder<R> {
    /// Injected random generator; the sole source of maze variety.
    rng: R,
}

impl MazeBuilder<StdRng> {
    /// Creates a builder backed by a standard generator seeded with `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MazeBuilder<R> {
    /// Creates a builder that draws its randomness from `rng`.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Carves a spanning-tree maze into `grid` and returns the ordered wall-removal log.
    ///
    /// The traversal is an iterative depth-first walk over an explicit stack, so recursion depth
    /// never limits the grid size. Work items carry the direction along which the cell was
    /// entered; the incoming wall-pair is removed when the item is popped, immediately before
    /// the cell's own neighbors are explored, which makes the event log a valid depth-first
    /// carve order.
    ///
    /// Unvisited neighbors are collected in the fixed [`Direction::ALL`] order, shuffled
    /// uniformly, and marked visited at push time. Marking at push time rather than pop time is
    /// required for correctness: two shuffled branches could otherwise queue the same cell twice
    /// before either copy is processed.
    ///
    /// Carving an already-carved grid finds no unvisited cells and returns an empty log.
    pub fn carve(&mut self, grid: &mut Grid) -> Vec<CarveEvent> {
        let mut events = Vec::new();
        let mut stack = vec![(0_usize, 0_usize, None::<Direction>)];
        grid.mark_visited(0, 0);

        while let Some((row, col, entered_along)) = stack.pop() {
            if let Some(side) = entered_along {
                // The previous cell sits one step back against the entry direction.
                if let Some((prev_row, prev_col)) = grid.neighbor_coords(row, col, side.opposite())
                {
                    grid.remove_wall_pair(prev_row, prev_col, side);
                    events.push(CarveEvent {
                        prev: (prev_row, prev_col, side),
                        cur: (row, col, side.opposite()),
                    });
                }
            }

            let mut candidates: Vec<(Direction, usize, usize)> = grid
                .neighbors_in_bounds(row, col)
                .filter(|&(_, neighbor_row, neighbor_col)| {
                    !grid.is_visited(neighbor_row, neighbor_col)
                })
                .collect();
            candidates.shuffle(&mut self.rng);

            for (side, neighbor_row, neighbor_col) in candidates {
                grid.mark_visited(neighbor_row, neighbor_col);
                stack.push((neighbor_row, neighbor_col, Some(side)));
            }
        }

        events
    }
}
