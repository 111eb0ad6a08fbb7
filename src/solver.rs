//! Best-first shortest-path search over a carved grid.
//!
//! The solver explores the maze corridors with a priority queue ordered by distance plus a
//! squared grid-distance heuristic toward the end cell, records every finalized cell in pop
//! order, and reconstructs the path afterwards by following back-pointers. Since a carved grid
//! is a spanning tree, the path between any two cells is unique; the search order only decides
//! how much of the maze gets explored before the end cell pops.

use std::{cmp::Reverse, collections::BinaryHeap};

use crate::{direction::Direction, error::MazeError, grid::Grid};

/// One finalized cell of the search, in pop order.
///
/// This structure mirrors the state the search held for the cell at the moment it left the
/// queue: the distance from the origin along carved corridors and the back-pointer the path
/// reconstruction will follow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisitEvent {
    /// Row of the finalized cell.
    pub row: usize,
    /// Column of the finalized cell.
    pub col: usize,
    /// Distance from the search origin along carved corridors.
    pub distance: usize,
    /// Back-pointer toward the origin; `None` for the origin itself.
    pub predecessor: Option<(usize, usize)>,
}

/// Pending queue entry of the search.
///
/// The derived ordering compares fields top to bottom, so the queue is keyed by priority first
/// and by insertion sequence second. The sequence counter makes ordering at equal priorities
/// deterministic, which keeps the visit log reproducible for test fixtures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct QueueEntry {
    /// Distance plus heuristic; the min-heap key.
    priority: usize,
    /// Monotonic insertion counter breaking ties between equal priorities.
    sequence: usize,
    /// Row of the pending cell.
    row: usize,
    /// Column of the pending cell.
    col: usize,
    /// Distance from the origin carried by this entry.
    distance: usize,
}

/// Shortest-path searcher between two cells of a carved grid.
///
/// This structure only stores the validated endpoints; all search state lives on the grid cells
/// themselves, which the searcher mutates in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathFinder {
    /// Search origin.
    start: (usize, usize),
    /// Declared end cell.
    end: (usize, usize),
}

impl PathFinder {
    /// Creates a searcher for the given endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfBounds`] when either endpoint lies outside the grid.
    pub fn new(
        grid: &Grid,
        start: (usize, usize),
        end: (usize, usize),
    ) -> Result<Self, MazeError> {
        for (row, col) in [start, end] {
            if !grid.in_bounds(row, col) {
                return Err(MazeError::OutOfBounds { row, col });
            }
        }

        Ok(Self { start, end })
    }

    /// Runs the best-first search and returns the ordered visitation log.
    ///
    /// Every popped cell is recorded, origin first, and the search stops as soon as the end
    /// cell pops; an exhausted queue without reaching the end is a normal outcome and simply
    /// leaves the end cell out of the log. Stale queue entries are kept out by the strict
    /// distance-improvement check at relaxation time alone; there is no separate closed set, so
    /// the behavior matches uniform edge cost exactly.
    ///
    /// Distances and back-pointers on the grid are cleared before the run and finalized as each
    /// cell pops.
    pub fn search(&self, grid: &mut Grid) -> Vec<VisitEvent> {
        grid.clear_search_state();

        let mut events = Vec::new();
        let mut queue = BinaryHeap::new();
        let mut sequence = 0_usize;

        let (start_row, start_col) = self.start;
        grid.set_distance(start_row, start_col, 0);
        queue.push(Reverse(QueueEntry {
            priority: 0,
            sequence,
            row: start_row,
            col: start_col,
            distance: 0,
        }));

        while let Some(Reverse(entry)) = queue.pop() {
            events.push(VisitEvent {
                row: entry.row,
                col: entry.col,
                distance: entry.distance,
                predecessor: grid
                    .cell(entry.row, entry.col)
                    .ok()
                    .and_then(|cell| cell.predecessor()),
            });

            if (entry.row, entry.col) == self.end {
                break;
            }

            for side in Direction::ALL {
                let Some((neighbor_row, neighbor_col)) =
                    grid.neighbor_coords(entry.row, entry.col, side)
                else {
                    continue;
                };
                // Walls are symmetric, so the current cell's flag decides reachability.
                if grid.has_wall(entry.row, entry.col, side) {
                    continue;
                }

                let candidate = entry.distance + 1;
                if grid
                    .distance_of(neighbor_row, neighbor_col)
                    .map_or(true, |best| best > candidate)
                {
                    grid.set_predecessor(neighbor_row, neighbor_col, (entry.row, entry.col));
                    grid.set_distance(neighbor_row, neighbor_col, candidate);

                    let heuristic = self.end.0.abs_diff(neighbor_row).pow(2)
                        + self.end.1.abs_diff(neighbor_col).pow(2);
                    sequence += 1;
                    queue.push(Reverse(QueueEntry {
                        priority: candidate + heuristic,
                        sequence,
                        row: neighbor_row,
                        col: neighbor_col,
                        distance: candidate,
                    }));
                }
            }
        }

        events
    }

    /// Reconstructs the path by following back-pointers from the end cell.
    ///
    /// The returned coordinates run from the end cell back to the origin; callers reverse the
    /// sequence when they want start-to-end order.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::UnreachableGoal`] when the end cell's distance is still infinite,
    /// which is the authoritative signal that the search never reached it. Propagates
    /// [`MazeError::OutOfBounds`] only on internal misuse.
    pub fn trace_back(&self, grid: &Grid) -> Result<Vec<(usize, usize)>, MazeError> {
        let (end_row, end_col) = self.end;
        let end_cell = grid.cell(end_row, end_col)?;
        if end_cell.distance().is_none() {
            return Err(MazeError::UnreachableGoal {
                row: end_row,
                col: end_col,
            });
        }

        let mut path = vec![self.end];
        let mut current = end_cell.predecessor();
        while let Some((row, col)) = current {
            path.push((row, col));
            current = grid.cell(row, col)?.predecessor();
        }

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::builder::MazeBuilder;

    /// Independent breadth-first distance over open walls, for cross-validation.
    fn bfs_distance(grid: &Grid, start: (usize, usize), end: (usize, usize)) -> Option<usize> {
        let mut distances = vec![None; grid.rows() * grid.cols()];
        let mut queue = VecDeque::new();

        distances[start.0 * grid.cols() + start.1] = Some(0_usize);
        queue.push_back(start);

        while let Some((row, col)) = queue.pop_front() {
            let here = distances[row * grid.cols() + col].expect("queued cells have distances");
            if (row, col) == end {
                return Some(here);
            }
            for (side, neighbor_row, neighbor_col) in grid.neighbors_in_bounds(row, col) {
                if grid.has_wall(row, col, side) {
                    continue;
                }
                let slot = &mut distances[neighbor_row * grid.cols() + neighbor_col];
                if slot.is_none() {
                    *slot = Some(here + 1);
                    queue.push_back((neighbor_row, neighbor_col));
                }
            }
        }

        None
    }

    /// The 2x2 fixture carved `(0,0) -> (0,1) -> (1,1) -> (1,0)`.
    fn snake_fixture() -> Grid {
        let mut grid = Grid::new(2, 2).expect("2x2 must be a valid grid");
        grid.remove_wall_pair(0, 0, Direction::Right);
        grid.remove_wall_pair(0, 1, Direction::Down);
        grid.remove_wall_pair(1, 1, Direction::Left);
        grid
    }

    #[test]
    fn test_new_rejects_out_of_bounds_endpoints() {
        let grid = Grid::new(2, 2).expect("2x2 must be a valid grid");

        assert_eq!(
            PathFinder::new(&grid, (0, 0), (5, 5)).err(),
            Some(MazeError::OutOfBounds { row: 5, col: 5 })
        );
        assert_eq!(
            PathFinder::new(&grid, (2, 0), (1, 1)).err(),
            Some(MazeError::OutOfBounds { row: 2, col: 0 })
        );
    }

    #[test]
    fn test_snake_fixture_distance_and_path() {
        let mut grid = snake_fixture();
        let finder = PathFinder::new(&grid, (0, 0), (1, 0)).expect("endpoints are in bounds");

        let events = finder.search(&mut grid);
        let path = finder.trace_back(&grid).expect("the end cell is reachable");

        let last = events.last().expect("the log cannot be empty");
        assert_eq!((last.row, last.col, last.distance), (1, 0, 3));
        assert_eq!(path, vec![(1, 0), (1, 1), (0, 1), (0, 0)]);
    }

    #[test]
    fn test_visit_log_starts_at_origin_and_ends_at_goal() {
        let mut grid = snake_fixture();
        let finder = PathFinder::new(&grid, (0, 0), (1, 0)).expect("endpoints are in bounds");

        let events = finder.search(&mut grid);

        let first = events.first().expect("the log cannot be empty");
        assert_eq!(
            (first.row, first.col, first.distance, first.predecessor),
            (0, 0, 0, None),
            "the origin pops first with distance 0 and no back-pointer"
        );
        let distances: Vec<usize> = events.iter().map(|event| event.distance).collect();
        assert_eq!(distances, vec![0, 1, 2, 3], "the corridor forces pop order");
    }

    #[test]
    fn test_search_distance_matches_breadth_first_search() {
        let (rows, cols) = (8, 6);
        let mut grid = Grid::new(rows, cols).expect("8x6 must be a valid grid");
        let _events = MazeBuilder::from_seed(123).carve(&mut grid);

        let start = (0, 0);
        let end = (rows - 1, cols - 1);
        let finder = PathFinder::new(&grid, start, end).expect("endpoints are in bounds");
        let events = finder.search(&mut grid);

        let expected = bfs_distance(&grid, start, end).expect("a carved maze is connected");
        let last = events.last().expect("the log cannot be empty");
        assert_eq!((last.row, last.col), end, "the search must reach the end");
        assert_eq!(last.distance, expected, "distance must match plain BFS");
        assert_eq!(
            grid.cell(end.0, end.1)
                .expect("cell must be in bounds")
                .distance(),
            Some(expected)
        );
    }

    #[test]
    fn test_reconstructed_path_walks_open_walls() {
        let mut grid = Grid::new(7, 9).expect("7x9 must be a valid grid");
        let _events = MazeBuilder::from_seed(77).carve(&mut grid);

        let finder = PathFinder::new(&grid, (0, 0), (6, 8)).expect("endpoints are in bounds");
        let _log = finder.search(&mut grid);
        let mut path = finder.trace_back(&grid).expect("the end cell is reachable");
        path.reverse();

        assert_eq!(path.first(), Some(&(0, 0)), "the reversed path starts at the origin");
        assert_eq!(path.last(), Some(&(6, 8)), "and ends at the declared end cell");
        for pair in path.windows(2) {
            let (from, into) = (pair[0], pair[1]);
            let side = Direction::ALL
                .into_iter()
                .find(|side| grid.neighbor_coords(from.0, from.1, *side) == Some(into))
                .expect("consecutive path cells must be adjacent");
            assert!(
                !grid.has_wall(from.0, from.1, side),
                "consecutive path cells must share an open wall"
            );
        }
    }

    #[test]
    fn test_single_row_distance() {
        let mut grid = Grid::new(1, 5).expect("1x5 must be a valid grid");
        let _events = MazeBuilder::from_seed(3).carve(&mut grid);

        let finder = PathFinder::new(&grid, (0, 0), (0, 4)).expect("endpoints are in bounds");
        let events = finder.search(&mut grid);

        let last = events.last().expect("the log cannot be empty");
        assert_eq!((last.row, last.col, last.distance), (0, 4, 4));
    }

    #[test]
    fn test_unreachable_goal_on_uncarved_grid() {
        let mut grid = Grid::new(2, 2).expect("2x2 must be a valid grid");
        let finder = PathFinder::new(&grid, (0, 0), (1, 1)).expect("endpoints are in bounds");

        let events = finder.search(&mut grid);

        assert_eq!(events.len(), 1, "only the walled-in origin can pop");
        assert_eq!(
            finder.trace_back(&grid).err(),
            Some(MazeError::UnreachableGoal { row: 1, col: 1 }),
            "reconstruction must check the end distance, not the chain length"
        );
    }

    #[test]
    fn test_start_equals_end() {
        let mut grid = snake_fixture();
        let finder = PathFinder::new(&grid, (1, 1), (1, 1)).expect("endpoints are in bounds");

        let events = finder.search(&mut grid);
        let path = finder.trace_back(&grid).expect("the end cell is reachable");

        assert_eq!(events.len(), 1);
        assert_eq!(path, vec![(1, 1)]);
    }

    #[test]
    fn test_same_maze_reproduces_identical_visit_log() {
        let mut first_grid = Grid::new(6, 6).expect("6x6 must be a valid grid");
        let mut second_grid = Grid::new(6, 6).expect("6x6 must be a valid grid");
        let _first_carve = MazeBuilder::from_seed(2024).carve(&mut first_grid);
        let _second_carve = MazeBuilder::from_seed(2024).carve(&mut second_grid);

        let finder = PathFinder::new(&first_grid, (0, 0), (5, 5)).expect("endpoints are in bounds");
        let first = finder.search(&mut first_grid);
        let second = finder.search(&mut second_grid);

        assert_eq!(first, second, "identical mazes must produce identical logs");
    }

    #[test]
    fn test_search_resets_previous_run() {
        let mut grid = snake_fixture();
        let far = PathFinder::new(&grid, (0, 0), (1, 0)).expect("endpoints are in bounds");
        let near = PathFinder::new(&grid, (0, 0), (0, 1)).expect("endpoints are in bounds");

        let _far_log = far.search(&mut grid);
        let near_log = near.search(&mut grid);

        let last = near_log.last().expect("the log cannot be empty");
        assert_eq!((last.row, last.col, last.distance), (0, 1, 1));
        assert_eq!(
            grid.cell(1, 0).expect("cell must be in bounds").distance(),
            None,
            "cells beyond the second search stay unreached"
        );
    }
}
