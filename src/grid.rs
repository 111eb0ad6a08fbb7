//! Grid arena of walled cells.
//!
//! The grid is the sole owner of every cell. [`crate::builder::MazeBuilder`] and
//! [`crate::solver::PathFinder`] both receive a mutable reference to it and mutate cell state in
//! place; the cells themselves carry no behavior beyond storage.

use std::fmt::{self, Display, Formatter};

use crate::{direction::Direction, error::MazeError};

/// A single grid cell.
///
/// This structure tracks the four wall flags of the cell plus the bookkeeping state the two
/// algorithms need: a visited flag used only while carving, and the best known distance and
/// back-pointer written by the search. A freshly created cell is fully walled, unvisited, and
/// unreached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Wall flags indexed by [`Direction::index`]; `true` means the wall is standing.
    walls: [bool; 4],
    /// Whether the carving pass has already claimed this cell.
    visited: bool,
    /// Best known distance from the search origin; `None` stands for infinity.
    distance: Option<usize>,
    /// Coordinates of the cell a shorter path to this cell was discovered from.
    predecessor: Option<(usize, usize)>,
}

impl Cell {
    /// Creates a fully walled, unvisited, unreached cell.
    const fn new() -> Self {
        Self {
            walls: [true; 4],
            visited: false,
            distance: None,
            predecessor: None,
        }
    }

    /// Returns `true` while the wall on the given side of this cell is standing.
    pub const fn has_wall(&self, side: Direction) -> bool {
        self.walls[side.index()]
    }

    /// Returns `true` once the carving pass has claimed this cell.
    pub const fn visited(&self) -> bool {
        self.visited
    }

    /// Returns the best known distance from the search origin, or `None` if unreached.
    pub const fn distance(&self) -> Option<usize> {
        self.distance
    }

    /// Returns the back-pointer set by the search, or `None` for the origin and unreached cells.
    pub const fn predecessor(&self) -> Option<(usize, usize)> {
        self.predecessor
    }
}

/// A rectangular `rows x cols` arena of cells.
///
/// Cells are stored row-major and addressed by 0-indexed `(row, col)` pairs with `(0, 0)` in one
/// corner. The grid upholds two invariants for its users: wall flags between adjacent cells stay
/// symmetric (both sides of a wall-pair are removed in one operation), and walls on the grid
/// boundary are never removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Number of rows.
    rows: usize,
    /// Number of columns.
    cols: usize,
    /// Row-major cell storage, exactly `rows * cols` entries.
    cells: Vec<Cell>,
}

impl Grid {
    /// Allocates a grid of fully walled cells.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidDimensions`] when either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MazeError> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }

        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::new(); rows * cols],
        })
    }

    /// Returns the number of rows.
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` when `(row, col)` addresses a cell of this grid.
    pub const fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Returns the row-major index of `(row, col)`.
    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Returns a shared reference to the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfBounds`] when the coordinate lies outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Result<&Cell, MazeError> {
        if self.in_bounds(row, col) {
            self.cells
                .get(self.index(row, col))
                .ok_or(MazeError::OutOfBounds { row, col })
        } else {
            Err(MazeError::OutOfBounds { row, col })
        }
    }

    /// Returns a mutable reference to the cell at `(row, col)`.
    fn cell_mut(&mut self, row: usize, col: usize) -> Result<&mut Cell, MazeError> {
        if self.in_bounds(row, col) {
            let index = self.index(row, col);
            self.cells
                .get_mut(index)
                .ok_or(MazeError::OutOfBounds { row, col })
        } else {
            Err(MazeError::OutOfBounds { row, col })
        }
    }

    /// Returns `true` while the wall on the given side of `(row, col)` is standing.
    ///
    /// Out-of-bounds coordinates report a standing wall, matching the fact that the grid
    /// boundary is never opened.
    pub fn has_wall(&self, row: usize, col: usize, side: Direction) -> bool {
        self.cell(row, col).map_or(true, |cell| cell.has_wall(side))
    }

    /// Returns the in-bounds neighbor of `(row, col)` in the given direction, if any.
    pub fn neighbor_coords(&self, row: usize, col: usize, side: Direction) -> Option<(usize, usize)> {
        let (dr, dc) = side.offset();
        let neighbor_row = row.checked_add_signed(dr)?;
        let neighbor_col = col.checked_add_signed(dc)?;

        self.in_bounds(neighbor_row, neighbor_col)
            .then_some((neighbor_row, neighbor_col))
    }

    /// Enumerates the in-bounds neighbors of `(row, col)`.
    ///
    /// The iterator is lazy and restartable and yields `(direction, neighbor_row, neighbor_col)`
    /// triples in the fixed [`Direction::ALL`] order. Both carving and searching depend on this
    /// exact order for seed-reproducible runs.
    pub fn neighbors_in_bounds(
        &self,
        row: usize,
        col: usize,
    ) -> impl Iterator<Item = (Direction, usize, usize)> + '_ {
        Direction::ALL.into_iter().filter_map(move |side| {
            self.neighbor_coords(row, col, side)
                .map(|(neighbor_row, neighbor_col)| (side, neighbor_row, neighbor_col))
        })
    }

    /// Removes the wall-pair between `(row, col)` and its neighbor in the given direction.
    ///
    /// Both mirrored wall flags are cleared in the same operation to keep the symmetry
    /// invariant. A direction whose neighbor lies outside the grid is a silent no-op; callers
    /// are expected to pass validated in-bounds directions.
    pub fn remove_wall_pair(&mut self, row: usize, col: usize, side: Direction) {
        let Some((neighbor_row, neighbor_col)) = self.neighbor_coords(row, col, side) else {
            return;
        };

        if let Ok(cell) = self.cell_mut(row, col) {
            cell.walls[side.index()] = false;
        }
        if let Ok(neighbor) = self.cell_mut(neighbor_row, neighbor_col) {
            neighbor.walls[side.opposite().index()] = false;
        }
    }

    /// Marks `(row, col)` as claimed by the carving pass.
    pub(crate) fn mark_visited(&mut self, row: usize, col: usize) {
        if let Ok(cell) = self.cell_mut(row, col) {
            cell.visited = true;
        }
    }

    /// Returns `true` when `(row, col)` has been claimed by the carving pass.
    ///
    /// Out-of-bounds coordinates count as visited so carving never walks off the grid.
    pub(crate) fn is_visited(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).map_or(true, Cell::visited)
    }

    /// Returns the best known search distance of `(row, col)`, or `None` if unreached.
    pub(crate) fn distance_of(&self, row: usize, col: usize) -> Option<usize> {
        self.cell(row, col).ok().and_then(Cell::distance)
    }

    /// Records a new best known distance for `(row, col)`.
    pub(crate) fn set_distance(&mut self, row: usize, col: usize, distance: usize) {
        if let Ok(cell) = self.cell_mut(row, col) {
            cell.distance = Some(distance);
        }
    }

    /// Records the cell a shorter path to `(row, col)` was discovered from.
    pub(crate) fn set_predecessor(&mut self, row: usize, col: usize, from: (usize, usize)) {
        if let Ok(cell) = self.cell_mut(row, col) {
            cell.predecessor = Some(from);
        }
    }

    /// Clears every cell's distance and back-pointer ahead of a fresh search.
    pub(crate) fn clear_search_state(&mut self) {
        for cell in &mut self.cells {
            cell.distance = None;
            cell.predecessor = None;
        }
    }
}

/// Renders the grid as ASCII walls, one `+---+` box segment per cell.
///
/// Removed walls leave gaps, so a carved grid prints as a maze. Debug and CLI surface only; the
/// core never interprets this output.
impl Display for Grid {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> fmt::Result {
        writeln!(fmt, "+{}", "---+".repeat(self.cols))?;

        for row in 0..self.rows {
            let mut body = String::from("|");
            let mut south = String::from("+");

            for col in 0..self.cols {
                body.push_str(if self.has_wall(row, col, Direction::Right) {
                    "   |"
                } else {
                    "    "
                });
                south.push_str(if self.has_wall(row, col, Direction::Down) {
                    "---+"
                } else {
                    "   +"
                });
            }

            writeln!(fmt, "{body}")?;
            writeln!(fmt, "{south}")?;
        }

        Ok(())
    }
}
