//! Grid-maze generation and shortest-path search with replayable event traces.
//!
//! The crate carves a spanning-tree maze over a rectangular grid with a randomized depth-first
//! traversal, solves start-to-end shortest paths with a best-first search, and reports both
//! algorithms as ordered in-memory event logs. Consumers that want to replay or animate the
//! algorithms read the logs; consumers that only want the result read the grid walls and the
//! reconstructed path.
//!
//! Randomness is injected through a seedable generator, so a fixed `(rows, cols, seed)` triple
//! reproduces the same maze and the same logs byte for byte.
//!
//! ```
//! use mazetrace::{Grid, MazeBuilder, PathFinder};
//!
//! # fn main() -> Result<(), mazetrace::MazeError> {
//! let mut grid = Grid::new(4, 6)?;
//! let carve_log = MazeBuilder::from_seed(7).carve(&mut grid);
//! assert_eq!(carve_log.len(), 4 * 6 - 1);
//!
//! let finder = PathFinder::new(&grid, (0, 0), (3, 5))?;
//! let visit_log = finder.search(&mut grid);
//! assert_eq!(
//!     visit_log.last().map(|event| (event.row, event.col)),
//!     Some((3, 5))
//! );
//!
//! let path = finder.trace_back(&grid)?;
//! assert_eq!(path.first(), Some(&(3, 5)));
//! assert_eq!(path.last(), Some(&(0, 0)));
//! # Ok(())
//! # }
//! ```

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

pub mod builder;
pub mod direction;
pub mod error;
pub mod grid;
pub mod solver;

pub use builder::{CarveEvent, MazeBuilder};
pub use direction::Direction;
pub use error::MazeError;
pub use grid::{Cell, Grid};
pub use solver::{PathFinder, VisitEvent};
