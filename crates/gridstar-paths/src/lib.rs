//! Steppable A* pathfinding on bounded 4-connected grids.
//!
//! A [`PathGrid`] owns the per-cell state of a fixed-size grid: passability,
//! open/closed set membership, path marks, scores and parent links. Callers
//! fill passability through a predicate, pick a start and an end, then
//! either run the whole search with [`PathGrid::find`] or drive it one
//! expansion at a time with [`PathGrid::begin`] and [`PathGrid::step`],
//! reading the per-cell flags in between (useful for animated output).
//!
//! ```
//! use gridstar_core::Point;
//! use gridstar_paths::PathGrid;
//!
//! let mut grid = PathGrid::new(3, 3).unwrap();
//! grid.fill(|p| p != Point::new(1, 1));
//! grid.set_start(Point::new(0, 1)).unwrap();
//! grid.set_end(Point::new(2, 1)).unwrap();
//!
//! let res = grid.find();
//! assert!(res.found);
//! assert_eq!(res.cost, Some(4));
//! assert!(grid.is_path(Point::new(1, 0)));
//! ```
//!
//! Scoring can be biased per cell with a [`CellCost`], e.g. a closure
//! `|p: Point| -> i32` passed to [`PathGrid::find_with`].

mod cell;
mod distance;
mod error;
mod grid;
mod neighbors;
mod search;
mod traits;

pub use cell::CellState;
pub use distance::manhattan;
pub use error::GridError;
pub use grid::{DEFAULT_MAX_CELLS, GridConfig, PathGrid};
pub use search::{PathResult, SearchState, StepOutcome};
pub use traits::{CellCost, NoExtraCost};
