//! Random map policies for gridstar grids.
//!
//! The pathfinding engine never draws random numbers itself; it asks the
//! caller whether each cell is passable. [`MapGen`] is such a caller: it
//! blocks cells with a fixed probability and picks random endpoints.

pub mod mapgen;

pub use mapgen::{FillRule, MapGen};
