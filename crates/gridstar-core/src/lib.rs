//! **gridstar-core**: geometry primitives shared by the gridstar crates.
//!
//! Provides [`Point`] (an integer column/row pair) and [`Range`] (a
//! half-open rectangle) together with the row-major linear indexing used
//! by every per-cell array in the workspace.

pub mod geom;

pub use geom::{Point, Range, RangeIter};
