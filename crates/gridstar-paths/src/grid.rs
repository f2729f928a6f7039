use gridstar_core::{Point, Range};

use crate::cell::CellState;
use crate::error::GridError;
use crate::search::SearchState;

/// Default upper bound on the number of cells a [`PathGrid`] may hold.
pub const DEFAULT_MAX_CELLS: usize = 1 << 20;

/// Construction-time limits for a [`PathGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    /// Largest accepted `cols * rows`.
    pub max_cells: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            max_cells: DEFAULT_MAX_CELLS,
        }
    }
}

/// A fixed-size grid together with all the state of one A* search over it.
///
/// Cells are addressed by [`Point`] (`x` = column, `y` = row) and stored
/// row-major. The grid is allocated once; searches reuse the storage.
#[derive(Debug, Clone)]
pub struct PathGrid {
    pub(crate) rng: Range,
    pub(crate) cols: usize,
    pub(crate) cells: Vec<CellState>,
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) has_path: bool,
    pub(crate) state: SearchState,
    pub(crate) expansions: usize,
}

impl PathGrid {
    /// Create a `cols × rows` grid with every cell passable and start and
    /// end both at the origin.
    pub fn new(cols: i32, rows: i32) -> Result<Self, GridError> {
        Self::with_config(cols, rows, &GridConfig::default())
    }

    /// Like [`new`](Self::new) with an explicit capacity bound.
    pub fn with_config(cols: i32, rows: i32, config: &GridConfig) -> Result<Self, GridError> {
        let invalid = GridError::InvalidDimensions {
            cols,
            rows,
            max_cells: config.max_cells,
        };
        if cols < 1 || rows < 1 {
            log::debug!("rejecting grid {cols}x{rows}");
            return Err(invalid);
        }
        let len = match (cols as usize).checked_mul(rows as usize) {
            Some(len) if len <= config.max_cells => len,
            _ => {
                log::debug!("rejecting grid {cols}x{rows}: over {} cells", config.max_cells);
                return Err(invalid);
            }
        };
        Ok(Self {
            rng: Range::with_size(cols, rows),
            cols: cols as usize,
            cells: vec![CellState::default(); len],
            start: 0,
            end: 0,
            has_path: false,
            state: SearchState::Idle,
            expansions: 0,
        })
    }

    /// Set every cell's passability from `passable`, visiting cells in
    /// row-major order.
    ///
    /// Start and end are tracked separately from the map, so their cells are
    /// overwritten like any other. Any previous search is discarded.
    pub fn fill(&mut self, mut passable: impl FnMut(Point) -> bool) {
        self.clear_path();
        for (cell, p) in self.cells.iter_mut().zip(self.rng.iter()) {
            cell.passable = passable(p);
        }
        log::debug!(
            "filled {}x{} grid, {} blocked",
            self.cols(),
            self.rows(),
            self.cells.iter().filter(|c| !c.passable).count()
        );
    }

    /// Move the search start to `p`. Passability is left untouched.
    ///
    /// Takes effect at the next [`begin`](Self::begin) or [`find`](Self::find).
    pub fn set_start(&mut self, p: Point) -> Result<(), GridError> {
        self.start = self.checked_index(p)?;
        Ok(())
    }

    /// Move the search goal to `p`. Passability is left untouched.
    ///
    /// Takes effect at the next [`begin`](Self::begin) or [`find`](Self::find).
    pub fn set_end(&mut self, p: Point) -> Result<(), GridError> {
        self.end = self.checked_index(p)?;
        Ok(())
    }

    /// Clear open/closed/path flags, parents, scores and the search result,
    /// keeping dimensions and passability.
    pub fn clear_path(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.reset_search();
        }
        self.has_path = false;
        self.state = SearchState::Idle;
        self.expansions = 0;
    }

    /// Zero the g- and f-scores of every cell, leaving all flags in place.
    pub fn clear_score(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.g = 0;
            cell.f = 0;
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.rng.width()
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rng.height()
    }

    /// The rectangle covered by the grid, anchored at the origin.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Current start cell.
    #[inline]
    pub fn start(&self) -> Point {
        self.point_at(self.start)
    }

    /// Current end cell.
    #[inline]
    pub fn end(&self) -> Point {
        self.point_at(self.end)
    }

    /// Whether the last finished search found a path.
    #[inline]
    pub fn has_path(&self) -> bool {
        self.has_path
    }

    /// Full state of the cell at `p`, or `None` outside the grid.
    #[inline]
    pub fn cell(&self, p: Point) -> Option<&CellState> {
        self.rng.index(p).map(|i| &self.cells[i])
    }

    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.cell(p).is_some_and(|c| c.passable)
    }

    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.cell(p).is_some_and(|c| c.open)
    }

    #[inline]
    pub fn is_closed(&self, p: Point) -> bool {
        self.cell(p).is_some_and(|c| c.closed)
    }

    /// Whether `p` is an intermediate cell of the found path. Start and end
    /// are never marked.
    #[inline]
    pub fn is_path(&self, p: Point) -> bool {
        self.cell(p).is_some_and(|c| c.path)
    }

    #[inline]
    pub fn is_start(&self, p: Point) -> bool {
        self.rng.index(p) == Some(self.start)
    }

    #[inline]
    pub fn is_end(&self, p: Point) -> bool {
        self.rng.index(p) == Some(self.end)
    }

    /// Accumulated cost from the start (g-score) at `p`.
    #[inline]
    pub fn score(&self, p: Point) -> Option<i32> {
        self.cell(p).map(|c| c.g)
    }

    /// Ordering score (f-score) at `p`.
    #[inline]
    pub fn heuristic_score(&self, p: Point) -> Option<i32> {
        self.cell(p).map(|c| c.f)
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    #[inline]
    fn checked_index(&self, p: Point) -> Result<usize, GridError> {
        self.rng.index(p).ok_or_else(|| {
            log::debug!("point {p} outside {}", self.rng);
            GridError::OutOfBounds(p)
        })
    }

    /// Convert an in-grid linear index back to a point.
    #[inline]
    pub(crate) fn point_at(&self, idx: usize) -> Point {
        Point::new((idx % self.cols) as i32, (idx / self.cols) as i32)
    }
}
