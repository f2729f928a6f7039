/// Per-cell pathfinding state.
///
/// A cell that has been closed never becomes open again within the same
/// search; closing clears the open flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellState {
    pub(crate) passable: bool,
    pub(crate) open: bool,
    pub(crate) closed: bool,
    pub(crate) path: bool,
    pub(crate) g: i32,
    pub(crate) f: i32,
    pub(crate) parent: Option<usize>,
}

impl Default for CellState {
    fn default() -> Self {
        Self {
            passable: true,
            open: false,
            closed: false,
            path: false,
            g: 0,
            f: 0,
            parent: None,
        }
    }
}

impl CellState {
    /// Whether the cell can be entered.
    #[inline]
    pub fn passable(&self) -> bool {
        self.passable
    }

    /// Whether the cell is on the search frontier.
    #[inline]
    pub fn open(&self) -> bool {
        self.open
    }

    /// Whether the cell has been expanded or rejected as impassable.
    #[inline]
    pub fn closed(&self) -> bool {
        self.closed
    }

    /// Whether the cell lies strictly between start and end on the found path.
    #[inline]
    pub fn path(&self) -> bool {
        self.path
    }

    /// Best known cost from the start (g-score).
    #[inline]
    pub fn g(&self) -> i32 {
        self.g
    }

    /// Ordering score: g plus heuristic plus extra cost (f-score).
    #[inline]
    pub fn f(&self) -> i32 {
        self.f
    }

    /// Linear index of the predecessor on the best known path.
    #[inline]
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    #[inline]
    pub(crate) fn close(&mut self) {
        self.open = false;
        self.closed = true;
    }

    /// Forget everything but passability.
    #[inline]
    pub(crate) fn reset_search(&mut self) {
        *self = Self {
            passable: self.passable,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_clears_open() {
        let mut c = CellState {
            open: true,
            ..CellState::default()
        };
        c.close();
        assert!(c.closed());
        assert!(!c.open());
    }

    #[test]
    fn reset_keeps_passability() {
        let mut c = CellState {
            passable: false,
            closed: true,
            path: true,
            g: 3,
            f: 7,
            parent: Some(2),
            ..CellState::default()
        };
        c.reset_search();
        assert_eq!(
            c,
            CellState {
                passable: false,
                ..CellState::default()
            }
        );
    }
}
