use gridstar_core::Point;

/// Extra per-cell cost added to a cell's f-score when it is scored.
///
/// Lets callers steer the search away from some cells (terrain, danger)
/// without touching the unit step cost. Any `Fn(Point) -> i32` closure is a
/// `CellCost`.
pub trait CellCost {
    /// Extra cost of entering `p`.
    fn extra_cost(&self, p: Point) -> i32;
}

impl<F: Fn(Point) -> i32> CellCost for F {
    #[inline]
    fn extra_cost(&self, p: Point) -> i32 {
        self(p)
    }
}

/// Zero extra cost everywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoExtraCost;

impl CellCost for NoExtraCost {
    #[inline]
    fn extra_cost(&self, _p: Point) -> i32 {
        0
    }
}
