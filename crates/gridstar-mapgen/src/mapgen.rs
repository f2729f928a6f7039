//! Random fills: independent per-cell blocking and random endpoints.

use gridstar_core::{Point, Range};
use gridstar_paths::{GridError, PathGrid};
use rand::Rng;

/// How densely a fill blocks cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillRule {
    /// Probability (0.0–1.0) that any given cell is impassable.
    pub blocked_pct: f64,
}

impl Default for FillRule {
    fn default() -> Self {
        Self { blocked_pct: 0.25 }
    }
}

impl FillRule {
    /// The blocking probability forced into `[0, 1]`; NaN counts as 0.
    pub fn probability(&self) -> f64 {
        if self.blocked_pct.is_nan() {
            0.0
        } else {
            self.blocked_pct.clamp(0.0, 1.0)
        }
    }
}

/// Random map generator driving a [`PathGrid`] through its fill predicate.
pub struct MapGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MapGen<R> {
    /// Create a generator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// A rule whose blocking probability is uniform in `[0, max_blocked_pct)`.
    ///
    /// Non-positive maxima give an all-passable rule.
    pub fn random_rule(&mut self, max_blocked_pct: f64) -> FillRule {
        let max = FillRule {
            blocked_pct: max_blocked_pct,
        }
        .probability();
        if max <= 0.0 {
            return FillRule { blocked_pct: 0.0 };
        }
        FillRule {
            blocked_pct: self.rng.random_range(0.0..max),
        }
    }

    /// Fill `grid`, blocking each cell independently with the rule's
    /// probability. Returns the number of blocked cells.
    pub fn fill(&mut self, grid: &mut PathGrid, rule: &FillRule) -> usize {
        let p = rule.probability();
        let mut blocked = 0usize;
        grid.fill(|_| {
            let passable = !self.rng.random_bool(p);
            if !passable {
                blocked += 1;
            }
            passable
        });
        log::debug!(
            "random fill at {:.3}: {blocked} of {} cells blocked",
            p,
            grid.range().len()
        );
        blocked
    }

    /// A uniformly random point of `range`; `range.min` if it is empty.
    pub fn random_point(&mut self, range: Range) -> Point {
        if range.is_empty() {
            return range.min;
        }
        Point::new(
            self.rng.random_range(range.min.x..range.max.x),
            self.rng.random_range(range.min.y..range.max.y),
        )
    }

    /// Place start and end on random cells of `grid` (they may coincide and
    /// may be blocked). Returns `(start, end)`.
    pub fn random_endpoints(&mut self, grid: &mut PathGrid) -> Result<(Point, Point), GridError> {
        let start = self.random_point(grid.range());
        let end = self.random_point(grid.range());
        grid.set_start(start)?;
        grid.set_end(end)?;
        Ok((start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seeded(seed: u64) -> MapGen<StdRng> {
        MapGen::new(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn probability_is_clamped() {
        assert_eq!(FillRule { blocked_pct: -0.5 }.probability(), 0.0);
        assert_eq!(FillRule { blocked_pct: 3.0 }.probability(), 1.0);
        assert_eq!(FillRule { blocked_pct: f64::NAN }.probability(), 0.0);
        assert_eq!(FillRule::default().probability(), 0.25);
    }

    #[test]
    fn extreme_rules() {
        let mut mg = seeded(1);
        let mut grid = PathGrid::new(8, 8).unwrap();

        assert_eq!(mg.fill(&mut grid, &FillRule { blocked_pct: 0.0 }), 0);
        assert!(grid.range().iter().all(|p| grid.is_passable(p)));

        assert_eq!(mg.fill(&mut grid, &FillRule { blocked_pct: 1.0 }), 64);
        assert!(grid.range().iter().all(|p| !grid.is_passable(p)));
    }

    #[test]
    fn fill_blocks_roughly_the_rule() {
        let mut mg = seeded(2);
        let mut grid = PathGrid::new(40, 40).unwrap();
        let blocked = mg.fill(&mut grid, &FillRule { blocked_pct: 0.5 });
        assert!((600..1000).contains(&blocked), "blocked {blocked}");
        let counted = grid.range().iter().filter(|&p| !grid.is_passable(p)).count();
        assert_eq!(counted, blocked);
    }

    #[test]
    fn same_seed_same_map() {
        let mut a = PathGrid::new(16, 16).unwrap();
        let mut b = PathGrid::new(16, 16).unwrap();
        seeded(9).fill(&mut a, &FillRule::default());
        seeded(9).fill(&mut b, &FillRule::default());
        for p in a.range() {
            assert_eq!(a.is_passable(p), b.is_passable(p));
        }
    }

    #[test]
    fn random_rule_stays_below_max() {
        let mut mg = seeded(3);
        for _ in 0..100 {
            let r = mg.random_rule(1.0 / 3.0);
            assert!((0.0..1.0 / 3.0).contains(&r.blocked_pct));
        }
        assert_eq!(mg.random_rule(0.0).blocked_pct, 0.0);
        assert_eq!(mg.random_rule(-1.0).blocked_pct, 0.0);
    }

    #[test]
    fn endpoints_land_inside() {
        let mut mg = seeded(4);
        let mut grid = PathGrid::new(5, 3).unwrap();
        for _ in 0..50 {
            let (s, e) = mg.random_endpoints(&mut grid).unwrap();
            assert!(grid.range().contains(s));
            assert!(grid.range().contains(e));
            assert!(grid.is_start(s));
            assert!(grid.is_end(e));
        }
    }

    #[test]
    fn random_point_in_empty_range() {
        let mut mg = seeded(5);
        let r = Range::new(2, 2, 2, 6);
        assert_eq!(mg.random_point(r), Point::new(2, 2));
    }
}
