//! A* search over a [`PathGrid`], runnable to completion or one expansion
//! at a time.
//!
//! The open set is the set of cells flagged open; selection scans it for the
//! lowest f-score and breaks ties by the lowest linear index, so identical
//! inputs always expand cells in the same order. Neighbours are visited up,
//! right, down, left.

use gridstar_core::Point;

use crate::distance::manhattan;
use crate::grid::PathGrid;
use crate::neighbors::cardinal;
use crate::traits::{CellCost, NoExtraCost};

/// Lifecycle of the search held by a [`PathGrid`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchState {
    /// No search in progress; flags and scores are cleared.
    #[default]
    Idle,
    /// [`begin`](PathGrid::begin) was called and the search has not ended.
    Running,
    /// The end cell was reached and the path is marked.
    Found,
    /// The open set ran empty before reaching the end.
    Exhausted,
}

/// Result of a single [`step`](PathGrid::step).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepOutcome {
    /// One cell was expanded; more steps are needed.
    Continue,
    /// The end cell was selected; the path is marked.
    Found,
    /// No open cell is left; the end is unreachable.
    Exhausted,
}

impl StepOutcome {
    /// Whether the search is over.
    #[inline]
    pub fn is_done(self) -> bool {
        !matches!(self, Self::Continue)
    }
}

/// Summary of a search run with [`find`](PathGrid::find).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    /// Whether the end was reached.
    pub found: bool,
    /// Number of cells expanded.
    pub expansions: usize,
    /// Path length (g-score of the end cell) when found.
    pub cost: Option<i32>,
}

impl PathGrid {
    /// Current search lifecycle state.
    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Number of cells expanded by the current search.
    #[inline]
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Run a search from start to end to completion.
    pub fn find(&mut self) -> PathResult {
        self.find_with(&NoExtraCost)
    }

    /// Run a search to completion, adding `cost` to every scored cell's
    /// f-score.
    pub fn find_with<C: CellCost + ?Sized>(&mut self, cost: &C) -> PathResult {
        self.begin();
        while !self.step_with(cost).is_done() {}
        let found = self.has_path;
        PathResult {
            found,
            expansions: self.expansions,
            cost: found.then(|| self.cells[self.end].g),
        }
    }

    /// Start a fresh search: clear previous search state and open the start
    /// cell with `g = 0` and `f` equal to its heuristic.
    pub fn begin(&mut self) {
        self.clear_path();
        let h = manhattan(self.start(), self.end());
        let start = &mut self.cells[self.start];
        start.g = 0;
        start.f = h;
        start.open = true;
        self.state = SearchState::Running;
        log::debug!("search {} -> {} begins", self.start(), self.end());
    }

    /// Perform one expansion with no extra cost.
    pub fn step(&mut self) -> StepOutcome {
        self.step_with(&NoExtraCost)
    }

    /// Perform one A* expansion, scoring newly reached cells with `cost`.
    ///
    /// Stepping an idle grid begins a search first. Once the search has
    /// ended, further steps return the final outcome without changing
    /// anything.
    pub fn step_with<C: CellCost + ?Sized>(&mut self, cost: &C) -> StepOutcome {
        match self.state {
            SearchState::Idle => self.begin(),
            SearchState::Running => {}
            SearchState::Found => return StepOutcome::Found,
            SearchState::Exhausted => return StepOutcome::Exhausted,
        }

        let Some(current) = self.lowest_open() else {
            self.has_path = false;
            self.state = SearchState::Exhausted;
            log::debug!(
                "search {} -> {} exhausted after {} expansions",
                self.start(),
                self.end(),
                self.expansions
            );
            return StepOutcome::Exhausted;
        };

        if current == self.end {
            self.reconstruct_path();
            self.has_path = true;
            self.state = SearchState::Found;
            log::debug!(
                "search {} -> {} found, cost {} after {} expansions",
                self.start(),
                self.end(),
                self.cells[current].g,
                self.expansions
            );
            return StepOutcome::Found;
        }

        self.expand(current, cost);
        StepOutcome::Continue
    }

    /// The whole path from start to end, both included, after a search that
    /// found one.
    pub fn path(&self) -> Option<Vec<Point>> {
        if !self.has_path {
            return None;
        }
        let mut path = vec![self.end()];
        let mut ci = self.end;
        while ci != self.start {
            ci = self.cells[ci].parent?;
            path.push(self.point_at(ci));
        }
        path.reverse();
        Some(path)
    }

    /// Open cell with the lowest f-score; first in index order on ties.
    fn lowest_open(&self) -> Option<usize> {
        let mut best: Option<(usize, i32)> = None;
        for (i, c) in self.cells.iter().enumerate() {
            if c.open && best.is_none_or(|(_, f)| c.f < f) {
                best = Some((i, c.f));
            }
        }
        best.map(|(i, _)| i)
    }

    fn expand<C: CellCost + ?Sized>(&mut self, current: usize, cost: &C) {
        self.cells[current].close();
        self.expansions += 1;
        let current_g = self.cells[current].g;
        let goal = self.end();
        log::trace!(
            "expand {} g={} f={}",
            self.point_at(current),
            current_g,
            self.cells[current].f
        );

        for ni in cardinal(current, self.cols, self.cells.len())
            .into_iter()
            .flatten()
        {
            let n = self.cells[ni];
            if n.closed {
                continue;
            }
            if !n.passable {
                // Walls are rejected once and never scored.
                self.cells[ni].close();
                continue;
            }
            let tentative_g = current_g + 1;
            if n.open && tentative_g >= n.g {
                continue;
            }
            let np = self.point_at(ni);
            let f = (tentative_g + manhattan(np, goal)).saturating_add(cost.extra_cost(np));
            let n = &mut self.cells[ni];
            n.parent = Some(current);
            n.g = tentative_g;
            n.f = f;
            n.open = true;
        }
    }

    /// Mark every cell strictly between start and end by walking parents
    /// back from the end.
    fn reconstruct_path(&mut self) {
        let mut ci = self.end;
        // At most one hop per cell.
        for _ in 0..self.cells.len() {
            if ci == self.start {
                break;
            }
            let Some(parent) = self.cells[ci].parent else {
                break;
            };
            if parent != self.start {
                self.cells[parent].path = true;
            }
            ci = parent;
        }
    }
}
