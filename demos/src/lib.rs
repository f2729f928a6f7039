//! Shared setup and text rendering for the terminal demos.
//!
//! Both binaries build a random map with [`setup`], then print it with
//! [`render`]: `find` once after a full search, `animate` after every step.

use std::time::Duration;

use gridstar_core::Point;
use gridstar_mapgen::{FillRule, MapGen};
use gridstar_paths::{GridError, PathGrid, SearchState};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub const LEGEND: &str = "\
                Start: S.
                  End: E.
                 Path: *.
           Unpassable: O.
    Open / closed set: + / .
";

/// Demo parameters.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub width: i32,
    pub height: i32,
    /// Fixed seed for reproducible maps; `None` draws one from the OS.
    pub seed: Option<u64>,
    /// The blocking probability is drawn uniformly below this.
    pub max_blocked_pct: f64,
    /// Pause between animation frames.
    pub frame_delay: Duration,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: 16,
            height: 16,
            seed: None,
            max_blocked_pct: 1.0 / 3.0,
            frame_delay: Duration::from_millis(50),
        }
    }
}

/// A filled grid with random endpoints, ready to search.
pub struct Demo {
    pub grid: PathGrid,
    pub rule: FillRule,
    pub start: Point,
    pub end: Point,
}

/// Build a random map as described by `config`.
pub fn setup(config: &DemoConfig) -> Result<Demo, GridError> {
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut mg = MapGen::new(rng);
    let mut grid = PathGrid::new(config.width, config.height)?;
    let rule = mg.random_rule(config.max_blocked_pct);
    mg.fill(&mut grid, &rule);
    let (start, end) = mg.random_endpoints(&mut grid)?;
    log::debug!("demo map {}x{}, {start} -> {end}", config.width, config.height);
    Ok(Demo {
        grid,
        rule,
        start,
        end,
    })
}

/// Glyph for one cell, in priority order.
fn glyph(grid: &PathGrid, p: Point) -> char {
    if grid.is_start(p) {
        'S'
    } else if grid.is_end(p) {
        'E'
    } else if grid.is_path(p) {
        '*'
    } else if !grid.is_passable(p) {
        'O'
    } else if grid.is_open(p) {
        '+'
    } else if grid.is_closed(p) {
        '.'
    } else {
        ' '
    }
}

/// Draw the grid inside a frame, two columns per cell, followed by a status
/// line.
pub fn render(grid: &PathGrid) -> String {
    let border = format!("+{}+\n", "-".repeat(2 * grid.cols() as usize + 1));
    let mut out = String::with_capacity(border.len() * (grid.rows() as usize + 3));
    out.push_str(&border);
    for y in 0..grid.rows() {
        out.push('|');
        for x in 0..grid.cols() {
            out.push(' ');
            out.push(glyph(grid, Point::new(x, y)));
        }
        out.push_str(" |\n");
    }
    out.push_str(&border);
    match grid.state() {
        SearchState::Found => out.push_str("A path was found!\n"),
        SearchState::Exhausted => out.push_str("No path was found!\n"),
        SearchState::Running => {
            out.push_str(&format!(
                "Searching... {} cells expanded\n",
                grid.expansions()
            ));
        }
        SearchState::Idle => {}
    }
    out
}
