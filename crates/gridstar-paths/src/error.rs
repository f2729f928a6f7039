use gridstar_core::Point;
use std::fmt;

/// Errors reported by [`PathGrid`](crate::PathGrid) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Grid dimensions are non-positive or exceed the cell capacity.
    InvalidDimensions {
        cols: i32,
        rows: i32,
        max_cells: usize,
    },
    /// A coordinate falls outside the grid.
    OutOfBounds(Point),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions {
                cols,
                rows,
                max_cells,
            } => write!(
                f,
                "invalid grid dimensions {cols}x{rows}: need at least 1x1 and at most {max_cells} cells"
            ),
            Self::OutOfBounds(p) => write!(f, "point {p} is outside the grid"),
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = GridError::InvalidDimensions {
            cols: 0,
            rows: 4,
            max_cells: 1024,
        };
        assert_eq!(
            e.to_string(),
            "invalid grid dimensions 0x4: need at least 1x1 and at most 1024 cells"
        );
        let e = GridError::OutOfBounds(Point::new(5, -1));
        assert_eq!(e.to_string(), "point (5, -1) is outside the grid");
    }
}
