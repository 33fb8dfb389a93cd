//! Positions within a 3x3 grid and full two-level move addresses.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A position on a 3x3 grid.
///
/// Used at both levels: the outer position picks a sub-board, the inner
/// position picks a square inside it. Out-of-range coordinates cannot be
/// represented.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to its row-major index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from a row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from row and column, each in `0..3`.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// Row of this position (0 is the top).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0 is the left).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Rotates the position a quarter turn clockwise about the center.
    pub fn rotate_clockwise(self) -> Self {
        Self::ALL[self.col() * 3 + (2 - self.row())]
    }

    /// Mirrors the position left-to-right.
    pub fn reflect_horizontal(self) -> Self {
        Self::ALL[self.row() * 3 + (2 - self.col())]
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Full address of a leaf square: which sub-board, and which square in it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_new::new,
)]
pub struct Address {
    /// The sub-board, as a position on the outer board.
    pub outer: Position,
    /// The square within that sub-board.
    pub inner: Position,
}

impl Address {
    /// Builds an address from `(outer_row, outer_col, inner_row, inner_col)`.
    ///
    /// Returns `None` if any coordinate is outside `0..3`.
    pub fn from_coords(
        outer_row: usize,
        outer_col: usize,
        inner_row: usize,
        inner_col: usize,
    ) -> Option<Self> {
        Some(Self {
            outer: Position::from_row_col(outer_row, outer_col)?,
            inner: Position::from_row_col(inner_row, inner_col)?,
        })
    }

    /// Returns `(outer_row, outer_col, inner_row, inner_col)`.
    pub fn coords(self) -> (usize, usize, usize, usize) {
        (
            self.outer.row(),
            self.outer.col(),
            self.inner.row(),
            self.inner.col(),
        )
    }

    /// Row on the flattened 9x9 grid.
    pub fn global_row(self) -> usize {
        self.outer.row() * 3 + self.inner.row()
    }

    /// Column on the flattened 9x9 grid.
    pub fn global_col(self) -> usize {
        self.outer.col() * 3 + self.inner.col()
    }

    /// Builds an address from a cell of the flattened 9x9 grid.
    pub fn from_global(row: usize, col: usize) -> Option<Self> {
        if row >= 9 || col >= 9 {
            return None;
        }
        Self::from_coords(row / 3, col / 3, row % 3, col % 3)
    }

    /// Rotates both levels a quarter turn clockwise.
    pub fn rotate_clockwise(self) -> Self {
        Self::new(self.outer.rotate_clockwise(), self.inner.rotate_clockwise())
    }

    /// Mirrors both levels left-to-right.
    pub fn reflect_horizontal(self) -> Self {
        Self::new(
            self.outer.reflect_horizontal(),
            self.inner.reflect_horizontal(),
        )
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (or, oc, ir, ic) = self.coords();
        write!(f, "({},{},{},{})", or, oc, ir, ic)
    }
}

/// Error parsing an [`Address`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum AddressParseError {
    /// Input did not contain exactly four coordinates.
    #[display("expected 4 coordinates, found {}", _0)]
    WrongArity(#[error(not(source))] usize),

    /// A coordinate was not a number in `0..3`.
    #[display("invalid coordinate {:?} (expected 0, 1 or 2)", _0)]
    BadCoordinate(#[error(not(source))] String),
}

impl FromStr for Address {
    type Err = AddressParseError;

    /// Parses `"r c r c"`, `"r,c,r,c"` or `"(r,c,r,c)"`.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')')
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        if parts.len() != 4 {
            return Err(AddressParseError::WrongArity(parts.len()));
        }

        let mut coords = [0usize; 4];
        for (slot, part) in coords.iter_mut().zip(&parts) {
            *slot = match part.parse::<usize>() {
                Ok(n) if n < 3 => n,
                _ => return Err(AddressParseError::BadCoordinate((*part).to_string())),
            };
        }

        Address::from_coords(coords[0], coords[1], coords[2], coords[3])
            .ok_or_else(|| AddressParseError::BadCoordinate(s.to_string()))
    }
}
