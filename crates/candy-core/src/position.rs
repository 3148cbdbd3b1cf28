//! Board coordinates.

use std::fmt::{self, Display};

/// A cell coordinate on the board, identified by column and row.
///
/// Row 0 is the top row; [`Position::bottom`] moves towards increasing rows.
/// Neighbor accessors perform no bounds checking, so positions outside the
/// board are representable. Reading such a position from a
/// [`GameField`](crate::GameField) yields [`Tile::Hole`](crate::Tile::Hole).
///
/// # Examples
///
/// ```
/// use candy_core::Position;
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos.left(), Position::new(1, 3));
/// assert_eq!(pos.top(), Position::new(2, 2));
/// assert_eq!(Position::new(0, 0).left(), Position::new(-1, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    column: i32,
    row: i32,
}

impl Position {
    /// Creates a position from a column and a row.
    #[must_use]
    #[inline]
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// Returns the column (x coordinate).
    #[must_use]
    #[inline]
    pub const fn column(self) -> i32 {
        self.column
    }

    /// Returns the row (y coordinate).
    #[must_use]
    #[inline]
    pub const fn row(self) -> i32 {
        self.row
    }

    /// Returns the position one column to the left.
    #[must_use]
    #[inline]
    pub const fn left(self) -> Self {
        Self::new(self.column - 1, self.row)
    }

    /// Returns the position one column to the right.
    #[must_use]
    #[inline]
    pub const fn right(self) -> Self {
        Self::new(self.column + 1, self.row)
    }

    /// Returns the position one row up.
    #[must_use]
    #[inline]
    pub const fn top(self) -> Self {
        Self::new(self.column, self.row - 1)
    }

    /// Returns the position one row down.
    #[must_use]
    #[inline]
    pub const fn bottom(self) -> Self {
        Self::new(self.column, self.row + 1)
    }

    /// Returns the Euclidean distance between two positions.
    ///
    /// # Examples
    ///
    /// ```
    /// use candy_core::Position;
    ///
    /// let a = Position::new(0, 0);
    /// assert!((a.distance_to(Position::new(3, 4)) - 5.0).abs() < f64::EPSILON);
    /// ```
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        let dx = f64::from(other.column - self.column);
        let dy = f64::from(other.row - self.row);
        dx.hypot(dy)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}
