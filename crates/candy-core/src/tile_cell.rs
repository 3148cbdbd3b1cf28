use std::fmt::{self, Display};

use crate::{Position, Tile};

/// A snapshot of the tile stored at a position when it was read.
///
/// Holding a `TileCell` does not track later changes to the field; it is a
/// report value (removed cells, move endpoints), not a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCell {
    tile: Tile,
    position: Position,
}

impl TileCell {
    /// Creates a snapshot of `tile` at `position`.
    #[must_use]
    #[inline]
    pub const fn new(tile: Tile, position: Position) -> Self {
        Self { tile, position }
    }

    /// Returns the tile that was read.
    #[must_use]
    #[inline]
    pub const fn tile(&self) -> Tile {
        self.tile
    }

    /// Returns the position the tile was read from.
    #[must_use]
    #[inline]
    pub const fn position(&self) -> Position {
        self.position
    }
}

impl Display for TileCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.tile, self.position)
    }
}
