//! Refill: generating new tiles for the holes left after gravity.

use std::{
    cmp::Ordering,
    fmt::{self, Display},
};

use candy_core::{Position, Tile};

use crate::{GameMechanics, TileSource};

/// A refill instruction: place a newly generated `tile` at `target`.
///
/// Ordering is by descending row, so sorting a list of insertions yields the
/// bottom row first. Ties are broken by column and then tile to keep the order
/// total. [`GameMechanics::insert`] itself does not sort; the order in which
/// insertions are shown is the presentation layer's choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InsertMove {
    target: Position,
    tile: Tile,
}

impl InsertMove {
    /// Creates an insertion of `tile` at `target`.
    #[must_use]
    pub const fn new(target: Position, tile: Tile) -> Self {
        Self { target, tile }
    }

    /// Returns the cell to fill.
    #[must_use]
    pub const fn target(&self) -> Position {
        self.target
    }

    /// Returns the tile to place.
    #[must_use]
    pub const fn tile(&self) -> Tile {
        self.tile
    }
}

impl Ord for InsertMove {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .target
            .row()
            .cmp(&self.target.row())
            .then_with(|| self.target.column().cmp(&other.target.column()))
            .then_with(|| self.tile.cmp(&other.tile))
    }
}

impl PartialOrd for InsertMove {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for InsertMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.tile, self.target)
    }
}

impl GameMechanics<'_> {
    /// Returns the positions of every hole, in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<Position> {
        self.field
            .cells()
            .filter(|cell| cell.tile().is_hole())
            .map(|cell| cell.position())
            .collect()
    }

    /// Produces one insertion per hole, asking `source` for a tile for the
    /// hole's column.
    ///
    /// The field is not modified; apply the result with
    /// [`insert`](Self::insert).
    pub fn new_tile_moves<S>(&self, source: &mut S) -> Vec<InsertMove>
    where
        S: TileSource + ?Sized,
    {
        self.empty_cells()
            .into_iter()
            .map(|pos| {
                let tile = source.next_tile(pos.column());
                debug_assert!(tile.is_tile(), "tile source produced a hole");
                InsertMove::new(pos, tile)
            })
            .collect()
    }

    /// Applies every insertion in the given order.
    ///
    /// # Panics
    ///
    /// Panics if a target is off the board.
    pub fn insert(&mut self, moves: &[InsertMove]) {
        for mv in moves {
            self.insert_one(*mv);
        }
    }

    /// Writes the insertion's tile to its target.
    ///
    /// # Panics
    ///
    /// Panics if the target is off the board.
    pub fn insert_one(&mut self, mv: InsertMove) {
        self.field[mv.target()] = mv.tile();
    }
}
