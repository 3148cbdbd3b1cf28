//! Gravity: collapsing tiles into the holes below them.

use std::fmt::{self, Display};

use candy_core::{Position, Tile};

use crate::GameMechanics;

/// A gravity relocation: the tile currently at [`tile`](Self::tile) ends up
/// at [`target`](Self::target), a hole lower in the same column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    target: Position,
    tile: Position,
}

impl Move {
    /// Creates a move of the tile at `tile` into `target`.
    #[must_use]
    pub const fn new(target: Position, tile: Position) -> Self {
        Self { target, tile }
    }

    /// Returns the destination of the tile.
    #[must_use]
    pub const fn target(&self) -> Position {
        self.target
    }

    /// Returns where the tile is before the move.
    #[must_use]
    pub const fn tile(&self) -> Position {
        self.tile
    }

    /// Returns the distance travelled, for animation pacing.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.tile.distance_to(self.target)
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.tile, self.target)
    }
}

impl GameMechanics<'_> {
    /// Finds the next gravity move in `column` without applying it.
    ///
    /// The column is scanned bottom to top. The first hole found becomes the
    /// target, and the first tile above it is the one to move.
    #[must_use]
    pub fn next_move(&self, column: i32) -> Option<Move> {
        let mut hole = None;
        for cell in self.field.column_cells(column).into_iter().rev() {
            match hole {
                None if cell.tile().is_hole() => hole = Some(cell.position()),
                Some(target) if cell.tile().is_tile() => {
                    return Some(Move::new(target, cell.position()));
                }
                _ => {}
            }
        }
        None
    }

    /// Moves the tile at `mv.tile()` to `mv.target()` and leaves a hole behind.
    ///
    /// # Panics
    ///
    /// Panics if either position is off the board.
    pub fn apply_move(&mut self, mv: Move) {
        log::trace!("gravity move {mv}");
        self.field[mv.target()] = self.field[mv.tile()];
        self.field[mv.tile()] = Tile::Hole;
    }

    /// Applies gravity moves to `column` until none remain, returning them in
    /// the order applied.
    pub fn move_all(&mut self, column: i32) -> Vec<Move> {
        let mut moves = vec![];
        while let Some(mv) = self.next_move(column) {
            self.apply_move(mv);
            moves.push(mv);
        }
        moves
    }

    /// Runs [`move_all`](Self::move_all) on every column, left to right.
    ///
    /// This is the full gravity pass of one resolution step.
    pub fn next_moves(&mut self) -> Vec<Move> {
        self.field
            .columns()
            .flat_map(|column| self.move_all(column))
            .collect()
    }
}
