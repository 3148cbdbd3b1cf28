//! Grid algorithms for the match-three rules engine.
//!
//! [`GameMechanics`] borrows a [`GameField`](candy_core::GameField) and
//! implements every rule of a resolution step:
//!
//! - swap validation and execution, plus discovery of the swaps still open
//! - run detection around a position and full-board run scans
//! - removal of matched tiles
//! - [`gravity`]: collapsing tiles into the holes below them
//! - [`refill`]: filling the remaining holes from a [`TileSource`]
//!
//! The mechanics never sleep, animate or count cascades. Sequencing those
//! steps is left to the caller.
//!
//! # Examples
//!
//! ```
//! use candy_core::GameField;
//! use candy_mechanics::{GameMechanics, RandomTileSource};
//!
//! let mut field: GameField = "
//!     [B, C, D]
//!     [A, A, A]
//!     [E, F, B]
//! "
//! .parse()?;
//! let mut mechanics = GameMechanics::new(&mut field);
//!
//! let rows = mechanics.get_and_remove_all_horizontal_rows();
//! assert_eq!(rows.len(), 1);
//!
//! let moves = mechanics.next_moves();
//! assert_eq!(moves.len(), 3);
//!
//! let inserts = mechanics.new_tile_moves(&mut RandomTileSource::from_seed(7));
//! mechanics.insert(&inserts);
//! assert_eq!(field.hole_count(), 0);
//! # Ok::<(), candy_core::FieldParseError>(())
//! ```

pub mod gravity;
mod mechanics;
pub mod refill;
mod tile_source;

#[cfg(test)]
mod testing;

pub use self::{
    gravity::Move,
    mechanics::{GameMechanics, MIN_RUN_LENGTH},
    refill::InsertMove,
    tile_source::{RandomTileSource, TileSource},
};
