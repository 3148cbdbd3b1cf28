//! Core data structures for the match-three rules engine.
//!
//! This crate provides the board model shared by the mechanics and the
//! cascade flow:
//!
//! - [`position`]: integer `(column, row)` coordinates with neighbor accessors
//! - [`tile`]: the closed set of candy colors plus the empty [`Tile::Hole`]
//! - [`TileCell`]: an immutable snapshot of a tile at a position
//! - [`game_field`]: the mutable `width × height` board and its text form
//!
//! # Examples
//!
//! ```
//! use candy_core::{GameField, Position, Tile};
//!
//! let mut field: GameField = "
//!     [A, B, C]
//!     [D, E, F]
//! "
//! .parse()?;
//!
//! field.set(Position::new(0, 1), Tile::Hole);
//! assert_eq!(field[Position::new(0, 1)], Tile::Hole);
//!
//! // Reads outside the board are holes.
//! assert_eq!(field[Position::new(5, 5)], Tile::Hole);
//! # Ok::<(), candy_core::FieldParseError>(())
//! ```

pub mod game_field;
pub mod position;
pub mod tile;
mod tile_cell;

pub use self::{
    game_field::{FieldError, FieldParseError, GameField},
    position::Position,
    tile::{Tile, TileParseError},
    tile_cell::TileCell,
};
