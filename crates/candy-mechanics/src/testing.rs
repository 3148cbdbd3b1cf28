//! Shared helpers for the unit tests in this crate.

use candy_core::{GameField, Position, Tile, TileCell};
use proptest::prelude::*;

/// Parses a board from its bracketed text form.
#[track_caller]
pub(crate) fn field(text: &str) -> GameField {
    text.parse().expect("test board should parse")
}

/// Snapshots the cells at the given `(column, row)` pairs, in order.
pub(crate) fn positions_of(field: &GameField, coords: &[(i32, i32)]) -> Vec<TileCell> {
    coords
        .iter()
        .map(|&(column, row)| field.tile_cell(Position::new(column, row)))
        .collect()
}

/// Boards up to 6x6 mixing every color with holes.
pub(crate) fn arb_field() -> impl Strategy<Value = GameField> {
    (1_usize..7, 1_usize..7).prop_flat_map(|(width, height)| {
        prop::collection::vec(prop::sample::select(Tile::ALL.to_vec()), width * height)
            .prop_map(move |tiles| {
                GameField::from_tiles(width, height, tiles).expect("tile count matches size")
            })
    })
}
