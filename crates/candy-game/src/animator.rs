//! The boundary to whatever renders the board.

use std::future;

use candy_core::{GameField, Position, TileCell};
use candy_mechanics::{InsertMove, Move};

/// Drives the visual side of a cascade.
///
/// Each `animate_*` method starts a transition and returns a future that
/// resolves exactly once, when the transition has finished. The flow awaits
/// every future before performing its next mutation, so a future that never
/// resolves stalls the cascade.
///
/// An animator only renders. Each method receives the field as it stands
/// when the visual starts: the cells being animated away are already holes,
/// and those holes stay empty until
/// [`animate_insert`](Self::animate_insert), which sees the refill
/// committed.
pub trait TileAnimator {
    /// Returns `true` while a transition is in flight.
    ///
    /// Player swaps are ignored while this returns `true`.
    fn is_animation_running(&self) -> bool;

    /// Plays the feedback for a rejected swap.
    ///
    /// This is fire-and-forget: the flow does not wait for it.
    fn animate_illegal_swap(&mut self, a: Position, b: Position);

    /// Shows the tiles at `a` and `b` exchanging places.
    fn animate_swap(
        &mut self,
        field: &GameField,
        a: Position,
        b: Position,
    ) -> impl Future<Output = ()>;

    /// Shows `cells` disappearing from the board.
    ///
    /// A cell at the crossing of a horizontal and a vertical run appears
    /// twice.
    fn animate_remove_tiles(
        &mut self,
        field: &GameField,
        cells: &[TileCell],
    ) -> impl Future<Output = ()>;

    /// Shows tiles falling according to `moves`.
    fn animate_moves(&mut self, field: &GameField, moves: &[Move]) -> impl Future<Output = ()>;

    /// Shows new tiles dropping into the holes listed in `moves`.
    fn animate_insert(
        &mut self,
        field: &GameField,
        moves: &[InsertMove],
    ) -> impl Future<Output = ()>;
}

/// A [`TileAnimator`] with no visuals: every transition completes at once.
///
/// Useful for headless drivers that only care about the resulting field.
#[derive(Debug, Default, Clone, Copy)]
pub struct InstantAnimator;

impl TileAnimator for InstantAnimator {
    fn is_animation_running(&self) -> bool {
        false
    }

    fn animate_illegal_swap(&mut self, _a: Position, _b: Position) {}

    fn animate_swap(
        &mut self,
        _field: &GameField,
        _a: Position,
        _b: Position,
    ) -> impl Future<Output = ()> {
        future::ready(())
    }

    fn animate_remove_tiles(
        &mut self,
        _field: &GameField,
        _cells: &[TileCell],
    ) -> impl Future<Output = ()> {
        future::ready(())
    }

    fn animate_moves(&mut self, _field: &GameField, _moves: &[Move]) -> impl Future<Output = ()> {
        future::ready(())
    }

    fn animate_insert(
        &mut self,
        _field: &GameField,
        _moves: &[InsertMove],
    ) -> impl Future<Output = ()> {
        future::ready(())
    }
}
