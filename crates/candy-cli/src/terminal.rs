use std::future;

use candy_core::{GameField, Position, TileCell};
use candy_game::TileAnimator;
use candy_mechanics::{InsertMove, Move};

/// Narrates each visual on stdout and completes it at once.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TerminalAnimator {
    verbose: bool,
}

impl TerminalAnimator {
    pub(crate) fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn say(self, line: &str) {
        log::debug!("{line}");
        if self.verbose {
            println!("  {line}");
        }
    }
}

impl TileAnimator for TerminalAnimator {
    fn is_animation_running(&self) -> bool {
        false
    }

    fn animate_illegal_swap(&mut self, a: Position, b: Position) {
        self.say(&format!("cannot swap {a} and {b}"));
    }

    fn animate_swap(
        &mut self,
        _field: &GameField,
        a: Position,
        b: Position,
    ) -> impl Future<Output = ()> {
        self.say(&format!("swap {a} <-> {b}"));
        future::ready(())
    }

    fn animate_remove_tiles(
        &mut self,
        _field: &GameField,
        cells: &[TileCell],
    ) -> impl Future<Output = ()> {
        let cells = cells.iter().map(ToString::to_string).collect::<Vec<_>>();
        self.say(&format!("remove {}", cells.join(" ")));
        future::ready(())
    }

    fn animate_moves(&mut self, field: &GameField, moves: &[Move]) -> impl Future<Output = ()> {
        if !moves.is_empty() {
            self.say(&format!(
                "{} tiles fall, {} holes to fill",
                moves.len(),
                field.hole_count()
            ));
        }
        future::ready(())
    }

    fn animate_insert(
        &mut self,
        field: &GameField,
        moves: &[InsertMove],
    ) -> impl Future<Output = ()> {
        let mut moves = moves.to_vec();
        moves.sort();
        let tiles = moves.iter().map(ToString::to_string).collect::<Vec<_>>();
        self.say(&format!("drop in {}", tiles.join(", ")));
        log::trace!("board after refill:\n{field}");
        future::ready(())
    }
}
