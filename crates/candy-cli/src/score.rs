use candy_core::TileCell;
use candy_game::TileDeletionListener;

/// Tallies removals into a score.
///
/// Each removed cell is worth the combo count of the step that removed it,
/// so later cascade rounds pay more. A cell at the crossing of two runs is
/// counted twice.
#[derive(Debug, Default)]
pub(crate) struct ScoreBoard {
    verbose: bool,
    score: u64,
    cleared: u64,
    best_rush: u32,
}

impl ScoreBoard {
    pub(crate) fn new(verbose: bool) -> Self {
        Self {
            verbose,
            ..Self::default()
        }
    }

    pub(crate) fn score(&self) -> u64 {
        self.score
    }

    pub(crate) fn cleared(&self) -> u64 {
        self.cleared
    }

    pub(crate) fn best_rush(&self) -> u32 {
        self.best_rush
    }
}

impl TileDeletionListener for ScoreBoard {
    fn on_tiles_deletion(&mut self, rush: u32, removed: &[TileCell]) {
        let cells = removed.len() as u64;
        let points = cells * u64::from(rush);
        self.score += points;
        self.cleared += cells;
        self.best_rush = self.best_rush.max(rush);
        log::info!("rush {rush}: cleared {cells} cells for {points} points");
        if self.verbose {
            println!("  rush {rush}: cleared {cells} cells (+{points})");
        }
    }
}
