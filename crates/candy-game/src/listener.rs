use candy_core::TileCell;

/// Receives every removal made during a cascade.
///
/// Called once per resolution step: once for the tiles cleared by the
/// player's swap and once per stabilization round after that. `rush` is the
/// 1-based combo count of the step. Scoring and objective tracking live
/// behind this trait.
pub trait TileDeletionListener {
    /// Handles the removal of `removed` at combo count `rush`.
    fn on_tiles_deletion(&mut self, rush: u32, removed: &[TileCell]);
}

impl<F> TileDeletionListener for F
where
    F: FnMut(u32, &[TileCell]),
{
    fn on_tiles_deletion(&mut self, rush: u32, removed: &[TileCell]) {
        self(rush, removed);
    }
}

