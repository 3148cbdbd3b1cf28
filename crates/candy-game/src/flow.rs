//! The cascade state machine.

use candy_core::{GameField, Position, TileCell};
use candy_mechanics::{GameMechanics, TileSource};

use crate::{TileAnimator, TileDeletionListener};

/// Where a [`GameFlow`] is in handling player input.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant,
)]
pub enum FlowPhase {
    /// Waiting for the next swap.
    #[default]
    #[display("idle")]
    Idle,
    /// A swap request is being checked.
    #[display("validating")]
    Validating,
    /// Removal, collapse and refill are in progress.
    #[display("resolving")]
    Resolving,
}

/// The result of a swap request.
///
/// Only [`SwapOutcome::Resolved`] changes the field. The other variants are
/// normal inputs that the flow ignores, not failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum SwapOutcome {
    /// A visual was still in flight.
    #[display("ignored while an animation is running")]
    AnimationRunning,
    /// One of the endpoints held no tile.
    #[display("ignored because an endpoint is not a tile")]
    NotATile,
    /// The swap would not have formed a run.
    #[display("illegal swap")]
    Illegal,
    /// The swap was committed and the cascade ran to completion.
    #[display("resolved at rush {rush}")]
    Resolved {
        /// The combo count reached by the last resolution step.
        rush: u32,
    },
}

/// Drives one play session: validates player swaps and resolves the cascades
/// they trigger.
///
/// The flow owns the session's [`GameField`]. Every visual is delegated to a
/// [`TileAnimator`], every removal is reported to a
/// [`TileDeletionListener`], and refills come from a [`TileSource`].
///
/// Resolution is sequential. Each step mutates the field, then awaits the
/// matching visual before the next mutation. Methods take `&mut self`, so a
/// new swap cannot start while a cascade future is alive.
///
/// # Examples
///
/// ```
/// use candy_core::{GameField, Position, TileCell};
/// use candy_game::{GameFlow, InstantAnimator, block_on};
/// use candy_mechanics::RandomTileSource;
///
/// let field: GameField = "
///     [B, C, D]
///     [A, A, E]
///     [F, D, A]
/// "
/// .parse()?;
/// let mut removed = 0;
/// let mut flow = GameFlow::new(
///     field,
///     InstantAnimator,
///     |_rush: u32, cells: &[TileCell]| removed += cells.len(),
///     RandomTileSource::from_seed(1),
/// );
///
/// let outcome = block_on(flow.on_drag_tile_event(Position::new(2, 1), Position::new(2, 2)));
/// assert!(outcome.is_resolved());
/// drop(flow);
/// assert!(removed >= 3);
/// # Ok::<(), candy_core::FieldParseError>(())
/// ```
#[derive(Debug)]
pub struct GameFlow<A, L, S> {
    field: GameField,
    pub(crate) animator: A,
    listener: L,
    pub(crate) source: S,
    rush: u32,
    phase: FlowPhase,
}

impl<A, L, S> GameFlow<A, L, S>
where
    A: TileAnimator,
    L: TileDeletionListener,
    S: TileSource,
{
    /// Creates an idle flow over `field` with the combo count at 1.
    ///
    /// The field is taken as is; call [`check_new_field`](Self::check_new_field)
    /// first if it may already contain runs.
    #[must_use]
    pub fn new(field: GameField, animator: A, listener: L, source: S) -> Self {
        Self {
            field,
            animator,
            listener,
            source,
            rush: 1,
            phase: FlowPhase::Idle,
        }
    }

    /// Handles the player dragging the tile at `a` onto `b`.
    ///
    /// The request is ignored while an animation is running or when either
    /// position holds no tile. A swap that forms no run plays the illegal-swap
    /// feedback and leaves the field untouched. Otherwise the combo count
    /// restarts at 1, the swap is committed and resolved, and the returned
    /// future completes once the field is stable again.
    ///
    /// Adjacency of `a` and `b` is not checked here; input handling is
    /// expected to only report drags between neighbors.
    pub async fn on_drag_tile_event(&mut self, a: Position, b: Position) -> SwapOutcome {
        if self.animator.is_animation_running() {
            log::debug!("swap {a} <-> {b} ignored: animation running");
            return SwapOutcome::AnimationRunning;
        }
        if self.field.get(a).is_not_tile() || self.field.get(b).is_not_tile() {
            log::debug!("swap {a} <-> {b} ignored: endpoint is not a tile");
            return SwapOutcome::NotATile;
        }

        self.phase = FlowPhase::Validating;
        if !GameMechanics::new(&mut self.field).is_swap_allowed(a, b) {
            log::debug!("swap {a} <-> {b} rejected: no run formed");
            self.animator.animate_illegal_swap(a, b);
            self.phase = FlowPhase::Idle;
            return SwapOutcome::Illegal;
        }

        self.phase = FlowPhase::Resolving;
        self.rush = 1;
        let mut mechanics = GameMechanics::new(&mut self.field);
        mechanics.swap_tiles(a, b);
        let removed = mechanics.connected_tiles_of_swap(a, b);
        mechanics.remove_tile_cells(&removed);
        let moves = mechanics.next_moves();
        let inserts = mechanics.new_tile_moves(&mut self.source);
        log::debug!(
            "swap {a} <-> {b} accepted: {} cells removed, {} moves, {} inserts",
            removed.len(),
            moves.len(),
            inserts.len()
        );

        self.animator.animate_swap(&self.field, a, b).await;
        self.animator
            .animate_remove_tiles(&self.field, &removed)
            .await;
        self.listener.on_tiles_deletion(self.rush, &removed);
        self.animator.animate_moves(&self.field, &moves).await;
        GameMechanics::new(&mut self.field).insert(&inserts);
        self.animator.animate_insert(&self.field, &inserts).await;

        self.check_new_field().await;
        SwapOutcome::Resolved { rush: self.rush }
    }

    /// Resolves every run left on the board until none remains.
    ///
    /// Each round clears all horizontal and vertical runs at once, raises the
    /// combo count by one, reports the removal, applies gravity and refills.
    /// The flow is idle when the future completes.
    pub async fn check_new_field(&mut self) {
        self.phase = FlowPhase::Resolving;
        loop {
            let removed = self.find_runs();
            if removed.is_empty() {
                break;
            }
            self.rush += 1;
            log::debug!("rush {}: {} cells in runs", self.rush, removed.len());

            GameMechanics::new(&mut self.field).remove_tile_cells(&removed);
            self.animator
                .animate_remove_tiles(&self.field, &removed)
                .await;
            self.listener.on_tiles_deletion(self.rush, &removed);

            let mut mechanics = GameMechanics::new(&mut self.field);
            let moves = mechanics.next_moves();
            let inserts = mechanics.new_tile_moves(&mut self.source);
            self.animator.animate_moves(&self.field, &moves).await;
            GameMechanics::new(&mut self.field).insert(&inserts);
            self.animator.animate_insert(&self.field, &inserts).await;
        }
        log::debug!("field stable at rush {}", self.rush);
        self.phase = FlowPhase::Idle;
    }

    /// Scans independent copies of the field for horizontal then vertical
    /// runs. A cell where two runs cross is listed once per run.
    fn find_runs(&self) -> Vec<TileCell> {
        let mut horizontal = self.field.clone();
        let mut vertical = self.field.clone();
        let mut cells = GameMechanics::new(&mut horizontal)
            .get_and_remove_all_horizontal_rows()
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();
        cells.extend(
            GameMechanics::new(&mut vertical)
                .get_and_remove_all_vertical_rows()
                .into_iter()
                .flatten(),
        );
        cells
    }
}

impl<A, L, S> GameFlow<A, L, S> {
    /// Puts the combo count back to 1.
    pub fn reset(&mut self) {
        self.rush = 1;
    }

    /// Returns the session's field.
    #[must_use]
    pub fn field(&self) -> &GameField {
        &self.field
    }

    /// Returns the current combo count.
    #[must_use]
    pub fn rush(&self) -> u32 {
        self.rush
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> FlowPhase {
        self.phase
    }

    /// Returns the animator.
    #[must_use]
    pub fn animator(&self) -> &A {
        &self.animator
    }

    /// Returns the deletion listener.
    #[must_use]
    pub fn deletion_listener(&self) -> &L {
        &self.listener
    }

    /// Consumes the flow and returns its field.
    #[must_use]
    pub fn into_field(self) -> GameField {
        self.field
    }
}
