//! Test harness for driving a [`GameFlow`] to completion.
//!
//! [`FlowTester`] owns a flow wired to a [`RecordingAnimator`], a
//! [`RecordingListener`] and a [`ScriptedSource`], runs player swaps with
//! [`block_on`], and exposes fluent assertions over the resulting field,
//! visuals and deletions.
//!
//! The animator and the listener share one [`Timeline`], so tests can check
//! how visuals, deletion reports and field mutations interleave.

use std::{
    cell::RefCell,
    pin::Pin,
    rc::Rc,
    task::{Context, Poll},
};

use candy_core::{GameField, Position, Tile, TileCell};
use candy_mechanics::{InsertMove, Move, TileSource};

use crate::{FlowPhase, GameFlow, SwapOutcome, TileAnimator, TileDeletionListener, block_on};

/// One call made on a [`RecordingAnimator`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum AnimationEvent {
    IllegalSwap(Position, Position),
    Swap(Position, Position),
    Remove(Vec<TileCell>),
    Moves(Vec<Move>),
    Insert(Vec<InsertMove>),
}

impl AnimationEvent {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Self::IllegalSwap(..) => "illegal_swap",
            Self::Swap(..) => "swap",
            Self::Remove(_) => "remove",
            Self::Moves(_) => "moves",
            Self::Insert(_) => "insert",
        }
    }
}

/// Ordered log of visuals and deletion reports, shared between a
/// [`RecordingAnimator`] and a [`RecordingListener`].
///
/// Visuals are logged as `"<kind> holes <n>"`, with the number of holes on
/// the field when the visual started. Deletions are logged as
/// `"deletion rush <rush> cells <n>"`.
pub(crate) type Timeline = Rc<RefCell<Vec<String>>>;

/// A future that is pending for a fixed number of polls.
#[derive(Debug)]
pub(crate) struct Frames(u32);

impl Future for Frames {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<()> {
        if self.0 == 0 {
            Poll::Ready(())
        } else {
            self.0 -= 1;
            Poll::Pending
        }
    }
}

/// Records every call and completes each visual after `frames` polls.
#[derive(Debug, Default)]
pub(crate) struct RecordingAnimator {
    pub(crate) busy: bool,
    pub(crate) frames: u32,
    pub(crate) events: Vec<AnimationEvent>,
    pub(crate) timeline: Timeline,
}

impl RecordingAnimator {
    fn record(&mut self, field: &GameField, event: AnimationEvent) -> Frames {
        self.timeline
            .borrow_mut()
            .push(format!("{} holes {}", event.kind(), field.hole_count()));
        self.events.push(event);
        Frames(self.frames)
    }
}

impl TileAnimator for RecordingAnimator {
    fn is_animation_running(&self) -> bool {
        self.busy
    }

    fn animate_illegal_swap(&mut self, a: Position, b: Position) {
        self.events.push(AnimationEvent::IllegalSwap(a, b));
    }

    fn animate_swap(
        &mut self,
        field: &GameField,
        a: Position,
        b: Position,
    ) -> impl Future<Output = ()> {
        self.record(field, AnimationEvent::Swap(a, b))
    }

    fn animate_remove_tiles(
        &mut self,
        field: &GameField,
        cells: &[TileCell],
    ) -> impl Future<Output = ()> {
        self.record(field, AnimationEvent::Remove(cells.to_vec()))
    }

    fn animate_moves(&mut self, field: &GameField, moves: &[Move]) -> impl Future<Output = ()> {
        self.record(field, AnimationEvent::Moves(moves.to_vec()))
    }

    fn animate_insert(
        &mut self,
        field: &GameField,
        moves: &[InsertMove],
    ) -> impl Future<Output = ()> {
        self.record(field, AnimationEvent::Insert(moves.to_vec()))
    }
}

/// Keeps every deletion reported to it.
#[derive(Debug, Default)]
pub(crate) struct RecordingListener {
    pub(crate) deletions: Vec<(u32, Vec<TileCell>)>,
    pub(crate) timeline: Timeline,
}

impl TileDeletionListener for RecordingListener {
    fn on_tiles_deletion(&mut self, rush: u32, removed: &[TileCell]) {
        self.timeline
            .borrow_mut()
            .push(format!("deletion rush {rush} cells {}", removed.len()));
        self.deletions.push((rush, removed.to_vec()));
    }
}

/// Hands out a fixed list of tiles in order, starting over at the end.
#[derive(Debug)]
pub(crate) struct ScriptedSource {
    tiles: Vec<Tile>,
    next: usize,
}

impl ScriptedSource {
    pub(crate) fn new(tiles: &[Tile]) -> Self {
        assert!(!tiles.is_empty(), "scripted source needs at least one tile");
        Self {
            tiles: tiles.to_vec(),
            next: 0,
        }
    }
}

impl TileSource for ScriptedSource {
    fn next_tile(&mut self, _column: i32) -> Tile {
        let tile = self.tiles[self.next % self.tiles.len()];
        self.next += 1;
        tile
    }
}

type TestFlow = GameFlow<RecordingAnimator, RecordingListener, ScriptedSource>;

/// A fluent harness around a [`GameFlow`].
///
/// Assertion methods panic with a description of the mismatch and report the
/// caller's location.
#[derive(Debug)]
pub(crate) struct FlowTester {
    initial: GameField,
    flow: TestFlow,
    outcome: Option<SwapOutcome>,
}

impl FlowTester {
    /// Creates a tester for the board in text form. Refills cycle through
    /// the six colors until [`refill_with`](Self::refill_with) says otherwise.
    #[track_caller]
    pub(crate) fn new(field: &str) -> Self {
        let initial: GameField = field.parse().expect("test board should parse");
        let timeline = Timeline::default();
        let animator = RecordingAnimator {
            frames: 1,
            timeline: Rc::clone(&timeline),
            ..RecordingAnimator::default()
        };
        let listener = RecordingListener {
            timeline,
            ..RecordingListener::default()
        };
        let flow = GameFlow::new(
            initial.clone(),
            animator,
            listener,
            ScriptedSource::new(&Tile::COLORS),
        );
        Self {
            initial,
            flow,
            outcome: None,
        }
    }

    /// Replaces the refill script.
    pub(crate) fn refill_with(mut self, tiles: &[Tile]) -> Self {
        self.flow.source = ScriptedSource::new(tiles);
        self
    }

    /// Makes the animator report a transition in flight.
    pub(crate) fn animation_running(mut self) -> Self {
        self.flow.animator.busy = true;
        self
    }

    /// Plays the swap of the tiles at two `(column, row)` coordinates.
    pub(crate) fn drag(mut self, a: (i32, i32), b: (i32, i32)) -> Self {
        let a = Position::new(a.0, a.1);
        let b = Position::new(b.0, b.1);
        self.outcome = Some(block_on(self.flow.on_drag_tile_event(a, b)));
        self
    }

    /// Runs the stabilization loop on the current board.
    pub(crate) fn stabilize(mut self) -> Self {
        block_on(self.flow.check_new_field());
        self
    }

    pub(crate) fn reset(mut self) -> Self {
        self.flow.reset();
        self
    }

    pub(crate) fn flow(&self) -> &TestFlow {
        &self.flow
    }

    #[track_caller]
    pub(crate) fn assert_outcome(self, expected: SwapOutcome) -> Self {
        assert_eq!(self.outcome, Some(expected), "unexpected swap outcome");
        self
    }

    #[track_caller]
    pub(crate) fn assert_field(self, expected: &str) -> Self {
        let expected: GameField = expected.parse().expect("expected board should parse");
        assert_eq!(
            self.flow.field().to_string(),
            expected.to_string(),
            "unexpected board"
        );
        self
    }

    #[track_caller]
    pub(crate) fn assert_field_unchanged(self) -> Self {
        assert_eq!(
            self.flow.field().to_string(),
            self.initial.to_string(),
            "board should not change"
        );
        self
    }

    #[track_caller]
    pub(crate) fn assert_visuals(self, expected: &[&str]) -> Self {
        let kinds = self
            .flow
            .animator()
            .events
            .iter()
            .map(AnimationEvent::kind)
            .collect::<Vec<_>>();
        assert_eq!(kinds, expected, "unexpected visuals");
        self
    }

    /// Checks every visual and deletion report, in order, against the
    /// [`Timeline`] format.
    #[track_caller]
    pub(crate) fn assert_timeline(self, expected: &[&str]) -> Self {
        assert_eq!(
            *self.flow.animator().timeline.borrow(),
            expected,
            "unexpected timeline"
        );
        self
    }

    /// Checks the `(rush, number of removed cells)` pairs seen by the listener.
    #[track_caller]
    pub(crate) fn assert_deletions(self, expected: &[(u32, usize)]) -> Self {
        let deletions = self
            .flow
            .deletion_listener()
            .deletions
            .iter()
            .map(|(rush, cells)| (*rush, cells.len()))
            .collect::<Vec<_>>();
        assert_eq!(deletions, expected, "unexpected deletions");
        self
    }

    #[track_caller]
    pub(crate) fn assert_rush(self, expected: u32) -> Self {
        assert_eq!(self.flow.rush(), expected, "unexpected rush");
        self
    }

    #[track_caller]
    pub(crate) fn assert_phase(self, expected: FlowPhase) -> Self {
        assert_eq!(self.flow.phase(), expected, "unexpected phase");
        self
    }
}
