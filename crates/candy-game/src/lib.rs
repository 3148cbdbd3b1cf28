//! Cascade resolution for the match-three rules engine.
//!
//! [`GameFlow`] owns the board of one play session and turns a player's swap
//! into a sequence of resolution steps: validate the swap, remove the runs it
//! formed, collapse, refill, and repeat on the refilled board until no run is
//! left. Each step is followed by a visual that the flow awaits through the
//! [`TileAnimator`] boundary, and every removal is reported to a
//! [`TileDeletionListener`] together with the current combo count ("rush").
//!
//! The flow is runtime agnostic. Its methods return plain futures; headless
//! drivers can run them with [`block_on`] and an [`InstantAnimator`].

mod animator;
mod executor;
mod flow;
mod listener;

#[cfg(test)]
mod testing;

pub use self::{
    animator::{InstantAnimator, TileAnimator},
    executor::block_on,
    flow::{FlowPhase, GameFlow, SwapOutcome},
    listener::TileDeletionListener,
};
