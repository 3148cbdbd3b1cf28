use std::{
    pin::pin,
    task::{Context, Poll, Waker},
    thread,
};

/// Runs `future` to completion on the current thread.
///
/// The future is polled with a waker that does nothing, and the thread yields
/// between polls. This suits headless drivers whose animators make progress
/// whenever they are polled (for example [`InstantAnimator`]); an animator
/// that waits on another thread keeps this loop spinning until it finishes.
///
/// [`InstantAnimator`]: crate::InstantAnimator
///
/// # Examples
///
/// ```
/// use candy_game::block_on;
///
/// assert_eq!(block_on(async { 1 + 2 }), 3);
/// ```
pub fn block_on<F>(future: F) -> F::Output
where
    F: Future,
{
    let mut cx = Context::from_waker(Waker::noop());
    let mut future = pin!(future);
    loop {
        if let Poll::Ready(output) = future.as_mut().poll(&mut cx) {
            return output;
        }
        thread::yield_now();
    }
}
