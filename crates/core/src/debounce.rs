//! Timer-based call coalescing
//!
//! A [`Debouncer`] wraps a target callable and a delay. Rapid bursts of
//! calls collapse into a single invocation of the target, carrying only the
//! arguments of the last call in the burst, once the delay has elapsed with
//! no further calls. Fire-and-forget: no return value is propagated.

use std::time::Duration;
use tokio::sync::mpsc;

/// Trailing-edge debouncer with a single pending timer.
///
/// Each [`call`](Self::call) supersedes any pending invocation and restarts
/// the timer. Dropping the debouncer flushes a still-pending value to the
/// target before the worker exits, so the last call is never silently lost.
pub struct Debouncer<T: Send + 'static> {
    tx: mpsc::UnboundedSender<T>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Wrap `target` so that invocations are coalesced per burst, firing
    /// `delay` after the last call.
    pub fn new<F>(delay: Duration, mut target: F) -> Self
    where
        F: FnMut(T) + Send + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<T>();

        tokio::spawn(async move {
            let mut pending: Option<T> = None;
            loop {
                match pending.take() {
                    // Idle: wait for the first call of a burst.
                    None => match rx.recv().await {
                        Some(value) => pending = Some(value),
                        None => break,
                    },
                    // Armed: fire after `delay` unless a newer call lands first.
                    Some(value) => {
                        let sleep = tokio::time::sleep(delay);
                        tokio::pin!(sleep);
                        tokio::select! {
                            // A call already queued when the timer expires
                            // still supersedes the pending value.
                            biased;
                            newer = rx.recv() => match newer {
                                Some(newer) => pending = Some(newer),
                                None => {
                                    target(value);
                                    break;
                                }
                            },
                            _ = &mut sleep => target(value),
                        }
                    }
                }
            }
            tracing::trace!("debounce worker stopped");
        });

        Self { tx }
    }

    /// Schedule `value` for delivery, superseding any pending call.
    pub fn call(&self, value: T) {
        // Send only fails once the worker is gone, at which point there is
        // nothing left to coalesce into.
        let _ = self.tx.send(value);
    }
}
