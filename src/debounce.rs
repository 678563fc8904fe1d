//! Keystroke coalescing for search triggers.
//!
//! Search runs per keystroke while a query is comparatively expensive (a full
//! fuzzy scan), so interface surfaces submit each input event here instead of
//! calling the query engine directly. The callback runs only after a quiescent
//! window elapses with no newer event; every new submission cancels the
//! previously scheduled invocation. The query engine itself stays free of any
//! rate limiting.

use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Quiescent window between the last input event and the query; matches the
/// interval the browser surfaces were tuned to.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(150);

/// A cancellable-timer debouncer. One instance per input surface.
///
/// Requires a running tokio runtime; the scheduled invocation executes on it.
#[derive(Debug)]
pub struct SearchDebouncer {
    quiet_period: Duration,
    pending: Option<CancellationToken>,
}

impl SearchDebouncer {
    pub const fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: None,
        }
    }

    /// Schedule `run` after the quiet period, cancelling any prior pending
    /// invocation. Only the last submission of a burst ever runs.
    pub fn submit<F>(&mut self, run: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();

        let token = CancellationToken::new();
        self.pending = Some(token.clone());
        let quiet_period = self.quiet_period;

        tokio::spawn(async move {
            tokio::select! {
                () = token.cancelled() => {}
                () = tokio::time::sleep(quiet_period) => run(),
            }
        });
    }

    /// Cancel the pending invocation, if any.
    pub fn cancel(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}

impl Drop for SearchDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
