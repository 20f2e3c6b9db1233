//! Fixed-rate periodic task runner with cooperative cancellation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::trace;

use crate::clock::Clock;
use crate::error::TimeError;
use crate::{Epoch, Span};

/// Shared flag that stops a running [`Ticker`] before its next tick.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// What the task wants after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Stop,
}

/// Runs a task every `period`, aligned to the first tick.
///
/// Deadlines are `start + k * period`; a slow task does not accumulate
/// drift, and a tick that overruns its slot is followed immediately by
/// the next one.
#[derive(Debug, Clone, Copy)]
pub struct Ticker {
    period: Span,
    max_ticks: Option<usize>,
}

impl Ticker {
    pub fn new(period: Span) -> Result<Self, TimeError> {
        let secs = period.as_seconds();
        if !secs.is_finite() || secs <= 0.0 {
            return Err(TimeError::InvalidPeriod);
        }
        Ok(Self {
            period,
            max_ticks: None,
        })
    }

    /// Stop after `n` ticks even if never cancelled.
    pub fn with_max_ticks(mut self, n: usize) -> Self {
        self.max_ticks = Some(n);
        self
    }

    pub fn period(&self) -> Span {
        self.period
    }

    /// Run until cancelled, stopped by the task, or `max_ticks` is reached.
    ///
    /// Returns the number of ticks executed.
    pub fn run<C, F>(&self, clock: &C, token: &CancelToken, mut task: F) -> usize
    where
        C: Clock,
        F: FnMut(Epoch) -> TickControl,
    {
        let start = clock.now();
        let mut ticks = 0usize;

        loop {
            if token.is_cancelled() {
                trace!(ticks, "ticker cancelled");
                break;
            }
            if self.max_ticks.is_some_and(|max| ticks >= max) {
                break;
            }

            let control = task(clock.now());
            ticks += 1;
            if control == TickControl::Stop {
                trace!(ticks, "ticker stopped by task");
                break;
            }

            let deadline = start + self.period.scale(ticks as f64);
            let wait = deadline - clock.now();
            clock.sleep(wait);
        }

        ticks
    }
}
