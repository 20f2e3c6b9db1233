//! Wall-clock abstraction.
//!
//! Anything that refreshes on a schedule reads time and waits through a
//! [`Clock`], so tests can substitute [`ManualClock`] and run many ticks
//! instantly.

use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::{Epoch, Span};

/// Source of the current instant plus the ability to wait.
pub trait Clock {
    /// Current instant.
    fn now(&self) -> Epoch;

    /// Block for `span`. Non-positive spans return immediately.
    fn sleep(&self, span: Span);
}

/// The operating-system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Epoch {
        let millis = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(d) => d.as_millis() as i64,
            Err(e) => -(e.duration().as_millis() as i64),
        };
        Epoch::from_unix_millis(millis)
    }

    fn sleep(&self, span: Span) {
        let secs = span.as_seconds();
        if secs > 0.0 {
            std::thread::sleep(Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX));
        }
    }
}

/// A clock that only moves when told to; `sleep` advances it instantly.
///
/// Clones share the same underlying instant.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<Epoch>>,
}

impl ManualClock {
    pub fn new(start: Epoch) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    /// Move the clock forward (or backward, for negative spans).
    pub fn advance(&self, span: Span) {
        let mut now = self.now.lock().unwrap_or_else(|p| p.into_inner());
        *now = *now + span;
    }

    /// Jump to an absolute instant.
    pub fn set(&self, at: Epoch) {
        *self.now.lock().unwrap_or_else(|p| p.into_inner()) = at;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Epoch {
        *self.now.lock().unwrap_or_else(|p| p.into_inner())
    }

    fn sleep(&self, span: Span) {
        if span.as_seconds() > 0.0 {
            self.advance(span);
        }
    }
}
