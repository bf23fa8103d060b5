//! Interrupt-safe tap counter
//!
//! A vibration sensor interrupt records taps; the monitor loop drains them
//! once per cycle. Shared state is guarded by `critical-section`, so the
//! counter can live in a `static` shared with an interrupt handler.

use core::cell::Cell;

use critical_section::Mutex;
use embassy_time::{Duration, Instant};

/// Minimum time between two accepted taps
pub const TAP_DEBOUNCE: Duration = Duration::from_millis(300);

/// Debounced counter of pending taps
pub struct TapCounter {
    pending: Mutex<Cell<u8>>,
    last_accepted: Mutex<Cell<Option<Instant>>>,
}

impl TapCounter {
    /// Create a new empty counter
    pub const fn new() -> Self {
        Self {
            pending: Mutex::new(Cell::new(0)),
            last_accepted: Mutex::new(Cell::new(None)),
        }
    }

    /// Record a tap at `now`
    ///
    /// Returns `false` if the tap fell inside the debounce window of the
    /// previously accepted one and was ignored. The first tap after
    /// creation is always accepted.
    pub fn record(&self, now: Instant) -> bool {
        critical_section::with(|cs| {
            let last_accepted = self.last_accepted.borrow(cs);
            if let Some(last) = last_accepted.get() {
                if now.saturating_duration_since(last) <= TAP_DEBOUNCE {
                    return false;
                }
            }
            last_accepted.set(Some(now));

            let pending = self.pending.borrow(cs);
            pending.set(pending.get().saturating_add(1));
            true
        })
    }

    /// Take all pending taps, leaving the counter empty
    pub fn take(&self) -> u8 {
        critical_section::with(|cs| self.pending.borrow(cs).replace(0))
    }
}

impl Default for TapCounter {
    fn default() -> Self {
        Self::new()
    }
}
