//! A clock that only moves when told to.
//!
//! Each thread has its own time. It starts at the Unix Epoch in the clock's
//! own tests and at the application start time everywhere else.
use std::cell::Cell;
use std::time::SystemTime;

use service_health_primitives::DurationSinceUnixEpoch;

use crate::clock::{Stopped, Time};
use crate::static_time::TIME_AT_APP_START;

#[allow(clippy::module_name_repetitions)]
pub struct StoppedClock;

thread_local! {
    static FIXED_TIME: Cell<DurationSinceUnixEpoch> = Cell::new(initial_time());
}

fn app_start_time() -> DurationSinceUnixEpoch {
    TIME_AT_APP_START.duration_since(SystemTime::UNIX_EPOCH).unwrap_or_default()
}

#[cfg(not(test))]
fn initial_time() -> DurationSinceUnixEpoch {
    app_start_time()
}

#[cfg(test)]
fn initial_time() -> DurationSinceUnixEpoch {
    DurationSinceUnixEpoch::ZERO
}

impl Time for Stopped {
    fn now() -> DurationSinceUnixEpoch {
        FIXED_TIME.with(Cell::get)
    }

    fn kind() -> &'static str {
        "stopped"
    }
}

impl Stopped {
    /// Moves the clock of the current thread to `time`.
    pub fn set(time: DurationSinceUnixEpoch) {
        FIXED_TIME.with(|fixed| fixed.set(time));
    }

    /// Moves the clock of the current thread to the application start time.
    pub fn set_to_app_start() {
        Self::set(app_start_time());
    }

    /// Moves the clock of the current thread back to its initial time.
    pub fn reset() {
        Self::set(initial_time());
    }
}
