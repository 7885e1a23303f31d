use service_health_primitives::DurationSinceUnixEpoch;

use self::stopped::StoppedClock;
use self::working::WorkingClock;

pub mod stopped;
pub mod working;

/// A clock, parametrized by how it reads the time.
#[derive(Debug)]
pub struct Clock<T> {
    clock: std::marker::PhantomData<T>,
}

/// Reads the system time.
pub type Working = Clock<WorkingClock>;
/// Returns a time fixed per thread.
pub type Stopped = Clock<StoppedClock>;

/// A source of timestamps.
pub trait Time: Sized {
    fn now() -> DurationSinceUnixEpoch;

    /// Name of the clock, for log lines and assertions.
    fn kind() -> &'static str;
}
