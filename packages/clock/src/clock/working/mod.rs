use std::time::SystemTime;

use service_health_primitives::DurationSinceUnixEpoch;

use crate::clock::{Time, Working};

#[allow(clippy::module_name_repetitions)]
pub struct WorkingClock;

impl Time for Working {
    fn now() -> DurationSinceUnixEpoch {
        // Zero if the system clock is set before 1970.
        SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or_default()
    }

    fn kind() -> &'static str {
        "working"
    }
}
