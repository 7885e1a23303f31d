//! The time the application started.
use std::time::SystemTime;

lazy_static! {
    /// Captured the first time it is read. The application bootstrap forces
    /// it at startup.
    pub static ref TIME_AT_APP_START: SystemTime = SystemTime::now();
}
