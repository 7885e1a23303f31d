use std::time::Duration;

use service_health_clock::clock::{self, Time};

use crate::CurrentClock;

#[test]
fn the_stopped_clock_should_not_move_by_itself() {
    assert_eq!(CurrentClock::kind(), "stopped");

    let before = CurrentClock::now();
    std::thread::sleep(Duration::from_millis(50));

    assert_eq!(CurrentClock::now(), before);
}

#[test]
fn outside_its_own_crate_the_stopped_clock_should_start_at_the_app_start_time() {
    clock::Stopped::set(Duration::from_secs(30));
    assert_eq!(clock::Stopped::now(), Duration::from_secs(30));

    clock::Stopped::set_to_app_start();
    assert!(clock::Stopped::now() > Duration::from_secs(30));

    clock::Stopped::reset();
    assert!(clock::Stopped::now() > Duration::from_secs(30));
}
