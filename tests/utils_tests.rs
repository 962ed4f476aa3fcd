//! Unit tests for utility functions.

use std::time::Duration;
use tsp_ga::utils::format_duration;

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(Duration::from_secs(0)), "0m 00s");
    assert_eq!(format_duration(Duration::from_secs(5)), "0m 05s");
    assert_eq!(format_duration(Duration::from_secs(65)), "1m 05s");
    assert_eq!(format_duration(Duration::from_secs(600)), "10m 00s");
    // Durations beyond an hour just keep counting minutes.
    assert_eq!(format_duration(Duration::from_secs(3723)), "62m 03s");
}
