//! Utility functions for the GA-TSP solver.

use std::time::Duration;

/// Format a duration as minutes and seconds, e.g. `2m 05s`.
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    format!("{}m {:02}s", total_seconds / 60, total_seconds % 60)
}
