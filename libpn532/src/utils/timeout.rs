//! Timeout helpers used across the crate.
//!
//! Keep these helpers minimal: they centralize conversion of the
//! millisecond timeouts used throughout the driver API into Durations
//! so transports and tests can express deadlines clearly.

use std::time::Duration;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convenience: default command timeout as Duration.
pub fn default_command_timeout() -> Duration {
    ms(crate::constants::DEFAULT_COMMAND_TIMEOUT_MS)
}
