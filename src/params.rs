//! Argument validation and the pacing policy between images.

use std::time::Duration;

/// Default JPEG quality, matching the common encoder default.
pub const DEFAULT_QUALITY: u8 = 75;

/// Validate the interval and convert it to a pause duration.
///
/// Non-positive values (including `-0.0`) mean no delay.
///
/// # Errors
///
/// Returns an error for `NaN`, infinities, or values too large to represent.
pub fn interval_to_pause(seconds: f64) -> Result<Duration, String> {
    if !seconds.is_finite() {
        return Err(format!("Interval must be a finite number of seconds, got '{seconds}'"));
    }
    if seconds <= 0.0 {
        if seconds < 0.0 {
            log::warn!("Negative interval {seconds}s treated as no delay");
        }
        return Ok(Duration::ZERO);
    }
    Duration::try_from_secs_f64(seconds)
        .map_err(|e| format!("Interval '{seconds}' is out of range: {e}"))
}

/// Validate the JPEG quality parameter.
///
/// # Errors
///
/// Returns an error if the quality is outside 1-100.
pub fn validate_quality(quality: u8) -> Result<(), String> {
    if (1..=100).contains(&quality) {
        Ok(())
    } else {
        Err(format!("Unsupported quality '{quality}'. Valid: 1-100"))
    }
}
