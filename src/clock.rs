//! Display math for the countdown: the `HH:MM:SS` readout, the elapsed
//! fraction, and the plane's rotation angle.
//!
//! All three are pure functions of the timer's numbers.

/// Formats a number of seconds as `HH:MM:SS`.
///
/// Each field is zero-padded to two digits. Hours are not wrapped at 24, so
/// long durations keep growing the first field.
///
/// # Examples
///
/// ```rust
/// use exam_timer::clock::format_time;
///
/// assert_eq!(format_time(0), "00:00:00");
/// assert_eq!(format_time(5400), "01:30:00");
/// assert_eq!(format_time(90_000), "25:00:00");
/// ```
pub fn format_time(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Fraction of the configured duration that has elapsed, in `[0, 1]`.
///
/// Returns 0 for a zero total rather than dividing by zero.
///
/// # Examples
///
/// ```rust
/// use exam_timer::clock::calculate_progress;
///
/// assert_eq!(calculate_progress(0, 0), 0.0);
/// assert_eq!(calculate_progress(5400, 5400), 0.0);
/// assert_eq!(calculate_progress(60, 0), 1.0);
/// assert_eq!(calculate_progress(60, 30), 0.5);
/// ```
pub fn calculate_progress(total_seconds: u64, remaining_seconds: u64) -> f64 {
    if total_seconds == 0 {
        return 0.0;
    }
    let elapsed = total_seconds.saturating_sub(remaining_seconds);
    (elapsed as f64 / total_seconds as f64).clamp(0.0, 1.0)
}

/// Maps progress linearly onto a rotation in `[0, 360)` degrees.
///
/// A full revolution lands back on 0.
///
/// ```rust
/// use exam_timer::clock::rotation_degrees;
///
/// assert_eq!(rotation_degrees(0.25), 90.0);
/// assert_eq!(rotation_degrees(1.0), 0.0);
/// ```
pub fn rotation_degrees(progress: f64) -> f64 {
    (progress.clamp(0.0, 1.0) * 360.0) % 360.0
}
