//! Progress display math for PlayDeck
//!
//! Formatting of playback clocks and conversion of positions into the
//! fractions and percentage strings the control surface renders.

/// Clock text shown while the media duration is still unknown.
pub const CLOCK_PLACEHOLDER: &str = "--:--";

/// Format a position in seconds as `minutes:seconds`.
///
/// Minutes are unpadded, seconds are zero-padded to two digits, and
/// fractional seconds are truncated rather than rounded: `59.9` renders as
/// `"0:59"`. Non-finite or negative input renders the placeholder.
pub fn format_clock(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return CLOCK_PLACEHOLDER.to_string();
    }

    let total = seconds as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Fraction of the media that has played, if the duration is known.
///
/// Returns `None` while the duration is unknown or degenerate, so callers
/// never feed a NaN into a percentage string.
pub fn progress_fraction(current_time: f64, duration: Option<f64>) -> Option<f64> {
    match duration {
        Some(total) if total.is_finite() && total > 0.0 => {
            Some((current_time / total).clamp(0.0, 1.0))
        }
        _ => None,
    }
}

/// Render a fraction in [0, 1] as a CSS-style percentage width.
///
/// The value is rounded to 0.1% so float noise from track-offset division
/// never leaks into the rendered width.
pub fn percent_string(fraction: f64) -> String {
    let percent = (fraction * 1000.0).round() / 10.0;
    format!("{}%", percent)
}
