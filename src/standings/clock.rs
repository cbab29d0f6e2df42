//! Race clock text to elapsed seconds and back.
//!
//! Clock text is `HH:MM:SS` with an optional fraction, `HH:MM:SS.fff`.
//! The fraction is read as a decimal fraction of a second, so `.5` and
//! `.500` are both half a second. Rendering always produces exactly three
//! fractional digits.
//!
//! Rendering is only defined on `[0, 24h)`. Larger values wrap around
//! midnight and negative values wrap backwards; callers should not rely on
//! either.

use crate::core::{FormatError, FormatIssue};
use chrono::NaiveTime;

/// Elapsed time in seconds, fractional part included.
pub type Seconds = f64;

const MICROS_PER_SECOND: i64 = 1_000_000;
const MICROS_PER_DAY: i64 = 86_400 * MICROS_PER_SECOND;

/// Parse `HH:MM:SS` or `HH:MM:SS.fff` into seconds.
pub fn parse(text: &str) -> Result<Seconds, FormatError> {
    let (clock, fraction) = match text.split_once('.') {
        Some((_, rest)) if rest.contains('.') => {
            return Err(FormatError::new(text, FormatIssue::ExtraDot))
        }
        Some((clock, digits)) => (clock, parse_fraction(text, digits)?),
        None => (text, 0.0),
    };

    let fields: Vec<&str> = clock.split(':').collect();
    let [hours, minutes, seconds] = fields.as_slice() else {
        return Err(FormatError::new(text, FormatIssue::ColonCount));
    };

    let hours = parse_component(text, hours)?;
    let minutes = parse_component(text, minutes)?;
    let seconds = parse_component(text, seconds)?;

    Ok(hours * 3600.0 + minutes * 60.0 + seconds + fraction)
}

fn parse_component(text: &str, field: &str) -> Result<Seconds, FormatError> {
    field
        .parse::<u32>()
        .map(f64::from)
        .map_err(|_| FormatError::new(text, FormatIssue::NonNumeric))
}

/// Digits after the dot, read as `0.<digits>`. No digits means zero.
fn parse_fraction(text: &str, digits: &str) -> Result<Seconds, FormatError> {
    if digits.is_empty() {
        return Ok(0.0);
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatError::new(text, FormatIssue::NonNumeric));
    }
    format!("0.{digits}")
        .parse::<f64>()
        .map_err(|_| FormatError::new(text, FormatIssue::NonNumeric))
}

/// Render seconds since midnight as `HH:MM:SS.fff`.
///
/// The value is first rounded (half to even) to whole microseconds, then
/// truncated to milliseconds.
pub fn format(seconds: Seconds) -> String {
    let micros = (seconds * MICROS_PER_SECOND as f64).round_ties_even() as i64;
    let micros = micros.rem_euclid(MICROS_PER_DAY);

    let whole = (micros / MICROS_PER_SECOND) as u32;
    let millis = ((micros % MICROS_PER_SECOND) / 1_000) as u32;

    NaiveTime::from_num_seconds_from_midnight_opt(whole, millis * 1_000_000)
        .unwrap_or_default()
        .format("%H:%M:%S%.3f")
        .to_string()
}
