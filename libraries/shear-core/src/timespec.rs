//! Textual time / sample-count expressions
//!
//! Cut positions and similar effect parameters are written either as a
//! literal wide-sample count (`"8000s"`) or as a clock time
//! (`"1:02:03.5"`, `"0.5"`, optionally suffixed `t`). Time expressions
//! can only be converted once the stream's sample rate is known, so
//! effects keep the raw text around until their start step runs.
//!
//! Calling [`parse_sample_count`] with a rate of zero performs a pure
//! syntax check: every time expression evaluates to zero samples, but
//! malformed input is still rejected.

use thiserror::Error;

use crate::sample::WideSamples;
use crate::signal::SampleRate;

/// Expression parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The expression was empty
    #[error("empty position expression")]
    Empty,

    /// An `s`-suffixed expression was not a plain sample count
    #[error("invalid sample count: {0:?}")]
    InvalidSampleCount(String),

    /// A time expression was malformed
    #[error("invalid time specification: {0:?}")]
    InvalidTime(String),
}

/// Result type alias using `ParseError`
pub type Result<T> = std::result::Result<T, ParseError>;

/// Parse an expression into a wide-sample count at the given rate.
///
/// Two forms are accepted:
/// - `<digits>s`: a literal wide-sample count
/// - `[[HH:]MM:]SS[.frac]` with an optional `t` suffix: a time,
///   converted as `round(seconds × rate)`
///
/// Negative values are unrepresentable; no sign is accepted.
pub fn parse_sample_count(expr: &str, rate: SampleRate) -> Result<WideSamples> {
    if expr.is_empty() {
        return Err(ParseError::Empty);
    }

    if let Some(count) = expr.strip_suffix('s') {
        if count.is_empty() || !count.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidSampleCount(expr.to_string()));
        }
        let samples = count
            .parse::<u64>()
            .map_err(|_| ParseError::InvalidSampleCount(expr.to_string()))?;
        return Ok(WideSamples::new(samples));
    }

    let time = expr.strip_suffix('t').unwrap_or(expr);
    let seconds =
        parse_clock_time(time).ok_or_else(|| ParseError::InvalidTime(expr.to_string()))?;
    Ok(WideSamples::new(
        (seconds * f64::from(rate.as_hz())).round() as u64,
    ))
}

/// Parse `[[HH:]MM:]SS[.frac]` into seconds.
fn parse_clock_time(s: &str) -> Option<f64> {
    let fields: Vec<&str> = s.split(':').collect();
    if fields.len() > 3 {
        return None;
    }
    let (last, leading) = fields.split_last()?;

    let mut seconds = 0.0;
    for field in leading {
        if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        seconds = seconds * 60.0 + field.parse::<f64>().ok()?;
    }

    let (whole, frac) = match last.split_once('.') {
        Some((whole, frac)) => (whole, Some(frac)),
        None => (*last, None),
    };
    if whole.is_empty() && frac.map_or(true, str::is_empty) {
        return None;
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if let Some(frac) = frac {
        if !frac.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
    }
    let value = last.parse::<f64>().ok()?;
    Some(seconds * 60.0 + value)
}
