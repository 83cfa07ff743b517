//! Effect setup errors and end-of-stream diagnostics
use thiserror::Error;

use shear_core::timespec::ParseError;

/// Result type alias using `EffectError`
pub type Result<T> = std::result::Result<T, EffectError>;

/// Errors raised while configuring or starting an effect.
///
/// All of these abort only the failing effect's setup; the chain driver
/// decides whether to abort the whole chain. Once an effect has started,
/// its streaming steps never fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EffectError {
    /// Malformed configuration token
    #[error("usage error: {0}")]
    Usage(String),

    /// A resolved position precedes the one before it.
    ///
    /// `index` is the 1-based index of the earlier entry of the
    /// offending pair.
    #[error("position {index} is behind the following position")]
    Ordering {
        /// 1-based index of the earlier entry of the offending pair
        index: usize,
    },

    /// A resolved position lies outside the known stream length
    #[error("{0}")]
    Bounds(String),

    /// An end-relative position was requested against a stream of
    /// unknown length
    #[error("can't use positions relative to end: audio length is unknown")]
    UnknownLength,
}

impl From<ParseError> for EffectError {
    fn from(err: ParseError) -> Self {
        Self::Usage(err.to_string())
    }
}

/// Non-fatal diagnostics surfaced when a stream ends.
///
/// Warnings are values handed back from the drain step rather than log
/// lines; the driver decides how to present them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamWarning {
    /// The stream ended before every requested position was reached; the
    /// effect completed as if the missing positions were never there.
    #[error("audio shorter than expected; last {unreached} position(s) not reached")]
    ShortStream {
        /// How many configured positions the stream never reached
        unreached: usize,
    },
}
