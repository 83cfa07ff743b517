//! Cut-position specifications
//!
//! A cut position is a textual expression plus the anchor it will be
//! resolved against. Expressions stay unparsed until the stream's sample
//! rate is known; only their syntax is checked up front.

use shear_core::timespec::{self, ParseError};
use shear_core::{SampleRate, WideSamples};

/// Reference point a cut-position expression is resolved against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    /// Absolute offset from the start of the stream (`=` prefix)
    Start,
    /// Offset forward from the previously resolved position (no prefix)
    #[default]
    Previous,
    /// Offset back from the end of the stream (`-` prefix)
    End,
}

/// One unresolved cut position.
///
/// Immutable once created; the anchor is fixed at parse time and the
/// expression is re-evaluated against the real rate when the effect
/// starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    expr: String,
    anchor: Anchor,
}

impl Position {
    /// Create a position from an expression and an explicit anchor.
    ///
    /// The expression syntax is checked immediately (rate-independent
    /// dry run); its value is not computed until the rate is known.
    pub fn new(expr: impl Into<String>, anchor: Anchor) -> Result<Self, ParseError> {
        let expr = expr.into();
        timespec::parse_sample_count(&expr, SampleRate::new(0))?;
        Ok(Self { expr, anchor })
    }

    /// Parse a single configuration token, e.g. `"10.5"`, `"=3:00"`,
    /// `"-8000s"`.
    ///
    /// A leading `=` anchors at the stream start, a leading `-` at the
    /// stream end; no prefix means relative to the previous position.
    pub fn parse(token: &str) -> Result<Self, ParseError> {
        let (anchor, expr) = match token.as_bytes().first() {
            Some(b'=') => (Anchor::Start, &token[1..]),
            Some(b'-') => (Anchor::End, &token[1..]),
            _ => (Anchor::Previous, token),
        };
        Self::new(expr, anchor)
    }

    /// The anchor this position resolves against
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// The raw textual expression, without any anchor prefix
    pub fn expr(&self) -> &str {
        &self.expr
    }

    /// Evaluate the expression against the now-known sample rate
    pub(crate) fn samples(&self, rate: SampleRate) -> Result<WideSamples, ParseError> {
        timespec::parse_sample_count(&self.expr, rate)
    }
}
