//! Segment selection ("trim") effect
//!
//! Cuts portions out of the stream. Configured positions become a flat
//! table of boundaries at which copying flips on or off, starting in the
//! discarding state: odd segments between boundaries are kept, and an
//! odd-length table leaves the final kept segment open to the end of the
//! stream.

use tracing::{debug, warn};

use shear_core::{RawSamples, Sample, SignalSpec, WideSamples};

use crate::effect::{DrainOutcome, FlowOutcome, FlowStatus, StartStatus, StreamEffect};
use crate::error::{EffectError, Result, StreamWarning};
use crate::position::{Anchor, Position};

/// The segment selector.
///
/// Passes alternating spans of the input through verbatim and discards
/// the rest; the span boundaries come from user-specified cut positions
/// resolved against the stream format at start time.
///
/// # Example
///
/// ```rust
/// use shear_core::{RawSamples, SampleRate, SignalSpec};
/// use shear_effects::{StartStatus, StreamEffect, Trim};
///
/// // keep everything from 0.5s up to 2s before the end
/// let mut trim = Trim::from_args(&["0.5", "-2"]).unwrap();
/// let input = SignalSpec::with_length(SampleRate::new(8_000), 1, RawSamples::new(80_000));
/// let mut output = input;
/// assert_eq!(trim.start(&input, &mut output).unwrap(), StartStatus::Ready);
/// assert_eq!(output.length, Some(RawSamples::new(60_000)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Trim {
    /// Cut positions, immutable once configured
    positions: Vec<Position>,
    /// Whether any position is anchored at the stream end
    uses_end: bool,
    /// Absolute boundary table, one entry per position, built by `start`
    boundaries: Vec<WideSamples>,
    /// Channel count of the running stream, captured at `start`
    channels: u16,
    /// Index of the next boundary to reach
    current_pos: usize,
    /// Wide samples consumed from the input so far
    samples_read: WideSamples,
    /// Whether input is currently passed through to the output
    copying: bool,
}

impl Trim {
    /// Create a selector from already-parsed positions
    pub fn new(positions: Vec<Position>) -> Self {
        let uses_end = positions.iter().any(|p| p.anchor() == Anchor::End);
        Self {
            positions,
            uses_end,
            ..Self::default()
        }
    }

    /// Create a selector from configuration tokens.
    ///
    /// Equivalent to constructing an empty selector and calling
    /// [`StreamEffect::configure`].
    pub fn from_args(args: &[&str]) -> Result<Self> {
        let mut trim = Self::default();
        trim.configure(args)?;
        Ok(trim)
    }

    /// Raw samples a seeking driver may skip in the upstream source
    /// instead of streaming them through `flow` (the leading discarded
    /// span, i.e. the first boundary). Zero when nothing is trimmed off
    /// the front. Meaningful after `start`.
    pub fn start_samples_to_skip(&self) -> RawSamples {
        self.boundaries
            .first()
            .map_or(RawSamples::ZERO, |&first| first.to_raw(self.channels))
    }

    /// Record that the skip reported by [`Self::start_samples_to_skip`]
    /// has already happened in the source.
    ///
    /// Forwards the read position to the first boundary, leaving the
    /// selector in exactly the state it would have reached had `flow`
    /// discarded that many leading samples. Only valid between `start`
    /// and the first `flow` call.
    pub fn mark_start_skipped(&mut self) {
        if let Some(&first) = self.boundaries.first() {
            self.samples_read = first;
        }
    }
}

impl StreamEffect for Trim {
    fn name(&self) -> &'static str {
        "trim"
    }

    fn usage(&self) -> &'static str {
        "{[=|-]position}"
    }

    fn configure(&mut self, args: &[&str]) -> Result<()> {
        let positions = args
            .iter()
            .map(|token| Position::parse(token))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        self.uses_end = positions.iter().any(|p| p.anchor() == Anchor::End);
        self.positions = positions;
        Ok(())
    }

    fn start(&mut self, input: &SignalSpec, output: &mut SignalSpec) -> Result<StartStatus> {
        let in_length = input.wide_length();

        self.channels = input.channels;
        self.boundaries.clear();
        self.current_pos = 0;
        self.samples_read = WideSamples::ZERO;
        self.copying = false;

        if self.uses_end && in_length.is_none() {
            return Err(EffectError::UnknownLength);
        }
        if self.positions.is_empty() {
            // nothing to cut: equivalent to pass-through
            return Ok(StartStatus::Bypass);
        }

        // calculate absolute positions
        let mut boundaries = Vec::with_capacity(self.positions.len());
        let mut last_seen = WideSamples::ZERO;
        for (i, pos) in self.positions.iter().enumerate() {
            let offset = pos.samples(input.rate)?;
            let resolved = match pos.anchor() {
                Anchor::Start => offset,
                Anchor::Previous => last_seen + offset,
                Anchor::End => match in_length {
                    Some(total) if offset <= total => total - offset,
                    Some(_) => {
                        return Err(EffectError::Bounds(format!(
                            "position {} is before the start of audio",
                            i + 1
                        )))
                    }
                    None => return Err(EffectError::UnknownLength),
                },
            };
            debug!("position {} at {}", i + 1, resolved);
            last_seen = resolved;
            boundaries.push(resolved);
        }

        // sanity checks
        let mut last_seen = WideSamples::ZERO;
        for (i, &boundary) in boundaries.iter().enumerate() {
            if boundary < last_seen {
                return Err(EffectError::Ordering { index: i });
            }
            last_seen = boundary;
        }
        if let (Some(total), Some(&first)) = (in_length, boundaries.first()) {
            if first > total {
                return Err(EffectError::Bounds(
                    "start position is after the end of audio".to_string(),
                ));
            }
        }
        if let (Some(total), Some(&last)) = (in_length, boundaries.last()) {
            if last > total {
                return Err(EffectError::Bounds(
                    "end position is after the end of audio".to_string(),
                ));
            }
        }

        if boundaries.len() == 1 && boundaries[0] == WideSamples::ZERO {
            // a single zero-offset cut trims nothing
            self.boundaries = boundaries;
            return Ok(StartStatus::Bypass);
        }

        // calculate the declared output length
        let open_end = boundaries.len() % 2 == 1;
        output.length = if open_end && in_length.is_none() {
            None
        } else {
            let mut kept = WideSamples::ZERO;
            for pair in boundaries.chunks_exact(2) {
                kept += pair[1] - pair[0];
            }
            if open_end {
                if let (Some(total), Some(&last)) = (in_length, boundaries.last()) {
                    kept += total - last;
                }
            }
            Some(kept.to_raw(input.channels))
        };

        self.boundaries = boundaries;
        Ok(StartStatus::Ready)
    }

    fn flow(&mut self, input: &[Sample], output: &mut [Sample]) -> FlowOutcome {
        let channels = usize::from(self.channels).max(1);
        let mut remaining = input.len().min(output.len()) / channels;
        let mut consumed = 0;
        let mut produced = 0;

        while remaining > 0 {
            if self.current_pos < self.boundaries.len()
                && self.samples_read == self.boundaries[self.current_pos]
            {
                self.copying = !self.copying;
                self.current_pos += 1;
            }

            if self.current_pos >= self.boundaries.len() && !self.copying {
                return FlowOutcome {
                    consumed: RawSamples::new(consumed as u64),
                    produced: RawSamples::new(produced as u64),
                    status: FlowStatus::EndOfStream,
                };
            }

            let chunk = match self.boundaries.get(self.current_pos) {
                Some(&next) => remaining.min((next - self.samples_read).count() as usize),
                None => remaining,
            };

            if self.copying {
                output[produced..produced + chunk * channels]
                    .copy_from_slice(&input[consumed..consumed + chunk * channels]);
                produced += chunk * channels;
            }
            consumed += chunk * channels;
            self.samples_read += WideSamples::new(chunk as u64);
            remaining -= chunk;
        }

        FlowOutcome {
            consumed: RawSamples::new(consumed as u64),
            produced: RawSamples::new(produced as u64),
            status: FlowStatus::Continue,
        }
    }

    fn drain(&mut self, _output: &mut [Sample]) -> DrainOutcome {
        // a boundary sitting exactly at end of stream counts as reached,
        // even though no sample beyond it ever triggered the flip
        let unreached = self.boundaries[self.current_pos..]
            .iter()
            .filter(|&&boundary| boundary > self.samples_read)
            .count();
        let warning = if unreached > 0 {
            warn!(
                "audio shorter than expected; last {} position(s) not reached",
                unreached
            );
            Some(StreamWarning::ShortStream { unreached })
        } else {
            None
        };
        DrainOutcome {
            produced: RawSamples::ZERO,
            status: FlowStatus::EndOfStream,
            warning,
        }
    }
}
