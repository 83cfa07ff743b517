//! Stream format descriptors
use serde::{Deserialize, Serialize};

use crate::sample::{RawSamples, WideSamples};

/// Sample rate in Hz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SampleRate(pub u32);

impl SampleRate {
    /// CD audio, 44.1 kHz
    pub const CD_QUALITY: Self = Self(44_100);
    /// DVD audio, 48 kHz
    pub const DVD_QUALITY: Self = Self(48_000);

    /// Create a new sample rate
    #[must_use]
    pub const fn new(hz: u32) -> Self {
        Self(hz)
    }

    /// Get the sample rate as Hz
    pub fn as_hz(&self) -> u32 {
        self.0
    }
}

/// Format of one stream flowing between pipeline stages.
///
/// The descriptor is owned by the chain driver; an effect reads the input
/// descriptor at start time and mutates only the declared `length` on the
/// output descriptor it propagates downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalSpec {
    /// Sample rate
    pub rate: SampleRate,

    /// Number of channels (1 = mono, 2 = stereo, etc.); must be positive
    pub channels: u16,

    /// Total stream length in raw samples, or `None` when the length is
    /// not known in advance (e.g. a live or piped source)
    pub length: Option<RawSamples>,
}

impl SignalSpec {
    /// Create a descriptor for a stream of unknown length
    pub fn new(rate: SampleRate, channels: u16) -> Self {
        Self {
            rate,
            channels,
            length: None,
        }
    }

    /// Create a descriptor with a known total length in raw samples
    pub fn with_length(rate: SampleRate, channels: u16, length: RawSamples) -> Self {
        Self {
            rate,
            channels,
            length: Some(length),
        }
    }

    /// Total length in wide samples, when known
    pub fn wide_length(&self) -> Option<WideSamples> {
        self.length.map(|len| len.to_wide(self.channels))
    }
}
