//! Sample value and sample-count units
//!
//! A stream position or length is always counted in one of two units:
//! - **wide samples**: one time-index position covering all channels at once
//! - **raw samples**: individual per-channel values in an interleaved buffer
//!
//! The two are kept as distinct newtypes so that a forgotten
//! channel-count multiplication fails to compile instead of corrupting
//! stream accounting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};

/// One channel's scalar value.
///
/// Effects treat samples as opaque signed integers; nothing in this
/// crate interprets the fixed-point encoding.
pub type Sample = i32;

/// A count or offset in samples-per-channel.
///
/// Wide sample `n` is the `n`-th time-index of the stream, spanning all
/// channels simultaneously. Stream positions and lengths are counted in
/// this unit unless stated otherwise.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct WideSamples(u64);

impl WideSamples {
    /// Zero wide samples
    pub const ZERO: Self = Self(0);

    /// Create a new wide-sample count
    #[must_use]
    pub fn new(count: u64) -> Self {
        Self(count)
    }

    /// Get the count as a plain number
    pub fn count(&self) -> u64 {
        self.0
    }

    /// Convert to raw samples for a stream with the given channel count
    pub fn to_raw(self, channels: u16) -> RawSamples {
        RawSamples(self.0 * u64::from(channels))
    }
}

impl Add for WideSamples {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for WideSamples {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for WideSamples {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for WideSamples {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A count in raw interleaved samples across all channels.
///
/// `raw = wide × channels`. Buffer sizes and the lengths carried on a
/// [`crate::SignalSpec`] are in this unit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RawSamples(u64);

impl RawSamples {
    /// Zero raw samples
    pub const ZERO: Self = Self(0);

    /// Create a new raw-sample count
    #[must_use]
    pub fn new(count: u64) -> Self {
        Self(count)
    }

    /// Get the count as a plain number
    pub fn count(&self) -> u64 {
        self.0
    }

    /// Convert to wide samples for a stream with the given channel count.
    ///
    /// The count must be a whole number of wide samples; a remainder is
    /// truncated.
    pub fn to_wide(self, channels: u16) -> WideSamples {
        WideSamples(self.0 / u64::from(channels))
    }
}

impl fmt::Display for RawSamples {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
