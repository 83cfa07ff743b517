//! Shear Core
//!
//! Platform-agnostic core types for the Shear streaming effect engine.
//!
//! This crate provides the foundational building blocks shared by every
//! effect crate:
//! - **Sample units**: `Sample`, and the `WideSamples` / `RawSamples`
//!   counting newtypes that keep per-channel and across-channel counts
//!   from being mixed up
//! - **Signal descriptor**: `SignalSpec`, the read-only stream format an
//!   effect is started against
//! - **Expression parsing**: `timespec`, which turns textual time or
//!   sample-count expressions into sample counts once the rate is known
//!
//! # Example
//!
//! ```rust
//! use shear_core::{SampleRate, SignalSpec, RawSamples};
//! use shear_core::timespec::parse_sample_count;
//!
//! let spec = SignalSpec::with_length(SampleRate::CD_QUALITY, 2, RawSamples::new(88_200));
//! assert_eq!(spec.wide_length().unwrap().count(), 44_100);
//!
//! // "0.5" is half a second of wide samples at the descriptor's rate
//! let half = parse_sample_count("0.5", spec.rate).unwrap();
//! assert_eq!(half.count(), 22_050);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod sample;
pub mod signal;
pub mod timespec;

// Re-export commonly used types
pub use sample::{RawSamples, Sample, WideSamples};
pub use signal::{SampleRate, SignalSpec};
