//! Shear Effects
//!
//! The streaming effect execution contract and the effects built on it.
//!
//! An effect is a pipeline stage that consumes a sequence of
//! multi-channel sample blocks and emits a transformed sequence, under a
//! strict lifecycle (`configure` → `start` → `flow`… → `drain`…) and
//! exact buffer accounting, so that arbitrary effects can be chained and
//! partially fed or drained without losing or duplicating a single
//! sample. See [`effect::StreamEffect`] for the full contract.
//!
//! # Example: trimming a stream
//!
//! ```rust
//! use shear_core::{RawSamples, SampleRate, SignalSpec};
//! use shear_effects::{FlowStatus, StartStatus, StreamEffect, Trim};
//!
//! // keep wide samples [2, 5) of an 8-sample mono stream
//! let mut trim = Trim::from_args(&["=2s", "=5s"]).unwrap();
//! let input_spec = SignalSpec::with_length(SampleRate::new(8_000), 1, RawSamples::new(8));
//! let mut output_spec = input_spec;
//! assert_eq!(trim.start(&input_spec, &mut output_spec).unwrap(), StartStatus::Ready);
//! assert_eq!(output_spec.length, Some(RawSamples::new(3)));
//!
//! let input: Vec<i32> = (0..8).collect();
//! let mut output = vec![0; 8];
//! let outcome = trim.flow(&input, &mut output);
//! assert_eq!(&output[..3], &[2, 3, 4]);
//! // the request is fully satisfied before the input is exhausted
//! assert_eq!(outcome.status, FlowStatus::EndOfStream);
//! ```

pub mod effect;
mod error;
pub mod position;
mod trim;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use effect::{DrainOutcome, FlowOutcome, FlowStatus, StartStatus, StreamEffect};
pub use error::{EffectError, Result, StreamWarning};
pub use position::{Anchor, Position};
pub use trim::Trim;
