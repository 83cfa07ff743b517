//! Streaming Effect Contract
//!
//! The lifecycle and buffer-accounting rules every effect and every chain
//! driver must both honor.
//!
//! # Lifecycle
//!
//! Calls proceed strictly forward, single-threaded:
//!
//! ```text
//! construct -> configure (once) -> start (once per stream)
//!           -> flow (repeated) -> drain (0+ times) -> drop
//! ```
//!
//! `configure` sees only user-supplied tokens and must defer anything
//! that needs the stream format. `start` sees the input descriptor,
//! finishes format-dependent setup and declares the output length.
//! Teardown is `Drop`; an effect owns its configuration and tables
//! exclusively, so there is nothing else to release.
//!
//! # Buffer accounting
//!
//! Buffers passed to `flow`/`drain` are owned by the caller for the
//! duration of the call; the effect reads a prefix of the input, writes a
//! prefix of the output, reports both counts exactly, and retains no
//! reference to either buffer. Repeated calls over the whole stream must
//! reproduce the effect's output with no sample duplicated or dropped
//! across call boundaries.

use shear_core::{RawSamples, Sample, SignalSpec};

use crate::error::{Result, StreamWarning};

/// Outcome of a successful `start()` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartStatus {
    /// The effect is active; begin flowing the stream through it
    Ready,
    /// The effect is a no-op for this stream; the driver may remove it
    /// from the chain and connect its neighbors directly
    Bypass,
}

/// Status returned from the streaming steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowStatus {
    /// More output may follow; keep calling
    Continue,
    /// No further output will ever be produced, even if more input
    /// physically remains. The driver may stop calling early.
    EndOfStream,
}

/// Exact buffer accounting for one `flow()` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowOutcome {
    /// Raw samples consumed from the front of the input block
    pub consumed: RawSamples,
    /// Raw samples written to the front of the output block
    pub produced: RawSamples,
    /// Whether the effect can ever produce more output
    pub status: FlowStatus,
}

/// Result of one `drain()` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrainOutcome {
    /// Raw samples written to the front of the output block
    pub produced: RawSamples,
    /// `Continue` while buffered output remains, then `EndOfStream`
    pub status: FlowStatus,
    /// Non-fatal end-of-stream diagnostic, if any
    pub warning: Option<StreamWarning>,
}

/// A pipeline stage that consumes multi-channel sample blocks and emits a
/// transformed sequence of blocks.
///
/// Implementations are exclusively owned by their driver: no shared
/// state, no locking, no I/O. `Send` allows a driver to move a built
/// chain onto its processing thread.
pub trait StreamEffect: Send {
    /// Effect name, e.g. `"trim"`
    fn name(&self) -> &'static str;

    /// One-line usage summary for configuration errors
    fn usage(&self) -> &'static str;

    /// Parse effect-specific parameters from user-supplied tokens.
    ///
    /// Must store them in a form that needs no stream-format knowledge;
    /// time-based expressions stay textual until `start`. Malformed
    /// tokens fail with [`crate::EffectError::Usage`].
    fn configure(&mut self, args: &[&str]) -> Result<()>;

    /// Finish setup against the now-known stream format.
    ///
    /// `output` arrives as a copy of `input`; the effect mutates only the
    /// declared `length` field. Returns [`StartStatus::Bypass`] when the
    /// effect would be a no-op for this stream (in which case `output` is
    /// left untouched). Start-time errors abort only this effect's
    /// activation.
    fn start(&mut self, input: &SignalSpec, output: &mut SignalSpec) -> Result<StartStatus>;

    /// The core streaming step.
    ///
    /// Consumes some prefix of `input` (a whole number of wide samples)
    /// and produces some prefix of `output`, reporting both counts in raw
    /// samples. Never consumes more than offered nor produces more than
    /// fits. Returns [`FlowStatus::EndOfStream`] once no further output
    /// will ever be produced. Streaming never fails: all validation
    /// happened in `start`.
    fn flow(&mut self, input: &[Sample], output: &mut [Sample]) -> FlowOutcome;

    /// Flush buffered trailing output once the driver has no more input.
    ///
    /// Called zero or more times until it reports
    /// [`FlowStatus::EndOfStream`]. End-of-stream diagnostics (e.g. the
    /// stream was shorter than the configuration implied) surface here as
    /// [`StreamWarning`] values.
    fn drain(&mut self, output: &mut [Sample]) -> DrainOutcome;
}
