//! Test signal generation and a minimal driver loop
//!
//! Mirrors what a real chain driver does: feed an effect fixed-size
//! blocks, honor its reported counts exactly, then drain it to
//! completion. Used by this crate's own tests; exported behind the
//! `test-utils` feature for downstream test suites.

use shear_core::Sample;

use crate::effect::{DrainOutcome, FlowStatus, StreamEffect};

/// Generate an interleaved ramp: wide sample `i` carries the value
/// `i × channels + c` on channel `c`, so every raw sample in the stream
/// is unique and selection mistakes show up as value mismatches.
pub fn ramp_signal(wide_len: usize, channels: usize) -> Vec<Sample> {
    (0..wide_len * channels).map(|i| i as Sample).collect()
}

/// Drive `effect` over `input` in blocks of `block` wide samples,
/// collecting everything produced, then drain it to completion.
///
/// Returns the collected output and the final drain outcome.
///
/// # Panics
/// Panics if the effect stops making progress without reporting
/// end-of-stream.
pub fn run_effect(
    effect: &mut dyn StreamEffect,
    input: &[Sample],
    channels: usize,
    block: usize,
) -> (Vec<Sample>, DrainOutcome) {
    let mut collected = Vec::new();
    let mut buf = vec![0 as Sample; block * channels];
    let mut offset = 0;
    let mut ended = false;

    while offset < input.len() && !ended {
        let end = (offset + block * channels).min(input.len());
        let outcome = effect.flow(&input[offset..end], &mut buf);
        let consumed = outcome.consumed.count() as usize;
        let produced = outcome.produced.count() as usize;
        collected.extend_from_slice(&buf[..produced]);
        offset += consumed;
        ended = outcome.status == FlowStatus::EndOfStream;
        if consumed == 0 && !ended {
            // only a trailing partial wide sample may stall the loop
            assert!(end - offset < channels, "effect made no progress");
            break;
        }
    }

    loop {
        let outcome = effect.drain(&mut buf);
        collected.extend_from_slice(&buf[..outcome.produced.count() as usize]);
        if outcome.status == FlowStatus::EndOfStream {
            return (collected, outcome);
        }
    }
}
