//! Property-based tests for the trim effect
//!
//! These tests use proptest to verify the selection and accounting
//! invariants across many random position tables, channel counts, and
//! block sizes.

use proptest::prelude::*;

use shear_core::{RawSamples, Sample, SampleRate, SignalSpec, WideSamples};
use shear_effects::position::{Anchor, Position};
use shear_effects::{EffectError, FlowStatus, StartStatus, StreamEffect, Trim};

const RATE: SampleRate = SampleRate::new(8_000);

/// Interleaved ramp signal; every raw sample is unique.
fn ramp(wide_len: u64, channels: u16) -> Vec<Sample> {
    (0..wide_len * u64::from(channels))
        .map(|i| i as Sample)
        .collect()
}

/// What the stream should reduce to: wide sample `i` is kept iff an odd
/// number of boundaries lie at or before it.
fn reference_selection(boundaries: &[u64], wide_len: u64, channels: u16) -> Vec<Sample> {
    let channels = u64::from(channels);
    let mut kept = Vec::new();
    for i in 0..wide_len {
        let flips = boundaries.iter().filter(|&&b| b <= i).count();
        if flips % 2 == 1 {
            for c in 0..channels {
                kept.push((i * channels + c) as Sample);
            }
        }
    }
    kept
}

/// Minimal driver loop: fixed-size blocks, exact count accounting.
fn run_trim(trim: &mut Trim, input: &[Sample], channels: u16, block: usize) -> Vec<Sample> {
    let frame = usize::from(channels);
    let mut collected = Vec::new();
    let mut buf = vec![0 as Sample; block * frame];
    let mut offset = 0;

    while offset < input.len() {
        let end = (offset + block * frame).min(input.len());
        let outcome = trim.flow(&input[offset..end], &mut buf);
        collected.extend_from_slice(&buf[..outcome.produced.count() as usize]);
        offset += outcome.consumed.count() as usize;
        if outcome.status == FlowStatus::EndOfStream {
            break;
        }
    }
    collected
}

fn relative_positions(increments: &[u64]) -> Vec<Position> {
    increments
        .iter()
        .map(|inc| Position::new(format!("{inc}s"), Anchor::Previous).unwrap())
        .collect()
}

proptest! {
    /// Property: streamed output equals the reference selection for any
    /// boundary table, channel count, and block size, and matches the
    /// length declared at start when the input length is known.
    #[test]
    fn streamed_selection_matches_reference(
        increments in prop::collection::vec(0u64..40, 0..6),
        extra in 0u64..40,
        channels in 1u16..=4,
        block in 1usize..64,
    ) {
        let boundaries: Vec<u64> = increments
            .iter()
            .scan(0u64, |acc, inc| {
                *acc += inc;
                Some(*acc)
            })
            .collect();
        let wide_len = boundaries.last().copied().unwrap_or(0) + extra;

        let input_spec = SignalSpec::with_length(
            RATE,
            channels,
            WideSamples::new(wide_len).to_raw(channels),
        );
        let input = ramp(wide_len, channels);

        let mut trim = Trim::new(relative_positions(&increments));
        let mut output_spec = input_spec;
        let status = trim.start(&input_spec, &mut output_spec).unwrap();

        match status {
            StartStatus::Bypass => {
                // the driver drops the stage and the stream passes through
                // untouched; only the two degenerate forms may bypass
                prop_assert!(boundaries.is_empty() || boundaries == [0]);
                prop_assert_eq!(output_spec, input_spec);
            }
            StartStatus::Ready => {
                let expected = reference_selection(&boundaries, wide_len, channels);
                let output = run_trim(&mut trim, &input, channels, block);
                prop_assert_eq!(&output, &expected);

                let declared = output_spec.length.expect("input length is known");
                prop_assert_eq!(declared, RawSamples::new(output.len() as u64));
            }
        }
    }

    /// Property: the emitted stream does not depend on how the input is
    /// blocked up.
    #[test]
    fn output_is_independent_of_block_size(
        increments in prop::collection::vec(0u64..40, 1..6),
        extra in 0u64..40,
        channels in 1u16..=4,
        block_a in 1usize..64,
        block_b in 1usize..64,
    ) {
        let total: u64 = increments.iter().sum();
        let wide_len = total + extra;
        let input_spec = SignalSpec::with_length(
            RATE,
            channels,
            WideSamples::new(wide_len).to_raw(channels),
        );
        let input = ramp(wide_len, channels);

        let mut first = Trim::new(relative_positions(&increments));
        let mut second = first.clone();
        let mut output_spec = input_spec;
        let status_a = first.start(&input_spec, &mut output_spec).unwrap();
        let status_b = second.start(&input_spec, &mut output_spec).unwrap();
        prop_assert_eq!(status_a, status_b);

        prop_assert_eq!(
            run_trim(&mut first, &input, channels, block_a),
            run_trim(&mut second, &input, channels, block_b)
        );
    }

    /// Property: position lists that go backward after resolution always
    /// fail at start, never partially succeed.
    #[test]
    fn non_monotonic_lists_always_fail_at_start(
        offsets in prop::collection::vec(0u64..100, 2..6),
    ) {
        prop_assume!(offsets.windows(2).any(|pair| pair[1] < pair[0]));

        let positions: Vec<Position> = offsets
            .iter()
            .map(|off| Position::new(format!("{off}s"), Anchor::Start).unwrap())
            .collect();
        let mut trim = Trim::new(positions);

        let input_spec = SignalSpec::new(RATE, 1);
        let mut output_spec = input_spec;
        let result = trim.start(&input_spec, &mut output_spec);
        let is_ordering_error = matches!(result, Err(EffectError::Ordering { .. }));
        prop_assert!(is_ordering_error);

        // the failed start must not have declared an output length
        prop_assert_eq!(output_spec.length, input_spec.length);
    }
}
