//! Decoder of the private Philips CT compression (`PMSCT_RLE1`),
//! used by the transfer syntax `1.3.46.670589.33.1.4.1`.
//!
//! The compressed stream is decoded in two passes.
//! The first pass expands runs: the byte `0xA5` is followed by
//! a repeat count `n` and a byte value, standing for `n + 1` copies of it.
//! The second pass rebuilds 16-bit samples from the expanded bytes:
//! the byte `0x5A` is followed by a literal little endian sample,
//! and any other byte is a signed difference to the previous sample.

use snafu::{ensure, Backtrace, Snafu};

/// Run marker of the first pass.
const RUN: u8 = 0xA5;
/// Literal marker of the second pass.
const LITERAL: u8 = 0x5A;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// A marker is not followed by its two bytes.
    #[snafu(display("Truncated {} marker at position {}", marker, position))]
    TruncatedMarker {
        marker: &'static str,
        position: usize,
        backtrace: Backtrace,
    },
    /// The stream does not decode into the expected number of samples.
    #[snafu(display("Decoded {} samples, expected {}", decoded, expected))]
    SampleCount {
        decoded: usize,
        expected: usize,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Decode a compressed stream into exactly `samples` 16-bit samples.
pub fn decode_delta_rle(input: &[u8], samples: usize) -> Result<Vec<u16>> {
    let expanded = expand_runs(input)?;
    let out = undo_deltas(&expanded, samples)?;
    ensure!(
        out.len() == samples,
        SampleCountSnafu {
            decoded: out.len(),
            expected: samples
        }
    );
    Ok(out)
}

fn expand_runs(input: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(input.len() * 2);
    let mut i = 0;
    while i < input.len() {
        if input[i] == RUN {
            let [count, value] = pair(input, i + 1).ok_or_else(|| {
                TruncatedMarkerSnafu {
                    marker: "run",
                    position: i,
                }
                .build()
            })?;
            out.extend(std::iter::repeat(value).take(usize::from(count) + 1));
            i += 3;
        } else {
            out.push(input[i]);
            i += 1;
        }
    }
    Ok(out)
}

fn undo_deltas(expanded: &[u8], samples: usize) -> Result<Vec<u16>> {
    let mut out = Vec::with_capacity(samples);
    let mut previous: u16 = 0;
    let mut i = 0;
    while i < expanded.len() {
        let value = if expanded[i] == LITERAL {
            let [lo, hi] = pair(expanded, i + 1).ok_or_else(|| {
                TruncatedMarkerSnafu {
                    marker: "literal",
                    position: i,
                }
                .build()
            })?;
            i += 3;
            u16::from_le_bytes([lo, hi])
        } else {
            let delta = expanded[i] as i8;
            i += 1;
            previous.wrapping_add_signed(i16::from(delta))
        };
        ensure!(
            out.len() < samples,
            SampleCountSnafu {
                decoded: out.len() + 1,
                expected: samples
            }
        );
        out.push(value);
        previous = value;
    }
    Ok(out)
}

fn pair(bytes: &[u8], at: usize) -> Option<[u8; 2]> {
    bytes.get(at..at + 2)?.try_into().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn run_then_literal() {
        let input = [0xA5, 0x02, 0x07, 0x5A, 0x01, 0x00];
        assert_eq!(expand_runs(&input).unwrap(), [7, 7, 7, 0x5A, 1, 0]);
        assert_eq!(decode_delta_rle(&input, 4).unwrap(), [7, 14, 21, 1]);
    }

    #[test]
    fn deltas_are_signed() {
        // literal 1000, then -1, -128, +127
        let input = [0x5A, 0xE8, 0x03, 0xFF, 0x80, 0x7F];
        assert_eq!(decode_delta_rle(&input, 4).unwrap(), [1000, 999, 871, 998]);
    }

    #[test]
    fn deltas_wrap_around() {
        let input = [0x5A, 0x00, 0x00, 0xFF, 0x01];
        assert_eq!(decode_delta_rle(&input, 3).unwrap(), [0, 0xFFFF, 0]);
    }

    #[rstest]
    #[case(&[0x01, 0xA5, 0x03], "run")]
    #[case(&[0x01, 0x5A, 0x03], "literal")]
    fn truncated_markers(#[case] input: &[u8], #[case] expected: &str) {
        assert!(matches!(
            decode_delta_rle(input, 2),
            Err(Error::TruncatedMarker { marker, position: 1, .. }) if marker == expected
        ));
    }

    #[rstest]
    #[case(3)]
    #[case(5)]
    fn wrong_sample_count(#[case] samples: usize) {
        let input = [0xA5, 0x02, 0x07, 0x5A, 0x01, 0x00];
        assert!(matches!(
            decode_delta_rle(&input, samples),
            Err(Error::SampleCount { expected, .. }) if expected == samples
        ));
    }
}
