//! Reconstruction of typed pixel buffers out of raw pixel data.
//!
//! The value representation of the pixel data element does not
//! necessarily match the sample type, so the raw little endian bytes
//! are repacked according to the image attributes.

use crate::attribute::{PhotometricInterpretation, PixelRepresentation};
use crate::{
    LengthMismatchSnafu, Result, SignedColorSnafu, UnsupportedBitsAllocatedSnafu,
};
use byteorder::{ByteOrder, LittleEndian};
use num_traits::{PrimInt, WrappingSub};
use snafu::ensure;

/// A reconstructed pixel buffer, one variant per sample type.
#[derive(Debug, Clone, PartialEq)]
pub enum PixelBuffer {
    U8(Vec<u8>),
    I8(Vec<i8>),
    U16(Vec<u16>),
    I16(Vec<i16>),
    U32(Vec<u32>),
    I32(Vec<i32>),
    /// 8-bit per channel colour
    Rgb8(Vec<[u8; 3]>),
    /// 16-bit per channel colour
    Rgb16(Vec<[u16; 3]>),
}

macro_rules! for_each_buffer {
    ($buffer:expr, $v:ident => $e:expr) => {
        match $buffer {
            PixelBuffer::U8($v) => $e,
            PixelBuffer::I8($v) => $e,
            PixelBuffer::U16($v) => $e,
            PixelBuffer::I16($v) => $e,
            PixelBuffer::U32($v) => $e,
            PixelBuffer::I32($v) => $e,
            PixelBuffer::Rgb8($v) => $e,
            PixelBuffer::Rgb16($v) => $e,
        }
    };
}

impl PixelBuffer {
    /// Number of pixels in the buffer.
    pub fn len(&self) -> usize {
        for_each_buffer!(self, v => v.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A short name of the sample type.
    pub fn type_name(&self) -> &'static str {
        match self {
            PixelBuffer::U8(_) => "u8",
            PixelBuffer::I8(_) => "i8",
            PixelBuffer::U16(_) => "u16",
            PixelBuffer::I16(_) => "i16",
            PixelBuffer::U32(_) => "u32",
            PixelBuffer::I32(_) => "i32",
            PixelBuffer::Rgb8(_) => "rgb8",
            PixelBuffer::Rgb16(_) => "rgb16",
        }
    }

    /// Whether each pixel has three channels.
    pub fn is_color(&self) -> bool {
        matches!(self, PixelBuffer::Rgb8(_) | PixelBuffer::Rgb16(_))
    }

    /// The smallest and largest sample of a grayscale buffer.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        fn fold<T: Copy + Into<f64>>(v: &[T]) -> Option<(f64, f64)> {
            v.iter().map(|&x| x.into()).fold(None, |acc, x: f64| match acc {
                None => Some((x, x)),
                Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
            })
        }
        match self {
            PixelBuffer::U8(v) => fold(v),
            PixelBuffer::I8(v) => fold(v),
            PixelBuffer::U16(v) => fold(v),
            PixelBuffer::I16(v) => fold(v),
            PixelBuffer::U32(v) => fold(v),
            PixelBuffer::I32(v) => fold(v),
            PixelBuffer::Rgb8(_) | PixelBuffer::Rgb16(_) => None,
        }
    }
}

/// The image attributes which drive reconstruction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelLayout {
    pub rows: u32,
    pub columns: u32,
    pub bits_allocated: u16,
    pub pixel_representation: PixelRepresentation,
    pub photometric_interpretation: PhotometricInterpretation,
    /// 0 for interleaved colour channels, 1 for one plane per channel
    pub planar_configuration: u16,
}

impl PixelLayout {
    /// Number of pixels of one frame.
    pub fn pixel_count(&self) -> usize {
        self.rows as usize * self.columns as usize
    }
}

/// Repack raw little endian pixel data into a typed buffer,
/// inverting MONOCHROME1 samples and grouping colour channels.
///
/// The number of reconstructed pixels must match rows times columns.
pub fn reconstruct(raw: &[u8], layout: &PixelLayout) -> Result<PixelBuffer> {
    let signed = layout.pixel_representation == PixelRepresentation::Signed;
    let bits_allocated = layout.bits_allocated;
    let buffer = match layout.photometric_interpretation {
        pi if pi.is_color() => {
            ensure!(!signed, SignedColorSnafu);
            match bits_allocated {
                8 => {
                    let raw = deplanarize(raw, 1, layout.planar_configuration);
                    PixelBuffer::Rgb8(
                        raw.chunks_exact(3).map(|c| [c[0], c[1], c[2]]).collect(),
                    )
                }
                16 => {
                    let raw = deplanarize(raw, 2, layout.planar_configuration);
                    let samples = repack_u16(&raw);
                    PixelBuffer::Rgb16(
                        samples.chunks_exact(3).map(|c| [c[0], c[1], c[2]]).collect(),
                    )
                }
                _ => {
                    return UnsupportedBitsAllocatedSnafu {
                        bits_allocated,
                        photometric_interpretation: pi,
                    }
                    .fail()
                }
            }
        }
        pi => {
            let invert = pi == PhotometricInterpretation::Monochrome1;
            match (bits_allocated, signed) {
                (8, false) => PixelBuffer::U8(inverted_if(raw.to_vec(), invert)),
                (8, true) => PixelBuffer::I8(raw.iter().map(|&b| b as i8).collect()),
                (16, false) => PixelBuffer::U16(inverted_if(repack_u16(raw), invert)),
                (16, true) => {
                    let mut out = vec![0; raw.len() / 2];
                    LittleEndian::read_i16_into(&raw[..out.len() * 2], &mut out);
                    PixelBuffer::I16(out)
                }
                (32, false) => {
                    let mut out = vec![0; raw.len() / 4];
                    LittleEndian::read_u32_into(&raw[..out.len() * 4], &mut out);
                    PixelBuffer::U32(inverted_if(out, invert))
                }
                (32, true) => {
                    let mut out = vec![0; raw.len() / 4];
                    LittleEndian::read_i32_into(&raw[..out.len() * 4], &mut out);
                    PixelBuffer::I32(out)
                }
                _ => {
                    return UnsupportedBitsAllocatedSnafu {
                        bits_allocated,
                        photometric_interpretation: pi,
                    }
                    .fail()
                }
            }
        }
    };

    ensure!(
        buffer.len() == layout.pixel_count(),
        LengthMismatchSnafu {
            pixels: buffer.len(),
            rows: layout.rows,
            columns: layout.columns,
        }
    );
    Ok(buffer)
}

fn repack_u16(raw: &[u8]) -> Vec<u16> {
    let mut out = vec![0; raw.len() / 2];
    LittleEndian::read_u16_into(&raw[..out.len() * 2], &mut out);
    out
}

/// Interleave colour planes (`RRR..GGG..BBB..`) into pixels (`RGBRGB..`).
fn deplanarize(raw: &[u8], sample_len: usize, planar_configuration: u16) -> Vec<u8> {
    if planar_configuration != 1 {
        return raw.to_vec();
    }
    let plane_len = raw.len() / 3 / sample_len * sample_len;
    let mut out = Vec::with_capacity(plane_len * 3);
    for sample in (0..plane_len).step_by(sample_len) {
        for plane in 0..3 {
            let start = plane * plane_len + sample;
            out.extend_from_slice(&raw[start..start + sample_len]);
        }
    }
    out
}

fn inverted_if<T>(mut values: Vec<T>, invert: bool) -> Vec<T>
where
    T: PrimInt + WrappingSub,
{
    if invert {
        invert_monochrome1(&mut values);
    }
    values
}

/// Invert samples in place as `max - 1 - (v - min)`,
/// where `min` and `max` are taken from the samples themselves.
///
/// This maps `min` to `max - 1`, not to `max`.
pub fn invert_monochrome1<T>(values: &mut [T])
where
    T: PrimInt + WrappingSub,
{
    let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
        return;
    };
    for v in values.iter_mut() {
        let dist_from_min = v.wrapping_sub(&min);
        *v = max.wrapping_sub(&T::one()).wrapping_sub(&dist_from_min);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use rstest::rstest;

    fn layout(pi: PhotometricInterpretation, bits_allocated: u16) -> PixelLayout {
        PixelLayout {
            rows: 2,
            columns: 2,
            bits_allocated,
            pixel_representation: PixelRepresentation::Unsigned,
            photometric_interpretation: pi,
            planar_configuration: 0,
        }
    }

    #[test]
    fn monochrome1_inversion() {
        let out = reconstruct(
            &[10, 20, 30, 40],
            &layout(PhotometricInterpretation::Monochrome1, 8),
        )
        .unwrap();
        assert_eq!(out, PixelBuffer::U8(vec![39, 29, 19, 9]));
    }

    #[test]
    fn monochrome1_inversion_16_bit() {
        let raw: Vec<u8> = [100_u16, 200, 1000, 1100]
            .iter()
            .flat_map(|v| v.to_le_bytes())
            .collect();
        let out = reconstruct(&raw, &layout(PhotometricInterpretation::Monochrome1, 16)).unwrap();
        assert_eq!(out, PixelBuffer::U16(vec![1099, 999, 199, 99]));
    }

    #[test]
    fn inversion_from_zero_wraps() {
        let mut values = [0_u8, 5];
        invert_monochrome1(&mut values);
        assert_eq!(values, [4, 255]);
    }

    #[test]
    fn signed_samples_are_not_inverted() {
        let mut l = layout(PhotometricInterpretation::Monochrome1, 16);
        l.pixel_representation = PixelRepresentation::Signed;
        let raw = [0xFF, 0xFF, 0x02, 0x00, 0x00, 0x80, 0xFF, 0x7F];
        let out = reconstruct(&raw, &l).unwrap();
        assert_eq!(out, PixelBuffer::I16(vec![-1, 2, i16::MIN, i16::MAX]));
    }

    #[rstest]
    #[case(8, PixelBuffer::U8(vec![1, 2, 3, 4]))]
    #[case(16, PixelBuffer::U16(vec![0x0201, 0x0403]))]
    #[case(32, PixelBuffer::U32(vec![0x04030201]))]
    fn monochrome2_repacking(#[case] bits_allocated: u16, #[case] expected: PixelBuffer) {
        let mut l = layout(PhotometricInterpretation::Monochrome2, bits_allocated);
        l.rows = 1;
        l.columns = expected.len() as u32;
        let out = reconstruct(&[1, 2, 3, 4], &l).unwrap();
        assert_eq!(out, expected);
    }

    #[test]
    fn length_must_match() {
        let err = reconstruct(
            &[10, 20, 30],
            &layout(PhotometricInterpretation::Monochrome2, 8),
        )
        .unwrap_err();
        assert!(matches!(err, Error::LengthMismatch { pixels: 3, .. }));
    }

    #[test]
    fn rgb_interleaved() {
        let raw: Vec<u8> = (0..12).collect();
        let out = reconstruct(&raw, &layout(PhotometricInterpretation::Rgb, 8)).unwrap();
        assert_eq!(
            out,
            PixelBuffer::Rgb8(vec![[0, 1, 2], [3, 4, 5], [6, 7, 8], [9, 10, 11]])
        );
    }

    #[test]
    fn rgb_planar() {
        let mut l = layout(PhotometricInterpretation::Color, 8);
        l.planar_configuration = 1;
        #[rustfmt::skip]
        let raw = [
            // red plane
            1, 2, 3, 4,
            // green plane
            10, 20, 30, 40,
            // blue plane
            100, 200, 250, 255,
        ];
        let out = reconstruct(&raw, &l).unwrap();
        assert_eq!(
            out,
            PixelBuffer::Rgb8(vec![[1, 10, 100], [2, 20, 200], [3, 30, 250], [4, 40, 255]])
        );
    }

    #[test]
    fn rgb16_planar() {
        let mut l = layout(PhotometricInterpretation::Rgb, 16);
        l.rows = 1;
        l.planar_configuration = 1;
        let raw: Vec<u8> = [1_u16, 2, 300, 400, 5000, 6000]
            .iter()
            .flat_map(|v| v.to_le_bytes())
            .collect();
        let out = reconstruct(&raw, &l).unwrap();
        assert_eq!(out, PixelBuffer::Rgb16(vec![[1, 300, 5000], [2, 400, 6000]]));
    }

    #[test]
    fn unsupported_formats() {
        let mut l = layout(PhotometricInterpretation::Rgb, 8);
        l.pixel_representation = PixelRepresentation::Signed;
        assert!(matches!(
            reconstruct(&[0; 12], &l),
            Err(Error::SignedColor { .. })
        ));

        let l = layout(PhotometricInterpretation::Rgb, 32);
        assert!(matches!(
            reconstruct(&[0; 48], &l),
            Err(Error::UnsupportedBitsAllocated { bits_allocated: 32, .. })
        ));

        let l = layout(PhotometricInterpretation::Monochrome2, 12);
        assert!(matches!(
            reconstruct(&[0; 8], &l),
            Err(Error::UnsupportedBitsAllocated { bits_allocated: 12, .. })
        ));
    }
}
