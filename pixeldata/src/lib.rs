//! This crate reconstructs the image of a decoded `dcmtree` file.
//!
//! The raw pixel data is taken from the blob table of a [`DicomFile`],
//! decompressed if needed (Philips private CT compression, or an external
//! JPEG 2000 codec), and repacked into a typed [`PixelBuffer`]
//! according to the image attributes.
//! Siemens mosaic images are decomposed into a volume of slices.
//!
//! # Examples
//! ```no_run
//! # use std::error::Error;
//! use dcmtree_object::open_file;
//! use dcmtree_pixeldata::PixelDecoder;
//!
//! # fn main() -> Result<(), Box<dyn Error>> {
//! let mut file = open_file("mosaic.dcm")?;
//! let image = file.load_image()?;
//! println!("{}x{}x{} {}", image.columns, image.rows, image.slices, image.buffer.type_name());
//! #   Ok(())
//! # }
//! ```
//!
//! With the `ndarray` feature, the image can be turned into a 3-D array:
//!
//! ```no_run
//! # use std::error::Error;
//! # use dcmtree_object::open_file;
//! # use dcmtree_pixeldata::PixelDecoder;
//! # #[cfg(feature = "ndarray")]
//! # fn main() -> Result<(), Box<dyn Error>> {
//! let image = open_file("ct.dcm")?.decode_pixel_data()?;
//! let volume = image.to_ndarray::<f32>()?;
//! assert_eq!(volume.shape()[0], image.slices as usize);
//! #   Ok(())
//! # }
//! # #[cfg(not(feature = "ndarray"))]
//! # fn main() {}
//! ```
#![warn(missing_debug_implementations, unused_qualifications)]

use dcmtree_core::chrono::NaiveDateTime;
use dcmtree_core::Tag;
use dcmtree_dictionary_std::tags;
use dcmtree_encoding::TransferSyntax;
use dcmtree_object::codec::CodecError;
use dcmtree_object::DicomFile;
use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};
use std::borrow::Cow;

#[cfg(feature = "ndarray")]
use ndarray::Array3;
#[cfg(feature = "ndarray")]
use num_traits::NumCast;

pub mod attribute;
pub mod delta_rle;
pub mod mosaic;
pub mod reconstruct;

pub use attribute::{PhotometricInterpretation, PixelRepresentation};
pub use mosaic::Geometry;
pub use reconstruct::{invert_monochrome1, reconstruct, PixelBuffer, PixelLayout};

use attribute::GetAttributeError;

/// The element holding the compressed pixel data of Philips private CT files.
pub const PHILIPS_CT_PIXEL_DATA: Tag = Tag(0x07A1, 0x100A);
/// Where the compression of Philips private CT pixel data is named.
pub const PHILIPS_CT_COMPRESSION: &str = "UnknownTag/(07a1,1011)";
/// The only known Philips private CT compression.
pub const PMSCT_RLE1: &str = "PMSCT_RLE1";

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Could not get image attribute"))]
    GetAttribute {
        #[snafu(backtrace)]
        source: GetAttributeError,
    },

    #[snafu(display("Unsupported PhotometricInterpretation `{}`", pi))]
    UnsupportedPhotometricInterpretation { pi: String, backtrace: Backtrace },

    #[snafu(display(
        "Unsupported BitsAllocated {} for {}",
        bits_allocated,
        photometric_interpretation
    ))]
    UnsupportedBitsAllocated {
        bits_allocated: u16,
        photometric_interpretation: PhotometricInterpretation,
        backtrace: Backtrace,
    },

    #[snafu(display("Signed colour pixel data is not supported"))]
    SignedColor { backtrace: Backtrace },

    #[snafu(display(
        "Pixel data holds {} pixels, but the image is {}x{}",
        pixels,
        columns,
        rows
    ))]
    LengthMismatch {
        pixels: usize,
        rows: u32,
        columns: u32,
        backtrace: Backtrace,
    },

    #[snafu(display("Missing pixel data"))]
    NoPixelData { backtrace: Backtrace },

    #[snafu(display("Unknown compression `{}` of Philips private CT pixel data", compression))]
    UnknownCompression {
        compression: String,
        backtrace: Backtrace,
    },

    #[snafu(display("Could not decode Philips private CT pixel data"))]
    DeltaRle {
        #[snafu(backtrace)]
        source: delta_rle::Error,
    },

    #[snafu(display("No image codec for transfer syntax {}", ts))]
    MissingCodec {
        ts: &'static str,
        backtrace: Backtrace,
    },

    #[snafu(display("Codec `{}` could not decode the pixel data", codec))]
    Codec {
        codec: String,
        source: CodecError,
        backtrace: Backtrace,
    },

    #[snafu(display("Could not guess the number of slices in the mosaic"))]
    GuessSliceCount { backtrace: Backtrace },

    #[snafu(display("Could not decompose mosaic: {}", reason))]
    MosaicShape {
        reason: &'static str,
        backtrace: Backtrace,
    },

    #[cfg(feature = "ndarray")]
    #[snafu(display("Invalid shape for ndarray"))]
    Shape {
        source: ndarray::ShapeError,
        backtrace: Backtrace,
    },

    #[cfg(feature = "ndarray")]
    #[snafu(display("Invalid data type for ndarray element"))]
    InvalidDataType { backtrace: Backtrace },

    #[cfg(feature = "ndarray")]
    #[snafu(display("Colour images cannot be converted to an ndarray"))]
    ColorNdarray { backtrace: Backtrace },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A reconstructed image or volume.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    /// the samples, slice by slice, row by row
    pub buffer: PixelBuffer,
    pub columns: u32,
    pub rows: u32,
    pub slices: u32,
    pub geometry: Geometry,
    /// acquisition time of each slice, empty if unknown
    pub acquisition_times: Vec<NaiveDateTime>,
}

impl DecodedImage {
    /// Convert the image into a `slices x rows x columns` array of type `T`.
    ///
    /// Only grayscale images can be converted.
    #[cfg(feature = "ndarray")]
    pub fn to_ndarray<T>(&self) -> Result<Array3<T>>
    where
        T: NumCast,
    {
        fn convert<S, T>(samples: &[S]) -> Result<Vec<T>>
        where
            S: Copy + NumCast,
            T: NumCast,
        {
            samples
                .iter()
                .map(|&s| T::from(s).context(InvalidDataTypeSnafu))
                .collect()
        }

        let data = match &self.buffer {
            PixelBuffer::U8(v) => convert(v)?,
            PixelBuffer::I8(v) => convert(v)?,
            PixelBuffer::U16(v) => convert(v)?,
            PixelBuffer::I16(v) => convert(v)?,
            PixelBuffer::U32(v) => convert(v)?,
            PixelBuffer::I32(v) => convert(v)?,
            PixelBuffer::Rgb8(_) | PixelBuffer::Rgb16(_) => return ColorNdarraySnafu.fail(),
        };
        let shape = (
            self.slices as usize,
            self.rows as usize,
            self.columns as usize,
        );
        Array3::from_shape_vec(shape, data).context(ShapeSnafu)
    }
}

/// Reconstruction of the image of a decoded file.
pub trait PixelDecoder {
    /// Reconstruct the pixel data as a single 2-D image,
    /// without touching the decoded tree.
    fn decode_pixel_data(&self) -> Result<DecodedImage>;

    /// Reconstruct the image, decomposing Siemens mosaics into volumes
    /// as the dialects of the file ask for.
    ///
    /// The mosaic bookkeeping attributes of the tree are updated,
    /// and a leftover `SiemensNumberOfImagesInMosaic`
    /// is renamed to `SliceOrientation`.
    fn load_image(&mut self) -> Result<DecodedImage>;
}

impl PixelDecoder for DicomFile {
    fn decode_pixel_data(&self) -> Result<DecodedImage> {
        let tree = self.tree();
        let layout = image_layout(self)?;
        let raw = pixel_data(self, &layout)?;
        let buffer = reconstruct(&raw, &layout)?;
        tracing::debug!(
            "Reconstructed {}x{} {} image",
            layout.columns,
            layout.rows,
            buffer.type_name()
        );
        Ok(DecodedImage {
            buffer,
            columns: layout.columns,
            rows: layout.rows,
            slices: 1,
            geometry: Geometry::from_tree(tree),
            acquisition_times: mosaic::acquisition_time(tree).into_iter().collect(),
        })
    }

    fn load_image(&mut self) -> Result<DecodedImage> {
        use dcmtree_object::Dialect;

        let image = self.decode_pixel_data()?;
        let keep_mosaic = self.options().has_dialect(Dialect::KeepMosaic);
        let force_mosaic = self.options().has_dialect(Dialect::ForceMosaic);
        let tree = self.tree_mut();

        let image = if mosaic::is_mosaic(tree) {
            if keep_mosaic {
                tracing::debug!("Keeping the mosaic image as is");
                image
            } else {
                mosaic::decompose_mosaic(image, tree)?
            }
        } else if force_mosaic {
            tracing::debug!("Decomposing the image as a mosaic by request");
            mosaic::decompose_mosaic(image, tree)?
        } else {
            image
        };

        if tree.rename(mosaic::SLICE_COUNT, "SliceOrientation") {
            tracing::debug!("Renamed {} to SliceOrientation", mosaic::SLICE_COUNT);
        }
        Ok(image)
    }
}

fn image_layout(file: &DicomFile) -> Result<PixelLayout> {
    let tree = file.tree();
    let pi = attribute::photometric_interpretation(tree).context(GetAttributeSnafu)?;
    let photometric_interpretation = pi
        .parse()
        .ok()
        .context(UnsupportedPhotometricInterpretationSnafu { pi })?;
    Ok(PixelLayout {
        rows: attribute::rows(tree).context(GetAttributeSnafu)?,
        columns: attribute::cols(tree).context(GetAttributeSnafu)?,
        bits_allocated: attribute::bits_allocated(tree).context(GetAttributeSnafu)?,
        pixel_representation: attribute::pixel_representation(tree)
            .context(GetAttributeSnafu)?,
        photometric_interpretation,
        planar_configuration: attribute::planar_configuration(tree),
    })
}

/// The raw little endian pixel data of a file, decompressed if needed.
fn pixel_data<'a>(file: &'a DicomFile, layout: &PixelLayout) -> Result<Cow<'a, [u8]>> {
    match file.transfer_syntax() {
        TransferSyntax::PhilipsPrivateCt => {
            let compression = file
                .value(PHILIPS_CT_COMPRESSION)
                .map(|v| v.to_str().trim().to_string())
                .unwrap_or_default();
            ensure!(
                compression == PMSCT_RLE1,
                UnknownCompressionSnafu { compression }
            );
            let blob = first_blob(file.blobs().get(PHILIPS_CT_PIXEL_DATA))?;
            let samples =
                delta_rle::decode_delta_rle(blob, layout.pixel_count()).context(DeltaRleSnafu)?;
            Ok(Cow::Owned(
                samples.iter().flat_map(|s| s.to_le_bytes()).collect(),
            ))
        }
        ts if ts.needs_codec() => {
            let codec = file
                .options()
                .image_codec()
                .context(MissingCodecSnafu { ts: ts.name() })?;
            let fragments = file.blobs().get(tags::PIXEL_DATA);
            ensure!(!fragments.is_empty(), NoPixelDataSnafu);
            tracing::debug!(
                "Decoding {} pixel data fragments with {}",
                fragments.len(),
                codec.name()
            );
            let samples = codec.decode(fragments, file.tree()).context(CodecSnafu {
                codec: codec.name(),
            })?;
            Ok(Cow::Owned(samples))
        }
        _ => first_blob(file.blobs().get(tags::PIXEL_DATA)).map(Cow::Borrowed),
    }
}

fn first_blob(blobs: &[Vec<u8>]) -> Result<&[u8]> {
    match blobs {
        [] => NoPixelDataSnafu.fail(),
        [only] => Ok(only),
        [first, ..] => {
            tracing::warn!(
                "Found {} pixel data values, only the first one is used",
                blobs.len()
            );
            Ok(first)
        }
    }
}
