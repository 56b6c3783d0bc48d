//! Utility module for fetching key attributes from a decoded data set.

use dcmtree_core::tree::PropertyTree;
use dcmtree_core::value::ConvertValueError;
use snafu::{Backtrace, OptionExt, ResultExt, Snafu};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum GetAttributeError {
    #[snafu(display("Missing required attribute `{}`", name))]
    MissingRequiredField {
        name: &'static str,
        backtrace: Backtrace,
    },

    #[snafu(display("Could not convert attribute `{}`", name))]
    ConvertValue {
        name: &'static str,
        source: ConvertValueError,
        backtrace: Backtrace,
    },

    #[snafu(display("Semantically invalid value `{}` for attribute `{}`", value, name))]
    InvalidValue {
        name: &'static str,
        value: String,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = GetAttributeError> = std::result::Result<T, E>;

/// Get the Columns from the data set
pub fn cols(tree: &PropertyTree) -> Result<u32> {
    retrieve_required_u32(tree, "Columns")
}

/// Get the Rows from the data set
pub fn rows(tree: &PropertyTree) -> Result<u32> {
    retrieve_required_u32(tree, "Rows")
}

/// Get the BitsAllocated from the data set
pub fn bits_allocated(tree: &PropertyTree) -> Result<u16> {
    let name = "BitsAllocated";
    tree.value(name)
        .context(MissingRequiredFieldSnafu { name })?
        .to_int()
        .context(ConvertValueSnafu { name })
}

/// Get the PhotometricInterpretation from the data set
pub fn photometric_interpretation(tree: &PropertyTree) -> Result<String> {
    let name = "PhotometricInterpretation";
    Ok(tree
        .value(name)
        .context(MissingRequiredFieldSnafu { name })?
        .to_str()
        .trim()
        .to_string())
}

/// Get the PlanarConfiguration from the data set, returning 0 by default
pub fn planar_configuration(tree: &PropertyTree) -> u16 {
    tree.value("PlanarConfiguration")
        .map_or(Ok(0), |v| v.to_int())
        .unwrap_or(0)
}

/// Get the ImageType from the data set, empty if it is not present
pub fn image_type(tree: &PropertyTree) -> Vec<String> {
    tree.value("ImageType")
        .map(|v| v.to_multi_str())
        .unwrap_or_default()
}

#[inline]
fn retrieve_required_u32(tree: &PropertyTree, name: &'static str) -> Result<u32> {
    tree.value(name)
        .context(MissingRequiredFieldSnafu { name })?
        .to_int()
        .context(ConvertValueSnafu { name })
}

/// An interpreted representation of the DICOM _Pixel Representation_ attribute.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum PixelRepresentation {
    /// unsigned pixel data sample values
    Unsigned,
    /// signed pixel data sample values
    Signed,
}

/// Get the PixelRepresentation from the data set.
/// Sample values are unsigned unless stated otherwise.
pub fn pixel_representation(tree: &PropertyTree) -> Result<PixelRepresentation> {
    let name = "PixelRepresentation";
    let Some(value) = tree.value(name) else {
        return Ok(PixelRepresentation::Unsigned);
    };
    let p: u16 = value.to_int().context(ConvertValueSnafu { name })?;

    match p {
        0 => Ok(PixelRepresentation::Unsigned),
        1 => Ok(PixelRepresentation::Signed),
        _ => InvalidValueSnafu {
            name,
            value: p.to_string(),
        }
        .fail(),
    }
}

/// The photometric interpretations which can be reconstructed.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum PhotometricInterpretation {
    /// Grayscale, the minimum sample value is displayed as white
    Monochrome1,
    /// Grayscale, the minimum sample value is displayed as black
    Monochrome2,
    /// Three channel colour
    Color,
    /// Three channel colour
    Rgb,
}

impl PhotometricInterpretation {
    pub fn as_str(self) -> &'static str {
        match self {
            PhotometricInterpretation::Monochrome1 => "MONOCHROME1",
            PhotometricInterpretation::Monochrome2 => "MONOCHROME2",
            PhotometricInterpretation::Color => "COLOR",
            PhotometricInterpretation::Rgb => "RGB",
        }
    }

    /// Whether samples are grouped in three channel pixels.
    pub fn is_color(self) -> bool {
        matches!(
            self,
            PhotometricInterpretation::Color | PhotometricInterpretation::Rgb
        )
    }
}

impl fmt::Display for PhotometricInterpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The given photometric interpretation cannot be reconstructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePhotometricInterpretationError;

impl FromStr for PhotometricInterpretation {
    type Err = ParsePhotometricInterpretationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MONOCHROME1" => Ok(PhotometricInterpretation::Monochrome1),
            "MONOCHROME2" => Ok(PhotometricInterpretation::Monochrome2),
            "COLOR" => Ok(PhotometricInterpretation::Color),
            "RGB" => Ok(PhotometricInterpretation::Rgb),
            _ => Err(ParsePhotometricInterpretationError),
        }
    }
}
