//! The transfer syntaxes accepted by the decoder.
//!
//! Only a small allow-list is supported: implicit VR little endian,
//! explicit VR little endian (any UID sharing its prefix, which includes
//! the deflated variant), JPEG 2000 lossless (when a codec is available)
//! and one private Philips CT syntax with relocated, delta compressed
//! pixel data. Every other UID is rejected.

use crate::decode::explicit_le::ExplicitVRLittleEndianDecoder;
use crate::decode::implicit_le::ImplicitVRLittleEndianDecoder;
use crate::decode::DecodeHeader;
use dcmtree_core::dictionary::DataDictionary;
use std::fmt;

/// UID of implicit VR little endian.
pub const IMPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2";
/// UID of explicit VR little endian,
/// also the 19 character prefix accepted as explicit VR little endian.
pub const EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1";
/// UID of deflated explicit VR little endian.
pub const DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1.99";
/// UID of JPEG 2000 image compression (lossless only).
pub const JPEG_2000_LOSSLESS: &str = "1.2.840.10008.1.2.4.90";
/// UID of the private Philips CT syntax.
pub const PHILIPS_PRIVATE_CT: &str = "1.3.46.670589.33.1.4.1";

/// Whether values carry their representation in the stream.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VrEncoding {
    /// the representation is looked up in a dictionary
    Implicit,
    /// the representation follows the tag
    Explicit,
}

/// A supported transfer syntax.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TransferSyntax {
    /// Implicit VR Little Endian
    ImplicitVrLittleEndian,
    /// Explicit VR Little Endian, or a syntax sharing its UID prefix
    ExplicitVrLittleEndian,
    /// Deflated Explicit VR Little Endian: the data set is compressed as a whole
    DeflatedExplicitVrLittleEndian,
    /// JPEG 2000 Image Compression (Lossless Only), explicit VR
    Jpeg2000Lossless,
    /// Philips private CT: explicit VR, pixel data stored in
    /// `(07A1,100A)` and compressed with delta/RLE
    PhilipsPrivateCt,
}

impl TransferSyntax {
    /// Look up a transfer syntax by its UID.
    ///
    /// Trailing padding (spaces and NUL) is ignored.
    /// Returns `None` for UIDs outside of the accepted set.
    pub fn from_uid(uid: &str) -> Option<TransferSyntax> {
        let uid = uid.trim_end_matches([' ', '\0']);
        match uid {
            IMPLICIT_VR_LITTLE_ENDIAN => Some(TransferSyntax::ImplicitVrLittleEndian),
            DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN => {
                Some(TransferSyntax::DeflatedExplicitVrLittleEndian)
            }
            JPEG_2000_LOSSLESS => Some(TransferSyntax::Jpeg2000Lossless),
            PHILIPS_PRIVATE_CT => Some(TransferSyntax::PhilipsPrivateCt),
            uid if uid.starts_with(EXPLICIT_VR_LITTLE_ENDIAN) => {
                Some(TransferSyntax::ExplicitVrLittleEndian)
            }
            _ => None,
        }
    }

    /// The UID of this transfer syntax.
    /// For syntaxes accepted by prefix, this is the canonical UID.
    pub fn uid(self) -> &'static str {
        match self {
            TransferSyntax::ImplicitVrLittleEndian => IMPLICIT_VR_LITTLE_ENDIAN,
            TransferSyntax::ExplicitVrLittleEndian => EXPLICIT_VR_LITTLE_ENDIAN,
            TransferSyntax::DeflatedExplicitVrLittleEndian => DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN,
            TransferSyntax::Jpeg2000Lossless => JPEG_2000_LOSSLESS,
            TransferSyntax::PhilipsPrivateCt => PHILIPS_PRIVATE_CT,
        }
    }

    /// A human readable name of this transfer syntax.
    pub fn name(self) -> &'static str {
        match self {
            TransferSyntax::ImplicitVrLittleEndian => "Implicit VR Little Endian",
            TransferSyntax::ExplicitVrLittleEndian => "Explicit VR Little Endian",
            TransferSyntax::DeflatedExplicitVrLittleEndian => "Deflated Explicit VR Little Endian",
            TransferSyntax::Jpeg2000Lossless => "JPEG 2000 Image Compression (Lossless Only)",
            TransferSyntax::PhilipsPrivateCt => "Philips Private CT",
        }
    }

    /// How element headers are encoded.
    pub fn vr_encoding(self) -> VrEncoding {
        match self {
            TransferSyntax::ImplicitVrLittleEndian => VrEncoding::Implicit,
            _ => VrEncoding::Explicit,
        }
    }

    /// Whether the whole data set must be inflated before decoding.
    pub fn is_deflated(self) -> bool {
        self == TransferSyntax::DeflatedExplicitVrLittleEndian
    }

    /// Whether decoding the pixel data requires an external image codec.
    pub fn needs_codec(self) -> bool {
        self == TransferSyntax::Jpeg2000Lossless
    }

    /// Obtain a header decoder for this transfer syntax,
    /// resolving implicit representations with the given dictionary.
    pub fn header_decoder<'d, D>(self, dict: &'d D) -> Box<dyn DecodeHeader + 'd>
    where
        D: DataDictionary,
    {
        match self.vr_encoding() {
            VrEncoding::Implicit => Box::new(ImplicitVRLittleEndianDecoder::with_dict(dict)),
            VrEncoding::Explicit => Box::new(ExplicitVRLittleEndianDecoder),
        }
    }
}

impl fmt::Display for TransferSyntax {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.uid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.2.840.10008.1.2", Some(TransferSyntax::ImplicitVrLittleEndian))]
    #[case("1.2.840.10008.1.2\0", Some(TransferSyntax::ImplicitVrLittleEndian))]
    #[case("1.2.840.10008.1.2.1", Some(TransferSyntax::ExplicitVrLittleEndian))]
    #[case("1.2.840.10008.1.2.1.98", Some(TransferSyntax::ExplicitVrLittleEndian))]
    #[case("1.2.840.10008.1.2.1.99", Some(TransferSyntax::DeflatedExplicitVrLittleEndian))]
    #[case("1.2.840.10008.1.2.4.90", Some(TransferSyntax::Jpeg2000Lossless))]
    #[case("1.3.46.670589.33.1.4.1", Some(TransferSyntax::PhilipsPrivateCt))]
    #[case("1.2.840.10008.1.2.2", None)]
    #[case("1.2.840.10008.1.2.4.50", None)]
    #[case("1.2.840.10008.1.2.5", None)]
    #[case("", None)]
    fn accepted_uids(#[case] uid: &str, #[case] expected: Option<TransferSyntax>) {
        assert_eq!(TransferSyntax::from_uid(uid), expected);
    }

    #[test]
    fn encodings() {
        assert_eq!(
            TransferSyntax::ImplicitVrLittleEndian.vr_encoding(),
            VrEncoding::Implicit
        );
        assert_eq!(
            TransferSyntax::PhilipsPrivateCt.vr_encoding(),
            VrEncoding::Explicit
        );
        assert!(TransferSyntax::DeflatedExplicitVrLittleEndian.is_deflated());
        assert!(TransferSyntax::Jpeg2000Lossless.needs_codec());
    }
}
