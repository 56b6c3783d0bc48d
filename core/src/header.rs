//! Data types for the header of a DICOM data element:
//! tags, value representations and lengths.

use std::fmt;
use std::str::{from_utf8, FromStr};

/// Idiomatic alias for a tag's group number.
pub type GroupNumber = u16;
/// Idiomatic alias for a tag's element number.
pub type ElementNumber = u16;

/// The data type for DICOM data element tags.
///
/// A tag is a (group, element) pair,
/// which can also be handled as a single 32-bit identifier
/// of the form `group << 16 | element`.
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub struct Tag(pub GroupNumber, pub ElementNumber);

impl Tag {
    /// The start of a sequence item.
    pub const ITEM: Tag = Tag(0xFFFE, 0xE000);
    /// The end of an item of undefined length.
    pub const ITEM_DELIMITER: Tag = Tag(0xFFFE, 0xE00D);
    /// The end of a sequence (or itemized binary value) of undefined length.
    pub const SEQUENCE_DELIMITER: Tag = Tag(0xFFFE, 0xE0DD);

    /// Build a tag from its 32-bit identifier.
    #[inline]
    pub fn from_id32(id: u32) -> Self {
        Tag((id >> 16) as u16, (id & 0xFFFF) as u16)
    }

    /// Obtain the 32-bit identifier of this tag.
    #[inline]
    pub fn id32(self) -> u32 {
        (u32::from(self.0) << 16) | u32::from(self.1)
    }

    /// Getter for the tag's group value.
    #[inline]
    pub fn group(self) -> GroupNumber {
        self.0
    }

    /// Getter for the tag's element value.
    #[inline]
    pub fn element(self) -> ElementNumber {
        self.1
    }

    /// Whether the tag belongs to a private (odd) group.
    #[inline]
    pub fn is_private(self) -> bool {
        self.0 & 1 == 1
    }

    /// Whether this is one of the structural item or delimiter tags,
    /// which carry no value representation in either encoding.
    #[inline]
    pub fn is_item_related(self) -> bool {
        self.0 == 0xFFFE
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({:#06X?}, {:#06X?})", self.0, self.1)
    }
}

/// Tags are displayed in lower case hexadecimal, zero padded,
/// as in `(0028,0010)`.
impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:04x},{:04x})", self.0, self.1)
    }
}

impl PartialEq<(u16, u16)> for Tag {
    fn eq(&self, other: &(u16, u16)) -> bool {
        self.0 == other.0 && self.1 == other.1
    }
}

impl From<(u16, u16)> for Tag {
    #[inline]
    fn from(value: (u16, u16)) -> Tag {
        Tag(value.0, value.1)
    }
}

impl From<u32> for Tag {
    #[inline]
    fn from(id: u32) -> Tag {
        Tag::from_id32(id)
    }
}

/// An enum type for a DICOM value representation.
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Ord, PartialOrd)]
pub enum VR {
    /// Application Entity
    AE,
    /// Age String
    AS,
    /// Attribute Tag
    AT,
    /// Code String
    CS,
    /// Date
    DA,
    /// Decimal String
    DS,
    /// Date Time
    DT,
    /// Floating Point Single
    FL,
    /// Floating Point Double
    FD,
    /// Integer String
    IS,
    /// Long String
    LO,
    /// Long Text
    LT,
    /// Other Byte
    OB,
    /// Other Double
    OD,
    /// Other Float
    OF,
    /// Other Long
    OL,
    /// Other Very Long
    OV,
    /// Other Word
    OW,
    /// Person Name
    PN,
    /// Short String
    SH,
    /// Signed Long
    SL,
    /// Sequence of Items
    SQ,
    /// Signed Short
    SS,
    /// Short Text
    ST,
    /// Signed Very Long
    SV,
    /// Time
    TM,
    /// Unlimited Characters
    UC,
    /// Unique Identifier (UID)
    UI,
    /// Unsigned Long
    UL,
    /// Unknown
    UN,
    /// Universal Resource Identifier or Universal Resource Locator (URI/URL)
    UR,
    /// Unsigned Short
    US,
    /// Unlimited Text
    UT,
    /// Unsigned Very Long
    UV,
}

impl VR {
    /// Obtain the value representation corresponding to the given two bytes.
    /// Each byte should represent an alphabetic character in upper case.
    pub fn from_binary(chars: [u8; 2]) -> Option<Self> {
        from_utf8(chars.as_ref())
            .ok()
            .and_then(|s| VR::from_str(s).ok())
    }

    /// Retrieve a string representation of this VR.
    pub fn as_str(self) -> &'static str {
        use VR::*;
        match self {
            AE => "AE",
            AS => "AS",
            AT => "AT",
            CS => "CS",
            DA => "DA",
            DS => "DS",
            DT => "DT",
            FL => "FL",
            FD => "FD",
            IS => "IS",
            LO => "LO",
            LT => "LT",
            OB => "OB",
            OD => "OD",
            OF => "OF",
            OL => "OL",
            OV => "OV",
            OW => "OW",
            PN => "PN",
            SH => "SH",
            SL => "SL",
            SQ => "SQ",
            SS => "SS",
            ST => "ST",
            SV => "SV",
            TM => "TM",
            UC => "UC",
            UI => "UI",
            UL => "UL",
            UN => "UN",
            UR => "UR",
            US => "US",
            UT => "UT",
            UV => "UV",
        }
    }

    /// Whether an explicit VR header of this representation
    /// reserves two bytes after the VR and then uses a 32-bit length,
    /// making the header 12 bytes long instead of 8.
    pub fn has_extended_length(self) -> bool {
        use VR::*;
        match self {
            OB | OD | OF | OL | OV | OW | SQ | SV | UC | UN | UR | UT | UV => true,
            AE | AS | AT | CS | DA | DS | DT | FL | FD | IS | LO | LT | PN | SH | SL | SS
            | ST | TM | UI | UL | US => false,
        }
    }

    /// Whether values of this representation are opaque binary blobs
    /// which are set aside instead of being decoded into a value.
    #[inline]
    pub fn is_binary_blob(self) -> bool {
        matches!(self, VR::OB | VR::OW)
    }
}

/// Obtain the value representation corresponding to the given string.
/// The string should hold exactly two alphabetic characters
/// in upper case, otherwise no match is made.
impl FromStr for VR {
    type Err = &'static str;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        use VR::*;
        match string {
            "AE" => Ok(AE),
            "AS" => Ok(AS),
            "AT" => Ok(AT),
            "CS" => Ok(CS),
            "DA" => Ok(DA),
            "DS" => Ok(DS),
            "DT" => Ok(DT),
            "FL" => Ok(FL),
            "FD" => Ok(FD),
            "IS" => Ok(IS),
            "LO" => Ok(LO),
            "LT" => Ok(LT),
            "OB" => Ok(OB),
            "OD" => Ok(OD),
            "OF" => Ok(OF),
            "OL" => Ok(OL),
            "OV" => Ok(OV),
            "OW" => Ok(OW),
            "PN" => Ok(PN),
            "SH" => Ok(SH),
            "SL" => Ok(SL),
            "SQ" => Ok(SQ),
            "SS" => Ok(SS),
            "ST" => Ok(ST),
            "SV" => Ok(SV),
            "TM" => Ok(TM),
            "UC" => Ok(UC),
            "UI" => Ok(UI),
            "UL" => Ok(UL),
            "UN" => Ok(UN),
            "UR" => Ok(UR),
            "US" => Ok(US),
            "UT" => Ok(UT),
            "UV" => Ok(UV),
            _ => Err("no such value representation"),
        }
    }
}

impl fmt::Display for VR {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const UNDEFINED_LEN: u32 = 0xFFFF_FFFF;

/// A type for representing the declared length of an element, in bytes.
///
/// An internal value of `0xFFFF_FFFF` represents an undefined length,
/// only legal for sequences and itemized binary values,
/// whose end is then marked by a delimiter.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Length(pub u32);

impl Length {
    /// A length that is undefined.
    pub const UNDEFINED: Self = Length(UNDEFINED_LEN);

    /// Check whether this length is undefined (unknown).
    #[inline]
    pub fn is_undefined(self) -> bool {
        self.0 == UNDEFINED_LEN
    }

    /// Check whether this length is well defined (not undefined).
    #[inline]
    pub fn is_defined(self) -> bool {
        !self.is_undefined()
    }

    /// Fetch the concrete length value, if available.
    /// Returns `None` if it represents an undefined length.
    #[inline]
    pub fn get(self) -> Option<u32> {
        match self.0 {
            UNDEFINED_LEN => None,
            v => Some(v),
        }
    }
}

impl From<u32> for Length {
    #[inline]
    fn from(o: u32) -> Self {
        Length(o)
    }
}

impl fmt::Debug for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            UNDEFINED_LEN => f.write_str("Length(Undefined)"),
            l => f.debug_tuple("Length").field(&l).finish(),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            UNDEFINED_LEN => f.write_str("U/L"),
            l => write!(f, "{}", &l),
        }
    }
}

/// A data structure for a data element header, containing
/// a tag, value representation and declared length.
///
/// The value representation is `None` when it could not be determined,
/// either because an implicit VR tag is missing from the dictionary
/// or because the explicit VR bytes are not a known representation.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct DataElementHeader {
    /// DICOM tag
    pub tag: Tag,
    /// Value Representation
    pub vr: Option<VR>,
    /// Element length
    pub len: Length,
}

impl DataElementHeader {
    /// Create a new data element header with the given properties.
    #[inline]
    pub fn new<T: Into<Tag>>(tag: T, vr: Option<VR>, len: Length) -> DataElementHeader {
        DataElementHeader {
            tag: tag.into(),
            vr,
            len,
        }
    }

    /// Check whether the header suggests the value to be a sequence value:
    /// if the value representation is SQ, or the length is undefined
    /// for anything but an itemized binary value.
    pub fn is_sequence(&self) -> bool {
        match self.vr {
            Some(VR::SQ) => true,
            Some(vr) if vr.is_binary_blob() => false,
            _ => self.len.is_undefined(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_id32_conversions() {
        let t = Tag::from_id32(0x7FE0_0010);
        assert_eq!(t, Tag(0x7FE0, 0x0010));
        assert_eq!(t.id32(), 0x7FE0_0010);
        assert_eq!(Tag::ITEM.id32(), 0xFFFE_E000);
        assert_eq!(Tag::SEQUENCE_DELIMITER.id32(), 0xFFFE_E0DD);
    }

    #[test]
    fn tag_display_is_lower_case() {
        assert_eq!(Tag(0x0051, 0x100C).to_string(), "(0051,100c)");
        assert_eq!(Tag(0x0028, 0x0010).to_string(), "(0028,0010)");
    }

    #[test]
    fn vr_from_binary() {
        assert_eq!(VR::from_binary(*b"OB"), Some(VR::OB));
        assert_eq!(VR::from_binary(*b"SQ"), Some(VR::SQ));
        assert_eq!(VR::from_binary([0x00, 0x01]), None);
        assert_eq!(VR::from_binary(*b"XX"), None);
    }

    #[test]
    fn extended_length_vrs() {
        for vr in [VR::OB, VR::OW, VR::OF, VR::SQ, VR::UT, VR::UN] {
            assert!(vr.has_extended_length(), "{} should have a 32-bit length", vr);
        }
        for vr in [VR::US, VR::CS, VR::DS, VR::AT, VR::LT] {
            assert!(!vr.has_extended_length(), "{} should have a 16-bit length", vr);
        }
    }

    #[test]
    fn undefined_length() {
        assert!(Length::UNDEFINED.is_undefined());
        assert_eq!(Length::UNDEFINED.get(), None);
        assert_eq!(Length(12).get(), Some(12));
        assert_eq!(Length::UNDEFINED.to_string(), "U/L");
    }

    #[test]
    fn sequence_detection() {
        let sq = DataElementHeader::new((0x0008, 0x1140), Some(VR::SQ), Length(20));
        assert!(sq.is_sequence());
        let un = DataElementHeader::new((0x0029, 0x1010), None, Length::UNDEFINED);
        assert!(un.is_sequence());
        let pixels = DataElementHeader::new((0x7FE0, 0x0010), Some(VR::OB), Length::UNDEFINED);
        assert!(!pixels.is_sequence());
    }
}
