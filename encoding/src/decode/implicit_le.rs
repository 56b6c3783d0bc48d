//! Implicit VR Little Endian syntax transfer implementation

use crate::decode::{read_tag, DecodeHeader, ReadHeaderTagSnafu, ReadLengthSnafu, Result};
use byteordered::byteorder::{ByteOrder, LittleEndian};
use dcmtree_core::dictionary::DataDictionary;
use dcmtree_core::header::{DataElementHeader, Length, Tag, VR};
use dcmtree_dictionary_std::StandardDataDictionary;
use snafu::ResultExt;
use std::fmt;
use std::io::Read;

/// Pixel Data, which is OW when the dictionary does not say otherwise.
const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);

/// An ImplicitVRLittleEndianDecoder which uses the standard data dictionary.
pub type StandardImplicitVRLittleEndianDecoder =
    ImplicitVRLittleEndianDecoder<StandardDataDictionary>;

/// A data element header decoder for the Implicit VR Little Endian transfer syntax.
/// This type contains a reference to an attribute dictionary for resolving
/// value representations.
pub struct ImplicitVRLittleEndianDecoder<D> {
    dict: D,
}

impl<D> fmt::Debug for ImplicitVRLittleEndianDecoder<D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ImplicitVRLittleEndianDecoder")
            .field("dict", &"«omitted»")
            .finish()
    }
}

impl ImplicitVRLittleEndianDecoder<StandardDataDictionary> {
    /// Retrieve this decoder using the standard data dictionary.
    pub fn with_std_dict() -> Self {
        ImplicitVRLittleEndianDecoder {
            dict: StandardDataDictionary,
        }
    }
}

impl Default for ImplicitVRLittleEndianDecoder<StandardDataDictionary> {
    fn default() -> Self {
        ImplicitVRLittleEndianDecoder::with_std_dict()
    }
}

impl<D> ImplicitVRLittleEndianDecoder<D>
where
    D: DataDictionary,
{
    /// Retrieve this decoder using a custom data dictionary.
    pub fn with_dict(dictionary: D) -> Self {
        ImplicitVRLittleEndianDecoder { dict: dictionary }
    }

    /// The value representation assumed for the given tag.
    fn resolve_vr(&self, tag: Tag) -> Option<VR> {
        if tag.is_item_related() {
            return None;
        }
        // VR resolution is done with the help of the data dictionary.
        // Pixel Data falls back to OW if the dictionary does not know it.
        self.dict
            .implicit_vr(tag)
            .or_else(|| (tag == PIXEL_DATA).then_some(VR::OW))
    }
}

impl<D> DecodeHeader for ImplicitVRLittleEndianDecoder<D>
where
    D: DataDictionary,
{
    fn decode_header(&self, source: &mut dyn Read) -> Result<(DataElementHeader, usize)> {
        // retrieve tag
        let tag = read_tag(source).context(ReadHeaderTagSnafu)?;

        let mut buf = [0u8; 4];
        source.read_exact(&mut buf).context(ReadLengthSnafu)?;
        let len = LittleEndian::read_u32(&buf);

        let vr = self.resolve_vr(tag);
        Ok((DataElementHeader::new(tag, vr, Length(len)), 8))
    }
}
