//! Explicit VR Little Endian syntax transfer implementation

use crate::decode::{
    read_tag, DecodeHeader, ReadHeaderTagSnafu, ReadLengthSnafu, ReadReservedSnafu, ReadVrSnafu,
    Result,
};
use byteordered::byteorder::{ByteOrder, LittleEndian};
use dcmtree_core::header::{DataElementHeader, Length, VR};
use snafu::ResultExt;
use std::io::Read;

/// A data element header decoder for the Explicit VR Little Endian transfer syntax.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExplicitVRLittleEndianDecoder;

impl DecodeHeader for ExplicitVRLittleEndianDecoder {
    fn decode_header(&self, source: &mut dyn Read) -> Result<(DataElementHeader, usize)> {
        // retrieve tag
        let tag = read_tag(source).context(ReadHeaderTagSnafu)?;

        let mut buf = [0u8; 4];
        if tag.is_item_related() {
            // item delimiters do not have VR or reserved field
            source.read_exact(&mut buf).context(ReadLengthSnafu)?;
            let len = LittleEndian::read_u32(&buf);
            return Ok((
                DataElementHeader::new(tag, None, Length(len)),
                8, // tag + len
            ));
        }

        // retrieve explicit VR
        source.read_exact(&mut buf[0..2]).context(ReadVrSnafu)?;
        let vr = VR::from_binary([buf[0], buf[1]]);
        if vr.is_none() {
            tracing::debug!(
                "Unknown VR bytes {:02x}{:02x} for tag {}",
                buf[0],
                buf[1],
                tag
            );
        }

        // retrieve data length
        let (len, bytes_read) = match vr {
            // PS3.5 7.1.2:
            // for all VRs with an extended length, the 16 bits following
            // the two byte VR Field are reserved. The Value Length Field
            // is a 32-bit unsigned integer.
            Some(vr) if vr.has_extended_length() => {
                // read 2 reserved bytes, then 4 bytes for data length
                source
                    .read_exact(&mut buf[0..2])
                    .context(ReadReservedSnafu)?;
                source.read_exact(&mut buf).context(ReadLengthSnafu)?;
                (LittleEndian::read_u32(&buf), 12)
            }
            // otherwise the Value Length Field is the
            // 16-bit unsigned integer following the two byte VR Field
            _ => {
                source.read_exact(&mut buf[0..2]).context(ReadLengthSnafu)?;
                (u32::from(LittleEndian::read_u16(&buf[0..2])), 8)
            }
        };

        Ok((DataElementHeader::new(tag, vr, Length(len)), bytes_read))
    }
}

#[cfg(test)]
mod tests {
    use super::ExplicitVRLittleEndianDecoder;
    use crate::decode::DecodeHeader;
    use dcmtree_core::header::{Length, Tag, VR};

    // manually crafting some DICOM data elements
    #[rustfmt::skip]
    const RAW: &[u8] = &[
        0x02, 0x00, 0x10, 0x00,     // (0002,0010) (LE) Transfer Syntax UID
            b'U', b'I',             // VR: UI (UID)
            0x14, 0x00,             // Length: 20 bytes (LE)
                // UID: 1.2.840.10008.1.2.1 (ExplicitVRLittleEndian)
                b'1', b'.', b'2', b'.', b'8', b'4', b'0', b'.', b'1', b'0', b'0', b'0', b'8', b'.',
                b'1', b'.', b'2', b'.', b'1',
                0x00,               // Padding to make length even
        0x29, 0x00, 0x10, 0x10,     // (0029,1010) (LE) Siemens CSA image header
            b'O', b'B',             // VR: OB (Other Byte)
            0x00, 0x00,             // Reserved
            0x04, 0x00, 0x00, 0x00, // Length: 4 bytes (LE)
                b'S', b'V', b'1', b'0',
        0x08, 0x00, 0x08, 0x00,     // (0008,0008) (LE) Image Type
            b'C', b'S',             // VR: CS (Code String)
            0x06, 0x00,             // Length: 6 bytes (LE)
                b'M', b'O', b'S', b'A', b'I', b'C',
        0x08, 0x00, 0x40, 0x11,     // (0008,1140) (LE) Referenced Image Sequence
            b'S', b'Q',             // VR: SQ (Sequence)
            0x00, 0x00,             // Reserved
            0xFF, 0xFF, 0xFF, 0xFF, // Length: undefined
        0xFE, 0xFF, 0x00, 0xE0,     // Item
            0x00, 0x00, 0x00, 0x00, // Length: 0
        0xFE, 0xFF, 0xDD, 0xE0,     // Sequence delimiter
            0x00, 0x00, 0x00, 0x00,
        0x09, 0x00, 0x10, 0x00,     // (0009,0010) with unknown VR
            b'Z', b'Z',
            0x02, 0x00,             // Length: 2 bytes
                0xAB, 0xCD,
    ];

    #[test]
    fn decode_data_elements() {
        let dec = ExplicitVRLittleEndianDecoder;
        let mut source = RAW;

        let (elem, bytes_read) = dec.decode_header(&mut source).expect("should find an element");
        assert_eq!(elem.tag, Tag(0x0002, 0x0010));
        assert_eq!(elem.vr, Some(VR::UI));
        assert_eq!(elem.len, Length(20));
        assert_eq!(bytes_read, 8);
        assert_eq!(&source[..20], b"1.2.840.10008.1.2.1\0");
        source = &source[20..];

        let (elem, bytes_read) = dec.decode_header(&mut source).expect("should find an element");
        assert_eq!(elem.tag, Tag(0x0029, 0x1010));
        assert_eq!(elem.vr, Some(VR::OB));
        assert_eq!(elem.len, Length(4));
        assert_eq!(bytes_read, 12);
        source = &source[4..];

        let (elem, bytes_read) = dec.decode_header(&mut source).expect("should find an element");
        assert_eq!(elem.tag, Tag(0x0008, 0x0008));
        assert_eq!(elem.vr, Some(VR::CS));
        assert_eq!(bytes_read, 8);
        source = &source[6..];

        let (elem, bytes_read) = dec.decode_header(&mut source).expect("should find an element");
        assert_eq!(elem.tag, Tag(0x0008, 0x1140));
        assert_eq!(elem.vr, Some(VR::SQ));
        assert!(elem.len.is_undefined());
        assert_eq!(bytes_read, 12);

        // item and delimiter headers carry no VR
        let (elem, bytes_read) = dec.decode_header(&mut source).expect("should find an item");
        assert_eq!(elem.tag, Tag::ITEM);
        assert_eq!(elem.vr, None);
        assert_eq!(elem.len, Length(0));
        assert_eq!(bytes_read, 8);
        let (elem, _) = dec.decode_header(&mut source).expect("should find a delimiter");
        assert_eq!(elem.tag, Tag::SEQUENCE_DELIMITER);

        let (elem, bytes_read) = dec.decode_header(&mut source).expect("should find an element");
        assert_eq!(elem.tag, Tag(0x0009, 0x0010));
        assert_eq!(elem.vr, None);
        assert_eq!(elem.len, Length(2));
        assert_eq!(bytes_read, 8);
    }

    #[test]
    fn truncated_header_fails() {
        let dec = ExplicitVRLittleEndianDecoder;
        let mut source: &[u8] = &[0x29, 0x00, 0x10, 0x10, b'O', b'B', 0x00, 0x00, 0x04];
        assert!(dec.decode_header(&mut source).is_err());
    }
}
