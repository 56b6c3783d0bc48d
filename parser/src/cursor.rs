//! A bounds-checked cursor over the elements of an in-memory tag stream.
//!
//! The cursor only knows how to find element headers and their values.
//! What the values mean is decided by the [dataset reader](crate::dataset).

use crate::error::{
    DecodeHeaderSnafu, Result, UndefinedLengthSnafu, ValueOutOfBoundsSnafu,
};
use dcmtree_core::header::{DataElementHeader, Length, Tag, VR};
use dcmtree_encoding::decode::DecodeHeader;
use snafu::{ensure, OptionExt, ResultExt};

/// The smallest possible element header.
pub const MIN_HEADER_LEN: usize = 8;

/// An element found by the cursor:
/// its decoded header and where it sits in the buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    /// the decoded header
    pub header: DataElementHeader,
    /// position of the first header byte
    pub position: usize,
    /// size of the header in bytes (8 or 12)
    pub header_len: usize,
}

impl Element {
    /// The element's tag.
    #[inline]
    pub fn tag(&self) -> Tag {
        self.header.tag
    }

    /// The element's tag as a 32-bit identifier.
    #[inline]
    pub fn id32(&self) -> u32 {
        self.header.tag.id32()
    }

    /// The element's value representation, if known.
    #[inline]
    pub fn vr(&self) -> Option<VR> {
        self.header.vr
    }

    /// The declared value length, which may be undefined.
    #[inline]
    pub fn length(&self) -> Length {
        self.header.len
    }

    /// Position of the first value byte.
    #[inline]
    pub fn value_start(&self) -> usize {
        self.position + self.header_len
    }

    /// Position right after the value,
    /// or `None` if the length is undefined.
    pub fn value_end(&self) -> Option<usize> {
        self.header
            .len
            .get()
            .map(|len| self.value_start().saturating_add(len as usize))
    }
}

/// A cursor over the elements of a byte buffer.
///
/// Header decoding is delegated to a [`DecodeHeader`],
/// which also decides how value representations are found.
#[derive(Debug)]
pub struct Cursor<'a, 'd> {
    data: &'a [u8],
    position: usize,
    decoder: &'d dyn DecodeHeader,
}

impl<'a, 'd> Cursor<'a, 'd> {
    /// Create a cursor at the start of `data`.
    pub fn new(data: &'a [u8], decoder: &'d dyn DecodeHeader) -> Self {
        Cursor {
            data,
            position: 0,
            decoder,
        }
    }

    /// The whole buffer.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// The current position.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Move to the given position.
    /// Positions past the end are clamped to the end of the buffer.
    pub fn seek(&mut self, position: usize) {
        self.position = position.min(self.data.len());
    }

    /// Whether fewer bytes than the smallest header remain.
    #[inline]
    pub fn eof(&self) -> bool {
        self.data.len().saturating_sub(self.position) < MIN_HEADER_LEN
    }

    /// Decode the element starting at `position`,
    /// or return `None` if too few bytes remain for a header.
    pub fn at(&self, position: usize) -> Result<Option<Element>> {
        let Some(mut source) = self.data.get(position..) else {
            return Ok(None);
        };
        if source.len() < MIN_HEADER_LEN {
            return Ok(None);
        }
        let (header, header_len) = self
            .decoder
            .decode_header(&mut source)
            .context(DecodeHeaderSnafu { position })?;
        Ok(Some(Element {
            header,
            position,
            header_len,
        }))
    }

    /// Decode the element at the current position.
    pub fn current(&self) -> Result<Option<Element>> {
        self.at(self.position)
    }

    /// The tag at the current position, without decoding the rest of the header.
    pub fn peek_tag(&self) -> Option<Tag> {
        let bytes = self.data.get(self.position..self.position + 4)?;
        Some(Tag(
            u16::from_le_bytes([bytes[0], bytes[1]]),
            u16::from_le_bytes([bytes[2], bytes[3]]),
        ))
    }

    /// The value bytes of the element.
    /// Fails if the length is undefined or the value exceeds the buffer.
    pub fn value(&self, element: &Element) -> Result<&'a [u8]> {
        let end = self.checked_end(element)?;
        Ok(&self.data[element.value_start()..end])
    }

    /// Move past the element, to `position + header size + length`.
    /// Fails if the length is undefined or the value exceeds the buffer,
    /// in which case the cursor does not move.
    pub fn advance(&mut self, element: &Element) -> Result<()> {
        self.position = self.checked_end(element)?;
        Ok(())
    }

    /// Move past the header of the element only,
    /// so that the cursor points at the first byte of its value.
    pub fn enter(&mut self, element: &Element) {
        self.seek(element.value_start());
    }

    fn checked_end(&self, element: &Element) -> Result<usize> {
        let end = element.value_end().context(UndefinedLengthSnafu {
            tag: element.tag(),
            position: element.position,
        })?;
        ensure!(
            end <= self.data.len(),
            ValueOutOfBoundsSnafu {
                tag: element.tag(),
                position: element.position,
                end,
                available: self.data.len(),
            }
        );
        Ok(end)
    }
}
