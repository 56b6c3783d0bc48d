//! This module contains all data element decoding logic:
//! element headers under either VR encoding,
//! and element values through the VR dispatch table in [`value`].

use byteordered::byteorder::{ByteOrder, LittleEndian};
use dcmtree_core::header::{DataElementHeader, Tag, VR};
use snafu::{Backtrace, Snafu};
use std::fmt::Debug;
use std::io::{self, Read};

pub mod explicit_le;
pub mod implicit_le;
pub mod primitive_value;
pub mod text_value;
pub mod value;

pub use self::value::{decode_value, ValueCodec};

/// Module-level error type:
/// for errors which may occur while decoding element headers or values.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Failed to read the beginning (tag) of the header: {}", source))]
    ReadHeaderTag {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the header's reserved bytes: {}", source))]
    ReadReserved {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the header's element length field: {}", source))]
    ReadLength {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the header's value representation: {}", source))]
    ReadVr {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read {} value: {}", vr, source))]
    ReadValue {
        vr: VR,
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display(
        "Value of {} bytes does not fit the {} byte elements of {}",
        len,
        size,
        vr
    ))]
    BadValueLength {
        vr: VR,
        len: usize,
        size: usize,
        backtrace: Backtrace,
    },
    #[snafu(display("{} cannot hold a list of {} values", vr, multiplicity))]
    NoListDecoder {
        vr: VR,
        multiplicity: usize,
        backtrace: Backtrace,
    },
    #[snafu(display("Value {} does not fit in the target type of {}", value, vr))]
    ValueOverflow {
        vr: VR,
        value: String,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/** Type trait for reading element headers from a data source.
 *
 * Implementations differ in how the value representation is obtained:
 * read from the stream, or looked up in a dictionary.
 * The trait is object safe, so that the transfer syntax
 * can pick the decoder at run-time.
 */
pub trait DecodeHeader: Debug {
    /// Fetch and decode the next data element header from the given source.
    /// This method returns only the header of the element. At the end of this operation, the source
    /// will be pointing at the element's value data, which should be read or skipped as necessary.
    ///
    /// Returns the expected header and the exact number of bytes read from the source.
    fn decode_header(&self, source: &mut dyn Read) -> Result<(DataElementHeader, usize)>;
}

impl<T> DecodeHeader for &T
where
    T: DecodeHeader + ?Sized,
{
    fn decode_header(&self, source: &mut dyn Read) -> Result<(DataElementHeader, usize)> {
        (**self).decode_header(source)
    }
}

impl<T> DecodeHeader for Box<T>
where
    T: DecodeHeader + ?Sized,
{
    fn decode_header(&self, source: &mut dyn Read) -> Result<(DataElementHeader, usize)> {
        (**self).decode_header(source)
    }
}

/// Read a little endian tag from the source.
pub(crate) fn read_tag(source: &mut dyn Read) -> io::Result<Tag> {
    let mut buf = [0u8; 4];
    source.read_exact(&mut buf)?;
    Ok(Tag(
        LittleEndian::read_u16(&buf[0..2]),
        LittleEndian::read_u16(&buf[2..4]),
    ))
}
