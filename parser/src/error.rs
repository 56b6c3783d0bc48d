//! Structural errors of the element stream.
//!
//! Each of these makes the current data set fail to decode;
//! nothing is left half-written in the caller's state.

use dcmtree_core::header::Tag;
use snafu::{Backtrace, Snafu};

/// The main data type for errors in the element stream reader.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// The header of an element could not be decoded.
    #[snafu(display("Could not decode element header at position {}", position))]
    DecodeHeader {
        position: usize,
        #[snafu(backtrace)]
        source: dcmtree_encoding::decode::Error,
    },
    /// An element value reaches past the end of the buffer.
    #[snafu(display(
        "Value of {} at position {} ends at {}, past the end of the data ({} bytes)",
        tag,
        position,
        end,
        available
    ))]
    ValueOutOfBounds {
        tag: Tag,
        position: usize,
        end: usize,
        available: usize,
        backtrace: Backtrace,
    },
    /// A sequence declares more bytes than its container has left.
    #[snafu(display(
        "Sequence {} ends at {}, past the end of its container at {}",
        tag,
        end,
        limit
    ))]
    SequenceOverrun {
        tag: Tag,
        end: usize,
        limit: usize,
        backtrace: Backtrace,
    },
    /// An item declares more bytes than its sequence has left.
    #[snafu(display("Item at position {} ends at {}, past its sequence end at {}", position, end, limit))]
    ItemOverrun {
        position: usize,
        end: usize,
        limit: usize,
        backtrace: Backtrace,
    },
    /// Something other than an item was found where an item was expected.
    #[snafu(display("Expected an item at position {}, found {}", position, tag))]
    UnexpectedItemTag {
        tag: Tag,
        position: usize,
        backtrace: Backtrace,
    },
    /// The data ended before the delimiter of an undefined length container.
    #[snafu(display("Data ended before the delimiter of the container opened by {}", tag))]
    MissingDelimiter { tag: Tag, backtrace: Backtrace },
    /// An element of undefined length cannot be stepped over.
    #[snafu(display("Element {} at position {} has undefined length", tag, position))]
    UndefinedLength {
        tag: Tag,
        position: usize,
        backtrace: Backtrace,
    },
}

/// Type alias for a result from this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
