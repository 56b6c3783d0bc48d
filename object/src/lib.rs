//! This crate contains the file level API of the `dcmtree` decoder.
//!
//! A whole file is framed (128-byte preamble, `DICM` magic code,
//! file meta group), its transfer syntax is checked against the
//! supported set, and its data set is decoded into a property tree
//! plus a table of binary values.
//! Vendor headers embedded in binary values, such as the Siemens CSA header,
//! are decoded into the tree as well.
//!
//! Loading a file can be done with ease via the function [`open_file`].
//! For additional reading options, use [`OpenFileOptions`].
//!
//! # Examples
//!
//! ```no_run
//! use dcmtree_object::open_file;
//! # fn foo() -> Result<(), Box<dyn std::error::Error>> {
//! let file = open_file("0001.dcm")?;
//! let modality = file.tree().value("Modality").map(|v| v.to_str());
//! let rows: u16 = file.value("Rows").unwrap().to_int()?;
//! # Ok(())
//! # }
//! ```
//!
//! Dialects change how vendor specific content is handled:
//!
//! ```no_run
//! use dcmtree_object::{Dialect, OpenFileOptions};
//!
//! let file = OpenFileOptions::new()
//!     .dialect(Dialect::WithExtProtocols)
//!     .open_file("0002.dcm")?;
//! # Result::<(), dcmtree_object::ReadError>::Ok(())
//! ```
//!
//! **Note:** to reconstruct the image, see the `dcmtree-pixeldata` crate.
#![warn(missing_debug_implementations, unused_qualifications)]

pub mod codec;
pub mod file;
pub mod meta;
pub mod siemens;

pub use crate::codec::ImageCodec;
pub use crate::file::{from_bytes, open_file, Dialect, DicomFile, OpenFileOptions};
pub use crate::meta::FileMetaTable;
pub use dcmtree_core::{PropertyTree, Tag, Value, VR};
pub use dcmtree_encoding::TransferSyntax;
pub use dcmtree_parser::BlobTable;

use snafu::{Backtrace, Snafu};

/// An error which may occur when loading a file
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
#[non_exhaustive]
pub enum ReadError {
    #[snafu(display("Could not read from file '{}'", filename.display()))]
    ReadFile {
        filename: std::path::PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },
    /// The data is too short for the file framing.
    #[snafu(display("Data of {} bytes is too short, {} bytes are needed", len, needed))]
    Truncated {
        len: usize,
        needed: usize,
        backtrace: Backtrace,
    },
    /// The magic code `DICM` was not found after the preamble.
    #[snafu(display("Prefix \"DICM\" not found"))]
    NotDicom { backtrace: Backtrace },
    /// The meta group does not start with its group length.
    #[snafu(display("File meta group does not start with its group length, found {}", tag))]
    MissingGroupLength { tag: Tag, backtrace: Backtrace },
    #[snafu(display("Could not parse meta group data set"))]
    ReadMeta {
        #[snafu(backtrace)]
        source: dcmtree_parser::Error,
    },
    #[snafu(display("Unsupported transfer syntax `{}`", uid))]
    UnsupportedTransferSyntax { uid: String, backtrace: Backtrace },
    #[snafu(display("Could not inflate the deflated data set"))]
    Inflate {
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not parse data set"))]
    ReadDataSet {
        #[snafu(backtrace)]
        source: dcmtree_parser::Error,
    },
}

/// Alias of [`ReadError`].
pub type Error = ReadError;

pub type Result<T, E = ReadError> = std::result::Result<T, E>;
