//! DICOM decoding primitives of the `dcmtree` workspace.
//!
//! This crate provides the pieces needed to read the elements of a tag stream:
//! element header decoders for either VR encoding,
//! the VR dispatch table which turns raw value bytes into [`Value`]s,
//! text decoding helpers,
//! and the [transfer syntax] allow-list which picks the header decoder
//! at run-time.
//!
//! All APIs are based on synchronous I/O over in-memory buffers.
//!
//! [`Value`]: dcmtree_core::Value
//! [transfer syntax]: ./transfer_syntax/index.html

pub mod decode;
pub mod text;
pub mod transfer_syntax;

pub use decode::{decode_value, DecodeHeader, ValueCodec};
pub use transfer_syntax::TransferSyntax;
