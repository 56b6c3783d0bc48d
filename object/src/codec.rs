//! The seam for external image codecs.
//!
//! Transfer syntaxes with compressed pixel data
//! (JPEG 2000 lossless, at the moment) are only accepted
//! when a codec for them is given in the [`OpenFileOptions`].
//!
//! [`OpenFileOptions`]: crate::OpenFileOptions

use dcmtree_core::tree::PropertyTree;
use dcmtree_encoding::TransferSyntax;
use std::fmt::Debug;

/// Boxed error of an external codec.
pub type CodecError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// An external decoder of compressed pixel data.
pub trait ImageCodec: Debug + Send + Sync {
    /// A name for logging.
    fn name(&self) -> &str;

    /// Whether this codec decodes pixel data of the given transfer syntax.
    fn supports(&self, ts: TransferSyntax) -> bool;

    /// Decode the fragments of the pixel data element,
    /// in the order they were found,
    /// into native little endian samples as described by
    /// the image attributes in `tree` (rows, columns, bits allocated...).
    fn decode(&self, fragments: &[Vec<u8>], tree: &PropertyTree) -> Result<Vec<u8>, CodecError>;
}
