use crate::codec::ImageCodec;
use crate::meta::FileMetaTable;
use crate::siemens;
use crate::{ReadDataSetSnafu, ReadFileSnafu, Result, UnsupportedTransferSyntaxSnafu};
use dcmtree_core::tree::PropertyTree;
use dcmtree_core::value::Value;
use dcmtree_dictionary_std::StandardDataDictionary;
use dcmtree_encoding::TransferSyntax;
use dcmtree_parser::csa::CsaOptions;
use dcmtree_parser::{read_dataset, BlobTable, DataSet};
use snafu::{ensure, OptionExt, ResultExt, Snafu};
use std::borrow::Cow;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

/// Create a decoded file by reading a whole file from disk,
/// with default options.
pub fn open_file<P>(path: P) -> Result<DicomFile>
where
    P: AsRef<Path>,
{
    OpenFileOptions::new().open_file(path)
}

/// Create a decoded file from the bytes of a whole file,
/// 128-byte preamble included, with default options.
pub fn from_bytes(data: &[u8]) -> Result<DicomFile> {
    OpenFileOptions::new().from_bytes(data)
}

/// A behavioral flag of the decoder.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dialect {
    /// Also decode the large vendor protocol texts of the CSA header.
    WithExtProtocols,
    /// Do not decode the Siemens CSA header at all.
    NoCsa,
    /// Keep mosaic images as they are.
    KeepMosaic,
    /// Decompose the image as a mosaic even without a mosaic marker.
    ForceMosaic,
}

impl Dialect {
    /// All dialects, in the order of their declaration.
    pub const ALL: [Dialect; 4] = [
        Dialect::WithExtProtocols,
        Dialect::NoCsa,
        Dialect::KeepMosaic,
        Dialect::ForceMosaic,
    ];

    /// The name of the dialect, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Dialect::WithExtProtocols => "withExtProtocols",
            Dialect::NoCsa => "nocsa",
            Dialect::KeepMosaic => "keepmosaic",
            Dialect::ForceMosaic => "forcemosaic",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The name given is not one of a known dialect.
#[derive(Debug, Snafu)]
#[snafu(display("Unknown dialect `{}`, expected one of withExtProtocols, nocsa, keepmosaic, forcemosaic", name))]
pub struct ParseDialectError {
    name: String,
}

/// Dialect names are case insensitive.
impl FromStr for Dialect {
    type Err = ParseDialectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .context(ParseDialectSnafu { name: s })
    }
}

/// A builder type for opening a file with additional options.
///
/// This builder exposes additional properties
/// to configure the decoding of a file.
///
/// # Example
///
/// Create a `OpenFileOptions`,
/// call adaptor methods in a chain,
/// and finish the operation with [`.open_file()`](OpenFileOptions::open_file).
///
/// ```no_run
/// # use dcmtree_object::OpenFileOptions;
/// let file = OpenFileOptions::new()
///     .no_csa()
///     .keep_mosaic()
///     .open_file("path/to/file.dcm")?;
/// # Result::<(), Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Default, Clone)]
#[non_exhaustive]
pub struct OpenFileOptions {
    with_ext_protocols: bool,
    no_csa: bool,
    keep_mosaic: bool,
    force_mosaic: bool,
    codec: Option<Arc<dyn ImageCodec>>,
}

impl OpenFileOptions {
    pub fn new() -> Self {
        OpenFileOptions::default()
    }

    /// Enable the given dialect.
    pub fn dialect(mut self, dialect: Dialect) -> Self {
        *self.flag_mut(dialect) = true;
        self
    }

    /// Enable all of the given dialects.
    pub fn dialects<I>(self, dialects: I) -> Self
    where
        I: IntoIterator<Item = Dialect>,
    {
        dialects.into_iter().fold(self, OpenFileOptions::dialect)
    }

    /// Also decode vendor protocol texts (`MrPhoenixProtocol` and the like)
    /// in the CSA header.
    pub fn with_ext_protocols(self) -> Self {
        self.dialect(Dialect::WithExtProtocols)
    }

    /// Skip the decoding of the Siemens CSA header.
    pub fn no_csa(self) -> Self {
        self.dialect(Dialect::NoCsa)
    }

    /// Keep mosaic images undecomposed.
    pub fn keep_mosaic(self) -> Self {
        self.dialect(Dialect::KeepMosaic)
    }

    /// Decompose images as mosaics even when they are not marked as such.
    pub fn force_mosaic(self) -> Self {
        self.dialect(Dialect::ForceMosaic)
    }

    /// Set the external codec used for compressed pixel data.
    pub fn codec<C>(mut self, codec: C) -> Self
    where
        C: ImageCodec + 'static,
    {
        self.codec = Some(Arc::new(codec));
        self
    }

    /// Whether the given dialect is enabled.
    pub fn has_dialect(&self, dialect: Dialect) -> bool {
        match dialect {
            Dialect::WithExtProtocols => self.with_ext_protocols,
            Dialect::NoCsa => self.no_csa,
            Dialect::KeepMosaic => self.keep_mosaic,
            Dialect::ForceMosaic => self.force_mosaic,
        }
    }

    /// The external codec, if one was given.
    pub fn image_codec(&self) -> Option<&dyn ImageCodec> {
        self.codec.as_deref()
    }

    fn flag_mut(&mut self, dialect: Dialect) -> &mut bool {
        match dialect {
            Dialect::WithExtProtocols => &mut self.with_ext_protocols,
            Dialect::NoCsa => &mut self.no_csa,
            Dialect::KeepMosaic => &mut self.keep_mosaic,
            Dialect::ForceMosaic => &mut self.force_mosaic,
        }
    }

    /// Open the file at the given path.
    pub fn open_file<P>(self, path: P) -> Result<DicomFile>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let data = std::fs::read(path).context(ReadFileSnafu { filename: path })?;
        self.from_bytes(&data)
    }

    /// Decode the bytes of a whole file, 128-byte preamble included.
    ///
    /// The data set is only decoded once its transfer syntax
    /// has been found to be supported.
    pub fn from_bytes(self, data: &[u8]) -> Result<DicomFile> {
        let (meta, dataset_start) = FileMetaTable::from_file_bytes(data)?;
        let uid = meta.transfer_syntax();
        let ts = TransferSyntax::from_uid(uid).context(UnsupportedTransferSyntaxSnafu { uid })?;
        if ts.needs_codec() {
            ensure!(
                self.image_codec().is_some_and(|c| c.supports(ts)),
                UnsupportedTransferSyntaxSnafu { uid }
            );
        }
        tracing::debug!("Reading data set beginning at {} as {}", dataset_start, ts);

        let body = inflate_if_needed(ts, &data[dataset_start..])?;
        let decoder = ts.header_decoder(&StandardDataDictionary);
        let DataSet {
            mut tree,
            mut blobs,
        } = read_dataset(&body, &*decoder, &StandardDataDictionary).context(ReadDataSetSnafu)?;

        if self.no_csa {
            tracing::debug!("Not decoding the CSA header, as requested");
        } else {
            let options = CsaOptions {
                with_ext_protocols: self.with_ext_protocols,
            };
            siemens::extract_csa(&mut tree, &mut blobs, options);
        }

        Ok(DicomFile {
            meta,
            transfer_syntax: ts,
            tree,
            blobs,
            options: self,
        })
    }
}

#[cfg(feature = "deflate")]
fn inflate_if_needed(ts: TransferSyntax, body: &[u8]) -> Result<Cow<'_, [u8]>> {
    use crate::InflateSnafu;
    use std::io::Read;

    if !ts.is_deflated() {
        return Ok(Cow::Borrowed(body));
    }
    let mut inflated = Vec::with_capacity(body.len() * 4);
    flate2::read::DeflateDecoder::new(body)
        .read_to_end(&mut inflated)
        .context(InflateSnafu)?;
    Ok(Cow::Owned(inflated))
}

#[cfg(not(feature = "deflate"))]
fn inflate_if_needed(ts: TransferSyntax, body: &[u8]) -> Result<Cow<'_, [u8]>> {
    ensure!(
        !ts.is_deflated(),
        UnsupportedTransferSyntaxSnafu { uid: ts.uid() }
    );
    Ok(Cow::Borrowed(body))
}

/// A decoded file:
/// its meta group, its data set as a property tree,
/// and the binary values which were set aside.
#[derive(Debug, Clone)]
pub struct DicomFile {
    meta: FileMetaTable,
    transfer_syntax: TransferSyntax,
    tree: PropertyTree,
    blobs: BlobTable,
    options: OpenFileOptions,
}

impl DicomFile {
    /// Retrieve the processed meta information table.
    pub fn meta(&self) -> &FileMetaTable {
        &self.meta
    }

    /// The transfer syntax of the data set.
    pub fn transfer_syntax(&self) -> TransferSyntax {
        self.transfer_syntax
    }

    /// The decoded data set.
    pub fn tree(&self) -> &PropertyTree {
        &self.tree
    }

    /// The decoded data set, for modification.
    pub fn tree_mut(&mut self) -> &mut PropertyTree {
        &mut self.tree
    }

    /// The first value of the property at `path` in the data set.
    pub fn value(&self, path: &str) -> Option<&Value> {
        self.tree.value(path)
    }

    /// The binary values of the data set.
    pub fn blobs(&self) -> &BlobTable {
        &self.blobs
    }

    /// The binary values of the data set, for modification.
    pub fn blobs_mut(&mut self) -> &mut BlobTable {
        &mut self.blobs
    }

    /// The options the file was opened with.
    pub fn options(&self) -> &OpenFileOptions {
        &self.options
    }

    /// Split the file into its tree and binary values.
    pub fn into_parts(self) -> (PropertyTree, BlobTable) {
        (self.tree, self.blobs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("withExtProtocols", Dialect::WithExtProtocols)]
    #[case("WITHEXTPROTOCOLS", Dialect::WithExtProtocols)]
    #[case("nocsa", Dialect::NoCsa)]
    #[case("keepMosaic", Dialect::KeepMosaic)]
    #[case(" forcemosaic", Dialect::ForceMosaic)]
    fn dialect_names(#[case] name: &str, #[case] expected: Dialect) {
        assert_eq!(name.parse::<Dialect>().unwrap(), expected);
    }

    #[test]
    fn unknown_dialect() {
        let e = "siemens".parse::<Dialect>().unwrap_err();
        assert!(e.to_string().contains("`siemens`"));
    }

    #[test]
    fn options_collect_dialects() {
        let options =
            OpenFileOptions::new().dialects([Dialect::NoCsa, Dialect::ForceMosaic]);
        assert!(options.has_dialect(Dialect::NoCsa));
        assert!(options.has_dialect(Dialect::ForceMosaic));
        assert!(!options.has_dialect(Dialect::KeepMosaic));
        assert!(options.image_codec().is_none());
    }
}
