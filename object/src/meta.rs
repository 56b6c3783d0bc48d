//! Module containing data structures and readers of DICOM file meta information tables.
//!
//! The meta group always uses explicit VR little endian.
//! It starts right after the magic code with its group length,
//! which gives the size of the remaining meta elements,
//! and those are decoded generically, one element after another.

use crate::{MissingGroupLengthSnafu, NotDicomSnafu, ReadMetaSnafu, Result, TruncatedSnafu};
use byteordered::byteorder::{ByteOrder, LittleEndian};
use dcmtree_core::tree::PropertyTree;
use dcmtree_dictionary_std::{tags, StandardDataDictionary};
use dcmtree_encoding::decode::explicit_le::ExplicitVRLittleEndianDecoder;
use dcmtree_parser::{read_dataset, BlobTable, Cursor};
use snafu::{ensure, OptionExt, ResultExt};

/// Size of the file preamble.
pub const PREAMBLE_LEN: usize = 128;
const DICM_MAGIC_CODE: [u8; 4] = [b'D', b'I', b'C', b'M'];
/// Position of the group length element.
const META_START: usize = PREAMBLE_LEN + 4;
/// Size of the group length element (explicit VR UL).
const GROUP_LENGTH_LEN: usize = 12;

/// The transfer syntax assumed when the meta group declares none.
pub const DEFAULT_TRANSFER_SYNTAX: &str = "1.2.840.10008.1.2";

/// DICOM File Meta Information Table.
///
/// This data type contains the relevant parts of the file meta group,
/// plus the whole group as a property tree.
#[derive(Debug, Clone, PartialEq)]
pub struct FileMetaTable {
    /// File Meta Information Group Length
    pub information_group_length: u32,
    /// File Meta Information Version
    pub information_version: Option<Vec<u8>>,
    /// Media Storage SOP Class UID
    pub media_storage_sop_class_uid: Option<String>,
    /// Media Storage SOP Instance UID
    pub media_storage_sop_instance_uid: Option<String>,
    /// Transfer Syntax UID
    pub transfer_syntax: String,
    /// Implementation Class UID
    pub implementation_class_uid: Option<String>,
    /// Implementation Version Name
    pub implementation_version_name: Option<String>,
    /// Source Application Entity Title
    pub source_application_entity_title: Option<String>,
    /// all decoded meta elements
    pub tree: PropertyTree,
}

impl FileMetaTable {
    /// Read the file meta group out of a whole file,
    /// preamble included.
    ///
    /// Returns the table and the position where the data set starts.
    pub fn from_file_bytes(data: &[u8]) -> Result<(FileMetaTable, usize)> {
        let needed = META_START + GROUP_LENGTH_LEN;
        ensure!(
            data.len() >= needed,
            TruncatedSnafu {
                len: data.len(),
                needed
            }
        );
        ensure!(
            data[PREAMBLE_LEN..META_START] == DICM_MAGIC_CODE,
            NotDicomSnafu
        );

        let decoder = ExplicitVRLittleEndianDecoder;
        let cursor = Cursor::new(data, &decoder);
        let group_length = cursor
            .at(META_START)
            .context(ReadMetaSnafu)?
            .filter(|e| e.header_len == 8 && e.length().get() == Some(4))
            .filter(|e| e.tag() == tags::FILE_META_INFORMATION_GROUP_LENGTH)
            .context(MissingGroupLengthSnafu {
                tag: dcmtree_core::Tag(
                    LittleEndian::read_u16(&data[META_START..]),
                    LittleEndian::read_u16(&data[META_START + 2..]),
                ),
            })?;
        let information_group_length =
            LittleEndian::read_u32(cursor.value(&group_length).context(ReadMetaSnafu)?);

        let meta_start = META_START + GROUP_LENGTH_LEN;
        let dataset_start = meta_start + information_group_length as usize;
        ensure!(
            data.len() >= dataset_start,
            TruncatedSnafu {
                len: data.len(),
                needed: dataset_start
            }
        );
        tracing::debug!(
            "Reading meta info beginning at {} length: {}",
            meta_start,
            information_group_length
        );
        let meta = read_dataset(
            &data[meta_start..dataset_start],
            &decoder,
            &StandardDataDictionary,
        )
        .context(ReadMetaSnafu)?;

        let table = FileMetaTable::from_parts(information_group_length, meta.tree, meta.blobs);
        Ok((table, dataset_start))
    }

    fn from_parts(information_group_length: u32, tree: PropertyTree, blobs: BlobTable) -> Self {
        let text = |name: &str| tree.value(name).map(|v| v.to_str().into_owned());
        let transfer_syntax = text("TransferSyntaxUID").unwrap_or_else(|| {
            tracing::warn!(
                "No transfer syntax in the meta group, assuming {}",
                DEFAULT_TRANSFER_SYNTAX
            );
            DEFAULT_TRANSFER_SYNTAX.to_owned()
        });
        FileMetaTable {
            information_group_length,
            information_version: blobs
                .first(tags::FILE_META_INFORMATION_VERSION)
                .map(<[u8]>::to_vec),
            media_storage_sop_class_uid: text("MediaStorageSOPClassUID"),
            media_storage_sop_instance_uid: text("MediaStorageSOPInstanceUID"),
            implementation_class_uid: text("ImplementationClassUID"),
            implementation_version_name: text("ImplementationVersionName"),
            source_application_entity_title: text("SourceApplicationEntityTitle"),
            transfer_syntax,
            tree,
        }
    }

    /// The transfer syntax UID, without padding.
    pub fn transfer_syntax(&self) -> &str {
        self.transfer_syntax.trim_end_matches([' ', '\0'])
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::ReadError;

    /// Build a file prefix with the given meta elements,
    /// each given as raw explicit VR little endian bytes.
    pub(crate) fn file_prefix(meta_elements: &[&[u8]]) -> Vec<u8> {
        let body: Vec<u8> = meta_elements.concat();
        let mut out = vec![0u8; PREAMBLE_LEN];
        out.extend_from_slice(b"DICM");
        #[rustfmt::skip]
        out.extend_from_slice(&[
            // (0002,0000) UL, len 4
            0x02, 0x00, 0x00, 0x00, b'U', b'L', 0x04, 0x00,
        ]);
        out.extend_from_slice(&(body.len() as u32).to_le_bytes());
        out.extend_from_slice(&body);
        out
    }

    /// A string meta element of even length.
    pub(crate) fn meta_str(element: u16, vr: &[u8; 2], value: &str) -> Vec<u8> {
        let mut value = value.as_bytes().to_vec();
        if value.len() % 2 == 1 {
            value.push(if vr == b"UI" { 0 } else { b' ' });
        }
        let mut out = vec![0x02, 0x00];
        out.extend_from_slice(&element.to_le_bytes());
        out.extend_from_slice(vr);
        out.extend_from_slice(&(value.len() as u16).to_le_bytes());
        out.extend_from_slice(&value);
        out
    }

    #[rustfmt::skip]
    const VERSION: &[u8] = &[
        // (0002,0001) OB, reserved, len 2
        0x02, 0x00, 0x01, 0x00, b'O', b'B', 0x00, 0x00, 0x02, 0x00, 0x00, 0x00,
        0x00, 0x01,
    ];

    #[test]
    fn reads_meta_group() {
        let data = file_prefix(&[
            VERSION,
            &meta_str(0x0002, b"UI", "1.2.840.10008.5.1.4.1.1.4"),
            &meta_str(0x0003, b"UI", "1.2.3.4.5"),
            &meta_str(0x0010, b"UI", "1.2.840.10008.1.2.1"),
            &meta_str(0x0012, b"UI", "1.2.3"),
            &meta_str(0x0013, b"SH", "DCMTREE"),
        ]);
        let (table, start) = FileMetaTable::from_file_bytes(&data).unwrap();
        assert_eq!(start, data.len());
        assert_eq!(table.information_group_length as usize, data.len() - 144);
        assert_eq!(table.information_version.as_deref(), Some(&[0x00, 0x01][..]));
        assert_eq!(table.transfer_syntax(), "1.2.840.10008.1.2.1");
        assert_eq!(
            table.media_storage_sop_class_uid.as_deref(),
            Some("1.2.840.10008.5.1.4.1.1.4")
        );
        assert_eq!(table.implementation_version_name.as_deref(), Some("DCMTREE"));
        assert!(table.tree.contains("ImplementationClassUID"));
    }

    #[test]
    fn version_element_is_optional() {
        let data = file_prefix(&[&meta_str(0x0010, b"UI", "1.2.840.10008.1.2")]);
        let (table, _) = FileMetaTable::from_file_bytes(&data).unwrap();
        assert_eq!(table.information_version, None);
        assert_eq!(table.transfer_syntax(), "1.2.840.10008.1.2");
    }

    #[test]
    fn missing_transfer_syntax_means_implicit() {
        let data = file_prefix(&[VERSION]);
        let (table, _) = FileMetaTable::from_file_bytes(&data).unwrap();
        assert_eq!(table.transfer_syntax(), DEFAULT_TRANSFER_SYNTAX);
    }

    #[test]
    fn framing_errors() {
        let mut data = file_prefix(&[VERSION]);
        data[128] = b'X';
        assert!(matches!(
            FileMetaTable::from_file_bytes(&data),
            Err(ReadError::NotDicom { .. })
        ));

        assert!(matches!(
            FileMetaTable::from_file_bytes(&[0; 100]),
            Err(ReadError::Truncated { len: 100, needed: 144, .. })
        ));

        let mut data = file_prefix(&[VERSION]);
        // turn (0002,0000) into (0002,0001)
        data[134] = 0x01;
        assert!(matches!(
            FileMetaTable::from_file_bytes(&data),
            Err(ReadError::MissingGroupLength { .. })
        ));

        let mut data = file_prefix(&[VERSION]);
        data.truncate(150);
        assert!(matches!(
            FileMetaTable::from_file_bytes(&data),
            Err(ReadError::Truncated { needed: 158, .. })
        ));
    }
}
