//! Extraction of the Siemens CSA header into the property tree.
//!
//! Siemens writes its CSA headers into the private elements
//! `(0029,1000)` to `(0029,10ff)`, under the private creator
//! `SIEMENS CSA HEADER`. Every such binary value found in the data set
//! is parsed and merged into the branch [`CSA_BRANCH`].

use dcmtree_core::tree::PropertyTree;
use dcmtree_core::Tag;
use dcmtree_parser::csa::{parse_csa, CsaOptions};
use dcmtree_parser::BlobTable;

/// The private creator of the CSA header elements,
/// and the name of the branch the header is decoded into.
pub const CSA_BRANCH: &str = "SIEMENS CSA HEADER";

/// Name of the private creator element reserving the CSA block.
pub const CSA_PRIVATE_CREATOR: &str = "Private Code for (0029,1000)-(0029,10ff)";

const CSA_GROUP: u16 = 0x0029;
const CSA_ELEMENTS: std::ops::Range<u16> = 0x1000..0x1100;
const CSA_ELEMENT_STEP: usize = 0x10;

/// Whether the data set declares a CSA header block.
pub fn has_csa_header(tree: &PropertyTree) -> bool {
    tree.value(CSA_PRIVATE_CREATOR)
        .is_some_and(|v| v.to_str().trim_end_matches([' ', '\0']) == CSA_BRANCH)
}

/// The tags which may hold a CSA header.
pub fn csa_tags() -> impl Iterator<Item = Tag> {
    CSA_ELEMENTS
        .step_by(CSA_ELEMENT_STEP)
        .map(|element| Tag(CSA_GROUP, element))
}

/// Decode every CSA header of the data set into the branch [`CSA_BRANCH`].
///
/// The binary values decoded are removed from the blob table.
/// A malformed header is reported and left out,
/// without affecting the rest of the data set.
/// Returns the number of headers decoded.
pub fn extract_csa(tree: &mut PropertyTree, blobs: &mut BlobTable, options: CsaOptions) -> usize {
    if !has_csa_header(tree) {
        return 0;
    }
    let mut decoded = 0;
    for tag in csa_tags() {
        for blob in blobs.take(tag) {
            match parse_csa(&blob, options) {
                Ok(csa) => {
                    tracing::debug!("Decoded {} CSA entries from {}", csa.len(), tag);
                    tree.touch_branch(CSA_BRANCH).merge(csa);
                    decoded += 1;
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to decode the CSA header in {}: {}",
                        tag,
                        snafu::Report::from_error(e)
                    );
                }
            }
        }
    }
    decoded
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use dcmtree_core::Value;

    /// Build a CSA header from (name, vr, items) triples.
    pub(crate) fn csa_blob(entries: &[(&str, &str, &[&str])]) -> Vec<u8> {
        let mut out = b"SV10\x04\x03\x02\x01".to_vec();
        out.extend_from_slice(&(entries.len() as u32).to_le_bytes());
        out.extend_from_slice(&77_u32.to_le_bytes());
        for (name, vr, items) in entries {
            let mut field = [0u8; 64];
            field[..name.len()].copy_from_slice(name.as_bytes());
            out.extend_from_slice(&field);
            out.extend_from_slice(&1_i32.to_le_bytes());
            out.extend_from_slice(vr.as_bytes());
            out.extend_from_slice(&[0, 0]);
            out.extend_from_slice(&3_i32.to_le_bytes());
            out.extend_from_slice(&(items.len() as i32).to_le_bytes());
            out.extend_from_slice(&77_i32.to_le_bytes());
            for item in *items {
                out.extend_from_slice(&(item.len() as i32 + 1).to_le_bytes());
                out.extend_from_slice(&[0u8; 12]);
                out.extend_from_slice(item.as_bytes());
                out.push(0);
                while out.len() % 4 != 0 {
                    out.push(0);
                }
            }
        }
        out.extend_from_slice(&[0u8; 4]);
        out
    }

    fn siemens_tree() -> PropertyTree {
        let mut tree = PropertyTree::new();
        tree.set(CSA_PRIVATE_CREATOR, "SIEMENS CSA HEADER");
        tree
    }

    #[test]
    fn tags_of_the_csa_block() {
        let tags: Vec<Tag> = csa_tags().collect();
        assert_eq!(tags.len(), 16);
        assert_eq!(tags[0], Tag(0x0029, 0x1000));
        assert_eq!(tags[1], Tag(0x0029, 0x1010));
        assert_eq!(tags[15], Tag(0x0029, 0x10F0));
    }

    #[test]
    fn merges_image_and_series_headers() {
        let mut tree = siemens_tree();
        let mut blobs = BlobTable::new();
        blobs.push(
            Tag(0x0029, 0x1010),
            csa_blob(&[("NumberOfImagesInMosaic", "US", &["4"])]),
        );
        blobs.push(
            Tag(0x0029, 0x1020),
            csa_blob(&[("SliceResolution", "FD", &["1"])]),
        );
        let decoded = extract_csa(&mut tree, &mut blobs, CsaOptions::default());
        assert_eq!(decoded, 2);
        assert_eq!(
            tree.value("SIEMENS CSA HEADER/NumberOfImagesInMosaic"),
            Some(&Value::U16(4))
        );
        assert_eq!(
            tree.value("SIEMENS CSA HEADER/SliceResolution"),
            Some(&Value::F64(1.0))
        );
        assert!(blobs.is_empty());
    }

    #[test]
    fn needs_the_private_creator() {
        let mut tree = PropertyTree::new();
        tree.set(CSA_PRIVATE_CREATOR, "SIEMENS MEDCOM HEADER");
        let mut blobs = BlobTable::new();
        blobs.push(Tag(0x0029, 0x1010), csa_blob(&[("A", "IS", &["1"])]));
        assert_eq!(extract_csa(&mut tree, &mut blobs, CsaOptions::default()), 0);
        assert!(!tree.contains(CSA_BRANCH));
        assert!(blobs.contains(Tag(0x0029, 0x1010)));
    }

    #[test]
    fn malformed_header_is_left_out() {
        let mut tree = siemens_tree();
        tree.set("Rows", 4_u16);
        let mut blobs = BlobTable::new();
        let mut bad = csa_blob(&[("EchoLinePosition", "IS", &["1"])]);
        bad[16] = 0;
        blobs.push(Tag(0x0029, 0x1010), bad);
        blobs.push(
            Tag(0x0029, 0x1020),
            csa_blob(&[("EchoLinePosition", "IS", &["64"])]),
        );
        assert_eq!(extract_csa(&mut tree, &mut blobs, CsaOptions::default()), 1);
        assert_eq!(
            tree.value("SIEMENS CSA HEADER/EchoLinePosition"),
            Some(&Value::I32(64))
        );
        assert_eq!(tree.value("Rows"), Some(&Value::U16(4)));
    }
}
