//! The table of binary values set aside while reading a data set.

use dcmtree_core::header::Tag;
use std::collections::BTreeMap;

/// A multi-map from tag to the binary values found under that tag,
/// in the order they were read.
///
/// Binary values (OB, OW) never go into the property tree.
/// Itemized values contribute one entry per non-empty item.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BlobTable {
    blobs: BTreeMap<Tag, Vec<Vec<u8>>>,
}

impl BlobTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a binary value under the given tag.
    pub fn push(&mut self, tag: Tag, bytes: Vec<u8>) {
        self.blobs.entry(tag).or_default().push(bytes);
    }

    /// All values found under the given tag.
    pub fn get(&self, tag: Tag) -> &[Vec<u8>] {
        self.blobs.get(&tag).map(Vec::as_slice).unwrap_or_default()
    }

    /// The first value found under the given tag.
    pub fn first(&self, tag: Tag) -> Option<&[u8]> {
        self.get(tag).first().map(Vec::as_slice)
    }

    /// Whether anything was found under the given tag.
    pub fn contains(&self, tag: Tag) -> bool {
        self.blobs.contains_key(&tag)
    }

    /// Remove and return all values found under the given tag.
    pub fn take(&mut self, tag: Tag) -> Vec<Vec<u8>> {
        self.blobs.remove(&tag).unwrap_or_default()
    }

    /// All values of the given tag, concatenated.
    pub fn concatenated(&self, tag: Tag) -> Vec<u8> {
        self.get(tag).concat()
    }

    /// The tags present in the table, in ascending order.
    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.blobs.keys().copied()
    }

    /// Tags with their values, in ascending tag order.
    pub fn iter(&self) -> impl Iterator<Item = (Tag, &[Vec<u8>])> {
        self.blobs.iter().map(|(tag, blobs)| (*tag, blobs.as_slice()))
    }

    /// Number of distinct tags in the table.
    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_repeated_tags_in_order() {
        let tag = Tag(0x7FE0, 0x0010);
        let mut table = BlobTable::new();
        table.push(tag, vec![1, 2]);
        table.push(Tag(0x0029, 0x1010), vec![9]);
        table.push(tag, vec![3]);

        assert_eq!(table.len(), 2);
        assert_eq!(table.get(tag), &[vec![1, 2], vec![3]]);
        assert_eq!(table.first(tag), Some(&[1u8, 2][..]));
        assert_eq!(table.concatenated(tag), vec![1, 2, 3]);
        assert_eq!(
            table.tags().collect::<Vec<_>>(),
            vec![Tag(0x0029, 0x1010), tag]
        );

        assert_eq!(table.take(tag).len(), 2);
        assert!(!table.contains(tag));
        assert!(table.get(tag).is_empty());
    }
}
