//! The recursive data set reader.
//!
//! One pass over the element stream fills a [`PropertyTree`] with the
//! decoded values and a [`BlobTable`] with the binary values.
//! Containers (the data set, items, sequences, itemized binary values)
//! end either at a declared byte length or at a delimiter item,
//! see [`Terminator`].

use crate::blob::BlobTable;
use crate::cursor::{Cursor, Element};
use crate::error::{
    ItemOverrunSnafu, MissingDelimiterSnafu, Result, SequenceOverrunSnafu,
    UndefinedLengthSnafu, UnexpectedItemTagSnafu,
};
use dcmtree_core::dictionary::DataDictionary;
use dcmtree_core::header::{Tag, VR};
use dcmtree_core::tree::PropertyTree;
use dcmtree_encoding::decode::{decode_value, DecodeHeader};
use snafu::{ensure, OptionExt};

/// How a container ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// When the cursor reaches this position.
    ByLength {
        /// position right after the container
        end: usize,
    },
    /// At a delimiter item, which is consumed.
    ByDelimiter,
}

impl Terminator {
    /// The terminator of the container opened by `element`.
    fn of(element: &Element) -> Self {
        match element.value_end() {
            Some(end) => Terminator::ByLength { end },
            None => Terminator::ByDelimiter,
        }
    }
}

/// The outcome of reading a data set.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DataSet {
    /// all decoded values, by canonical name
    pub tree: PropertyTree,
    /// all binary values, by tag
    pub blobs: BlobTable,
}

/// Read a whole data set from `data`.
///
/// `decoder` decides the VR encoding of element headers,
/// `dict` gives the canonical names under which values are stored.
pub fn read_dataset<D>(data: &[u8], decoder: &dyn DecodeHeader, dict: &D) -> Result<DataSet>
where
    D: DataDictionary + ?Sized,
{
    let mut reader = DataSetReader::new(data, decoder, dict);
    let mut tree = PropertyTree::new();
    reader.read_container(
        Terminator::ByLength { end: data.len() },
        data.len(),
        Tag(0, 0),
        &mut tree,
    )?;
    Ok(DataSet {
        tree,
        blobs: reader.into_blobs(),
    })
}

/// A reader of nested element streams over one buffer.
#[derive(Debug)]
pub struct DataSetReader<'a, 'd, D: ?Sized> {
    cursor: Cursor<'a, 'd>,
    dict: &'d D,
    blobs: BlobTable,
}

impl<'a, 'd, D> DataSetReader<'a, 'd, D>
where
    D: DataDictionary + ?Sized,
{
    /// Create a reader at the start of `data`.
    pub fn new(data: &'a [u8], decoder: &'d dyn DecodeHeader, dict: &'d D) -> Self {
        DataSetReader {
            cursor: Cursor::new(data, decoder),
            dict,
            blobs: BlobTable::new(),
        }
    }

    /// The current position in the buffer.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Give up the reader, keeping the binary values it collected.
    pub fn into_blobs(self) -> BlobTable {
        self.blobs
    }

    /// Read the elements of one container into `tree`.
    ///
    /// `limit` is the end of the enclosing container,
    /// which no nested sequence may cross.
    /// `owner` is the tag which opened the container,
    /// only used for reporting.
    /// An item delimiter always closes the container.
    pub fn read_container(
        &mut self,
        terminator: Terminator,
        limit: usize,
        owner: Tag,
        tree: &mut PropertyTree,
    ) -> Result<()> {
        loop {
            if let Terminator::ByLength { end } = terminator {
                if self.cursor.position() >= end {
                    return Ok(());
                }
            }
            let Some(element) = self.cursor.current()? else {
                ensure!(
                    terminator != Terminator::ByDelimiter,
                    MissingDelimiterSnafu { tag: owner }
                );
                return Ok(());
            };
            match element.tag() {
                Tag::ITEM_DELIMITER => {
                    tracing::debug!("Item delimiter at {}", element.position);
                    self.cursor.seek(element.value_start());
                    return Ok(());
                }
                Tag::SEQUENCE_DELIMITER => {
                    tracing::warn!(
                        "Stray sequence delimiter at position {}, skipping it",
                        element.position
                    );
                    self.cursor.seek(element.value_start());
                }
                Tag::ITEM => {
                    tracing::warn!("Stray item at position {}, skipping it", element.position);
                    self.cursor.advance(&element)?;
                }
                _ => self.read_element(&element, limit, tree)?,
            }
        }
    }

    fn read_element(
        &mut self,
        element: &Element,
        limit: usize,
        tree: &mut PropertyTree,
    ) -> Result<()> {
        match element.vr() {
            Some(vr) if vr.is_binary_blob() => {
                if element.length().is_undefined() {
                    self.read_itemized(element)
                } else {
                    let bytes = self.cursor.value(element)?;
                    self.blobs.push(element.tag(), bytes.to_vec());
                    self.cursor.advance(element)
                }
            }
            _ if element.header.is_sequence() => self.read_sequence(element, limit, tree),
            vr => {
                let bytes = self.cursor.value(element)?;
                self.store_value(element.tag(), vr, bytes, tree);
                self.cursor.advance(element)
            }
        }
    }

    fn store_value(&self, tag: Tag, vr: Option<VR>, bytes: &[u8], tree: &mut PropertyTree) {
        let name = self.dict.name_of(tag);
        if vr.is_none() {
            tracing::warn!("Unknown VR for {} ({}), decoding as bytes", name, tag);
        }
        match decode_value(vr, bytes) {
            Ok(Some(value)) => tree.set(&name, value),
            Ok(None) => {}
            Err(e) => tracing::warn!("Skipping {} ({}): {}", name, tag, e),
        }
    }

    /// Read the items of a binary value of undefined length.
    /// Each non-empty item becomes an entry of the blob table.
    fn read_itemized(&mut self, element: &Element) -> Result<()> {
        tracing::debug!("Itemized binary value {} at {}", element.tag(), element.position);
        self.cursor.enter(element);
        loop {
            let item = self
                .cursor
                .current()?
                .context(MissingDelimiterSnafu { tag: element.tag() })?;
            match item.tag() {
                Tag::SEQUENCE_DELIMITER => {
                    self.cursor.seek(item.value_start());
                    return Ok(());
                }
                Tag::ITEM => {
                    ensure!(
                        item.length().is_defined(),
                        UndefinedLengthSnafu {
                            tag: item.tag(),
                            position: item.position,
                        }
                    );
                    let bytes = self.cursor.value(&item)?;
                    if bytes.is_empty() {
                        tracing::debug!("Skipping empty item of {}", element.tag());
                    } else {
                        self.blobs.push(element.tag(), bytes.to_vec());
                    }
                    self.cursor.advance(&item)?;
                }
                tag => {
                    return UnexpectedItemTagSnafu {
                        tag,
                        position: item.position,
                    }
                    .fail()
                }
            }
        }
    }

    /// Read a sequence, merging all of its items
    /// into one branch named after the sequence.
    fn read_sequence(
        &mut self,
        element: &Element,
        limit: usize,
        tree: &mut PropertyTree,
    ) -> Result<()> {
        let tag = element.tag();
        let terminator = Terminator::of(element);
        let seq_limit = match terminator {
            Terminator::ByLength { end } => {
                ensure!(end <= limit, SequenceOverrunSnafu { tag, end, limit });
                end
            }
            Terminator::ByDelimiter => limit,
        };
        tracing::debug!(
            "Sequence {} at {} ({:?})",
            tag,
            element.position,
            terminator
        );

        self.cursor.enter(element);
        let mut items = PropertyTree::new();
        while !self.sequence_done(terminator, tag)? {
            let item = self
                .cursor
                .current()?
                .context(MissingDelimiterSnafu { tag })?;
            ensure!(
                item.tag() == Tag::ITEM,
                UnexpectedItemTagSnafu {
                    tag: item.tag(),
                    position: item.position,
                }
            );
            let item_terminator = Terminator::of(&item);
            if let Terminator::ByLength { end } = item_terminator {
                ensure!(
                    end <= seq_limit,
                    ItemOverrunSnafu {
                        position: item.position,
                        end,
                        limit: seq_limit,
                    }
                );
            }

            self.cursor.enter(&item);
            let mut item_tree = PropertyTree::new();
            self.read_container(item_terminator, seq_limit, tag, &mut item_tree)?;
            if let Terminator::ByLength { end } = item_terminator {
                self.cursor.seek(end);
            }
            items.merge(item_tree);
        }
        if let Terminator::ByLength { end } = terminator {
            self.cursor.seek(end);
        }

        let name = self.dict.name_of(tag);
        tree.touch_branch(&name).merge(items);
        Ok(())
    }

    /// Whether the sequence has ended.
    /// A sequence delimiter is consumed when found.
    fn sequence_done(&mut self, terminator: Terminator, tag: Tag) -> Result<bool> {
        match terminator {
            Terminator::ByLength { end } => {
                Ok(self.cursor.position() >= end || self.cursor.eof())
            }
            Terminator::ByDelimiter => match self.cursor.peek_tag() {
                Some(Tag::SEQUENCE_DELIMITER) => {
                    self.cursor.seek(self.cursor.position() + 8);
                    Ok(true)
                }
                Some(_) if !self.cursor.eof() => Ok(false),
                _ => MissingDelimiterSnafu { tag }.fail(),
            },
        }
    }
}
