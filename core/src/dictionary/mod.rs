//! This module contains the concept of a DICOM data dictionary.
//!
//! The decoder consults a dictionary for two things: the canonical name
//! under which an element is stored in the property tree, and the value
//! representation of an element when the transfer syntax does not carry one.
//! The standard dictionary lives in the `dcmtree-dictionary-std` crate.

pub mod stub;

pub use self::stub::StubDataDictionary;

use crate::header::{Tag, VR};
use std::borrow::Cow;
use std::fmt::Debug;

/// The name given to elements that no dictionary knows of,
/// in the form `UnknownTag/(gggg,eeee)`.
pub fn unknown_tag_name(tag: Tag) -> String {
    format!("UnknownTag/{}", tag)
}

/** Type trait for a dictionary of DICOM attributes.
 *
 * The methods herein have no generic parameters, so as to enable being
 * used as a trait object.
 */
pub trait DataDictionary: Debug {
    /// Fetch an entry by its tag.
    fn by_tag(&self, tag: Tag) -> Option<DictionaryEntry>;

    /// The property name of the given tag,
    /// falling back to [`unknown_tag_name`].
    fn name_of(&self, tag: Tag) -> Cow<'static, str> {
        match self.by_tag(tag) {
            Some(entry) => entry.alias,
            None => Cow::Owned(unknown_tag_name(tag)),
        }
    }

    /// The value representation to assume for the given tag
    /// when it is encoded with implicit VR.
    fn implicit_vr(&self, tag: Tag) -> Option<VR> {
        self.by_tag(tag).and_then(|e| e.vr)
    }
}

impl<D> DataDictionary for &D
where
    D: DataDictionary + ?Sized,
{
    fn by_tag(&self, tag: Tag) -> Option<DictionaryEntry> {
        (**self).by_tag(tag)
    }

    fn name_of(&self, tag: Tag) -> Cow<'static, str> {
        (**self).name_of(tag)
    }

    fn implicit_vr(&self, tag: Tag) -> Option<VR> {
        (**self).implicit_vr(tag)
    }
}

impl<D> DataDictionary for Box<D>
where
    D: DataDictionary + ?Sized,
{
    fn by_tag(&self, tag: Tag) -> Option<DictionaryEntry> {
        (**self).by_tag(tag)
    }

    fn name_of(&self, tag: Tag) -> Cow<'static, str> {
        (**self).name_of(tag)
    }

    fn implicit_vr(&self, tag: Tag) -> Option<VR> {
        (**self).implicit_vr(tag)
    }
}

/// A dictionary entry, representing a DICOM attribute.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DictionaryEntry {
    /// The attribute tag
    pub tag: Tag,
    /// The _typical_ value representation of the attribute,
    /// if the dictionary specifies one
    pub vr: Option<VR>,
    /// The alias of the attribute, with no spaces, usually InCapitalizedCamelCase
    pub alias: Cow<'static, str>,
}

impl DictionaryEntry {
    /// Create an entry with a static alias.
    pub const fn new(tag: Tag, vr: Option<VR>, alias: &'static str) -> Self {
        DictionaryEntry {
            tag,
            vr,
            alias: Cow::Borrowed(alias),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tags_are_named_by_number() {
        let dict = StubDataDictionary;
        assert_eq!(dict.name_of(Tag(0x07a1, 0x1011)), "UnknownTag/(07a1,1011)");
        assert_eq!(dict.implicit_vr(Tag(0x0028, 0x0010)), None);
    }
}
