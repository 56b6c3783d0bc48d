use crate::tags::ENTRIES;
use dcmtree_core::dictionary::{DataDictionary, DictionaryEntry};
use dcmtree_core::header::{Tag, VR};
use once_cell::sync::Lazy;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::fmt::{Display, Formatter};

static DICT: Lazy<StandardDataDictionaryRegistry> = Lazy::new(init_dictionary);

/// Retrieve a singleton instance of the standard dictionary registry.
///
/// Note that one does not generally have to call this
/// unless when retrieving the underlying registry is important.
/// The unit type [`StandardDataDictionary`]
/// already provides a lazy loaded singleton implementing the necessary traits.
#[inline]
pub fn registry() -> &'static StandardDataDictionaryRegistry {
    &DICT
}

/// The data struct actually containing the standard dictionary.
///
/// This structure is made opaque via the unit type [`StandardDataDictionary`],
/// which provides a lazy loaded singleton.
#[derive(Debug)]
pub struct StandardDataDictionaryRegistry {
    /// mapping: name → entry
    by_name: HashMap<&'static str, &'static DictionaryEntry>,
    /// mapping: tag → entry
    by_tag: HashMap<Tag, &'static DictionaryEntry>,
}

impl StandardDataDictionaryRegistry {
    fn new() -> StandardDataDictionaryRegistry {
        StandardDataDictionaryRegistry {
            by_name: HashMap::with_capacity(ENTRIES.len()),
            by_tag: HashMap::with_capacity(ENTRIES.len()),
        }
    }

    /// record the given dictionary entry reference
    fn index(&mut self, entry: &'static DictionaryEntry) -> &mut Self {
        if let Cow::Borrowed(alias) = entry.alias {
            self.by_name.insert(alias, entry);
        }
        self.by_tag.insert(entry.tag, entry);
        self
    }

    /// Look up the tag of an attribute by its alias.
    pub fn tag_of(&self, name: &str) -> Option<Tag> {
        self.by_name.get(name).map(|e| e.tag)
    }
}

/// Range of the private creator elements in a private group.
const PRIVATE_CREATOR_ELEMENTS: std::ops::RangeInclusive<u16> = 0x0010..=0x00FF;

/// Overlay group, whose first elements are collected in one branch.
const OVERLAY_GROUP: u16 = 0x6000;

/// A private creator entry for the block `(gggg,xx00)-(gggg,xxff)`
/// reserved by the given element.
fn private_creator_entry(tag: Tag) -> DictionaryEntry {
    let block = tag.element() << 8;
    DictionaryEntry {
        tag,
        vr: Some(VR::LO),
        alias: Cow::Owned(format!(
            "Private Code for {}-{}",
            Tag(tag.group(), block),
            Tag(tag.group(), block | 0x00FF)
        )),
    }
}

fn overlay_entry(tag: Tag) -> Option<DictionaryEntry> {
    match tag.element() {
        0x0000..=0x02FF => Some(DictionaryEntry {
            tag,
            vr: None,
            alias: Cow::Owned(format!("DICOM overlay info/0x{:04X}", tag.element())),
        }),
        0x3000 => Some(DictionaryEntry::new(tag, None, "DICOM overlay data")),
        _ => None,
    }
}

/// A data element dictionary which consults
/// the library's global DICOM attribute registry.
///
/// This is the type which would generally be used
/// whenever a data element dictionary is needed,
/// such as when reading DICOM objects.
///
/// Besides the static entries, it synthesizes names
/// for private creator elements of any odd group
/// and for the elements of the overlay group `6000`.
///
/// The dictionary index is automatically initialized upon the first use.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StandardDataDictionary;

impl StandardDataDictionary {
    fn indexed_tag(tag: Tag) -> Option<DictionaryEntry> {
        if let Some(entry) = registry().by_tag.get(&tag) {
            return Some((*entry).clone());
        }
        // check for private creator
        if tag.is_private() && PRIVATE_CREATOR_ELEMENTS.contains(&tag.element()) {
            return Some(private_creator_entry(tag));
        }
        if tag.group() == OVERLAY_GROUP {
            return overlay_entry(tag);
        }
        None
    }
}

impl DataDictionary for StandardDataDictionary {
    fn by_tag(&self, tag: Tag) -> Option<DictionaryEntry> {
        StandardDataDictionary::indexed_tag(tag)
    }

    fn implicit_vr(&self, tag: Tag) -> Option<VR> {
        match StandardDataDictionary::indexed_tag(tag).and_then(|e| e.vr) {
            Some(vr) => Some(vr),
            // generic group length
            None if tag.element() == 0x0000 && tag.group() != OVERLAY_GROUP => Some(VR::UL),
            None => None,
        }
    }
}

impl Display for StandardDataDictionary {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        f.write_str("Standard DICOM Data Dictionary")
    }
}

fn init_dictionary() -> StandardDataDictionaryRegistry {
    let mut d = StandardDataDictionaryRegistry::new();
    for entry in ENTRIES {
        d.index(entry);
    }
    d
}

#[cfg(test)]
mod tests {
    use super::{registry, StandardDataDictionary};
    use dcmtree_core::dictionary::{DataDictionary, DictionaryEntry};
    use dcmtree_core::header::{Tag, VR};

    // tests for just a few attributes to make sure that the entries
    // were well installed into the crate
    #[test]
    fn smoke_test() {
        let dict = StandardDataDictionary;

        assert_eq!(
            dict.by_tag(Tag(0x0010, 0x0010)),
            Some(DictionaryEntry::new(
                Tag(0x0010, 0x0010),
                Some(VR::PN),
                "PatientName"
            ))
        );
        assert_eq!(dict.name_of(Tag(0x0008, 0x0060)), "Modality");
        assert_eq!(dict.implicit_vr(Tag(0x7FE0, 0x0010)), Some(VR::OW));
        assert_eq!(
            dict.name_of(Tag(0x0019, 0x100A)),
            "SiemensNumberOfImagesInMosaic"
        );
        assert_eq!(registry().tag_of("Rows"), Some(Tag(0x0028, 0x0010)));
    }

    // tests for just a few attributes to make sure that the tag constants
    // were well installed into the crate
    #[test]
    fn constants_available() {
        use crate::tags::*;
        assert_eq!(PATIENT_NAME, Tag(0x0010, 0x0010));
        assert_eq!(MODALITY, Tag(0x0008, 0x0060));
        assert_eq!(PIXEL_DATA, Tag(0x7FE0, 0x0010));
        assert_eq!(TRANSFER_SYNTAX_UID, Tag(0x0002, 0x0010));
    }

    #[test]
    fn has_private_creator() {
        let dict = StandardDataDictionary;

        assert_eq!(
            dict.name_of(Tag(0x0029, 0x0010)),
            "Private Code for (0029,1000)-(0029,10ff)"
        );
        assert_eq!(
            dict.name_of(Tag(0x0019, 0x0011)),
            "Private Code for (0019,1100)-(0019,11ff)"
        );
        assert_eq!(dict.implicit_vr(Tag(0x0009, 0x00FF)), Some(VR::LO));
        // not a private creator
        assert_eq!(dict.by_tag(Tag(0x0009, 0x0001)), None);
    }

    #[test]
    fn has_overlay_names() {
        let dict = StandardDataDictionary;

        assert_eq!(
            dict.name_of(Tag(0x6000, 0x0010)),
            "DICOM overlay info/0x0010"
        );
        assert_eq!(dict.name_of(Tag(0x6000, 0x3000)), "DICOM overlay data");
        assert_eq!(dict.implicit_vr(Tag(0x6000, 0x3000)), None);
        assert_eq!(dict.name_of(Tag(0x6000, 0x1000)), "UnknownTag/(6000,1000)");
    }

    #[test]
    fn group_length_is_ul_under_implicit_vr() {
        let dict = StandardDataDictionary;
        assert_eq!(dict.implicit_vr(Tag(0x0008, 0x0000)), Some(VR::UL));
        assert_eq!(dict.name_of(Tag(0x0008, 0x0000)), "UnknownTag/(0008,0000)");
    }
}
