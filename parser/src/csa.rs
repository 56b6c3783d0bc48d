//! Parser of the Siemens CSA header, a binary mini-format
//! found in the private `(0029,10xx)` elements of Siemens files.
//!
//! The header starts with 16 bytes (`SV10`, a marker and the number of
//! entries), which are skipped. Each entry follows, made of:
//!
//! | bytes | content |
//! |-------|---------|
//! | 64    | name, NUL terminated |
//! | 4     | VM (ignored) |
//! | 4     | VR, the first two characters are used |
//! | 4     | syngo data type (ignored) |
//! | 4     | number of items |
//! | 4     | marker (ignored) |
//!
//! and then, for each item, a 4 byte length, 12 ignored bytes
//! and the item text, padded to a multiple of 4 bytes.

use byteordered::byteorder::{ByteOrder, LittleEndian};
use dcmtree_core::tree::PropertyTree;
use dcmtree_core::value::Value;
use snafu::{ensure, Backtrace, OptionExt, Snafu};
use std::borrow::Cow;

/// Offset of the first entry.
const ENTRIES_START: usize = 0x10;
/// Size of the name field.
const NAME_LEN: usize = 0x40;
/// Size of the header of each item.
const ITEM_HEADER_LEN: usize = 16;

/// Vendor protocol blobs, which are skipped unless asked for.
const EXT_PROTOCOLS: [&str; 3] = ["MrPhoenixProtocol", "MrEvaProtocol", "MrProtocol"];

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// An entry starts with an empty name.
    #[snafu(display("Empty CSA entry name at position {}", position))]
    EmptyEntryName { position: usize, backtrace: Backtrace },
    /// Decoding went past the end of the header.
    #[snafu(display(
        "CSA parser went beyond the element length: {} > {}",
        position,
        len
    ))]
    Overrun {
        position: usize,
        len: usize,
        backtrace: Backtrace,
    },
    /// A negative item count or item length.
    #[snafu(display("Invalid CSA {} {} in entry `{}`", what, value, name))]
    BadItemLength {
        name: String,
        what: &'static str,
        value: i32,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Options of the CSA header parser.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CsaOptions {
    /// decode the (large) vendor protocol text entries as well
    pub with_ext_protocols: bool,
}

/// Parse a CSA header into a property tree,
/// with one property per non-empty entry.
pub fn parse_csa(data: &[u8], options: CsaOptions) -> Result<PropertyTree> {
    let mut tree = PropertyTree::new();
    let mut reader = CsaReader { data, position: ENTRIES_START };
    let end = data.len().saturating_sub(4);
    while reader.position < end {
        reader.read_entry(options, &mut tree)?;
    }
    Ok(tree)
}

struct CsaReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> CsaReader<'a> {
    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self.position + len;
        let bytes = self.data.get(self.position..end).context(OverrunSnafu {
            position: end,
            len: self.data.len(),
        })?;
        self.position = end;
        Ok(bytes)
    }

    fn skip(&mut self, len: usize) -> Result<()> {
        self.take(len).map(|_| ())
    }

    fn read_i32(&mut self) -> Result<i32> {
        self.take(4).map(LittleEndian::read_i32)
    }

    fn read_entry(&mut self, options: CsaOptions, tree: &mut PropertyTree) -> Result<()> {
        let position = self.position;
        let name = c_string(self.take(NAME_LEN)?);
        ensure!(!name.is_empty(), EmptyEntryNameSnafu { position });
        self.skip(4)?;
        let vr = c_string(&self.take(4)?[..2]);
        self.skip(4)?;
        let count = self.read_i32()?;
        ensure!(
            count >= 0,
            BadItemLengthSnafu {
                name: name.as_ref(),
                what: "item count",
                value: count
            }
        );
        self.skip(4)?;
        if count == 0 {
            tracing::trace!("Skipping empty CSA entry {}", name);
            return Ok(());
        }

        let wanted = options.with_ext_protocols || !EXT_PROTOCOLS.contains(&name.as_ref());
        if !wanted {
            tracing::debug!(
                "Skipping {}, use the dialect \"withExtProtocols\" to get it",
                name
            );
        }
        let mut items = Vec::new();
        for _ in 0..count {
            let len = self.read_i32()?;
            ensure!(
                len >= 0,
                BadItemLengthSnafu {
                    name: name.as_ref(),
                    what: "item length",
                    value: len
                }
            );
            self.skip(ITEM_HEADER_LEN - 4)?;
            if len == 0 {
                continue;
            }
            let len = len as usize;
            let padded = len.div_ceil(4) * 4;
            let text = self.take(padded)?;
            if wanted {
                let text = c_string(&text[..len]);
                let text = text.trim_matches([' ', '\t', '\x0C', '\x0B', '\n', '\r']);
                if text.is_empty() {
                    tracing::trace!("Skipping empty string for CSA entry {}", name);
                } else {
                    items.push(text.to_owned());
                }
            }
        }

        let value = match items.len() {
            0 => None,
            1 => scalar_value(&items[0], &vr),
            _ => list_value(&items, &vr),
        };
        match value {
            Some(value) => {
                tracing::trace!("Found CSA entry {} = {}", name, value);
                tree.set(&name, value);
            }
            None if items.is_empty() => {}
            None => tracing::warn!(
                "Failed to parse CSA entry {} {:?} as {}",
                name,
                items,
                vr
            ),
        }
        Ok(())
    }
}

/// The text up to the first NUL byte, decoded lossily.
fn c_string(bytes: &[u8]) -> Cow<'_, str> {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end])
}

/// Interpret a single item according to the entry's VR.
fn scalar_value(text: &str, vr: &str) -> Option<Value> {
    match vr {
        "IS" | "SL" => text.parse::<i32>().ok().map(Value::I32),
        "UL" => text.parse::<u32>().ok().map(Value::U32),
        "US" => text.parse::<u16>().ok().map(Value::U16),
        "SS" => text.parse::<i16>().ok().map(Value::I16),
        "DS" | "FD" => text.parse::<f64>().ok().map(Value::F64),
        "CS" | "LO" | "SH" | "UN" | "ST" | "UT" | "LT" => Some(Value::from(text)),
        _ => {
            tracing::error!("Don't know how to parse CSA entry {:?} of type {}", text, vr);
            None
        }
    }
}

/// Interpret multiple items according to the entry's VR.
fn list_value(items: &[String], vr: &str) -> Option<Value> {
    match vr {
        "IS" | "SL" | "US" | "SS" => items
            .iter()
            .map(|s| s.parse::<i64>().ok())
            .collect::<Option<Vec<_>>>()
            .map(Value::Ints),
        "DS" | "FD" => items
            .iter()
            .map(|s| s.parse::<f64>().ok())
            .collect::<Option<Vec<_>>>()
            .map(Value::Floats),
        "UL" | "CS" | "LO" | "SH" | "UN" | "ST" => Some(Value::Strs(items.to_vec())),
        _ => {
            tracing::error!("Don't know how to parse CSA entry list {:?} of type {}", items, vr);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a CSA header from (name, vr, items) triples.
    fn csa(entries: &[(&str, &str, &[&str])]) -> Vec<u8> {
        let mut out = b"SV10\x04\x03\x02\x01".to_vec();
        out.extend_from_slice(&(entries.len() as u32).to_le_bytes());
        out.extend_from_slice(&77_u32.to_le_bytes());
        for (name, vr, items) in entries {
            let mut field = [0u8; NAME_LEN];
            field[..name.len()].copy_from_slice(name.as_bytes());
            out.extend_from_slice(&field);
            out.extend_from_slice(&1_i32.to_le_bytes()); // VM
            let mut vr_field = [0u8; 4];
            vr_field[..2].copy_from_slice(vr.as_bytes());
            out.extend_from_slice(&vr_field);
            out.extend_from_slice(&3_i32.to_le_bytes()); // syngo DT
            out.extend_from_slice(&(items.len() as i32).to_le_bytes());
            out.extend_from_slice(&77_i32.to_le_bytes());
            for item in *items {
                let len = item.len() as i32 + 1;
                out.extend_from_slice(&len.to_le_bytes());
                out.extend_from_slice(&[0u8; 12]);
                out.extend_from_slice(item.as_bytes());
                out.push(0);
                while out.len() % 4 != 0 {
                    out.push(0);
                }
            }
        }
        // trailing bytes, not an entry
        out.extend_from_slice(&[0u8; 4]);
        out
    }

    #[test]
    fn scalars_and_lists() {
        let data = csa(&[
            ("EchoLinePosition", "IS", &["64 "]),
            ("SliceNormalVector", "FD", &["0.0", "0.5", "-1"]),
            ("ImaCoilString", "LO", &[" HEA;HEP"]),
            ("MosaicRefAcqTimes", "FD", &["0", "52.5"]),
            ("NumberOfImagesInMosaic", "US", &["16"]),
            ("PhaseEncodingDirectionPositive", "IS", &[]),
            ("SequenceMask", "CS", &["  ", "SK"]),
        ]);
        let tree = parse_csa(&data, CsaOptions::default()).unwrap();
        assert_eq!(tree.value("EchoLinePosition"), Some(&Value::I32(64)));
        assert_eq!(
            tree.value("SliceNormalVector"),
            Some(&Value::Floats(vec![0.0, 0.5, -1.0]))
        );
        assert_eq!(tree.value("ImaCoilString"), Some(&Value::from("HEA;HEP")));
        assert_eq!(tree.value("NumberOfImagesInMosaic"), Some(&Value::U16(16)));
        assert!(!tree.contains("PhaseEncodingDirectionPositive"));
        // blank items are dropped, leaving a single value
        assert_eq!(tree.value("SequenceMask"), Some(&Value::from("SK")));
        assert_eq!(tree.len(), 6);
    }

    #[test]
    fn protocols_need_opt_in() {
        let data = csa(&[
            ("MrPhoenixProtocol", "UN", &["### ASCCONV BEGIN ###"]),
            ("TimeAfterStart", "DS", &["1.25"]),
        ]);
        let tree = parse_csa(&data, CsaOptions::default()).unwrap();
        assert!(!tree.contains("MrPhoenixProtocol"));
        assert_eq!(tree.value("TimeAfterStart"), Some(&Value::F64(1.25)));

        let options = CsaOptions {
            with_ext_protocols: true,
        };
        let tree = parse_csa(&data, options).unwrap();
        assert_eq!(
            tree.value("MrPhoenixProtocol"),
            Some(&Value::from("### ASCCONV BEGIN ###"))
        );
    }

    #[test]
    fn unparsable_values_are_skipped() {
        let data = csa(&[("EchoLinePosition", "IS", &["sixty"]), ("Foo", "XX", &["1"])]);
        let tree = parse_csa(&data, CsaOptions::default()).unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn empty_name_is_an_error() {
        let mut data = csa(&[("EchoLinePosition", "IS", &["1"])]);
        data[ENTRIES_START] = 0;
        assert!(matches!(
            parse_csa(&data, CsaOptions::default()),
            Err(Error::EmptyEntryName { position: 16, .. })
        ));
    }

    #[test]
    fn overrun_is_an_error() {
        let mut data = csa(&[("EchoLinePosition", "IS", &["1"])]);
        // item length 1 -> 4000
        let item_len_at = ENTRIES_START + NAME_LEN + 20;
        data[item_len_at..item_len_at + 4].copy_from_slice(&4000_i32.to_le_bytes());
        assert!(matches!(
            parse_csa(&data, CsaOptions::default()),
            Err(Error::Overrun { .. })
        ));
    }
}
