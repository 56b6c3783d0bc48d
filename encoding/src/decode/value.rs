//! The VR dispatch table.
//!
//! Each value representation is mapped to a [`ValueCodec`]:
//! a scalar decoder, an optional list decoder,
//! and the byte size of one element.
//! The size is zero for textual representations,
//! which are always decoded as a whole and split afterwards.

use crate::decode::primitive_value as p;
use crate::decode::text_value as t;
use crate::decode::{NoListDecoderSnafu, Result};
use dcmtree_core::header::VR;
use dcmtree_core::value::Value;
use snafu::OptionExt;

/// A function decoding the raw bytes of a value.
/// `Ok(None)` means that nothing could be decoded,
/// the reason having been logged.
pub type DecodeFn = fn(&[u8]) -> Result<Option<Value>>;

/// How the values of one value representation are decoded.
#[derive(Debug, Clone, Copy)]
pub struct ValueCodec {
    /// decoder for a value holding exactly one element
    pub scalar: DecodeFn,
    /// decoder for a value holding more than one element, if supported
    pub list: Option<DecodeFn>,
    /// number of bytes of one element, or 0 for variable length text
    pub element_size: usize,
}

const fn codec(scalar: DecodeFn, list: Option<DecodeFn>, element_size: usize) -> ValueCodec {
    ValueCodec {
        scalar,
        list,
        element_size,
    }
}

const SPLIT_TEXT: ValueCodec = codec(t::split_text, None, 0);
const FREE_TEXT: ValueCodec = codec(t::free_text, None, 0);
const DATE: ValueCodec = codec(t::date, Some(t::dates), 8);
const TIME: ValueCodec = codec(t::time, None, 0);
const DATE_TIME: ValueCodec = codec(t::datetime, None, 0);
const AGE: ValueCodec = codec(t::age, None, 0);
const TAG_REFERENCE: ValueCodec = codec(t::tag_reference, None, 4);
const HEX: ValueCodec = codec(t::hex_bytes, None, 0);

const FL: ValueCodec = codec(p::scalar_fl, Some(p::list_fl), 4);
const FD: ValueCodec = codec(p::scalar_fd, Some(p::list_fd), 8);
const SS: ValueCodec = codec(p::scalar_ss, Some(p::list_ss), 2);
const SL: ValueCodec = codec(p::scalar_sl, Some(p::list_sl), 4);
const SV: ValueCodec = codec(p::scalar_sv, Some(p::list_sv), 8);
const US: ValueCodec = codec(p::scalar_us, Some(p::list_us), 2);
const UL: ValueCodec = codec(p::scalar_ul, Some(p::list_ul), 4);
const UV: ValueCodec = codec(p::scalar_uv, Some(p::list_uv), 8);
const OF: ValueCodec = codec(p::scalar_of, Some(p::list_of), 4);
const OD: ValueCodec = codec(p::scalar_od, Some(p::list_od), 8);
const OL: ValueCodec = codec(p::scalar_ol, Some(p::list_ol), 4);
const OV: ValueCodec = codec(p::scalar_ov, Some(p::list_ov), 8);

impl ValueCodec {
    /// Obtain the codec of the given value representation.
    /// Values of unknown representation, as well as UN and
    /// binary blobs, are rendered as hexadecimal byte strings.
    pub fn of(vr: Option<VR>) -> &'static ValueCodec {
        let Some(vr) = vr else {
            return &HEX;
        };
        match vr {
            VR::AE | VR::CS | VR::DS | VR::IS | VR::LO | VR::PN | VR::SH | VR::UC | VR::UI => {
                &SPLIT_TEXT
            }
            VR::LT | VR::ST | VR::UT | VR::UR => &FREE_TEXT,
            VR::DA => &DATE,
            VR::TM => &TIME,
            VR::DT => &DATE_TIME,
            VR::AS => &AGE,
            VR::AT => &TAG_REFERENCE,
            VR::FL => &FL,
            VR::FD => &FD,
            VR::SS => &SS,
            VR::SL => &SL,
            VR::SV => &SV,
            VR::US => &US,
            VR::UL => &UL,
            VR::UV => &UV,
            VR::OF => &OF,
            VR::OD => &OD,
            VR::OL => &OL,
            VR::OV => &OV,
            VR::OB | VR::OW | VR::SQ | VR::UN => &HEX,
        }
    }

    /// Decode the raw bytes of a value.
    ///
    /// The number of elements is the value length divided by the element size;
    /// a single element (or a variable length value) goes to the scalar decoder,
    /// more than one to the list decoder.
    /// Zero length values yield no value.
    pub fn decode(&self, vr: Option<VR>, bytes: &[u8]) -> Result<Option<Value>> {
        if bytes.is_empty() {
            return Ok(None);
        }
        let multiplicity = match self.element_size {
            0 => 1,
            size => bytes.len() / size,
        };
        if multiplicity <= 1 {
            return (self.scalar)(bytes);
        }
        let list = self.list.context(NoListDecoderSnafu {
            vr: vr.unwrap_or(VR::UN),
            multiplicity,
        })?;
        list(bytes)
    }
}

/// Decode the raw bytes of a value of the given representation.
pub fn decode_value(vr: Option<VR>, bytes: &[u8]) -> Result<Option<Value>> {
    ValueCodec::of(vr).decode(vr, bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::Error;

    #[test]
    fn multiplicity_selects_decoder() {
        assert_eq!(
            decode_value(Some(VR::US), &[0x00, 0x02]).unwrap(),
            Some(Value::U16(512))
        );
        assert_eq!(
            decode_value(Some(VR::US), &[0x01, 0x00, 0x02, 0x00]).unwrap(),
            Some(Value::Ints(vec![1, 2]))
        );
        assert_eq!(
            decode_value(Some(VR::DS), b"0.5\\0.5 ").unwrap(),
            Some(Value::Strs(vec!["0.5".into(), "0.5".into()]))
        );
    }

    #[test]
    fn zero_length_yields_nothing() {
        assert_eq!(decode_value(Some(VR::LO), &[]).unwrap(), None);
        assert_eq!(decode_value(Some(VR::FD), &[]).unwrap(), None);
        assert_eq!(decode_value(None, &[]).unwrap(), None);
    }

    #[test]
    fn missing_list_decoder_is_an_error() {
        let raw = [0x28, 0x00, 0x10, 0x00, 0x28, 0x00, 0x11, 0x00];
        assert!(matches!(
            decode_value(Some(VR::AT), &raw),
            Err(Error::NoListDecoder {
                vr: VR::AT,
                multiplicity: 2,
                ..
            })
        ));
    }

    #[test]
    fn date_lists() {
        let value = decode_value(Some(VR::DA), b"20200101\\20200102 ")
            .unwrap()
            .unwrap();
        assert!(matches!(value, Value::Dates(ref d) if d.len() == 2));
        let value = decode_value(Some(VR::DA), b"20200101").unwrap().unwrap();
        assert!(matches!(value, Value::Date(_)));
    }

    #[test]
    fn unknown_representation_is_hex() {
        assert_eq!(
            decode_value(None, &[0xDE, 0xAD]).unwrap(),
            Some(Value::Strs(vec!["de".into(), "ad".into()]))
        );
        assert_eq!(
            decode_value(Some(VR::UN), &[0x01]).unwrap(),
            Some(Value::from("01"))
        );
    }
}
