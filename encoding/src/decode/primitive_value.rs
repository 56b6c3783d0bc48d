//! Decoders of binary numeric values, always in little endian.
//!
//! Scalar decoders require the value to hold exactly one element,
//! list decoders require a whole number of elements.
//! Integer lists are widened to `i64`, float lists to `f64`.

use crate::decode::{BadValueLengthSnafu, ReadValueSnafu, Result, ValueOverflowSnafu};
use byteordered::byteorder::LittleEndian;
use byteordered::{ByteOrdered, StaticEndianness};
use dcmtree_core::header::VR;
use dcmtree_core::value::Value;
use snafu::{ensure, OptionExt, ResultExt};
use std::io;

type LeReader<'a> = ByteOrdered<&'a [u8], StaticEndianness<LittleEndian>>;

/// Read all elements of type `T` in the value.
fn read_values<T, F>(vr: VR, bytes: &[u8], read_into: F) -> Result<Vec<T>>
where
    T: Default + Clone,
    F: FnOnce(LeReader<'_>, &mut [T]) -> io::Result<()>,
{
    let size = std::mem::size_of::<T>();
    ensure!(
        bytes.len() % size == 0,
        BadValueLengthSnafu {
            vr,
            len: bytes.len(),
            size
        }
    );
    let mut out = vec![T::default(); bytes.len() / size];
    read_into(ByteOrdered::le(bytes), &mut out).context(ReadValueSnafu { vr })?;
    Ok(out)
}

/// Read the single element of type `T` in the value.
fn read_one<T, F>(vr: VR, bytes: &[u8], read: F) -> Result<T>
where
    F: FnOnce(LeReader<'_>) -> io::Result<T>,
{
    let size = std::mem::size_of::<T>();
    ensure!(
        bytes.len() == size,
        BadValueLengthSnafu {
            vr,
            len: bytes.len(),
            size
        }
    );
    read(ByteOrdered::le(bytes)).context(ReadValueSnafu { vr })
}

fn widen_unsigned(vr: VR, values: Vec<u64>) -> Result<Value> {
    values
        .into_iter()
        .map(|v| {
            i64::try_from(v).ok().context(ValueOverflowSnafu {
                vr,
                value: v.to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()
        .map(Value::Ints)
}

macro_rules! scalar_decoder {
    ($name: ident, $vr: expr, $read: ident, $variant: ident) => {
        pub(crate) fn $name(bytes: &[u8]) -> Result<Option<Value>> {
            read_one($vr, bytes, |mut r| r.$read()).map(|v| Some(Value::$variant(v)))
        }
    };
}

macro_rules! list_decoder {
    ($name: ident, $vr: expr, $t: ty, $read_into: ident, $variant: ident, $widen: ty) => {
        pub(crate) fn $name(bytes: &[u8]) -> Result<Option<Value>> {
            let values: Vec<$t> = read_values($vr, bytes, |mut r, out| r.$read_into(out))?;
            Ok(Some(Value::$variant(
                values.into_iter().map(<$widen>::from).collect(),
            )))
        }
    };
}

scalar_decoder!(scalar_fl, VR::FL, read_f32, F32);
scalar_decoder!(scalar_fd, VR::FD, read_f64, F64);
scalar_decoder!(scalar_ss, VR::SS, read_i16, I16);
scalar_decoder!(scalar_sl, VR::SL, read_i32, I32);
scalar_decoder!(scalar_sv, VR::SV, read_i64, I64);
scalar_decoder!(scalar_us, VR::US, read_u16, U16);
scalar_decoder!(scalar_ul, VR::UL, read_u32, U32);
scalar_decoder!(scalar_uv, VR::UV, read_u64, U64);
scalar_decoder!(scalar_of, VR::OF, read_f32, F32);
scalar_decoder!(scalar_od, VR::OD, read_f64, F64);
scalar_decoder!(scalar_ol, VR::OL, read_u32, U32);
scalar_decoder!(scalar_ov, VR::OV, read_u64, U64);

list_decoder!(list_fl, VR::FL, f32, read_f32_into, Floats, f64);
list_decoder!(list_fd, VR::FD, f64, read_f64_into, Floats, f64);
list_decoder!(list_ss, VR::SS, i16, read_i16_into, Ints, i64);
list_decoder!(list_sl, VR::SL, i32, read_i32_into, Ints, i64);
list_decoder!(list_sv, VR::SV, i64, read_i64_into, Ints, i64);
list_decoder!(list_us, VR::US, u16, read_u16_into, Ints, i64);
list_decoder!(list_ul, VR::UL, u32, read_u32_into, Ints, i64);
list_decoder!(list_of, VR::OF, f32, read_f32_into, Floats, f64);
list_decoder!(list_od, VR::OD, f64, read_f64_into, Floats, f64);
list_decoder!(list_ol, VR::OL, u32, read_u32_into, Ints, i64);

pub(crate) fn list_uv(bytes: &[u8]) -> Result<Option<Value>> {
    let values: Vec<u64> = read_values(VR::UV, bytes, |mut r, out| r.read_u64_into(out))?;
    widen_unsigned(VR::UV, values).map(Some)
}

pub(crate) fn list_ov(bytes: &[u8]) -> Result<Option<Value>> {
    let values: Vec<u64> = read_values(VR::OV, bytes, |mut r, out| r.read_u64_into(out))?;
    widen_unsigned(VR::OV, values).map(Some)
}
