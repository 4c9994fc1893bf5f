//! Extended Well-Known Binary (EWKB) reading and EWKT writing for PointZ geometries.
//!
//! Reads go through [`decode`] (raw bytes) or [`decode_hex`] (hex text, as returned by
//! PostGIS). Writes produce text via [`encode_text`]; [`encode_binary`] exists for callers
//! that need the binary form.

use std::convert::TryFrom;
use std::mem;

use bytes::{Buf, BufMut, Bytes, BytesMut};
use tracing::trace;

pub use geometry_type::{BaseType, GeometryType, FLAG_M, FLAG_SRID, FLAG_Z};

use crate::{
    error::*,
    value::{effective_srid, GeoPoint3D, TEXT_PRECISION},
};

pub(crate) mod geometry_type;

pub(crate) const MARKER_BIG_ENDIAN: u8 = 0x00;
pub(crate) const MARKER_LITTLE_ENDIAN: u8 = 0x01;

/// Type word of a PointZ without the SRID flag.
pub const WKB_POINT_Z: u32 = 0x8000_0001;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    BigEndian,
    LittleEndian,
}

impl ByteOrder {
    pub fn marker(self) -> u8 {
        match self {
            ByteOrder::BigEndian => MARKER_BIG_ENDIAN,
            ByteOrder::LittleEndian => MARKER_LITTLE_ENDIAN,
        }
    }
}

impl TryFrom<u8> for ByteOrder {
    type Error = DecodeError;

    fn try_from(marker: u8) -> DecodeResult<Self> {
        match marker {
            MARKER_BIG_ENDIAN => Ok(ByteOrder::BigEndian),
            MARKER_LITTLE_ENDIAN => Ok(ByteOrder::LittleEndian),
            _ => Err(DecodeError::InvalidByteOrder(marker)),
        }
    }
}

/// A fully decoded PointZ. `srid` is `None` when the type word had no SRID flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointZ {
    pub srid: Option<u32>,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

struct Reader<B: Buf> {
    buf: B,
    order: ByteOrder,
}

impl<B: Buf> Reader<B> {
    fn ensure(&self, len: usize, stage: Stage) -> DecodeResult<()> {
        if self.buf.remaining() < len {
            Err(DecodeError::UnexpectedEof { stage })
        } else {
            Ok(())
        }
    }

    fn read_u32(&mut self, stage: Stage) -> DecodeResult<u32> {
        self.ensure(mem::size_of::<u32>(), stage)?;
        Ok(match self.order {
            ByteOrder::BigEndian => self.buf.get_u32(),
            ByteOrder::LittleEndian => self.buf.get_u32_le(),
        })
    }

    fn read_f64(&mut self, stage: Stage) -> DecodeResult<f64> {
        self.ensure(mem::size_of::<f64>(), stage)?;
        Ok(match self.order {
            ByteOrder::BigEndian => self.buf.get_f64(),
            ByteOrder::LittleEndian => self.buf.get_f64_le(),
        })
    }
}

/// Decode a PointZ from raw EWKB. Bytes after the Z ordinate are ignored.
pub fn decode(mut buf: impl Buf) -> DecodeResult<PointZ> {
    if !buf.has_remaining() {
        return Err(DecodeError::UnexpectedEof {
            stage: Stage::ByteOrder,
        });
    }
    let order = ByteOrder::try_from(buf.get_u8())?;
    let mut reader = Reader { buf, order };

    let word = reader.read_u32(Stage::GeometryType)?;
    let geometry_type = GeometryType::from_word(word);
    if !geometry_type.is_point_z() {
        return Err(DecodeError::UnsupportedGeometryType {
            got: word & !FLAG_SRID,
            expected: WKB_POINT_Z,
        });
    }
    trace!(?order, ?geometry_type, "decoding EWKB header");

    let srid = if geometry_type.has_srid {
        Some(reader.read_u32(Stage::Srid)?)
    } else {
        None
    };
    let x = reader.read_f64(Stage::X)?;
    let y = reader.read_f64(Stage::Y)?;
    let z = reader.read_f64(Stage::Z)?;

    Ok(PointZ { srid, x, y, z })
}

/// Decode a PointZ from the hex text form of EWKB (upper or lower case).
pub fn decode_hex(text: &str) -> DecodeResult<PointZ> {
    let bytes = hex::decode(text)?;
    decode(bytes.as_slice())
}

/// EWKT text for a point: `SRID=<srid>;POINT(<x> <y> <z>)`.
///
/// An unset SRID is written as [`DEFAULT_SRID`](crate::value::DEFAULT_SRID). Ordinates are
/// written with [`TEXT_PRECISION`] decimal places, so finer digits do not survive a write.
pub fn encode_text(point: &GeoPoint3D) -> String {
    format!(
        "SRID={};POINT({:.prec$} {:.prec$} {:.prec$})",
        effective_srid(point.srid),
        point.x,
        point.y,
        point.z,
        prec = TEXT_PRECISION
    )
}

/// Binary EWKB for a point, always carrying the (effective) SRID.
pub fn encode_binary(point: &GeoPoint3D, order: ByteOrder) -> Bytes {
    let mut bytes = BytesMut::with_capacity(
        // Marker, type word, SRID, three ordinates
        mem::size_of::<u8>() + mem::size_of::<u32>() * 2 + mem::size_of::<f64>() * 3,
    );
    let word = GeometryType::POINT_Z.with_srid().to_word();
    let srid = effective_srid(point.srid);
    bytes.put_u8(order.marker());
    match order {
        ByteOrder::BigEndian => {
            bytes.put_u32(word);
            bytes.put_u32(srid);
            bytes.put_f64(point.x);
            bytes.put_f64(point.y);
            bytes.put_f64(point.z);
        }
        ByteOrder::LittleEndian => {
            bytes.put_u32_le(word);
            bytes.put_u32_le(srid);
            bytes.put_f64_le(point.x);
            bytes.put_f64_le(point.y);
            bytes.put_f64_le(point.z);
        }
    }
    bytes.freeze()
}
