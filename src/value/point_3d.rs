use std::fmt;

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    column::ColumnValue,
    error::*,
    ewkb::{self, PointZ},
    value::{effective_srid, DEFAULT_SRID},
};

/// A point with X, Y and Z ordinates tagged with a spatial reference system.
///
/// An SRID of zero means "unset"; [`srid`](GeoPoint3D::srid) and the EWKT text form both
/// report [`DEFAULT_SRID`] for such a point.
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct GeoPoint3D {
    pub(crate) srid: u32,
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) z: f64,
}

impl GeoPoint3D {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self::with_srid(DEFAULT_SRID, x, y, z)
    }

    pub fn with_srid(srid: u32, x: f64, y: f64, z: f64) -> Self {
        Self { srid, x, y, z }
    }

    /// Decode a point from raw EWKB bytes.
    ///
    /// If the input carries no SRID, the returned point's SRID is left unset.
    pub fn from_ewkb(bytes: &[u8]) -> DecodeResult<Self> {
        let mut point = Self::default();
        point.apply(ewkb::decode(bytes)?);
        Ok(point)
    }

    /// Decode a point from the hex text form of EWKB, as PostGIS returns it.
    pub fn from_ewkb_hex(text: &str) -> DecodeResult<Self> {
        let mut point = Self::default();
        point.apply(ewkb::decode_hex(text)?);
        Ok(point)
    }

    /// The effective SRID: the stored one, or [`DEFAULT_SRID`] if it is unset.
    pub fn srid(&self) -> u32 {
        effective_srid(self.srid)
    }

    /// The stored SRID, zero if it was never assigned.
    pub fn raw_srid(&self) -> u32 {
        self.srid
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    /// Overwrite this point from a database column value.
    ///
    /// A `NULL` column leaves the point untouched. When the geometry carries no SRID the
    /// stored SRID is kept as it was. On error nothing is modified.
    pub fn scan(&mut self, value: impl Into<ColumnValue>) -> DecodeResult<()> {
        let decoded = match value.into() {
            ColumnValue::Null => {
                trace!("NULL geometry column, point left unchanged");
                return Ok(());
            }
            ColumnValue::Bytes(bytes) => ewkb::decode(bytes),
            ColumnValue::Text(text) => ewkb::decode_hex(&text),
        };
        match decoded {
            Ok(point) => {
                self.apply(point);
                Ok(())
            }
            Err(err) => {
                debug!(%err, "failed to decode geometry column");
                Err(err)
            }
        }
    }

    /// The value to store in a geometry column: EWKT text such as
    /// `SRID=4326;POINT(1.000000 2.000000 3.000000)`.
    pub fn value(&self) -> String {
        ewkb::encode_text(self)
    }

    fn apply(&mut self, decoded: PointZ) {
        if let Some(srid) = decoded.srid {
            self.srid = srid;
        }
        self.x = decoded.x;
        self.y = decoded.y;
        self.z = decoded.z;
    }
}

impl fmt::Display for GeoPoint3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value())
    }
}
