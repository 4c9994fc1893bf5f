use chrono::{DateTime, Utc};
#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::{column::ColumnValue, error::*, value::GeoPoint3D};

/// Column type of the geometry column backing a [`LayerData`] row.
pub const GEOMETRY_COLUMN_TYPE: &str = "geometry(PointZ,4326)";

/// A stored layer entry: one point plus its identity and timestamps.
///
/// Records are created through [`LayerData::new`], which always assigns a fresh
/// identifier, or rebuilt from a database row with [`LayerData::from_row`].
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct LayerData {
    id: Uuid,
    created_at: DateTime<Utc>,
    last_modified_at: DateTime<Utc>,
    point: GeoPoint3D,
}

impl LayerData {
    pub fn new(point: GeoPoint3D) -> Self {
        let now = Utc::now();
        let record = Self {
            id: Uuid::new_v4(),
            created_at: now,
            last_modified_at: now,
            point,
        };
        debug!(id = %record.id, "created layer record");
        record
    }

    /// Rebuild a record from the columns of a stored row.
    ///
    /// A `NULL` geometry column yields a point at the origin with an unset SRID.
    pub fn from_row(
        id: Uuid,
        created_at: DateTime<Utc>,
        last_modified_at: DateTime<Utc>,
        geometry: impl Into<ColumnValue>,
    ) -> DecodeResult<Self> {
        let mut point = GeoPoint3D::default();
        point.scan(geometry)?;
        Ok(Self {
            id,
            created_at,
            last_modified_at,
            point,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_modified_at(&self) -> DateTime<Utc> {
        self.last_modified_at
    }

    pub fn point(&self) -> &GeoPoint3D {
        &self.point
    }

    pub fn set_point(&mut self, point: GeoPoint3D) {
        self.point = point;
        self.touch();
    }

    /// Bump the modification timestamp.
    pub fn touch(&mut self) {
        self.last_modified_at = Utc::now();
    }

    /// The value to write into the geometry column.
    pub fn geometry_value(&self) -> String {
        self.point.value()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::ewkb::{self, ByteOrder};

    #[test]
    fn new_assigns_distinct_ids() {
        let first = LayerData::new(GeoPoint3D::new(1.2, 21.2, 78.1));
        let second = LayerData::new(GeoPoint3D::new(1.2, 21.2, 78.1));
        assert_ne!(first.id(), second.id());
        assert!(!first.id().is_nil());
        assert_eq!(first.created_at(), first.last_modified_at());
    }

    #[test]
    fn geometry_value_is_ewkt() {
        let record = LayerData::new(GeoPoint3D::new(1.2, 21.2, 78.1));
        assert_eq!(
            record.geometry_value(),
            "SRID=4326;POINT(1.200000 21.200000 78.100000)"
        );
    }

    #[test]
    fn from_row_decodes_geometry() {
        let id = Uuid::new_v4();
        let created_at = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let point = GeoPoint3D::new(1.2, 21.2, 78.1);
        let record = LayerData::from_row(
            id,
            created_at,
            created_at,
            hex::encode(ewkb::encode_binary(&point, ByteOrder::LittleEndian)),
        )
        .unwrap();
        assert_eq!(record.id(), id);
        assert_eq!(record.created_at(), created_at);
        assert_eq!(record.point(), &point);
    }

    #[test]
    fn from_row_with_null_geometry() {
        let now = Utc::now();
        let record = LayerData::from_row(Uuid::new_v4(), now, now, ColumnValue::Null).unwrap();
        assert_eq!(record.point(), &GeoPoint3D::default());
        assert_eq!(record.point().srid(), 4326);
    }

    #[test]
    fn from_row_propagates_decode_errors() {
        let now = Utc::now();
        assert_eq!(
            LayerData::from_row(Uuid::new_v4(), now, now, "02").unwrap_err(),
            DecodeError::InvalidByteOrder(0x02)
        );
    }

    #[test]
    fn set_point_touches_record() {
        let mut record = LayerData::new(GeoPoint3D::new(0.0, 0.0, 0.0));
        let created_at = record.created_at();
        record.set_point(GeoPoint3D::new(1.0, 2.0, 3.0));
        assert_eq!(record.point(), &GeoPoint3D::new(1.0, 2.0, 3.0));
        assert!(record.last_modified_at() >= created_at);
        assert_eq!(record.created_at(), created_at);
    }
}
