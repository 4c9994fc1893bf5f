#![cfg_attr(docsrs, feature(doc_cfg))]

//! A codec for PostGIS `geometry(PointZ)` columns and the GeoJSON coordinate lists they are
//! exchanged as.
//!
//! # Example
//! ```
//! use layer_geom::{interchange, ColumnValue, GeoPoint3D};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Reading: PostGIS hands back EWKB, usually as hex text.
//! let mut point = GeoPoint3D::default();
//! point.scan("0101000080000000000000F03F00000000000000400000000000000840")?;
//! assert_eq!((point.srid(), point.x(), point.y(), point.z()), (4326, 1.0, 2.0, 3.0));
//!
//! // A NULL column leaves the point alone.
//! point.scan(ColumnValue::Null)?;
//! assert_eq!(point.x(), 1.0);
//!
//! // Writing: the column accepts EWKT text.
//! assert_eq!(point.value(), "SRID=4326;POINT(1.000000 2.000000 3.000000)");
//!
//! // Interchange: [x, y, z] without the SRID.
//! let list = interchange::to_list(&point);
//! assert_eq!(interchange::from_list(&list)?, GeoPoint3D::new(1.0, 2.0, 3.0));
//! # Ok(())
//! # }
//! ```

pub use column::ColumnValue;
pub use record::LayerData;
pub use value::GeoPoint3D;

pub mod column;
pub mod error;
pub mod ewkb;
#[cfg(feature = "json")]
#[cfg_attr(docsrs, doc(cfg(feature = "json")))]
pub mod geojson;
pub mod interchange;
pub mod record;
pub mod value;
