pub use point_3d::GeoPoint3D;

pub(crate) mod conversions;
pub(crate) mod point_3d;

/// WGS 84 longitude/latitude. Used whenever a point's SRID is unset (zero).
pub const DEFAULT_SRID: u32 = 4326;

/// Decimal places used for ordinates in the EWKT text form.
pub const TEXT_PRECISION: usize = 6;

pub(crate) fn effective_srid(srid: u32) -> u32 {
    if srid == 0 {
        DEFAULT_SRID
    } else {
        srid
    }
}
