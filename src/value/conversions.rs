use std::convert::TryFrom;

use crate::{error::*, interchange, value::GeoPoint3D};

// ----------------------- FROM -----------------------

impl From<GeoPoint3D> for [f64; 3] {
    fn from(point: GeoPoint3D) -> Self {
        interchange::to_list(&point)
    }
}

impl From<[f64; 3]> for GeoPoint3D {
    fn from(list: [f64; 3]) -> Self {
        let [x, y, z] = list;
        GeoPoint3D::new(x, y, z)
    }
}

impl From<GeoPoint3D> for Vec<f64> {
    fn from(point: GeoPoint3D) -> Self {
        interchange::to_list(&point).to_vec()
    }
}

#[cfg(feature = "json")]
impl From<GeoPoint3D> for serde_json::Value {
    fn from(point: GeoPoint3D) -> Self {
        interchange::to_json_list(&point)
    }
}

// ----------------------- TRY FROM -----------------------

impl TryFrom<&[f64]> for GeoPoint3D {
    type Error = DecodeError;

    fn try_from(list: &[f64]) -> DecodeResult<Self> {
        interchange::from_list(list)
    }
}

impl TryFrom<Vec<f64>> for GeoPoint3D {
    type Error = DecodeError;

    fn try_from(list: Vec<f64>) -> DecodeResult<Self> {
        interchange::from_list(&list)
    }
}

#[cfg(feature = "json")]
impl TryFrom<&serde_json::Value> for GeoPoint3D {
    type Error = DecodeError;

    fn try_from(value: &serde_json::Value) -> DecodeResult<Self> {
        interchange::from_json_list(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_conversions() {
        let point = GeoPoint3D::from([1.0, 2.0, 3.0]);
        assert_eq!(point.srid(), 4326);
        assert_eq!(<[f64; 3]>::from(point), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn vec_conversions() {
        assert_eq!(Vec::<f64>::from(GeoPoint3D::new(1.0, 2.0, 3.0)), vec![1.0, 2.0, 3.0]);
        assert_eq!(
            GeoPoint3D::try_from(vec![1.0, 2.0]),
            Err(DecodeError::WrongArity { got: 2 })
        );
        assert_eq!(
            GeoPoint3D::try_from(&[7.0, 8.0, 9.0][..]).unwrap(),
            GeoPoint3D::new(7.0, 8.0, 9.0)
        );
    }
}
