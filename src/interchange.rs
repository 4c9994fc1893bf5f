//! Conversion between [`GeoPoint3D`] and the `[x, y, z]` coordinate list used by GeoJSON
//! and other structured interchange formats.
//!
//! The list form never carries an SRID; every point built from a list gets
//! [`DEFAULT_SRID`].

use crate::{
    error::*,
    value::{GeoPoint3D, DEFAULT_SRID},
};

pub const ORDINATE_COUNT: usize = 3;

pub fn to_list(point: &GeoPoint3D) -> [f64; ORDINATE_COUNT] {
    [point.x, point.y, point.z]
}

pub fn from_list(list: &[f64]) -> DecodeResult<GeoPoint3D> {
    let mut point = GeoPoint3D::default();
    point.assign_list(list)?;
    Ok(point)
}

impl GeoPoint3D {
    /// Overwrite X, Y and Z from a 3-element list and reset the SRID to [`DEFAULT_SRID`].
    pub fn assign_list(&mut self, list: &[f64]) -> DecodeResult<()> {
        match *list {
            [x, y, z] => {
                *self = GeoPoint3D::with_srid(DEFAULT_SRID, x, y, z);
                Ok(())
            }
            _ => Err(DecodeError::WrongArity { got: list.len() }),
        }
    }

    pub fn to_list(&self) -> [f64; ORDINATE_COUNT] {
        to_list(self)
    }
}

#[cfg(feature = "json")]
pub fn to_json_list(point: &GeoPoint3D) -> serde_json::Value {
    serde_json::Value::from(to_list(point).to_vec())
}

#[cfg(feature = "json")]
pub fn from_json_list(value: &serde_json::Value) -> DecodeResult<GeoPoint3D> {
    let items = value.as_array().ok_or(DecodeError::NotAList)?;
    if items.len() != ORDINATE_COUNT {
        return Err(DecodeError::WrongArity { got: items.len() });
    }
    let mut ordinates = [0.0; ORDINATE_COUNT];
    for (index, (item, ordinate)) in items.iter().zip(ordinates.iter_mut()).enumerate() {
        *ordinate = item
            .as_f64()
            .ok_or(DecodeError::NonNumericOrdinate { index })?;
    }
    from_list(&ordinates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_list_drops_srid() {
        let point = GeoPoint3D::with_srid(3857, 1.2, 21.2, 78.1);
        assert_eq!(to_list(&point), [1.2, 21.2, 78.1]);
        assert_eq!(point.to_list(), [1.2, 21.2, 78.1]);
    }

    #[test]
    fn from_list_assigns_default_srid() {
        let point = from_list(&[1.2, 21.2, 78.1]).unwrap();
        assert_eq!(point, GeoPoint3D::with_srid(4326, 1.2, 21.2, 78.1));
    }

    #[test]
    fn from_list_checks_arity() {
        assert_eq!(
            from_list(&[1.2, 21.2]),
            Err(DecodeError::WrongArity { got: 2 })
        );
        assert_eq!(from_list(&[]), Err(DecodeError::WrongArity { got: 0 }));
        assert_eq!(
            from_list(&[1.0, 2.0, 3.0, 4.0]),
            Err(DecodeError::WrongArity { got: 4 })
        );
    }

    #[test]
    fn assign_list_overwrites_srid() {
        let mut point = GeoPoint3D::with_srid(2154, 0.0, 0.0, 0.0);
        point.assign_list(&[4.0, 5.0, 6.0]).unwrap();
        assert_eq!(point, GeoPoint3D::with_srid(4326, 4.0, 5.0, 6.0));
    }

    #[test]
    fn failed_assign_keeps_point() {
        let mut point = GeoPoint3D::with_srid(2154, 1.0, 2.0, 3.0);
        assert!(point.assign_list(&[4.0]).is_err());
        assert_eq!(point, GeoPoint3D::with_srid(2154, 1.0, 2.0, 3.0));
    }

    #[cfg(feature = "json")]
    mod json {
        use serde_json::json;

        use super::*;

        #[test]
        fn json_list_round_trip() {
            let point = GeoPoint3D::with_srid(3857, 1.2, 21.2, 78.1);
            let list = to_json_list(&point);
            assert_eq!(list, json!([1.2, 21.2, 78.1]));
            assert_eq!(
                from_json_list(&list).unwrap(),
                GeoPoint3D::new(1.2, 21.2, 78.1)
            );
        }

        #[test]
        fn json_integers_are_numbers() {
            assert_eq!(
                from_json_list(&json!([1, 2, 3])).unwrap(),
                GeoPoint3D::new(1.0, 2.0, 3.0)
            );
        }

        #[test]
        fn json_list_errors() {
            assert_eq!(
                from_json_list(&json!({ "x": 1.0 })),
                Err(DecodeError::NotAList)
            );
            assert_eq!(
                from_json_list(&json!([1.0, 2.0])),
                Err(DecodeError::WrongArity { got: 2 })
            );
            assert_eq!(
                from_json_list(&json!([1.0, "2.0", 3.0])),
                Err(DecodeError::NonNumericOrdinate { index: 1 })
            );
        }
    }
}
