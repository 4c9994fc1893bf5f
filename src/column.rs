use bytes::Bytes;

/// A raw geometry column value handed over by the persistence layer.
///
/// Drivers return PostGIS geometries either as binary EWKB or as its hex text form;
/// both are accepted by [`GeoPoint3D::scan`](crate::GeoPoint3D::scan).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnValue {
    Null,
    Bytes(Bytes),
    Text(String),
}

impl ColumnValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ColumnValue::Null)
    }
}

impl Default for ColumnValue {
    fn default() -> Self {
        ColumnValue::Null
    }
}

impl From<Bytes> for ColumnValue {
    fn from(value: Bytes) -> Self {
        ColumnValue::Bytes(value)
    }
}

impl From<Vec<u8>> for ColumnValue {
    fn from(value: Vec<u8>) -> Self {
        ColumnValue::Bytes(Bytes::from(value))
    }
}

impl From<&[u8]> for ColumnValue {
    fn from(value: &[u8]) -> Self {
        ColumnValue::Bytes(Bytes::copy_from_slice(value))
    }
}

impl From<String> for ColumnValue {
    fn from(value: String) -> Self {
        ColumnValue::Text(value)
    }
}

impl From<&str> for ColumnValue {
    fn from(value: &str) -> Self {
        ColumnValue::Text(String::from(value))
    }
}

impl<T> From<Option<T>> for ColumnValue
where
    T: Into<ColumnValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(ColumnValue::Null, Into::into)
    }
}
