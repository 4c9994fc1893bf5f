//! GeoJSON `Geometry` and `Feature` objects carrying a single PointZ.
//!
//! Only the point shape is converted to and from [`GeoPoint3D`]; other geometry types
//! round-trip through serde untouched but are rejected by the conversions.

use std::convert::TryFrom;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{error::*, interchange, value::GeoPoint3D};

pub const TYPE_POINT: &str = "Point";
pub const TYPE_FEATURE: &str = "Feature";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Value>,
}

impl Geometry {
    pub fn point(point: &GeoPoint3D) -> Self {
        Self {
            kind: String::from(TYPE_POINT),
            coordinates: Some(interchange::to_json_list(point)),
        }
    }

    pub fn is_point(&self) -> bool {
        self.kind.eq_ignore_ascii_case(TYPE_POINT)
    }
}

impl From<GeoPoint3D> for Geometry {
    fn from(point: GeoPoint3D) -> Self {
        Geometry::point(&point)
    }
}

impl TryFrom<&Geometry> for GeoPoint3D {
    type Error = Error;

    fn try_from(geometry: &Geometry) -> Result<Self> {
        if !geometry.is_point() {
            return Err(Error::InvalidGeometryKind(geometry.kind.clone()));
        }
        let coordinates = geometry
            .coordinates
            .as_ref()
            .ok_or(Error::MissingCoordinates)?;
        Ok(interchange::from_json_list(coordinates)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bbox: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Map<String, Value>>,
}

impl Feature {
    pub fn new(geometry: Geometry, properties: Map<String, Value>) -> Self {
        Self {
            kind: String::from(TYPE_FEATURE),
            bbox: Vec::new(),
            geometry: Some(geometry),
            properties: Some(properties),
        }
    }

    pub fn point(point: &GeoPoint3D, properties: Map<String, Value>) -> Self {
        Self::new(Geometry::point(point), properties)
    }

    pub fn to_point(&self) -> Result<GeoPoint3D> {
        let geometry = self.geometry.as_ref().ok_or(Error::MissingGeometry)?;
        GeoPoint3D::try_from(geometry)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
