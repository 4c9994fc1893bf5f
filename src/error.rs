use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;
pub type DecodeResult<T> = std::result::Result<T, DecodeError>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("Expected a Point geometry, got {0:?}")]
    InvalidGeometryKind(String),
    #[error("Feature has no geometry")]
    MissingGeometry,
    #[error("Geometry has no coordinates")]
    MissingCoordinates,
    #[cfg(feature = "json")]
    #[error("JSON conversion failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures produced while turning a column value or a coordinate list into a point.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("Invalid hex encoding: {0}")]
    InvalidEncoding(#[from] hex::FromHexError),
    #[error("Invalid byte order flag: {0:#04x}")]
    InvalidByteOrder(u8),
    #[error("Unsupported geometry type: got {got:#010x}, expected {expected:#010x}")]
    UnsupportedGeometryType { got: u32, expected: u32 },
    #[error("Unexpected end of input while reading {stage}")]
    UnexpectedEof { stage: Stage },
    #[error("Expected 3 ordinates (X, Y, Z), got {got}")]
    WrongArity { got: usize },
    #[error("Ordinate at index {index} is not a number")]
    NonNumericOrdinate { index: usize },
    #[error("Coordinates are not a list")]
    NotAList,
}

/// The field being read when a buffer ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    ByteOrder,
    GeometryType,
    Srid,
    X,
    Y,
    Z,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::ByteOrder => "byte order",
            Stage::GeometryType => "geometry type",
            Stage::Srid => "SRID",
            Stage::X => "X",
            Stage::Y => "Y",
            Stage::Z => "Z",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eof_message_names_stage() {
        let err = DecodeError::UnexpectedEof { stage: Stage::Srid };
        assert_eq!(err.to_string(), "Unexpected end of input while reading SRID");
    }

    #[test]
    fn geometry_type_message_shows_both_words() {
        let err = DecodeError::UnsupportedGeometryType {
            got: 0x0000_0001,
            expected: 0x8000_0001,
        };
        assert_eq!(
            err.to_string(),
            "Unsupported geometry type: got 0x00000001, expected 0x80000001"
        );
    }

    #[test]
    fn decode_error_converts_into_crate_error() {
        let err: Error = DecodeError::WrongArity { got: 2 }.into();
        assert!(matches!(err, Error::Decode(DecodeError::WrongArity { got: 2 })));
    }
}
