pub const FLAG_Z: u32 = 0x8000_0000;
pub const FLAG_M: u32 = 0x4000_0000;
pub const FLAG_SRID: u32 = 0x2000_0000;

const BASE_MASK: u32 = !(FLAG_Z | FLAG_M | FLAG_SRID);

/// OGC base geometry codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseType {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
    Unknown(u32),
}

impl BaseType {
    pub fn code(self) -> u32 {
        match self {
            BaseType::Point => 1,
            BaseType::LineString => 2,
            BaseType::Polygon => 3,
            BaseType::MultiPoint => 4,
            BaseType::MultiLineString => 5,
            BaseType::MultiPolygon => 6,
            BaseType::GeometryCollection => 7,
            BaseType::Unknown(code) => code,
        }
    }
}

impl From<u32> for BaseType {
    fn from(code: u32) -> Self {
        match code {
            1 => BaseType::Point,
            2 => BaseType::LineString,
            3 => BaseType::Polygon,
            4 => BaseType::MultiPoint,
            5 => BaseType::MultiLineString,
            6 => BaseType::MultiPolygon,
            7 => BaseType::GeometryCollection,
            code => BaseType::Unknown(code),
        }
    }
}

/// The EWKB geometry-type word split into its flags and base type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeometryType {
    pub base: BaseType,
    pub has_z: bool,
    pub has_m: bool,
    pub has_srid: bool,
}

impl GeometryType {
    /// The only shape this crate reads and writes: a Point with a Z ordinate.
    pub const POINT_Z: GeometryType = GeometryType {
        base: BaseType::Point,
        has_z: true,
        has_m: false,
        has_srid: false,
    };

    pub fn from_word(word: u32) -> Self {
        Self {
            base: BaseType::from(word & BASE_MASK),
            has_z: word & FLAG_Z != 0,
            has_m: word & FLAG_M != 0,
            has_srid: word & FLAG_SRID != 0,
        }
    }

    pub fn to_word(self) -> u32 {
        let mut word = self.base.code() & BASE_MASK;
        if self.has_z {
            word |= FLAG_Z;
        }
        if self.has_m {
            word |= FLAG_M;
        }
        if self.has_srid {
            word |= FLAG_SRID;
        }
        word
    }

    pub fn without_srid(self) -> Self {
        Self {
            has_srid: false,
            ..self
        }
    }

    pub fn with_srid(self) -> Self {
        Self {
            has_srid: true,
            ..self
        }
    }

    pub fn is_point_z(self) -> bool {
        self.without_srid() == Self::POINT_Z
    }
}

impl From<u32> for GeometryType {
    fn from(word: u32) -> Self {
        Self::from_word(word)
    }
}
