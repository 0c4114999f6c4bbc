//! Coordinate Reference System types and utilities.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::bbox::BoundingBox;
use crate::proj4::Proj4Definition;

/// Projection names that describe a geographic (lon/lat) CRS.
pub const GEOGRAPHIC_PROJECTIONS: &[&str] = &["longlat", "latlong", "lonlat", "latlon"];

/// UTM hemisphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    /// Hemisphere of a UTM zone letter: `S`/`s` is south, anything else north.
    pub fn from_utm_letter(c: char) -> Self {
        if c.eq_ignore_ascii_case(&'S') {
            Hemisphere::South
        } else {
            Hemisphere::North
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Hemisphere::North => 'N',
            Hemisphere::South => 'S',
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A Universal Transverse Mercator zone (1-60) and hemisphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UtmZone {
    number: u8,
    hemisphere: Hemisphere,
}

impl UtmZone {
    pub const MIN_ZONE: u8 = 1;
    pub const MAX_ZONE: u8 = 60;

    /// Create a zone, returning `None` outside 1..=60.
    pub fn new(number: i64, hemisphere: Hemisphere) -> Option<Self> {
        let number = u8::try_from(number).ok()?;
        (Self::MIN_ZONE..=Self::MAX_ZONE)
            .contains(&number)
            .then_some(Self { number, hemisphere })
    }

    /// Recover a zone from a WGS84 UTM EPSG code (32601-32660, 32701-32760).
    pub fn from_wgs84_epsg(code: u32) -> Option<Self> {
        match code {
            32601..=32660 => Self::new(i64::from(code - 32600), Hemisphere::North),
            32701..=32760 => Self::new(i64::from(code - 32700), Hemisphere::South),
            _ => None,
        }
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }

    /// Central meridian of the zone in degrees.
    pub fn central_meridian(&self) -> f64 {
        -183.0 + 6.0 * f64::from(self.number)
    }

    /// Western and eastern longitude of the 6 degree zone band.
    pub fn longitude_range(&self) -> (f64, f64) {
        let cm = self.central_meridian();
        (cm - 3.0, cm + 3.0)
    }

    /// EPSG code of this zone on the WGS84 datum.
    pub fn wgs84_epsg(&self) -> u32 {
        let base = match self.hemisphere {
            Hemisphere::North => 32600,
            Hemisphere::South => 32700,
        };
        base + u32::from(self.number)
    }

    /// Nominal area of use: the zone band, 0-84N or 80S-0.
    pub fn bounds(&self) -> BoundingBox {
        let (west, east) = self.longitude_range();
        match self.hemisphere {
            Hemisphere::North => BoundingBox::new(west, 0.0, east, 84.0),
            Hemisphere::South => BoundingBox::new(west, -80.0, east, 0.0),
        }
    }
}

impl fmt::Display for UtmZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.number, self.hemisphere)
    }
}

/// A constructed coordinate reference system.
///
/// Always backed by a proj4 definition. CRSs resolved from an EPSG code, or
/// recognised as one, also carry that code and usually a display name.
#[derive(Debug, Clone, PartialEq)]
pub struct Crs {
    definition: Proj4Definition,
    epsg: Option<u32>,
    name: Option<String>,
}

impl Crs {
    pub fn new(definition: Proj4Definition) -> Self {
        Self {
            definition,
            epsg: None,
            name: None,
        }
    }

    pub fn with_epsg(mut self, code: u32) -> Self {
        self.epsg = Some(code);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn definition(&self) -> &Proj4Definition {
        &self.definition
    }

    pub fn projection(&self) -> &str {
        self.definition.projection()
    }

    /// proj4 representation of this CRS.
    pub fn proj4(&self) -> String {
        self.definition.to_proj4_string()
    }

    pub fn epsg(&self) -> Option<u32> {
        self.epsg
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn datum(&self) -> Option<&str> {
        self.definition.get("datum")
    }

    pub fn ellipsoid(&self) -> Option<&str> {
        self.definition.get("ellps")
    }

    pub fn units(&self) -> Option<&str> {
        self.definition.get("units")
    }

    /// Check if this is a geographic (lon/lat) CRS.
    pub fn is_geographic(&self) -> bool {
        GEOGRAPHIC_PROJECTIONS.contains(&self.projection())
    }

    /// UTM zone, for `+proj=utm` definitions with a valid zone.
    pub fn utm_zone(&self) -> Option<UtmZone> {
        if self.projection() != "utm" {
            return None;
        }
        let number = self.definition.get("zone")?.parse::<i64>().ok()?;
        let hemisphere = if self.definition.has_flag("south") {
            Hemisphere::South
        } else {
            Hemisphere::North
        };
        UtmZone::new(number, hemisphere)
    }

    /// Approximate geographic area where this CRS is meant to be used.
    ///
    /// Only known for geographic and UTM systems.
    pub fn area_of_use(&self) -> Option<BoundingBox> {
        if self.is_geographic() {
            return Some(BoundingBox::world());
        }
        self.utm_zone().map(|zone| zone.bounds())
    }

    /// Check whether two CRSs describe the same system.
    ///
    /// Matching EPSG codes are sufficient; otherwise the proj4 parameters are
    /// compared regardless of order.
    pub fn equivalent(&self, other: &Crs) -> bool {
        match (self.epsg, other.epsg) {
            (Some(a), Some(b)) if a == b => true,
            _ => self.definition.equivalent(&other.definition),
        }
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.epsg {
            Some(code) => write!(f, "EPSG:{}", code),
            None => write!(f, "{}", self.definition),
        }
    }
}
