//! EPSG code registry.
//!
//! Holds a small built-in set of well-known systems, every WGS84 UTM zone
//! (EPSG:32601-32660 and EPSG:32701-32760), and any definitions supplied by
//! configuration. Configured definitions take precedence over built-ins.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use srs_common::{Crs, CrsBuildError, CrsResult, Hemisphere, Proj4Definition, UtmZone};
use tracing::warn;

use crate::builder::validate_definition;

/// Built-in (code, name, proj4) entries.
const BUILTIN: &[(u32, &str, &str)] = &[
    (4326, "WGS 84", "+proj=longlat +datum=WGS84 +no_defs"),
    (4269, "NAD83", "+proj=longlat +datum=NAD83 +no_defs"),
    (4258, "ETRS89", "+proj=longlat +ellps=GRS80 +no_defs"),
    (
        3857,
        "WGS 84 / Pseudo-Mercator",
        "+proj=merc +a=6378137 +b=6378137 +lat_ts=0 +lon_0=0 +x_0=0 +y_0=0 +k=1 +units=m +nadgrids=@null +wktext +no_defs",
    ),
    (
        900913,
        "Google Maps Global Mercator",
        "+proj=merc +a=6378137 +b=6378137 +lat_ts=0 +lon_0=0 +x_0=0 +y_0=0 +k=1 +units=m +nadgrids=@null +wktext +no_defs",
    ),
    (
        5070,
        "NAD83 / Conus Albers",
        "+proj=aea +lat_0=23 +lon_0=-96 +lat_1=29.5 +lat_2=45.5 +x_0=0 +y_0=0 +datum=NAD83 +units=m +no_defs",
    ),
    (
        3413,
        "WGS 84 / NSIDC Sea Ice Polar Stereographic North",
        "+proj=stere +lat_0=90 +lat_ts=70 +lon_0=-45 +k=1 +x_0=0 +y_0=0 +datum=WGS84 +units=m +no_defs",
    ),
    (
        3031,
        "WGS 84 / Antarctic Polar Stereographic",
        "+proj=stere +lat_0=-90 +lat_ts=-71 +lon_0=0 +k=1 +x_0=0 +y_0=0 +datum=WGS84 +units=m +no_defs",
    ),
];

/// A user-supplied EPSG definition, as found in a registry config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpsgDefinition {
    pub code: u32,
    pub name: String,
    pub proj4: String,
}

/// A resolved registry entry.
#[derive(Debug, Clone, PartialEq)]
pub struct EpsgEntry {
    pub code: u32,
    pub name: String,
    pub definition: Proj4Definition,
}

impl EpsgEntry {
    pub fn to_crs(&self) -> Crs {
        Crs::new(self.definition.clone())
            .with_epsg(self.code)
            .with_name(self.name.clone())
    }
}

#[derive(Debug, Clone, Default)]
pub struct EpsgRegistry {
    custom: HashMap<u32, EpsgEntry>,
}

impl EpsgRegistry {
    /// Registry with only the built-in entries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or override) entries, validating each proj4 string.
    pub fn with_definitions<I>(mut self, definitions: I) -> CrsResult<Self>
    where
        I: IntoIterator<Item = EpsgDefinition>,
    {
        for def in definitions {
            let definition = Proj4Definition::parse(&def.proj4)
                .map_err(CrsBuildError::from)
                .and_then(|parsed| validate_definition(&parsed).map(|_| parsed))
                .map_err(|e| CrsBuildError::InvalidDefinition {
                    code: def.code,
                    message: e.to_string(),
                })?;

            if self.builtin(def.code).is_some() {
                warn!(code = def.code, "Overriding built-in EPSG definition");
            }

            self.custom.insert(
                def.code,
                EpsgEntry {
                    code: def.code,
                    name: def.name,
                    definition,
                },
            );
        }
        Ok(self)
    }

    /// Look up an EPSG code.
    pub fn lookup(&self, code: u32) -> Option<EpsgEntry> {
        if let Some(entry) = self.custom.get(&code) {
            return Some(entry.clone());
        }
        self.builtin(code)
    }

    pub fn contains(&self, code: u32) -> bool {
        self.lookup(code).is_some()
    }

    /// Every known code in ascending order.
    pub fn codes(&self) -> Vec<u32> {
        let mut codes: Vec<u32> = BUILTIN
            .iter()
            .map(|(code, _, _)| *code)
            .chain(32601..=32660)
            .chain(32701..=32760)
            .chain(self.custom.keys().copied())
            .collect();
        codes.sort_unstable();
        codes.dedup();
        codes
    }

    pub fn len(&self) -> usize {
        self.codes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn builtin(&self, code: u32) -> Option<EpsgEntry> {
        if let Some(zone) = UtmZone::from_wgs84_epsg(code) {
            return utm_entry(zone);
        }

        let (code, name, proj4) = BUILTIN.iter().find(|(c, _, _)| *c == code)?;
        let definition = Proj4Definition::parse(proj4).ok()?;
        Some(EpsgEntry {
            code: *code,
            name: name.to_string(),
            definition,
        })
    }
}

fn utm_entry(zone: UtmZone) -> Option<EpsgEntry> {
    let mut proj4 = format!(
        "+proj=utm +zone={} +datum=WGS84 +units=m +no_defs",
        zone.number()
    );
    if zone.hemisphere() == Hemisphere::South {
        proj4.push_str(" +south");
    }

    Some(EpsgEntry {
        code: zone.wgs84_epsg(),
        name: format!("WGS 84 / UTM zone {}", zone),
        definition: Proj4Definition::parse(&proj4).ok()?,
    })
}
