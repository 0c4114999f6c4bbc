//! CRS construction from proj4 strings and EPSG codes.

use srs_common::{Crs, CrsBuildError, CrsResult, Hemisphere, Proj4Definition, UtmZone};
use tracing::debug;

use crate::epsg::EpsgRegistry;

/// Builds a CRS from a canonical proj4 string or an EPSG code.
///
/// The `Crs` type is left to the implementation so callers can substitute
/// their own CRS representation.
pub trait CrsBuilder {
    type Crs;

    fn from_proj4(&self, proj4: &str) -> Result<Self::Crs, CrsBuildError>;

    fn from_epsg(&self, code: &str) -> Result<Self::Crs, CrsBuildError>;
}

impl<B: CrsBuilder + ?Sized> CrsBuilder for &B {
    type Crs = B::Crs;

    fn from_proj4(&self, proj4: &str) -> Result<Self::Crs, CrsBuildError> {
        (**self).from_proj4(proj4)
    }

    fn from_epsg(&self, code: &str) -> Result<Self::Crs, CrsBuildError> {
        (**self).from_epsg(code)
    }
}

/// Whether `name` has the shape of a PROJ operation name (`utm`, `somerc`, `ob_tran`).
pub fn is_projection_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().map_or(false, |c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Check the projection-level rules a parsed definition must satisfy.
///
/// Any well-formed projection name is accepted; only `utm` has its
/// parameters checked.
pub fn validate_definition(definition: &Proj4Definition) -> CrsResult<()> {
    let projection = definition.projection();
    if !is_projection_name(projection) {
        return Err(CrsBuildError::InvalidProjectionName(projection.to_string()));
    }

    if projection == "utm" {
        let zone = definition
            .get("zone")
            .ok_or_else(|| CrsBuildError::InvalidUtmZone("missing +zone".to_string()))?;
        let number: i64 = zone
            .parse()
            .map_err(|_| CrsBuildError::InvalidUtmZone(zone.to_string()))?;
        UtmZone::new(number, Hemisphere::North)
            .ok_or_else(|| CrsBuildError::InvalidUtmZone(zone.to_string()))?;
    }

    Ok(())
}

/// Parse an EPSG code given as decimal digits.
pub fn parse_epsg_code(code: &str) -> CrsResult<u32> {
    if code.is_empty() || !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CrsBuildError::InvalidEpsgCode(code.to_string()));
    }
    code.parse()
        .map_err(|_| CrsBuildError::InvalidEpsgCode(code.to_string()))
}

/// Default [`CrsBuilder`] producing [`Crs`] values.
#[derive(Debug, Clone, Default)]
pub struct Proj4Builder {
    registry: EpsgRegistry,
}

impl Proj4Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(registry: EpsgRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &EpsgRegistry {
        &self.registry
    }
}

impl CrsBuilder for Proj4Builder {
    type Crs = Crs;

    fn from_proj4(&self, proj4: &str) -> CrsResult<Crs> {
        let definition = Proj4Definition::parse(proj4)?;
        validate_definition(&definition)?;

        let crs = Crs::new(definition);
        let crs = match (crs.datum(), crs.utm_zone()) {
            (Some("WGS84"), Some(zone)) => {
                let code = zone.wgs84_epsg();
                crs.with_epsg(code)
            }
            _ => crs,
        };

        debug!(proj4, epsg = ?crs.epsg(), "Constructed CRS from proj4 string");
        Ok(crs)
    }

    fn from_epsg(&self, code: &str) -> CrsResult<Crs> {
        let number = parse_epsg_code(code)?;
        let entry = self
            .registry
            .lookup(number)
            .ok_or(CrsBuildError::UnknownEpsgCode(number))?;

        debug!(code = number, name = %entry.name, "Resolved EPSG code");
        Ok(entry.to_crs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_any_projection_name() {
        for text in [
            "+proj=lcc +lat_1=33 +lat_2=45 +lon_0=-97",
            "+proj=somerc +lat_0=46.95 +lon_0=7.44 +ellps=bessel",
            "+proj=ob_tran +o_proj=longlat +o_lat_p=40",
            "+proj=krovak +ellps=bessel",
        ] {
            let def = Proj4Definition::parse(text).unwrap();
            assert!(validate_definition(&def).is_ok(), "{} should be accepted", text);
        }
    }

    #[test]
    fn test_validate_malformed_projection_name() {
        let def = Proj4Definition::parse("+proj=utm' +zone=32").unwrap();
        assert_eq!(
            validate_definition(&def),
            Err(CrsBuildError::InvalidProjectionName("utm'".to_string()))
        );
    }

    #[test]
    fn test_is_projection_name() {
        assert!(is_projection_name("utm"));
        assert!(is_projection_name("ob_tran"));
        assert!(is_projection_name("eqdc"));
        assert!(!is_projection_name(""));
        assert!(!is_projection_name("1utm"));
        assert!(!is_projection_name("utm,zone"));
        assert!(!is_projection_name("_merc"));
    }

    #[test]
    fn test_validate_utm_zone() {
        for bad in ["+proj=utm +datum=WGS84", "+proj=utm +zone=x", "+proj=utm +zone=0", "+proj=utm +zone=61"] {
            let def = Proj4Definition::parse(bad).unwrap();
            assert!(
                matches!(validate_definition(&def), Err(CrsBuildError::InvalidUtmZone(_))),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_parse_epsg_code() {
        assert_eq!(parse_epsg_code("4326"), Ok(4326));
        assert_eq!(parse_epsg_code("032632"), Ok(32632));
        assert!(parse_epsg_code("").is_err());
        assert!(parse_epsg_code("43 26").is_err());
        assert!(parse_epsg_code("+4326").is_err());
        assert!(parse_epsg_code("wgs84").is_err());
        assert!(parse_epsg_code("99999999999").is_err());
    }

    #[test]
    fn test_builder_by_reference() {
        fn build<B: CrsBuilder>(builder: B) -> Result<B::Crs, CrsBuildError> {
            builder.from_epsg("4326")
        }
        let builder = Proj4Builder::new();
        let crs = build(&builder).unwrap();
        assert_eq!(crs.epsg(), Some(4326));
    }
}
