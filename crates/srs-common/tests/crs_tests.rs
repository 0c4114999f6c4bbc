//! Tests for proj4 definitions and CRS descriptors.

use srs_common::{BoundingBox, Crs, Hemisphere, Proj4Definition, Proj4ParseError, UtmZone};

// ============================================================================
// Proj4Definition tests
// ============================================================================

#[test]
fn test_parse_web_mercator() {
    let def = Proj4Definition::parse(
        "+proj=merc +a=6378137 +b=6378137 +lat_ts=0 +lon_0=0 +x_0=0 +y_0=0 +k=1 +units=m +nadgrids=@null +wktext +no_defs",
    )
    .unwrap();
    assert_eq!(def.projection(), "merc");
    assert_eq!(def.get("nadgrids"), Some("@null"));
    assert!(def.has_flag("wktext"));
    assert_eq!(def.len(), 12);
}

#[test]
fn test_parse_keeps_towgs84_list() {
    let def = Proj4Definition::parse("+proj=longlat +ellps=intl +towgs84=-87,-98,-121,0,0,0,0")
        .unwrap();
    assert_eq!(def.get("towgs84"), Some("-87,-98,-121,0,0,0,0"));
}

#[test]
fn test_parse_quoted_value_is_kept_verbatim() {
    let def = Proj4Definition::parse("+proj=utm +zone=32 +datum='WGS84'").unwrap();
    assert_eq!(def.get("datum"), Some("'WGS84'"));
}

#[test]
fn test_parse_rejects_leading_quote() {
    let result = Proj4Definition::parse("'+proj=longlat +datum=WGS84'");
    assert!(matches!(result, Err(Proj4ParseError::MissingPlus(_))));
}

#[test]
fn test_reparse_is_stable() {
    let text = "+proj=utm +zone=32 +datum=WGS84 +units=m +no_defs=True";
    let first = Proj4Definition::parse(text).unwrap();
    let second = Proj4Definition::parse(&first.to_proj4_string()).unwrap();
    assert_eq!(first, second);
}

// ============================================================================
// Crs tests
// ============================================================================

#[test]
fn test_every_utm_zone_has_area_of_use() {
    for zone in 1..=60 {
        for (suffix, hemisphere) in [("", Hemisphere::North), (" +south", Hemisphere::South)] {
            let text = format!("+proj=utm +zone={} +datum=WGS84{}", zone, suffix);
            let crs = Crs::new(Proj4Definition::parse(&text).unwrap());
            let utm = crs.utm_zone().unwrap();
            assert_eq!(utm.number() as i64, zone);
            assert_eq!(utm.hemisphere(), hemisphere);

            let area = crs.area_of_use().unwrap();
            assert_eq!(area.width(), 6.0);
            assert!(area.contains(utm.central_meridian(), if suffix.is_empty() { 10.0 } else { -10.0 }));
        }
    }
}

#[test]
fn test_utm_zone_out_of_range_is_not_a_zone() {
    let crs = Crs::new(Proj4Definition::parse("+proj=utm +zone=61 +datum=WGS84").unwrap());
    assert_eq!(crs.utm_zone(), None);
    assert_eq!(crs.area_of_use(), None);
}

#[test]
fn test_named_crs() {
    let crs = Crs::new(Proj4Definition::parse("+proj=longlat +datum=WGS84 +no_defs").unwrap())
        .with_epsg(4326)
        .with_name("WGS 84");
    assert_eq!(crs.epsg(), Some(4326));
    assert_eq!(crs.name(), Some("WGS 84"));
    assert_eq!(crs.proj4(), "+proj=longlat +datum=WGS84 +no_defs");
}

// ============================================================================
// Serialization tests
// ============================================================================

#[test]
fn test_utm_zone_serde() {
    let zone = UtmZone::new(33, Hemisphere::South).unwrap();
    let json = serde_json::to_string(&zone).unwrap();
    assert_eq!(json, r#"{"number":33,"hemisphere":"South"}"#);
}

#[test]
fn test_bbox_serde() {
    let bbox = BoundingBox::new(6.0, 0.0, 12.0, 84.0);
    let json = serde_json::to_value(bbox).unwrap();
    assert_eq!(json["west"], 6.0);
    assert_eq!(json["north"], 84.0);
}
