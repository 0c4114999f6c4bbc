//! SRS header classification and CRS construction.
//!
//! A header is one line taken from the top of a GCP or coordinates file. Three
//! notations are understood, tried in this order:
//!
//! 1. `WGS84 UTM <zone><N|S>`, e.g. `WGS84 UTM 32N`
//! 2. any string containing `+proj`, optionally wrapped in single quotes
//! 3. `EPSG:<code>`, prefix matched case-insensitively

use projection::CrsBuilder;
use srs_common::{CrsBuildError, Hemisphere};
use tracing::debug;

use crate::error::SrsParseError;
use crate::logger::{ParseLogger, TracingLogger};

/// What a header asks the CRS builder to construct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCrsRequest {
    /// `WGS84 UTM 32N`. The zone is not range checked here.
    Utm {
        datum: String,
        zone: i32,
        hemisphere: Hemisphere,
    },
    /// A proj4 string, forwarded as-is apart from one stripped quote pair.
    Proj4(String),
    /// Text following the `epsg:` prefix, unvalidated.
    Epsg(String),
}

/// Assemble the proj4 string for a UTM zone.
pub fn utm_proj4(datum: &str, zone: i32, hemisphere: Hemisphere) -> String {
    let mut proj4 = format!(
        "+proj=utm +zone={} +datum={} +units=m +no_defs=True",
        zone, datum
    );
    if hemisphere == Hemisphere::South {
        proj4.push_str(" +south=True");
    }
    proj4
}

/// Remove at most one leading and one trailing single quote.
pub fn strip_single_quotes(s: &str) -> &str {
    let s = s.strip_prefix('\'').unwrap_or(s);
    s.strip_suffix('\'').unwrap_or(s)
}

/// Work out which notation a header uses.
///
/// The error is a short reason suitable for [`SrsParseError::reason`].
pub fn classify(header: &str) -> Result<ParsedCrsRequest, String> {
    let header = header.trim();
    let tokens: Vec<&str> = header.split(' ').collect();

    if tokens.len() >= 2 && tokens[0] == "WGS84" && tokens[1] == "UTM" {
        let (zone, hemisphere) = parse_utm_zone(tokens.get(2).copied().unwrap_or_default())?;
        return Ok(ParsedCrsRequest::Utm {
            datum: tokens[0].to_string(),
            zone,
            hemisphere,
        });
    }

    if header.contains("+proj") {
        return Ok(ParsedCrsRequest::Proj4(
            strip_single_quotes(header).to_string(),
        ));
    }

    if let Some(code) = strip_epsg_prefix(header) {
        return Ok(ParsedCrsRequest::Epsg(code.to_string()));
    }

    Err("unrecognized SRS notation".to_string())
}

/// Split `32N` into zone and hemisphere. Only `S` marks the south.
fn parse_utm_zone(field: &str) -> Result<(i32, Hemisphere), String> {
    let mut chars = field.chars();
    let letter = chars
        .next_back()
        .ok_or_else(|| "missing UTM zone".to_string())?;
    let number = chars.as_str();

    let zone = number
        .parse::<i32>()
        .map_err(|_| format!("invalid UTM zone '{}'", number))?;

    Ok((zone, Hemisphere::from_utm_letter(letter)))
}

fn strip_epsg_prefix(header: &str) -> Option<&str> {
    let prefix = header.get(..5)?;
    prefix
        .eq_ignore_ascii_case("epsg:")
        .then(|| &header[5..])
}

/// Turns SRS header lines into CRS values through a [`CrsBuilder`].
///
/// Parsing keeps no state between calls, so one parser can serve any number
/// of headers and threads.
#[derive(Debug, Clone)]
pub struct SrsHeaderParser<B, L = TracingLogger> {
    builder: B,
    logger: L,
}

impl<B: CrsBuilder> SrsHeaderParser<B, TracingLogger> {
    /// Create a parser that logs through `tracing`.
    pub fn new(builder: B) -> Self {
        Self {
            builder,
            logger: TracingLogger,
        }
    }
}

impl<B: CrsBuilder, L: ParseLogger> SrsHeaderParser<B, L> {
    pub fn with_logger(builder: B, logger: L) -> Self {
        Self { builder, logger }
    }

    pub fn builder(&self) -> &B {
        &self.builder
    }

    pub fn logger(&self) -> &L {
        &self.logger
    }

    /// Parse one header line into a CRS.
    ///
    /// Unrecognised notations and builder failures both come back as
    /// [`SrsParseError`] carrying the header as given.
    pub fn parse(&self, header: &str) -> Result<B::Crs, SrsParseError> {
        self.logger.info(&format!("Parsing SRS header: {}", header));

        let result = classify(header)
            .map_err(|reason| SrsParseError::new(header, reason))
            .and_then(|request| {
                self.build(&request)
                    .map_err(|e| SrsParseError::from_build_error(header, e))
            });

        if let Err(err) = &result {
            self.logger.error(&err.detailed_message());
        }
        result
    }

    /// Hand a classified request to the builder.
    pub fn build(&self, request: &ParsedCrsRequest) -> Result<B::Crs, CrsBuildError> {
        match request {
            ParsedCrsRequest::Utm {
                datum,
                zone,
                hemisphere,
            } => {
                let proj4 = utm_proj4(datum, *zone, *hemisphere);
                debug!(%proj4, "Assembled proj4 string from UTM header");
                self.builder.from_proj4(&proj4)
            }
            ParsedCrsRequest::Proj4(proj4) => {
                debug!(%proj4, "Using proj4 header");
                self.builder.from_proj4(proj4)
            }
            ParsedCrsRequest::Epsg(code) => {
                debug!(%code, "Using EPSG header");
                self.builder.from_epsg(code)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utm_proj4_template() {
        assert_eq!(
            utm_proj4("WGS84", 32, Hemisphere::North),
            "+proj=utm +zone=32 +datum=WGS84 +units=m +no_defs=True"
        );
        assert_eq!(
            utm_proj4("WGS84", 33, Hemisphere::South),
            "+proj=utm +zone=33 +datum=WGS84 +units=m +no_defs=True +south=True"
        );
    }

    #[test]
    fn test_strip_single_quotes() {
        assert_eq!(strip_single_quotes("'+proj=longlat'"), "+proj=longlat");
        assert_eq!(strip_single_quotes("''+proj=longlat''"), "'+proj=longlat'");
        assert_eq!(strip_single_quotes("'+proj=longlat"), "+proj=longlat");
        assert_eq!(strip_single_quotes("+proj=longlat'"), "+proj=longlat");
        assert_eq!(strip_single_quotes("+datum='x' +proj=a"), "+datum='x' +proj=a");
        assert_eq!(strip_single_quotes("'"), "");
    }

    #[test]
    fn test_classify_utm() {
        assert_eq!(
            classify("WGS84 UTM 32N"),
            Ok(ParsedCrsRequest::Utm {
                datum: "WGS84".to_string(),
                zone: 32,
                hemisphere: Hemisphere::North,
            })
        );
        assert_eq!(
            classify("  WGS84 UTM 7s \n"),
            Ok(ParsedCrsRequest::Utm {
                datum: "WGS84".to_string(),
                zone: 7,
                hemisphere: Hemisphere::South,
            })
        );
    }

    #[test]
    fn test_classify_utm_keeps_zone_unchecked() {
        assert!(matches!(
            classify("WGS84 UTM 99N"),
            Ok(ParsedCrsRequest::Utm { zone: 99, .. })
        ));
    }

    #[test]
    fn test_classify_malformed_utm() {
        assert_eq!(classify("WGS84 UTM"), Err("missing UTM zone".to_string()));
        assert_eq!(classify("WGS84 UTM  32N"), Err("missing UTM zone".to_string()));
        assert_eq!(
            classify("WGS84 UTM N"),
            Err("invalid UTM zone ''".to_string())
        );
        assert_eq!(
            classify("WGS84 UTM XXN"),
            Err("invalid UTM zone 'XX'".to_string())
        );
    }

    #[test]
    fn test_classify_utm_other_letters_are_north() {
        for header in ["WGS84 UTM 32X", "WGS84 UTM 32Q", "WGS84 UTM 32n"] {
            assert_eq!(
                classify(header),
                Ok(ParsedCrsRequest::Utm {
                    datum: "WGS84".to_string(),
                    zone: 32,
                    hemisphere: Hemisphere::North,
                }),
                "header {:?}",
                header
            );
        }
    }

    #[test]
    fn test_classify_utm_is_case_sensitive() {
        // falls through every branch
        assert!(classify("wgs84 utm 32N").is_err());
        assert!(classify("WGS84 Utm 32N").is_err());
    }

    #[test]
    fn test_classify_proj4() {
        assert_eq!(
            classify("'+proj=longlat +datum=WGS84 +no_defs'"),
            Ok(ParsedCrsRequest::Proj4(
                "+proj=longlat +datum=WGS84 +no_defs".to_string()
            ))
        );
    }

    #[test]
    fn test_classify_epsg() {
        assert_eq!(
            classify("EPSG:4326"),
            Ok(ParsedCrsRequest::Epsg("4326".to_string()))
        );
        assert_eq!(
            classify("epsg:32632"),
            Ok(ParsedCrsRequest::Epsg("32632".to_string()))
        );
        assert_eq!(
            classify("EpSg:abc"),
            Ok(ParsedCrsRequest::Epsg("abc".to_string()))
        );
        assert_eq!(classify("EPSG:"), Ok(ParsedCrsRequest::Epsg(String::new())));
    }

    #[test]
    fn test_classify_unrecognized() {
        for header in ["not a real srs", "", "   ", "WGS84", "EPSG 4326", "épsg:4326"] {
            assert_eq!(
                classify(header),
                Err("unrecognized SRS notation".to_string()),
                "header {:?}",
                header
            );
        }
    }
}
