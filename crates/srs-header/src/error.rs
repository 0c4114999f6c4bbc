//! Error returned when an SRS header cannot be turned into a CRS.

use srs_common::CrsBuildError;
use thiserror::Error;

/// Short list of accepted notations, used in one-line messages.
pub const ACCEPTED_FORMATS: &str =
    "accepted formats are EPSG:*****, WGS84 UTM **(N|S) or a valid proj4 string";

/// Failure to parse an SRS header.
///
/// Raised both when the header matches no known notation and when the CRS
/// builder rejects the request derived from it. The offending header is kept
/// exactly as it was supplied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Could not parse SRS header '{header}': {reason} ({formats})", formats = ACCEPTED_FORMATS)]
pub struct SrsParseError {
    header: String,
    reason: String,
    #[source]
    build_error: Option<CrsBuildError>,
}

impl SrsParseError {
    pub fn new(header: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            reason: reason.into(),
            build_error: None,
        }
    }

    pub fn from_build_error(header: impl Into<String>, error: CrsBuildError) -> Self {
        Self {
            header: header.into(),
            reason: error.to_string(),
            build_error: Some(error),
        }
    }

    /// The header line as supplied by the caller.
    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// The builder failure, if the header was recognised but could not be built.
    pub fn build_error(&self) -> Option<&CrsBuildError> {
        self.build_error.as_ref()
    }

    /// Multi-line explanation meant for the person who wrote the file.
    pub fn detailed_message(&self) -> String {
        format!(
            "There is a problem with the SRS header of your coordinates/GCP file.\n\n\
             The line: {}\n\n\
             Is not valid ({}). Projections that are valid include:\n \
             - EPSG:*****\n \
             - WGS84 UTM **(N|S)\n \
             - Any valid proj4 string (for example, +proj=utm +zone=32 +north +ellps=WGS84 +datum=WGS84 +units=m +no_defs)\n\n\
             Modify your input and try again.",
            self.header, self.reason
        )
    }
}
