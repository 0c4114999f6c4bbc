//! Error types shared by CRS construction and header parsing.

use thiserror::Error;

use crate::proj4::Proj4ParseError;

/// Result type alias using CrsBuildError.
pub type CrsResult<T> = Result<T, CrsBuildError>;

/// Failure to construct a CRS from a proj4 string or EPSG code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CrsBuildError {
    #[error("Invalid proj4 string: {0}")]
    InvalidProj4(#[from] Proj4ParseError),

    #[error("Invalid projection name: {0}")]
    InvalidProjectionName(String),

    #[error("Invalid UTM zone: {0}")]
    InvalidUtmZone(String),

    #[error("Invalid EPSG code: {0}")]
    InvalidEpsgCode(String),

    #[error("Unknown EPSG code: {0}")]
    UnknownEpsgCode(u32),

    #[error("Invalid definition for EPSG:{code}: {message}")]
    InvalidDefinition { code: u32, message: String },
}

impl CrsBuildError {
    /// Whether the failure comes from the EPSG lookup rather than a proj4 string.
    pub fn is_epsg_error(&self) -> bool {
        matches!(
            self,
            CrsBuildError::InvalidEpsgCode(_)
                | CrsBuildError::UnknownEpsgCode(_)
                | CrsBuildError::InvalidDefinition { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            CrsBuildError::UnknownEpsgCode(99999).to_string(),
            "Unknown EPSG code: 99999"
        );
        assert_eq!(
            CrsBuildError::from(Proj4ParseError::MissingProj).to_string(),
            "Invalid proj4 string: proj4 string has no +proj parameter"
        );
    }

    #[test]
    fn test_is_epsg_error() {
        assert!(CrsBuildError::InvalidEpsgCode("abc".into()).is_epsg_error());
        assert!(!CrsBuildError::InvalidProjectionName("foo".into()).is_epsg_error());
    }
}
