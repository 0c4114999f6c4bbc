//! SRS header parsing for ground control point and coordinates files.
//!
//! Converts a free-form spatial reference line (`WGS84 UTM 32N`,
//! `EPSG:4326` or a proj4 string) into a CRS built by a
//! [`projection::CrsBuilder`].
//!
//! # Example
//!
//! ```
//! use projection::Proj4Builder;
//! use srs_header::SrsHeaderParser;
//!
//! let parser = SrsHeaderParser::new(Proj4Builder::new());
//! let crs = parser.parse("WGS84 UTM 32N").unwrap();
//! assert_eq!(crs.epsg(), Some(32632));
//! ```

pub mod error;
pub mod gcp;
pub mod logger;
pub mod parser;

pub use error::{SrsParseError, ACCEPTED_FORMATS};
pub use gcp::{header_line, GcpEntry, GcpFile, GcpFileError};
pub use logger::{ParseLogger, TracingLogger};
pub use parser::{classify, strip_single_quotes, utm_proj4, ParsedCrsRequest, SrsHeaderParser};
