//! Ground control point files.
//!
//! The first non-blank line of a GCP file (and of a coordinates file) is the
//! SRS header. Each following line is
//! `geo_x geo_y geo_z pixel_x pixel_y image_name [extra ...]`.
//! Blank lines and lines starting with `#` are ignored.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use projection::CrsBuilder;
use thiserror::Error;

use crate::error::SrsParseError;
use crate::logger::ParseLogger;
use crate::parser::SrsHeaderParser;

/// Return the SRS header line of a GCP or coordinates file, as written.
pub fn header_line(text: &str) -> Option<&str> {
    first_content_line(text).map(|(_, line)| line)
}

/// Zero-based index and text of the first non-blank line.
fn first_content_line(text: &str) -> Option<(usize, &str)> {
    text.lines()
        .enumerate()
        .find(|(_, line)| !line.trim().is_empty())
}

/// One ground control point observation.
#[derive(Debug, Clone, PartialEq)]
pub struct GcpEntry {
    pub geo_x: f64,
    pub geo_y: f64,
    pub geo_z: f64,
    pub pixel_x: f64,
    pub pixel_y: f64,
    pub image: String,
    /// Trailing fields (e.g. a GCP label), kept verbatim.
    pub extras: Vec<String>,
}

impl GcpEntry {
    pub fn parse_line(line: &str) -> Result<Self, String> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 6 {
            return Err(format!("expected at least 6 fields, found {}", fields.len()));
        }

        let number = |i: usize, name: &str| -> Result<f64, String> {
            fields[i]
                .parse::<f64>()
                .map_err(|_| format!("invalid {} '{}'", name, fields[i]))
        };

        Ok(Self {
            geo_x: number(0, "geo_x")?,
            geo_y: number(1, "geo_y")?,
            geo_z: number(2, "geo_z")?,
            pixel_x: number(3, "pixel_x")?,
            pixel_y: number(4, "pixel_y")?,
            image: fields[5].to_string(),
            extras: fields[6..].iter().map(|s| s.to_string()).collect(),
        })
    }
}

/// A parsed GCP file with its CRS.
#[derive(Debug, Clone)]
pub struct GcpFile<C> {
    header: String,
    crs: C,
    entries: Vec<GcpEntry>,
}

impl<C> GcpFile<C> {
    /// Parse GCP file contents, resolving the header through `parser`.
    pub fn parse_str<B, L>(text: &str, parser: &SrsHeaderParser<B, L>) -> Result<Self, GcpFileError>
    where
        B: CrsBuilder<Crs = C>,
        L: ParseLogger,
    {
        let (header_index, header) = first_content_line(text).ok_or(GcpFileError::Empty)?;
        let crs = parser.parse(header)?;

        let entries = text
            .lines()
            .enumerate()
            .skip(header_index + 1)
            .filter(|(_, line)| {
                let line = line.trim_start();
                !line.is_empty() && !line.starts_with('#')
            })
            .map(|(index, line)| {
                GcpEntry::parse_line(line).map_err(|message| GcpFileError::InvalidEntry {
                    line: index + 1,
                    message,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            header: header.to_string(),
            crs,
            entries,
        })
    }

    /// Read and parse a GCP file from disk.
    pub fn from_path<P, B, L>(path: P, parser: &SrsHeaderParser<B, L>) -> Result<Self, GcpFileError>
    where
        P: AsRef<Path>,
        B: CrsBuilder<Crs = C>,
        L: ParseLogger,
    {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| GcpFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_str(&text, parser)
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn crs(&self) -> &C {
        &self.crs
    }

    pub fn entries(&self) -> &[GcpEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct image names in the order they first appear.
    pub fn images(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .map(|e| e.image.as_str())
            .filter(|image| seen.insert(*image))
            .collect()
    }
}

#[derive(Debug, Error)]
pub enum GcpFileError {
    #[error("GCP file has no SRS header")]
    Empty,

    #[error(transparent)]
    Header(#[from] SrsParseError),

    #[error("Invalid GCP entry on line {line}: {message}")]
    InvalidEntry { line: usize, message: String },

    #[error("Failed to read GCP file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_line() {
        assert_eq!(header_line("\n  \nWGS84 UTM 32N\n1 2 3"), Some("WGS84 UTM 32N"));
        assert_eq!(header_line("EPSG:4326"), Some("EPSG:4326"));
        assert_eq!(header_line(" \n\t\n"), None);
        assert_eq!(header_line(""), None);
    }

    #[test]
    fn test_parse_entry() {
        let entry =
            GcpEntry::parse_line("544256.7 5320919.9 5 3044 2622 IMG_0525.jpg gcp01").unwrap();
        assert_eq!(entry.geo_x, 544256.7);
        assert_eq!(entry.geo_y, 5320919.9);
        assert_eq!(entry.geo_z, 5.0);
        assert_eq!(entry.pixel_x, 3044.0);
        assert_eq!(entry.pixel_y, 2622.0);
        assert_eq!(entry.image, "IMG_0525.jpg");
        assert_eq!(entry.extras, vec!["gcp01".to_string()]);
    }

    #[test]
    fn test_parse_entry_tabs() {
        let entry = GcpEntry::parse_line("1\t2\t3\t4\t5\timage.tif").unwrap();
        assert!(entry.extras.is_empty());
    }

    #[test]
    fn test_parse_entry_errors() {
        assert_eq!(
            GcpEntry::parse_line("1 2 3 4 5"),
            Err("expected at least 6 fields, found 5".to_string())
        );
        assert_eq!(
            GcpEntry::parse_line("1 2 three 4 5 img.jpg"),
            Err("invalid geo_z 'three'".to_string())
        );
    }
}
