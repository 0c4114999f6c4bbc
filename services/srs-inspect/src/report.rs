//! Printable summaries of resolved CRSs.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use srs_common::{BoundingBox, Crs};
use srs_header::GcpFile;

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// What was resolved from one header.
#[derive(Debug, Clone, Serialize)]
pub struct CrsReport {
    pub header: String,
    pub proj4: String,
    pub epsg: Option<u32>,
    pub name: Option<String>,
    pub projection: String,
    pub datum: Option<String>,
    pub units: Option<String>,
    pub geographic: bool,
    pub utm_zone: Option<String>,
    pub area_of_use: Option<BoundingBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcp_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

impl CrsReport {
    pub fn new(header: &str, crs: &Crs) -> Self {
        Self {
            header: header.trim().to_string(),
            proj4: crs.proj4(),
            epsg: crs.epsg(),
            name: crs.name().map(str::to_string),
            projection: crs.projection().to_string(),
            datum: crs.datum().map(str::to_string),
            units: crs.units().map(str::to_string),
            geographic: crs.is_geographic(),
            utm_zone: crs.utm_zone().map(|zone| zone.to_string()),
            area_of_use: crs.area_of_use(),
            gcp_count: None,
            images: None,
        }
    }

    /// Report for a GCP file: its header CRS plus point and image counts.
    pub fn from_gcp_file(file: &GcpFile<Crs>) -> Self {
        let mut report = Self::new(file.header(), file.crs());
        report.gcp_count = Some(file.len());
        report.images = Some(file.images().into_iter().map(str::to_string).collect());
        report
    }

    /// `key: value` lines, skipping unknown values.
    pub fn to_text(&self) -> String {
        let mut lines = vec![
            format!("header: {}", self.header),
            format!("proj4: {}", self.proj4),
        ];
        if let Some(epsg) = self.epsg {
            lines.push(format!("epsg: {}", epsg));
        }
        if let Some(name) = &self.name {
            lines.push(format!("name: {}", name));
        }
        lines.push(format!("projection: {}", self.projection));
        if let Some(datum) = &self.datum {
            lines.push(format!("datum: {}", datum));
        }
        if let Some(units) = &self.units {
            lines.push(format!("units: {}", units));
        }
        lines.push(format!("geographic: {}", self.geographic));
        if let Some(zone) = &self.utm_zone {
            lines.push(format!("utm_zone: {}", zone));
        }
        if let Some(area) = &self.area_of_use {
            lines.push(format!("area_of_use: {}", area));
        }
        if let Some(count) = self.gcp_count {
            lines.push(format!("gcp_count: {}", count));
        }
        if let Some(images) = &self.images {
            lines.push(format!("images: {}", images.join(", ")));
        }
        lines.join("\n")
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
        }
    }
}
