//! CRS construction from proj4 strings and EPSG codes.
//!
//! Only definitions are built and checked here; no coordinate
//! transformation happens in this crate.

pub mod builder;
pub mod epsg;

pub use builder::{is_projection_name, parse_epsg_code, validate_definition, CrsBuilder, Proj4Builder};
pub use epsg::{EpsgDefinition, EpsgEntry, EpsgRegistry};
