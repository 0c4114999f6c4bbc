//! Common types shared across the SRS header workspace.

pub mod bbox;
pub mod crs;
pub mod error;
pub mod proj4;

pub use bbox::BoundingBox;
pub use crs::{Crs, Hemisphere, UtmZone};
pub use error::{CrsBuildError, CrsResult};
pub use proj4::{Proj4Definition, Proj4Param, Proj4ParseError};
