//! Library side of the `srs-inspect` tool: registry config loading and report rendering.

pub mod config;
pub mod report;

pub use config::{
    build_registry, is_registry_miss, load_registry_config, parse_registry_config, RegistryConfig,
};
pub use report::{CrsReport, OutputFormat};
