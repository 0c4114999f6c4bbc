//! EPSG registry configuration.
//!
//! Loads extra EPSG definitions from a YAML file:
//!
//! ```yaml
//! definitions:
//!   - code: 2154
//!     name: RGF93 / Lambert-93
//!     proj4: "+proj=lcc +lat_1=49 +lat_2=44 ..."
//! ```
//!
//! Supports environment variable substitution using ${VAR} syntax.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use projection::{EpsgDefinition, EpsgRegistry};
use serde::{Deserialize, Serialize};
use srs_common::CrsBuildError;
use srs_header::SrsParseError;
use tracing::{debug, info};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default)]
    pub definitions: Vec<EpsgDefinition>,
}

/// Load and parse a registry YAML file with environment variable substitution
pub fn load_registry_config<P: AsRef<Path>>(path: P) -> Result<RegistryConfig> {
    let content = fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read registry config from {:?}", path.as_ref()))?;

    let config = parse_registry_config(&content)
        .with_context(|| format!("Failed to parse registry config from {:?}", path.as_ref()))?;

    info!(
        path = %path.as_ref().display(),
        definitions = config.definitions.len(),
        "Loaded registry config"
    );
    Ok(config)
}

/// Parse registry YAML content
pub fn parse_registry_config(content: &str) -> Result<RegistryConfig> {
    let expanded = expand_env_vars(content)?;

    // An empty file deserializes to null
    if expanded.trim().is_empty() {
        return Ok(RegistryConfig::default());
    }

    let config: RegistryConfig =
        serde_yaml::from_str(&expanded).context("Failed to parse registry config YAML")?;
    Ok(config)
}

/// Build an EPSG registry from the built-ins plus the configured definitions
pub fn build_registry(config: &RegistryConfig) -> Result<EpsgRegistry> {
    for def in &config.definitions {
        debug!(code = def.code, name = %def.name, "Registering EPSG definition");
    }

    EpsgRegistry::new()
        .with_definitions(config.definitions.iter().cloned())
        .context("Invalid EPSG definition in registry config")
}

/// Whether a header failed in the EPSG lookup, where extra registry
/// definitions could help.
pub fn is_registry_miss(err: &SrsParseError) -> bool {
    err.build_error().map_or(false, CrsBuildError::is_epsg_error)
}

// ============================================================================
// Environment Variable Expansion
// ============================================================================

/// Expand environment variables in YAML content
/// Supports ${VAR} and ${VAR:-default} syntax
pub fn expand_env_vars(content: &str) -> Result<String> {
    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '$' && chars.peek() == Some(&'{') {
            chars.next(); // consume '{'

            let mut var_expr = String::new();
            loop {
                match chars.next() {
                    Some('}') => break,
                    Some(c) => var_expr.push(c),
                    None => anyhow::bail!("Unclosed variable substitution: ${{{}", var_expr),
                }
            }

            result.push_str(&resolve_var_expr(&var_expr)?);
        } else {
            result.push(ch);
        }
    }

    Ok(result)
}

/// Resolve variable expression (supports VAR and VAR:-default syntax)
fn resolve_var_expr(expr: &str) -> Result<String> {
    if let Some((var_name, default)) = expr.split_once(":-") {
        match std::env::var(var_name.trim()) {
            Ok(val) if !val.is_empty() => Ok(val),
            _ => Ok(default.to_string()),
        }
    } else {
        std::env::var(expr.trim()).with_context(|| format!("Environment variable {} not set", expr))
    }
}
