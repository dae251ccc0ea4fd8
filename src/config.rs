//! Configuration with TOML persistence, and the country name table.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::{SocialError, SocialResult};

/// Runtime configuration for the `sgraph` tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Output format used when none is given on the command line: "text" or "json".
    #[serde(default = "default_output_format")]
    pub output_format: String,
    /// Log level used when neither `--verbose` nor `RUST_LOG` is set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Country code -> display name. Replaces the built-in table when present.
    #[serde(default = "default_countries")]
    pub countries: BTreeMap<String, String>,
}

fn default_countries() -> BTreeMap<String, String> {
    [
        ("UK", "United Kingdom"),
        ("US", "United States"),
        ("FR", "France"),
        ("DE", "Germany"),
        ("IN", "India"),
        ("CN", "China"),
        ("JP", "Japan"),
    ]
    .into_iter()
    .map(|(code, name)| (code.to_string(), name.to_string()))
    .collect()
}

fn default_output_format() -> String {
    "text".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            output_format: default_output_format(),
            log_level: default_log_level(),
            countries: default_countries(),
        }
    }
}

impl NetworkConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> SocialResult<Self> {
        toml::from_str(content).map_err(|e| SocialError::Config(e.to_string()))
    }

    /// Serialize to TOML text.
    pub fn to_toml_string(&self) -> SocialResult<String> {
        toml::to_string_pretty(self).map_err(|e| SocialError::Config(e.to_string()))
    }

    /// Build the country lookup table described by this configuration.
    pub fn country_table(&self) -> CountryTable {
        CountryTable::from_pairs(
            self.countries
                .iter()
                .map(|(code, name)| (code.clone(), name.clone())),
        )
    }
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> SocialResult<NetworkConfig> {
    let content = std::fs::read_to_string(path)?;
    let config = NetworkConfig::from_toml_str(&content)?;
    log::debug!(
        "Loaded config from {} ({} countries)",
        path.display(),
        config.countries.len()
    );
    Ok(config)
}

/// Immutable country code -> display name lookup.
///
/// Unknown codes resolve to themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryTable {
    names: BTreeMap<String, String>,
}

impl CountryTable {
    /// Build a table from (code, name) pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            names: pairs.into_iter().collect(),
        }
    }

    /// Display name for a country code, or the code itself if unknown.
    pub fn resolve<'a>(&'a self, code: &'a str) -> &'a str {
        self.names.get(code).map(String::as_str).unwrap_or(code)
    }

    /// Number of known codes.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if no codes are known.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for CountryTable {
    fn default() -> Self {
        NetworkConfig::default().country_table()
    }
}
