//! Portfolio configuration file.

use std::path::Path;

use serde::{Deserialize, Serialize};
use sparevest_portfolio::{default_funds, Allocator, AllocatorConfig, FundDefinition};
use tracing::{debug, info};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// Contents of a `sparevest.toml` (or `.json`) file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpareVestConfig {
    /// Validation settings.
    #[serde(default)]
    pub allocator: AllocatorConfig,

    /// Output defaults.
    #[serde(default)]
    pub output: OutputConfig,

    /// Funds to load. Empty means the default template.
    #[serde(default)]
    pub funds: Vec<FundDefinition>,
}

/// Output defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Format used when `--format` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,

    /// Decimal places for amounts in tables
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_precision() -> usize {
    2
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            precision: default_precision(),
        }
    }
}

impl SpareVestConfig {
    /// Loads a config file, choosing the parser by extension (`.json` or TOML).
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config: Self = if is_json {
            serde_json::from_str(&content).map_err(|e| CliError::Config {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        } else {
            toml::from_str(&content).map_err(|e| CliError::Config {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        };

        info!(path = %path.display(), funds = config.funds.len(), "Loaded configuration");
        Ok(config)
    }

    /// Loads `path` if given, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No configuration file, using default template");
                Ok(Self::default())
            }
        }
    }

    /// A config holding the default template, for `sparevest template`.
    pub fn template() -> Self {
        Self {
            allocator: AllocatorConfig::default(),
            output: OutputConfig {
                format: Some(OutputFormat::Table),
                precision: default_precision(),
            },
            funds: default_funds().iter().map(FundDefinition::from).collect(),
        }
    }

    /// Builds a validated allocator from the configured funds.
    pub fn allocator(&self) -> CliResult<Allocator> {
        Ok(Allocator::from_definitions(
            &self.funds,
            self.allocator.clone(),
        )?)
    }

    /// Serializes the config as TOML.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::Serialization(e.to_string()))
    }
}
