#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::time::Duration;

pub const DEFAULT_API_ENDPOINT: &str = "https://api.restful-api.dev/objects";
pub const DEFAULT_OUTPUT_FILE: &str = "AppleDevices.csv";
pub const DEFAULT_BRAND: &str = "Apple";

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

/// Everything the pipeline needs to run, resolved from defaults, an
/// optional TOML file and command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub api_endpoint: String,
    pub output_file: String,
    pub brand: String,
    pub timeout_seconds: Option<u64>,
    /// Quote fields containing the delimiter instead of writing them raw.
    pub quote_fields: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            brand: DEFAULT_BRAND.to_string(),
            timeout_seconds: None,
            quote_fields: false,
        }
    }
}

impl PipelineConfig {
    /// Fill any value set in `file`, keeping the current one otherwise.
    pub fn merge_toml(mut self, file: &TomlConfig) -> Self {
        if let Some(endpoint) = file.source.endpoint.as_ref() {
            self.api_endpoint = endpoint.clone();
        }
        if let Some(timeout) = file.source.timeout_seconds {
            self.timeout_seconds = Some(timeout);
        }
        if let Some(brand) = file.filter.brand.as_ref() {
            self.brand = brand.clone();
        }
        if let Some(output_file) = file.load.output_file.as_ref() {
            self.output_file = output_file.clone();
        }
        if let Some(quote) = file.load.quote_fields {
            self.quote_fields = quote;
        }
        self
    }
}

impl ConfigProvider for PipelineConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }

    fn brand(&self) -> &str {
        &self.brand
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    fn quote_fields(&self) -> bool {
        self.quote_fields
    }
}

impl Validate for PipelineConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_endpoint", &self.api_endpoint)?;
        validation::validate_path("output_file", &self.output_file)?;
        validation::validate_non_empty_string("brand", &self.brand)?;
        if let Some(timeout) = self.timeout_seconds {
            validation::validate_positive_number("timeout_seconds", timeout, 1)?;
        }
        Ok(())
    }
}
