use super::{PipelineConfig, TomlConfig};
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "brand-export")]
#[command(about = "Export products whose name contains a brand to a Name,Price CSV file")]
pub struct CliConfig {
    /// TOML file with [source], [filter] and [load] sections
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Endpoint returning a JSON array of products [default: https://api.restful-api.dev/objects]
    #[arg(long)]
    pub api_endpoint: Option<String>,

    /// Destination file, overwritten if present [default: AppleDevices.csv]
    #[arg(long, short = 'o')]
    pub output_file: Option<String>,

    /// Case-sensitive substring a product name must contain [default: Apple]
    #[arg(long, short = 'b')]
    pub brand: Option<String>,

    /// Request timeout; unset means the HTTP client default
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Quote fields containing commas, quotes or newlines
    #[arg(long)]
    pub quote_fields: bool,

    #[arg(long, short = 'v', help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Defaults, then the TOML file if given, then explicit flags.
    pub fn resolve(&self) -> Result<PipelineConfig> {
        let mut config = PipelineConfig::default();

        if let Some(path) = &self.config {
            tracing::debug!("Loading configuration from {}", path.display());
            config = config.merge_toml(&TomlConfig::from_file(path)?);
        }

        if let Some(endpoint) = &self.api_endpoint {
            config.api_endpoint = endpoint.clone();
        }
        if let Some(output_file) = &self.output_file {
            config.output_file = output_file.clone();
        }
        if let Some(brand) = &self.brand {
            config.brand = brand.clone();
        }
        if self.timeout_seconds.is_some() {
            config.timeout_seconds = self.timeout_seconds;
        }
        if self.quote_fields {
            config.quote_fields = true;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::Stage;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_no_flags_gives_defaults() {
        let cli = CliConfig::parse_from(["brand-export"]);
        assert_eq!(cli.resolve().unwrap(), PipelineConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                b"[source]\nendpoint = \"https://file.example.com/objects\"\n\n[filter]\nbrand = \"Google\"\n",
            )
            .unwrap();
        let config_path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from([
            "brand-export",
            "--config",
            config_path.as_str(),
            "--brand",
            "Samsung",
            "--timeout-seconds",
            "5",
        ]);
        let config = cli.resolve().unwrap();

        assert_eq!(config.api_endpoint, "https://file.example.com/objects");
        assert_eq!(config.brand, "Samsung");
        assert_eq!(config.timeout_seconds, Some(5));
        assert_eq!(config.output_file, "AppleDevices.csv");
    }

    #[test]
    fn test_missing_config_file_fails() {
        let cli = CliConfig::parse_from(["brand-export", "-c", "/no/such/file.toml"]);
        let err = cli.resolve().unwrap_err();
        assert_eq!(err.stage(), Stage::Config);
        assert_eq!(
            err.recovery_suggestion(),
            "Fix the configuration file or command-line flags"
        );
    }
}
