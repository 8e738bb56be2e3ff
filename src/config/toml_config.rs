use super::{DEFAULT_API_ENDPOINT, DEFAULT_BRAND, DEFAULT_OUTPUT_FILE};
use crate::core::ConfigProvider;
use crate::utils::error::{EtlError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// On-disk configuration. Every value is optional; see [`super::PipelineConfig::merge_toml`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub filter: FilterConfig,
    pub load: LoadConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig {
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    pub brand: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoadConfig {
    pub output_file: Option<String>,
    pub quote_fields: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            EtlError::config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content)?;

        toml::from_str(&processed_content)
            .map_err(|e| EtlError::config(format!("TOML parsing error: {}", e)))
    }
}

/// Unset values fall back to the built-in defaults.
impl ConfigProvider for TomlConfig {
    fn api_endpoint(&self) -> &str {
        self.source.endpoint.as_deref().unwrap_or(DEFAULT_API_ENDPOINT)
    }

    fn output_file(&self) -> &str {
        self.load.output_file.as_deref().unwrap_or(DEFAULT_OUTPUT_FILE)
    }

    fn brand(&self) -> &str {
        self.filter.brand.as_deref().unwrap_or(DEFAULT_BRAND)
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.source.timeout_seconds.map(Duration::from_secs)
    }

    fn quote_fields(&self) -> bool {
        self.load.quote_fields.unwrap_or(false)
    }
}

/// Replace `${VAR}` with the environment value; unknown variables stay verbatim.
fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([^}]+)\}")
        .map_err(|e| EtlError::config(format!("invalid substitution pattern: {}", e)))?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[source]
endpoint = "https://api.example.com/objects"
timeout_seconds = 10

[filter]
brand = "Google"

[load]
output_file = "GoogleDevices.csv"
quote_fields = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(
            config.source.endpoint.as_deref(),
            Some("https://api.example.com/objects")
        );
        assert_eq!(config.source.timeout_seconds, Some(10));
        assert_eq!(config.filter.brand.as_deref(), Some("Google"));
        assert_eq!(config.load.output_file.as_deref(), Some("GoogleDevices.csv"));
        assert_eq!(config.load.quote_fields, Some(true));
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.source.endpoint.is_none());
        assert!(config.filter.brand.is_none());
    }

    #[test]
    fn test_provider_falls_back_to_defaults() {
        let config = TomlConfig::from_toml_str(
            r#"
[source]
timeout_seconds = 3

[filter]
brand = "Google"
"#,
        )
        .unwrap();

        assert_eq!(config.api_endpoint(), DEFAULT_API_ENDPOINT);
        assert_eq!(config.output_file(), DEFAULT_OUTPUT_FILE);
        assert_eq!(config.brand(), "Google");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(3)));
        assert!(!config.quote_fields());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let err = TomlConfig::from_toml_str("[filter]\nbrnad = \"Apple\"\n").unwrap_err();
        assert!(matches!(err, EtlError::ConfigError { .. }));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("BRAND_EXPORT_TEST_ENDPOINT", "https://test.api.com");

        let config = TomlConfig::from_toml_str(
            r#"
[source]
endpoint = "${BRAND_EXPORT_TEST_ENDPOINT}/objects"

[filter]
brand = "${BRAND_EXPORT_TEST_UNSET_VARIABLE}"
"#,
        )
        .unwrap();

        assert_eq!(
            config.source.endpoint.as_deref(),
            Some("https://test.api.com/objects")
        );
        assert_eq!(
            config.filter.brand.as_deref(),
            Some("${BRAND_EXPORT_TEST_UNSET_VARIABLE}")
        );

        std::env::remove_var("BRAND_EXPORT_TEST_ENDPOINT");
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[filter]\nbrand = \"Xiaomi\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.filter.brand.as_deref(), Some("Xiaomi"));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = TomlConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, EtlError::ConfigError { .. }));
    }
}
