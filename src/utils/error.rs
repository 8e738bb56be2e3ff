use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Fetch failed for {url}: {source}")]
    FetchFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Parse failed: {message}")]
    ParseFailed { message: String },

    #[error("Write failed for {path}: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// Pipeline stage an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Config,
    Fetch,
    Parse,
    Export,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Config => "config",
            Stage::Fetch => "fetch",
            Stage::Parse => "parse",
            Stage::Export => "export",
        };
        f.write_str(name)
    }
}

impl EtlError {
    pub fn parse(message: impl Into<String>) -> Self {
        EtlError::ParseFailed {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        EtlError::ConfigError {
            message: message.into(),
        }
    }

    pub fn stage(&self) -> Stage {
        match self {
            EtlError::FetchFailed { .. } => Stage::Fetch,
            EtlError::ParseFailed { .. } => Stage::Parse,
            EtlError::WriteFailed { .. } => Stage::Export,
            EtlError::ConfigError { .. } | EtlError::InvalidConfigValueError { .. } => {
                Stage::Config
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::FetchFailed { source, .. } if source.is_timeout() => {
                "The endpoint did not answer in time; raise --timeout-seconds or try again later"
            }
            EtlError::FetchFailed { source, .. } if source.is_status() => {
                "The endpoint answered with an error status; check the URL"
            }
            EtlError::FetchFailed { .. } => "Check network connectivity and the endpoint URL",
            EtlError::ParseFailed { .. } => {
                "The endpoint must return a JSON array of objects with `name` and `data` fields"
            }
            EtlError::WriteFailed { .. } => {
                "Check that the output directory exists and is writable"
            }
            EtlError::ConfigError { .. } | EtlError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command-line flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
