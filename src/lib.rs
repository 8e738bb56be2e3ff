pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{PipelineConfig, TomlConfig};

pub use crate::core::etl::{run, EtlEngine, RunSummary};
pub use crate::core::filter::filter_by_name;
pub use crate::core::parse::parse;
pub use crate::core::pipeline::BrandPipeline;
pub use crate::core::{AttributeValue, ConfigProvider, FilteredSet, Pipeline, Record};
pub use crate::utils::error::{EtlError, Result};
