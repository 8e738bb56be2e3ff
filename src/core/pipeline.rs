use crate::adapters::{http, storage};
use crate::core::filter::filter_by_name;
use crate::core::parse::parse;
use crate::core::{ConfigProvider, FilteredSet, Pipeline, Record};
use crate::utils::error::Result;
use std::path::Path;

/// Fetch → parse → filter → export, driven by a [`ConfigProvider`].
pub struct BrandPipeline<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> BrandPipeline<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> Pipeline for BrandPipeline<C> {
    async fn extract(&self) -> Result<Vec<Record>> {
        let body = http::fetch(self.config.api_endpoint(), self.config.request_timeout()).await?;
        let records = parse(&body)?;
        tracing::debug!(
            "Parsed {} records ({} without a name)",
            records.len(),
            records.iter().filter(|r| r.name.is_none()).count()
        );
        Ok(records)
    }

    async fn transform(&self, data: Vec<Record>) -> Result<FilteredSet> {
        let brand = self.config.brand();
        let filtered = filter_by_name(data, brand);
        tracing::debug!("{} records match {:?}", filtered.len(), brand);
        Ok(filtered)
    }

    async fn load(&self, result: FilteredSet) -> Result<String> {
        let destination = self.config.output_file();
        storage::export(
            result.records(),
            Path::new(destination),
            self.config.quote_fields(),
        )?;
        Ok(destination.to_string())
    }
}
