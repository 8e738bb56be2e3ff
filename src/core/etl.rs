use crate::config::PipelineConfig;
use crate::core::pipeline::BrandPipeline;
use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output_path: String,
    pub fetched: usize,
    pub exported: usize,
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Run the stages in order. The first failing stage aborts the run and
    /// nothing after it executes, so a failed fetch or parse never touches
    /// the output file.
    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("Starting ETL process");

        tracing::info!("Extracting data");
        let raw_data = self.pipeline.extract().await?;
        let fetched = raw_data.len();
        tracing::info!("Extracted {} records", fetched);

        tracing::info!("Filtering data");
        let filtered = self.pipeline.transform(raw_data).await?;
        let exported = filtered.len();
        tracing::info!("Kept {} of {} records", exported, fetched);

        tracing::info!("Loading data");
        let output_path = self.pipeline.load(filtered).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(RunSummary {
            output_path,
            fetched,
            exported,
        })
    }
}

/// Validate `config` and run the full pipeline against it.
pub async fn run(config: PipelineConfig) -> Result<RunSummary> {
    config.validate()?;
    EtlEngine::new(BrandPipeline::new(config)).run().await
}
