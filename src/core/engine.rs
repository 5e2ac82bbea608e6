use crate::core::{Pipeline, TransformResult};
use crate::utils::error::Result;

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub result: TransformResult,
    /// Locations of the files written by the load phase.
    pub written: Vec<String>,
}

pub struct ConversionEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ConversionEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("Starting conversion run");

        tracing::debug!("Extracting numbers...");
        let records = self.pipeline.extract().await?;
        tracing::info!("Extracted {} numbers", records.len());

        tracing::debug!("Converting numbers...");
        let result = self.pipeline.transform(records).await?;
        tracing::info!(
            "Converted {} numbers, rejected {}",
            result.conversions.len(),
            result.rejections.len()
        );

        tracing::debug!("Writing output...");
        let written = self.pipeline.load(&result).await?;
        for location in &written {
            tracing::info!("Output saved to: {}", location);
        }

        Ok(RunSummary { result, written })
    }
}
