use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct AnalysisEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> AnalysisEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting analysis");

        let document = self.pipeline.extract().await?;
        tracing::info!(
            "Loaded document ({} characters)",
            document.as_str().chars().count()
        );

        let bundle = self.pipeline.transform(document).await?;
        tracing::info!(
            "Analyzed {} sentences, risk level: {}",
            bundle.report.sentences.len(),
            bundle.report.risk_level
        );

        let output_path = self.pipeline.load(bundle).await?;
        tracing::info!("Report saved to: {}", output_path);

        Ok(output_path)
    }
}
