use crate::domain::model::{Document, ReportBundle};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn language(&self) -> &str;
    fn extra_stopwords(&self) -> &[String];
    fn project_name(&self) -> Option<&str>;
    fn technology_type(&self) -> Option<&str>;
    fn project_location(&self) -> Option<&str>;
    fn engagement_level(&self) -> Option<&str>;
}

/// Pluggable sentence-level polarity capability. Implementations must be
/// deterministic, return values in [-1, 1], and score empty text as 0.0.
pub trait PolarityScorer: Send + Sync {
    fn score(&self, text: &str) -> f64;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Document>;
    async fn transform(&self, document: Document) -> Result<ReportBundle>;
    async fn load(&self, bundle: ReportBundle) -> Result<String>;
}
