pub mod engine;
pub mod keywords;
pub mod pipeline;
pub mod risk;
pub mod scorer;
pub mod sentiment;
pub mod stopwords;

pub use crate::domain::model::{
    AnalysisReport, Document, Keyword, ReportBundle, RiskLevel, SentenceSentiment, SentimentLabel,
    SentimentTally,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, PolarityScorer, Storage};
pub use crate::utils::error::Result;
