use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Full text of one set of meeting minutes, as produced by the loader.
/// Immutable once constructed; every analysis pass works from the same text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Polarity above this is positive.
    pub const POSITIVE_THRESHOLD: f64 = 0.05;
    /// Polarity below this is negative.
    pub const NEGATIVE_THRESHOLD: f64 = -0.05;

    /// Fixed-threshold labeling: > 0.05 positive, < -0.05 negative, else neutral.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > Self::POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if polarity < Self::NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One detected sentence with its polarity score and derived label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceSentiment {
    pub sentence: String,
    pub polarity: f64,
    pub label: SentimentLabel,
}

/// Label counts over all sentences of a document. Recomputed per run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentTally {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentTally {
    pub fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Neutral => self.neutral += 1,
            SentimentLabel::Negative => self.negative += 1,
        }
    }

    pub fn count(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Neutral => self.neutral,
            SentimentLabel::Negative => self.negative,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }
}

/// A ranked keyword with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    pub token: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured analysis results for one document.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub sentences: Vec<SentenceSentiment>,
    pub tally: SentimentTally,
    pub keywords: Vec<Keyword>,
    pub risk_level: RiskLevel,
    pub generated_at: DateTime<Utc>,
}

/// Transform output: the report plus its rendered artifacts, ready to load.
#[derive(Debug, Clone)]
pub struct ReportBundle {
    pub report: AnalysisReport,
    pub json_output: String,
    pub keywords_csv: String,
    pub summary_output: String,
}
