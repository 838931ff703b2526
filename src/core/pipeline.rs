use crate::core::keywords::KeywordExtractor;
use crate::core::risk::score_risk;
use crate::core::scorer::VaderScorer;
use crate::core::sentiment::{self, SentimentAnalyzer};
use crate::core::stopwords;
use crate::core::{AnalysisReport, ConfigProvider, Document, Keyword, Pipeline, ReportBundle, Storage};
use crate::utils::error::{Result, RiskError};
use std::path::Path;

/// Runs one analysis of a meeting-minutes file: extract loads and flattens
/// the upload, transform runs the three analysis passes and renders the
/// report artifacts, load writes them under the configured output path.
pub struct MinutesPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    analyzer: SentimentAnalyzer<VaderScorer>,
    extractor: KeywordExtractor,
}

impl<S: Storage, C: ConfigProvider> MinutesPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let mut stop_words = stopwords::for_language(config.language())?;
        for word in config.extra_stopwords() {
            stop_words.insert(word.to_lowercase());
        }

        Ok(Self {
            storage,
            config,
            analyzer: SentimentAnalyzer::new(VaderScorer::new()),
            extractor: KeywordExtractor::new(stop_words),
        })
    }

    fn render_summary(&self, report: &AnalysisReport) -> String {
        let mut lines = vec![
            "Social Risk Summary".to_string(),
            "===================".to_string(),
        ];

        if let Some(name) = self.config.project_name() {
            lines.push(format!("Project: {}", name));
        }
        if let Some(technology) = self.config.technology_type() {
            lines.push(format!("Technology: {}", technology));
        }
        if let Some(location) = self.config.project_location() {
            lines.push(format!("Location: {}", location));
        }
        if let Some(level) = self.config.engagement_level() {
            lines.push(format!("Engagement level: {}", level));
        }
        lines.push(format!("Generated at: {}", report.generated_at.to_rfc3339()));

        lines.push(String::new());
        lines.push("Sentiment distribution".to_string());
        lines.push(format!("  positive: {}", report.tally.positive));
        lines.push(format!("  neutral:  {}", report.tally.neutral));
        lines.push(format!("  negative: {}", report.tally.negative));

        lines.push(String::new());
        lines.push("Main themes / topics".to_string());
        for keyword in &report.keywords {
            lines.push(format!("  {:<20} {}", keyword.token, keyword.count));
        }

        let issues: Vec<&str> = report
            .keywords
            .iter()
            .map(|keyword| keyword.token.as_str())
            .collect();
        lines.push(String::new());
        lines.push(format!("Key issues highlighted: {}", issues.join(", ")));

        lines.push(String::new());
        lines.push(format!("Overall social risk level: {}", report.risk_level));

        lines.join("\n")
    }
}

/// Flattens a CSV upload into one whitespace-joined string of all data-row
/// cell values, row-major. The header row is not part of the document.
fn flatten_csv(raw: &[u8]) -> Result<String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(raw);

    let mut cells: Vec<String> = Vec::new();
    for record in reader.records() {
        let record = record?;
        cells.extend(record.iter().map(|field| field.to_string()));
    }

    Ok(cells.join(" "))
}

fn render_keywords_csv(keywords: &[Keyword]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["keyword", "count"])?;
    for keyword in keywords {
        let count = keyword.count.to_string();
        writer.write_record([keyword.token.as_str(), count.as_str()])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| RiskError::ProcessingError {
            message: format!("CSV buffer error: {}", e),
        })?;
    Ok(String::from_utf8(bytes)?)
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for MinutesPipeline<S, C> {
    async fn extract(&self) -> Result<Document> {
        let path = self.config.input_path();
        tracing::debug!("Reading meeting minutes from: {}", path);

        let raw = self.storage.read_file(path).await?;

        let is_csv = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);

        let text = if is_csv {
            flatten_csv(&raw)?
        } else {
            String::from_utf8(raw)?
        };

        tracing::debug!("Loaded document ({} bytes)", text.len());
        Ok(Document::new(text))
    }

    async fn transform(&self, document: Document) -> Result<ReportBundle> {
        let sentences = self.analyzer.analyze(&document);
        let tally = sentiment::tally(&sentences);
        let keywords = self.extractor.extract(&document);
        let risk_level = score_risk(&tally);

        tracing::debug!(
            "Scored {} sentences ({} positive, {} neutral, {} negative), {} keywords",
            sentences.len(),
            tally.positive,
            tally.neutral,
            tally.negative,
            keywords.len()
        );

        let report = AnalysisReport {
            sentences,
            tally,
            keywords,
            risk_level,
            generated_at: chrono::Utc::now(),
        };

        let json_output = serde_json::to_string_pretty(&report)?;
        let keywords_csv = render_keywords_csv(&report.keywords)?;
        let summary_output = self.render_summary(&report);

        Ok(ReportBundle {
            report,
            json_output,
            keywords_csv,
            summary_output,
        })
    }

    async fn load(&self, bundle: ReportBundle) -> Result<String> {
        let output_path = self.config.output_path();

        self.storage
            .write_file(
                &format!("{}/report.json", output_path),
                bundle.json_output.as_bytes(),
            )
            .await?;
        self.storage
            .write_file(
                &format!("{}/keywords.csv", output_path),
                bundle.keywords_csv.as_bytes(),
            )
            .await?;

        let summary_path = format!("{}/risk_summary.txt", output_path);
        self.storage
            .write_file(&summary_path, bundle.summary_output.as_bytes())
            .await?;

        tracing::debug!("Wrote report files under: {}", output_path);
        Ok(summary_path)
    }
}
