pub mod cli;
pub mod toml_config;

use crate::core::{stopwords, ConfigProvider};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const SUPPORTED_INPUT_EXTENSIONS: &[&str] = &["txt", "csv"];
pub const TECHNOLOGY_TYPES: &[&str] = &["Solar", "Wind", "Hydro", "Geothermal", "Other"];
pub const ENGAGEMENT_LEVELS: &[&str] = &["Low", "Medium", "High"];

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "social-risk")]
#[command(about = "Social risk analysis of stakeholder meeting minutes")]
pub struct CliConfig {
    /// Meeting minutes to analyze (.txt or .csv)
    #[arg(long)]
    pub input: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Stopword language for keyword extraction
    #[arg(long, default_value = "english")]
    pub language: String,

    /// Additional stopwords, comma separated
    #[arg(long, value_delimiter = ',')]
    pub extra_stopwords: Vec<String>,

    #[arg(long)]
    pub project_name: Option<String>,

    /// Solar, Wind, Hydro, Geothermal or Other
    #[arg(long)]
    pub technology_type: Option<String>,

    #[arg(long)]
    pub project_location: Option<String>,

    /// Low, Medium or High
    #[arg(long)]
    pub engagement_level: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn language(&self) -> &str {
        &self.language
    }

    fn extra_stopwords(&self) -> &[String] {
        &self.extra_stopwords
    }

    fn project_name(&self) -> Option<&str> {
        self.project_name.as_deref()
    }

    fn technology_type(&self) -> Option<&str> {
        self.technology_type.as_deref()
    }

    fn project_location(&self) -> Option<&str> {
        self.project_location.as_deref()
    }

    fn engagement_level(&self) -> Option<&str> {
        self.engagement_level.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("input", &self.input)?;
        validation::validate_path("input", &self.input)?;
        validation::validate_file_extension("input", &self.input, SUPPORTED_INPUT_EXTENSIONS)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_non_empty_string("language", &self.language)?;
        stopwords::for_language(&self.language)?;

        if let Some(technology) = &self.technology_type {
            validation::validate_one_of("technology_type", technology, TECHNOLOGY_TYPES)?;
        }
        if let Some(level) = &self.engagement_level {
            validation::validate_one_of("engagement_level", level, ENGAGEMENT_LEVELS)?;
        }

        Ok(())
    }
}
