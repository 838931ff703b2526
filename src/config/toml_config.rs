use crate::config::{ENGAGEMENT_LEVELS, SUPPORTED_INPUT_EXTENSIONS, TECHNOLOGY_TYPES};
use crate::core::{stopwords, ConfigProvider};
use crate::utils::error::{Result, RiskError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub project: ProjectConfig,
    pub input: InputConfig,
    pub analysis: Option<AnalysisConfig>,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
    pub technology: Option<String>,
    pub location: Option<String>,
    pub engagement: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub language: Option<String>,
    pub extra_stopwords: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RiskError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RiskError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with environment values; unknown
    /// variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("project.name", &self.project.name)?;
        validation::validate_path("input.path", &self.input.path)?;
        validation::validate_file_extension(
            "input.path",
            &self.input.path,
            SUPPORTED_INPUT_EXTENSIONS,
        )?;
        validation::validate_path("output.path", &self.output.path)?;
        stopwords::for_language(self.language())?;

        if let Some(technology) = &self.project.technology {
            validation::validate_one_of("project.technology", technology, TECHNOLOGY_TYPES)?;
        }
        if let Some(engagement) = &self.project.engagement {
            validation::validate_one_of("project.engagement", engagement, ENGAGEMENT_LEVELS)?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        &self.input.path
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn language(&self) -> &str {
        self.analysis
            .as_ref()
            .and_then(|analysis| analysis.language.as_deref())
            .unwrap_or("english")
    }

    fn extra_stopwords(&self) -> &[String] {
        self.analysis
            .as_ref()
            .and_then(|analysis| analysis.extra_stopwords.as_deref())
            .unwrap_or(&[])
    }

    fn project_name(&self) -> Option<&str> {
        Some(&self.project.name)
    }

    fn technology_type(&self) -> Option<&str> {
        self.project.technology.as_deref()
    }

    fn project_location(&self) -> Option<&str> {
        self.project.location.as_deref()
    }

    fn engagement_level(&self) -> Option<&str> {
        self.project.engagement.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[project]
name = "Sunnyvale Solar"
technology = "Solar"
engagement = "Medium"

[input]
path = "./minutes.txt"

[analysis]
language = "english"
extra_stopwords = ["project", "meeting"]

[output]
path = "./reports"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.project.name, "Sunnyvale Solar");
        assert_eq!(config.input_path(), "./minutes.txt");
        assert_eq!(config.language(), "english");
        assert_eq!(config.extra_stopwords().len(), 2);
        assert_eq!(config.engagement_level(), Some("Medium"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_analysis_section_defaults() {
        let toml_content = r#"
[project]
name = "Hilltop Wind"

[input]
path = "./minutes.csv"

[output]
path = "./reports"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.language(), "english");
        assert!(config.extra_stopwords().is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_MINUTES_PATH", "./env-minutes.txt");

        let toml_content = r#"
[project]
name = "Env Test"

[input]
path = "${TEST_MINUTES_PATH}"

[output]
path = "./reports"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.input_path(), "./env-minutes.txt");

        std::env::remove_var("TEST_MINUTES_PATH");
    }

    #[test]
    fn test_config_validation_rejects_bad_extension() {
        let toml_content = r#"
[project]
name = "Bad Input"

[input]
path = "./minutes.docx"

[output]
path = "./reports"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_rejects_unknown_engagement() {
        let toml_content = r#"
[project]
name = "Bad Engagement"
engagement = "Extreme"

[input]
path = "./minutes.txt"

[output]
path = "./reports"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[project]
name = "File Test"

[input]
path = "./minutes.txt"

[output]
path = "./reports"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.project.name, "File Test");
    }
}
