use crate::strategies::{BonusKind, RevenueKind};
use crate::utils::error::{ReportError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_one_of, validate_path, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Run configuration loaded from a TOML file, the file-driven alternative
/// to passing individual CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub report: ReportMeta,
    pub input: InputConfig,
    pub output: OutputConfig,
    #[serde(default)]
    pub strategies: StrategiesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    pub formats: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StrategiesConfig {
    #[serde(default)]
    pub revenue: RevenueKind,
    #[serde(default)]
    pub bonus: BonusKind,
}

impl ReportConfig {
    pub fn from_str(content: &str) -> Result<Self> {
        let config: ReportConfig = toml::from_str(content)?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }
}

impl Validate for ReportConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("report.name", &self.report.name)?;
        validate_path("input.path", &self.input.path)?;
        validate_path("output.path", &self.output.path)?;

        if self.output.formats.is_empty() {
            return Err(ReportError::MissingConfigError {
                field: "output.formats".to_string(),
            });
        }
        for format in &self.output.formats {
            validate_one_of("output.formats", format, &["csv", "json"])?;
        }
        Ok(())
    }
}
