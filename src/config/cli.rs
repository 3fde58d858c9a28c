use crate::strategies::{BonusKind, RevenueKind};
use crate::utils::error::{ReportError, Result};
use crate::utils::validation::{
    validate_one_of, validate_path, validate_required_field, Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "sales-report")]
#[command(about = "Builds a per-seller sales performance report from purchase data")]
pub struct CliConfig {
    /// Path to the JSON sales data bundle
    #[arg(long)]
    pub input: Option<String>,

    /// Load input, output and strategy settings from a TOML file instead
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Output formats, comma separated (csv, json)
    #[arg(long, value_delimiter = ',', default_value = "json")]
    pub formats: Vec<String>,

    #[arg(long, value_enum, default_value = "cost-basis")]
    pub revenue_strategy: RevenueKind,

    #[arg(long, value_enum, default_value = "rank-scaled")]
    pub bonus_strategy: BonusKind,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        // --config supplies the input path itself and is validated on load
        match &self.config {
            Some(_) => {
                if self.input.is_some() {
                    return Err(ReportError::ConfigError {
                        message: "--input and --config cannot be combined; the config file \
                                  supplies the input path"
                            .to_string(),
                    });
                }
            }
            None => {
                let input = validate_required_field("input", &self.input)?;
                validate_path("input", input)?;
            }
        }
        validate_path("output_path", &self.output_path)?;
        for format in &self.formats {
            validate_one_of("formats", format, &["csv", "json"])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            input: Some("./sales.json".to_string()),
            config: None,
            output_path: "./output".to_string(),
            formats: vec!["json".to_string()],
            revenue_strategy: RevenueKind::CostBasis,
            bonus_strategy: BonusKind::RankScaled,
            verbose: false,
            log_json: false,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_missing_input_without_config_file_fails() {
        let mut config = base_config();
        config.input = None;
        assert!(config.validate().is_err());

        config.config = Some("./run.toml".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_input_combined_with_config_file_fails() {
        let mut config = base_config();
        config.config = Some("./run.toml".to_string());
        assert!(matches!(
            config.validate(),
            Err(ReportError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_unsupported_format_fails() {
        let mut config = base_config();
        config.formats = vec!["xml".to_string()];
        assert!(config.validate().is_err());
    }
}
