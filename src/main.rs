use anyhow::Context;
use clap::Parser;
use sales_report::adapters;
use sales_report::config::{CliConfig, ReportConfig};
use sales_report::strategies::{BonusKind, RevenueKind};
use sales_report::utils::{logger, validation::Validate};
use sales_report::SalesAnalyzer;
use std::path::Path;

struct RunSettings {
    input: String,
    output_path: String,
    formats: Vec<String>,
    revenue: RevenueKind,
    bonus: BonusKind,
}

impl RunSettings {
    /// A TOML run configuration replaces the individual flags when given;
    /// combining it with --input is rejected up front.
    fn resolve(cli: &CliConfig) -> anyhow::Result<Self> {
        cli.validate()?;
        match &cli.config {
            Some(path) => {
                let config = ReportConfig::from_file(path)
                    .with_context(|| format!("failed to load run config from {}", path))?;
                config.validate()?;
                tracing::debug!("Loaded run config '{}' from {}", config.report.name, path);
                Ok(Self {
                    input: config.input.path,
                    output_path: config.output.path,
                    formats: config.output.formats,
                    revenue: config.strategies.revenue,
                    bonus: config.strategies.bonus,
                })
            }
            None => {
                let input = cli.input.clone().context("--input is required")?;
                Ok(Self {
                    input,
                    output_path: cli.output_path.clone(),
                    formats: cli.formats.clone(),
                    revenue: cli.revenue_strategy,
                    bonus: cli.bonus_strategy,
                })
            }
        }
    }
}

fn run(cli: &CliConfig) -> anyhow::Result<Vec<String>> {
    let settings = RunSettings::resolve(cli)?;

    tracing::info!("Loading sales data from {}", settings.input);
    let value = adapters::load_sales_data(&settings.input)?;

    let analyzer = SalesAnalyzer::new(settings.revenue, settings.bonus);
    let rows = analyzer.analyze_value(&value)?;
    tracing::info!("Analyzed {} ranked sellers", rows.len());

    let mut written = Vec::new();
    for format in &settings.formats {
        let path = Path::new(&settings.output_path).join(format!("sales_report.{}", format));
        match format.as_str() {
            "csv" => adapters::write_csv_report(&path, &rows)?,
            _ => adapters::write_json_report(&path, &rows)?,
        }
        written.push(path.display().to_string());
    }
    Ok(written)
}

fn main() {
    let cli = CliConfig::parse();
    logger::init_cli_logger(cli.verbose, cli.log_json);

    tracing::info!("Starting sales-report");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match run(&cli) {
        Ok(written) => {
            tracing::info!("Report generation completed");
            for path in written {
                println!("Report written to {}", path);
            }
        }
        Err(e) => {
            tracing::error!("Report generation failed: {:#}", e);
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
