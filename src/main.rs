mod cli;
mod config;
mod engine;
mod error;
mod input;
mod report;
mod template;
mod types;

use crate::error::SupplysightError;
use crate::types::config::SupplysightConfig;
use crate::types::factors::ResilienceFactors;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_format(
    requested: Option<&cli::ReportFormat>,
    config: Option<&SupplysightConfig>,
) -> report::OutputFormat {
    match requested {
        Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
        Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
        None => match config.and_then(|cfg| cfg.default_format()) {
            Some("json") => report::OutputFormat::Json,
            _ => report::OutputFormat::Md,
        },
    }
}

fn run() -> Result<i32, SupplysightError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    let workdir = std::env::current_dir()?;

    match cli.command {
        cli::Commands::Assess(cmd) => {
            let loaded = config::load_config(&workdir)?;
            let factors = ResilienceFactors::new(
                cmd.supplier_count,
                cmd.geo_spread,
                cmd.cost_volatility,
                cmd.lead_time,
                cmd.alt_supplier_options,
            )?;
            let assessment = engine::evaluate(&factors)?;

            let format = resolve_format(cmd.format.as_ref(), loaded.as_ref());
            println!("{}", report::render(&assessment, format)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Score(cmd) => {
            if !cmd.path.exists() {
                return Err(SupplysightError::PathNotFound(
                    cmd.path.display().to_string(),
                ));
            }

            let loaded = config::load_config(&workdir)?;
            let aliases = loaded
                .as_ref()
                .map(SupplysightConfig::aliases)
                .unwrap_or_default();

            info!(path = %cmd.path.display(), "scoring uploaded file");
            let record = input::csv::read_first_record(&cmd.path)?;
            let factors = record.to_factors(&aliases)?;
            let assessment = engine::evaluate(&factors)?;

            let format = resolve_format(cmd.format.as_ref(), loaded.as_ref());
            println!("{}", report::render(&assessment, format)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Template(cmd) => {
            match cmd.path {
                Some(path) => {
                    template::write_template(&path, cmd.no_overwrite)?;
                    println!("template file: {}", path.display());
                }
                None => print!("{}", template::template_csv()),
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Lint(cmd) => {
            if !cmd.path.exists() {
                return Err(SupplysightError::PathNotFound(
                    cmd.path.display().to_string(),
                ));
            }

            let loaded = config::load_config(&workdir)?;
            let aliases = loaded
                .as_ref()
                .map(SupplysightConfig::aliases)
                .unwrap_or_default();

            let table = input::csv::read_table(&cmd.path)?;
            let findings = input::lint_table(&table, &aliases);

            if findings.is_empty() {
                println!("lint: no findings");
                return Ok(exit_code::SUCCESS);
            }

            for finding in &findings {
                let level = if finding.blocking { "BLOCKING" } else { "WARN" };
                match finding.row {
                    Some(row) => println!("[{}] {} (row {}): {}", level, finding.id, row, finding.title),
                    None => println!("[{}] {}: {}", level, finding.id, finding.title),
                }
                println!("  {}", finding.body);
            }

            if findings.iter().any(|finding| finding.blocking) {
                Ok(exit_code::BLOCKING)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
