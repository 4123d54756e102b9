use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use crate::search::{Equation, SearchOptions, constants, find_equations};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "equidate")]
#[command(about = "Find arithmetic equations hidden in the digits of a date")]
#[command(version)]
pub struct CliArgs {
    /// Date to mine for equations, e.g. 09052005 or 09/05/2005
    pub date: String,

    /// Also search every parenthesization of each candidate
    #[arg(short, long)]
    pub grouping: bool,

    /// Reject inputs with more digits than this
    #[arg(long, default_value_t = constants::DEFAULT_MAX_DIGITS)]
    pub max_digits: usize,

    /// Stop after this many equations have been found
    #[arg(long, default_value_t = constants::DEFAULT_MAX_RESULTS)]
    pub max_results: usize,

    /// Stop after this many expression evaluations
    #[arg(long)]
    pub max_candidates: Option<u64>,

    /// Largest difference at which the two sides still count as equal
    #[arg(long, default_value_t = constants::DEFAULT_TOLERANCE)]
    pub tolerance: f64,

    /// How many equations to print; the rest are summarized
    #[arg(long, default_value_t = 20)]
    pub limit: usize,

    /// Log level
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub date: String,
    pub options: SearchOptions,
    pub limit: usize,
    pub log_level: LogLevel,
}

fn search_options(args: &CliArgs) -> SearchOptions {
    SearchOptions {
        max_digits: args.max_digits,
        allow_grouping: args.grouping,
        tolerance: args.tolerance,
        max_results: args.max_results,
        max_candidates: args.max_candidates,
    }
}

pub fn parse_args() -> CliConfig {
    let args = CliArgs::parse();
    let options = search_options(&args);
    CliConfig {
        date: args.date,
        options,
        limit: args.limit,
        log_level: args.log_level,
    }
}

pub fn init_logging(log_level: &LogLevel) {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
}

pub fn run() -> Result<()> {
    let config = parse_args();
    init_logging(&config.log_level);

    info!("Searching '{}' for equations", config.date);

    let mut equations = find_equations(&config.date, config.options)
        .with_context(|| format!("Cannot search '{}'", config.date))?;

    let mut results: Vec<Equation> = Vec::new();
    for equation in equations.by_ref() {
        results.push(equation);
    }

    info!(
        "{} expressions evaluated, {} equations found",
        equations.evaluated(),
        equations.found()
    );

    if results.is_empty() {
        println!("No equations found in '{}'.", config.date);
        return Ok(());
    }

    results.sort_by(|a, b| a.value.total_cmp(&b.value));

    println!("Found {} equations in '{}':", results.len(), config.date);
    for (index, equation) in results.iter().take(config.limit).enumerate() {
        println!("{:2}. {}  (= {})", index + 1, equation, equation.display_value());
    }
    if results.len() > config.limit {
        println!("... and {} more equations", results.len() - config.limit);
    }

    Ok(())
}
