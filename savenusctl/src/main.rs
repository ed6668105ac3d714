//! `savenusctl` binary: browse and sort a $aveNUS menu snapshot.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use savenusctl::{
    CliConfig, SortOptions, SortOutcome,
    config::{DEFAULT_CONFIG_PATH, load_env_file},
    run_fields, run_sort,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "savenusctl", about = "Browse and sort the $aveNUS menu")]
struct Cli {
    /// Path to savenus.toml (defaults to ./savenus.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sort the displayed foods, e.g. `sort PRICE ASC NAME DESC`
    Sort {
        /// JSON menu snapshot; overrides SAVENUS_MENU and menu.path
        #[arg(long)]
        menu: Option<PathBuf>,
        /// Only show foods whose name contains this word (repeatable)
        #[arg(long = "find", value_name = "KEYWORD")]
        keywords: Vec<String>,
        /// Alternating FIELD DIRECTION tokens
        #[arg(value_name = "FIELD DIRECTION")]
        tokens: Vec<String>,
    },
    /// List the fields and directions accepted by `sort`
    Fields,
}

fn load_config(flag: Option<PathBuf>) -> Result<CliConfig> {
    let required = flag.is_some();
    let path = flag.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let mut config = CliConfig::load(&path, required)
        .with_context(|| format!("loading {}", path.display()))?;
    config.apply_env(|key| std::env::var(key).ok())?;
    Ok(config)
}

fn init_tracing(default_filter: &str) {
    // Logs go to stderr so stdout stays a clean table.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    load_env_file()?;
    let config = load_config(cli.config)?;
    init_tracing(&config.logging.filter);

    let mut stdout = io::stdout().lock();
    match cli.command {
        Command::Sort {
            menu,
            keywords,
            tokens,
        } => {
            let opts = SortOptions {
                menu,
                keywords,
                tokens,
            };
            match run_sort(&opts, &config, &mut stdout)? {
                SortOutcome::Sorted { .. } => Ok(ExitCode::SUCCESS),
                SortOutcome::Rejected { message } => {
                    eprintln!("{message}");
                    Ok(ExitCode::from(2))
                }
            }
        }
        Command::Fields => {
            run_fields(&mut stdout)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
