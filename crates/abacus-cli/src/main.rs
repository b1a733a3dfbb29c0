use abacus_cli::logging::init_logging;
use abacus_cli::{AbacusConfig, OutputFormat, run_eval, run_repl};
use clap::{Args, Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};

/// Keypad calculator for the terminal
#[derive(Parser)]
#[command(name = "abacus", version)]
#[command(about = "Keypad calculator driven by key sequences")]
struct Cli {
    /// Configuration file (defaults to $ABACUS_CONFIG_PATH or ./abacus.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a key sequence such as "3+4*2="
    Eval(EvalArgs),
    /// Read key sequences from stdin, one line at a time
    Repl(ReplArgs),
}

#[derive(Args)]
struct EvalArgs {
    /// Keys to press; `{Enter}` and `{Escape}` spell named keys
    keys: String,

    /// Print the display after every key
    #[arg(long)]
    trace: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Args)]
struct ReplArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AbacusConfig::load_from(path)?,
        None => AbacusConfig::load()?,
    }
    .apply_env_overrides()?;

    init_logging(&config.logging)?;

    match &config.source {
        Some(path) => info!(path = %path.display(), "Loaded configuration"),
        None => warn!("Configuration file not found. Using default configuration."),
    }
    info!(version = env!("CARGO_PKG_VERSION"), precision = config.engine.precision, "Starting Abacus");

    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    match cli.command {
        Commands::Eval(args) => {
            run_eval(&args.keys, args.trace, args.format, config.engine, &mut stdout, &mut stderr)
        }
        Commands::Repl(args) => {
            run_repl(io::stdin().lock(), args.format, config.engine, &mut stdout, &mut stderr)
        }
    }
}
