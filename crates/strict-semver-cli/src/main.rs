mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use std::process::ExitCode;

use config::SemverConfig;

#[derive(Parser, Debug)]
#[command(name = "semver")]
#[command(about = "Parse, compare, sort and bump Semantic Versioning 2.0.0 versions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a version and print its components
    Parse(commands::ParseArgs),

    /// Compare two versions by precedence
    Compare(commands::CompareArgs),

    /// Sort versions by precedence
    Sort(commands::SortArgs),

    /// Print the next major, minor or patch version
    Bump(commands::BumpArgs),

    /// Check that versions are valid
    Validate(commands::ValidateArgs),
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = SemverConfig::load_from_cwd()?.unwrap_or_default();
    log::debug!("Configuration: {:?}", config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Parse(args) => commands::parse(args, &config, &mut out),
        Commands::Compare(args) => commands::compare(args, &mut out),
        Commands::Sort(args) => commands::sort(args, &config, io::stdin().lock(), &mut out),
        Commands::Bump(args) => commands::bump(args, &mut out),
        Commands::Validate(args) => commands::validate(args, &mut out),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::FAILURE
        }
    }
}
