use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod error;
mod script;
mod session;

use config::Config;
use error::{print_error_and_exit, CliError};
use wafervis_core::UnitIndex;

#[derive(Parser)]
#[command(name = "wafervis")]
#[command(about = "Wafervis - level-of-detail wafer visualization")]
#[command(version)]
#[command(long_about = "
Wafervis drives the level-of-detail controller of a wafer visualization
headlessly: it replays scripted UI sessions and reports which units are
shown in which detail tier.

Examples:
  wafervis replay --script session.txt
  wafervis replay --script session.txt --json
  wafervis neighbors 147
  wafervis config --example --output wafervis.toml
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay a session script against a headless scene
    Replay {
        /// Script file, one command per line
        #[arg(short, long)]
        script: PathBuf,

        /// Print one JSON object per command
        #[arg(long)]
        json: bool,

        /// Stop at the first rejected command
        #[arg(long)]
        strict: bool,
    },

    /// Show the neighbors and detail neighborhood of a unit
    Neighbors {
        /// Unit index
        unit: UnitIndex,
    },

    /// Print or write a configuration file
    Config {
        /// Use the built-in defaults instead of the loaded configuration
        #[arg(long)]
        example: bool,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite an existing output file
        #[arg(long)]
        force: bool,
    },
}

fn setup_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Replay { script, json, strict } => {
            commands::replay::execute(&config, script, json, strict)?;
        }

        Commands::Neighbors { unit } => {
            commands::neighbors::execute(&config, unit)?;
        }

        Commands::Config { example, output, force } => {
            commands::config::execute(&config, example, output, force)?;
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    if let Err(err) = run(cli) {
        if let Some(cli_err) = err.downcast_ref::<CliError>() {
            print_error_and_exit(cli_err);
        }
        return Err(err);
    }
    Ok(())
}
