//! Error handling for the wafervis CLI

use std::path::PathBuf;
use thiserror::Error;

use wafervis_core::{GridError, LodError};

use crate::script::ScriptError;

/// Main error type for wafervis CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Input/Output error: {message}")]
    Io { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Script error in {file}: {source}")]
    Script {
        file: String,
        #[source]
        source: ScriptError,
    },

    #[error("Grid error: {0}")]
    Grid(#[from] GridError),

    #[error("Controller error at line {line}: {source}")]
    Controller {
        line: usize,
        #[source]
        source: LodError,
    },
}

impl CliError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config { message: message.into() }
    }

    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io { message: message.into() }
    }

    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    pub fn script<S: Into<String>>(file: S, source: ScriptError) -> Self {
        Self::Script {
            file: file.into(),
            source,
        }
    }

    pub fn controller(line: usize, source: LodError) -> Self {
        Self::Controller { line, source }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Provide helpful error messages and suggestions
pub fn format_error_with_suggestions(error: &CliError) -> String {
    let mut message = error.to_string();

    match error {
        CliError::FileNotFound { path } => {
            message.push_str(&format!(
                "\n\nSuggestions:\n\
                 • Check that the file path is correct: {}\n\
                 • Ensure you have read permissions for the file",
                path.display()
            ));
        }

        CliError::Script { .. } => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Commands: auto, manual, zoom, nav, drag, one, two, leave, flag, show\n\
                 • Directions are north, east, south, west (or n, e, s, w)\n\
                 • Lines starting with '#' are ignored"
            );
        }

        CliError::Controller { source, .. } => match source {
            LodError::Disabled => {
                message.push_str(
                    "\n\nSuggestions:\n\
                     • Switch to auto mode first with 'auto -'"
                );
            }
            LodError::UnitOutOfRange { .. } => {
                message.push_str(
                    "\n\nSuggestions:\n\
                     • Check the [grid] section of your configuration\n\
                     • Use 'wafervis neighbors <unit>' to inspect a unit"
                );
            }
            _ => {}
        },

        CliError::Config { .. } | CliError::Grid(_) => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Check your wafervis.toml configuration file\n\
                 • Use 'wafervis config --example' to generate a sample configuration"
            );
        }

        _ => {}
    }

    message
}

/// Print error with helpful suggestions and exit
pub fn print_error_and_exit(error: &CliError) -> ! {
    eprintln!("Error: {}", format_error_with_suggestions(error));
    std::process::exit(1);
}
