//! Replay command implementation - run a session script against a headless scene

use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{CliError, CliResult};
use crate::script::{parse_script, Command, ScriptLine};
use crate::session::{Session, Snapshot};

/// One JSON line of replay output
#[derive(Debug, Serialize)]
struct Record<'a> {
    line: usize,
    command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(flatten)]
    snapshot: &'a Snapshot,
}

pub fn execute(config: &Config, script: PathBuf, json: bool, strict: bool) -> Result<()> {
    log::info!("Replaying session script: {}", script.display());
    let lines = load_script(&script)?;
    log::info!("Parsed {} commands", lines.len());

    let mut session = Session::new(config)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&mut session, &lines, json, strict, &mut out)?;

    let snapshot = session.snapshot();
    log::info!(
        "Replay finished in {} mode after {} redraws",
        snapshot.mode,
        snapshot.frames
    );
    Ok(())
}

fn load_script(path: &Path) -> CliResult<Vec<ScriptLine>> {
    if !path.exists() {
        return Err(CliError::file_not_found(path.to_path_buf()));
    }
    let source = std::fs::read_to_string(path)?;
    parse_script(&source).map_err(|err| CliError::script(path.display().to_string(), err))
}

/// Execute every line, writing one report per command to `out`.
///
/// Rejected transitions are reported and skipped unless `strict` is set.
fn run<W: Write>(
    session: &mut Session,
    lines: &[ScriptLine],
    json: bool,
    strict: bool,
    out: &mut W,
) -> Result<()> {
    for script_line in lines {
        let command = &script_line.command;
        let error = match session.execute(command) {
            Ok(()) => None,
            Err(err) if strict => return Err(CliError::controller(script_line.line, err).into()),
            Err(err) => {
                log::warn!("Line {}: '{}' rejected: {}", script_line.line, command, err);
                Some(err.to_string())
            }
        };

        let snapshot = session.snapshot();
        if json {
            let record = Record {
                line: script_line.line,
                command: command.to_string(),
                error,
                snapshot: &snapshot,
            };
            writeln!(out, "{}", serde_json::to_string(&record)?)?;
        } else {
            let report = match command {
                Command::Show => session.describe(),
                _ => snapshot.to_string(),
            };
            match error {
                Some(error) => writeln!(out, "{:>4} {:<24} ! {}", script_line.line, command.to_string(), error)?,
                None => writeln!(out, "{:>4} {:<24} {}", script_line.line, command.to_string(), report)?,
            }
        }
    }
    Ok(())
}
