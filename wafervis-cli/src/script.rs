//! Session scripts: one UI command per line, `#` starts a comment

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use wafervis_core::{Direction, FlagName, UnitIndex};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' is missing its {argument}")]
    MissingArgument {
        line: usize,
        command: &'static str,
        argument: &'static str,
    },

    #[error("line {line}: invalid {argument} '{value}'")]
    InvalidArgument {
        line: usize,
        argument: &'static str,
        value: String,
    },

    #[error("line {line}: unexpected '{value}' after '{command}'")]
    TrailingArgument {
        line: usize,
        command: &'static str,
        value: String,
    },
}

/// One UI action replayed against a session
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Switch to auto mode, optionally straight into a detail tier
    Auto {
        focus: Option<UnitIndex>,
        tier_one: bool,
        tier_two: bool,
    },
    Manual,
    /// Zoom the stage; `unit` is the hovered unit, if any
    Zoom { scale: f64, unit: Option<UnitIndex> },
    Nav(Direction),
    /// Pointer drag by `(dx, dy)` leaving the view centered on `(cx, cy)`
    Drag { dx: f64, dy: f64, cx: f64, cy: f64 },
    One(UnitIndex),
    Two,
    Leave,
    Flag { name: FlagName, value: bool },
    Show,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Auto { focus, tier_one, tier_two } => {
                match focus {
                    Some(unit) => write!(f, "auto {}", unit)?,
                    None => f.write_str("auto -")?,
                }
                if *tier_one {
                    f.write_str(" one")?;
                }
                if *tier_two {
                    f.write_str(" two")?;
                }
                Ok(())
            }
            Command::Manual => f.write_str("manual"),
            Command::Zoom { scale, unit: Some(unit) } => write!(f, "zoom {} {}", scale, unit),
            Command::Zoom { scale, unit: None } => write!(f, "zoom {}", scale),
            Command::Nav(direction) => write!(f, "nav {}", direction),
            Command::Drag { dx, dy, cx, cy } => write!(f, "drag {} {} {} {}", dx, dy, cx, cy),
            Command::One(unit) => write!(f, "one {}", unit),
            Command::Two => f.write_str("two"),
            Command::Leave => f.write_str("leave"),
            Command::Flag { name, value } => {
                write!(f, "flag {} {}", name, if *value { "on" } else { "off" })
            }
            Command::Show => f.write_str("show"),
        }
    }
}

const COMMANDS: [&str; 10] = [
    "auto", "manual", "zoom", "nav", "drag", "one", "two", "leave", "flag", "show",
];

/// A parsed command and the (1-based) line it came from
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptLine {
    pub line: usize,
    pub command: Command,
}

/// Parse a whole script, skipping blank lines and comments.
pub fn parse_script(source: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    let mut lines = Vec::new();
    for (number, raw) in source.lines().enumerate() {
        let line = number + 1;
        let text = raw.split('#').next().unwrap_or_default().trim();
        if text.is_empty() {
            continue;
        }
        let command = parse_command(line, text)?;
        lines.push(ScriptLine { line, command });
    }
    Ok(lines)
}

struct Args<'a> {
    line: usize,
    command: &'static str,
    tokens: std::str::SplitWhitespace<'a>,
}

impl<'a> Args<'a> {
    fn next(&mut self, argument: &'static str) -> Result<&'a str, ScriptError> {
        self.tokens.next().ok_or(ScriptError::MissingArgument {
            line: self.line,
            command: self.command,
            argument,
        })
    }

    fn parse<T: FromStr>(&mut self, argument: &'static str) -> Result<T, ScriptError> {
        let value = self.next(argument)?;
        self.convert(argument, value)
    }

    fn parse_optional<T: FromStr>(&mut self, argument: &'static str) -> Result<Option<T>, ScriptError> {
        self.tokens
            .next()
            .map(|value| self.convert(argument, value))
            .transpose()
    }

    fn convert<T: FromStr>(&self, argument: &'static str, value: &str) -> Result<T, ScriptError> {
        value.parse().map_err(|_| ScriptError::InvalidArgument {
            line: self.line,
            argument,
            value: value.to_string(),
        })
    }

    fn finish(mut self) -> Result<(), ScriptError> {
        match self.tokens.next() {
            Some(value) => Err(ScriptError::TrailingArgument {
                line: self.line,
                command: self.command,
                value: value.to_string(),
            }),
            None => Ok(()),
        }
    }
}

fn parse_command(line: usize, text: &str) -> Result<Command, ScriptError> {
    let mut tokens = text.split_whitespace();
    let name = tokens.next().unwrap_or_default();
    let command = COMMANDS
        .iter()
        .copied()
        .find(|&command| command == name)
        .ok_or_else(|| ScriptError::UnknownCommand {
            line,
            command: name.to_string(),
        })?;
    let mut args = Args { line, command, tokens };

    let parsed = match command {
        "auto" => {
            let focus = match args.next("focus unit")? {
                "-" => None,
                unit => Some(args.convert("focus unit", unit)?),
            };
            let (mut tier_one, mut tier_two) = (false, false);
            while let Some(tier) = args.tokens.next() {
                match tier {
                    "one" => tier_one = true,
                    "two" => tier_two = true,
                    other => {
                        return Err(ScriptError::InvalidArgument {
                            line,
                            argument: "tier",
                            value: other.to_string(),
                        })
                    }
                }
            }
            Command::Auto { focus, tier_one, tier_two }
        }
        "manual" => Command::Manual,
        "zoom" => Command::Zoom {
            scale: args.parse("scale")?,
            unit: args.parse_optional("unit")?,
        },
        "nav" => Command::Nav(args.parse("direction")?),
        "drag" => Command::Drag {
            dx: args.parse("drag x")?,
            dy: args.parse("drag y")?,
            cx: args.parse("center x")?,
            cy: args.parse("center y")?,
        },
        "one" => Command::One(args.parse("unit")?),
        "two" => Command::Two,
        "leave" => Command::Leave,
        "flag" => {
            let name = args.parse("flag name")?;
            let value = match args.next("flag value")? {
                "on" | "true" => true,
                "off" | "false" => false,
                other => {
                    return Err(ScriptError::InvalidArgument {
                        line,
                        argument: "flag value",
                        value: other.to_string(),
                    })
                }
            };
            Command::Flag { name, value }
        }
        _ => Command::Show,
    };

    args.finish()?;
    Ok(parsed)
}
