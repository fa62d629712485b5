//! Command-line grammar for driving a `TodoStore`.
//!
//! Each argument is one command; positions are zero-based.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Parsed command-line argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `section:<title>`
    AddSection { title: String },
    /// `todo:<section>:<title>`
    AddTodo { section: usize, title: String },
    /// `toggle:<section>:<todo>`
    Toggle { section: usize, todo: usize },
    /// `delete:<section>:<i,j,...>`
    Delete { section: usize, indices: Vec<usize> },
    /// `--log-dir=<path>`
    LogDir(String),
    /// `--log-level=<level>`, already normalized.
    LogLevel(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Unrecognized command prefix.
    Unknown(String),
    /// Command is missing a `:`-separated field.
    MissingField { command: String, field: &'static str },
    /// A position field is not a non-negative integer.
    InvalidIndex { command: String, value: String },
    /// A position refers to no section or todo in the store.
    NoSuchPosition { command: String },
    /// `--log-level` names an unsupported level.
    InvalidLogLevel { value: String, reason: String },
    /// `--log-level` was given without `--log-dir`.
    LogLevelWithoutDir,
    /// Logging backend refused to start.
    Logging(String),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown(arg) => write!(f, "unknown command: {arg}"),
            Self::MissingField { command, field } => {
                write!(f, "command `{command}` is missing field `{field}`")
            }
            Self::InvalidIndex { command, value } => {
                write!(f, "command `{command}` has invalid position `{value}`")
            }
            Self::NoSuchPosition { command } => {
                write!(f, "command `{command}` refers to a missing section or todo")
            }
            Self::InvalidLogLevel { value, reason } => {
                write!(f, "invalid --log-level `{value}`: {reason}")
            }
            Self::LogLevelWithoutDir => write!(f, "--log-level requires --log-dir"),
            Self::Logging(message) => write!(f, "logging setup failed: {message}"),
        }
    }
}

impl Error for CommandError {}

impl Command {
    pub fn parse(arg: &str) -> Result<Self, CommandError> {
        if let Some(dir) = arg.strip_prefix("--log-dir=") {
            return Ok(Self::LogDir(dir.to_string()));
        }
        if let Some(level) = arg.strip_prefix("--log-level=") {
            return todo_core::parse_log_level(level)
                .map(Self::LogLevel)
                .map_err(|reason| CommandError::InvalidLogLevel {
                    value: level.to_string(),
                    reason,
                });
        }

        let (kind, rest) = arg
            .split_once(':')
            .ok_or_else(|| CommandError::Unknown(arg.to_string()))?;
        match kind {
            "section" => Ok(Self::AddSection {
                title: rest.to_string(),
            }),
            "todo" => {
                let (section, title) = split_field(arg, rest, "title")?;
                Ok(Self::AddTodo {
                    section: parse_index(arg, section)?,
                    title: title.to_string(),
                })
            }
            "toggle" => {
                let (section, todo) = split_field(arg, rest, "todo")?;
                Ok(Self::Toggle {
                    section: parse_index(arg, section)?,
                    todo: parse_index(arg, todo)?,
                })
            }
            "delete" => {
                let (section, list) = split_field(arg, rest, "indices")?;
                let indices = list
                    .split(',')
                    .map(|value| parse_index(arg, value))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Self::Delete {
                    section: parse_index(arg, section)?,
                    indices,
                })
            }
            _ => Err(CommandError::Unknown(arg.to_string())),
        }
    }
}

fn split_field<'a>(
    arg: &str,
    rest: &'a str,
    field: &'static str,
) -> Result<(&'a str, &'a str), CommandError> {
    rest.split_once(':').ok_or_else(|| CommandError::MissingField {
        command: arg.to_string(),
        field,
    })
}

fn parse_index(arg: &str, value: &str) -> Result<usize, CommandError> {
    value
        .trim()
        .parse()
        .map_err(|_| CommandError::InvalidIndex {
            command: arg.to_string(),
            value: value.to_string(),
        })
}
