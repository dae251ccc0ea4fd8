//! Command output rendering (text, JSON).
//!
//! Text output reproduces the line-oriented report format: each block
//! echoes the command line and ends with a blank line.

use std::io::Write;

use serde::Serialize;

use crate::engine::Separation;
use crate::types::{SocialError, SocialResult};

use super::commands::Outcome;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report blocks.
    #[default]
    Text,
    /// One JSON object per command.
    Json,
}

impl OutputFormat {
    /// Parse a format name, as used in configuration files.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Structured per-command response for JSON output.
#[derive(Debug, Serialize)]
pub struct CommandResponse<'a> {
    pub command: &'a str,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<&'a Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorOutput>,
}

/// Structured error output.
#[derive(Debug, Serialize)]
pub struct ErrorOutput {
    pub code: &'static str,
    pub message: String,
}

impl From<&SocialError> for ErrorOutput {
    fn from(err: &SocialError) -> Self {
        Self {
            code: err.code(),
            message: err.to_string(),
        }
    }
}

/// Write the result of one command in the requested format.
pub fn render(
    out: &mut impl Write,
    format: OutputFormat,
    line: &str,
    result: &SocialResult<Outcome>,
) -> SocialResult<()> {
    match format {
        OutputFormat::Text => render_text(out, line, result),
        OutputFormat::Json => render_json(out, line, result),
    }
}

fn render_json(
    out: &mut impl Write,
    line: &str,
    result: &SocialResult<Outcome>,
) -> SocialResult<()> {
    let response = match result {
        Ok(outcome) => CommandResponse {
            command: line,
            success: true,
            data: Some(outcome),
            error: None,
        },
        Err(err) => CommandResponse {
            command: line,
            success: false,
            data: None,
            error: Some(ErrorOutput::from(err)),
        },
    };
    serde_json::to_writer(&mut *out, &response)?;
    writeln!(out)?;
    Ok(())
}

fn render_text(
    out: &mut impl Write,
    line: &str,
    result: &SocialResult<Outcome>,
) -> SocialResult<()> {
    writeln!(out, "{}", line)?;
    match result {
        Ok(outcome) => write_outcome(out, outcome)?,
        Err(SocialError::UserNotFound(_)) => writeln!(out, "Error: User not found.")?,
        Err(SocialError::UnrecognisedCommand(_)) => writeln!(out, "Error: Unrecognised command.")?,
        Err(other) => writeln!(out, "Error: {}", other)?,
    }
    writeln!(out)?;
    Ok(())
}

fn write_outcome(out: &mut impl Write, outcome: &Outcome) -> std::io::Result<()> {
    match outcome {
        Outcome::Profile(p) => {
            writeln!(out, "Name: {}", p.name)?;
            writeln!(out, "Age: {}", p.age)?;
            writeln!(out, "Country: {}", p.country)?;
            writeln!(out, "Activity Rate: {}%", p.activity_percent)?;
            writeln!(out, "Friends: {}", p.friend_count)?;
        }
        Outcome::Friends(list) => {
            writeln!(out, "{} friend(s) found.", list.count)?;
            for f in &list.friends {
                writeln!(out, "{} [ID:{}]", f.name, f.id)?;
            }
        }
        Outcome::Mutuals(list) => {
            writeln!(out, "{} mutual friend(s) found.", list.count)?;
            for m in &list.mutuals {
                writeln!(out, "{} [ID:{}]", m.name, m.id)?;
            }
        }
        Outcome::Separation {
            from,
            to,
            separation,
        } => match separation {
            Separation::Degrees(d) => {
                writeln!(out, "Separation between {} and {} is {}.", from, to, d)?
            }
            Separation::NoConnection => writeln!(out, "No connection found.")?,
        },
        Outcome::Suggestions(s) => {
            writeln!(out, "{} suggestion(s) found.", s.total)?;
            for entry in &s.suggestions {
                writeln!(
                    out,
                    "{} [ID:{}], {} mutual friend(s)",
                    entry.name, entry.id, entry.mutual_count
                )?;
            }
        }
        Outcome::FriendScore(fs) => writeln!(out, "Friend Score: {:.3}", fs.score)?,
        Outcome::TotalUsers { count } => writeln!(out, "Total Users: {}", count)?,
    }
    Ok(())
}
