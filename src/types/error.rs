//! Error types for the social graph library.

use thiserror::Error;

/// All errors that can occur in the social graph library.
#[derive(Error, Debug)]
pub enum SocialError {
    /// A command referenced an identifier that is not in the graph.
    #[error("User {0:?} not found")]
    UserNotFound(String),

    /// The command keyword is not part of the command language.
    #[error("Unrecognised command: {0:?}")]
    UnrecognisedCommand(String),

    /// A record in an input file could not be parsed.
    #[error("Malformed record in {file} at line {line}: {reason}")]
    MalformedRecord {
        file: String,
        line: usize,
        reason: String,
    },

    /// Configuration file could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SocialError {
    /// Stable machine-readable code, used in JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "user_not_found",
            Self::UnrecognisedCommand(_) => "unrecognised_command",
            Self::MalformedRecord { .. } => "malformed_record",
            Self::Config(_) => "config",
            Self::Io(_) => "io",
            Self::Json(_) => "json",
        }
    }

    /// True for errors that only affect a single command.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::UserNotFound(_) | Self::UnrecognisedCommand(_))
    }
}

/// Convenience result type for social graph operations.
pub type SocialResult<T> = Result<T, SocialError>;
