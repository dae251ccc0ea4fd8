//! Command language: parsing, dispatch and output rendering.

pub mod commands;
pub mod logging;
pub mod output;

pub use commands::{execute, Command, CommandRunner, Outcome, RunSummary};
pub use logging::logger_builder;
pub use output::{render, CommandResponse, ErrorOutput, OutputFormat};
