//! Command parsing and dispatch for the line-oriented command language.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::config::NetworkConfig;
use crate::engine::{
    FriendList, FriendScore, MutualList, NetworkStats, Profile, QueryEngine, Separation,
    Suggestions,
};
use crate::format::NetworkReader;
use crate::graph::SocialGraph;
use crate::types::{SocialError, SocialResult};

use super::output::{render, OutputFormat};

/// A parsed command line.
///
/// Missing arguments parse as empty identifiers, which no user has, so they
/// surface as `UserNotFound` when executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ViewProfile { id: String },
    ListFriends { id: String },
    ListMutuals { a: String, b: String },
    FindSeparation { a: String, b: String },
    SuggestFriends { id: String },
    FriendScore { a: String, b: String },
    TotalUsers { countries: Vec<String> },
    Unrecognised { keyword: String },
}

impl Command {
    /// Parse a whitespace-separated command line.
    pub fn parse(line: &str) -> Self {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let keyword = tokens.first().copied().unwrap_or_default();
        let arg = |i: usize| tokens.get(i).copied().unwrap_or_default().to_string();

        match keyword {
            "ViewProfile" => Self::ViewProfile { id: arg(1) },
            "ListFriends" => Self::ListFriends { id: arg(1) },
            "ListMutuals" => Self::ListMutuals { a: arg(1), b: arg(2) },
            "FindSeparation" => Self::FindSeparation { a: arg(1), b: arg(2) },
            "SuggestFriends" => Self::SuggestFriends { id: arg(1) },
            "FriendScore" => Self::FriendScore { a: arg(1), b: arg(2) },
            "TotalUsers" => Self::TotalUsers {
                countries: tokens[1..].iter().map(|t| t.to_string()).collect(),
            },
            other => Self::Unrecognised {
                keyword: other.to_string(),
            },
        }
    }

    /// The command keyword.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ViewProfile { .. } => "ViewProfile",
            Self::ListFriends { .. } => "ListFriends",
            Self::ListMutuals { .. } => "ListMutuals",
            Self::FindSeparation { .. } => "FindSeparation",
            Self::SuggestFriends { .. } => "SuggestFriends",
            Self::FriendScore { .. } => "FriendScore",
            Self::TotalUsers { .. } => "TotalUsers",
            Self::Unrecognised { .. } => "Unrecognised",
        }
    }
}

/// Structured result of one successfully executed command.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Outcome {
    Profile(Profile),
    Friends(FriendList),
    Mutuals(MutualList),
    Separation {
        from: String,
        to: String,
        separation: Separation,
    },
    Suggestions(Suggestions),
    FriendScore(FriendScore),
    TotalUsers { count: usize },
}

/// Run one command against the graph.
pub fn execute(
    engine: &QueryEngine,
    graph: &SocialGraph,
    command: &Command,
) -> SocialResult<Outcome> {
    Ok(match command {
        Command::ViewProfile { id } => Outcome::Profile(engine.profile(graph, id)?),
        Command::ListFriends { id } => Outcome::Friends(engine.friends(graph, id)?),
        Command::ListMutuals { a, b } => Outcome::Mutuals(engine.mutuals(graph, a, b)?),
        Command::FindSeparation { a, b } => Outcome::Separation {
            from: a.clone(),
            to: b.clone(),
            separation: engine.separation(graph, a, b)?,
        },
        Command::SuggestFriends { id } => Outcome::Suggestions(engine.suggest(graph, id)?),
        Command::FriendScore { a, b } => Outcome::FriendScore(engine.friend_score(graph, a, b)?),
        Command::TotalUsers { countries } => {
            Outcome::TotalUsers {
                count: engine.total_users(graph, countries.as_slice()),
            }
        }
        Command::Unrecognised { keyword } => {
            return Err(SocialError::UnrecognisedCommand(keyword.clone()))
        }
    })
}

/// Counters for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Commands executed, including failed ones.
    pub processed: usize,
    /// Commands that failed with a recoverable error.
    pub failed: usize,
}

/// Executes command lines against a graph and writes rendered results.
pub struct CommandRunner<'g, W: Write> {
    graph: &'g SocialGraph,
    engine: QueryEngine,
    format: OutputFormat,
    out: W,
    summary: RunSummary,
}

impl<'g, W: Write> CommandRunner<'g, W> {
    /// Create a runner writing to `out`.
    pub fn new(graph: &'g SocialGraph, engine: QueryEngine, format: OutputFormat, out: W) -> Self {
        Self {
            graph,
            engine,
            format,
            out,
            summary: RunSummary::default(),
        }
    }

    /// Execute and render a single command line.
    ///
    /// Recoverable failures are rendered and do not stop the run; any other
    /// error is returned without output. Blank lines are ignored.
    pub fn run_line(&mut self, line: &str) -> SocialResult<()> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return Ok(());
        }

        let command = Command::parse(line);
        log::trace!("Dispatching {}", command.name());
        let result = match execute(&self.engine, self.graph, &command) {
            Err(e) if !e.is_recoverable() => return Err(e),
            other => other,
        };

        self.summary.processed += 1;
        if let Err(e) = &result {
            log::debug!("{}: {}", command.name(), e);
            self.summary.failed += 1;
        }

        render(&mut self.out, self.format, line, &result)
    }

    /// Execute every line from `reader`.
    pub fn run_all(&mut self, reader: impl BufRead) -> SocialResult<RunSummary> {
        for line in reader.lines() {
            self.run_line(&line?)?;
        }
        self.out.flush()?;
        Ok(self.summary)
    }

    /// Counters so far.
    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    /// Recover the output sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Load a network from its two record files.
pub fn load_network(users: &Path, friendships: &Path) -> SocialResult<SocialGraph> {
    let graph = NetworkReader::read_from_files(users, friendships)?;
    log::info!(
        "Loaded {} users and {} friendships",
        graph.user_count(),
        graph.friendship_count()
    );
    Ok(graph)
}

/// Run a batch of commands from `commands` (or stdin) into `output` (or stdout).
pub fn cmd_run(
    graph: &SocialGraph,
    engine: QueryEngine,
    format: OutputFormat,
    commands: Option<&Path>,
    output: Option<&Path>,
) -> SocialResult<RunSummary> {
    let input: Box<dyn BufRead> = match commands {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(std::io::stdin().lock()),
    };
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(std::io::stdout().lock()),
    };

    let mut runner = CommandRunner::new(graph, engine, format, sink);
    let summary = runner.run_all(input)?;
    log::info!(
        "Processed {} commands ({} reported errors)",
        summary.processed,
        summary.failed
    );
    Ok(summary)
}

/// Run a single command given as words on the command line.
pub fn cmd_query(
    graph: &SocialGraph,
    engine: QueryEngine,
    format: OutputFormat,
    words: &[String],
) -> SocialResult<()> {
    let stdout = std::io::stdout().lock();
    let mut runner = CommandRunner::new(graph, engine, format, stdout);
    runner.run_line(&words.join(" "))?;
    runner.into_inner().flush()?;
    Ok(())
}

/// Print statistics about the loaded network.
pub fn cmd_info(graph: &SocialGraph, format: OutputFormat) -> SocialResult<()> {
    let stats = NetworkStats::collect(graph);
    let mut out = std::io::stdout().lock();
    write_info(&mut out, &stats, format)
}

/// Render network statistics.
pub fn write_info(
    out: &mut impl Write,
    stats: &NetworkStats,
    format: OutputFormat,
) -> SocialResult<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, stats)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            writeln!(out, "Network Statistics:")?;
            writeln!(out, "  Users: {}", stats.users)?;
            writeln!(out, "  Friendships: {}", stats.friendships)?;
            writeln!(out, "  Avg friends per user: {:.2}", stats.avg_friends)?;
            writeln!(out, "  Max friends per user: {}", stats.max_friends)?;
            writeln!(out, "  Users without friends: {}", stats.isolated)?;
            writeln!(out, "  Connected components: {}", stats.components)?;
            writeln!(out, "  Largest component: {}", stats.largest_component)?;
            writeln!(out)?;
            writeln!(out, "  Users per country:")?;
            for (code, count) in &stats.countries {
                writeln!(out, "    {}: {}", code, count)?;
            }
        }
    }
    Ok(())
}

/// Print the effective configuration.
pub fn cmd_config(config: &NetworkConfig, format: OutputFormat) -> SocialResult<()> {
    let mut out = std::io::stdout().lock();
    write_config(&mut out, config, format)
}

/// Render a configuration as TOML, or as JSON in JSON mode.
pub fn write_config(
    out: &mut impl Write,
    config: &NetworkConfig,
    format: OutputFormat,
) -> SocialResult<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, config)?;
            writeln!(out)?;
        }
        OutputFormat::Text => write!(out, "{}", config.to_toml_string()?)?,
    }
    Ok(())
}
