//! CLI entry point for the `sgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use social_graph::cli::{commands, logger_builder, OutputFormat};
use social_graph::config::{load_config, NetworkConfig};
use social_graph::engine::QueryEngine;
use social_graph::{SocialError, SocialResult};

#[derive(Parser)]
#[command(
    name = "sgraph",
    about = "Social graph CLI: friendship queries over an in-memory network"
)]
struct Cli {
    /// Output format (defaults to the config file's setting, then "text")
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a batch of commands, one per line
    Run {
        /// Path to the user records
        users: PathBuf,
        /// Path to the friendship records
        friendships: PathBuf,
        /// Read commands from this file instead of stdin
        #[arg(long)]
        commands: Option<PathBuf>,
        /// Write results to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Run a single command, e.g. `sgraph query users.txt friends.txt SuggestFriends U1`
    Query {
        /// Path to the user records
        users: PathBuf,
        /// Path to the friendship records
        friendships: PathBuf,
        /// Command keyword followed by its arguments
        #[arg(required = true, num_args = 1..)]
        command: Vec<String>,
    },
    /// Display statistics about a network
    Info {
        /// Path to the user records
        users: PathBuf,
        /// Path to the friendship records
        friendships: PathBuf,
    },
    /// Print the effective configuration
    Config,
}

fn main() {
    let cli = Cli::parse();

    let config = match cli.config.as_deref().map(load_config).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(3);
        }
    };

    let env_filter = std::env::var("RUST_LOG").ok();
    logger_builder(cli.verbose, &config.log_level, env_filter.as_deref()).init();

    let format = cli.format.unwrap_or_else(|| {
        OutputFormat::from_name(&config.output_format).unwrap_or_else(|| {
            log::warn!(
                "Unknown output format {:?} in config, using text",
                config.output_format
            );
            OutputFormat::Text
        })
    });

    if let Err(e) = run(cli.command, &config, format) {
        eprintln!("Error: {}", e);
        let code = match &e {
            SocialError::Io(_) => 1,
            SocialError::MalformedRecord { .. } => 2,
            SocialError::Config(_) => 3,
            _ => 5,
        };
        process::exit(code);
    }
}

fn run(command: Commands, config: &NetworkConfig, format: OutputFormat) -> SocialResult<()> {
    let engine = QueryEngine::with_countries(config.country_table());

    match command {
        Commands::Run {
            users,
            friendships,
            commands: command_file,
            output,
        } => {
            let graph = commands::load_network(&users, &friendships)?;
            commands::cmd_run(
                &graph,
                engine,
                format,
                command_file.as_deref(),
                output.as_deref(),
            )?;
        }
        Commands::Query {
            users,
            friendships,
            command,
        } => {
            let graph = commands::load_network(&users, &friendships)?;
            commands::cmd_query(&graph, engine, format, &command)?;
        }
        Commands::Info { users, friendships } => {
            let graph = commands::load_network(&users, &friendships)?;
            commands::cmd_info(&graph, format)?;
        }
        Commands::Config => commands::cmd_config(config, format)?,
    }
    Ok(())
}
