//! Holodex CLI - holo command

use anyhow::Result;
use clap::{Parser, Subcommand};

mod cmd;
mod config;
mod util;

/// Holodex - Star Wars character browser with local edits
#[derive(Parser)]
#[command(name = "holo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List characters, one page at a time
    List {
        /// Page number (1-based)
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// Filter by character name
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one character, local edits applied
    Show {
        /// Character uid
        uid: String,
    },
    /// Edit character fields locally (remote data is never changed)
    Edit {
        /// Character uid
        uid: String,

        #[command(flatten)]
        fields: cmd::edit::FieldArgs,
    },
    /// Discard the local edits for one character
    Revert {
        /// Character uid
        uid: String,
    },
    /// List all locally edited characters
    Overrides,
    /// Discard all local edits
    Clear {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Interactive debounced name search (reads queries from stdin)
    Search,
    /// View and edit holodex configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// List all configuration values
    List,

    /// Print a single configuration value
    Get {
        /// Config key, e.g. api.timeout_secs
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Config key, e.g. api.timeout_secs
        key: String,
        /// New value
        value: String,
    },

    /// Show the config file path
    Path {
        /// Create the file with defaults if it does not exist
        #[arg(long)]
        create: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List { page, search } => cmd::list::run(page, search).await,
        Commands::Show { uid } => cmd::show::run(&uid).await,
        Commands::Edit { uid, fields } => cmd::edit::run(&uid, fields).await,
        Commands::Revert { uid } => cmd::revert::run(&uid).await,
        Commands::Overrides => cmd::overrides::run().await,
        Commands::Clear { yes } => cmd::clear::run(yes).await,
        Commands::Search => cmd::search::run().await,
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::List => cmd::config::run_list().await,
            ConfigCommands::Get { key } => cmd::config::run_get(&key).await,
            ConfigCommands::Set { key, value } => cmd::config::run_set(&key, &value).await,
            ConfigCommands::Path { create } => cmd::config::run_path(create).await,
        },
    }
}
