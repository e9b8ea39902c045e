mod cli;
mod config;
mod db;
mod error;
mod server;
mod timeline;
mod tools;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lifelog", version, about = "Personal timeline MCP server: log and query life events and reminders")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the MCP server (stdio transport by default)
    Serve {
        /// Serve over Streamable HTTP instead of stdio
        #[arg(long)]
        http: bool,
    },
    /// Log a new event to the timeline
    Log {
        /// Brief title of the event
        title: String,
        /// Detailed description
        #[arg(short, long)]
        description: Option<String>,
        /// Event category (defaults to the configured default)
        #[arg(short, long)]
        category: Option<String>,
        /// When the event occurred, ISO format (defaults to now)
        #[arg(short, long)]
        timestamp: Option<String>,
        /// Tags (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Show the most recent events
    Recent {
        /// Number of events to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Search the timeline with filters
    Search {
        /// Text to match in titles and descriptions
        text: Option<String>,
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,
        /// Filter by tag (repeatable, matches any)
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Start of date range, inclusive (ISO format)
        #[arg(long)]
        from: Option<String>,
        /// End of date range, inclusive (ISO format)
        #[arg(long)]
        to: Option<String>,
        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show timeline statistics
    Stats,
    /// List all categories in use
    Categories,
    /// Set a reminder for a future task
    Remind {
        /// Brief title for the reminder
        title: String,
        /// Date the reminder is due (YYYY-MM-DD)
        due_date: String,
        /// What needs to be done
        #[arg(short, long)]
        description: Option<String>,
        /// Tags (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// List reminders due soon
    Reminders {
        /// Days to look ahead
        #[arg(short = 'n', long)]
        days: Option<i64>,
    },
    /// Delete one event by id
    Delete {
        /// Event id
        id: i64,
    },
    /// Delete all events (asks for confirmation)
    Reset,
    /// Export the whole timeline as JSON to stdout
    Export,
    /// Import events from an export file
    Import {
        /// Path to the JSON export file
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config (for log level)
    let config = config::LifelogConfig::load()?;

    // Initialize tracing with the configured log level.
    // Log to stderr so stdout stays clean for MCP JSON-RPC.
    let filter =
        EnvFilter::try_new(&config.server.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Serve { http } => {
            if http {
                server::serve_http(config).await?;
            } else {
                server::serve_stdio(config).await?;
            }
        }
        Command::Log {
            title,
            description,
            category,
            timestamp,
            tags,
        } => cli::log::log(&config, &title, description, category, timestamp, tags)?,
        Command::Recent { limit } => cli::recent::recent(&config, limit)?,
        Command::Search {
            text,
            category,
            tags,
            from,
            to,
            limit,
        } => cli::search::search(&config, text, category, tags, from, to, limit)?,
        Command::Stats => cli::stats::stats(&config)?,
        Command::Categories => cli::categories::categories(&config)?,
        Command::Remind {
            title,
            due_date,
            description,
            tags,
        } => cli::remind::remind(&config, &title, &due_date, description, tags)?,
        Command::Reminders { days } => cli::reminders::reminders(&config, days)?,
        Command::Delete { id } => cli::delete::delete(&config, id)?,
        Command::Reset => cli::reset::reset(&config)?,
        Command::Export => cli::export::export(&config)?,
        Command::Import { path } => cli::import::import(&config, &path)?,
    }

    Ok(())
}
