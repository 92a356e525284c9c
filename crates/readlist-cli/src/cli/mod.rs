//! CLI for the readlist reading list.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use readlist_core::config;
use readlist_core::library::Library;
use readlist_core::store::{ItemDb, ItemSource, ItemStatus};

use commands::{
    run_canonicalize, run_check, run_delete, run_list, run_mark, run_save, run_tags,
};

/// Top-level CLI for the readlist reading list.
#[derive(Debug, Parser)]
#[command(name = "readlist")]
#[command(about = "readlist: save pages to a deduplicated reading list", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Lifecycle state as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Todo,
    Next,
    Done,
}

impl From<StatusArg> for ItemStatus {
    fn from(s: StatusArg) -> Self {
        match s {
            StatusArg::Todo => ItemStatus::Todo,
            StatusArg::Next => ItemStatus::Next,
            StatusArg::Done => ItemStatus::Done,
        }
    }
}

/// Save origin as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceArg {
    Extension,
    IosShortcut,
}

impl From<SourceArg> for ItemSource {
    fn from(s: SourceArg) -> Self {
        match s {
            SourceArg::Extension => ItemSource::Extension,
            SourceArg::IosShortcut => ItemSource::IosShortcut,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the canonical form and content hash of a URL.
    Canonicalize {
        /// URL to normalize.
        url: String,
    },

    /// Save a page to the reading list (skipped if already saved).
    Save {
        /// Page URL; tracking parameters are stripped before storing.
        url: String,

        /// Page title.
        #[arg(long)]
        title: String,

        /// Tag to attach; repeat for several.
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Where the save came from (defaults to the config's default_source).
        #[arg(long, value_enum)]
        source: Option<SourceArg>,
    },

    /// Check whether a URL (or an equivalent one) is already saved.
    Check {
        /// URL to look up.
        url: String,
    },

    /// List saved items, newest first.
    List {
        /// Only show items in this state.
        #[arg(long, value_enum)]
        status: Option<StatusArg>,
    },

    /// List all tags in use.
    Tags,

    /// Move an item to todo, next, or done.
    Mark {
        /// Item identifier.
        id: i64,

        /// New state.
        #[arg(value_enum)]
        status: StatusArg,
    },

    /// Delete an item by ID.
    Delete {
        /// Item identifier.
        id: i64,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let policy = cfg.canonical.policy();

        // Canonicalization needs no database.
        if let CliCommand::Canonicalize { url } = &cli.command {
            return run_canonicalize(&policy, url);
        }

        let db = ItemDb::open(cfg.database_path.as_deref()).await?;
        let lib = Library::new(db, policy);

        match cli.command {
            CliCommand::Canonicalize { .. } => {}
            CliCommand::Save {
                url,
                title,
                tags,
                source,
            } => {
                let source = source.map(ItemSource::from).unwrap_or(cfg.default_source);
                run_save(&lib, url, title, tags, source).await?;
            }
            CliCommand::Check { url } => run_check(&lib, &url).await?,
            CliCommand::List { status } => run_list(&lib, status.map(ItemStatus::from)).await?,
            CliCommand::Tags => run_tags(&lib).await?,
            CliCommand::Mark { id, status } => run_mark(&lib, id, status.into()).await?,
            CliCommand::Delete { id } => run_delete(&lib, id).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
