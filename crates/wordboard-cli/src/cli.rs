//! Argument parsing and dispatch.

use std::io::Write;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;

use wordboard_core::config::{BoardConfig, ConfigOverrides, MalformedDecayPolicy};
use wordboard_core::errors::BoardError;
use wordboard_core::word::Identity;
use wordboard_storage::StorageEngine;

use crate::commands;
use crate::error::CliResult;

/// Environment fallback for `--as`.
pub const IDENTITY_ENV: &str = "WORDBOARD_IDENTITY";

#[derive(Parser, Debug)]
#[command(
    name = "wordboard",
    version,
    about = "Shared word voting board",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Database file (overrides config and `WORDBOARD_DB_PATH`).
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<String>,

    /// Act as this identity (default: `WORDBOARD_IDENTITY`, then anonymous).
    #[arg(long = "as", global = true, value_name = "IDENTITY")]
    pub identity: Option<String>,

    /// Machine-readable JSON output.
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding `wordboard.toml`.
    #[arg(long, global = true, value_name = "DIR", default_value = ".")]
    pub config_root: PathBuf,

    /// Seconds for a decaying word to fall from 1 to 0.
    #[arg(long, global = true, value_name = "SECS")]
    pub decay_window: Option<u64>,

    /// How to treat unparseable decay timestamps: fail-open, repair, fail-read.
    #[arg(long, global = true, value_name = "POLICY")]
    pub malformed_policy: Option<MalformedDecayPolicy>,

    /// Emit logs on stderr as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Evaluate decay at this RFC 3339 instant instead of the current time.
    #[arg(long, global = true, value_name = "RFC3339", hide = true)]
    pub at: Option<DateTime<Utc>>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List live words (purges fully decayed ones).
    #[command(alias = "ls")]
    List,

    /// Words an identity created and upvoted (default: yourself).
    User { identity: Option<String> },

    /// Submit a new word.
    Add {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Upvote a word.
    Upvote { id: i64 },

    /// Take back your upvote.
    Unvote { id: i64 },

    /// Give up a word you created.
    Disown { id: i64 },

    /// Set the description of a word you created.
    Describe {
        id: i64,
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Run the decay sweep and report what it did.
    Sweep,

    /// Print every stored row verbatim.
    Dump,

    /// Delete a word by its exact stored text, whoever owns it.
    Delete {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Print the resolved configuration as TOML.
    Config,
}

/// Everything a handler needs.
pub(crate) struct Ctx {
    pub store: StorageEngine,
    pub identity: Identity,
    pub json: bool,
    pub now: DateTime<Utc>,
}

impl Ctx {
    /// Write `value` as pretty JSON, or `human` as-is.
    pub fn emit<T: Serialize>(&self, out: &mut dyn Write, value: &T, human: &str) -> CliResult<()> {
        if self.json {
            writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
        } else {
            writeln!(out, "{human}")?;
        }
        Ok(())
    }
}

/// Resolve config and identity, open the store, run one command.
pub fn run(cli: Cli, out: &mut dyn Write) -> CliResult<()> {
    let overrides = ConfigOverrides {
        db_path: cli.db.clone(),
        decay_window_secs: cli.decay_window,
        malformed_policy: cli.malformed_policy,
        ..ConfigOverrides::default()
    };
    let config =
        BoardConfig::load(&cli.config_root, Some(&overrides)).map_err(BoardError::from)?;

    // Needs no database.
    if let Command::Config = cli.command {
        return commands::maintenance::config(&config, cli.json, out);
    }

    let env_identity = std::env::var(IDENTITY_ENV).ok();
    let identity = Identity::resolve([cli.identity.as_deref(), env_identity.as_deref()]);
    let ctx = Ctx {
        store: StorageEngine::from_config(config)?,
        identity,
        json: cli.json,
        now: cli.at.unwrap_or_else(Utc::now),
    };
    tracing::debug!(identity = %ctx.identity, command = ?cli.command, "running command");

    match cli.command {
        Command::List => commands::reads::list(&ctx, out),
        Command::User { identity } => commands::reads::user(&ctx, identity.as_deref(), out),
        Command::Dump => commands::reads::dump(&ctx, out),
        Command::Add { text } => commands::actions::add(&ctx, &text.join(" "), out),
        Command::Upvote { id } => commands::actions::upvote(&ctx, id.into(), out),
        Command::Unvote { id } => commands::actions::unvote(&ctx, id.into(), out),
        Command::Disown { id } => commands::actions::disown(&ctx, id.into(), out),
        Command::Describe { id, text } => {
            commands::actions::describe(&ctx, id.into(), &text.join(" "), out)
        }
        Command::Sweep => commands::maintenance::sweep(&ctx, out),
        Command::Delete { text } => commands::maintenance::delete(&ctx, &text.join(" "), out),
        Command::Config => commands::maintenance::config(ctx.store.config(), ctx.json, out),
    }
}
