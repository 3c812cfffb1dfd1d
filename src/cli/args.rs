/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// Default store file, relative to the working directory.
pub const DEFAULT_STORE_FILE: &str = "data.csv";

/// kv-cli: key-value storage in an append-only CSV file.
#[derive(Debug, Parser)]
#[command(
    name = "kv-cli",
    about = "A minimal CLI app for key-value storage in CSV format",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Store file to read and append to. A leading `~` is expanded.
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        env = "KVCLI_FILE",
        default_value = DEFAULT_STORE_FILE
    )]
    pub file: PathBuf,

    /// Output format.
    #[arg(long, global = true, value_name = "FORMAT", default_value = "text")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, global = true, conflicts_with = "output")]
    pub json: bool,

    /// Log more to stderr (-v debug, -vv trace). `RUST_LOG` overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Plain lines: the name, or a confirmation message.
    #[default]
    Text,
    /// Pretty-printed JSON object.
    Json,
    /// Compact single-line JSON.
    Compact,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a new key-value entry.
    Create(CreateArgs),
    /// Find a name by id.
    Find(FindArgs),
}

/// Arguments for `kv-cli create`.
#[derive(Debug, Parser)]
pub struct CreateArgs {
    /// The unique identifier.
    pub id: String,

    /// The name to associate with the id.
    pub name: String,
}

/// Arguments for `kv-cli find`.
#[derive(Debug, Parser)]
pub struct FindArgs {
    /// The unique identifier to search for.
    pub id: String,

    /// Report an unreadable store as an error instead of "not found".
    #[arg(long)]
    pub strict: bool,
}
