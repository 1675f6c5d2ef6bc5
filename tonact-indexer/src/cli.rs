use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tonact Indexer
///
/// Normalizes classified TON trace blocks into canonical action records.
#[derive(Parser, PartialEq, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    global_args: GlobalArgs,
    #[command(subcommand)]
    command: Command,
}

impl Cli {
    pub fn args(&self) -> GlobalArgs {
        self.global_args.clone()
    }

    pub fn command(&self) -> Command {
        self.command.clone()
    }
}

#[derive(Subcommand, Clone, PartialEq, Debug)]
pub enum Command {
    /// Normalizes all pending blocks once and exits.
    Normalize,
    /// Polls the input for new blocks on a fixed schedule.
    Watch(WatchArgs),
}

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about, long_about = None)]
pub struct GlobalArgs {
    /// Path of the classified blocks feed, one JSON block per line
    #[clap(env = "TONACT_BLOCKS_PATH", long, default_value = "blocks.jsonl")]
    pub input: PathBuf,

    /// Path the normalized actions are appended to
    #[clap(env = "TONACT_ACTIONS_PATH", long, default_value = "actions.jsonl")]
    pub output: PathBuf,
}

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct WatchArgs {
    /// Seconds between two polls of the input feed
    #[clap(long, default_value = "60")]
    pub interval_secs: u64,
}
