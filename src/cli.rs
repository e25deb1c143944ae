use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "tatap",
    about = "Natural filename ordering and inotify event decoding",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log decoder activity at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print names in natural order (reads stdin lines when none are given)
    Sort(SortArgs),
    /// Show how names split into stem and extension
    Split(SplitArgs),
    /// Decode a captured inotify buffer dump
    Decode(DecodeArgs),
}

#[derive(Args)]
pub struct SortArgs {
    pub names: Vec<String>,

    /// Print in descending order
    #[arg(short, long)]
    pub reverse: bool,
}

#[derive(Args)]
pub struct SplitArgs {
    #[arg(required = true)]
    pub names: Vec<String>,
}

#[derive(Args)]
pub struct DecodeArgs {
    /// File holding raw `struct inotify_event` records back to back
    pub path: PathBuf,

    /// Emit one JSON object per record
    #[arg(long)]
    pub json: bool,
}
