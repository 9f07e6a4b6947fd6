//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Accepted `--log-level` values.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Parser, Debug)]
#[command(name = "landio")]
#[command(about = "Render the LANDIO landing page from a block-based page model")]
#[command(version)]
pub struct Cli {
    /// Log level; RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn", value_parser = LOG_LEVELS)]
    pub log_level: String,

    /// Config file (default: .landio/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the page to HTML
    Render(RenderArgs),
    /// Report blocks that would be skipped and duplicate block ids
    Check(CheckArgs),
    /// Print one summary line per block
    Outline(PageArgs),
    /// List the supported block types
    Blocks,
    /// Print the built-in page model as JSON
    DefaultPage,
}

#[derive(Args, Debug, Default)]
pub struct PageArgs {
    /// Page model JSON (default: built-in LANDIO page)
    #[arg(long)]
    pub page: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct RenderArgs {
    #[command(flatten)]
    pub source: PageArgs,

    /// Write HTML here instead of stdout
    #[arg(long, short)]
    pub out: Option<PathBuf>,

    /// Fail instead of skipping unknown or unreadable blocks
    #[arg(long)]
    pub strict: bool,

    /// Leave out the background glow
    #[arg(long)]
    pub no_cursor_light: bool,
}

#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: PageArgs,

    /// Machine-readable output
    #[arg(long)]
    pub json: bool,
}
