//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Write the `.pot` template for the source tree
//! - `check`: Report malformed marker calls without writing anything
//! - `update`: Merge the template into each language's `.po` file
//! - `init`: Initialize glean configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source code root directory (default: current directory)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Marker symbol wrapping translatable strings (overrides config file).
    /// Can be specified multiple times: -k _ -k N_
    #[arg(short, long)]
    pub keyword: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Template path (default: <outputDir>/<domain>.pot under the source root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct UpdateCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually write the .po files (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract marked strings into a .pot template
    Extract(ExtractCommand),
    /// Report malformed marker calls without writing files
    Check(CheckCommand),
    /// Merge the template into each configured language's .po file
    Update(UpdateCommand),
    /// Initialize a new .gleanrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
