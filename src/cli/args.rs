//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `list`: List the catalog's ratio classes
//! - `show`: Show the resolutions of one ratio class
//! - `describe`: Print the description of a ratio/resolution pair
//! - `check`: Validate a catalog JSON file
//! - `init`: Write the built-in catalog to a JSON file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::catalog::CatalogSource;

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

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::List(cmd)) => cmd.source.verbose,
            Some(Command::Show(cmd)) => cmd.source.verbose,
            Some(Command::Describe(cmd)) => cmd.source.verbose,
            Some(Command::Check(cmd)) => cmd.verbose,
            Some(Command::Init(_)) | None => false,
        }
    }
}

/// Catalog source selection shared by the query commands. With neither flag
/// the built-in table is used directly.
#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// Catalog JSON file (falls back to the built-in table on load failure)
    #[arg(long, value_name = "PATH", conflicts_with = "catalog_url")]
    pub catalog: Option<PathBuf>,

    /// Catalog HTTP(S) endpoint (falls back to the built-in table on load failure)
    #[arg(long, value_name = "URL")]
    pub catalog_url: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl SourceArgs {
    pub fn source(&self) -> Option<CatalogSource> {
        if let Some(path) = &self.catalog {
            Some(CatalogSource::Path(path.clone()))
        } else {
            self.catalog_url.clone().map(CatalogSource::Url)
        }
    }
}

#[derive(Debug, Args)]
pub struct ListCommand {
    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Ratio class, e.g. 16:9
    pub ratio: String,

    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Debug, Args)]
pub struct DescribeCommand {
    /// Ratio class, e.g. 16:9
    pub ratio: String,

    /// Resolution token, e.g. 1920x1080
    pub resolution: String,

    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Catalog JSON file to validate
    pub path: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Where to write the catalog
    #[arg(default_value = "resolutions.json")]
    pub path: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the ratio classes in the catalog
    List(ListCommand),
    /// Show the resolutions of one ratio class, with descriptions
    Show(ShowCommand),
    /// Print the description of a ratio/resolution pair
    Describe(DescribeCommand),
    /// Validate a catalog JSON file (duplicates, token shapes, empty groups)
    Check(CheckCommand),
    /// Write the built-in catalog to a JSON file
    Init(InitCommand),
}
