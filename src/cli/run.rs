//! Command dispatch.
//!
//! Each command produces a [`CommandResult`] that the report layer renders;
//! errors returned from here are hard failures (unreadable file, bad JSON)
//! and map to exit code 2 in `main`.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result, bail};

use crate::catalog::{ResolutionCatalog, ResolutionEntry, has_errors, read_catalog, validate};
use crate::issue::Issue;

use super::args::{
    Arguments, CheckCommand, Command, DescribeCommand, InitCommand, ListCommand, ShowCommand,
    SourceArgs,
};
use super::exit_status::ExitStatus;

pub struct CommandResult {
    pub summary: CommandSummary,
    /// Why the catalog source was rejected, when the built-in table was
    /// substituted. Shown by the report layer.
    pub fallback_reason: Option<String>,
    pub status: ExitStatus,
}

pub enum CommandSummary {
    List {
        rows: Vec<ListRow>,
    },
    Show {
        ratio: String,
        entries: Vec<ResolutionEntry>,
    },
    Describe {
        ratio: String,
        resolution: String,
        /// `None` when the pair is not jointly present in the catalog.
        description: Option<String>,
    },
    Check {
        path: PathBuf,
        groups: usize,
        issues: Vec<Issue>,
    },
    Init {
        path: PathBuf,
    },
}

pub struct ListRow {
    pub ratio: String,
    pub count: usize,
}

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::List(cmd)) => Ok(list(cmd)),
        Some(Command::Show(cmd)) => Ok(show(cmd)),
        Some(Command::Describe(cmd)) => Ok(describe(cmd)),
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Init(cmd)) => init(cmd),
        None => {
            bail!("No command provided. Use --help to see available commands.")
        }
    }
}

/// Resolve the catalog for the query commands: explicit source if one was
/// given, built-in table otherwise, built-in table plus the reason when the
/// explicit source cannot be loaded.
fn load_catalog(args: &SourceArgs) -> (ResolutionCatalog, Option<String>) {
    match args.source() {
        Some(source) => match read_catalog(&source) {
            Ok(catalog) => (catalog, None),
            Err(err) => (ResolutionCatalog::default(), Some(format!("{:#}", err))),
        },
        None => (ResolutionCatalog::default(), None),
    }
}

fn list(cmd: ListCommand) -> CommandResult {
    let (catalog, fallback_reason) = load_catalog(&cmd.source);
    let rows = catalog
        .groups()
        .iter()
        .map(|group| ListRow {
            ratio: group.ratio.clone(),
            count: group.resolutions.len(),
        })
        .collect();
    CommandResult {
        summary: CommandSummary::List { rows },
        fallback_reason,
        status: ExitStatus::Success,
    }
}

fn show(cmd: ShowCommand) -> CommandResult {
    let (catalog, fallback_reason) = load_catalog(&cmd.source);
    let entries = catalog.entries_for(&cmd.ratio).to_vec();
    let status = if entries.is_empty() {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    };
    CommandResult {
        summary: CommandSummary::Show {
            ratio: cmd.ratio,
            entries,
        },
        fallback_reason,
        status,
    }
}

fn describe(cmd: DescribeCommand) -> CommandResult {
    let (catalog, fallback_reason) = load_catalog(&cmd.source);
    let description = catalog
        .entries_for(&cmd.ratio)
        .iter()
        .find(|entry| entry.resolution == cmd.resolution)
        .map(|entry| entry.description.clone());
    let status = if description.is_some() {
        ExitStatus::Success
    } else {
        ExitStatus::Failure
    };
    CommandResult {
        summary: CommandSummary::Describe {
            ratio: cmd.ratio,
            resolution: cmd.resolution,
            description,
        },
        fallback_reason,
        status,
    }
}

fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let raw = fs::read_to_string(&cmd.path)
        .with_context(|| format!("failed to read catalog file {}", cmd.path.display()))?;
    let catalog: ResolutionCatalog = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse catalog file {}", cmd.path.display()))?;

    let issues = validate(&catalog);
    // Warnings alone do not fail the check, mirroring lint-tool conventions.
    let status = if has_errors(&issues) {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    };
    Ok(CommandResult {
        summary: CommandSummary::Check {
            path: cmd.path,
            groups: catalog.len(),
            issues,
        },
        fallback_reason: None,
        status,
    })
}

fn init(cmd: InitCommand) -> Result<CommandResult> {
    if cmd.path.exists() {
        bail!("{} already exists", cmd.path.display());
    }

    let json = serde_json::to_string_pretty(&ResolutionCatalog::default())
        .context("failed to serialize the built-in catalog")?;
    fs::write(&cmd.path, json + "\n")
        .with_context(|| format!("failed to write {}", cmd.path.display()))?;

    Ok(CommandResult {
        summary: CommandSummary::Init { path: cmd.path },
        fallback_reason: None,
        status: ExitStatus::Success,
    })
}
