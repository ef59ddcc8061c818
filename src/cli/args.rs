//! Command-line argument definitions for the MPC importer
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the MPC comet-element importer
///
/// Imports Minor Planet Center one-line comet orbital-element records into
/// the per-user solar-system configuration store.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "mpc-importer",
    version,
    about = "Import MPC one-line comet orbital elements into a solar-system store",
    long_about = "Imports comet orbital elements published in the Minor Planet Center \
                  one-line format (e.g. Soft00Cmt.txt) into a per-user ssystem.ini \
                  solar-system configuration store. Malformed records are skipped and \
                  counted; a batch never aborts on a bad line."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the MPC importer
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Import comet elements from an MPC one-line element file (main command)
    Import(ImportArgs),
    /// Remove the per-user solar-system store copy
    Reset(ResetArgs),
}

/// Arguments for the import command
#[derive(Debug, Clone, Parser)]
pub struct ImportArgs {
    /// Path to the MPC one-line comet-element file
    ///
    /// One record per line, as distributed by the Minor Planet Center
    /// (e.g. Soft00Cmt.txt).
    #[arg(value_name = "FILE", help = "MPC one-line comet-element file")]
    pub elements_file: PathBuf,

    /// Per-user data directory holding the writable store
    ///
    /// The store lives at <DIR>/data/ssystem.ini. If not specified, defaults
    /// to the platform data directory (e.g. ~/.local/share/mpc-importer).
    #[arg(
        long = "user-data-dir",
        value_name = "PATH",
        help = "Per-user data directory holding the writable store"
    )]
    pub user_data_dir: Option<PathBuf>,

    /// Installation-provided default store
    ///
    /// Copied into the user data directory the first time an import runs.
    /// An existing user store is never overwritten.
    #[arg(
        long = "default-store",
        value_name = "FILE",
        help = "Installation default store used to seed the user copy"
    )]
    pub default_store: Option<PathBuf>,

    /// Accept records with fewer fractional digits than the published format
    ///
    /// Several records in real MPC distribution files carry lower precision
    /// than the format specifies. By default such lines are rejected; this
    /// flag relaxes the fractional-digit counts.
    #[arg(
        long = "variable-precision",
        help = "Accept records with fewer fractional digits than the published format"
    )]
    pub variable_precision: bool,

    /// Parse and report without touching the store
    #[arg(long = "dry-run", help = "Parse and report without writing the store")]
    pub dry_run: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for the import summary
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the import summary"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the reset command
#[derive(Debug, Clone, Parser)]
pub struct ResetArgs {
    /// Per-user data directory holding the writable store
    #[arg(
        long = "user-data-dir",
        value_name = "PATH",
        help = "Per-user data directory holding the writable store"
    )]
    pub user_data_dir: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ImportArgs {
    /// Validate the import command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.elements_file.exists() {
            return Err(Error::configuration(format!(
                "Element file does not exist: {}",
                self.elements_file.display()
            )));
        }

        if !self.elements_file.is_file() {
            return Err(Error::configuration(format!(
                "Element file is not a file: {}",
                self.elements_file.display()
            )));
        }

        if let Some(default_store) = &self.default_store {
            if !default_store.exists() {
                return Err(Error::configuration(format!(
                    "Default store does not exist: {}",
                    default_store.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show a progress bar (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl ResetArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
