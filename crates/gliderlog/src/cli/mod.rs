//! Command-line interface for gliderlog.
//!
//! This module provides the CLI structure and output rendering for the
//! `gliderlog` binary.

mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::logging::Verbosity;

pub use commands::{
    AddCommand, ConfigCommand, DeleteCommand, FlightFields, ListCommand, OutputFormat,
    ShowCommand, TotalsCommand, UpdateCommand,
};

/// gliderlog - A glider pilot's logbook
///
/// Records flights in a local SQLite database, lists and searches them,
/// and keeps running totals of launches, hours and cross-country distance.
#[derive(Debug, Parser)]
#[command(name = "gliderlog")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Path to the logbook database (overrides configuration)
    #[arg(long, global = true, value_name = "FILE")]
    pub database: Option<PathBuf>,

    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log a new flight
    Add(AddCommand),

    /// Change an existing flight
    Update(UpdateCommand),

    /// Delete a flight
    Delete(DeleteCommand),

    /// Show one flight in full
    Show(ShowCommand),

    /// List and search flights
    List(ListCommand),

    /// Show running totals
    Totals(TotalsCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose)
    }
}
