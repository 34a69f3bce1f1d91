//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::validation::FlightDraft;

/// Flight fields accepted by `add` and `update`.
///
/// Omitted flags leave the corresponding draft field as it was; passing an
/// empty string clears an optional field.
#[derive(Debug, Clone, Default, Args)]
pub struct FlightFields {
    /// Flight date, YYYY-MM-DD
    #[arg(long)]
    pub date: Option<String>,

    /// Glider type (e.g. ASK-21)
    #[arg(short = 't', long)]
    pub aircraft_type: Option<String>,

    /// Glider registration
    #[arg(short, long)]
    pub registration: Option<String>,

    /// Pilot in command
    #[arg(short, long)]
    pub pilot: Option<String>,

    /// Instructor
    #[arg(short, long)]
    pub instructor: Option<String>,

    /// Launch method (Winch, Aerotow, Auto-tow, Bungee, Motor glider)
    #[arg(short = 'm', long)]
    pub launch_method: Option<String>,

    /// Launch site
    #[arg(short = 's', long)]
    pub launch_site: Option<String>,

    /// Landing site
    #[arg(long)]
    pub landing_site: Option<String>,

    /// Flight duration, H:MM
    #[arg(short, long)]
    pub duration: Option<String>,

    /// Maximum altitude in feet
    #[arg(short, long)]
    pub altitude: Option<String>,

    /// Cross-country distance in km
    #[arg(short = 'x', long)]
    pub distance: Option<String>,

    /// Notes
    #[arg(short, long)]
    pub notes: Option<String>,
}

impl FlightFields {
    /// Overlay the given flags onto `draft`.
    pub fn apply_to(&self, draft: &mut FlightDraft) {
        let pairs = [
            (&self.date, &mut draft.date),
            (&self.aircraft_type, &mut draft.aircraft_type),
            (&self.registration, &mut draft.aircraft_registration),
            (&self.pilot, &mut draft.pilot_in_command),
            (&self.instructor, &mut draft.instructor),
            (&self.launch_method, &mut draft.launch_method),
            (&self.launch_site, &mut draft.launch_site),
            (&self.landing_site, &mut draft.landing_site),
            (&self.duration, &mut draft.flight_duration),
            (&self.altitude, &mut draft.max_altitude),
            (&self.distance, &mut draft.cross_country_distance),
            (&self.notes, &mut draft.notes),
        ];
        for (flag, field) in pairs {
            if let Some(value) = flag {
                field.clone_from(value);
            }
        }
    }
}

/// Add command arguments.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Fields of the new flight
    #[command(flatten)]
    pub fields: FlightFields,
}

/// Update command arguments.
#[derive(Debug, Args)]
pub struct UpdateCommand {
    /// Id of the flight to change
    pub id: i64,

    /// Fields to change
    #[command(flatten)]
    pub fields: FlightFields,
}

/// Delete command arguments.
#[derive(Debug, Args)]
pub struct DeleteCommand {
    /// Id of the flight to delete
    pub id: i64,

    /// Confirm the deletion
    #[arg(short, long)]
    pub yes: bool,
}

/// Show command arguments.
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Id of the flight to show
    pub id: i64,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Search term (case-insensitive substring); lists everything when omitted
    pub term: Option<String>,

    /// Where to search: All, Date, Aircraft Type, Registration, Pilot,
    /// Instructor, Launch Method, Launch Site, Landing Site
    #[arg(long, default_value = "All")]
    pub category: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Totals command arguments.
#[derive(Debug, Args)]
pub struct TotalsCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Output format for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One flight per line
    Plain,
    /// Aligned columns
    #[default]
    Table,
    /// JSON output
    Json,
}
