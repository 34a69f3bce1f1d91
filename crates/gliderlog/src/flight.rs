//! Core flight record types for gliderlog.
//!
//! A [`Flight`] is a full row from the logbook. [`FlightSummary`] is the
//! narrower projection shown in list views, and [`NewFlight`] is the
//! validated record that storage writes.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Launch methods offered when entering a flight.
///
/// The vocabulary is open: storage accepts any non-empty method.
pub const LAUNCH_METHODS: &[&str] = &["Winch", "Aerotow", "Auto-tow", "Bungee", "Motor glider"];

/// Check whether a launch method is one of the common ones.
#[must_use]
pub fn is_known_launch_method(method: &str) -> bool {
    LAUNCH_METHODS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(method))
}

/// Render an optional distance the way list views show it.
///
/// One decimal place when present, empty otherwise.
#[must_use]
pub fn format_distance(distance: Option<f64>) -> String {
    distance.map(|km| format!("{km:.1}")).unwrap_or_default()
}

/// A validated flight, ready to be inserted or written over an existing row.
///
/// Produced only by [`FlightDraft::validate`](crate::validation::FlightDraft::validate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFlight {
    /// Flight date (ISO `YYYY-MM-DD`).
    pub date: String,
    /// Glider type, e.g. `ASK-21`.
    pub aircraft_type: String,
    /// Glider registration, e.g. `G-CKLA`.
    pub aircraft_registration: String,
    /// Pilot in command.
    pub pilot_in_command: String,
    /// Instructor, for dual flights.
    pub instructor: Option<String>,
    /// How the glider was launched.
    pub launch_method: String,
    /// Where the flight started.
    pub launch_site: String,
    /// Where the flight ended, if different.
    pub landing_site: Option<String>,
    /// Duration as `H:MM`.
    pub flight_duration: Option<String>,
    /// Maximum altitude in feet.
    pub max_altitude: Option<i64>,
    /// Cross-country distance in kilometres.
    pub cross_country_distance: Option<f64>,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// A logged flight as stored in the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    /// Unique identifier assigned by storage.
    pub id: i64,
    /// Flight date (ISO `YYYY-MM-DD`).
    pub date: String,
    /// Glider type.
    pub aircraft_type: String,
    /// Glider registration.
    pub aircraft_registration: String,
    /// Pilot in command.
    pub pilot_in_command: String,
    /// Instructor, for dual flights.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    /// How the glider was launched.
    pub launch_method: String,
    /// Where the flight started.
    pub launch_site: String,
    /// Where the flight ended, if recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landing_site: Option<String>,
    /// Duration as `H:MM`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_duration: Option<String>,
    /// Maximum altitude in feet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_altitude: Option<i64>,
    /// Cross-country distance in kilometres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_country_distance: Option<f64>,
    /// Free-form notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// When the row was inserted (UTC, as recorded by `SQLite`).
    ///
    /// Rows carried over from older logbooks may have no usable timestamp.
    pub created_at: Option<NaiveDateTime>,
}

impl Flight {
    /// Strip the storage-assigned fields, leaving the editable record.
    #[must_use]
    pub fn to_new_flight(&self) -> NewFlight {
        NewFlight {
            date: self.date.clone(),
            aircraft_type: self.aircraft_type.clone(),
            aircraft_registration: self.aircraft_registration.clone(),
            pilot_in_command: self.pilot_in_command.clone(),
            instructor: self.instructor.clone(),
            launch_method: self.launch_method.clone(),
            launch_site: self.launch_site.clone(),
            landing_site: self.landing_site.clone(),
            flight_duration: self.flight_duration.clone(),
            max_altitude: self.max_altitude,
            cross_country_distance: self.cross_country_distance,
            notes: self.notes.clone(),
        }
    }

    /// Distance formatted for display.
    #[must_use]
    pub fn distance_display(&self) -> String {
        format_distance(self.cross_country_distance)
    }
}

/// The columns shown for each flight in the logbook list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightSummary {
    /// Unique identifier.
    pub id: i64,
    /// Flight date.
    pub date: String,
    /// Glider type.
    pub aircraft_type: String,
    /// Glider registration.
    pub aircraft_registration: String,
    /// Pilot in command.
    pub pilot_in_command: String,
    /// How the glider was launched.
    pub launch_method: String,
    /// Duration as `H:MM`.
    pub flight_duration: Option<String>,
    /// Maximum altitude in feet.
    pub max_altitude: Option<i64>,
    /// Cross-country distance in kilometres.
    pub cross_country_distance: Option<f64>,
}

impl FlightSummary {
    /// Distance formatted for display.
    #[must_use]
    pub fn distance_display(&self) -> String {
        format_distance(self.cross_country_distance)
    }
}
