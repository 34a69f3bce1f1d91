//! Flight drafts and their validation.
//!
//! A [`FlightDraft`] holds exactly what the user typed. Calling
//! [`FlightDraft::validate`] either yields a fully typed
//! [`NewFlight`] or the first rule the draft broke.

use chrono::Local;
use thiserror::Error;

use crate::duration::is_valid_duration;
use crate::flight::{Flight, NewFlight};

/// Why a draft was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was empty.
    #[error("{field} is required")]
    MissingField {
        /// Human-readable field name.
        field: &'static str,
    },

    /// The duration did not match `H:MM`.
    #[error("duration must be in H:MM format (e.g., 1:30), got '{value}'")]
    InvalidDuration {
        /// The rejected input.
        value: String,
    },

    /// The maximum altitude was not a whole number.
    #[error("max altitude must be a number, got '{value}'")]
    InvalidAltitude {
        /// The rejected input.
        value: String,
    },

    /// The cross-country distance was not a number.
    #[error("cross country distance must be a number, got '{value}'")]
    InvalidDistance {
        /// The rejected input.
        value: String,
    },
}

/// Raw flight input as entered by the user.
///
/// Every field is text; empty means "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlightDraft {
    /// Flight date.
    pub date: String,
    /// Glider type.
    pub aircraft_type: String,
    /// Glider registration.
    pub aircraft_registration: String,
    /// Pilot in command.
    pub pilot_in_command: String,
    /// Instructor.
    pub instructor: String,
    /// Launch method.
    pub launch_method: String,
    /// Launch site.
    pub launch_site: String,
    /// Landing site.
    pub landing_site: String,
    /// Duration, `H:MM`.
    pub flight_duration: String,
    /// Maximum altitude in feet.
    pub max_altitude: String,
    /// Cross-country distance in kilometres.
    pub cross_country_distance: String,
    /// Notes.
    pub notes: String,
}

impl FlightDraft {
    /// An empty draft dated today, like a freshly cleared entry form.
    #[must_use]
    pub fn for_today() -> Self {
        Self {
            date: Local::now().format("%Y-%m-%d").to_string(),
            ..Self::default()
        }
    }

    /// Check every rule in order and produce a typed record.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    pub fn validate(&self) -> Result<NewFlight, ValidationError> {
        let date = required(&self.date, "date")?;
        let aircraft_type = required(&self.aircraft_type, "aircraft type")?;
        let aircraft_registration =
            required(&self.aircraft_registration, "aircraft registration")?;
        let pilot_in_command = required(&self.pilot_in_command, "pilot in command")?;
        let launch_method = required(&self.launch_method, "launch method")?;
        let launch_site = required(&self.launch_site, "launch site")?;

        let flight_duration = optional(&self.flight_duration);
        if let Some(duration) = &flight_duration {
            if !is_valid_duration(duration) {
                return Err(ValidationError::InvalidDuration {
                    value: duration.clone(),
                });
            }
        }

        let max_altitude = optional(&self.max_altitude)
            .map(|value| {
                value
                    .parse::<i64>()
                    .map_err(|_| ValidationError::InvalidAltitude { value })
            })
            .transpose()?;

        let cross_country_distance = optional(&self.cross_country_distance)
            .map(|value| match value.parse::<f64>() {
                Ok(km) if km.is_finite() => Ok(km),
                _ => Err(ValidationError::InvalidDistance { value }),
            })
            .transpose()?;

        Ok(NewFlight {
            date,
            aircraft_type,
            aircraft_registration,
            pilot_in_command,
            instructor: optional(&self.instructor),
            launch_method,
            launch_site,
            landing_site: optional(&self.landing_site),
            flight_duration,
            max_altitude,
            cross_country_distance,
            notes: optional(&self.notes),
        })
    }
}

impl From<NewFlight> for FlightDraft {
    fn from(flight: NewFlight) -> Self {
        Self {
            date: flight.date,
            aircraft_type: flight.aircraft_type,
            aircraft_registration: flight.aircraft_registration,
            pilot_in_command: flight.pilot_in_command,
            instructor: flight.instructor.unwrap_or_default(),
            launch_method: flight.launch_method,
            launch_site: flight.launch_site,
            landing_site: flight.landing_site.unwrap_or_default(),
            flight_duration: flight.flight_duration.unwrap_or_default(),
            max_altitude: flight
                .max_altitude
                .map(|ft| ft.to_string())
                .unwrap_or_default(),
            cross_country_distance: flight
                .cross_country_distance
                .map(|km| km.to_string())
                .unwrap_or_default(),
            notes: flight.notes.unwrap_or_default(),
        }
    }
}

impl From<&Flight> for FlightDraft {
    fn from(flight: &Flight) -> Self {
        Self::from(flight.to_new_flight())
    }
}

fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    optional(value).ok_or(ValidationError::MissingField { field })
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
