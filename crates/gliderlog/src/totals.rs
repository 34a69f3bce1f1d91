//! Logbook running totals.

use serde::{Serialize, Serializer};

use crate::duration::minutes_to_duration;

/// Aggregates over every flight in the logbook, regardless of any filter.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Totals {
    /// Number of logged flights.
    pub launches: i64,
    /// Sum of all logged durations, in minutes.
    #[serde(rename = "hours", serialize_with = "serialize_minutes")]
    pub minutes: u64,
    /// Sum of all cross-country distances, in kilometres.
    #[serde(serialize_with = "serialize_distance")]
    pub distance_km: f64,
}

impl Totals {
    /// Total flight time as `H:MM`.
    #[must_use]
    pub fn hours_display(&self) -> String {
        minutes_to_duration(self.minutes)
    }

    /// Total distance with one decimal place.
    #[must_use]
    pub fn distance_display(&self) -> String {
        format!("{:.1}", self.distance_km)
    }
}

fn serialize_minutes<S: Serializer>(minutes: &u64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&minutes_to_duration(*minutes))
}

fn serialize_distance<S: Serializer>(km: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{km:.1}"))
}
