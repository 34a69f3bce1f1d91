//! `SQLite` schema definitions for gliderlog.
//!
//! This module contains the SQL statements for creating the `flights` table
//! and for moving a legacy table onto the current layout.

/// Name of the single logbook table.
pub const FLIGHTS_TABLE: &str = "flights";

/// Column whose absence marks the legacy layout.
pub const DISTANCE_COLUMN: &str = "cross_country_distance";

/// Every column of the current layout, in table order.
pub const FLIGHT_COLUMNS: &[&str] = &[
    "id",
    "date",
    "aircraft_type",
    "aircraft_registration",
    "pilot_in_command",
    "instructor",
    "launch_method",
    "launch_site",
    "landing_site",
    "flight_duration",
    "max_altitude",
    "cross_country_distance",
    "notes",
    "created_at",
];

/// Column list shared by the current and legacy layouts.
const LEGACY_COLUMN_LIST: &str = "id, date, aircraft_type, aircraft_registration, \
     pilot_in_command, instructor, launch_method, launch_site, landing_site, \
     flight_duration, max_altitude, notes, created_at";

/// Build the `CREATE TABLE` statement for the current layout under `name`.
#[must_use]
pub fn create_flights_table(name: &str) -> String {
    format!(
        r"
CREATE TABLE {name} (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date TEXT NOT NULL,
    aircraft_type TEXT NOT NULL,
    aircraft_registration TEXT NOT NULL,
    pilot_in_command TEXT NOT NULL,
    instructor TEXT,
    launch_method TEXT NOT NULL,
    launch_site TEXT NOT NULL,
    landing_site TEXT,
    flight_duration TEXT,
    max_altitude INTEGER,
    cross_country_distance REAL,
    notes TEXT,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)
"
    )
}

/// SQL statement to create an index on date for the default list ordering.
pub const CREATE_DATE_INDEX: &str = r"
CREATE INDEX IF NOT EXISTS idx_flights_date ON flights(date DESC)
";

/// Copy every legacy row into `flights_new`; the distance column stays NULL.
#[must_use]
pub fn copy_legacy_rows() -> String {
    format!(
        "INSERT INTO flights_new ({LEGACY_COLUMN_LIST}) SELECT {LEGACY_COLUMN_LIST} FROM flights"
    )
}

/// Retire the legacy table and move the new one into its place.
pub const REPLACE_LEGACY_TABLE: &str = r"
DROP TABLE flights;
ALTER TABLE flights_new RENAME TO flights;
";
