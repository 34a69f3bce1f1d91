//! Storage layer for gliderlog.
//!
//! This module provides `SQLite`-based persistent storage for logged flights,
//! including filtered listing and running totals.

pub mod migrations;
pub mod schema;

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use rusqlite::types::ValueRef;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};
use tracing::debug;

use crate::duration::duration_to_minutes;
use crate::error::{Error, Result};
use crate::flight::{is_known_launch_method, Flight, FlightSummary, NewFlight};
use crate::search::SearchFilter;
use crate::totals::Totals;

/// Accepted `created_at` layouts. The first is what `CURRENT_TIMESTAMP`
/// writes; `%.f` also admits fractional seconds.
const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Columns selected for a full [`Flight`].
const FLIGHT_SELECT: &str = r"
SELECT id, date, aircraft_type, aircraft_registration, pilot_in_command, instructor,
       launch_method, launch_site, landing_site, flight_duration, max_altitude,
       cross_country_distance, notes, created_at
FROM flights
";

/// Columns selected for a [`FlightSummary`].
const SUMMARY_SELECT: &str = r"
SELECT id, date, aircraft_type, aircraft_registration, pilot_in_command,
       launch_method, flight_duration, max_altitude, cross_country_distance
FROM flights
";

/// Storage engine for the flight logbook.
///
/// Owns the single database connection for the life of the process; the
/// connection is closed when the storage is dropped.
#[derive(Debug)]
pub struct Storage {
    /// Path to the database file.
    path: PathBuf,
    /// Database connection.
    conn: Connection,
}

impl Storage {
    /// Open or create a logbook database at the given path.
    ///
    /// Creates the parent directories and database file if they don't exist,
    /// then brings the schema up to date. With `wal_mode` set the database is
    /// switched to write-ahead logging.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or the schema cannot
    /// be initialized.
    pub fn open(path: impl AsRef<Path>, wal_mode: bool) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        debug!("Opening database at {}", path.display());
        let conn = Connection::open(&path).map_err(|source| Error::DatabaseOpen {
            path: path.clone(),
            source,
        })?;

        if wal_mode {
            conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;
        }

        migrations::initialize_schema(&conn)?;

        debug!("Database ready at {}", path.display());
        Ok(Self { path, conn })
    }

    /// Create an in-memory logbook, mainly for tests.
    ///
    /// # Errors
    ///
    /// Returns an error if the in-memory database cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|source| Error::DatabaseOpen {
            path: PathBuf::from(":memory:"),
            source,
        })?;

        migrations::initialize_schema(&conn)?;

        Ok(Self {
            path: PathBuf::from(":memory:"),
            conn,
        })
    }

    /// Get the path to the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Insert a flight, returning its new id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn insert(&self, flight: &NewFlight) -> Result<i64> {
        note_launch_method(flight);
        self.conn.execute(
            r"
            INSERT INTO flights (date, aircraft_type, aircraft_registration, pilot_in_command,
                                 instructor, launch_method, launch_site, landing_site,
                                 flight_duration, max_altitude, cross_country_distance, notes)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
            ",
            params![
                flight.date,
                flight.aircraft_type,
                flight.aircraft_registration,
                flight.pilot_in_command,
                flight.instructor,
                flight.launch_method,
                flight.launch_site,
                flight.landing_site,
                flight.flight_duration,
                flight.max_altitude,
                flight.cross_country_distance,
                flight.notes,
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        debug!("Inserted flight with id {}", id);
        Ok(id)
    }

    /// Overwrite the editable fields of an existing flight.
    ///
    /// Returns `true` if a flight was updated, `false` if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn update(&self, id: i64, flight: &NewFlight) -> Result<bool> {
        note_launch_method(flight);
        let affected = self.conn.execute(
            r"
            UPDATE flights SET date = ?1, aircraft_type = ?2, aircraft_registration = ?3,
                               pilot_in_command = ?4, instructor = ?5, launch_method = ?6,
                               launch_site = ?7, landing_site = ?8, flight_duration = ?9,
                               max_altitude = ?10, cross_country_distance = ?11, notes = ?12
            WHERE id = ?13
            ",
            params![
                flight.date,
                flight.aircraft_type,
                flight.aircraft_registration,
                flight.pilot_in_command,
                flight.instructor,
                flight.launch_method,
                flight.launch_site,
                flight.landing_site,
                flight.flight_duration,
                flight.max_altitude,
                flight.cross_country_distance,
                flight.notes,
                id,
            ],
        )?;

        debug!("Updated flight {} ({} rows)", id, affected);
        Ok(affected > 0)
    }

    /// Delete a flight by id.
    ///
    /// Returns `true` if a flight was deleted, `false` if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let affected = self
            .conn
            .execute("DELETE FROM flights WHERE id = ?1", [id])?;
        Ok(affected > 0)
    }

    /// Get a flight by its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn get(&self, id: i64) -> Result<Option<Flight>> {
        let sql = format!("{FLIGHT_SELECT} WHERE id = ?1");
        let flight = self
            .conn
            .query_row(&sql, [id], Self::row_to_flight)
            .optional()?;
        Ok(flight)
    }

    /// List flights matching `filter`, newest date first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn search(&self, filter: &SearchFilter) -> Result<Vec<FlightSummary>> {
        let (where_sql, bound) = filter
            .where_clause()
            .map(|clause| (clause.sql, clause.params))
            .unwrap_or_default();

        let sql = format!("{SUMMARY_SELECT} {where_sql} ORDER BY date DESC, id DESC");
        debug!(term = %filter.term, category = %filter.category, "Searching flights");

        let mut stmt = self.conn.prepare(&sql)?;
        let flights = stmt
            .query_map(params_from_iter(bound.iter()), Self::row_to_summary)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(flights)
    }

    /// Count all logged flights.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn count(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM flights", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Compute running totals over the whole logbook.
    ///
    /// Durations that cannot be parsed count as zero minutes.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn totals(&self) -> Result<Totals> {
        let (launches, distance_km): (i64, f64) = self.conn.query_row(
            r"
            SELECT COUNT(*), COALESCE(SUM(cross_country_distance), 0.0)
            FROM flights
            ",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;

        let mut stmt = self.conn.prepare(
            "SELECT flight_duration FROM flights \
             WHERE flight_duration IS NOT NULL AND flight_duration != ''",
        )?;
        let minutes = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .try_fold(0_u64, |total, duration| {
                duration.map(|d| total.saturating_add(duration_to_minutes(&d)))
            })?;

        Ok(Totals {
            launches,
            minutes,
            distance_km,
        })
    }

    /// Convert a database row to a [`Flight`].
    fn row_to_flight(row: &rusqlite::Row) -> rusqlite::Result<Flight> {
        let created_at = match row.get_ref(13)? {
            ValueRef::Text(text) => std::str::from_utf8(text).ok().and_then(parse_timestamp),
            _ => None,
        };

        Ok(Flight {
            id: row.get(0)?,
            date: row.get(1)?,
            aircraft_type: row.get(2)?,
            aircraft_registration: row.get(3)?,
            pilot_in_command: row.get(4)?,
            instructor: row.get(5)?,
            launch_method: row.get(6)?,
            launch_site: row.get(7)?,
            landing_site: row.get(8)?,
            flight_duration: row.get(9)?,
            max_altitude: row.get(10)?,
            cross_country_distance: row.get(11)?,
            notes: row.get(12)?,
            created_at,
        })
    }

    /// Convert a database row to a [`FlightSummary`].
    fn row_to_summary(row: &rusqlite::Row) -> rusqlite::Result<FlightSummary> {
        Ok(FlightSummary {
            id: row.get(0)?,
            date: row.get(1)?,
            aircraft_type: row.get(2)?,
            aircraft_registration: row.get(3)?,
            pilot_in_command: row.get(4)?,
            launch_method: row.get(5)?,
            flight_duration: row.get(6)?,
            max_altitude: row.get(7)?,
            cross_country_distance: row.get(8)?,
        })
    }
}

/// Parse a stored `created_at`, or `None` if it is in no known layout.
fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let parsed = TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value.trim(), format).ok());
    if parsed.is_none() {
        debug!(value, "Unreadable created_at timestamp");
    }
    parsed
}

fn note_launch_method(flight: &NewFlight) {
    if !is_known_launch_method(&flight.launch_method) {
        debug!(method = %flight.launch_method, "Storing uncommon launch method");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::search::FilterCategory;

    fn create_test_storage() -> Storage {
        Storage::open_in_memory().expect("failed to create test storage")
    }

    fn test_flight(date: &str, aircraft_type: &str) -> NewFlight {
        NewFlight {
            date: date.to_string(),
            aircraft_type: aircraft_type.to_string(),
            aircraft_registration: "G-CKLA".to_string(),
            pilot_in_command: "J. Smith".to_string(),
            instructor: None,
            launch_method: "Winch".to_string(),
            launch_site: "Dunstable".to_string(),
            landing_site: None,
            flight_duration: None,
            max_altitude: None,
            cross_country_distance: None,
            notes: None,
        }
    }

    fn seed_filter_fixture(storage: &Storage) {
        storage.insert(&test_flight("2024-01-01", "ASK-21")).unwrap();
        storage.insert(&test_flight("2024-06-15", "Discus")).unwrap();
        storage.insert(&test_flight("2023-12-31", "ASK-21")).unwrap();
    }

    #[test]
    fn test_open_in_memory() {
        let storage = Storage::open_in_memory();
        assert!(storage.is_ok());
    }

    #[test]
    fn test_insert_and_get_round_trip() {
        let storage = create_test_storage();
        let flight = NewFlight {
            instructor: Some("K. Jones".to_string()),
            landing_site: Some("Lasham".to_string()),
            flight_duration: Some("1:30".to_string()),
            max_altitude: Some(4500),
            cross_country_distance: Some(52.5),
            notes: Some("Wave".to_string()),
            ..test_flight("2024-06-15", "Duo Discus")
        };

        let id = storage.insert(&flight).unwrap();
        let stored = storage.get(id).unwrap().unwrap();

        assert_eq!(stored.id, id);
        assert_eq!(stored.to_new_flight(), flight);
    }

    #[test]
    fn test_round_trip_keeps_absent_fields_null() {
        let storage = create_test_storage();
        let flight = test_flight("2024-06-15", "ASK-21");

        let id = storage.insert(&flight).unwrap();
        let stored = storage.get(id).unwrap().unwrap();

        assert_eq!(stored.to_new_flight(), flight);
        assert!(stored.instructor.is_none());
        assert!(stored.cross_country_distance.is_none());
    }

    #[test]
    fn test_ids_increase() {
        let storage = create_test_storage();
        let first = storage.insert(&test_flight("2024-01-01", "ASK-21")).unwrap();
        let second = storage.insert(&test_flight("2024-01-02", "ASK-21")).unwrap();
        assert!(second > first);
    }

    #[test]
    fn test_get_nonexistent() {
        let storage = create_test_storage();
        assert!(storage.get(99999).unwrap().is_none());
    }

    #[test]
    fn test_update() {
        let storage = create_test_storage();
        let id = storage.insert(&test_flight("2024-01-01", "ASK-21")).unwrap();
        let created_at = storage.get(id).unwrap().unwrap().created_at;
        assert!(created_at.is_some());

        let edited = NewFlight {
            flight_duration: Some("0:45".to_string()),
            ..test_flight("2024-01-02", "ASK-13")
        };
        assert!(storage.update(id, &edited).unwrap());

        let stored = storage.get(id).unwrap().unwrap();
        assert_eq!(stored.to_new_flight(), edited);
        assert_eq!(stored.created_at, created_at);
    }

    #[test]
    fn test_update_nonexistent() {
        let storage = create_test_storage();
        assert!(!storage
            .update(42, &test_flight("2024-01-01", "ASK-21"))
            .unwrap());
        assert_eq!(storage.count().unwrap(), 0);
    }

    #[test]
    fn test_delete() {
        let storage = create_test_storage();
        let id = storage.insert(&test_flight("2024-01-01", "ASK-21")).unwrap();

        assert!(storage.delete(id).unwrap());
        assert!(storage.get(id).unwrap().is_none());
    }

    #[test]
    fn test_delete_nonexistent() {
        let storage = create_test_storage();
        assert!(!storage.delete(99999).unwrap());
    }

    #[test]
    fn test_search_empty_term_returns_all_by_date() {
        let storage = create_test_storage();
        seed_filter_fixture(&storage);

        let results = storage.search(&SearchFilter::default()).unwrap();
        let dates: Vec<_> = results.iter().map(|f| f.date.as_str()).collect();
        assert_eq!(dates, ["2024-06-15", "2024-01-01", "2023-12-31"]);
    }

    #[test]
    fn test_search_all_categories() {
        let storage = create_test_storage();
        seed_filter_fixture(&storage);

        let results = storage
            .search(&SearchFilter::new("disc", FilterCategory::All))
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].aircraft_type, "Discus");
    }

    #[test]
    fn test_search_single_category() {
        let storage = create_test_storage();
        seed_filter_fixture(&storage);

        let results = storage
            .search(&SearchFilter::new("2024", FilterCategory::Date))
            .unwrap();
        let dates: Vec<_> = results.iter().map(|f| f.date.as_str()).collect();
        assert_eq!(dates, ["2024-06-15", "2024-01-01"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let storage = create_test_storage();
        seed_filter_fixture(&storage);

        let results = storage
            .search(&SearchFilter::new("ask", FilterCategory::AircraftType))
            .unwrap();
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_search_category_limits_columns() {
        let storage = create_test_storage();
        seed_filter_fixture(&storage);

        // "Dunstable" is a launch site, not a pilot.
        let results = storage
            .search(&SearchFilter::new("dunstable", FilterCategory::Pilot))
            .unwrap();
        assert!(results.is_empty());

        let results = storage
            .search(&SearchFilter::new("dunstable", FilterCategory::LaunchSite))
            .unwrap();
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_search_optional_column() {
        let storage = create_test_storage();
        seed_filter_fixture(&storage);
        storage
            .insert(&NewFlight {
                instructor: Some("K. Jones".to_string()),
                ..test_flight("2022-08-08", "K-21")
            })
            .unwrap();

        let results = storage
            .search(&SearchFilter::new("jones", FilterCategory::Instructor))
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].date, "2022-08-08");

        let results = storage
            .search(&SearchFilter::new("jones", FilterCategory::All))
            .unwrap();
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_search_unrecognized_category_returns_all() {
        let storage = create_test_storage();
        seed_filter_fixture(&storage);

        let filter = SearchFilter::new("disc", FilterCategory::from_label("Wingspan"));
        assert_eq!(storage.search(&filter).unwrap().len(), 3);
    }

    #[test]
    fn test_search_wildcards_are_literal() {
        let storage = create_test_storage();
        seed_filter_fixture(&storage);

        let results = storage
            .search(&SearchFilter::new("%", FilterCategory::All))
            .unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_search_summary_columns() {
        let storage = create_test_storage();
        storage
            .insert(&NewFlight {
                flight_duration: Some("2:05".to_string()),
                max_altitude: Some(3000),
                cross_country_distance: Some(101.26),
                ..test_flight("2024-05-05", "LS4")
            })
            .unwrap();

        let results = storage.search(&SearchFilter::default()).unwrap();
        let summary = &results[0];
        assert_eq!(summary.flight_duration.as_deref(), Some("2:05"));
        assert_eq!(summary.max_altitude, Some(3000));
        assert_eq!(summary.distance_display(), "101.3");
    }

    #[test]
    fn test_count() {
        let storage = create_test_storage();
        assert_eq!(storage.count().unwrap(), 0);

        seed_filter_fixture(&storage);
        assert_eq!(storage.count().unwrap(), 3);
    }

    #[test]
    fn test_totals_empty() {
        let storage = create_test_storage();
        let totals = storage.totals().unwrap();

        assert_eq!(totals.launches, 0);
        assert_eq!(totals.hours_display(), "0:00");
        assert_eq!(totals.distance_display(), "0.0");
    }

    #[test]
    fn test_totals() {
        let storage = create_test_storage();
        storage
            .insert(&NewFlight {
                flight_duration: Some("1:30".to_string()),
                cross_country_distance: Some(50.0),
                ..test_flight("2024-01-01", "ASK-21")
            })
            .unwrap();
        storage
            .insert(&NewFlight {
                flight_duration: Some("0:45".to_string()),
                ..test_flight("2024-01-02", "ASK-21")
            })
            .unwrap();
        storage
            .insert(&NewFlight {
                cross_country_distance: Some(120.5),
                ..test_flight("2024-01-03", "Discus")
            })
            .unwrap();

        let totals = storage.totals().unwrap();
        assert_eq!(totals.launches, 3);
        assert_eq!(totals.hours_display(), "2:15");
        assert_eq!(totals.distance_display(), "170.5");
    }

    #[test]
    fn test_totals_skip_malformed_durations() {
        let storage = create_test_storage();
        storage
            .insert(&NewFlight {
                flight_duration: Some("1:00".to_string()),
                ..test_flight("2024-01-01", "ASK-21")
            })
            .unwrap();
        // Rows written by older tools are not validated.
        storage
            .conn
            .execute(
                r"
                INSERT INTO flights (date, aircraft_type, aircraft_registration,
                                     pilot_in_command, launch_method, launch_site,
                                     flight_duration)
                VALUES ('2024-01-02', 'K-13', 'G-DEKF', 'Pilot', 'Winch', 'Bicester', 'long')
                ",
                [],
            )
            .unwrap();

        let totals = storage.totals().unwrap();
        assert_eq!(totals.launches, 2);
        assert_eq!(totals.hours_display(), "1:00");
    }

    #[test]
    fn test_totals_ignore_filter() {
        let storage = create_test_storage();
        seed_filter_fixture(&storage);

        let filtered = storage
            .search(&SearchFilter::new("disc", FilterCategory::All))
            .unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(storage.totals().unwrap().launches, 3);
    }

    #[test]
    fn test_path() {
        let storage = create_test_storage();
        assert_eq!(storage.path().to_string_lossy(), ":memory:");
    }

    #[test]
    fn test_open_file_based() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("logbook.db");

        let storage = Storage::open(&db_path, true).unwrap();
        storage.insert(&test_flight("2024-01-01", "ASK-21")).unwrap();
        assert_eq!(storage.path(), db_path);
        drop(storage);

        let reopened = Storage::open(&db_path, true).unwrap();
        assert_eq!(reopened.count().unwrap(), 1);
    }

    #[test]
    fn test_open_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let nested_path = dir.path().join("nested/deeper/logbook.db");

        let storage = Storage::open(&nested_path, false).unwrap();
        assert!(nested_path.exists());
        drop(storage);
    }

    #[test]
    fn test_open_migrates_legacy_file() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("legacy.db");
        {
            let conn = Connection::open(&db_path).unwrap();
            conn.execute_batch(
                r"
                CREATE TABLE flights (
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
                    notes TEXT,
                    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
                );
                INSERT INTO flights (date, aircraft_type, aircraft_registration, pilot_in_command,
                                     launch_method, launch_site, flight_duration)
                VALUES ('2020-04-01', 'K-8', 'G-KEIGHT', 'Pilot', 'Bungee', 'Long Mynd', '0:20');
                ",
            )
            .unwrap();
        }

        let storage = Storage::open(&db_path, false).unwrap();
        let flight = storage.get(1).unwrap().unwrap();
        assert_eq!(flight.aircraft_type, "K-8");
        assert_eq!(flight.flight_duration.as_deref(), Some("0:20"));
        assert!(flight.cross_country_distance.is_none());
        assert_eq!(storage.totals().unwrap().hours_display(), "0:20");
    }

    fn legacy_file_with_created_at(path: &Path, created_at: Option<&str>) {
        let conn = Connection::open(path).unwrap();
        conn.execute_batch(
            r"
            CREATE TABLE flights (
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
                notes TEXT,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .unwrap();
        conn.execute(
            r"
            INSERT INTO flights (date, aircraft_type, aircraft_registration, pilot_in_command,
                                 launch_method, launch_site, created_at)
            VALUES ('2020-04-01', 'K-8', 'G-KEIGHT', 'Pilot', 'Bungee', 'Long Mynd', ?1)
            ",
            [created_at],
        )
        .unwrap();
    }

    #[test]
    fn test_get_legacy_row_without_created_at() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("legacy.db");
        legacy_file_with_created_at(&db_path, None);

        let storage = Storage::open(&db_path, false).unwrap();
        assert_eq!(storage.search(&SearchFilter::default()).unwrap().len(), 1);

        let flight = storage.get(1).unwrap().unwrap();
        assert_eq!(flight.aircraft_type, "K-8");
        assert!(flight.created_at.is_none());
    }

    #[test]
    fn test_get_legacy_row_with_fractional_created_at() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("legacy.db");
        legacy_file_with_created_at(&db_path, Some("2020-01-01 10:00:00.123"));

        let storage = Storage::open(&db_path, false).unwrap();
        let created_at = storage.get(1).unwrap().unwrap().created_at.unwrap();
        assert_eq!(
            created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            "2020-01-01 10:00:00"
        );
    }

    #[test]
    fn test_get_legacy_row_with_garbled_created_at() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("legacy.db");
        legacy_file_with_created_at(&db_path, Some("last tuesday"));

        let storage = Storage::open(&db_path, false).unwrap();
        assert!(storage.get(1).unwrap().unwrap().created_at.is_none());
    }

    #[test]
    fn test_parse_timestamp_layouts() {
        assert!(parse_timestamp("2024-06-15 18:00:00").is_some());
        assert!(parse_timestamp("2024-06-15T18:00:00").is_some());
        assert!(parse_timestamp("2024-06-15 18:00:00.5").is_some());
        assert!(parse_timestamp("2024-06-15").is_none());
        assert!(parse_timestamp("").is_none());
    }
}
