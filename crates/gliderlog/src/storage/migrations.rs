//! Schema initialization and migration for gliderlog.
//!
//! The layout is detected from the live column set rather than a stored
//! version number: a `flights` table without `cross_country_distance` is the
//! legacy layout and gets rebuilt in place.

use rusqlite::Connection;
use tracing::{debug, info};

use crate::error::{Error, Result};

use super::schema::{
    copy_legacy_rows, create_flights_table, CREATE_DATE_INDEX, DISTANCE_COLUMN, FLIGHTS_TABLE,
    REPLACE_LEGACY_TABLE,
};

/// The shape of the `flights` table found at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaLayout {
    /// No `flights` table yet.
    Missing,
    /// A `flights` table predating the distance column.
    Legacy,
    /// The current layout.
    Current,
}

impl SchemaLayout {
    /// Classify a table from its column names.
    #[must_use]
    pub fn detect(columns: &[String]) -> Self {
        if columns.is_empty() {
            Self::Missing
        } else if columns.iter().any(|c| c == DISTANCE_COLUMN) {
            Self::Current
        } else {
            Self::Legacy
        }
    }
}

/// Initialize the database schema.
///
/// Creates the `flights` table when missing, rebuilds a legacy table with the
/// current column set, and leaves a current table untouched. A legacy rebuild
/// runs in a single transaction, so a failure leaves the file as it was.
///
/// # Errors
///
/// Returns [`Error::DatabaseMigration`] if any step fails.
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    let columns = table_columns(conn, FLIGHTS_TABLE)
        .map_err(|e| Error::migration(format!("failed to inspect flights table: {e}")))?;

    match SchemaLayout::detect(&columns) {
        SchemaLayout::Missing => {
            conn.execute_batch(&create_flights_table(FLIGHTS_TABLE))
                .map_err(|e| Error::migration(format!("failed to create flights table: {e}")))?;
            info!("Created flights table");
        }
        SchemaLayout::Legacy => {
            let rows = migrate_legacy(conn)
                .map_err(|e| Error::migration(format!("failed to migrate legacy table: {e}")))?;
            info!(rows, "Migrated legacy flights table");
        }
        SchemaLayout::Current => debug!("Flights table is up to date"),
    }

    conn.execute_batch(CREATE_DATE_INDEX)
        .map_err(|e| Error::migration(format!("failed to create date index: {e}")))?;

    Ok(())
}

/// Column names of `table`, empty if the table does not exist.
pub(crate) fn table_columns(conn: &Connection, table: &str) -> rusqlite::Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1)")?;
    let columns = stmt
        .query_map([table], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<String>>>()?;
    Ok(columns)
}

/// Rebuild the legacy table, returning the number of rows carried over.
fn migrate_legacy(conn: &Connection) -> rusqlite::Result<usize> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch("DROP TABLE IF EXISTS flights_new")?;
    tx.execute_batch(&create_flights_table("flights_new"))?;
    let copied = tx.execute(&copy_legacy_rows(), [])?;
    tx.execute_batch(REPLACE_LEGACY_TABLE)?;

    tx.commit()?;
    Ok(copied)
}
