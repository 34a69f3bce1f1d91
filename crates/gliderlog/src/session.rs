//! The logbook session.
//!
//! [`Logbook`] is the single owner of everything a front end needs between
//! calls: the open [`Storage`], the active [`SearchFilter`] and the currently
//! selected flight. Every mutation validates first and only then touches the
//! database, and every call returns its outcome instead of updating widgets.

use serde::Serialize;
use tracing::info;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::flight::{Flight, FlightSummary};
use crate::search::{FilterCategory, SearchFilter};
use crate::storage::Storage;
use crate::totals::Totals;
use crate::validation::FlightDraft;

/// The flights currently shown for the active filter.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ResultSet {
    /// Matching flights, newest first.
    pub flights: Vec<FlightSummary>,
}

impl ResultSet {
    /// Number of flights shown.
    #[must_use]
    pub fn count(&self) -> usize {
        self.flights.len()
    }

    /// Check if nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// One-line status, e.g. `Showing 3 flights`.
    #[must_use]
    pub fn status_line(&self) -> String {
        format!("Showing {} flights", self.count())
    }
}

/// A logbook session over one database.
#[derive(Debug)]
pub struct Logbook {
    storage: Storage,
    filter: SearchFilter,
    selected: Option<i64>,
}

impl Logbook {
    /// Open the logbook configured in `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open(config: &Config) -> Result<Self> {
        let storage = Storage::open(config.database_path(), config.storage.wal_mode)?;
        info!(path = %storage.path().display(), "Opened logbook");
        Ok(Self::with_storage(storage))
    }

    /// Start a session over already-open storage.
    #[must_use]
    pub fn with_storage(storage: Storage) -> Self {
        Self {
            storage,
            filter: SearchFilter::default(),
            selected: None,
        }
    }

    /// The underlying storage.
    #[must_use]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// The active search filter.
    #[must_use]
    pub fn filter(&self) -> &SearchFilter {
        &self.filter
    }

    /// The id of the selected flight, if any.
    #[must_use]
    pub fn selected(&self) -> Option<i64> {
        self.selected
    }

    /// Validate and log a new flight, returning its id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] without writing anything if the draft is
    /// invalid, or a storage error if the insert fails.
    pub fn create(&mut self, draft: &FlightDraft) -> Result<i64> {
        let flight = draft.validate()?;
        let id = self.storage.insert(&flight)?;
        self.selected = None;
        info!(id, date = %flight.date, "Flight added");
        Ok(id)
    }

    /// Validate and overwrite the flight with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for an invalid draft and
    /// [`Error::FlightNotFound`] if no flight has this id.
    pub fn update(&mut self, id: i64, draft: &FlightDraft) -> Result<()> {
        let flight = draft.validate()?;
        if !self.storage.update(id, &flight)? {
            return Err(Error::FlightNotFound { id });
        }
        self.selected = None;
        info!(id, "Flight updated");
        Ok(())
    }

    /// Overwrite the selected flight.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSelection`] if nothing is selected, otherwise as
    /// [`Logbook::update`].
    pub fn update_selected(&mut self, draft: &FlightDraft) -> Result<()> {
        let id = self.selected.ok_or(Error::NoSelection)?;
        self.update(id, draft)
    }

    /// Delete the flight with the given id.
    ///
    /// Callers are expected to have confirmed the deletion with the user.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FlightNotFound`] if no flight has this id.
    pub fn delete(&mut self, id: i64) -> Result<()> {
        if !self.storage.delete(id)? {
            return Err(Error::FlightNotFound { id });
        }
        if self.selected == Some(id) {
            self.selected = None;
        }
        info!(id, "Flight deleted");
        Ok(())
    }

    /// Replace the active filter and return the matching flights.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn set_filter(
        &mut self,
        term: impl Into<String>,
        category: FilterCategory,
    ) -> Result<ResultSet> {
        self.filter = SearchFilter::new(term, category);
        self.refresh()
    }

    /// Reset to an empty term in every category and list all flights.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn clear_filter(&mut self) -> Result<ResultSet> {
        self.filter = SearchFilter::default();
        self.refresh()
    }

    /// Re-run the active filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn refresh(&self) -> Result<ResultSet> {
        let flights = self.storage.search(&self.filter)?;
        Ok(ResultSet { flights })
    }

    /// Load a flight's details and make it the selected flight.
    ///
    /// Selecting an unknown id leaves the current selection unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn select(&mut self, id: i64) -> Result<Option<Flight>> {
        let flight = self.storage.get(id)?;
        if flight.is_some() {
            self.selected = Some(id);
        }
        Ok(flight)
    }

    /// Forget the selected flight.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Running totals over the whole logbook.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn totals(&self) -> Result<Totals> {
        self.storage.totals()
    }
}
