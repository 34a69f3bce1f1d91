//! Search filters for the flight list.
//!
//! A [`SearchFilter`] pairs a free-text term with a [`FilterCategory`] and
//! knows how to turn itself into a SQL `WHERE` clause with bound parameters.

use std::fmt;

use tracing::warn;

/// Columns searched when the category is [`FilterCategory::All`].
const ALL_SEARCH_COLUMNS: &[&str] = &[
    "date",
    "aircraft_type",
    "aircraft_registration",
    "pilot_in_command",
    "instructor",
    "launch_method",
    "launch_site",
    "landing_site",
];

/// Which part of a flight a search term is matched against.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterCategory {
    /// Any searchable column.
    #[default]
    All,
    /// Flight date.
    Date,
    /// Glider type.
    AircraftType,
    /// Glider registration.
    Registration,
    /// Pilot in command.
    Pilot,
    /// Instructor.
    Instructor,
    /// Launch method.
    LaunchMethod,
    /// Launch site.
    LaunchSite,
    /// Landing site.
    LandingSite,
    /// A label that names no known category. Searching with it applies no
    /// filter at all.
    Unrecognized(String),
}

impl FilterCategory {
    /// Every known category, in menu order.
    pub const KNOWN: [Self; 9] = [
        Self::All,
        Self::Date,
        Self::AircraftType,
        Self::Registration,
        Self::Pilot,
        Self::Instructor,
        Self::LaunchMethod,
        Self::LaunchSite,
        Self::LandingSite,
    ];

    /// Parse a category from its exact display label.
    ///
    /// Anything else, including a differently cased label, becomes
    /// [`FilterCategory::Unrecognized`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|category| category.label() == label)
            .unwrap_or_else(|| Self::Unrecognized(label.to_string()))
    }

    /// The display label for this category.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Date => "Date",
            Self::AircraftType => "Aircraft Type",
            Self::Registration => "Registration",
            Self::Pilot => "Pilot",
            Self::Instructor => "Instructor",
            Self::LaunchMethod => "Launch Method",
            Self::LaunchSite => "Launch Site",
            Self::LandingSite => "Landing Site",
            Self::Unrecognized(label) => label,
        }
    }

    /// The column this category searches, for single-column categories.
    #[must_use]
    pub fn column(&self) -> Option<&'static str> {
        match self {
            Self::Date => Some("date"),
            Self::AircraftType => Some("aircraft_type"),
            Self::Registration => Some("aircraft_registration"),
            Self::Pilot => Some("pilot_in_command"),
            Self::Instructor => Some("instructor"),
            Self::LaunchMethod => Some("launch_method"),
            Self::LaunchSite => Some("launch_site"),
            Self::LandingSite => Some("landing_site"),
            Self::All | Self::Unrecognized(_) => None,
        }
    }
}

impl fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The active search over the flight list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchFilter {
    /// Free-text term, matched as a case-insensitive substring.
    pub term: String,
    /// Where to look for the term.
    pub category: FilterCategory,
}

/// A `WHERE` clause and the values bound to its placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhereClause {
    /// SQL text, starting with `WHERE`.
    pub sql: String,
    /// One bound value per `?` in `sql`.
    pub params: Vec<String>,
}

impl SearchFilter {
    /// Create a filter from a term and category.
    #[must_use]
    pub fn new(term: impl Into<String>, category: FilterCategory) -> Self {
        Self {
            term: term.into(),
            category,
        }
    }

    /// Check whether this filter restricts anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }

    /// Build the `WHERE` clause for this filter.
    ///
    /// Returns `None` when every flight should be listed: an empty term, or
    /// an unrecognised category.
    #[must_use]
    pub fn where_clause(&self) -> Option<WhereClause> {
        if self.is_empty() {
            return None;
        }

        let single;
        let columns: &[&str] = match &self.category {
            FilterCategory::All => ALL_SEARCH_COLUMNS,
            FilterCategory::Unrecognized(label) => {
                warn!(category = %label, "Unrecognized filter category, showing all flights");
                return None;
            }
            category => {
                single = category.column()?;
                std::slice::from_ref(&single)
            }
        };

        let pattern = like_pattern(&self.term);

        let sql = columns
            .iter()
            .map(|column| format!("LOWER({column}) LIKE ? ESCAPE '\\'"))
            .collect::<Vec<_>>()
            .join(" OR ");

        Some(WhereClause {
            sql: format!("WHERE {sql}"),
            params: vec![pattern; columns.len()],
        })
    }
}

/// Lower-case the term, escape `LIKE` wildcards and wrap it in `%`.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
