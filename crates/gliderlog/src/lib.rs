//! `gliderlog` - A glider pilot's logbook backed by `SQLite`
//!
//! This library provides flight validation, storage with in-place schema
//! migration, filtered search and running totals. The [`Logbook`] session
//! ties them together for front ends such as the `gliderlog` CLI.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod duration;
pub mod error;
pub mod flight;
pub mod logging;
pub mod search;
pub mod session;
pub mod storage;
pub mod totals;
pub mod validation;

pub use config::Config;
pub use error::{Error, Result};
pub use flight::{Flight, FlightSummary, NewFlight};
pub use logging::init_logging;
pub use search::{FilterCategory, SearchFilter};
pub use session::{Logbook, ResultSet};
pub use storage::Storage;
pub use totals::Totals;
pub use validation::{FlightDraft, ValidationError};
