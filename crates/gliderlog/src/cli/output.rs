//! Rendering of flights and totals for the terminal.
//!
//! Every renderer returns a `String` so the binary only has to print it.

use std::fmt::Write as _;

use crate::error::Result;
use crate::flight::{Flight, FlightSummary};
use crate::session::ResultSet;
use crate::totals::Totals;

use super::OutputFormat;

const TABLE_HEADERS: [&str; 9] = [
    "ID",
    "Date",
    "Type",
    "Registration",
    "Pilot",
    "Launch",
    "Duration",
    "Altitude",
    "Distance",
];

/// Render a listing in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_results(results: &ResultSet, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(render_plain(&results.flights)),
        OutputFormat::Table => Ok(render_table(results)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&results.flights)?),
    }
}

/// The cells of one list row, in header order.
fn summary_cells(flight: &FlightSummary) -> [String; 9] {
    [
        flight.id.to_string(),
        flight.date.clone(),
        flight.aircraft_type.clone(),
        flight.aircraft_registration.clone(),
        flight.pilot_in_command.clone(),
        flight.launch_method.clone(),
        flight.flight_duration.clone().unwrap_or_default(),
        flight
            .max_altitude
            .map(|alt| alt.to_string())
            .unwrap_or_default(),
        flight.distance_display(),
    ]
}

fn render_plain(flights: &[FlightSummary]) -> String {
    let mut out = String::new();
    for flight in flights {
        let _ = writeln!(out, "{}", summary_cells(flight).join("\t"));
    }
    out
}

fn render_table(results: &ResultSet) -> String {
    let rows: Vec<[String; 9]> = results.flights.iter().map(summary_cells).collect();

    let mut widths = TABLE_HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, TABLE_HEADERS.iter().copied(), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, rule.iter().map(String::as_str), &widths);
    for row in &rows {
        push_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    out.push('\n');
    out.push_str(&results.status_line());
    out.push('\n');
    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

/// Render every field of one flight.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_flight(flight: &Flight, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(flight)?);
    }

    let optional = |value: &Option<String>| value.clone().unwrap_or_default();
    let fields = [
        ("Flight", flight.id.to_string()),
        ("Date", flight.date.clone()),
        ("Aircraft type", flight.aircraft_type.clone()),
        ("Registration", flight.aircraft_registration.clone()),
        ("Pilot in command", flight.pilot_in_command.clone()),
        ("Instructor", optional(&flight.instructor)),
        ("Launch method", flight.launch_method.clone()),
        ("Launch site", flight.launch_site.clone()),
        ("Landing site", optional(&flight.landing_site)),
        ("Duration", optional(&flight.flight_duration)),
        (
            "Max altitude (ft)",
            flight
                .max_altitude
                .map(|alt| alt.to_string())
                .unwrap_or_default(),
        ),
        ("Distance (km)", flight.distance_display()),
        ("Notes", optional(&flight.notes)),
        (
            "Logged",
            flight
                .created_at
                .map(|at| at.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default(),
        ),
    ];

    let mut out = String::new();
    for (label, value) in fields {
        let _ = writeln!(out, "{:<18} {value}", format!("{label}:"));
    }
    Ok(out)
}

/// Render the running totals.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_totals(totals: &Totals, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(totals)?);
    }
    Ok(format!(
        "Total Launches: {}\nTotal Hours: {}\nTotal Distance: {} km\n",
        totals.launches,
        totals.hours_display(),
        totals.distance_display()
    ))
}
