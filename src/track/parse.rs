//! HTML extraction for the tracking page.
//!
//! The page carries, in document order:
//!
//! - an optional `div.alert-danger` when the identifier is unknown,
//! - an `h3` whose second line is the shipment status,
//! - a `table.table` with shipment details (label in `th`, value in `td`),
//! - a second `table.table` with one tracking event per row
//!   (timestamp in `th`, message in `td`).

use jiff::civil::DateTime;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use super::{Result, TrackError};
use crate::model::{DetailEntry, Language, Locale, ShipmentDetails, TrackingEvent, TrackingReport};

/// Parse a tracking page into a report.
///
/// Fails with [`TrackError::InvalidIdentifier`] before any other extraction
/// when the page carries the invalid-package alert.
pub fn parse_report(identifier: &str, language: Language, html: &str) -> Result<TrackingReport> {
    let document = Html::parse_document(html);

    if document.select(&selector("div.alert-danger")).next().is_some() {
        warn!(identifier, "tracking page reports an invalid identifier");
        return Err(TrackError::InvalidIdentifier(identifier.to_string()));
    }

    let status = parse_status(&document)?;

    let tables: Vec<ElementRef> = document.select(&selector("table.table")).collect();
    let [details_table, events_table, ..] = tables.as_slice() else {
        return Err(TrackError::MalformedDocument("tracking table"));
    };

    let details = parse_details(*details_table);
    let events = parse_events(*events_table, language.locale())?;
    debug!(
        details = details.entries.len(),
        events = events.len(),
        "extracted tracking tables"
    );

    Ok(TrackingReport {
        identifier: identifier.to_string(),
        language,
        status,
        details,
        events,
    })
}

/// The status heading reads `"Status:\n  <value>"`; the value is the second line.
fn parse_status(document: &Html) -> Result<String> {
    let heading = document
        .select(&selector("h3"))
        .next()
        .ok_or(TrackError::MalformedDocument("status heading"))?;

    let text = element_text(heading);
    text.split('\n')
        .nth(1)
        .map(|line| line.trim().to_string())
        .ok_or(TrackError::MalformedDocument("status value"))
}

fn parse_details(table: ElementRef) -> ShipmentDetails {
    let entries = labelled_rows(table)
        .into_iter()
        .map(|(label, value)| DetailEntry {
            label: label.trim().to_string(),
            value: value.trim().to_string(),
        })
        .collect();
    ShipmentDetails { entries }
}

fn parse_events(table: ElementRef, locale: &Locale) -> Result<Vec<TrackingEvent>> {
    labelled_rows(table)
        .into_iter()
        .map(|(stamp, message)| {
            Ok(TrackingEvent {
                timestamp: parse_timestamp(&stamp, locale)?,
                message: message.trim().to_string(),
            })
        })
        .collect()
}

/// Parse a timestamp cell with the locale's format.
///
/// Internal whitespace runs (line breaks inside the cell) collapse to one space.
fn parse_timestamp(cell: &str, locale: &Locale) -> Result<DateTime> {
    let value = cell.split_whitespace().collect::<Vec<_>>().join(" ");
    DateTime::strptime(locale.timestamp_format, &value)
        .map_err(|source| TrackError::MalformedTimestamp { value, source })
}

/// `(th, td)` text pairs of each row that has both cells, in document order.
fn labelled_rows(table: ElementRef) -> Vec<(String, String)> {
    let th = selector("th");
    let td = selector("td");
    table
        .select(&selector("tr"))
        .filter_map(|row| {
            let header = row.select(&th).next()?;
            let data = row.select(&td).next()?;
            Some((element_text(header), element_text(data)))
        })
        .collect()
}

fn element_text(element: ElementRef) -> String {
    element.text().collect()
}

fn selector(css: &'static str) -> Selector {
    Selector::parse(css).expect("static selector is valid")
}
