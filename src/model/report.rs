//! Tracking report types: the result of one lookup.

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

use super::Language;

/// One timestamped status update from the carrier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingEvent {
    pub timestamp: DateTime,
    pub message: String,
}

/// The full result of one lookup: status plus ordered events.
///
/// Events keep the order the tracking page presents them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingReport {
    pub identifier: String,
    pub language: Language,
    pub status: String,
    pub details: ShipmentDetails,
    pub events: Vec<TrackingEvent>,
}

/// Shipment metadata from the first table on the tracking page:
/// sender, order reference, cash on delivery, pickup point.
///
/// Labels are whatever the page shows, in the page's language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentDetails {
    pub entries: Vec<DetailEntry>,
}

/// A single label/value row of the shipment details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailEntry {
    pub label: String,
    pub value: String,
}

