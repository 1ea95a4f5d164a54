//! Core data model for ztrack.
//!
//! A lookup produces one `TrackingReport`: the shipment status, an ordered
//! list of tracking events, and the shipment details sidecar.

mod language;
mod report;
mod sample;

pub use language::{Language, Locale};
pub use report::{DetailEntry, ShipmentDetails, TrackingEvent, TrackingReport};
