//! Synthetic report used by `--test`.

use jiff::civil::datetime;

use super::{DetailEntry, Language, ShipmentDetails, TrackingEvent, TrackingReport};

const SAMPLE_IDENTIFIER: &str = "1234567890";

impl TrackingReport {
    /// A fixed report spanning three days, for exercising the renderer
    /// without touching the network.
    pub fn sample(language: Language) -> Self {
        let (status, messages, details) = match language {
            Language::English => (
                "Delivered",
                [
                    "We have received the shipment data from the sender.",
                    "Accepted at the depot.",
                    "Shipment is on its way to the pickup point.",
                    "Ready for pickup.",
                    "Delivered.",
                ],
                [("Sender", "Example Shop"), ("Pickup point", "Praha 1, Národní 10")],
            ),
            Language::Czech => (
                "Doručeno",
                [
                    "Přijali jsme data o zásilce od odesílatele.",
                    "Zásilka byla přijata na depu.",
                    "Zásilka je na cestě na výdejní místo.",
                    "Připravena k vyzvednutí.",
                    "Doručeno.",
                ],
                [("Odesílatel", "Example Shop"), ("Výdejní místo", "Praha 1, Národní 10")],
            ),
        };

        let timestamps = [
            datetime(2024, 1, 1, 8, 0, 0, 0),
            datetime(2024, 1, 1, 17, 42, 13, 0),
            datetime(2024, 1, 2, 6, 5, 0, 0),
            datetime(2024, 1, 2, 14, 30, 59, 0),
            datetime(2024, 1, 3, 10, 15, 0, 0),
        ];

        let events = timestamps
            .into_iter()
            .zip(messages)
            .map(|(timestamp, message)| TrackingEvent {
                timestamp,
                message: message.to_string(),
            })
            .collect();

        let entries = details
            .into_iter()
            .map(|(label, value)| DetailEntry {
                label: label.to_string(),
                value: value.to_string(),
            })
            .collect();

        Self {
            identifier: SAMPLE_IDENTIFIER.to_string(),
            language,
            status: status.to_string(),
            details: ShipmentDetails { entries },
            events,
        }
    }
}
