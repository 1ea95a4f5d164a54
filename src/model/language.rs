//! Supported tracking languages and their display conventions.

use serde::{Deserialize, Serialize};

/// Language of the tracking page and of the rendered table.
///
/// English is the primary language; Czech is the secondary one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "cs")]
    Czech,
}

impl Language {
    /// The display conventions for this language.
    pub fn locale(self) -> &'static Locale {
        match self {
            Self::English => &ENGLISH,
            Self::Czech => &CZECH,
        }
    }
}

/// Per-language formatting record, chosen once and passed to the renderer.
///
/// Caption cells for the date and time columns are stored pre-padded to
/// their column widths (14 and 12) so the header row is reproduced exactly.
#[derive(Debug, PartialEq, Eq)]
pub struct Locale {
    /// Two-letter code used in the tracking URL.
    pub code: &'static str,
    /// `strptime` format of the timestamp cell on the tracking page.
    pub timestamp_format: &'static str,
    pub date_format: &'static str,
    pub time_format: &'static str,
    pub date_caption: &'static str,
    pub time_caption: &'static str,
    pub message_caption: &'static str,
    pub status_label: &'static str,
    /// Added to the message column width after the parity adjustment.
    pub width_bias: usize,
    /// Subtracted from `ceil(W / 2)` to center the message caption.
    pub center_bias: usize,
}

static ENGLISH: Locale = Locale {
    code: "en",
    timestamp_format: "%Y-%m-%d %H:%M:%S",
    date_format: "%Y-%m-%d",
    time_format: "%H:%M:%S",
    date_caption: "     DATE     ",
    time_caption: "    TIME    ",
    message_caption: "MESSAGE",
    status_label: "STATUS: ",
    width_bias: 1,
    center_bias: 4,
};

static CZECH: Locale = Locale {
    code: "cs",
    timestamp_format: "%d. %m. %Y %H:%M:%S",
    date_format: "%d.%m.%Y",
    time_format: "%H:%M:%S",
    date_caption: "     DATUM    ",
    time_caption: "     ČAS    ",
    message_caption: "ZPRÁVA",
    status_label: "STAV: ",
    width_bias: 0,
    center_bias: 3,
};
