//! Fetching a tracking page and turning it into a `TrackingReport`.
//!
//! One lookup is one blocking GET against the tracking host. There is no
//! retry and no partial result: any failure aborts the whole lookup.

mod parse;

#[cfg(test)]
mod fixtures;

use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::model::{Language, TrackingReport};

pub use parse::parse_report;

/// The public Packeta tracking host.
pub const DEFAULT_HOST: &str = "https://tracking.packeta.com";

/// Errors that can occur while looking up a package.
#[derive(Debug, thiserror::Error)]
pub enum TrackError {
    #[error("could not reach the tracking service, check your internet connection ({0})")]
    Unreachable(#[from] reqwest::Error),

    #[error("invalid tracking number: {0}")]
    InvalidIdentifier(String),

    #[error("unexpected timestamp '{value}' on the tracking page: {source}")]
    MalformedTimestamp {
        value: String,
        #[source]
        source: jiff::Error,
    },

    #[error("unexpected tracking page layout: missing {0}")]
    MalformedDocument(&'static str),
}

pub type Result<T> = core::result::Result<T, TrackError>;

/// Looks packages up against one tracking host.
pub struct Tracker {
    client: Client,
    host: String,
}

impl Tracker {
    /// Creates a tracker for the given host, e.g. [`DEFAULT_HOST`].
    pub fn new(host: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("ztrack/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let host = host.into().trim_end_matches('/').to_string();
        Ok(Self { client, host })
    }

    /// Fetch and parse the tracking page for `identifier`.
    pub fn fetch(&self, identifier: &str, language: Language) -> Result<TrackingReport> {
        let identifier = normalize_identifier(identifier);
        let url = self.lookup_url(&identifier, language);

        debug!(%url, "requesting tracking page");
        let response = self.client.get(&url).send()?;
        debug!(status = %response.status(), "tracking page received");
        let body = response.error_for_status()?.text()?;

        let report = parse_report(&identifier, language, &body)?;
        info!(
            identifier = %report.identifier,
            events = report.events.len(),
            "tracking page parsed"
        );
        Ok(report)
    }

    /// `{host}/{lang}/?id={identifier}`
    fn lookup_url(&self, identifier: &str, language: Language) -> String {
        format!("{}/{}/?id={identifier}", self.host, language.locale().code)
    }
}

/// Strip whitespace and a single leading non-digit prefix (`Z 123 456` → `123456`).
pub fn normalize_identifier(raw: &str) -> String {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    match compact.chars().next() {
        Some(first) if !first.is_ascii_digit() => compact[first.len_utf8()..].to_string(),
        _ => compact,
    }
}
