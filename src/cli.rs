//! CLI interface for ztrack.
//!
//! One invocation is one lookup and one printed report:
//!
//! - `ztrack Z1234567890` fetches the tracking page and prints the table.
//! - `ztrack --language cs 1234567890` does the same in Czech.
//! - `ztrack --test` prints a built-in sample report without network access.
//! - `--json` swaps the table for the full report as JSON.

mod format;

use clap::{Parser, ValueEnum};
use tracing::debug;

use crate::config::Config;
use crate::model::{Language, TrackingReport};
use crate::render::render;
use crate::track::Tracker;

pub use format::format_error;

/// ztrack: track a Packeta parcel from the terminal.
#[derive(Debug, Parser)]
#[command(name = "ztrack", version)]
pub struct Cli {
    /// Package identifier, e.g. `Z 123 4567 890`.
    #[arg(required_unless_present = "test")]
    id: Option<String>,

    /// Tracking language. Defaults to the configured language, then English.
    #[arg(short, long, value_enum)]
    language: Option<LanguageArg>,

    /// Highlight error lines.
    #[arg(long, overrides_with = "no_color")]
    color: bool,

    /// Print error lines without highlighting.
    #[arg(long, overrides_with = "color")]
    no_color: bool,

    /// Render a built-in sample report instead of fetching one.
    #[arg(long)]
    test: bool,

    /// Print the report as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

/// CLI-facing language, mapped to the domain `Language`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LanguageArg {
    /// English.
    En,
    /// Czech.
    Cs,
}

impl LanguageArg {
    fn to_domain(self) -> Language {
        match self {
            Self::En => Language::English,
            Self::Cs => Language::Czech,
        }
    }
}

impl Cli {
    /// Whether error output is highlighted: flags first, then config.
    pub fn color(&self, config: &Config) -> bool {
        if self.no_color {
            false
        } else if self.color {
            true
        } else {
            config.color
        }
    }

    fn language(&self, config: &Config) -> Language {
        self.language.map_or(config.language, LanguageArg::to_domain)
    }
}

/// Run the CLI, returning an error message on failure.
pub fn run(cli: &Cli, config: &Config) -> Result<(), String> {
    let language = cli.language(config);

    let report = if cli.test {
        debug!(?language, "rendering sample report");
        TrackingReport::sample(language)
    } else {
        let id = cli
            .id
            .as_deref()
            .ok_or("a package identifier is required")?;
        let tracker = Tracker::new(config.host.as_str()).map_err(|e| e.to_string())?;
        tracker.fetch(id, language).map_err(|e| e.to_string())?
    };

    if cli.json {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("failed to serialize report: {e}"))?;
        println!("{json}");
        return Ok(());
    }

    let lines = render(&report, language.locale()).map_err(|e| e.to_string())?;
    for line in lines {
        println!("{line}");
    }

    Ok(())
}
