//! Boxed tracking table.
//!
//! ```text
//! ╔═════════════════════════════════════════════════╗
//! ║  STATUS: Delivered                              ║
//! ╠══════════════╤════════════╦═════════════════════╣
//! ║     DATE     │    TIME    ║       MESSAGE       ║
//! ╟══════════════╪════════════╬═════════════════════╢
//! ║  2024-01-01  │  08:00:00  ║  Accepted           ║
//! ║  2024-01-01  │  09:30:00  ║  Out for delivery   ║
//! ╚══════════════╧════════════╩═════════════════════╝
//! ```
//!
//! The date and time columns are fixed; the message column width follows
//! the longest message. Rows on different days are split by a rule.

use crate::model::{Locale, TrackingEvent, TrackingReport};

const DATE_WIDTH: usize = 14;
const TIME_WIDTH: usize = 12;
/// Borders plus the date and time columns: everything but the message column.
const FIXED_WIDTH: usize = DATE_WIDTH + TIME_WIDTH + 4;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("tracking report has no events to show")]
    NoEvents,
}

/// Render the report as table lines, top border first.
///
/// Events are printed in the order given; nothing is sorted.
pub fn render(report: &TrackingReport, locale: &Locale) -> Result<Vec<String>, RenderError> {
    let longest = report
        .events
        .iter()
        .map(|e| e.message.trim().chars().count())
        .max()
        .ok_or(RenderError::NoEvents)?;
    let layout = Layout::new(longest, locale);
    let w = layout.message_width;

    let mut lines = vec![
        format!("╔{}╗", "═".repeat(w + DATE_WIDTH + TIME_WIDTH + 2)),
        status_row(&report.status, locale, &layout),
        rule(['╠', '╤', '╦', '╣'], w),
        header_row(locale, &layout),
        rule(['╟', '╪', '╬', '╢'], w),
    ];

    let mut events = report.events.iter().peekable();
    while let Some(event) = events.next() {
        lines.push(event_row(event, locale, &layout));
        if let Some(next) = events.peek()
            && next.timestamp.date() != event.timestamp.date()
        {
            lines.push(rule(['╟', '╪', '╬', '╢'], w));
        }
    }

    lines.push(rule(['╚', '╧', '╩', '╝'], w));
    Ok(lines)
}

/// Message column geometry.
#[derive(Debug, PartialEq, Eq)]
struct Layout {
    message_width: usize,
    center_offset: usize,
}

impl Layout {
    /// Widen the longest message by 5 (odd) or 4 (even), then apply the
    /// locale's bias. English ends up odd and Czech even, which is what
    /// keeps each header caption centered on the full width.
    fn new(longest: usize, locale: &Locale) -> Self {
        let base = if longest % 2 == 1 {
            longest + 5
        } else {
            longest + 4
        };
        let message_width = base + locale.width_bias;
        let center_offset = message_width.div_ceil(2).saturating_sub(locale.center_bias);
        Self {
            message_width,
            center_offset,
        }
    }
}

fn rule([left, date, time, right]: [char; 4], message_width: usize) -> String {
    format!(
        "{left}{}{date}{}{time}{}{right}",
        "═".repeat(DATE_WIDTH),
        "═".repeat(TIME_WIDTH),
        "═".repeat(message_width)
    )
}

fn status_row(status: &str, locale: &Locale, layout: &Layout) -> String {
    let text = format!("{}{status}", locale.status_label);
    let inner = layout.message_width + FIXED_WIDTH - 4;
    format!("║  {}║", pad(&text, inner))
}

fn header_row(locale: &Locale, layout: &Layout) -> String {
    let margin = " ".repeat(layout.center_offset);
    format!(
        "║{}│{}║{margin}{}{margin}║",
        locale.date_caption, locale.time_caption, locale.message_caption
    )
}

fn event_row(event: &TrackingEvent, locale: &Locale, layout: &Layout) -> String {
    let date = event.timestamp.strftime(locale.date_format);
    let time = event.timestamp.strftime(locale.time_format);
    let message = pad(event.message.trim(), layout.message_width.saturating_sub(2));
    format!("║  {date}  │  {time}  ║  {message}║")
}

/// Left-align `text` in `width` characters; never truncates.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.chars().count());
    format!("{text}{}", " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::civil::datetime;

    use crate::model::{Language, ShipmentDetails};

    type Stamp = (i16, i8, i8, i8, i8, i8);

    fn report(language: Language, status: &str, events: &[(Stamp, &str)]) -> TrackingReport {
        TrackingReport {
            identifier: "12345".to_string(),
            language,
            status: status.to_string(),
            details: ShipmentDetails::default(),
            events: events
                .iter()
                .map(|&((y, mo, d, h, mi, s), message)| TrackingEvent {
                    timestamp: datetime(y, mo, d, h, mi, s, 0),
                    message: message.to_string(),
                })
                .collect(),
        }
    }

    fn delivered(language: Language) -> TrackingReport {
        report(
            language,
            "Delivered",
            &[
                ((2024, 1, 1, 8, 0, 0), "Accepted"),
                ((2024, 1, 1, 9, 30, 0), "Out for delivery"),
            ],
        )
    }

    fn is_rule(line: &str) -> bool {
        line.starts_with('╟')
    }

    #[test]
    fn english_golden_output() {
        let lines = render(&delivered(Language::English), Language::English.locale()).unwrap();

        assert_eq!(
            lines,
            [
                "╔═════════════════════════════════════════════════╗",
                "║  STATUS: Delivered                              ║",
                "╠══════════════╤════════════╦═════════════════════╣",
                "║     DATE     │    TIME    ║       MESSAGE       ║",
                "╟══════════════╪════════════╬═════════════════════╢",
                "║  2024-01-01  │  08:00:00  ║  Accepted           ║",
                "║  2024-01-01  │  09:30:00  ║  Out for delivery   ║",
                "╚══════════════╧════════════╩═════════════════════╝",
            ]
        );
    }

    #[test]
    fn czech_golden_output() {
        let report = report(
            Language::Czech,
            "Doručeno",
            &[
                ((2024, 1, 2, 14, 30, 59), "Připravena"),
                ((2024, 1, 3, 10, 15, 0), "Doručeno."),
            ],
        );
        let lines = render(&report, Language::Czech.locale()).unwrap();

        assert_eq!(
            lines,
            [
                "╔══════════════════════════════════════════╗",
                "║  STAV: Doručeno                          ║",
                "╠══════════════╤════════════╦══════════════╣",
                "║     DATUM    │     ČAS    ║    ZPRÁVA    ║",
                "╟══════════════╪════════════╬══════════════╢",
                "║  02.01.2024  │  14:30:59  ║  Připravena  ║",
                "╟══════════════╪════════════╬══════════════╢",
                "║  03.01.2024  │  10:15:00  ║  Doručeno.   ║",
                "╚══════════════╧════════════╩══════════════╝",
            ]
        );
    }

    #[test]
    fn message_width_follows_parity_and_language() {
        let en = Language::English.locale();
        let cs = Language::Czech.locale();

        assert_eq!(Layout::new(16, en).message_width, 21);
        assert_eq!(Layout::new(15, en).message_width, 21);
        assert_eq!(Layout::new(16, cs).message_width, 20);
        assert_eq!(Layout::new(15, cs).message_width, 20);

        assert_eq!(Layout::new(16, en).center_offset, 7);
        assert_eq!(Layout::new(16, cs).center_offset, 7);
        assert_eq!(Layout::new(9, cs).center_offset, 4);
    }

    #[test]
    fn every_line_has_the_full_table_width() {
        for language in [Language::English, Language::Czech] {
            let report = TrackingReport::sample(language);
            let lines = render(&report, language.locale()).unwrap();
            let width = lines[0].chars().count();
            for line in &lines {
                assert_eq!(line.chars().count(), width, "{line}");
            }
        }
    }

    #[test]
    fn one_rule_between_different_days() {
        let report = report(
            Language::English,
            "In transit",
            &[
                ((2024, 1, 1, 8, 0, 0), "e1"),
                ((2024, 1, 1, 9, 0, 0), "e2"),
                ((2024, 1, 2, 7, 0, 0), "e3"),
            ],
        );
        let lines = render(&report, Language::English.locale()).unwrap();
        // Body starts after the header rule at index 4.
        let body = &lines[5..lines.len() - 1];

        assert_eq!(body.iter().filter(|l| is_rule(l)).count(), 1);
        assert!(body[1].contains("e2"));
        assert!(is_rule(&body[2]));
        assert!(body[3].contains("e3"));
    }

    #[test]
    fn same_day_in_another_month_still_splits() {
        let report = report(
            Language::English,
            "In transit",
            &[
                ((2024, 1, 5, 8, 0, 0), "January"),
                ((2024, 2, 5, 8, 0, 0), "February"),
            ],
        );
        let lines = render(&report, Language::English.locale()).unwrap();

        let body = &lines[5..lines.len() - 1];
        assert_eq!(body.iter().filter(|l| is_rule(l)).count(), 1);
    }

    #[test]
    fn languages_agree_on_rows_and_messages() {
        let report = TrackingReport::sample(Language::English);
        let en = render(&report, Language::English.locale()).unwrap();
        let cs = render(&report, Language::Czech.locale()).unwrap();

        assert_eq!(en.len(), cs.len());
        for event in &report.events {
            let en_row = en.iter().position(|l| l.contains(&event.message));
            let cs_row = cs.iter().position(|l| l.contains(&event.message));
            assert!(en_row.is_some());
            assert_eq!(en_row, cs_row);
        }
    }

    #[test]
    fn rendering_is_idempotent() {
        let report = TrackingReport::sample(Language::Czech);
        let locale = Language::Czech.locale();
        assert_eq!(render(&report, locale), render(&report, locale));
    }

    #[test]
    fn long_status_is_not_truncated() {
        let mut report = delivered(Language::English);
        report.status = "x".repeat(80);
        let lines = render(&report, Language::English.locale()).unwrap();
        assert!(lines[1].contains(&report.status));
    }

    #[test]
    fn empty_report_is_rejected() {
        let report = report(Language::English, "Unknown", &[]);
        assert_eq!(
            render(&report, Language::English.locale()),
            Err(RenderError::NoEvents)
        );
    }
}
