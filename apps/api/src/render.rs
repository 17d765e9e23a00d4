//! Read-only result panels — the pure `result → view` half of every tool.
//!
//! A panel is a titled block of display lines. Renderers never mutate the
//! result they present; resubmission goes through a session reset.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Panel {
    pub title: String,
    pub lines: Vec<String>,
}

impl Panel {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn bullets<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for item in items {
            self.lines.push(format!("• {}", item.as_ref()));
        }
        self
    }
}

/// Position of the average marker on the salary range bar, in percent:
/// `(average − min) / (max − min) × 100`, centered when the range is empty.
pub fn average_marker_position(min: f64, average: f64, max: f64) -> f64 {
    let total_range = max - min;
    if total_range > 0.0 {
        (average - min) / total_range * 100.0
    } else {
        50.0
    }
}

/// Formats a salary figure as whole US dollars with thousands separators.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let negative = rounded < 0;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();

    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// `"Role — 87/100"` lines used by every match-scored listing.
pub fn scored_line(label: &str, score: f64) -> String {
    format!("{label} — {score:.0}/100")
}
