// ABOUTME: ScrapeReport struct holding the rows extracted from one page for one request.
// ABOUTME: Includes emptiness/count helpers and a plain-text formatter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The result of one extraction call: the request, where it ran, and the
/// rows it produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeReport {
    pub url: String,
    pub domain: String,
    pub request: String,
    pub rows: Vec<String>,
    pub retrieved_at: DateTime<Utc>,
}

impl ScrapeReport {
    /// Number of extracted rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Format the rows as plain text, one per line.
    pub fn format_text(&self) -> String {
        self.rows.join("\n")
    }
}
