// ABOUTME: Output format converters for extraction reports.
// ABOUTME: Renders rows as a one-column CSV document with RFC-4180 quoting.

use crate::report::ScrapeReport;

/// Column header for CSV output.
pub const CSV_HEADER: &str = "Extracted Data";

/// Render a report as a one-column CSV document, header included.
pub fn to_csv(report: &ScrapeReport) -> String {
    rows_to_csv(&report.rows)
}

/// Render rows as a one-column CSV document, header included.
pub fn rows_to_csv<S: AsRef<str>>(rows: &[S]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for row in rows {
        out.push_str(&escape_field(row.as_ref()));
        out.push('\n');
    }
    out
}

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

fn escape_field(field: &str) -> String {
    if needs_quotes(field) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_rows() {
        let csv = rows_to_csv(&["a@x.com", "555-123-4567"]);
        assert_eq!(csv, "Extracted Data\na@x.com\n555-123-4567\n");
    }

    #[test]
    fn test_comma_is_quoted() {
        let csv = rows_to_csv(&["Doe, Jane"]);
        assert_eq!(csv, "Extracted Data\n\"Doe, Jane\"\n");
    }

    #[test]
    fn test_quote_is_doubled() {
        let csv = rows_to_csv(&[r#"the "best" one"#]);
        assert_eq!(csv, "Extracted Data\n\"the \"\"best\"\" one\"\n");
    }

    #[test]
    fn test_newline_is_quoted() {
        let csv = rows_to_csv(&["line one\nline two"]);
        assert_eq!(csv, "Extracted Data\n\"line one\nline two\"\n");
    }

    #[test]
    fn test_empty_rows_header_only() {
        let rows: [&str; 0] = [];
        assert_eq!(rows_to_csv(&rows), "Extracted Data\n");
    }
}
