// ABOUTME: The extraction policy engine: keyword-driven strategy dispatch over a parsed page.
// ABOUTME: Runs matching strategies in table order, concatenates output, falls back to paragraphs.

//! Keyword-driven extraction policy.
//!
//! A request is treated as an unordered bag of recognized keywords, matched
//! by case-insensitive substring containment. Each keyword set maps to one
//! strategy; matching strategies run in table order and their outputs are
//! concatenated without deduplication. When nothing matches, or the matched
//! strategies all come back empty, every paragraph on the page is collected
//! instead. The final list never exceeds [`MAX_RESULTS`] entries.
//!
//! The engine is a pure function over its inputs: no I/O, no mutation, no
//! failure modes. A page with no extractable text simply produces an empty
//! result.

use regex::Regex;

use crate::document::{PageDocument, TagKind};
use crate::extract::patterns::PatternSet;

/// Hard cap on the number of extracted rows per request.
pub const MAX_RESULTS: usize = 100;

/// The heading/emphasis scan keeps at most this many entries.
const NAME_SCAN_LIMIT: usize = 10;

type StrategyFn = fn(&dyn PageDocument, &str, &PatternSet) -> Vec<String>;

/// Strategy dispatch table, evaluated in order.
///
/// Entries are independent, not mutually exclusive: a request can trigger any
/// subset, and each match contributes rows in table order.
const STRATEGIES: &[(&[&str], StrategyFn)] = &[
    (&["name"], scan_names),
    (&["email"], match_emails),
    (&["phone", "contact"], match_phones),
    (&["address"], match_addresses),
];

/// Extract rows from `doc` according to the free-text `request`.
///
/// Strategy selection depends only on which recognized keywords appear in
/// the request. Identical inputs always yield identical output.
pub fn extract(doc: &dyn PageDocument, request: &str, patterns: &PatternSet) -> Vec<String> {
    let request = request.to_lowercase();
    let text = doc.all_text();

    let mut rows = Vec::new();
    for (keywords, strategy) in STRATEGIES {
        if keywords.iter().any(|kw| request.contains(kw)) {
            rows.extend(strategy(doc, &text, patterns));
        }
    }

    // Generic fallback when no strategy applied or none produced anything.
    if rows.is_empty() {
        rows = collect_paragraphs(doc);
    }

    rows.truncate(MAX_RESULTS);
    rows
}

/// Headings and emphasized text are where pages put people and product
/// names; keep the first few in source order.
fn scan_names(doc: &dyn PageDocument, _text: &str, _patterns: &PatternSet) -> Vec<String> {
    trimmed_non_empty(doc.elements_by_tag(&[TagKind::Heading, TagKind::Emphasis]))
        .take(NAME_SCAN_LIMIT)
        .collect()
}

fn match_emails(_doc: &dyn PageDocument, text: &str, patterns: &PatternSet) -> Vec<String> {
    find_all(&patterns.email, text)
}

fn match_phones(_doc: &dyn PageDocument, text: &str, patterns: &PatternSet) -> Vec<String> {
    find_all(&patterns.phone, text)
}

fn match_addresses(_doc: &dyn PageDocument, text: &str, patterns: &PatternSet) -> Vec<String> {
    find_all(&patterns.address, text)
}

/// Every paragraph on the page, trimmed, empties skipped.
fn collect_paragraphs(doc: &dyn PageDocument) -> Vec<String> {
    trimmed_non_empty(doc.elements_by_tag(&[TagKind::Paragraph])).collect()
}

fn find_all(pattern: &Regex, text: &str) -> Vec<String> {
    pattern
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

fn trimmed_non_empty(raw: Vec<String>) -> impl Iterator<Item = String> {
    raw.into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::HtmlDocument;
    use crate::extract::patterns::STANDARD_PATTERNS;
    use pretty_assertions::assert_eq;

    fn run(html: &str, request: &str) -> Vec<String> {
        let doc = HtmlDocument::parse(html);
        extract(&doc, request, &STANDARD_PATTERNS)
    }

    const CONTACT_PAGE: &str = concat!(
        "<html><body>",
        "<p>Contact Jane Doe at jane@example.com or call 555-123-4567.</p>",
        "</body></html>"
    );

    #[test]
    fn test_email_and_phone_scenario() {
        let rows = run(CONTACT_PAGE, "extract email and phone");
        assert_eq!(
            rows,
            vec!["jane@example.com".to_string(), "555-123-4567".to_string()]
        );
    }

    #[test]
    fn test_empty_request_falls_back_to_paragraphs() {
        let html = concat!(
            "<html><body>",
            "<h1>Welcome</h1><h2>About Us</h2>",
            "<p>Hello world.</p>",
            "</body></html>"
        );
        assert_eq!(run(html, ""), vec!["Hello world.".to_string()]);
    }

    #[test]
    fn test_unrecognized_keywords_fall_back() {
        let html = "<html><body><p>Alpha.</p><p>Beta.</p></body></html>";
        assert_eq!(
            run(html, "extract prices and ratings"),
            vec!["Alpha.".to_string(), "Beta.".to_string()]
        );
    }

    #[test]
    fn test_name_and_email_concatenation_order() {
        let html = concat!(
            "<html><body>",
            "<h1>Jane Doe</h1><strong>John Smith</strong>",
            "<p>Write to sales@example.com</p>",
            "</body></html>"
        );
        assert_eq!(
            run(html, "name and email"),
            vec![
                "Jane Doe".to_string(),
                "John Smith".to_string(),
                "sales@example.com".to_string()
            ]
        );
    }

    #[test]
    fn test_contact_keyword_triggers_phone_strategy() {
        let rows = run(CONTACT_PAGE, "contact info");
        assert_eq!(rows, vec!["555-123-4567".to_string()]);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let rows = run(CONTACT_PAGE, "EXTRACT EMAIL");
        assert_eq!(rows, vec!["jane@example.com".to_string()]);
    }

    #[test]
    fn test_matched_strategy_with_no_hits_falls_back() {
        let html = "<html><body><p>No addresses here.</p></body></html>";
        assert_eq!(run(html, "email"), vec!["No addresses here.".to_string()]);
    }

    #[test]
    fn test_name_scan_keeps_first_ten() {
        let mut html = String::from("<html><body>");
        for i in 0..12 {
            html.push_str(&format!("<h2>Person {}</h2>", i));
        }
        html.push_str("</body></html>");

        let rows = run(&html, "name");
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0], "Person 0");
        assert_eq!(rows[9], "Person 9");
    }

    #[test]
    fn test_no_deduplication() {
        let html = "<html><body><p>a@x.com and again a@x.com</p></body></html>";
        assert_eq!(
            run(html, "email"),
            vec!["a@x.com".to_string(), "a@x.com".to_string()]
        );
    }

    #[test]
    fn test_fallback_capped_at_max_results() {
        let mut html = String::from("<html><body>");
        for i in 0..120 {
            html.push_str(&format!("<p>Paragraph {}.</p>", i));
        }
        html.push_str("</body></html>");

        let rows = run(&html, "");
        assert_eq!(rows.len(), MAX_RESULTS);
        assert_eq!(rows[0], "Paragraph 0.");
        assert_eq!(rows[99], "Paragraph 99.");
    }

    #[test]
    fn test_cap_prioritizes_earlier_strategies() {
        let mut html = String::from("<html><body><p>");
        for i in 0..98 {
            html.push_str(&format!("u{}@example.com ", i));
        }
        html.push_str("555-111-2222 555-333-4444 555-555-6666");
        html.push_str("</p></body></html>");

        let rows = run(&html, "email and phone");
        assert_eq!(rows.len(), MAX_RESULTS);
        // 98 email matches come first; phone matches fill the remaining slots.
        assert_eq!(rows[97], "u97@example.com");
        assert_eq!(rows[98], "555-111-2222");
        assert_eq!(rows[99], "555-333-4444");
    }

    #[test]
    fn test_idempotence() {
        let first = run(CONTACT_PAGE, "name and email and phone");
        let second = run(CONTACT_PAGE, "name and email and phone");
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_document_yields_empty_result() {
        assert!(run("", "email").is_empty());
        assert!(run("", "").is_empty());
    }

    #[test]
    fn test_address_strategy() {
        let html = "<html><body><p>Our office: 12 St Paul Ave. near the park</p></body></html>";
        assert_eq!(run(html, "address"), vec!["12 St Paul Ave.".to_string()]);
    }
}
