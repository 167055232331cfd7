// ABOUTME: Parsed-page abstraction: the PageDocument capability trait and TagKind categories.
// ABOUTME: HtmlDocument is the production implementation on top of the scraper crate.

//! Parsed-page abstraction.
//!
//! Extraction strategies never touch a parser library directly; they see a
//! [`PageDocument`], which exposes exactly two capabilities: the full
//! concatenated text of the page, and element text by structural category in
//! document order. Any parser that can answer those two queries can back the
//! engine; [`HtmlDocument`] does so with `scraper`.

use scraper::{Html, Selector};

/// Structural element categories the extraction strategies query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// Heading levels 1 through 3.
    Heading,
    /// Emphasized inline text.
    Emphasis,
    /// Paragraph blocks.
    Paragraph,
}

impl TagKind {
    /// HTML tag names covered by this category.
    fn tag_names(self) -> &'static [&'static str] {
        match self {
            TagKind::Heading => &["h1", "h2", "h3"],
            TagKind::Emphasis => &["strong"],
            TagKind::Paragraph => &["p"],
        }
    }
}

/// Read-only structured view over one page, owned for the duration of a
/// single extraction call.
///
/// Implementations must preserve document order in `elements_by_tag` even
/// when multiple categories are queried at once: the heading/emphasis scan
/// wants matches interleaved exactly as they appear in the source.
pub trait PageDocument {
    /// Full concatenated text content of the page.
    fn all_text(&self) -> String;

    /// Raw text of every element matching any of the given categories, in
    /// document order. Entries are not trimmed; callers decide what counts
    /// as empty.
    fn elements_by_tag(&self, kinds: &[TagKind]) -> Vec<String>;
}

/// `PageDocument` backed by a `scraper::Html` parse tree.
pub struct HtmlDocument {
    doc: Html,
}

impl HtmlDocument {
    /// Parse an HTML string. Parsing never fails; malformed markup yields
    /// whatever structure the parser can recover.
    pub fn parse(html: &str) -> Self {
        Self {
            doc: Html::parse_document(html),
        }
    }
}

impl PageDocument for HtmlDocument {
    fn all_text(&self) -> String {
        self.doc.root_element().text().collect()
    }

    fn elements_by_tag(&self, kinds: &[TagKind]) -> Vec<String> {
        let css = kinds
            .iter()
            .flat_map(|k| k.tag_names().iter().copied())
            .collect::<Vec<_>>()
            .join(", ");

        let sel = match Selector::parse(&css) {
            Ok(s) => s,
            Err(_) => return Vec::new(),
        };

        self.doc
            .select(&sel)
            .map(|el| el.text().collect::<String>())
            .collect()
    }
}
