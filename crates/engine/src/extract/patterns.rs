// ABOUTME: Fixed pattern table backing the regex-driven extraction strategies.
// ABOUTME: Compiles the email, phone, and address matchers once into an immutable PatternSet.

use once_cell::sync::Lazy;
use regex::Regex;

/// Standard email address syntax.
const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";

/// Common phone-number shapes: optional leading +, optional parenthesized
/// area code, 3-3-4..6 digit groups with dash/dot/space separators.
const PHONE_PATTERN: &str = r"\+?\(?[0-9]{3}\)?[-\s.]?[0-9]{3}[-\s.]?[0-9]{4,6}";

/// Street-address-like shape: 1-5 digit number, a token, one or more word
/// tokens, trailing period. Known-loose: the first token is a word character
/// plus any single character, so "12 St Paul Ave." matches while
/// "123 Main Street." does not.
const ADDRESS_PATTERN: &str = r"\d{1,5}\s\w.\s(?:\b\w*\b\s)+\w*\.";

/// Immutable set of compiled field matchers.
///
/// Built once and handed to the policy engine by reference, so there is no
/// hidden global state to mutate and no per-call compilation cost.
#[derive(Debug, Clone)]
pub struct PatternSet {
    pub email: Regex,
    pub phone: Regex,
    pub address: Regex,
}

impl PatternSet {
    /// The standard matcher set.
    pub fn standard() -> Self {
        Self {
            email: Regex::new(EMAIL_PATTERN).unwrap(),
            phone: Regex::new(PHONE_PATTERN).unwrap(),
            address: Regex::new(ADDRESS_PATTERN).unwrap(),
        }
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        Self::standard()
    }
}

/// Shared standard set, compiled on first use.
pub static STANDARD_PATTERNS: Lazy<PatternSet> = Lazy::new(PatternSet::standard);
