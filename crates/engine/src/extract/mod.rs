// ABOUTME: Extraction module: the keyword-driven policy engine and its pattern table.

pub mod patterns;
pub mod policy;

pub use patterns::{PatternSet, STANDARD_PATTERNS};
pub use policy::{extract, MAX_RESULTS};
