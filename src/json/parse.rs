//! Purpose: Provide the internal runtime JSON decode entrypoints.
//! Exports: `from_str`, `ParseFailureCategory`, categorization helpers.
//! Role: Parser boundary that centralizes serde_json usage details.
//! Invariants: Category labels are stable; diagnostics build on them.
//! Invariants: Error mapping to domain errors is done by callsites so context stays explicit.

use serde::de::DeserializeOwned;
use serde_json::error::Category;

pub fn from_str<T: DeserializeOwned>(input: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(input)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseFailureCategory {
    Syntax,
    Eof,
    TrailingData,
    DepthLimit,
    Data,
    Io,
    Unknown,
}

impl ParseFailureCategory {
    pub fn label(self) -> &'static str {
        match self {
            ParseFailureCategory::Syntax => "syntax",
            ParseFailureCategory::Eof => "truncated",
            ParseFailureCategory::TrailingData => "trailing-data",
            ParseFailureCategory::DepthLimit => "depth-limit",
            ParseFailureCategory::Data => "data",
            ParseFailureCategory::Io => "io",
            ParseFailureCategory::Unknown => "unknown",
        }
    }
}

pub fn categorize_error(err: &serde_json::Error) -> ParseFailureCategory {
    match err.classify() {
        Category::Eof => ParseFailureCategory::Eof,
        Category::Syntax => categorize_message(&err.to_string()),
        Category::Data => ParseFailureCategory::Data,
        Category::Io => ParseFailureCategory::Io,
    }
}

pub fn categorize_message(message: &str) -> ParseFailureCategory {
    if message.contains("trailing characters") {
        return ParseFailureCategory::TrailingData;
    }
    if message.contains("recursion limit") {
        return ParseFailureCategory::DepthLimit;
    }
    if message.contains("expected") || message.contains("invalid") {
        return ParseFailureCategory::Syntax;
    }
    ParseFailureCategory::Unknown
}

pub fn hint_for_error(err: &serde_json::Error, context: &str) -> String {
    format!(
        "parse category: {}; context: {context}",
        categorize_error(err).label()
    )
}
