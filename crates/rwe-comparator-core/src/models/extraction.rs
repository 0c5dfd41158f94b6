//! Comparator extraction models.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Comparators found in an abstract and the text hinting at the outcome.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractionResult {
    /// Lowercased, deduplicated comparator tokens
    pub comparators: BTreeSet<String>,
    /// Original-case excerpt around the last matching comparison phrase
    pub outcome_snippet: Option<String>,
}

impl ExtractionResult {
    /// Whether a given (case-insensitive) name is among the comparators.
    pub fn has_comparator(&self, name: &str) -> bool {
        self.comparators.contains(&name.to_lowercase())
    }
}
