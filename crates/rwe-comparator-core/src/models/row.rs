//! Result rows handed to the presenter.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Whether a normalized drug is mentioned in a record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DrugPresence {
    pub drug: String,
    pub mentioned: bool,
}

/// One assembled row per search result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultRow {
    pub title: String,
    pub year: Option<String>,
    pub journal: Option<String>,
    pub pmid: Option<String>,
    pub doi: Option<String>,
    /// PubMed or DOI link
    pub link: Option<String>,
    /// One flag per normalized drug, in input order
    pub drug_presence: Vec<DrugPresence>,
    /// Empty when no comparison was extracted
    pub comparators: BTreeSet<String>,
    pub outcome_snippet: Option<String>,
    pub sample_size: Option<u64>,
}

impl ResultRow {
    /// Whether the abstract yielded a comparison.
    pub fn has_comparison(&self) -> bool {
        !self.comparators.is_empty()
    }
}
