//! Records returned by a literature source.

use serde::{Deserialize, Serialize};

/// One search hit, already parsed into plain fields by the source.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LiteratureRecord {
    pub title: String,
    pub abstract_text: Option<String>,
    pub pmid: Option<String>,
    pub journal: Option<String>,
    pub pub_year: Option<String>,
    pub doi: Option<String>,
}

impl LiteratureRecord {
    /// Create a record with only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Link to the record: PubMed when a PMID is known, DOI otherwise.
    pub fn link(&self) -> Option<String> {
        if let Some(pmid) = non_blank(self.pmid.as_deref()) {
            return Some(format!("https://pubmed.ncbi.nlm.nih.gov/{}/", pmid));
        }
        non_blank(self.doi.as_deref()).map(|doi| format!("https://doi.org/{}", doi))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
