//! Name normalization models.

use serde::{Deserialize, Serialize};

/// Vocabulary category a name belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Drug,
    Condition,
}

/// Which table a fuzzy match was found in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Brand key from the brand→generic table
    Brand,
    /// Known generic drug name
    Generic,
    /// Known condition name
    Condition,
}

/// Outcome of normalizing one user-typed token.
///
/// Exactly one variant is produced per call. `Suggested` blocks automatic
/// downstream use: the caller has to confirm the candidate first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NormalizationResult {
    /// Confident match, used directly.
    Accepted { canonical: String },
    /// Plausible but unconfirmed match.
    Suggested { candidate: String },
    /// No adequate match; the input is passed through unchanged.
    Unresolved { original: String },
}

impl NormalizationResult {
    /// The name carried by this result, whichever variant it is.
    pub fn value(&self) -> &str {
        match self {
            NormalizationResult::Accepted { canonical } => canonical,
            NormalizationResult::Suggested { candidate } => candidate,
            NormalizationResult::Unresolved { original } => original,
        }
    }

    /// Name usable for a search without further confirmation.
    ///
    /// `None` for suggestions.
    pub fn usable_name(&self) -> Option<&str> {
        match self {
            NormalizationResult::Accepted { canonical } => Some(canonical),
            NormalizationResult::Unresolved { original } => Some(original),
            NormalizationResult::Suggested { .. } => None,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, NormalizationResult::Accepted { .. })
    }

    pub fn is_suggested(&self) -> bool {
        matches!(self, NormalizationResult::Suggested { .. })
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, NormalizationResult::Unresolved { .. })
    }
}

/// Best fuzzy match found for a token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredMatch {
    /// Vocabulary entry or brand key that matched
    pub entry: String,
    /// Similarity score (0.0 - 100.0)
    pub score: f64,
    /// Table the entry came from
    pub kind: MatchKind,
}

/// Full normalization trace: the result plus the match that decided it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resolution {
    /// Raw token as typed
    pub input: String,
    /// Decision
    pub result: NormalizationResult,
    /// Match that produced an accept/suggest decision, if any
    pub matched: Option<ScoredMatch>,
}

/// A suggestion the user must confirm before the pipeline can continue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Suggestion {
    /// Raw token as typed
    pub input: String,
    /// Proposed replacement
    pub candidate: String,
    /// Table the candidate came from
    pub kind: MatchKind,
}
