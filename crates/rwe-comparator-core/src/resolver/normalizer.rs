//! User-token normalizer.
//!
//! Handles:
//! - Brand resolution (humira→adalimumab), drug tokens only
//! - Fuzzy generic/condition matching against the vocabulary
//! - Pass-through of tokens with no adequate match

use tracing::debug;

use crate::config::MatchThresholds;
use crate::models::{Category, MatchKind, NormalizationResult, Resolution, ScoredMatch};
use crate::vocabulary::Vocabulary;

use super::best_match;

/// Normalizer for user-typed drug and condition names.
pub struct NameNormalizer<'a> {
    vocabulary: &'a Vocabulary,
    thresholds: MatchThresholds,
}

/// Score band a match falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Band {
    Accept,
    Suggest,
    Reject,
}

impl<'a> NameNormalizer<'a> {
    /// Create a normalizer with default thresholds.
    pub fn new(vocabulary: &'a Vocabulary) -> Self {
        Self::with_thresholds(vocabulary, MatchThresholds::default())
    }

    /// Create a normalizer with custom thresholds.
    pub fn with_thresholds(vocabulary: &'a Vocabulary, thresholds: MatchThresholds) -> Self {
        Self {
            vocabulary,
            thresholds,
        }
    }

    pub fn thresholds(&self) -> MatchThresholds {
        self.thresholds
    }

    /// Normalize a drug token.
    pub fn normalize_drug(&self, token: &str) -> NormalizationResult {
        self.resolve_drug(token).result
    }

    /// Normalize a condition token.
    pub fn normalize_condition(&self, token: &str) -> NormalizationResult {
        self.resolve_condition(token).result
    }

    pub fn normalize(&self, category: Category, token: &str) -> NormalizationResult {
        self.resolve(category, token).result
    }

    pub fn resolve(&self, category: Category, token: &str) -> Resolution {
        match category {
            Category::Drug => self.resolve_drug(token),
            Category::Condition => self.resolve_condition(token),
        }
    }

    /// Resolve a drug token, brand table first.
    pub fn resolve_drug(&self, token: &str) -> Resolution {
        let query = token.trim().to_lowercase();
        if query.is_empty() {
            return unresolved(token);
        }

        // Exact hits never go through fuzzy scoring.
        if let Some(generic) = self.vocabulary.generic_for(&query) {
            let matched = ScoredMatch {
                entry: query.clone(),
                score: 100.0,
                kind: MatchKind::Brand,
            };
            return accepted(token, generic, matched);
        }
        if self.vocabulary.is_known_drug(&query) {
            let matched = ScoredMatch {
                entry: query.clone(),
                score: 100.0,
                kind: MatchKind::Generic,
            };
            return accepted(token, &query, matched);
        }

        if let Some(brand) = self.best_brand(&query) {
            match self.band(brand.score) {
                Band::Accept => {
                    if let Some(generic) = self.vocabulary.generic_for(&brand.entry) {
                        return accepted(token, generic, brand);
                    }
                }
                Band::Suggest => return suggested(token, brand),
                Band::Reject => {}
            }
        }

        self.resolve_name(token, &query, Category::Drug)
    }

    /// Resolve a condition token.
    pub fn resolve_condition(&self, token: &str) -> Resolution {
        let query = token.trim().to_lowercase();
        if query.is_empty() {
            return unresolved(token);
        }

        if self.vocabulary.is_known_condition(&query) {
            let matched = ScoredMatch {
                entry: query.clone(),
                score: 100.0,
                kind: MatchKind::Condition,
            };
            return accepted(token, &query, matched);
        }

        self.resolve_name(token, &query, Category::Condition)
    }

    /// Best-scoring brand key for a token.
    pub fn best_brand(&self, token: &str) -> Option<ScoredMatch> {
        best_match(token, self.vocabulary.brand_names()).map(|(entry, score)| ScoredMatch {
            entry: entry.to_string(),
            score,
            kind: MatchKind::Brand,
        })
    }

    /// Best-scoring vocabulary entry for a token.
    pub fn best_name(&self, category: Category, token: &str) -> Option<ScoredMatch> {
        let kind = match category {
            Category::Drug => MatchKind::Generic,
            Category::Condition => MatchKind::Condition,
        };
        let names = self.vocabulary.names(category).iter().map(String::as_str);
        best_match(token, names).map(|(entry, score)| ScoredMatch {
            entry: entry.to_string(),
            score,
            kind,
        })
    }

    fn resolve_name(&self, token: &str, query: &str, category: Category) -> Resolution {
        match self.best_name(category, query) {
            Some(name) => match self.band(name.score) {
                Band::Accept => {
                    let canonical = name.entry.clone();
                    accepted(token, &canonical, name)
                }
                Band::Suggest => suggested(token, name),
                Band::Reject => {
                    debug!(token, best = %name.entry, score = name.score, "No adequate match");
                    unresolved(token)
                }
            },
            None => unresolved(token),
        }
    }

    fn band(&self, score: f64) -> Band {
        if score >= self.thresholds.accept {
            Band::Accept
        } else if score >= self.thresholds.suggest {
            Band::Suggest
        } else {
            Band::Reject
        }
    }
}

fn accepted(token: &str, canonical: &str, matched: ScoredMatch) -> Resolution {
    debug!(token, canonical, score = matched.score, kind = ?matched.kind, "Accepted");
    Resolution {
        input: token.to_string(),
        result: NormalizationResult::Accepted {
            canonical: canonical.to_string(),
        },
        matched: Some(matched),
    }
}

fn suggested(token: &str, matched: ScoredMatch) -> Resolution {
    debug!(token, candidate = %matched.entry, score = matched.score, kind = ?matched.kind, "Suggested");
    Resolution {
        input: token.to_string(),
        result: NormalizationResult::Suggested {
            candidate: matched.entry.clone(),
        },
        matched: Some(matched),
    }
}

fn unresolved(token: &str) -> Resolution {
    Resolution {
        input: token.to_string(),
        result: NormalizationResult::Unresolved {
            original: token.to_string(),
        },
        matched: None,
    }
}
