//! Comparison-phrase scanning.
//!
//! For each phrase in [`COMPARISON_PHRASES`] found in the abstract, the tokens
//! around its first occurrence form a context window. Window tokens that are
//! not stopwords or the primary drug become comparator candidates.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::models::ExtractionResult;

/// Comparison cues, in scan order.
pub const COMPARISON_PHRASES: [&str; 7] = [
    "compared with",
    "versus",
    "vs.",
    "vs ",
    "compared to",
    "relative to",
    "in comparison to",
];

/// Tokens taken on each side of a phrase.
pub const WINDOW_TOKENS: usize = 6;

/// Characters kept before the phrase in an outcome snippet.
pub const SNIPPET_LEAD_CHARS: usize = 30;

/// Characters kept after the end of the phrase in an outcome snippet.
pub const SNIPPET_TRAIL_CHARS: usize = 50;

/// Words never treated as comparators.
pub const STOPWORDS: [&str; 18] = [
    "the", "and", "with", "to", "in", "of", "a", "was", "were", "as", "by", "for", "on", "from",
    "that", "at", "this", "is",
];

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[a-zA-Z0-9\-]+\b").unwrap());

/// Extracts comparator drugs and an outcome snippet from abstract text.
///
/// Stateless: the same inputs always give the same result.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComparatorExtractor;

impl ComparatorExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Scan an abstract for comparisons involving `drug_a`.
    ///
    /// With `drug_b` (head-to-head mode) a phrase only counts when both drugs
    /// appear in its window, and `drug_b` is the sole comparator. Without it
    /// (open mode) every remaining window token is a comparator.
    ///
    /// Comparators accumulate over all matching phrases; the snippet comes
    /// from the last matching phrase in scan order.
    pub fn extract(
        &self,
        abstract_text: &str,
        drug_a: &str,
        drug_b: Option<&str>,
    ) -> Option<ExtractionResult> {
        let drug_a = drug_a.trim().to_lowercase();
        if abstract_text.is_empty() || drug_a.is_empty() {
            return None;
        }
        let drug_b = drug_b
            .map(|d| d.trim().to_lowercase())
            .filter(|d| !d.is_empty());

        // ASCII lowering keeps byte offsets aligned with the original text.
        let lowered = abstract_text.to_ascii_lowercase();

        let mut comparators = BTreeSet::new();
        let mut outcome_snippet = None;

        for phrase in COMPARISON_PHRASES {
            let Some(start) = lowered.find(phrase) else {
                continue;
            };
            let window = context_window(&lowered, start, phrase.len());

            let hit = match &drug_b {
                Some(drug_b) => {
                    let has_a = window.iter().any(|t| *t == drug_a);
                    let has_b = window.iter().any(|t| *t == drug_b.as_str());
                    if has_a && has_b {
                        comparators.insert(drug_b.clone());
                        true
                    } else {
                        false
                    }
                }
                None => {
                    let candidates = candidate_tokens(&window, &drug_a);
                    let found = !candidates.is_empty();
                    comparators.extend(candidates.into_iter().map(String::from));
                    found
                }
            };

            if hit {
                debug!(phrase, window = ?window, "Comparison phrase matched");
                outcome_snippet = Some(outcome_snippet_at(abstract_text, start, phrase.len()));
            }
        }

        if comparators.is_empty() {
            return None;
        }

        Some(ExtractionResult {
            comparators,
            outcome_snippet,
        })
    }
}

/// Last [`WINDOW_TOKENS`] words before a phrase and first [`WINDOW_TOKENS`] after.
///
/// Offsets must come from a match in `text`, so both ends sit on char boundaries.
pub(crate) fn context_window(text: &str, phrase_start: usize, phrase_len: usize) -> Vec<&str> {
    let before = &text[..phrase_start];
    let after = &text[phrase_start + phrase_len..];

    let left: Vec<&str> = WORD.find_iter(before).map(|m| m.as_str()).collect();
    let skip = left.len().saturating_sub(WINDOW_TOKENS);

    left.into_iter()
        .skip(skip)
        .chain(WORD.find_iter(after).take(WINDOW_TOKENS).map(|m| m.as_str()))
        .collect()
}

/// Window tokens minus stopwords and the primary drug, deduplicated.
pub fn candidate_tokens<'w>(window: &[&'w str], drug_a: &str) -> BTreeSet<&'w str> {
    window
        .iter()
        .copied()
        .filter(|t| *t != drug_a && !STOPWORDS.contains(t))
        .collect()
}

/// Original-case excerpt around a phrase, clipped to the text and trimmed.
///
/// `phrase_start` is a byte offset of a match in `text`; the lead and trail
/// widths count characters.
pub(crate) fn outcome_snippet_at(text: &str, phrase_start: usize, phrase_len: usize) -> String {
    let phrase_char = text[..phrase_start].chars().count();
    let phrase_chars = text[phrase_start..phrase_start + phrase_len].chars().count();

    let first = phrase_char.saturating_sub(SNIPPET_LEAD_CHARS);
    let last = phrase_char + phrase_chars + SNIPPET_TRAIL_CHARS;

    let snippet: String = text.chars().skip(first).take(last - first).collect();
    snippet.trim().to_string()
}
