//! Weighted string similarity.

use strsim::{jaro_winkler, normalized_levenshtein};

/// Compute fuzzy string similarity using combined metrics (0.0 - 1.0).
pub fn fuzzy_match(a: &str, b: &str) -> f64 {
    // Combine Jaro-Winkler (good for typos) and Levenshtein (good for overall similarity)
    let jw = jaro_winkler(a, b);
    let lev = normalized_levenshtein(a, b);

    // Weight Jaro-Winkler more heavily as it's better for prefix matching
    jw * 0.6 + lev * 0.4
}

/// Case-insensitive similarity score on a 0 - 100 scale.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    (fuzzy_match(&a, &b) * 100.0).clamp(0.0, 100.0)
}

/// Best-scoring candidate for a query.
///
/// Ties keep the earliest candidate, so results follow candidate order.
pub fn best_match<'c, I>(query: &str, candidates: I) -> Option<(&'c str, f64)>
where
    I: IntoIterator<Item = &'c str>,
{
    let mut best: Option<(&'c str, f64)> = None;
    for candidate in candidates {
        let score = similarity(query, candidate);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((candidate, score)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzzy_match() {
        assert!(fuzzy_match("adalimumab", "adalimumab") > 0.99);
        assert!(fuzzy_match("infliximab", "inflixmab") > 0.85); // Typo
        assert!(fuzzy_match("infliximab", "mesalamine") < 0.6); // Different drug
    }

    #[test]
    fn test_similarity_is_case_insensitive() {
        assert_eq!(similarity("HUMIRA", "humira"), 100.0);
        assert_eq!(similarity("  Humira ", "humira"), 100.0);
    }

    #[test]
    fn test_similarity_bounds() {
        let score = similarity("qqqqqq", "adalimumab");
        assert!((0.0..70.0).contains(&score), "score {}", score);
    }

    #[test]
    fn test_best_match_picks_highest() {
        let candidates = ["mesalamine", "infliximab", "adalimumab"];
        let (entry, score) = best_match("inflixmab", candidates).unwrap();

        assert_eq!(entry, "infliximab");
        assert!(score > 85.0);
    }

    #[test]
    fn test_best_match_ties_keep_first() {
        let (entry, _) = best_match("ab", ["ax", "ay"]).unwrap();
        assert_eq!(entry, "ax");
    }

    #[test]
    fn test_best_match_empty() {
        assert!(best_match("anything", std::iter::empty()).is_none());
    }
}
