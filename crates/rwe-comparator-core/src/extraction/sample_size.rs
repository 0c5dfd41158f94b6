//! Enrollment count extraction.

use std::sync::LazyLock;

use regex::Regex;

/// `n = 245`, `N=12`
static N_EQUALS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)n\s*=\s*([0-9]+)").unwrap());

/// `312 patients`, `48 volunteers`
static COUNT_NOUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]{2,5})\s+(?:patients|subjects|volunteers|participants)").unwrap()
});

/// Extract a trial's sample size from free text.
///
/// The first `n = <digits>` wins; `<2-5 digits> patients|subjects|...` is
/// only tried when there is none. A count too large for `u64` yields `None`
/// for that pattern.
pub fn extract_sample_size(text: &str) -> Option<u64> {
    if let Some(caps) = N_EQUALS.captures(text) {
        if let Some(n) = caps.get(1).and_then(|m| m.as_str().parse().ok()) {
            return Some(n);
        }
    }

    COUNT_NOUN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
