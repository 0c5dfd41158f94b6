//! Heuristic extraction from abstract text.
//!
//! - [`ComparatorExtractor`]: comparison phrases, comparator tokens, outcome snippet
//! - [`extract_sample_size`]: enrollment count

mod comparator;
mod sample_size;

pub use comparator::*;
pub use sample_size::*;
