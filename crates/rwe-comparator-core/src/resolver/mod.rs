//! Name resolution for user-typed drug and condition tokens.
//!
//! Pipeline: exact lookup → brand fuzzy match → vocabulary fuzzy match

mod normalizer;
mod scorer;

pub use normalizer::*;
pub use scorer::*;
