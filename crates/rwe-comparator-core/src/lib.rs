//! RWE Comparator Core Library
//!
//! Drug-name normalization and comparator extraction for comparing drugs
//! across literature abstracts.
//!
//! # Architecture
//!
//! ```text
//! raw drug list + condition
//!            │
//!            ▼
//!     NameNormalizer ──── Suggested? ──► halt, ask the user
//!            │
//!     canonical names
//!            │
//!            ▼
//!   LiteratureSource.search (external)
//!            │
//!        abstracts
//!            │
//!     ┌──────┴──────────────┐
//!     ▼                     ▼
//! ComparatorExtractor  extract_sample_size
//!     └──────┬──────────────┘
//!            ▼
//!       ResultRows ──► Presenter (external)
//! ```
//!
//! # Modules
//!
//! - [`vocabulary`]: Known drugs, conditions and brand→generic mappings
//! - [`resolver`]: Fuzzy name normalizer
//! - [`extraction`]: Comparison-phrase and sample-size extraction
//! - [`pipeline`]: Orchestration and collaborator traits
//! - [`models`]: Domain types
//! - [`config`]: Thresholds and limits

pub mod config;
pub mod extraction;
pub mod models;
pub mod pipeline;
pub mod resolver;
pub mod vocabulary;

// Re-export commonly used types
pub use config::{ConfigError, EngineConfig, MatchThresholds};
pub use extraction::{extract_sample_size, ComparatorExtractor};
pub use models::{
    Category, ExtractionResult, LiteratureRecord, MatchKind, NormalizationResult, ResultRow,
    Suggestion,
};
pub use pipeline::{
    split_drug_tokens, Handoff, LiteratureSource, Pipeline, PipelineError, PipelineOutcome,
    Presenter, SearchResults,
};
pub use resolver::NameNormalizer;
pub use vocabulary::{Vocabulary, VocabularyError};
