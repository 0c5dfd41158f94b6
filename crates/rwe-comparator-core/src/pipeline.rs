//! Query orchestration.
//!
//! Pipeline: split tokens → normalize → (halt on suggestions) → search →
//! per-record extraction → result rows → presenter

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::extraction::{extract_sample_size, ComparatorExtractor};
use crate::models::{
    DrugPresence, LiteratureRecord, MatchKind, NormalizationResult, Resolution, ResultRow,
    Suggestion,
};
use crate::resolver::NameNormalizer;
use crate::vocabulary::Vocabulary;

/// Pipeline errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PipelineError {
    #[error("At least one drug name is required")]
    MissingDrug,

    #[error("A condition is required")]
    MissingCondition,
}

pub type PipelineResult<T> = Result<T, PipelineError>;

/// Keyword search over a literature database.
///
/// An empty result means either "no hits" or "source unavailable"; the
/// pipeline does not tell them apart.
pub trait LiteratureSource {
    fn search(&self, drug_term: &str, condition_term: &str, max_results: usize)
        -> Vec<LiteratureRecord>;
}

/// Consumer of finished result rows.
pub trait Presenter {
    fn render(&mut self, rows: Vec<ResultRow>, raw_abstracts: Vec<Option<String>>);
}

/// Rows and raw abstracts for one search, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
    /// Normalized drug names, in input order
    pub drugs: Vec<String>,
    /// Normalized condition
    pub condition: String,
    pub rows: Vec<ResultRow>,
    pub raw_abstracts: Vec<Option<String>>,
}

/// What a pipeline run produced.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineOutcome {
    /// Normalization produced suggestions; nothing was searched.
    NeedsConfirmation(Vec<Suggestion>),
    Results(SearchResults),
}

/// What happened when results were handed to a presenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handoff {
    /// Rows were rendered.
    Rendered { rows: usize },
    /// Nothing was searched; the user must confirm these first.
    NeedsConfirmation(Vec<Suggestion>),
}

/// Split a raw drug list on commas and semicolons, dropping blanks.
pub fn split_drug_tokens(raw: &str) -> Vec<String> {
    raw.split(|c: char| c == ',' || c == ';')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Coordinates normalization, search and extraction for one user query.
pub struct Pipeline<'a> {
    normalizer: NameNormalizer<'a>,
    extractor: ComparatorExtractor,
    source: &'a dyn LiteratureSource,
    max_results: usize,
}

impl<'a> Pipeline<'a> {
    /// Create a pipeline with default configuration.
    pub fn new(vocabulary: &'a Vocabulary, source: &'a dyn LiteratureSource) -> Self {
        Self::with_config(vocabulary, source, &EngineConfig::default())
    }

    pub fn with_config(
        vocabulary: &'a Vocabulary,
        source: &'a dyn LiteratureSource,
        config: &EngineConfig,
    ) -> Self {
        Self {
            normalizer: NameNormalizer::with_thresholds(vocabulary, config.thresholds),
            extractor: ComparatorExtractor::new(),
            source,
            max_results: config.max_results,
        }
    }

    /// Run a query end to end.
    pub fn run(&self, raw_drugs: &str, raw_condition: &str) -> PipelineResult<PipelineOutcome> {
        let tokens = split_drug_tokens(raw_drugs);
        if tokens.is_empty() {
            return Err(PipelineError::MissingDrug);
        }
        if raw_condition.trim().is_empty() {
            return Err(PipelineError::MissingCondition);
        }

        // Step 1: Normalize every input
        let drug_resolutions: Vec<Resolution> = tokens
            .iter()
            .map(|t| self.normalizer.resolve_drug(t))
            .collect();
        let condition_resolution = self.normalizer.resolve_condition(raw_condition.trim());

        let suggestions: Vec<Suggestion> = drug_resolutions
            .iter()
            .chain(std::iter::once(&condition_resolution))
            .filter_map(to_suggestion)
            .collect();
        if !suggestions.is_empty() {
            warn!(count = suggestions.len(), "Halting for confirmation of suggested names");
            return Ok(PipelineOutcome::NeedsConfirmation(suggestions));
        }

        let drugs: Vec<String> = drug_resolutions
            .iter()
            .filter_map(|r| r.result.usable_name())
            .map(String::from)
            .collect();
        let condition = condition_resolution
            .result
            .usable_name()
            .unwrap_or(condition_resolution.input.as_str())
            .to_string();

        info!(drugs = ?drugs, condition = %condition, "Normalized query");

        // Step 2: Search on the primary drug
        let primary = drugs.first().ok_or(PipelineError::MissingDrug)?;
        let records = self.source.search(primary, &condition, self.max_results);
        info!(records = records.len(), "Literature search returned");

        // Step 3: Extract per record
        let (rows, raw_abstracts): (Vec<ResultRow>, Vec<Option<String>>) = records
            .into_iter()
            .map(|record| {
                let row = self.build_row(&record, &drugs);
                (row, record.abstract_text)
            })
            .unzip();

        Ok(PipelineOutcome::Results(SearchResults {
            drugs,
            condition,
            rows,
            raw_abstracts,
        }))
    }

    /// Run a query and hand the rows to a presenter.
    pub fn run_and_present(
        &self,
        raw_drugs: &str,
        raw_condition: &str,
        presenter: &mut dyn Presenter,
    ) -> PipelineResult<Handoff> {
        match self.run(raw_drugs, raw_condition)? {
            PipelineOutcome::NeedsConfirmation(suggestions) => {
                Ok(Handoff::NeedsConfirmation(suggestions))
            }
            PipelineOutcome::Results(results) => {
                let count = results.rows.len();
                presenter.render(results.rows, results.raw_abstracts);
                Ok(Handoff::Rendered { rows: count })
            }
        }
    }

    /// Assemble the row for one record.
    ///
    /// The first drug is the primary drug; the second is the head-to-head
    /// comparator when exactly two drugs were given.
    pub fn build_row(&self, record: &LiteratureRecord, drugs: &[String]) -> ResultRow {
        let text = record.abstract_text.as_deref().unwrap_or_default();
        let drug_a = drugs.first().map(String::as_str).unwrap_or_default();
        let drug_b = match drugs {
            [_, second] => Some(second.as_str()),
            _ => None,
        };

        let extraction = self.extractor.extract(text, drug_a, drug_b);
        let sample_size = extract_sample_size(text);

        let haystack = format!("{} {}", record.title, text).to_lowercase();
        let drug_presence = drugs
            .iter()
            .map(|drug| DrugPresence {
                drug: drug.clone(),
                mentioned: haystack.contains(&drug.to_lowercase()),
            })
            .collect();

        debug!(
            title = %record.title,
            comparison = extraction.is_some(),
            sample_size = ?sample_size,
            "Built result row"
        );

        let (comparators, outcome_snippet) = match extraction {
            Some(e) => (e.comparators, e.outcome_snippet),
            None => Default::default(),
        };

        ResultRow {
            title: record.title.clone(),
            year: record.pub_year.clone(),
            journal: record.journal.clone(),
            pmid: record.pmid.clone(),
            doi: record.doi.clone(),
            link: record.link(),
            drug_presence,
            comparators,
            outcome_snippet,
            sample_size,
        }
    }
}

fn to_suggestion(resolution: &Resolution) -> Option<Suggestion> {
    match &resolution.result {
        NormalizationResult::Suggested { candidate } => Some(Suggestion {
            input: resolution.input.clone(),
            candidate: candidate.clone(),
            kind: resolution
                .matched
                .as_ref()
                .map(|m| m.kind)
                .unwrap_or(MatchKind::Generic),
        }),
        _ => None,
    }
}
