//! End-to-end pipeline tests with in-memory collaborators.

use std::cell::RefCell;

use rwe_comparator_core::models::{MatchKind, ResultRow};
use rwe_comparator_core::{
    EngineConfig, Handoff, LiteratureRecord, LiteratureSource, Pipeline, PipelineOutcome,
    Presenter, SearchResults, Suggestion, Vocabulary,
};

/// Source returning fixed records and remembering its queries.
struct StaticSource {
    records: Vec<LiteratureRecord>,
    queries: RefCell<Vec<(String, String, usize)>>,
}

impl StaticSource {
    fn new(records: Vec<LiteratureRecord>) -> Self {
        Self {
            records,
            queries: RefCell::new(Vec::new()),
        }
    }

    fn query_count(&self) -> usize {
        self.queries.borrow().len()
    }

    fn last_query(&self) -> Option<(String, String, usize)> {
        self.queries.borrow().last().cloned()
    }
}

impl LiteratureSource for StaticSource {
    fn search(&self, drug: &str, condition: &str, max_results: usize) -> Vec<LiteratureRecord> {
        self.queries
            .borrow_mut()
            .push((drug.to_string(), condition.to_string(), max_results));
        self.records.iter().take(max_results).cloned().collect()
    }
}

/// Presenter that keeps whatever it is handed.
#[derive(Default)]
struct RecordingPresenter {
    rows: Vec<ResultRow>,
    raw_abstracts: Vec<Option<String>>,
    calls: usize,
}

impl Presenter for RecordingPresenter {
    fn render(&mut self, rows: Vec<ResultRow>, raw_abstracts: Vec<Option<String>>) {
        self.rows = rows;
        self.raw_abstracts = raw_abstracts;
        self.calls += 1;
    }
}

fn sample_records() -> Vec<LiteratureRecord> {
    let mut varsity = LiteratureRecord::new("Vedolizumab versus Adalimumab for Ulcerative Colitis");
    varsity.abstract_text = Some(
        "In this trial 769 patients were randomized. Adalimumab was compared with vedolizumab \
         and clinical remission at week 52 favored vedolizumab."
            .into(),
    );
    varsity.pmid = Some("31553834".into());
    varsity.journal = Some("N Engl J Med".into());
    varsity.pub_year = Some("2019".into());

    let mut cohort = LiteratureRecord::new("Real-world adalimumab persistence");
    cohort.abstract_text = Some(
        "Retrospective cohort (n = 1450). Adalimumab versus infliximab persistence was similar."
            .into(),
    );
    cohort.doi = Some("10.1000/rwe.2022.17".into());

    let untitled = LiteratureRecord::new("Editorial on biologic sequencing");

    vec![varsity, cohort, untitled]
}

fn results(outcome: PipelineOutcome) -> SearchResults {
    match outcome {
        PipelineOutcome::Results(results) => results,
        other => panic!("Expected results, got {:?}", other),
    }
}

#[test]
fn test_brand_names_are_normalized_before_search() {
    let vocab = Vocabulary::builtin().unwrap();
    let source = StaticSource::new(sample_records());
    let pipeline = Pipeline::new(&vocab, &source);

    let results = results(pipeline.run("Humira", "ulcerative colitis").unwrap());

    assert_eq!(results.drugs, vec!["adalimumab"]);
    assert_eq!(results.condition, "ulcerative colitis");
    assert_eq!(
        source.last_query(),
        Some(("adalimumab".into(), "ulcerative colitis".into(), 25))
    );
    assert_eq!(results.rows.len(), 3);
    assert_eq!(results.raw_abstracts.len(), 3);
}

#[test]
fn test_open_mode_rows() {
    let vocab = Vocabulary::builtin().unwrap();
    let source = StaticSource::new(sample_records());
    let pipeline = Pipeline::new(&vocab, &source);

    let results = results(pipeline.run("adalimumab", "ulcerative colitis").unwrap());
    let rows = &results.rows;

    assert!(rows[0].comparators.contains("vedolizumab"));
    assert_eq!(rows[0].sample_size, Some(769));
    assert_eq!(rows[0].year.as_deref(), Some("2019"));
    assert_eq!(rows[0].link.as_deref(), Some("https://pubmed.ncbi.nlm.nih.gov/31553834/"));

    assert!(rows[1].comparators.contains("infliximab"));
    assert_eq!(rows[1].sample_size, Some(1450));
    assert_eq!(rows[1].link.as_deref(), Some("https://doi.org/10.1000/rwe.2022.17"));

    assert!(!rows[2].has_comparison());
    assert_eq!(rows[2].sample_size, None);
    assert_eq!(results.raw_abstracts[2], None);
}

#[test]
fn test_two_drugs_use_head_to_head_mode() {
    let vocab = Vocabulary::builtin().unwrap();
    let source = StaticSource::new(sample_records());
    let pipeline = Pipeline::new(&vocab, &source);

    let results = results(pipeline.run("Humira; Entyvio", "ulcerative colitis").unwrap());

    assert_eq!(results.drugs, vec!["adalimumab", "vedolizumab"]);
    let first = &results.rows[0];
    assert_eq!(first.comparators.iter().collect::<Vec<_>>(), vec!["vedolizumab"]);
    assert!(first.outcome_snippet.as_deref().unwrap().contains("compared with"));
    assert!(first.drug_presence.iter().all(|p| p.mentioned));

    // Second record compares against infliximab, not vedolizumab
    let second = &results.rows[1];
    assert!(!second.has_comparison());
    assert_eq!(second.drug_presence[0].drug, "adalimumab");
    assert!(second.drug_presence[0].mentioned);
    assert!(!second.drug_presence[1].mentioned);
}

#[test]
fn test_three_drugs_fall_back_to_open_mode() {
    let vocab = Vocabulary::builtin().unwrap();
    let source = StaticSource::new(sample_records());
    let pipeline = Pipeline::new(&vocab, &source);

    let results = results(
        pipeline
            .run("adalimumab, vedolizumab, infliximab", "ulcerative colitis")
            .unwrap(),
    );

    assert_eq!(results.rows[0].drug_presence.len(), 3);
    assert!(results.rows[1].comparators.contains("infliximab"));
    assert!(results.rows[1].comparators.contains("persistence"));
}

#[test]
fn test_suggestion_halts_before_search() {
    let vocab = Vocabulary::builtin().unwrap();
    let source = StaticSource::new(sample_records());
    let pipeline = Pipeline::new(&vocab, &source);

    let outcome = pipeline.run("hmra, infliximab", "ulcerative").unwrap();

    assert_eq!(
        outcome,
        PipelineOutcome::NeedsConfirmation(vec![
            Suggestion {
                input: "hmra".into(),
                candidate: "humira".into(),
                kind: MatchKind::Brand,
            },
            Suggestion {
                input: "ulcerative".into(),
                candidate: "ulcerative colitis".into(),
                kind: MatchKind::Condition,
            },
        ])
    );
    assert_eq!(source.query_count(), 0);
}

#[test]
fn test_unresolved_names_pass_through() {
    let vocab = Vocabulary::builtin().unwrap();
    let source = StaticSource::new(vec![]);
    let pipeline = Pipeline::new(&vocab, &source);

    let results = results(pipeline.run("  NewDrugX ", "Xyzzy syndrome").unwrap());

    assert_eq!(results.drugs, vec!["NewDrugX"]);
    assert_eq!(results.condition, "Xyzzy syndrome");
    assert_eq!(
        source.last_query(),
        Some(("NewDrugX".into(), "Xyzzy syndrome".into(), 25))
    );
    assert!(results.rows.is_empty());
}

#[test]
fn test_config_limits_results() {
    let vocab = Vocabulary::builtin().unwrap();
    let source = StaticSource::new(sample_records());
    let config = EngineConfig::from_json_str(r#"{"max_results": 2}"#).unwrap();
    let pipeline = Pipeline::with_config(&vocab, &source, &config);

    let results = results(pipeline.run("adalimumab", "ulcerative colitis").unwrap());

    assert_eq!(results.rows.len(), 2);
    assert_eq!(source.last_query().map(|q| q.2), Some(2));
}

#[test]
fn test_presenter_receives_rows() {
    let vocab = Vocabulary::builtin().unwrap();
    let source = StaticSource::new(sample_records());
    let pipeline = Pipeline::new(&vocab, &source);
    let mut presenter = RecordingPresenter::default();

    let handoff = pipeline
        .run_and_present("remicade", "crohns disease", &mut presenter)
        .unwrap();

    assert_eq!(handoff, Handoff::Rendered { rows: 3 });
    assert_eq!(presenter.calls, 1);
    assert_eq!(presenter.rows.len(), 3);
    assert_eq!(presenter.raw_abstracts.len(), 3);
    assert!(presenter.raw_abstracts[0].as_deref().unwrap().contains("769 patients"));
    assert_eq!(
        source.last_query(),
        Some(("infliximab".into(), "crohn's disease".into(), 25))
    );
}

#[test]
fn test_presenter_not_called_on_suggestion() {
    let vocab = Vocabulary::builtin().unwrap();
    let source = StaticSource::new(sample_records());
    let pipeline = Pipeline::new(&vocab, &source);
    let mut presenter = RecordingPresenter::default();

    let handoff = pipeline
        .run_and_present("infmab", "ulcerative colitis", &mut presenter)
        .unwrap();

    match handoff {
        Handoff::NeedsConfirmation(suggestions) => {
            assert_eq!(suggestions.len(), 1);
            assert_eq!(suggestions[0].candidate, "infliximab");
            assert_eq!(suggestions[0].kind, MatchKind::Generic);
        }
        other => panic!("Expected confirmation request, got {:?}", other),
    }
    assert_eq!(presenter.calls, 0);
}

#[test]
fn test_rows_serialize_to_json() {
    let vocab = Vocabulary::builtin().unwrap();
    let source = StaticSource::new(sample_records());
    let pipeline = Pipeline::new(&vocab, &source);

    let results = results(pipeline.run("adalimumab", "ulcerative colitis").unwrap());
    let json = serde_json::to_value(&results.rows[0]).unwrap();

    assert_eq!(json["sample_size"], 769);
    assert_eq!(json["year"], "2019");
    assert!(json["comparators"].as_array().unwrap().len() >= 1);
}
