// Composition tests: verifying that the pipeline stages chain together.
//
// These tests exercise the data flow between modules:
//   Tokenize -> Normalize -> TF-IDF -> Cosine -> Tier
// against the bundled lexicon, without network access. The loader tests
// write to a temporary directory.

use std::collections::HashSet;
use std::fs;

use plagiscan::error::PlagiarismError;
use plagiscan::lexicon::bundled::bundled;
use plagiscan::loader::{load_batch_json, load_paths};
use plagiscan::models::{Document, PlagiarismTier};
use plagiscan::output::json::to_wire;
use plagiscan::pipeline::compare::{compare, compare_documents, pair_count};

// ============================================================
// Chain: Normalize -> TF-IDF -> Cosine -> Tier
// ============================================================

#[test]
fn every_unordered_pair_is_scored_once() {
    let wn = bundled().unwrap();
    let ids = ["a", "b", "c", "d"];
    let texts = [
        "The dog ran home.",
        "The cat sat on the mat.",
        "Children wrote essays.",
        "The fox jumped over the lazy dog.",
    ];

    let results = compare_documents(&wn, &ids, &texts).unwrap();
    assert_eq!(results.len(), pair_count(4));
    assert_eq!(results.len(), 6);

    let pairs: HashSet<(String, String)> = results
        .iter()
        .map(|r| (r.id_a.clone(), r.id_b.clone()))
        .collect();
    assert_eq!(pairs.len(), 6, "no pair may appear twice");
    assert!(results.iter().all(|r| r.id_a < r.id_b));
    assert!(results.iter().all(|r| (0.0..=1.0).contains(&r.score)));
}

#[test]
fn results_follow_input_enumeration_order() {
    let wn = bundled().unwrap();
    let ids = ["a", "b", "c"];
    let texts = ["one two", "three four", "five six"];

    let results = compare_documents(&wn, &ids, &texts).unwrap();
    let order: Vec<(&str, &str)> = results
        .iter()
        .map(|r| (r.id_a.as_str(), r.id_b.as_str()))
        .collect();
    assert_eq!(order, vec![("a", "b"), ("a", "c"), ("b", "c")]);
}

#[test]
fn identical_texts_are_complete_plagiarism() {
    let wn = bundled().unwrap();
    let text = "The quick brown fox jumps over the lazy dog.";
    let results = compare_documents(&wn, &["a@x.org", "b@x.org"], &[text, text]).unwrap();

    assert_eq!(results.len(), 1);
    assert!((results[0].score - 1.0).abs() < 1e-9);
    assert_eq!(results[0].tier, PlagiarismTier::Complete);
    assert_eq!(results[0].percentage(), 100.0);
}

#[test]
fn disjoint_vocabulary_is_no_plagiarism() {
    let wn = bundled().unwrap();
    let results = compare_documents(
        &wn,
        &["a", "b"],
        &["The dog ran home.", "Plagiarism papers essay."],
    )
    .unwrap();

    assert_eq!(results[0].score, 0.0);
    assert_eq!(results[0].tier, PlagiarismTier::None);
}

#[test]
fn synonym_substitution_is_caught() {
    let wn = bundled().unwrap();
    let results = compare_documents(
        &wn,
        &["original", "paraphrase"],
        &["The cars were big.", "The automobiles were large."],
    )
    .unwrap();

    assert!((results[0].score - 1.0).abs() < 1e-9);
    assert_eq!(results[0].tier, PlagiarismTier::Complete);
}

#[test]
fn hyphenated_spelling_is_caught() {
    let wn = bundled().unwrap();
    let results = compare_documents(
        &wn,
        &["hyphen", "closed"],
        &["Send the e-mail.", "Send the email."],
    )
    .unwrap();

    assert!((results[0].score - 1.0).abs() < 1e-9);
    assert_eq!(results[0].tier, PlagiarismTier::Complete);
}

#[test]
fn partial_overlap_lands_between_extremes() {
    let wn = bundled().unwrap();
    let results = compare_documents(
        &wn,
        &["a", "b"],
        &[
            "The pupils wrote an essay about the city.",
            "The students wrote a paper about the church.",
        ],
    )
    .unwrap();

    let score = results[0].score;
    assert!(score > 0.0 && score < 1.0, "score was {score}");
}

#[test]
fn empty_text_scores_zero_against_anything() {
    let wn = bundled().unwrap();
    let results =
        compare_documents(&wn, &["blank", "full"], &["", "The dog ran home."]).unwrap();
    assert_eq!(results[0].score, 0.0);
    assert_eq!(results[0].tier, PlagiarismTier::None);
}

#[test]
fn single_document_yields_no_pairs() {
    let wn = bundled().unwrap();
    let results = compare(&wn, &[Document::new("solo", "Alone in the batch.")]).unwrap();
    assert!(results.is_empty());
}

// ============================================================
// Batch validation
// ============================================================

#[test]
fn count_mismatch_is_rejected() {
    let wn = bundled().unwrap();
    let err = compare_documents(&wn, &["a", "b"], &["only one text"]).unwrap_err();
    assert_eq!(err, PlagiarismError::CountMismatch { ids: 2, texts: 1 });
    assert!(err.is_validation());
}

#[test]
fn empty_batch_is_rejected() {
    let wn = bundled().unwrap();
    let none: [&str; 0] = [];
    let err = compare_documents(&wn, &none, &none).unwrap_err();
    assert_eq!(err, PlagiarismError::EmptyBatch);
}

#[test]
fn duplicate_identifier_is_rejected() {
    let wn = bundled().unwrap();
    let err = compare_documents(&wn, &["a", "a"], &["one", "two"]).unwrap_err();
    assert_eq!(err, PlagiarismError::DuplicateIdentifier("a".to_string()));
}

// ============================================================
// Chain: Loader -> Pipeline -> JSON
// ============================================================

#[test]
fn directory_batch_to_wire_json() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("alice.txt"), "The automobile was fast.").unwrap();
    fs::write(dir.path().join("bob.txt"), "The car was fast.").unwrap();
    fs::write(dir.path().join("carol.txt"), "Geese and mice.").unwrap();

    let docs = load_paths(&[dir.path().to_path_buf()]).unwrap();
    let wn = bundled().unwrap();
    let results = compare(&wn, &docs).unwrap();
    let wire = serde_json::to_value(to_wire(&results)).unwrap();

    assert_eq!(wire.as_array().unwrap().len(), 3);
    assert_eq!(wire[0]["email"], "alice.txt");
    assert_eq!(wire[0]["with"], "bob.txt");
    assert_eq!(wire[0]["percentage"], 100.0);
    assert_eq!(wire[0]["status"], "Complete Plagiarism");
    assert_eq!(wire[1]["status"], "No Plagiarism");
}

#[test]
fn json_batch_file_runs_through_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("batch.json");
    fs::write(
        &path,
        r#"{"files": [
            {"email": "s1@uni.edu", "text": "The pupils wrote essays."},
            {"email": "s2@uni.edu", "text": "The students wrote essays."}
        ]}"#,
    )
    .unwrap();

    let docs = load_batch_json(&path).unwrap();
    let results = compare(&bundled().unwrap(), &docs).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].tier, PlagiarismTier::Complete);
}
