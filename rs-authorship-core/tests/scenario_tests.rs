mod common;

use common::{author, fixed_pair, texts};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rs_authorship_core::model::author::Slot;
use rs_authorship_core::model::evaluator::evaluate;
use rs_authorship_core::model::scorer::{Prediction, Scorer};
use rs_authorship_core::{InMemoryCorpus, ScoringWeights, VerificationInput, VerifyError, verify};
use rstest::rstest;

#[test]
fn cat_and_dog_end_to_end() {
	let pair = fixed_pair(
		author("A", &["the cat sat", "the cat ran"], &["the cat sat"]),
		author("B", &["the dog sat", "the dog ran"], &[]),
	);

	let scorer = Scorer::new(&pair, ScoringWeights::default()).unwrap();
	let (scores, prediction) = scorer.classify("the cat sat");
	assert!(scores.first > scores.second);
	assert_eq!(prediction, Prediction::Winner(Slot::First));

	let report = evaluate(&pair, ScoringWeights::default(), &mut StdRng::seed_from_u64(9)).unwrap();
	assert_eq!(report.total_questioned, 1);
	assert_eq!(report.classifications[0].predicted_author.as_deref(), Some("A"));
	assert!(report.classifications[0].is_correct);
	assert_eq!(report.accuracy, 100.0);
}

#[test]
fn disjoint_vocabularies_self_similarity() {
	let pair = fixed_pair(
		author("A", &["alpha", "alpha alpha"], &["alpha alpha alpha"]),
		author("B", &["beta", "beta beta"], &[]),
	);

	let scorer = Scorer::new(&pair, ScoringWeights::default()).unwrap();
	let scores = scorer.score("alpha alpha alpha");
	assert!(scores.first > scores.second);

	let report = evaluate(&pair, ScoringWeights::default(), &mut StdRng::seed_from_u64(1)).unwrap();
	assert!(report.classifications[0].is_correct);
}

#[test]
fn unseen_tokens_give_no_winner() {
	let pair = fixed_pair(author("A", &["alpha"], &["omega psi"]), author("B", &["beta"], &[]));

	let scorer = Scorer::new(&pair, ScoringWeights::default()).unwrap();
	let (scores, prediction) = scorer.classify("omega psi");
	assert_eq!(scores.first, 0.0);
	assert_eq!(scores.second, 0.0);
	assert_eq!(prediction, Prediction::NoWinner);

	let report = evaluate(&pair, ScoringWeights::default(), &mut StdRng::seed_from_u64(1)).unwrap();
	assert_eq!(report.correct, 0);
	assert_eq!(report.classifications[0].predicted_author, None);
}

#[test]
fn scoring_is_deterministic() {
	let pair = fixed_pair(
		author("A", &["one two three", "two three four"], &[]),
		author("B", &["three four five", "four five six"], &[]),
	);
	let scorer = Scorer::new(&pair, ScoringWeights::default()).unwrap();
	let first = scorer.score("two three four five");
	for _ in 0..10 {
		assert_eq!(scorer.score("two three four five"), first);
	}
}

#[rstest]
#[case("the cat sat", Some("A"))]
#[case("the dog ran", Some("B"))]
#[case("cat cat cat", Some("A"))]
#[case("dog", Some("B"))]
#[case("zebra", None)]
fn cat_and_dog_predictions(#[case] text: &str, #[case] expected: Option<&str>) {
	let pair = fixed_pair(
		author("A", &["the cat sat", "the cat ran"], &[]),
		author("B", &["the dog sat", "the dog ran"], &[]),
	);
	let scorer = Scorer::new(&pair, ScoringWeights::default()).unwrap();
	let predicted = scorer.classify(text).1.slot().map(|slot| pair.get(slot).name());
	assert_eq!(predicted, expected);
}

#[test]
fn verify_is_reproducible_with_a_seed() {
	let mut corpus = InMemoryCorpus::new();
	corpus.insert("alice", (0..30).map(|i| format!("alice writes about gardens and tea {i}")));
	corpus.insert("bob", (0..30).map(|i| format!("bob talks about engines and rust {i}")));

	let input = VerificationInput::with_seed(Some(2024));
	let a = verify(&corpus, "alice", "bob", &input).unwrap();
	let b = verify(&corpus, "alice", "bob", &input).unwrap();
	assert_eq!(a, b);

	// 30 texts -> 27 known, 3 questioned per author
	assert_eq!(a.total_questioned, 6);
	assert_eq!(a.comparisons.len(), 6);
	assert_eq!(a.accuracy, 100.0);
}

#[test]
fn verify_surfaces_insufficient_data() {
	let mut corpus = InMemoryCorpus::new();
	corpus.insert("alice", texts(&["just one"]));
	corpus.insert("bob", texts(&["a", "b", "c"]));

	let err = verify(&corpus, "alice", "bob", &VerificationInput::default()).unwrap_err();
	assert!(matches!(err, VerifyError::InsufficientData { ref author, texts: 1, known: 0 } if author == "alice"));
}

#[test]
fn verify_surfaces_empty_author() {
	let mut corpus = InMemoryCorpus::new();
	corpus.insert("alice", texts(&["a b", "c d"]));
	corpus.insert("bob", Vec::<String>::new());

	let err = verify(&corpus, "alice", "bob", &VerificationInput::default()).unwrap_err();
	assert!(matches!(err, VerifyError::InsufficientData { texts: 0, .. }));
}

#[test]
fn verify_surfaces_degenerate_ratio() {
	let mut corpus = InMemoryCorpus::new();
	corpus.insert("alice", (0..10).map(|i| format!("words {i}")));
	corpus.insert("bob", (0..10).map(|i| format!("https://t.co/{i}")));

	let input = VerificationInput::with_seed(Some(5));
	let err = verify(&corpus, "alice", "bob", &input).unwrap_err();
	assert!(matches!(err, VerifyError::DegenerateRatio { ref author } if author == "bob"));
}

#[test]
fn verify_surfaces_degenerate_first_author() {
	let mut corpus = InMemoryCorpus::new();
	corpus.insert("alice", (0..10).map(|i| format!("https://t.co/{i}")));
	corpus.insert("bob", (0..10).map(|i| format!("words {i}")));

	let err = verify(&corpus, "alice", "bob", &VerificationInput::with_seed(Some(5))).unwrap_err();
	assert!(matches!(err, VerifyError::DegenerateRatio { ref author } if author == "alice"));
	assert_eq!(err.to_string(), "Degenerate word-count ratio: author 'alice' has no known unigrams");
}

#[test]
fn verify_rejects_full_known_ratio() {
	let mut corpus = InMemoryCorpus::new();
	corpus.insert("alice", (0..10).map(|i| format!("tea {i}")));
	corpus.insert("bob", (0..10).map(|i| format!("oil {i}")));

	let mut input = VerificationInput::with_seed(Some(1));
	assert!(input.set_known_ratio(1.0).is_err());
	assert_eq!(input.known_ratio(), 0.9);
	assert!(verify(&corpus, "alice", "bob", &input).is_ok());
}

#[test]
fn verify_rejects_same_author_twice() {
	let mut corpus = InMemoryCorpus::new();
	corpus.insert("alice", texts(&["a b", "c d"]));
	let err = verify(&corpus, "alice", "alice", &VerificationInput::default()).unwrap_err();
	assert!(matches!(err, VerifyError::InvalidParameter(_)));
}

#[test]
fn report_renders_every_section() {
	let pair = fixed_pair(
		author("A", &["the cat sat", "the cat ran"], &["the cat sat"]),
		author("B", &["the dog sat", "the dog ran"], &["the dog ran"]),
	);
	let report = evaluate(&pair, ScoringWeights::default(), &mut StdRng::seed_from_u64(3)).unwrap();
	let rendered = report.to_string();

	assert!(rendered.contains("Questioned texts: 2"));
	assert!(rendered.contains("#1 questioned (predicted A): the cat sat"));
	assert!(rendered.contains("#2 questioned (predicted B): the dog ran"));
	assert!(rendered.contains(&format!("Same author: {}/2", report.same_author)));
	assert!(rendered.ends_with("Accuracy: 100.00% (2/2)"));
}
