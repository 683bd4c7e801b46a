use rand::Rng;
use rand::seq::index;
use tracing::{info, warn};

use super::author::{AuthorPair, Slot};
use super::report::{AccuracyReport, Classification, Comparison};
use super::scorer::{Prediction, Scorer};
use super::verification_input::ScoringWeights;
use crate::error::{VerifyError, VerifyResult};

/// Classifies every questioned text of both authors and builds the report.
///
/// # Behavior
/// - Questioned texts are scored in slot order, then in stored order.
/// - A classification is correct when the winner is the true author;
///   `NoWinner` is always incorrect.
/// - A sample of known texts, drawn without replacement from both authors'
///   pooled known texts, is paired index by index with the classifications.
///
/// # Errors
/// - `DegenerateRatio` if an author has no known unigrams.
/// - `NoQuestionedTexts` if neither author has a questioned text.
/// - `SampleSize` if there are fewer known texts than questioned texts.
pub fn evaluate<R: Rng + ?Sized>(
	pair: &AuthorPair,
	weights: ScoringWeights,
	rng: &mut R,
) -> VerifyResult<AccuracyReport> {
	let scorer = Scorer::new(pair, weights)?;

	let pool: Vec<(Slot, &str)> = pair
		.iter()
		.flat_map(|(slot, author)| author.known_texts().iter().map(move |text| (slot, text.as_str())))
		.collect();
	let questioned: Vec<(Slot, &str)> = pair
		.iter()
		.flat_map(|(slot, author)| author.questioned_texts().iter().map(move |text| (slot, text.as_str())))
		.collect();

	if questioned.is_empty() {
		return Err(VerifyError::NoQuestionedTexts {
			first: pair.first().name().to_owned(),
			second: pair.second().name().to_owned(),
		});
	}
	if pool.len() < questioned.len() {
		return Err(VerifyError::SampleSize { pool: pool.len(), questioned: questioned.len() });
	}
	let sample = index::sample(rng, pool.len(), questioned.len());

	let name = |slot: Option<Slot>| slot.map(|slot| pair.get(slot).name().to_owned());

	let mut classifications = Vec::with_capacity(questioned.len());
	let mut comparisons = Vec::with_capacity(questioned.len());
	for ((true_slot, text), pool_index) in questioned.iter().zip(sample.iter()) {
		let (scores, prediction) = scorer.classify(text);
		if prediction == Prediction::NoWinner {
			warn!(author = pair.get(*true_slot).name(), ?scores, "no winner for questioned text");
		}

		let predicted = prediction.slot();
		classifications.push(Classification {
			true_author: pair.get(*true_slot).name().to_owned(),
			predicted_author: name(predicted),
			text: (*text).to_owned(),
			is_correct: predicted == Some(*true_slot),
			scores,
		});

		let (known_slot, known_text) = pool[pool_index];
		comparisons.push(Comparison {
			known_author: pair.get(known_slot).name().to_owned(),
			known_text: known_text.to_owned(),
			questioned_text: (*text).to_owned(),
			predicted_author: name(predicted),
			same_author: predicted == Some(known_slot),
		});
	}

	let total_questioned = classifications.len();
	let correct = classifications.iter().filter(|c| c.is_correct).count();
	let same_author = comparisons.iter().filter(|c| c.same_author).count();
	let accuracy = correct as f64 / total_questioned as f64 * 100.0;

	info!(
		first = pair.first().name(),
		second = pair.second().name(),
		total_questioned,
		correct,
		same_author,
		accuracy,
		"evaluation finished"
	);

	Ok(AccuracyReport {
		first_author: pair.first().name().to_owned(),
		second_author: pair.second().name().to_owned(),
		classifications,
		comparisons,
		total_questioned,
		correct,
		same_author,
		accuracy,
	})
}
