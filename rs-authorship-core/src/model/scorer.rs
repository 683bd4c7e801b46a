use serde::Serialize;

use super::author::{AuthorPair, Slot};
use super::author_model::{AuthorModel, MAX_ORDER};
use super::tokenizer::tokenize;
use super::verification_input::ScoringWeights;
use crate::error::{VerifyError, VerifyResult};

/// Scores of one questioned text, one per slot.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct ScorePair {
	pub first: f64,
	pub second: f64,
}

impl ScorePair {
	pub fn get(&self, slot: Slot) -> f64 {
		match slot {
			Slot::First => self.first,
			Slot::Second => self.second,
		}
	}

	fn get_mut(&mut self, slot: Slot) -> &mut f64 {
		match slot {
			Slot::First => &mut self.first,
			Slot::Second => &mut self.second,
		}
	}

	/// The slot with the strictly greatest positive score.
	///
	/// Equal scores, or no score above zero, give `Prediction::NoWinner`.
	pub fn prediction(&self) -> Prediction {
		if self.first > self.second && self.first > 0.0 {
			Prediction::Winner(Slot::First)
		} else if self.second > self.first && self.second > 0.0 {
			Prediction::Winner(Slot::Second)
		} else {
			Prediction::NoWinner
		}
	}
}

/// Outcome of classifying one text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prediction {
	Winner(Slot),
	NoWinner,
}

impl Prediction {
	pub fn slot(&self) -> Option<Slot> {
		match self {
			Prediction::Winner(slot) => Some(*slot),
			Prediction::NoWinner => None,
		}
	}
}

/// Scores questioned texts against the two models of an `AuthorPair`.
///
/// # Behavior
/// For a tokenized text and each slot:
/// - every n-gram occurrence (n = 1..=3) adds `count × ngram_base^(n-1)`
/// - the first slot's n-gram score, and only that one, is divided by
///   `total_unigrams(first) / total_unigrams(second)`
/// - every token then adds `occurrence_rate(token) × occurrence_rate weight`
///
/// The scorer holds no mutable state: the same text always gets the same scores.
#[derive(Debug)]
pub struct Scorer<'a> {
	pair: &'a AuthorPair,
	weights: ScoringWeights,
	word_count_ratio: f64,
}

impl<'a> Scorer<'a> {
	/// # Errors
	/// `DegenerateRatio` if either author has no known unigrams.
	pub fn new(pair: &'a AuthorPair, weights: ScoringWeights) -> VerifyResult<Self> {
		for (_, author) in pair.iter() {
			if author.model().total_unigrams() == 0 {
				return Err(VerifyError::DegenerateRatio { author: author.name().to_owned() });
			}
		}

		let word_count_ratio =
			pair.first().model().total_unigrams() as f64 / pair.second().model().total_unigrams() as f64;
		Ok(Self { pair, weights, word_count_ratio })
	}

	/// `total_unigrams(first) / total_unigrams(second)`.
	pub fn word_count_ratio(&self) -> f64 {
		self.word_count_ratio
	}

	fn model(&self, slot: Slot) -> &AuthorModel {
		self.pair.get(slot).model()
	}

	pub fn score(&self, text: &str) -> ScorePair {
		let tokens = tokenize(text);
		let mut scores = ScorePair::default();

		for n in 1..=MAX_ORDER {
			let weight = self.weights.ngram_base.powi(n as i32 - 1);
			for window in tokens.windows(n) {
				for slot in Slot::BOTH {
					*scores.get_mut(slot) += self.model(slot).count(window) as f64 * weight;
				}
			}
		}

		scores.first /= self.word_count_ratio;

		for token in &tokens {
			for slot in Slot::BOTH {
				*scores.get_mut(slot) += self.model(slot).occurrence_rate(token) * self.weights.occurrence_rate;
			}
		}

		scores
	}

	/// Scores `text` and picks the winning slot.
	pub fn classify(&self, text: &str) -> (ScorePair, Prediction) {
		let scores = self.score(text);
		(scores, scores.prediction())
	}
}
