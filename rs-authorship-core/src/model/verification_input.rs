use rand::SeedableRng;
use rand::rngs::StdRng;

use super::split::DEFAULT_KNOWN_RATIO;
use crate::error::{VerifyError, VerifyResult};

/// Weights of the scoring function.
///
/// An n-gram match of order `n` is worth `ngram_base^(n-1)` per occurrence;
/// each questioned token adds `occurrence_rate × rate(token)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoringWeights {
	pub ngram_base: f64,
	pub occurrence_rate: f64,
}

impl Default for ScoringWeights {
	fn default() -> Self {
		Self { ngram_base: 50.0, occurrence_rate: 100_000.0 }
	}
}

/// Parameters of one verification run.
///
/// # Responsibilities
/// - Carry the optional RNG seed (a seeded run is fully reproducible)
/// - Track the known/questioned split ratio, kept within `(0, 1)`
/// - Carry the scoring weights
#[derive(Clone, Debug, PartialEq)]
pub struct VerificationInput {
	/// Seed for shuffling and sampling; `None` draws one from the thread RNG.
	pub seed: Option<u64>,

	/// Share of each author's texts used as known texts.
	known_ratio: f64,

	pub weights: ScoringWeights,
}

impl Default for VerificationInput {
	fn default() -> Self {
		Self { seed: None, known_ratio: DEFAULT_KNOWN_RATIO, weights: ScoringWeights::default() }
	}
}

impl VerificationInput {
	/// Default parameters with the given seed.
	pub fn with_seed(seed: Option<u64>) -> Self {
		Self { seed, ..Self::default() }
	}

	/// Returns the current known ratio.
	pub fn known_ratio(&self) -> f64 {
		self.known_ratio
	}

	/// Sets the known ratio.
	///
	/// # Errors
	/// Returns an error if the value is outside `(0, 1)`: a ratio of 1 would
	/// leave no questioned texts to evaluate.
	pub fn set_known_ratio(&mut self, known_ratio: f64) -> VerifyResult<()> {
		Self::check_known_ratio(known_ratio)?;
		self.known_ratio = known_ratio;
		Ok(())
	}

	/// Checks every field.
	pub fn validate(&self) -> VerifyResult<()> {
		Self::check_known_ratio(self.known_ratio)?;
		let ScoringWeights { ngram_base, occurrence_rate } = self.weights;
		if !ngram_base.is_finite() || ngram_base < 0.0 || !occurrence_rate.is_finite() || occurrence_rate < 0.0 {
			return Err(VerifyError::InvalidParameter(format!(
				"weights must be finite and non-negative, got ngram_base={ngram_base}, occurrence_rate={occurrence_rate}"
			)));
		}
		Ok(())
	}

	/// RNG for this run.
	pub fn rng(&self) -> StdRng {
		match self.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_rng(&mut rand::rng()),
		}
	}

	fn check_known_ratio(known_ratio: f64) -> VerifyResult<()> {
		if known_ratio > 0.0 && known_ratio < 1.0 {
			Ok(())
		} else {
			Err(VerifyError::InvalidParameter(format!(
				"known ratio must be in (0, 1), got {known_ratio}"
			)))
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::Rng;

	#[test]
	fn defaults() {
		let input = VerificationInput::default();
		assert_eq!(input.known_ratio(), 0.9);
		assert_eq!(input.weights.ngram_base, 50.0);
		assert_eq!(input.weights.occurrence_rate, 100_000.0);
		assert!(input.validate().is_ok());
	}

	#[test]
	fn known_ratio_bounds() {
		let mut input = VerificationInput::default();
		assert!(input.set_known_ratio(0.0).is_err());
		assert!(input.set_known_ratio(1.5).is_err());
		assert!(input.set_known_ratio(f64::NAN).is_err());
		assert!(input.set_known_ratio(1.0).is_err());
		assert!(input.set_known_ratio(0.99).is_ok());
		assert_eq!(input.known_ratio(), 0.99);
	}

	#[test]
	fn negative_weights_are_rejected() {
		let mut input = VerificationInput::default();
		input.weights.ngram_base = -1.0;
		assert!(input.validate().is_err());
	}

	#[test]
	fn seeded_rng_is_reproducible() {
		let input = VerificationInput::with_seed(Some(42));
		let a: u64 = input.rng().random();
		let b: u64 = input.rng().random();
		assert_eq!(a, b);
	}
}
