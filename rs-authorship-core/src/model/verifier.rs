use tracing::info;

use super::author::{Author, AuthorPair};
use super::evaluator::evaluate;
use super::report::AccuracyReport;
use super::verification_input::VerificationInput;
use crate::corpus::CorpusProvider;
use crate::error::VerifyResult;

/// Runs one full verification of `first` against `second`.
///
/// # Behavior
/// - Fetches both corpora from `provider`.
/// - Splits and models each author with the run's RNG (seeded if `input.seed` is set).
/// - Evaluates every questioned text and returns the report.
///
/// # Errors
/// Any error aborts the run; no partial report is returned.
pub fn verify<P: CorpusProvider + ?Sized>(
	provider: &P,
	first: &str,
	second: &str,
	input: &VerificationInput,
) -> VerifyResult<AccuracyReport> {
	input.validate()?;
	let mut rng = input.rng();

	info!(first, second, seed = ?input.seed, known_ratio = input.known_ratio(), "starting verification");

	let first_texts = provider.texts(first)?;
	let second_texts = provider.texts(second)?;

	let pair = AuthorPair::new(
		Author::new(first, &first_texts, input.known_ratio(), &mut rng)?,
		Author::new(second, &second_texts, input.known_ratio(), &mut rng)?,
	)?;

	evaluate(&pair, input.weights, &mut rng)
}
