use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::error::{VerifyError, VerifyResult};

/// Share of an author's texts used to build its model.
pub const DEFAULT_KNOWN_RATIO: f64 = 0.9;

/// Number of known texts for a collection of `len` texts: `floor(ratio × len)`.
pub fn known_count(len: usize, known_ratio: f64) -> usize {
	let count = (known_ratio * len as f64).floor() as usize;
	count.min(len)
}

/// Partitions an author's texts into `(known, questioned)`.
///
/// The texts are shuffled uniformly, then cut: the first
/// `known_count(len, known_ratio)` go to the known side, the rest are questioned.
///
/// # Errors
/// `InsufficientData` if `texts` is empty.
pub fn split<R: Rng + ?Sized>(
	author: &str,
	texts: &[String],
	known_ratio: f64,
	rng: &mut R,
) -> VerifyResult<(Vec<String>, Vec<String>)> {
	if texts.is_empty() {
		return Err(VerifyError::InsufficientData { author: author.to_owned(), texts: 0, known: 0 });
	}

	let mut shuffled = texts.to_vec();
	shuffled.shuffle(rng);

	let questioned = shuffled.split_off(known_count(texts.len(), known_ratio));
	debug!(author, known = shuffled.len(), questioned = questioned.len(), "corpus split");
	Ok((shuffled, questioned))
}
