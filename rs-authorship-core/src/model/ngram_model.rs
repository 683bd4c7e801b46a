use std::collections::HashMap;

use crate::error::{VerifyError, VerifyResult};

/// An ordered tuple of `n` consecutive tokens taken from one text.
pub type NGram = Vec<String>;

/// Frequency table of word n-grams of a fixed order.
///
/// # Responsibilities
/// - Count every contiguous `n`-token window of the token sequences it is fed
/// - Answer count lookups for arbitrary windows (unknown windows count 0)
/// - Merge with another table of the same order `n`
///
/// # Invariants
/// - `n` is always >= 1
/// - Every stored key has exactly `n` tokens and a count >= 1
/// - Windows never span two separate token sequences
#[derive(Clone, Debug, PartialEq)]
pub struct NGramTable {
	/// The order of the table (number of tokens per n-gram)
	n: usize,

	/// Occurrence count per n-gram
	counts: HashMap<NGram, usize>,
}

impl NGramTable {
	/// Creates an empty table of order `n`.
	///
	/// # Errors
	/// Returns an error if `n == 0`.
	pub fn new(n: usize) -> VerifyResult<Self> {
		if n == 0 {
			return Err(VerifyError::InvalidParameter("n-gram order must be >= 1".to_owned()));
		}
		Ok(Self { n, counts: HashMap::new() })
	}

	/// Order of the table.
	pub fn n(&self) -> usize {
		self.n
	}

	/// Adds every `n`-token window of one tokenized text.
	///
	/// Sequences shorter than `n` contribute nothing.
	pub fn add_tokens(&mut self, tokens: &[String]) {
		for window in tokens.windows(self.n) {
			match self.counts.get_mut(window) {
				Some(count) => *count += 1,
				None => {
					self.counts.insert(window.to_vec(), 1);
				}
			}
		}
	}

	/// Occurrence count of `ngram`, 0 when unseen.
	pub fn count(&self, ngram: &[String]) -> usize {
		self.counts.get(ngram).copied().unwrap_or(0)
	}

	/// Sum of all occurrence counts.
	pub fn total(&self) -> usize {
		self.counts.values().sum()
	}

	/// Number of distinct n-grams.
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Iterates over `(ngram, count)` pairs in arbitrary order.
	pub fn iter(&self) -> impl Iterator<Item = (&NGram, usize)> {
		self.counts.iter().map(|(k, v)| (k, *v))
	}

	/// Merges another table into this one, summing counts.
	///
	/// # Errors
	/// Returns an error if the orders do not match.
	pub fn merge(&mut self, other: &Self) -> VerifyResult<()> {
		if self.n != other.n {
			return Err(VerifyError::InvalidParameter(format!(
				"n-gram order mismatch: {} vs {}",
				self.n, other.n
			)));
		}

		for (ngram, count) in &other.counts {
			*self.counts.entry(ngram.clone()).or_insert(0) += *count;
		}

		Ok(())
	}
}
