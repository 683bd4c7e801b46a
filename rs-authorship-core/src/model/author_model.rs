use std::collections::HashMap;
use std::sync::mpsc;
use std::thread;

use tracing::debug;

use super::ngram_model::NGramTable;
use super::tokenizer::tokenize;
use crate::error::VerifyResult;

/// Highest n-gram order kept per author (unigrams, bigrams, trigrams).
pub const MAX_ORDER: usize = 3;

/// Chunks per CPU when building a model in parallel.
const CHUNK_FACTOR: usize = 8;

/// Statistical fingerprint of one author, built from its known texts only.
///
/// This struct holds:
/// - `ngrams`: one `NGramTable` per order, index `n - 1` holds order `n`.
/// - `occurrence_rate`: relative frequency of every unigram token.
///
/// # Invariants
/// - `ngrams.len() == MAX_ORDER`
/// - `occurrence_rate` sums to 1.0, or is empty when there are no unigrams
/// - Read-only once `build` returns
#[derive(Clone, Debug)]
pub struct AuthorModel {
	ngrams: Vec<NGramTable>,
	occurrence_rate: HashMap<String, f64>,
}

impl AuthorModel {
	/// Returns an empty model with one table per order.
	fn empty() -> VerifyResult<Self> {
		let ngrams = (1..=MAX_ORDER).map(NGramTable::new).collect::<VerifyResult<Vec<_>>>()?;
		Ok(Self { ngrams, occurrence_rate: HashMap::new() })
	}

	/// Counts the n-grams of a slice of texts, sequentially.
	///
	/// Each text is tokenized once and the same tokens feed every order.
	/// Occurrence rates are not computed here.
	fn count_texts(texts: &[String]) -> VerifyResult<Self> {
		let mut model = Self::empty()?;
		for text in texts {
			let tokens = tokenize(text);
			for table in &mut model.ngrams {
				table.add_tokens(&tokens);
			}
		}
		Ok(model)
	}

	/// Builds a model from an author's known texts.
	///
	/// # Behavior
	/// - Splits the texts into chunks (based on CPU cores * factor).
	/// - Counts each chunk on its own scoped thread.
	/// - Merges all partial tables (counts are summed, so the result does not
	///   depend on the chunking).
	/// - Derives the unigram occurrence rates from the merged counts.
	pub fn build(known_texts: &[String]) -> VerifyResult<Self> {
		let chunks = num_cpus::get().max(1) * CHUNK_FACTOR;
		let chunk_size = known_texts.len().div_ceil(chunks).max(1);

		let (tx, rx) = mpsc::channel();
		thread::scope(|scope| {
			for chunk in known_texts.chunks(chunk_size) {
				let tx = tx.clone();
				scope.spawn(move || {
					let _ = tx.send(Self::count_texts(chunk));
				});
			}
		});
		drop(tx);

		let mut model = Self::empty()?;
		for partial in rx.iter() {
			model.merge(&partial?)?;
		}
		model.compute_occurrence_rate();

		debug!(
			texts = known_texts.len(),
			unigrams = model.total_unigrams(),
			distinct = model.ngrams[0].len(),
			"author model built"
		);
		Ok(model)
	}

	/// Merges the counts of another model into this one, order by order.
	fn merge(&mut self, other: &Self) -> VerifyResult<()> {
		for (table, other_table) in self.ngrams.iter_mut().zip(&other.ngrams) {
			table.merge(other_table)?;
		}
		Ok(())
	}

	/// `rate[token] = count(token) / total unigram count`.
	///
	/// Left empty when there are no unigrams.
	fn compute_occurrence_rate(&mut self) {
		self.occurrence_rate.clear();

		let total = self.total_unigrams();
		if total == 0 {
			return;
		}

		for (ngram, count) in self.ngrams[0].iter() {
			if let Some(token) = ngram.first() {
				self.occurrence_rate.insert(token.clone(), count as f64 / total as f64);
			}
		}
	}

	/// Table of order `n`, `None` outside `1..=MAX_ORDER`.
	pub fn table(&self, n: usize) -> Option<&NGramTable> {
		n.checked_sub(1).and_then(|index| self.ngrams.get(index))
	}

	/// Occurrence count of an n-gram; its order is its length.
	pub fn count(&self, ngram: &[String]) -> usize {
		self.table(ngram.len()).map_or(0, |table| table.count(ngram))
	}

	/// Sum of all unigram counts.
	pub fn total_unigrams(&self) -> usize {
		self.ngrams[0].total()
	}

	/// Relative frequency of `token`, 0.0 when unseen.
	pub fn occurrence_rate(&self, token: &str) -> f64 {
		self.occurrence_rate.get(token).copied().unwrap_or(0.0)
	}

	pub fn occurrence_rates(&self) -> &HashMap<String, f64> {
		&self.occurrence_rate
	}
}
