use rand::Rng;

use super::author_model::AuthorModel;
use super::split::split;
use super::tokenizer::strip_urls;
use crate::error::{VerifyError, VerifyResult};

/// One of the two candidate positions of a verification run.
///
/// The order matters: the word-count ratio is `First / Second`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
	First,
	Second,
}

impl Slot {
	pub const BOTH: [Slot; 2] = [Slot::First, Slot::Second];
}

/// A candidate author with its texts split and its model built.
///
/// # Invariants
/// - `known.len() + questioned.len() == texts.len()`
/// - `known` is never empty
/// - `model` is built from `known` only
#[derive(Clone, Debug)]
pub struct Author {
	name: String,
	texts: Vec<String>,
	known: Vec<String>,
	questioned: Vec<String>,
	model: AuthorModel,
}

impl Author {
	/// Ingests raw texts: strips URLs, shuffles and splits them, then builds
	/// the model from the known side.
	///
	/// # Errors
	/// `InsufficientData` if there are no texts or no known texts after the split.
	pub fn new<R: Rng + ?Sized>(
		name: impl Into<String>,
		raw_texts: &[String],
		known_ratio: f64,
		rng: &mut R,
	) -> VerifyResult<Self> {
		let name = name.into();
		let texts: Vec<String> = raw_texts.iter().map(|text| strip_urls(text)).collect();
		let (known, questioned) = split(&name, &texts, known_ratio, rng)?;
		Self::assemble(name, texts, known, questioned)
	}

	/// Builds an author from an explicit known/questioned partition.
	///
	/// URLs are stripped from both sides; no shuffling happens.
	pub fn from_split(name: impl Into<String>, known: &[String], questioned: &[String]) -> VerifyResult<Self> {
		let known: Vec<String> = known.iter().map(|text| strip_urls(text)).collect();
		let questioned: Vec<String> = questioned.iter().map(|text| strip_urls(text)).collect();
		let texts = known.iter().chain(&questioned).cloned().collect();
		Self::assemble(name.into(), texts, known, questioned)
	}

	fn assemble(name: String, texts: Vec<String>, known: Vec<String>, questioned: Vec<String>) -> VerifyResult<Self> {
		if known.is_empty() {
			return Err(VerifyError::InsufficientData { author: name, texts: texts.len(), known: 0 });
		}
		let model = AuthorModel::build(&known)?;
		Ok(Self { name, texts, known, questioned, model })
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// All texts after URL removal, in ingestion order.
	pub fn texts(&self) -> &[String] {
		&self.texts
	}

	pub fn known_texts(&self) -> &[String] {
		&self.known
	}

	pub fn questioned_texts(&self) -> &[String] {
		&self.questioned
	}

	pub fn model(&self) -> &AuthorModel {
		&self.model
	}
}

/// The two candidates of a run, in a fixed order.
#[derive(Clone, Debug)]
pub struct AuthorPair {
	first: Author,
	second: Author,
}

impl AuthorPair {
	/// # Errors
	/// `InvalidParameter` if both authors share a name.
	pub fn new(first: Author, second: Author) -> VerifyResult<Self> {
		if first.name == second.name {
			return Err(VerifyError::InvalidParameter(format!(
				"the two authors must differ, got '{}' twice",
				first.name
			)));
		}
		Ok(Self { first, second })
	}

	pub fn get(&self, slot: Slot) -> &Author {
		match slot {
			Slot::First => &self.first,
			Slot::Second => &self.second,
		}
	}

	pub fn first(&self) -> &Author {
		&self.first
	}

	pub fn second(&self) -> &Author {
		&self.second
	}

	/// Both authors with their slot, first then second.
	pub fn iter(&self) -> impl Iterator<Item = (Slot, &Author)> {
		Slot::BOTH.into_iter().map(move |slot| (slot, self.get(slot)))
	}
}
