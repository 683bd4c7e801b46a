use std::fmt;

use serde::Serialize;

use super::scorer::ScorePair;

/// Outcome of classifying one questioned text.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Classification {
	/// Author the text actually belongs to.
	pub true_author: String,
	/// Winning author, `None` when no author scored strictly best.
	pub predicted_author: Option<String>,
	pub text: String,
	pub is_correct: bool,
	pub scores: ScorePair,
}

/// A questioned text paired with a randomly drawn known text.
///
/// Informational only, it does not feed the accuracy.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Comparison {
	pub known_author: String,
	pub known_text: String,
	pub questioned_text: String,
	pub predicted_author: Option<String>,
	/// `known_author == predicted_author`
	pub same_author: bool,
}

/// Result of a whole verification run.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct AccuracyReport {
	pub first_author: String,
	pub second_author: String,
	/// One entry per questioned text, first author's texts first.
	pub classifications: Vec<Classification>,
	/// Same length and order as `classifications`.
	pub comparisons: Vec<Comparison>,
	pub total_questioned: usize,
	pub correct: usize,
	pub same_author: usize,
	/// `correct / total_questioned × 100`
	pub accuracy: f64,
}

impl fmt::Display for AccuracyReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "{} vs {}", self.first_author, self.second_author)?;
		writeln!(f, "Questioned texts: {}", self.total_questioned)?;

		for (index, comparison) in self.comparisons.iter().enumerate() {
			writeln!(f)?;
			writeln!(f, "#{} known ({}): {}", index + 1, comparison.known_author, comparison.known_text)?;
			writeln!(
				f,
				"#{} questioned (predicted {}): {}",
				index + 1,
				comparison.predicted_author.as_deref().unwrap_or("none"),
				comparison.questioned_text
			)?;
			writeln!(f, "#{} same author: {}", index + 1, comparison.same_author)?;
		}

		writeln!(f)?;
		writeln!(f, "Same author: {}/{}", self.same_author, self.total_questioned)?;
		write!(f, "Accuracy: {:.2}% ({}/{})", self.accuracy, self.correct, self.total_questioned)
	}
}
