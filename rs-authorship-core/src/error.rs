use thiserror::Error;

/// Errors that abort a verification run.
///
/// None of these are recovered from internally: a run either produces a full
/// `AccuracyReport` or one of these errors.
#[derive(Error, Debug)]
pub enum VerifyError {
	/// An author has no texts at all, or none left on the known side of the split.
	#[error("Insufficient data for author '{author}': {texts} text(s), {known} known")]
	InsufficientData {
		author: String,
		texts: usize,
		known: usize,
	},

	/// An author's total unigram count is zero, so the word-count ratio is undefined.
	#[error("Degenerate word-count ratio: author '{author}' has no known unigrams")]
	DegenerateRatio { author: String },

	/// The known-text pool cannot provide one paired text per questioned text.
	#[error("Cannot sample {questioned} paired known text(s) from a pool of {pool}")]
	SampleSize { pool: usize, questioned: usize },

	/// Neither author has a questioned text, so there is nothing to classify.
	#[error("No questioned texts for '{first}' and '{second}'")]
	NoQuestionedTexts { first: String, second: String },

	#[error("Invalid parameter: {0}")]
	InvalidParameter(String),

	#[error("Unknown author: {0}")]
	UnknownAuthor(String),

	#[error("IO Error: {0}")]
	Io(#[from] std::io::Error),
}

pub type VerifyResult<T> = Result<T, VerifyError>;
