//! Corpus providers: where each author's raw texts come from.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{VerifyError, VerifyResult};
use crate::io;

/// Extension of author corpus files.
pub const CORPUS_EXTENSION: &str = "dat";

/// Prefix marking a repost of someone else's text.
const REPOST_PREFIX: &str = "RT @";

/// Supplies the ordered raw texts of an author.
///
/// Implementations drop reposts and duplicates before returning.
pub trait CorpusProvider {
	fn texts(&self, author: &str) -> VerifyResult<Vec<String>>;
}

/// Drops reposts and repeated texts, keeping the first occurrence of each.
pub fn remove_reposts<I>(texts: I) -> Vec<String>
where
	I: IntoIterator<Item = String>,
{
	let mut seen = HashSet::new();
	texts
		.into_iter()
		.filter(|text| !text.starts_with(REPOST_PREFIX))
		.filter(|text| seen.insert(text.clone()))
		.collect()
}

/// Reads authors from a folder holding one `<author>.dat` file each,
/// one text per line.
#[derive(Clone, Debug)]
pub struct FolderCorpus {
	folder: PathBuf,
}

impl FolderCorpus {
	/// # Errors
	/// Returns an error if the path is not a directory.
	pub fn new<P: AsRef<Path>>(folder: P) -> VerifyResult<Self> {
		let folder = io::normalize_folder(folder.as_ref());
		if !folder.is_dir() {
			return Err(VerifyError::InvalidParameter(format!(
				"Expected a directory, got: {}",
				folder.display()
			)));
		}
		Ok(Self { folder })
	}

	pub fn folder(&self) -> &Path {
		&self.folder
	}

	/// Names of every author with a corpus file, sorted.
	pub fn list_authors(&self) -> VerifyResult<Vec<String>> {
		io::list_files(&self.folder, CORPUS_EXTENSION)?
			.iter()
			.map(|path| io::author_name(path).map_err(VerifyError::from))
			.collect()
	}

	fn author_path(&self, author: &str) -> PathBuf {
		self.folder.join(format!("{author}.{CORPUS_EXTENSION}"))
	}
}

impl CorpusProvider for FolderCorpus {
	fn texts(&self, author: &str) -> VerifyResult<Vec<String>> {
		let path = self.author_path(author);
		if author.is_empty() || author.contains(['/', '\\']) || !path.is_file() {
			return Err(VerifyError::UnknownAuthor(author.to_owned()));
		}

		let raw = io::read_texts(&path)?;
		let raw_count = raw.len();
		let texts = remove_reposts(raw);
		debug!(author, path = %path.display(), raw = raw_count, kept = texts.len(), "corpus loaded");
		Ok(texts)
	}
}

/// Authors held in memory.
#[derive(Clone, Debug, Default)]
pub struct InMemoryCorpus {
	authors: HashMap<String, Vec<String>>,
}

impl InMemoryCorpus {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds or replaces an author; reposts and duplicates are dropped.
	pub fn insert<I, S>(&mut self, author: impl Into<String>, texts: I)
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let texts = remove_reposts(texts.into_iter().map(Into::into));
		self.authors.insert(author.into(), texts);
	}
}

impl CorpusProvider for InMemoryCorpus {
	fn texts(&self, author: &str) -> VerifyResult<Vec<String>> {
		self.authors
			.get(author)
			.cloned()
			.ok_or_else(|| VerifyError::UnknownAuthor(author.to_owned()))
	}
}
