use std::path::Path;

use rand::Rng;

use super::sampling::sample_without_replacement;
use super::source::SourceId;
use crate::error::LoadError;
use crate::io;

/// Words read from a single backing file.
///
/// Built fresh on every request and never cached.
///
/// # Invariants
/// - Every word is non-empty and has no surrounding whitespace
/// - Words keep the file's line order (duplicates included)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordList {
	source: SourceId,
	words: Vec<String>,
}

impl WordList {
	/// Builds a word list from raw lines.
	///
	/// Each line is trimmed and blank lines are dropped.
	pub fn from_lines<I, S>(source: SourceId, lines: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let words = lines
			.into_iter()
			.map(|line| line.as_ref().trim().to_owned())
			.filter(|word| !word.is_empty())
			.collect();
		Self { source, words }
	}

	/// Loads the word list backing `source` from the dictionary `root`.
	///
	/// # Errors
	/// - `LoadError::Missing` if the file does not exist (nothing is read)
	/// - `LoadError::Io` if the existence check or the read fails,
	///   including content that is not valid UTF-8
	pub fn load(root: &Path, source: SourceId) -> Result<Self, LoadError> {
		let path = source.path_in(root);

		match path.try_exists() {
			Ok(true) => (),
			Ok(false) => return Err(LoadError::Missing { path }),
			Err(err) => return Err(LoadError::Io { path, source: err }),
		}

		let lines = match io::read_file(&path) {
			Ok(lines) => lines,
			Err(err) => return Err(LoadError::Io { path, source: err }),
		};
		Ok(Self::from_lines(source, lines))
	}

	pub fn source(&self) -> SourceId {
		self.source
	}

	pub fn words(&self) -> &[String] {
		&self.words
	}

	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// Draws up to `k` words from this list without replacement.
	pub fn sample<R: Rng + ?Sized>(&self, k: usize, rng: &mut R) -> Vec<String> {
		sample_without_replacement(&self.words, k, rng)
	}
}
