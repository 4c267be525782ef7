use std::fmt;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// File stem of the unfiltered word pool.
pub const ALL_WORDS_STEM: &str = "all";

/// Extension shared by every word-list file.
pub const SOURCE_EXTENSION: &str = "txt";

/// Identifies one word-list file inside a dictionary directory.
///
/// - `All` maps to `all.txt`, the unfiltered pool
/// - `Length(n)` maps to `<n>.txt`, the pool of words of length `n`
///
/// Ordering puts `All` first, then lengths ascending.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum SourceId {
	All,
	Length(NonZeroUsize),
}

impl SourceId {
	/// Parses a file stem (`"all"`, `"5"`) back into a source id.
	///
	/// Returns `None` for anything else, including `"0"`.
	pub fn from_stem(stem: &str) -> Option<Self> {
		if stem == ALL_WORDS_STEM {
			return Some(SourceId::All);
		}
		stem.parse::<NonZeroUsize>().ok().map(SourceId::Length)
	}

	/// Name of the backing file, e.g. `all.txt` or `5.txt`.
	pub fn file_name(&self) -> String {
		match self {
			SourceId::All => format!("{ALL_WORDS_STEM}.{SOURCE_EXTENSION}"),
			SourceId::Length(n) => format!("{n}.{SOURCE_EXTENSION}"),
		}
	}

	/// Full path of the backing file inside `root`.
	pub fn path_in(&self, root: &Path) -> PathBuf {
		root.join(self.file_name())
	}
}

impl fmt::Display for SourceId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.file_name())
	}
}
