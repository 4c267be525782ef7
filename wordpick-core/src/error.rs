use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Rejected request shapes.
///
/// Raised when a request is built from untyped input (signed integers,
/// query strings). A typed `SampleRequest` can't hold these values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
	#[error("word count must be >= 0, got {0}")]
	NegativeCount(i64),
	#[error("word length must be > 0, got {0}")]
	InvalidLength(i64),
	#[error("word length is not an integer: {0:?}")]
	UnparsableLength(String),
}

/// Failure to load a single word-list file.
///
/// Never escapes a sampling call: the sampler turns it into a `Diagnostic`.
#[derive(Debug, Error)]
pub enum LoadError {
	#[error("dictionary file not found: {}", path.display())]
	Missing { path: PathBuf },
	#[error("error reading dictionary file {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

impl LoadError {
	/// Path of the file that failed to load.
	pub fn path(&self) -> &Path {
		match self {
			LoadError::Missing { path } => path,
			LoadError::Io { path, .. } => path,
		}
	}
}
