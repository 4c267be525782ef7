use std::path::{Path, PathBuf};

use serde::Serialize;

use super::source::SourceId;
use crate::error::LoadError;

/// Why a source contributed no words.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
	/// The file does not exist; no read was attempted.
	Missing,
	/// The file exists but could not be read or decoded.
	ReadFailed { message: String },
}

/// A source that failed to load during a sampling call.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
	source: SourceId,
	path: PathBuf,
	#[serde(flatten)]
	kind: DiagnosticKind,
}

impl Diagnostic {
	pub(crate) fn from_load_error(source: SourceId, err: &LoadError) -> Self {
		let kind = match err {
			LoadError::Missing { .. } => DiagnosticKind::Missing,
			LoadError::Io { source: io_err, .. } => DiagnosticKind::ReadFailed { message: io_err.to_string() },
		};
		Self { source, path: err.path().to_path_buf(), kind }
	}

	pub fn source(&self) -> SourceId {
		self.source
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn kind(&self) -> &DiagnosticKind {
		&self.kind
	}
}

/// Words drawn for one request.
///
/// Holds at most the requested number of words. Fewer are returned when
/// sources run short; failing sources show up in `diagnostics`.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct SampleResult {
	words: Vec<String>,
	diagnostics: Vec<Diagnostic>,
}

impl SampleResult {
	pub(crate) fn new(words: Vec<String>, diagnostics: Vec<Diagnostic>) -> Self {
		Self { words, diagnostics }
	}

	pub fn words(&self) -> &[String] {
		&self.words
	}

	pub fn into_words(self) -> Vec<String> {
		self.words
	}

	pub fn diagnostics(&self) -> &[Diagnostic] {
		&self.diagnostics
	}

	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// `true` if at least one source failed to load.
	pub fn is_degraded(&self) -> bool {
		!self.diagnostics.is_empty()
	}
}
