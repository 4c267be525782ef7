use std::collections::HashSet;
use std::num::NonZeroUsize;

use super::source::SourceId;
use crate::error::RequestError;

/// What to draw: a word count and, optionally, the word lengths to draw from.
///
/// # Invariants
/// - `lengths` holds no duplicates (first occurrence order is kept)
/// - No lengths means the unfiltered `all.txt` pool is used
///
/// Built directly from typed values with `new` / `with_lengths`, or from
/// untyped input with `from_raw` / `parse_lengths`, which reject negative
/// counts and non-positive lengths.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SampleRequest {
	count: usize,
	lengths: Vec<NonZeroUsize>,
}

impl SampleRequest {
	/// Requests `count` words from the unfiltered pool.
	pub fn new(count: usize) -> Self {
		Self { count, lengths: Vec::new() }
	}

	/// Restricts the request to the given word lengths.
	///
	/// Duplicates are dropped. An empty iterator leaves the request unfiltered.
	pub fn with_lengths<I: IntoIterator<Item = NonZeroUsize>>(mut self, lengths: I) -> Self {
		let mut seen = HashSet::new();
		self.lengths = lengths.into_iter().filter(|length| seen.insert(*length)).collect();
		self
	}

	/// Builds a request from signed values.
	///
	/// # Errors
	/// - `RequestError::NegativeCount` if `count < 0`
	/// - `RequestError::InvalidLength` if any length is `<= 0`
	pub fn from_raw(count: i64, lengths: &[i64]) -> Result<Self, RequestError> {
		let count = usize::try_from(count).map_err(|_| RequestError::NegativeCount(count))?;
		let lengths = lengths
			.iter()
			.map(|&length| Self::checked_length(length))
			.collect::<Result<Vec<_>, _>>()?;
		Ok(Self::new(count).with_lengths(lengths))
	}

	/// Parses a comma-separated list of lengths, e.g. `"5, 6,7"`.
	///
	/// Empty entries are skipped, so `""` yields no lengths.
	///
	/// # Errors
	/// - `RequestError::UnparsableLength` for a non-integer entry
	/// - `RequestError::InvalidLength` for an entry `<= 0`
	pub fn parse_lengths(input: &str) -> Result<Vec<NonZeroUsize>, RequestError> {
		input
			.split(',')
			.map(|s| s.trim())
			.filter(|s| !s.is_empty())
			.map(|s| {
				let value = s
					.parse::<i64>()
					.map_err(|_| RequestError::UnparsableLength(s.to_owned()))?;
				Self::checked_length(value)
			})
			.collect()
	}

	fn checked_length(length: i64) -> Result<NonZeroUsize, RequestError> {
		usize::try_from(length)
			.ok()
			.and_then(NonZeroUsize::new)
			.ok_or(RequestError::InvalidLength(length))
	}

	pub fn count(&self) -> usize {
		self.count
	}

	pub fn lengths(&self) -> &[NonZeroUsize] {
		&self.lengths
	}

	/// Number of words to draw from each source before the final trim.
	///
	/// `ceil(count / lengths)` when lengths are given, `count` otherwise.
	pub fn per_source_share(&self) -> usize {
		if self.lengths.is_empty() {
			self.count
		} else {
			self.count.div_ceil(self.lengths.len())
		}
	}

	/// Sources this request draws from, in request order.
	pub fn sources(&self) -> Vec<SourceId> {
		if self.lengths.is_empty() {
			vec![SourceId::All]
		} else {
			self.lengths.iter().copied().map(SourceId::Length).collect()
		}
	}
}
