use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

use log::{debug, warn};
use rand::Rng;

use super::sample_request::SampleRequest;
use super::sample_result::{Diagnostic, SampleResult};
use super::sampling::shuffle;
use super::source::{SOURCE_EXTENSION, SourceId};
use super::word_list::WordList;
use crate::error::LoadError;
use crate::io as dict_io;

/// How the per-length sources of a request are read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadMode {
	/// One file after another on the calling thread.
	#[default]
	Sequential,
	/// Files spread over worker threads (at most one per CPU).
	///
	/// Only the reads run concurrently. Sampling and the final trim
	/// still happen on the calling thread, in request order.
	Parallel,
}

/// Draws random words from a directory of word-list files.
///
/// # Responsibilities
/// - Resolve a `SampleRequest` into one or more source loads
/// - Sample each source uniformly without replacement
/// - Merge per-source samples, shuffle them and trim to the requested count
/// - Turn missing or unreadable files into diagnostics instead of errors
///
/// The sampler keeps no state between calls besides its root path and
/// load mode, so a single instance can be shared across threads.
#[derive(Clone, Debug)]
pub struct WordSampler {
	root: PathBuf,
	load_mode: LoadMode,
}

impl WordSampler {
	/// Creates a sampler reading word lists from `root`.
	///
	/// `"."` and `"./"` resolve to the current working directory.
	/// The directory is not checked here: a missing root simply yields
	/// `Missing` diagnostics at sampling time.
	pub fn new<P: AsRef<Path>>(root: P) -> Self {
		Self {
			root: dict_io::normalize_folder(root.as_ref()),
			load_mode: LoadMode::default(),
		}
	}

	/// Sets how per-length sources are loaded.
	pub fn with_load_mode(mut self, load_mode: LoadMode) -> Self {
		self.load_mode = load_mode;
		self
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	pub fn load_mode(&self) -> LoadMode {
		self.load_mode
	}

	/// Lists the word-list files available under the root.
	///
	/// Only `all.txt` and `<n>.txt` (with `n > 0`) are reported, `All` first
	/// and then by ascending length. Other files are ignored.
	///
	/// # Errors
	/// Returns an error if the root directory cannot be read.
	pub fn list_sources(&self) -> io::Result<Vec<SourceId>> {
		let mut sources: Vec<SourceId> = dict_io::list_file_stems(&self.root, SOURCE_EXTENSION)?
			.iter()
			.filter_map(|stem| SourceId::from_stem(stem))
			.collect();
		sources.sort();
		Ok(sources)
	}

	/// Draws words using the thread-local random generator.
	///
	/// See `get_words_with_rng`.
	pub fn get_words(&self, request: &SampleRequest) -> SampleResult {
		self.get_words_with_rng(request, &mut rand::rng())
	}

	/// Draws words for `request` using `rng` as the randomness source.
	///
	/// # Behavior
	/// - `count == 0`: returns an empty result without reading any file.
	/// - No lengths: samples up to `count` words from `all.txt`.
	/// - With lengths: samples `ceil(count / lengths)` words from each
	///   `<n>.txt`, concatenates them in request order, shuffles the pool
	///   and keeps the first `count`.
	///
	/// Failing sources contribute nothing and are listed in the result's
	/// diagnostics. This never fails as a whole.
	///
	/// With a seeded `rng` and unchanged files the result is reproducible,
	/// whatever the load mode.
	pub fn get_words_with_rng<R: Rng + ?Sized>(&self, request: &SampleRequest, rng: &mut R) -> SampleResult {
		let count = request.count();
		if count == 0 {
			return SampleResult::default();
		}

		let share = request.per_source_share();
		let mut diagnostics = Vec::new();
		let mut pool = Vec::new();

		for (source, loaded) in self.load_sources(&request.sources()) {
			match loaded {
				Ok(list) => {
					debug!("Loaded {} words from {}", list.len(), source);
					pool.extend(list.sample(share, rng));
				}
				Err(err) => {
					warn!("{err}");
					diagnostics.push(Diagnostic::from_load_error(source, &err));
				}
			}
		}

		// A single source is already a uniform sample of the right size.
		if !request.lengths().is_empty() {
			shuffle(&mut pool, rng);
			pool.truncate(count);
		}

		SampleResult::new(pool, diagnostics)
	}

	/// Loads every source, returning results in the same order as `sources`.
	fn load_sources(&self, sources: &[SourceId]) -> Vec<(SourceId, Result<WordList, LoadError>)> {
		match self.load_mode {
			LoadMode::Parallel if sources.len() > 1 => self.load_sources_parallel(sources),
			_ => sources
				.iter()
				.map(|&source| (source, WordList::load(&self.root, source)))
				.collect(),
		}
	}

	/// Splits `sources` into one chunk per worker, loads each chunk on its own
	/// thread and reassembles the results in request order.
	///
	/// # Notes
	/// - Uses an MPSC channel to collect results from threads.
	/// - Each result is tagged with its index so arrival order does not matter.
	fn load_sources_parallel(&self, sources: &[SourceId]) -> Vec<(SourceId, Result<WordList, LoadError>)> {
		let workers = num_cpus::get().clamp(1, sources.len());
		let chunk_size = sources.len().div_ceil(workers);

		let (tx, rx) = mpsc::channel();
		for (chunk_index, chunk) in sources.chunks(chunk_size).enumerate() {
			let tx = tx.clone();
			let root = self.root.clone();
			let chunk: Vec<SourceId> = chunk.to_vec();
			let offset = chunk_index * chunk_size;

			thread::spawn(move || {
				for (i, source) in chunk.into_iter().enumerate() {
					// The receiver only goes away once every sender is dropped.
					let _ = tx.send((offset + i, WordList::load(&root, source)));
				}
			});
		}
		drop(tx);

		let received = rx.iter().collect();
		self.reassemble(sources, received)
	}

	/// Puts worker results back in request order.
	///
	/// A source with no result (its worker thread died before sending)
	/// is reported as a read failure so it still gets a diagnostic.
	fn reassemble(
		&self,
		sources: &[SourceId],
		received: Vec<(usize, Result<WordList, LoadError>)>,
	) -> Vec<(SourceId, Result<WordList, LoadError>)> {
		let mut slots: Vec<Option<Result<WordList, LoadError>>> = sources.iter().map(|_| None).collect();
		for (index, result) in received {
			if let Some(slot) = slots.get_mut(index) {
				*slot = Some(result);
			}
		}

		sources
			.iter()
			.zip(slots)
			.map(|(&source, slot)| {
				let result = slot.unwrap_or_else(|| {
					Err(LoadError::Io {
						path: source.path_in(&self.root),
						source: io::Error::other("word list loader thread stopped before reporting"),
					})
				});
				(source, result)
			})
			.collect()
	}
}
