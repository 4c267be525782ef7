//! Top-level module for dictionary sampling.
//!
//! This module provides:
//! - Source identifiers mapping to word-list files (`SourceId`)
//! - Word lists parsed from those files (`WordList`)
//! - Fisher-Yates sampling primitives (`sampling`)
//! - Validated requests (`SampleRequest`) and results (`SampleResult`)
//! - A high-level sampling interface (`WordSampler`)

/// High-level interface for drawing random words from a dictionary directory.
///
/// Resolves requests into file loads, samples each source and merges the
/// per-source samples into the final result.
pub mod word_sampler;

/// Validated sampling request (word count and optional target lengths).
pub mod sample_request;

/// Sampling output: the drawn words and the diagnostics raised while loading.
pub mod sample_result;

/// Identifier of a single word-list file (`all.txt` or `<n>.txt`).
pub mod source;

/// Word list loaded from one backing file.
pub mod word_list;

/// Uniform shuffling and sampling without replacement.
pub mod sampling;
