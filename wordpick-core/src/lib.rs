//! Random word sampling over on-disk word lists.
//!
//! This crate provides:
//! - Word lists loaded from a directory of line-delimited text files
//! - Uniform sampling without replacement (Fisher-Yates)
//! - Length-filtered requests spread across per-length files
//! - Structured diagnostics for missing or unreadable files
//!
//! The randomness source and the dictionary directory are both supplied
//! by the caller, so results can be made reproducible in tests.

/// Word lists, sampling and the high-level `WordSampler`.
pub mod dictionary;

/// Error types returned by request validation and source loading.
pub mod error;

/// I/O utilities (file loading, directory listing).
///
/// Not exposed
pub(crate) mod io;
