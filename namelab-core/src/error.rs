use std::io;

use thiserror::Error;

/// Convenience alias for results carrying the crate error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the syllable store and the word synthesizer.
///
/// Store-build and corruption errors are fatal for the operation that
/// raised them and propagate immediately; there is no silent recovery.
#[derive(Debug, Error)]
pub enum Error {
	/// The corpus contained no usable line; the store cannot be built.
	#[error("Corpus is empty, nothing to sample")]
	EmptyCorpus,

	/// A record could not be read back intact from the backing store.
	///
	/// The build writes exactly `record_count * record_width` bytes, so
	/// this signals backing-file inconsistency, not a recoverable state.
	#[error("Backing store corrupt at record {index}: {reason}")]
	Corrupt { index: usize, reason: String },

	/// No record in the corpus can ever satisfy the given length filter.
	#[error("No syllable satisfies '{filter}'")]
	UnsatisfiableFilter { filter: String },

	/// Generic rejection sampling gave up after the attempt cap.
	#[error("No matching syllable after {attempts} attempts")]
	FilterExhausted { attempts: usize },

	/// A composed output came out empty and must not be emitted.
	#[error("Empty result")]
	EmptyResult,

	/// A word request asked for a zero-length word.
	#[error("Target length must be at least 1")]
	InvalidLength,

	/// Underlying corpus or backing-store I/O failure.
	#[error(transparent)]
	Io(#[from] io::Error),
}
