use log::trace;

use crate::error::Result;
use crate::store::filter::LengthFilter;
use crate::store::syllable_store::SyllableStore;
use super::normalize::{capitalize, normalize_step};
use super::word_request::WordRequest;

/// Near-end window in which sampling switches to a length filter.
///
/// Once at most this many characters remain, only syllables with at
/// most one character of overshoot are accepted, bounding worst-case
/// truncation waste at the end of the word.
const TAIL_WINDOW: usize = 3;

/// High-level word synthesizer over a `SyllableStore`.
///
/// # Responsibilities
/// - Drive the sampling loop until the requested length is reached
/// - Switch to length-constrained sampling near the end of the word
/// - Apply the normalization policy and the final capitalization
///
/// Each `generate` call owns its accumulator; nothing is shared between
/// calls, so a synthesizer can serve any number of sequential requests.
#[derive(Debug)]
pub struct WordSynthesizer {
	store: SyllableStore,
}

impl WordSynthesizer {
	/// Creates a synthesizer owning `store`.
	pub fn new(store: SyllableStore) -> Self {
		Self { store }
	}

	/// Read access to the underlying store.
	pub fn store(&self) -> &SyllableStore {
		&self.store
	}

	/// Synthesizes one word according to `request`.
	///
	/// # Behavior
	/// - Appends sampled syllables until the accumulator reaches the
	///   target length.
	/// - Once at most `TAIL_WINDOW` characters remain, sampling is
	///   restricted to syllables of at most `chars_left + 1` characters.
	/// - With `request.normalize`, consonant runs are capped and the
	///   accumulator truncated to the target after every append.
	/// - The result is capitalized unconditionally: first character
	///   uppercase, all others lowercase.
	///
	/// # Errors
	/// Propagates store errors; in particular `UnsatisfiableFilter` when
	/// the corpus has no syllable short enough to finish the word.
	pub fn generate(&self, request: &WordRequest) -> Result<String> {
		let mut word = String::new();

		loop {
			let chars_left = request
				.target_length()
				.saturating_sub(word.chars().count());
			if chars_left == 0 {
				break;
			}

			let syllable = if chars_left <= TAIL_WINDOW {
				// Allow at most one character of overshoot near the end
				self.store.sample_with(&LengthFilter::at_most(chars_left + 1))?
			} else {
				self.store.sample()?
			};
			trace!("Sampled '{}' with {} chars left", syllable, chars_left);

			word.push_str(&syllable);
			if request.normalize {
				normalize_step(&mut word, request.target_length());
			}
		}

		Ok(capitalize(&word))
	}
}
