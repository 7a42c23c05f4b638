use std::io::BufRead;
use std::path::Path;

use log::{debug, warn};
use rand::Rng;

use crate::error::{Error, Result};
use crate::io::{read_corpus_file, read_corpus_lines};
use super::backing::{BackingStore, PAD};
use super::filter::LengthFilter;
use super::length_index::LengthIndex;

/// Default attempt cap for generic predicate sampling (`sample_where`).
pub const DEFAULT_SAMPLE_ATTEMPTS: usize = 10_000;

/// Random-access syllable corpus with fixed-width records.
///
/// # Responsibilities
/// - Ingest a line corpus once into an exclusively owned backing file
/// - Serve indexed reads in O(1) via offset arithmetic
/// - Serve uniform, length-constrained and predicate-driven samples
///
/// # Invariants
/// - `record_width` is the byte length of the longest corpus line
/// - The backing file holds exactly `record_count * record_width` bytes
/// - `record_width` and `record_count` never change after the build;
///   rebuilding means constructing a new store, and dropping the old
///   value releases its backing file
///
/// The backing layout (record width, padding byte, absence of
/// delimiters) is private and may change between builds; it is not a
/// durable format.
#[derive(Debug)]
pub struct SyllableStore {
	backing: BackingStore,
	lengths: LengthIndex,
}

impl SyllableStore {
	/// Builds a store from a corpus file, one syllable per line.
	///
	/// The file is read exactly once and its handle dropped before the
	/// store becomes usable; all subsequent reads target the backing
	/// file only.
	///
	/// # Errors
	/// - `Error::EmptyCorpus` if the file has no usable line.
	/// - `Error::Io` on read failures.
	pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
		Self::build(read_corpus_file(path)?)
	}

	/// Builds a store from any line-oriented reader.
	///
	/// Same semantics as `open`; the reader is consumed.
	pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
		Self::build(read_corpus_lines(reader)?)
	}

	/// One-time build: computes the record width, writes the padded
	/// records in corpus order and derives the length histogram.
	fn build(lines: Vec<String>) -> Result<Self> {
		if lines.is_empty() {
			return Err(Error::EmptyCorpus);
		}

		// Impossible to panic, `lines` is non-empty
		let width = lines.iter().map(|line| line.len()).max().unwrap();

		let mut lengths = LengthIndex::default();
		for (index, line) in lines.iter().enumerate() {
			lengths.insert(line.chars().count(), index);
		}

		let backing = BackingStore::create(&lines, width)?;
		debug!(
			"Syllable store built: {} records, record width {}",
			backing.count(),
			backing.width()
		);

		Ok(Self { backing, lengths })
	}

	/// Record width in bytes, fixed for the store's lifetime.
	pub fn record_width(&self) -> usize {
		self.backing.width()
	}

	/// Number of ingested records.
	pub fn record_count(&self) -> usize {
		self.backing.count()
	}

	/// Reads record `index` as exactly `record_width` raw bytes,
	/// trailing padding included.
	///
	/// # Errors
	/// `Error::Corrupt` if the index is out of range or the positioned
	/// read cannot return a full record. The build guarantees the
	/// backing size is an exact multiple of the record width, so a short
	/// read means the backing file was damaged from outside; it is not
	/// retried.
	pub fn get(&self, index: usize) -> Result<Vec<u8>> {
		if index >= self.backing.count() {
			return Err(Error::Corrupt {
				index,
				reason: format!("index out of range (0..{})", self.backing.count()),
			});
		}
		self.backing.read_record(index).map_err(|e| Error::Corrupt {
			index,
			reason: e.to_string(),
		})
	}

	/// Draws a uniformly distributed record index in `[0, record_count)`.
	///
	/// Uses the environment-seeded thread RNG; every index is equally
	/// likely.
	pub fn sample_index(&self) -> usize {
		rand::rng().random_range(0..self.backing.count())
	}

	/// Fetches a uniformly random syllable, trailing padding stripped.
	pub fn sample(&self) -> Result<String> {
		self.fetch(self.sample_index())
	}

	/// Fetches a uniformly random syllable satisfying `filter`.
	///
	/// Draws straight from the length histogram, so the call never
	/// spins: a constraint no record can meet fails immediately.
	///
	/// # Errors
	/// `Error::UnsatisfiableFilter` if no record satisfies `filter`.
	pub fn sample_with(&self, filter: &LengthFilter) -> Result<String> {
		match self.lengths.sample(filter) {
			Some(index) => self.fetch(index),
			None => Err(Error::UnsatisfiableFilter {
				filter: filter.to_string(),
			}),
		}
	}

	/// Rejection-samples until `predicate` accepts a syllable.
	///
	/// # Parameters
	/// - `predicate`: arbitrary acceptance test on the stripped syllable.
	/// - `max_attempts`: explicit cap on draws; `DEFAULT_SAMPLE_ATTEMPTS`
	///   is a reasonable default.
	///
	/// # Errors
	/// `Error::FilterExhausted` once the cap is reached without an
	/// accepted draw. Length-shaped constraints should go through
	/// `sample_with`, which cannot spin.
	pub fn sample_where<F>(&self, predicate: F, max_attempts: usize) -> Result<String>
	where
		F: Fn(&str) -> bool,
	{
		for _ in 0..max_attempts {
			let candidate = self.sample()?;
			if predicate(&candidate) {
				return Ok(candidate);
			}
		}
		warn!("Rejection sampling exhausted after {} attempts", max_attempts);
		Err(Error::FilterExhausted {
			attempts: max_attempts,
		})
	}

	/// Reads record `index` and strips its trailing padding.
	fn fetch(&self, index: usize) -> Result<String> {
		let record = self.get(index)?;
		let text = String::from_utf8(record).map_err(|_| Error::Corrupt {
			index,
			reason: "record is not valid UTF-8".to_owned(),
		})?;
		Ok(text.trim_end_matches(char::from(PAD)).to_owned())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Cursor;

	const CORPUS: &str = "ka\nlo\nmi\ntren\n";

	fn store() -> SyllableStore {
		SyllableStore::from_reader(Cursor::new(CORPUS)).unwrap()
	}

	#[test]
	fn width_is_longest_line_and_count_is_line_count() {
		let store = store();
		assert_eq!(store.record_width(), 4);
		assert_eq!(store.record_count(), 4);
	}

	#[test]
	fn records_round_trip_after_stripping() {
		let store = store();
		let expected = ["ka", "lo", "mi", "tren"];
		for (index, syllable) in expected.iter().enumerate() {
			assert_eq!(store.fetch(index).unwrap(), *syllable);
		}
	}

	#[test]
	fn get_returns_exactly_record_width_bytes() {
		let store = store();
		for index in 0..store.record_count() {
			assert_eq!(store.get(index).unwrap().len(), store.record_width());
		}
	}

	#[test]
	fn last_record_reads_cleanly() {
		let store = store();
		assert_eq!(store.get(store.record_count() - 1).unwrap(), b"tren");
	}

	#[test]
	fn out_of_range_index_is_corrupt() {
		let store = store();
		assert!(matches!(store.get(4), Err(Error::Corrupt { index: 4, .. })));
	}

	#[test]
	fn empty_corpus_fails_the_build() {
		let result = SyllableStore::from_reader(Cursor::new(""));
		assert!(matches!(result, Err(Error::EmptyCorpus)));
	}

	#[test]
	fn blank_only_corpus_fails_the_build() {
		let result = SyllableStore::from_reader(Cursor::new("\n  \n\n"));
		assert!(matches!(result, Err(Error::EmptyCorpus)));
	}

	#[test]
	fn blank_lines_are_not_ingested() {
		let store = SyllableStore::from_reader(Cursor::new("ka\n\nlo\n")).unwrap();
		assert_eq!(store.record_count(), 2);
	}

	#[test]
	fn sample_index_is_roughly_uniform() {
		let store = store();
		let mut counts = [0usize; 4];
		for _ in 0..4000 {
			counts[store.sample_index()] += 1;
		}
		// Expected 1000 per index; allow a wide statistical margin
		for (index, count) in counts.iter().enumerate() {
			assert!(
				(700..=1300).contains(count),
				"index {} drawn {} times out of 4000",
				index,
				count
			);
		}
	}

	#[test]
	fn sample_returns_corpus_members() {
		let store = store();
		for _ in 0..100 {
			let syllable = store.sample().unwrap();
			assert!(CORPUS.lines().any(|line| line == syllable));
		}
	}

	#[test]
	fn filtered_sample_always_satisfies_the_filter() {
		let store = store();
		let filter = LengthFilter::at_most(2);
		for _ in 0..100 {
			let syllable = store.sample_with(&filter).unwrap();
			assert!(filter.matches(syllable.chars().count()));
		}
	}

	#[test]
	fn unsatisfiable_filter_fails_fast() {
		let store = store();
		let result = store.sample_with(&LengthFilter::exactly(9));
		assert!(matches!(result, Err(Error::UnsatisfiableFilter { .. })));
	}

	#[test]
	fn predicate_sampling_honors_the_predicate() {
		let store = store();
		let syllable = store
			.sample_where(|s| s.starts_with('t'), DEFAULT_SAMPLE_ATTEMPTS)
			.unwrap();
		assert_eq!(syllable, "tren");
	}

	#[test]
	fn predicate_sampling_reports_exhaustion() {
		let store = store();
		let result = store.sample_where(|_| false, 50);
		assert!(matches!(result, Err(Error::FilterExhausted { attempts: 50 })));
	}
}
