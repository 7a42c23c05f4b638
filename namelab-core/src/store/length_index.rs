use std::collections::BTreeMap;

use rand::Rng;

use super::filter::LengthFilter;

/// Length histogram over the records of one store build.
///
/// Maps syllable length (in characters, padding excluded) to the indices
/// of the records holding a syllable of that length. Built once during
/// the store build and immutable afterwards.
///
/// # Invariants
/// - Every record index appears in exactly one bucket
/// - Bucket keys are the lengths actually present in the corpus
#[derive(Debug, Default)]
pub(crate) struct LengthIndex {
	buckets: BTreeMap<usize, Vec<usize>>,
}

impl LengthIndex {
	/// Records that record `index` holds a syllable of `length` characters.
	pub(crate) fn insert(&mut self, length: usize, index: usize) {
		self.buckets.entry(length).or_default().push(index);
	}

	/// Number of records satisfying `filter`.
	pub(crate) fn candidate_count(&self, filter: &LengthFilter) -> usize {
		self.buckets
			.iter()
			.filter(|(length, _)| filter.matches(**length))
			.map(|(_, indices)| indices.len())
			.sum()
	}

	/// Draws a record index uniformly among all records satisfying `filter`.
	///
	/// Every matching record is equally likely regardless of how lengths
	/// are distributed across buckets. Returns `None` if no record can
	/// satisfy the constraint.
	pub(crate) fn sample(&self, filter: &LengthFilter) -> Option<usize> {
		let total = self.candidate_count(filter);
		if total == 0 {
			return None;
		}

		// Cumulative walk over the matching buckets
		let mut remaining = rand::rng().random_range(0..total);
		for (length, indices) in &self.buckets {
			if !filter.matches(*length) {
				continue;
			}
			if remaining < indices.len() {
				return Some(indices[remaining]);
			}
			remaining -= indices.len();
		}

		// Unreachable: `total` covers exactly the buckets walked above
		None
	}
}
