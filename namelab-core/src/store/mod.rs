//! Syllable storage and sampling.
//!
//! The corpus is ingested once into a fixed-width record file owned by
//! the store, then served through indexed, uniform and filtered sampling:
//! - Fixed-width backing file (`BackingStore`)
//! - Length histogram for constraint-driven draws (`LengthIndex`)
//! - Named length constraint (`LengthFilter`)
//! - The store itself (`SyllableStore`)

/// Random-access syllable corpus with fixed-width records.
///
/// Exposes build, indexed reads and the sampling operations.
pub mod syllable_store;

/// Named length constraint used to shape sampling.
///
/// A tagged operator-and-bound value instead of an opaque predicate.
pub mod filter;

/// Internal fixed-width record file, exclusively owned by the store.
///
/// This module is not exposed publicly.
mod backing;

/// Internal length histogram mapping syllable length to record indices.
///
/// Built once per store build; lets length filters sample without
/// rejection. Not exposed publicly.
mod length_index;
