use std::fmt;

/// Comparison operator of a `LengthFilter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthOp {
	Below,
	AtMost,
	Exactly,
	AtLeast,
	Above,
}

/// A named length constraint on sampled syllables.
///
/// The only predicate shape the synthesizer ever needs is a comparison
/// on syllable length, so the constraint is a tagged operator-and-bound
/// value rather than an opaque callable. This also lets the store sample
/// straight from its length histogram instead of rejecting draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthFilter {
	op: LengthOp,
	bound: usize,
}

impl LengthFilter {
	/// Creates a filter from an operator and a bound.
	pub fn new(op: LengthOp, bound: usize) -> Self {
		Self { op, bound }
	}

	/// Accepts syllables of at most `bound` characters.
	pub fn at_most(bound: usize) -> Self {
		Self::new(LengthOp::AtMost, bound)
	}

	/// Accepts syllables of exactly `bound` characters.
	pub fn exactly(bound: usize) -> Self {
		Self::new(LengthOp::Exactly, bound)
	}

	/// Accepts syllables of at least `bound` characters.
	pub fn at_least(bound: usize) -> Self {
		Self::new(LengthOp::AtLeast, bound)
	}

	/// Whether a syllable of `length` characters satisfies the constraint.
	pub fn matches(&self, length: usize) -> bool {
		match self.op {
			LengthOp::Below => length < self.bound,
			LengthOp::AtMost => length <= self.bound,
			LengthOp::Exactly => length == self.bound,
			LengthOp::AtLeast => length >= self.bound,
			LengthOp::Above => length > self.bound,
		}
	}
}

impl fmt::Display for LengthFilter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let op = match self.op {
			LengthOp::Below => "<",
			LengthOp::AtMost => "<=",
			LengthOp::Exactly => "==",
			LengthOp::AtLeast => ">=",
			LengthOp::Above => ">",
		};
		write!(f, "length {} {}", op, self.bound)
	}
}
