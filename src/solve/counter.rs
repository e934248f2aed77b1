use crate::cube::{turn::Turn, CubeError};
use crate::solve::SolveError;

/// A mixed-radix odometer over digits in `[0, base)`.
///
/// Digit 0 is the least significant one and also the first turn of the
/// sequence it stands for. When a carry leaves the last digit a new digit
/// (starting at 0) is appended, so every digit string of a length is seen
/// exactly once before the first string of the next length.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SequenceCounter {
	digits: Vec<usize>,
	base: usize,
}

impl SequenceCounter {
	pub fn new(base: usize) -> Result<Self, SolveError> {
		if base < 1 {
			return Err(SolveError::InvalidConfiguration(format!(
				"counter base must be at least 1, got {}",
				base
			)));
		}

		Ok(Self {
			digits: vec![0],
			base,
		})
	}

	pub fn digits(&self) -> &[usize] {
		&self.digits
	}

	/// Length of the current digit string, never zero
	pub(crate) fn len(&self) -> usize {
		self.digits.len()
	}

	/// Advance to the next digit string and return it
	pub fn increment(&mut self) -> &[usize] {
		let mut n = 0;
		loop {
			if n == self.digits.len() {
				self.digits.push(0);
				break;
			}

			self.digits[n] += 1;
			if self.digits[n] == self.base {
				self.digits[n] = 0;
				n += 1;
			} else {
				break;
			}
		}

		&self.digits
	}

	/// The turns the digits stand for, first turn first
	pub fn turns(&self) -> Result<Vec<Turn>, CubeError> {
		self.digits.iter().map(|d| Turn::from_index(*d)).collect()
	}
}

impl std::fmt::Display for SequenceCounter {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{:?}", self.digits)
	}
}
