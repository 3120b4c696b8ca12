//! Arithmetic `i64` sequences.

use std::iter::FusedIterator;

use crate::error::{Result, SeqError};

#[cfg(test)]
mod tests;

/// Arithmetic progression from `start` towards an exclusive `end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Steps {
	next: i64,
	step: i64,
	remaining: u64,
}

impl Steps {
	fn new(start: i64, end: i64, step: i64) -> Self {
		let span = i128::from(end) - i128::from(start);
		let step_wide = i128::from(step);
		let remaining = if (step > 0 && span > 0) || (step < 0 && span < 0) {
			// ceil(span / step) for same-signed operands
			(span + step_wide - step_wide.signum()) / step_wide
		} else {
			0
		};
		Self {
			next: start,
			step,
			remaining: remaining as u64,
		}
	}

	fn nth_value(&self, offset: u64) -> i64 {
		(i128::from(self.next) + i128::from(self.step) * i128::from(offset)) as i64
	}
}

impl Iterator for Steps {
	type Item = i64;

	fn next(&mut self) -> Option<i64> {
		if self.remaining == 0 {
			return None;
		}
		let value = self.next;
		self.remaining -= 1;
		self.next = self.next.wrapping_add(self.step);
		Some(value)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let n = usize::try_from(self.remaining).unwrap_or(usize::MAX);
		(n, Some(n))
	}
}

impl DoubleEndedIterator for Steps {
	fn next_back(&mut self) -> Option<i64> {
		if self.remaining == 0 {
			return None;
		}
		self.remaining -= 1;
		Some(self.nth_value(self.remaining))
	}
}

impl ExactSizeIterator for Steps {}

impl FusedIterator for Steps {}

/// `0, 1, .., end - 1`. Empty when `end <= 0`.
pub fn range(end: i64) -> Steps {
	range_from(0, end)
}

/// `start, start + 1, .., end - 1`. Empty when `end <= start`.
pub fn range_from(start: i64, end: i64) -> Steps {
	Steps::new(start, end, 1)
}

/// `start, start + step, ..` while short of `end`.
///
/// A negative `step` counts down towards `end`. A zero step never reaches
/// `end` and is rejected.
///
/// ```
/// use ornate_seq::range_step;
///
/// assert_eq!(range_step(10, 0, -3).unwrap().collect::<Vec<_>>(), [10, 7, 4, 1]);
/// ```
pub fn range_step(start: i64, end: i64, step: i64) -> Result<Steps> {
	if step == 0 {
		return Err(SeqError::ZeroStep);
	}
	Ok(Steps::new(start, end, step))
}
