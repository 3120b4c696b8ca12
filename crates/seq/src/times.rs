//! Repetition helpers.

/// Calls `f` `n` times.
pub fn times(n: usize, mut f: impl FnMut()) {
	for _ in 0..n {
		f();
	}
}

/// Calls `f` with each position in `0..n`.
pub fn times_indexed(n: usize, f: impl FnMut(usize)) {
	(0..n).for_each(f);
}

/// Collects the results of `n` calls to `f`.
pub fn times_collect<T>(n: usize, mut f: impl FnMut() -> T) -> Vec<T> {
	(0..n).map(|_| f()).collect()
}

/// Collects `f(i)` for each position in `0..n`.
pub fn times_collect_indexed<T>(n: usize, f: impl FnMut(usize) -> T) -> Vec<T> {
	(0..n).map(f).collect()
}
