//! Parallel fan-out on rayon's global pool.

use rayon::prelude::*;

/// Runs `f` once for every element, in parallel and in no particular order.
///
/// Returns after every call has completed. A panic in `f` propagates to the
/// caller once the remaining calls have finished.
pub fn for_each_parallel<I, F>(items: I, f: F)
where
	I: IntoParallelIterator,
	F: Fn(I::Item) + Sync + Send,
{
	items.into_par_iter().for_each(f);
}

/// Runs `f` once for every element in parallel, then reports the error of the
/// lowest-positioned element that failed.
///
/// Every element is visited even when earlier ones fail.
pub fn try_for_each_parallel<I, E, F>(items: I, f: F) -> Result<(), E>
where
	I: IntoParallelIterator,
	I::Iter: IndexedParallelIterator,
	E: Send,
	F: Fn(I::Item) -> Result<(), E> + Sync + Send,
{
	let faults: Vec<(usize, E)> = items
		.into_par_iter()
		.enumerate()
		.filter_map(|(i, item)| f(item).err().map(|e| (i, e)))
		.collect();

	if !faults.is_empty() {
		tracing::debug!(faults = faults.len(), "parallel fan-out finished with faults");
	}

	match faults.into_iter().min_by_key(|(i, _)| *i) {
		Some((_, e)) => Err(e),
		None => Ok(()),
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Mutex;
	use std::sync::atomic::{AtomicUsize, Ordering};

	use super::*;

	#[test]
	fn visits_every_element_once() {
		let hits: Vec<AtomicUsize> = (0..256).map(|_| AtomicUsize::new(0)).collect();
		for_each_parallel(0..256usize, |i| {
			hits[i].fetch_add(1, Ordering::Relaxed);
		});
		assert!(hits.iter().all(|h| h.load(Ordering::Relaxed) == 1));
	}

	#[test]
	fn reports_lowest_failing_position() {
		let visited = AtomicUsize::new(0);
		let result = try_for_each_parallel(0..100u32, |i| {
			visited.fetch_add(1, Ordering::Relaxed);
			if i % 30 == 29 { Err(i) } else { Ok(()) }
		});
		assert_eq!(result, Err(29));
		assert_eq!(visited.load(Ordering::Relaxed), 100);
	}

	#[test]
	fn succeeds_when_nothing_fails() {
		let seen = Mutex::new(Vec::new());
		let result: Result<(), ()> = try_for_each_parallel(vec![3, 1, 2], |x| {
			seen.lock().unwrap().push(x);
			Ok(())
		});
		assert_eq!(result, Ok(()));
		let mut seen = seen.into_inner().unwrap();
		seen.sort_unstable();
		assert_eq!(seen, [1, 2, 3]);
	}
}
