//! Keyed collection and selection over arbitrary iterators.

use std::cmp::Ordering;
use std::hash::Hash;
use std::iter::{Enumerate, Flatten};

use indexmap::IndexMap;


/// Extension methods available on every [`Iterator`].
///
/// Maps are [`IndexMap`]s: keys keep the position of their first occurrence,
/// so results iterate in source order.
pub trait SeqExt: Iterator + Sized {
	/// Pairs each element with its zero-based position.
	fn indexed(self) -> Enumerate<Self> {
		self.enumerate()
	}

	/// Collects `(key, value)` pairs. A repeated key keeps its first position
	/// and takes the last value.
	fn to_map<K, V>(self) -> IndexMap<K, V>
	where
		Self: Iterator<Item = (K, V)>,
		K: Hash + Eq,
	{
		self.collect()
	}

	/// Projects each element into a `(key, value)` pair and collects them like
	/// [`to_map`](SeqExt::to_map).
	fn to_map_by<K, V, F>(self, pair: F) -> IndexMap<K, V>
	where
		K: Hash + Eq,
		F: FnMut(Self::Item) -> (K, V),
	{
		self.map(pair).collect()
	}

	/// Groups elements under `key`, keeping source order within each group.
	fn group_to_map<K, F>(self, key: F) -> IndexMap<K, Vec<Self::Item>>
	where
		K: Hash + Eq,
		F: FnMut(&Self::Item) -> K,
	{
		self.group_to_map_with(key, |item| item)
	}

	/// Groups `value(element)` under `key(element)`, keeping source order
	/// within each group.
	fn group_to_map_with<K, V, F, G>(self, mut key: F, mut value: G) -> IndexMap<K, Vec<V>>
	where
		K: Hash + Eq,
		F: FnMut(&Self::Item) -> K,
		G: FnMut(Self::Item) -> V,
	{
		let mut groups: IndexMap<K, Vec<V>> = IndexMap::new();
		for item in self {
			groups.entry(key(&item)).or_default().push(value(item));
		}
		groups
	}

	/// Indexes elements by `key`. The last element with a given key wins.
	fn index_by<K, F>(self, key: F) -> IndexMap<K, Self::Item>
	where
		K: Hash + Eq,
		F: FnMut(&Self::Item) -> K,
	{
		self.index_by_with(key, |item| item)
	}

	/// Indexes `value(element)` by `key(element)`. The last element with a
	/// given key wins.
	fn index_by_with<K, V, F, G>(self, mut key: F, mut value: G) -> IndexMap<K, V>
	where
		K: Hash + Eq,
		F: FnMut(&Self::Item) -> K,
		G: FnMut(Self::Item) -> V,
	{
		self.map(|item| (key(&item), value(item))).collect()
	}

	/// Flattens one level of nesting.
	fn flatten_nested(self) -> Flatten<Self>
	where
		Self::Item: IntoIterator,
	{
		self.flatten()
	}

	/// Position of the greatest element. Ties go to the first occurrence.
	///
	/// Returns `None` for an empty iterator. Elements that do not compare
	/// (e.g. `NaN`) never replace the current maximum.
	fn arg_max(self) -> Option<usize>
	where
		Self::Item: PartialOrd,
	{
		let mut best: Option<(usize, Self::Item)> = None;
		for (i, item) in self.enumerate() {
			if best.as_ref().is_none_or(|(_, top)| exceeds(&item, top)) {
				best = Some((i, item));
			}
		}
		best.map(|(i, _)| i)
	}

	/// Position of the element with the greatest key. Ties go to the first
	/// occurrence.
	fn arg_max_by_key<B, F>(self, mut key: F) -> Option<usize>
	where
		B: PartialOrd,
		F: FnMut(&Self::Item) -> B,
	{
		self.map(|item| key(&item)).arg_max()
	}
}

fn exceeds<T: PartialOrd>(candidate: &T, current: &T) -> bool {
	candidate.partial_cmp(current) == Some(Ordering::Greater)
}

impl<I: Iterator> SeqExt for I {}
