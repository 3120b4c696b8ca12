use std::any::Any;
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};

use super::{AsAny, Inspect, Shape};
use crate::typename::TypeDesc;

macro_rules! display_impls {
	($($ty:ty),+ $(,)?) => {
		$(
			impl Inspect for $ty {
				fn shape(&self) -> Shape<'_> {
					Shape::display(self)
				}
			}
		)+
	};
}

display_impls!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char);

impl Inspect for String {
	fn shape(&self) -> Shape<'_> {
		Shape::Text(Cow::Borrowed(self))
	}
}

impl Inspect for &'static str {
	fn shape(&self) -> Shape<'_> {
		Shape::Text(Cow::Borrowed(self))
	}
}

impl Inspect for PathBuf {
	fn shape(&self) -> Shape<'_> {
		Shape::Text(self.to_string_lossy())
	}
}

impl Inspect for TypeDesc {
	fn shape(&self) -> Shape<'_> {
		Shape::display(self)
	}
}

impl<T: Inspect> Inspect for Option<T> {
	fn shape(&self) -> Shape<'_> {
		match self {
			Some(value) => value.shape(),
			None => Shape::Null,
		}
	}

	fn type_desc(&self) -> TypeDesc {
		match self {
			Some(value) => value.type_desc(),
			None => TypeDesc::of::<T>(),
		}
	}

	fn subject(&self) -> &dyn Any {
		match self {
			Some(value) => value.subject(),
			None => self.as_any(),
		}
	}

	fn variant(&self) -> Option<&'static str> {
		self.as_ref().and_then(Inspect::variant)
	}
}

macro_rules! pointer_impls {
	($($ptr:ident),+) => {
		$(
			impl<T: Inspect> Inspect for $ptr<T> {
				fn shape(&self) -> Shape<'_> {
					(**self).shape()
				}

				fn type_desc(&self) -> TypeDesc {
					(**self).type_desc()
				}

				fn subject(&self) -> &dyn Any {
					(**self).subject()
				}

				fn variant(&self) -> Option<&'static str> {
					(**self).variant()
				}
			}
		)+
	};
}

pointer_impls!(Box, Rc, Arc);

macro_rules! sequence_impls {
	($($coll:ident),+) => {
		$(
			impl<T: Inspect> Inspect for $coll<T> {
				fn shape(&self) -> Shape<'_> {
					Shape::values(TypeDesc::of::<Self>(), self.iter())
				}
			}
		)+
	};
}

sequence_impls!(Vec, VecDeque, LinkedList, BinaryHeap, BTreeSet);

impl<T: Inspect, const N: usize> Inspect for [T; N] {
	fn shape(&self) -> Shape<'_> {
		Shape::values(TypeDesc::of::<T>(), self.iter())
	}
}

impl<T: Inspect, S: 'static> Inspect for HashSet<T, S> {
	fn shape(&self) -> Shape<'_> {
		Shape::values(TypeDesc::of::<Self>(), self.iter())
	}
}

impl<T: Inspect, S: 'static> Inspect for IndexSet<T, S> {
	fn shape(&self) -> Shape<'_> {
		Shape::values(TypeDesc::of::<Self>(), self.iter())
	}
}

impl<K: Inspect, V: Inspect, S: 'static> Inspect for HashMap<K, V, S> {
	fn shape(&self) -> Shape<'_> {
		Shape::pairs(TypeDesc::of::<Self>(), self.iter())
	}
}

impl<K: Inspect, V: Inspect, S: 'static> Inspect for IndexMap<K, V, S> {
	fn shape(&self) -> Shape<'_> {
		Shape::pairs(TypeDesc::of::<Self>(), self.iter())
	}
}

impl<K: Inspect, V: Inspect> Inspect for BTreeMap<K, V> {
	fn shape(&self) -> Shape<'_> {
		Shape::pairs(TypeDesc::of::<Self>(), self.iter())
	}
}

impl Inspect for () {
	fn shape(&self) -> Shape<'_> {
		Shape::Tuple(Vec::new())
	}
}

macro_rules! tuple_impls {
	($($name:ident . $idx:tt),+) => {
		impl<$($name: Inspect),+> Inspect for ($($name,)+) {
			fn shape(&self) -> Shape<'_> {
				Shape::Tuple(vec![$(&self.$idx as &dyn Inspect),+])
			}
		}
	};
}

tuple_impls!(A.0);
tuple_impls!(A.0, B.1);
tuple_impls!(A.0, B.1, C.2);
tuple_impls!(A.0, B.1, C.2, D.3);
tuple_impls!(A.0, B.1, C.2, D.3, E.4);
tuple_impls!(A.0, B.1, C.2, D.3, E.4, F.5);
