//! Structural view of values.
//!
//! Rust has no runtime reflection, so values describe themselves through
//! [`Inspect`]. The renderer asks a value for its [`Shape`] and for the
//! [`subject`](Inspect::subject) used to look up a registered renderer.
//! `#[derive(Inspect)]` generates the implementation for user structs and
//! enums; implementations for primitives and the standard collections live in
//! this module.

mod impls;

use std::any::Any;
use std::borrow::Cow;

use crate::typename::TypeDesc;

/// Upcast to [`Any`], implemented for every sized `'static` type.
pub trait AsAny: Any {
	/// Returns `self` as a [`&dyn Any`](Any).
	fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
	fn as_any(&self) -> &dyn Any {
		self
	}
}

/// A value the renderer can look into.
pub trait Inspect: AsAny {
	/// Structural view of the value.
	fn shape(&self) -> Shape<'_>;

	/// Runtime type of the value.
	fn type_desc(&self) -> TypeDesc {
		TypeDesc::of::<Self>()
	}

	/// The value handed to registered renderers.
	///
	/// Wrappers forward to the value they wrap so that e.g. `Box<String>` is
	/// rendered by the `String` renderer.
	fn subject(&self) -> &dyn Any {
		self.as_any()
	}

	/// Name of the active enum variant.
	fn variant(&self) -> Option<&'static str> {
		None
	}
}

/// A self-describing type that renders itself.
///
/// Registering a type with `#[inspect(printable)]` or [`printable!`] binds
/// [`pretty`](PrettyPrintable::pretty) as the type's renderer.
///
/// [`printable!`]: crate::printable
pub trait PrettyPrintable {
	/// Renders `self`.
	fn pretty(&self) -> String;
}

/// What a value looks like to the renderer.
pub enum Shape<'a> {
	/// Absent value.
	Null,
	/// Value with its own text conversion.
	Text(Cow<'a, str>),
	/// Iterable value.
	Seq(Seq<'a>),
	/// Positional group.
	Tuple(Vec<&'a dyn Inspect>),
	/// Named data members in declaration order.
	Struct(Vec<Field<'a>>),
}

impl<'a> Shape<'a> {
	/// Text shape from anything displayable.
	pub fn display(value: &impl std::fmt::Display) -> Self {
		Self::Text(Cow::Owned(value.to_string()))
	}

	/// Sequence shape labelled with `label`.
	pub fn seq(label: TypeDesc, items: impl Iterator<Item = Item<'a>> + 'a) -> Self {
		Self::Seq(Seq {
			label,
			items: Box::new(items),
		})
	}

	/// Sequence of plain values labelled with `label`.
	pub fn values<T: Inspect>(label: TypeDesc, items: impl Iterator<Item = &'a T> + 'a) -> Self {
		Self::seq(label, items.map(|v| Item::Value(v)))
	}

	/// Sequence of key/value pairs labelled with `label`.
	pub fn pairs<K: Inspect, V: Inspect>(label: TypeDesc, items: impl Iterator<Item = (&'a K, &'a V)> + 'a) -> Self {
		Self::seq(label, items.map(|(k, v)| Item::Pair(k, v)))
	}
}

/// Iterable contents.
pub struct Seq<'a> {
	/// Type printed in front of the element count: the container type, or the
	/// element type for arrays.
	pub label: TypeDesc,
	/// Elements in source order. Consumed once.
	pub items: Box<dyn Iterator<Item = Item<'a>> + 'a>,
}

/// One element of a [`Seq`].
#[derive(Clone, Copy)]
pub enum Item<'a> {
	/// Plain element.
	Value(&'a dyn Inspect),
	/// Map entry.
	Pair(&'a dyn Inspect, &'a dyn Inspect),
}

/// A named data member.
#[derive(Clone, Copy)]
pub struct Field<'a> {
	/// Member name.
	pub name: &'a str,
	/// Member value.
	pub value: &'a dyn Inspect,
}

impl<'a> Field<'a> {
	pub fn new(name: &'a str, value: &'a dyn Inspect) -> Self {
		Self { name, value }
	}
}
