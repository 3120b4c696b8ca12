//! Type descriptors and the type name formatter.
//!
//! [`TypeDesc`] is parsed from [`std::any::type_name`] and is the runtime type
//! identity the renderer works with. Its [`Display`](std::fmt::Display)
//! implementation is the friendly formatter: standard library paths are
//! shortened through a static alias table, generic arguments are formatted
//! recursively, and arrays use `T[]` notation.
//!
//! ```
//! use std::collections::HashMap;
//!
//! use ornate_pretty::TypeDesc;
//!
//! let ty = TypeDesc::of::<HashMap<String, Vec<u64>>>();
//! assert_eq!(ty.to_string(), "HashMap<String, Vec<u64>>");
//! ```

mod alias;
mod parse;

#[cfg(test)]
mod tests;

use std::fmt;

pub use alias::alias;
pub use parse::TypeParseError;

/// Generic parameters that are elided when trailing, because rustc may spell
/// out defaulted allocator and hasher parameters.
const DEFAULT_PARAMS: &[&str] = &[
	"alloc::alloc::Global",
	"std::hash::random::RandomState",
	"std::collections::hash::map::RandomState",
];

/// Runtime type descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDesc {
	/// Named type, optionally with generic arguments.
	Path {
		/// Fully-qualified path, e.g. `alloc::vec::Vec`.
		path: String,
		/// Generic arguments in declaration order.
		args: Vec<TypeDesc>,
	},
	/// Array, slice, or multi-rank array.
	Array {
		/// Element type.
		element: Box<TypeDesc>,
		/// Number of dimensions. Rust arrays and slices are always rank 1.
		rank: usize,
		/// Fixed length for `[T; N]`, `None` for slices.
		len: Option<usize>,
	},
	/// Tuple of the given element types (the unit type is the empty tuple).
	Tuple(Vec<TypeDesc>),
	/// Shared or mutable reference.
	Ref {
		/// Whether this is `&mut`.
		mutable: bool,
		/// Referenced type.
		inner: Box<TypeDesc>,
	},
	/// Anything the parser does not model (`dyn Trait`, fn pointers, raw
	/// pointers), kept verbatim.
	Opaque(String),
}

impl TypeDesc {
	/// Returns the descriptor of `T`.
	///
	/// Names the parser cannot model become [`TypeDesc::Opaque`].
	pub fn of<T: ?Sized>() -> Self {
		let name = std::any::type_name::<T>();
		Self::parse(name).unwrap_or_else(|_| Self::Opaque(name.to_owned()))
	}

	/// Parses a type name as produced by [`std::any::type_name`].
	pub fn parse(name: &str) -> Result<Self, TypeParseError> {
		parse::parse(name)
	}

	/// Named type without generic arguments.
	pub fn named(path: impl Into<String>) -> Self {
		Self::Path {
			path: path.into(),
			args: Vec::new(),
		}
	}

	/// Named type with generic arguments.
	pub fn generic(path: impl Into<String>, args: impl IntoIterator<Item = TypeDesc>) -> Self {
		Self::Path {
			path: path.into(),
			args: args.into_iter().collect(),
		}
	}

	/// Unsized array of the given rank.
	pub fn array(element: TypeDesc, rank: usize) -> Self {
		Self::Array {
			element: Box::new(element),
			rank: rank.max(1),
			len: None,
		}
	}

	/// Returns true for named types with at least one generic argument.
	pub fn is_generic(&self) -> bool {
		matches!(self, Self::Path { args, .. } if !args.is_empty())
	}

	/// Returns true for arrays and slices.
	pub fn is_array(&self) -> bool {
		matches!(self, Self::Array { .. })
	}

	/// Element type of an array or slice.
	pub fn element(&self) -> Option<&TypeDesc> {
		match self {
			Self::Array { element, .. } => Some(element),
			_ => None,
		}
	}

	/// Fully-qualified path of a named type, without generic arguments.
	pub fn base_path(&self) -> Option<&str> {
		match self {
			Self::Path { path, .. } => Some(path),
			_ => None,
		}
	}

	/// Generic arguments of a named type.
	pub fn args(&self) -> &[TypeDesc] {
		match self {
			Self::Path { args, .. } => args,
			_ => &[],
		}
	}

	/// Unaliased, fully-qualified name.
	pub fn full_name(&self) -> String {
		FullName(self).to_string()
	}
}

/// Arguments with trailing defaulted parameters removed.
fn visible_args(args: &[TypeDesc]) -> &[TypeDesc] {
	let mut end = args.len();
	while end > 0 {
		match &args[end - 1] {
			TypeDesc::Path { path, args } if args.is_empty() && DEFAULT_PARAMS.contains(&path.as_str()) => end -= 1,
			_ => break,
		}
	}
	&args[..end]
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: impl IntoIterator<Item = T>) -> fmt::Result {
	for (i, item) in items.into_iter().enumerate() {
		if i > 0 {
			f.write_str(", ")?;
		}
		write!(f, "{item}")?;
	}
	Ok(())
}

fn write_tuple<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
	f.write_str("(")?;
	write_list(f, items)?;
	if items.len() == 1 {
		f.write_str(",")?;
	}
	f.write_str(")")
}

impl fmt::Display for TypeDesc {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Path { path, args } => {
				f.write_str(alias(path))?;
				let args = visible_args(args);
				if !args.is_empty() {
					f.write_str("<")?;
					write_list(f, args)?;
					f.write_str(">")?;
				}
				Ok(())
			}
			Self::Array { element, rank, .. } => {
				write!(f, "{element}[{}]", ",".repeat(rank.saturating_sub(1)))
			}
			Self::Tuple(items) => write_tuple(f, items),
			Self::Ref { mutable, inner } => {
				f.write_str(if *mutable { "&mut " } else { "&" })?;
				write!(f, "{inner}")
			}
			Self::Opaque(text) => f.write_str(text),
		}
	}
}

/// Displays a descriptor without aliasing or elision.
struct FullName<'a>(&'a TypeDesc);

impl fmt::Display for FullName<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.0 {
			TypeDesc::Path { path, args } => {
				f.write_str(path)?;
				if !args.is_empty() {
					f.write_str("<")?;
					write_list(f, args.iter().map(FullName))?;
					f.write_str(">")?;
				}
				Ok(())
			}
			TypeDesc::Array { element, rank, len } => match (rank, len) {
				(1, Some(len)) => write!(f, "[{}; {len}]", FullName(element)),
				(1, None) => write!(f, "[{}]", FullName(element)),
				(rank, _) => write!(f, "{}[{}]", FullName(element), ",".repeat(rank - 1)),
			},
			TypeDesc::Tuple(items) => {
				let items: Vec<_> = items.iter().map(FullName).collect();
				write_tuple(f, &items)
			}
			TypeDesc::Ref { mutable, inner } => {
				f.write_str(if *mutable { "&mut " } else { "&" })?;
				write!(f, "{}", FullName(inner))
			}
			TypeDesc::Opaque(text) => f.write_str(text),
		}
	}
}
