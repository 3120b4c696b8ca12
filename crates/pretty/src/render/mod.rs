//! Recursive value renderer.
//!
//! Resolution order for every value:
//!
//! 1. a renderer registered for the value's [`subject`](Inspect::subject) type,
//! 2. the value's [`Shape`]: text verbatim, sequences with an element count
//!    prefix, tuples, and finally member-by-member structural rendering.
//!
//! Multi-line children are indented by one [`indent`](RenderConfig::indent)
//! unit per nesting level.


use std::any::Any;
use std::io;

use crate::config::{EmptyStruct, RenderConfig};
use crate::inspect::{Field, Inspect, Item, Seq, Shape};
use crate::registry::{RendererRegistry, registry};

/// Separator between elements and members of multi-line blocks.
pub const ITEM_SEPARATOR: &str = ", \n";

/// Renders values against a registry and configuration.
#[derive(Debug, Clone)]
pub struct Renderer<'r> {
	registry: &'r RendererRegistry,
	config: RenderConfig,
}

impl Renderer<'static> {
	/// Renderer over the process-wide registry with the default configuration.
	pub fn global() -> Self {
		Self::new(registry())
	}
}

impl<'r> Renderer<'r> {
	pub fn new(registry: &'r RendererRegistry) -> Self {
		Self {
			registry,
			config: RenderConfig::default(),
		}
	}

	pub fn with_config(mut self, config: RenderConfig) -> Self {
		self.config = config;
		self
	}

	pub fn config(&self) -> &RenderConfig {
		&self.config
	}

	/// Renders a top-level value.
	///
	/// An absent value renders as `(<type>) null`, naming its static type.
	pub fn render<T: Inspect>(&self, value: &T) -> String {
		if let Some(text) = self.lookup(value) {
			return text;
		}
		match value.shape() {
			Shape::Null => format!("({}) null", self.render_value(&value.type_desc())),
			shape => self.render_shape(value, shape),
		}
	}

	/// Renders `value` and writes it to `out` followed by a newline.
	pub fn write_line<W: io::Write, T: Inspect>(&self, out: &mut W, value: &T) -> io::Result<()> {
		writeln!(out, "{}", self.render(value))
	}

	fn render_value(&self, value: &dyn Inspect) -> String {
		if let Some(text) = self.lookup(value) {
			return text;
		}
		self.render_shape(value, value.shape())
	}

	fn lookup(&self, value: &dyn Inspect) -> Option<String> {
		let subject = value.subject();
		self.registry.get(Any::type_id(subject))?.render(subject)
	}

	fn render_shape(&self, value: &dyn Inspect, shape: Shape<'_>) -> String {
		match shape {
			Shape::Null => "null".to_owned(),
			Shape::Text(text) => text.into_owned(),
			Shape::Seq(seq) => self.render_seq(seq),
			Shape::Tuple(items) => {
				let rendered: Vec<String> = items.iter().map(|item| self.render_value(*item)).collect();
				match rendered.as_slice() {
					[only] => format!("({only},)"),
					_ => format!("({})", rendered.join(", ")),
				}
			}
			Shape::Struct(fields) => self.render_struct(value, &fields),
		}
	}

	fn render_item(&self, item: Item<'_>) -> String {
		match item {
			Item::Value(value) => self.render_value(value),
			Item::Pair(key, value) => format!("[{}] = {}", self.render_value(key), self.render_value(value)),
		}
	}

	fn render_seq(&self, seq: Seq<'_>) -> String {
		let items: Vec<Item<'_>> = seq.items.collect();
		let prefix = format!("{}[{}]", self.render_value(&seq.label), items.len());
		match items.as_slice() {
			[] => prefix,
			[only] => format!("{prefix} {{ {} }}", self.render_item(*only)),
			_ => {
				let body = self.block(items.iter().map(|item| self.render_item(*item)));
				format!("{prefix} {{\n{body}\n}}")
			}
		}
	}

	fn render_struct(&self, value: &dyn Inspect, fields: &[Field<'_>]) -> String {
		let ty = value.type_desc().full_name();
		let name = match value.variant() {
			Some(variant) => format!("{ty}::{variant}"),
			None => ty,
		};
		match fields {
			[] => match self.config.empty_struct {
				EmptyStruct::Closed => format!("{name} {{ }}"),
				EmptyStruct::Open => format!("{name} {{"),
			},
			[field] => format!("{name} {{ {} = {} }}", field.name, self.render_value(field.value)),
			_ => {
				let body =
					self.block(fields.iter().map(|field| format!("{} = {}", field.name, self.render_value(field.value))));
				format!("{name} {{\n{body}\n}}")
			}
		}
	}

	/// Indents each entry and joins them with [`ITEM_SEPARATOR`].
	fn block(&self, entries: impl Iterator<Item = String>) -> String {
		entries.map(|entry| self.indent(&entry)).collect::<Vec<_>>().join(ITEM_SEPARATOR)
	}

	fn indent(&self, text: &str) -> String {
		let unit = &self.config.indent;
		if text.contains('\n') {
			text.trim()
				.split('\n')
				.map(|line| format!("{unit}{line}"))
				.collect::<Vec<_>>()
				.join("\n")
		} else {
			format!("{unit}{text}")
		}
	}
}

/// Renders `value` with the process-wide registry.
pub fn to_pretty_string<T: Inspect>(value: &T) -> String {
	Renderer::global().render(value)
}

/// Renders `value` and prints it to stdout followed by a newline.
pub fn print<T: Inspect>(value: &T) {
	println!("{}", to_pretty_string(value));
}

/// Renders `value` and writes it to `out` followed by a newline.
pub fn write_line<W: io::Write, T: Inspect>(out: &mut W, value: &T) -> io::Result<()> {
	Renderer::global().write_line(out, value)
}

/// Method-call sugar over [`to_pretty_string`] and [`print`].
pub trait Pretty: Inspect + Sized {
	fn to_pretty_string(&self) -> String {
		to_pretty_string(self)
	}

	fn pretty_print(&self) {
		print(self);
	}
}

impl<T: Inspect> Pretty for T {}
