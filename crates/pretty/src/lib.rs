//! Type-directed pretty printer.
//!
//! Renders values into an indented, human-readable form:
//!
//! ```
//! use ornate_pretty::Pretty;
//!
//! assert_eq!(vec!["a", "b"].to_pretty_string(), "Vec<&str>[2] {\n\t\"a\", \n\t\"b\"\n}");
//! assert_eq!(None::<u8>.to_pretty_string(), "(u8) null");
//! ```
//!
//! Values expose their structure through [`Inspect`] (derivable with
//! `#[derive(Inspect)]`). Types can take over their own rendering either by
//! implementing [`PrettyPrintable`] or by tagging a function with
//! `#[renderer]`; both end up in the [registry](registry::registry).

extern crate self as ornate_pretty;

mod builtins;
pub mod config;
pub mod inspect;
pub mod registry;
mod render;
pub mod typename;

pub use builtins::escape_string;
pub use config::{EmptyStruct, RenderConfig};
pub use inspect::{Field, Inspect, Item, PrettyPrintable, Seq, Shape};
pub use ornate_macros::{Inspect, renderer};
pub use render::{ITEM_SEPARATOR, Pretty, Renderer, print, to_pretty_string, write_line};
pub use typename::TypeDesc;

#[doc(hidden)]
pub mod __private {
	pub use {inventory, paste};
}
