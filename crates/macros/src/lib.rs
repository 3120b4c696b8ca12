//! Procedural macros for ornate.
//!
//! Provides derive macros and attribute macros:
//! * `#[derive(Inspect)]` - structural view of structs and enums
//! * `#[renderer]` - registers a function as the renderer for its parameter type
//!
//! Generated code refers to `::ornate_pretty`; use these through its re-exports.

use proc_macro::TokenStream;

/// Inspect derive macro implementation.
mod inspect;
/// Renderer attribute implementation.
mod renderer;

/// Derives `Inspect`.
///
/// Structs expose their fields in declaration order; enums expose the fields
/// of the active variant and report the variant name.
///
/// ```ignore
/// #[derive(Inspect)]
/// struct Point {
///     x: i32,
///     y: i32,
///     #[inspect(skip)]
///     cache: Vec<u8>,
/// }
/// ```
///
/// # Attributes
///
/// Container:
/// * `#[inspect(display)]` - render through the type's `Display` implementation
/// * `#[inspect(printable)]` - register `PrettyPrintable::pretty` as the type's
///   renderer (non-generic types only)
///
/// Field:
/// * `#[inspect(skip)]` - leave the field out
/// * `#[inspect(rename = "name")]` - render under a different name
#[proc_macro_derive(Inspect, attributes(inspect))]
pub fn derive_inspect(input: TokenStream) -> TokenStream {
	inspect::derive_inspect(input)
}

/// Registers a function as the renderer for the type of its single parameter.
///
/// ```ignore
/// #[renderer]
/// fn render_money(value: &Money) -> String {
///     format!("${}.{:02}", value.cents / 100, value.cents % 100)
/// }
///
/// #[renderer(priority = 10)]
/// fn render_money_loudly(value: &Money) -> String { ... }
/// ```
///
/// The function must be a free function taking `&T` and returning `String`.
#[proc_macro_attribute]
pub fn renderer(attr: TokenStream, item: TokenStream) -> TokenStream {
	renderer::renderer(attr, item)
}
