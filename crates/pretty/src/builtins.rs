//! Renderers shipped with the crate.

use std::fmt::Write;

use crate::registry::RegistrySource;
use crate::typename::TypeDesc;

/// Quotes and escapes a string.
///
/// Tabs, newlines, carriage returns, backslashes and quotes use backslash
/// escapes. Other control characters and characters in `0x7f..=0xff` become
/// `\xNN`; anything above `0xff` becomes `\u{N}`.
pub fn escape_string(value: &str) -> String {
	let mut out = String::with_capacity(value.len() + 2);
	out.push('"');
	for c in value.chars() {
		match c {
			'\t' => out.push_str("\\t"),
			'\n' => out.push_str("\\n"),
			'\r' => out.push_str("\\r"),
			'\\' => out.push_str("\\\\"),
			'"' => out.push_str("\\\""),
			c if c.is_control() || ('\u{7f}'..='\u{ff}').contains(&c) => {
				let _ = write!(out, "\\x{:02x}", c as u32);
			}
			c if c as u32 > 0xff => {
				let _ = write!(out, "\\u{{{:x}}}", c as u32);
			}
			c => out.push(c),
		}
	}
	out.push('"');
	out
}

#[allow(clippy::ptr_arg, reason = "renderers take the registered type by reference")]
fn render_string(value: &String) -> String {
	escape_string(value)
}

fn render_static_str(value: &&'static str) -> String {
	escape_string(value)
}

fn render_type_desc(value: &TypeDesc) -> String {
	value.to_string()
}

crate::register_renderer!(string: String => render_string, source: RegistrySource::Builtin);
crate::register_renderer!(static_str: &'static str => render_static_str, source: RegistrySource::Builtin);
crate::register_renderer!(type_desc: TypeDesc => render_type_desc, source: RegistrySource::Builtin);
