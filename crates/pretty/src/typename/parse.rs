//! Recursive-descent parser for [`std::any::type_name`] output.

use thiserror::Error;

use super::TypeDesc;

/// Errors produced while parsing a type name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeParseError {
	/// The input was empty or whitespace.
	#[error("empty type name")]
	Empty,
	/// A character that cannot start or continue a type at this position.
	#[error("unexpected {found:?} at offset {pos}")]
	Unexpected {
		/// Byte offset of the character.
		pos: usize,
		/// The offending character.
		found: char,
	},
	/// The input ended inside a bracketed group.
	#[error("unexpected end of type name at offset {pos}")]
	Unterminated {
		/// Byte offset where more input was expected.
		pos: usize,
	},
	/// A complete type was followed by more input.
	#[error("trailing input at offset {pos}")]
	Trailing {
		/// Byte offset of the first unconsumed character.
		pos: usize,
	},
}

/// Prefixes of types that are kept verbatim as [`TypeDesc::Opaque`].
const OPAQUE_PREFIXES: &[&str] = &["dyn ", "impl ", "fn(", "unsafe ", "extern ", "for<", "*const ", "*mut ", "<"];

/// Characters that end a path segment.
const DELIMITERS: &[char] = &['<', '>', ',', ';', '[', ']', '(', ')', ' '];

pub(super) fn parse(src: &str) -> Result<TypeDesc, TypeParseError> {
	if src.trim().is_empty() {
		return Err(TypeParseError::Empty);
	}
	let mut parser = Parser { src, pos: 0 };
	let ty = parser.parse_type()?;
	parser.skip_ws();
	if parser.pos < src.len() {
		return Err(TypeParseError::Trailing { pos: parser.pos });
	}
	Ok(ty)
}

struct Parser<'a> {
	src: &'a str,
	pos: usize,
}

impl<'a> Parser<'a> {
	fn rest(&self) -> &'a str {
		&self.src[self.pos..]
	}

	fn peek(&self) -> Option<char> {
		self.rest().chars().next()
	}

	fn skip_ws(&mut self) {
		let trimmed = self.rest().trim_start();
		self.pos = self.src.len() - trimmed.len();
	}

	fn eat(&mut self, token: &str) -> bool {
		if self.rest().starts_with(token) {
			self.pos += token.len();
			true
		} else {
			false
		}
	}

	fn expect(&mut self, token: char) -> Result<(), TypeParseError> {
		self.skip_ws();
		match self.peek() {
			Some(c) if c == token => {
				self.pos += c.len_utf8();
				Ok(())
			}
			Some(found) => Err(TypeParseError::Unexpected { pos: self.pos, found }),
			None => Err(TypeParseError::Unterminated { pos: self.pos }),
		}
	}

	fn parse_type(&mut self) -> Result<TypeDesc, TypeParseError> {
		self.skip_ws();
		if self.rest().is_empty() {
			return Err(TypeParseError::Unterminated { pos: self.pos });
		}
		if OPAQUE_PREFIXES.iter().any(|p| self.rest().starts_with(p)) {
			return Ok(self.parse_opaque());
		}
		if self.eat("&") {
			self.skip_ws();
			let mutable = self.eat("mut ");
			let inner = self.parse_type()?;
			return Ok(TypeDesc::Ref {
				mutable,
				inner: Box::new(inner),
			});
		}
		if self.eat("[") {
			return self.parse_array();
		}
		if self.eat("(") {
			return self.parse_tuple();
		}
		self.parse_path()
	}

	fn parse_array(&mut self) -> Result<TypeDesc, TypeParseError> {
		let element = self.parse_type()?;
		self.skip_ws();
		let len = if self.eat(";") {
			self.skip_ws();
			Some(self.parse_len()?)
		} else {
			None
		};
		self.expect(']')?;
		Ok(TypeDesc::Array {
			element: Box::new(element),
			rank: 1,
			len,
		})
	}

	fn parse_len(&mut self) -> Result<usize, TypeParseError> {
		let rest = self.rest();
		let digits = &rest[..rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len())];
		match digits.parse() {
			Ok(len) => {
				self.pos += digits.len();
				Ok(len)
			}
			Err(_) => match self.peek() {
				Some(found) => Err(TypeParseError::Unexpected { pos: self.pos, found }),
				None => Err(TypeParseError::Unterminated { pos: self.pos }),
			},
		}
	}

	fn parse_tuple(&mut self) -> Result<TypeDesc, TypeParseError> {
		let mut items = Vec::new();
		self.skip_ws();
		if self.eat(")") {
			return Ok(TypeDesc::Tuple(items));
		}
		loop {
			items.push(self.parse_type()?);
			self.skip_ws();
			if self.eat(",") {
				self.skip_ws();
				if self.eat(")") {
					break;
				}
				continue;
			}
			self.expect(')')?;
			break;
		}
		Ok(TypeDesc::Tuple(items))
	}

	fn parse_path(&mut self) -> Result<TypeDesc, TypeParseError> {
		let start = self.pos;
		let len = self.rest().find(DELIMITERS).unwrap_or(self.rest().len());
		if len == 0 {
			return match self.peek() {
				Some(found) => Err(TypeParseError::Unexpected { pos: self.pos, found }),
				None => Err(TypeParseError::Unterminated { pos: self.pos }),
			};
		}
		self.pos += len;
		let path = self.src[start..self.pos].to_owned();

		let mut args = Vec::new();
		if self.eat("<") {
			loop {
				args.push(self.parse_type()?);
				self.skip_ws();
				if self.eat(",") {
					continue;
				}
				self.expect('>')?;
				break;
			}
		}
		Ok(TypeDesc::Path { path, args })
	}

	/// Consumes up to the next top-level separator, keeping the text verbatim.
	fn parse_opaque(&mut self) -> TypeDesc {
		let start = self.pos;
		let bytes = self.src.as_bytes();
		let mut depth = 0usize;
		let mut i = self.pos;
		while i < bytes.len() {
			match bytes[i] {
				b'-' if bytes.get(i + 1) == Some(&b'>') => {
					i += 2;
					continue;
				}
				b'<' | b'(' | b'[' => depth += 1,
				b'>' | b')' | b']' | b',' | b';' if depth == 0 => break,
				b'>' | b')' | b']' => depth -= 1,
				_ => {}
			}
			i += 1;
		}
		self.pos = i;
		TypeDesc::Opaque(self.src[start..i].trim_end().to_owned())
	}
}
