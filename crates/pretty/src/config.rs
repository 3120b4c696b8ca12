//! Render configuration.
//!
//! ```toml
//! indent = "    "
//! empty_struct = "open"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading a render configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or an invalid value.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// How a struct without members is closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyStruct {
	/// `path::Type { }`
	#[default]
	Closed,
	/// `path::Type {`, the legacy unclosed form.
	Open,
}

/// Options that affect rendered output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
	/// Indent unit for each nesting level.
	pub indent: String,
	/// Rendering of structs without members.
	pub empty_struct: EmptyStruct,
}

impl Default for RenderConfig {
	fn default() -> Self {
		Self {
			indent: "\t".to_owned(),
			empty_struct: EmptyStruct::default(),
		}
	}
}

impl RenderConfig {
	/// Parses a configuration from TOML. Missing keys keep their defaults.
	pub fn from_toml(src: &str) -> Result<Self> {
		Ok(toml::from_str(src)?)
	}

	/// Reads and parses a TOML configuration file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let src = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let config = Self::from_toml(&src)?;
		tracing::debug!(path = %path.display(), "loaded render config");
		Ok(config)
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use super::*;

	#[test]
	fn empty_document_is_default() {
		assert_eq!(RenderConfig::from_toml("").unwrap(), RenderConfig::default());
	}

	#[test]
	fn parses_all_keys() {
		let config = RenderConfig::from_toml("indent = \"  \"\nempty_struct = \"open\"\n").unwrap();
		assert_eq!(config.indent, "  ");
		assert_eq!(config.empty_struct, EmptyStruct::Open);
	}

	#[test]
	fn rejects_unknown_keys() {
		let err = RenderConfig::from_toml("indnet = \" \"").unwrap_err();
		assert!(matches!(err, ConfigError::Toml(_)));
	}

	#[test]
	fn rejects_unknown_variant() {
		assert!(RenderConfig::from_toml("empty_struct = \"half\"").is_err());
	}

	#[test]
	fn loads_from_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "indent = \"    \"").unwrap();
		let config = RenderConfig::load(file.path()).unwrap();
		assert_eq!(config.indent, "    ");
		assert_eq!(config.empty_struct, EmptyStruct::Closed);
	}

	#[test]
	fn missing_file_reports_path() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("absent.toml");
		let err = RenderConfig::load(&path).unwrap_err();
		let ConfigError::Io { path: reported, .. } = &err else {
			panic!("expected I/O error, got {err:?}");
		};
		assert_eq!(reported, &path);
		assert!(err.to_string().contains("absent.toml"));
	}
}
