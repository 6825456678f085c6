//! Error types for option parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

use crate::StrategyKind;

/// Errors that can occur when loading or validating options.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading an options file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The slug pattern is not a valid regular expression.
	#[error("invalid slug pattern {pattern:?}: {source}")]
	InvalidPattern {
		/// The pattern as written.
		pattern: String,
		/// The regex compiler's diagnostic.
		source: regex::Error,
	},

	/// A space remover entry is not exactly one character.
	#[error("space remover must be a single character, got {0:?}")]
	InvalidSpaceRemover(String),

	/// A required field is missing or empty.
	#[error("missing required field: {0}")]
	MissingField(&'static str),

	/// A strategy was listed more than once.
	#[error("strategy {0:?} listed more than once")]
	DuplicateStrategy(StrategyKind),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
