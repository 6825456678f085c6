//! Raw, unvalidated options as written by the embedder.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::compiled::{CompiledConfig, MutationConfig, Placement, TriggerSpec};
use crate::error::{ConfigError, Result};

/// Slug characters accepted when no pattern is configured: ASCII and Cyrillic
/// letters, digits, `-` and `_`.
pub const DEFAULT_SLUG_PATTERN: &str = r"^[A-Za-z0-9А-Яа-я\-_]+$";

/// A suggestion strategy that can be attached to an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
	/// Trigger-anchored overlay replacing the slug before the caret.
	Mention,
	/// Whole-field substring dropdown replacing the entire value.
	Field,
}

/// How a key is offered to the enabled strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyDispatch {
	/// Every enabled strategy sees the key, in precedence order, until one commits.
	#[default]
	All,
	/// The first strategy that handles the key stops dispatch.
	First,
}

/// Embedding options, as deserialized from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct AutocompleteOptions {
	/// Token that opens a mention, may be empty.
	pub trigger: String,
	/// Regex every slug must satisfy as a whole.
	pub slug_pattern: String,
	/// Substring rather than prefix candidate matching.
	pub match_any: bool,
	/// Minimum slug length before the overlay is shown.
	pub min_chars: usize,
	/// Display cap for overlay rows, 0 for unbounded.
	pub max_options: usize,
	/// Only ask for more candidates when none matched.
	pub request_only_if_no_options: bool,
	/// Punctuation eligible for the post-commit spacer swap.
	pub space_removers: Vec<String>,
	/// Inserted after an accepted candidate.
	pub spacer: String,
	/// Horizontal overlay offset in pixels.
	pub offset_x: f32,
	/// Vertical overlay offset in pixels.
	pub offset_y: f32,
	/// Enabled strategies in precedence order.
	pub strategies: Vec<StrategyKind>,
	/// Key dispatch policy across strategies.
	pub key_dispatch: KeyDispatch,
}

impl Default for AutocompleteOptions {
	fn default() -> Self {
		Self {
			trigger: "@".to_string(),
			slug_pattern: DEFAULT_SLUG_PATTERN.to_string(),
			match_any: false,
			min_chars: 0,
			max_options: 6,
			request_only_if_no_options: true,
			space_removers: [",", ".", "!", "?"].map(String::from).to_vec(),
			spacer: " ".to_string(),
			offset_x: 0.0,
			offset_y: 0.0,
			strategies: vec![StrategyKind::Mention, StrategyKind::Field],
			key_dispatch: KeyDispatch::All,
		}
	}
}

impl AutocompleteOptions {
	/// Parses options from a TOML document. Missing keys take their defaults.
	pub fn from_toml_str(src: &str) -> Result<Self> {
		Ok(toml::from_str(src)?)
	}

	/// Reads and parses an options file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let src = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml_str(&src)
	}

	/// Validates the options and compiles them for matching.
	pub fn compile(&self) -> Result<CompiledConfig> {
		let trigger = TriggerSpec::new(self.trigger.clone(), &self.slug_pattern, self.match_any, self.min_chars)?;
		let mutation = MutationConfig::new(self.spacer.clone(), &self.space_removers, self.max_options)?;

		if self.strategies.is_empty() {
			return Err(ConfigError::MissingField("strategies"));
		}
		for (idx, kind) in self.strategies.iter().enumerate() {
			if self.strategies[..idx].contains(kind) {
				return Err(ConfigError::DuplicateStrategy(*kind));
			}
		}

		tracing::debug!(
			trigger = %self.trigger,
			pattern = %self.slug_pattern,
			strategies = ?self.strategies,
			"compiled autocomplete options"
		);

		Ok(CompiledConfig {
			trigger,
			mutation,
			placement: Placement {
				offset_x: self.offset_x,
				offset_y: self.offset_y,
			},
			request_only_if_no_options: self.request_only_if_no_options,
			strategies: self.strategies.clone(),
			key_dispatch: self.key_dispatch,
		})
	}
}
