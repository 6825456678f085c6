//! Validated configuration consumed by the matcher and sessions.

use regex::Regex;
use smallvec::SmallVec;

use crate::error::{ConfigError, Result};
use crate::options::{KeyDispatch, StrategyKind};

/// Vertical clearance between the caret line and the overlay, in pixels.
pub const OVERLAY_Y_OFFSET: f32 = 10.0;
/// Narrowest overlay the placement logic reserves room for, in pixels.
pub const OVERLAY_MIN_WIDTH: f32 = 100.0;

/// Trigger token, slug pattern and matching policy.
#[derive(Debug, Clone)]
pub struct TriggerSpec {
	trigger: String,
	slug_pattern: Regex,
	trigger_is_slug: bool,
	/// Substring rather than prefix candidate matching.
	pub match_any: bool,
	/// Minimum slug length before the overlay is shown.
	pub min_chars: usize,
}

impl TriggerSpec {
	/// Compiles `slug_pattern` and records whether the trigger itself is slug-shaped.
	pub fn new(trigger: impl Into<String>, slug_pattern: &str, match_any: bool, min_chars: usize) -> Result<Self> {
		if slug_pattern.is_empty() {
			return Err(ConfigError::MissingField("slug-pattern"));
		}
		let slug_pattern = Regex::new(slug_pattern).map_err(|source| ConfigError::InvalidPattern {
			pattern: slug_pattern.to_string(),
			source,
		})?;
		let trigger = trigger.into();
		let trigger_is_slug = !trigger.is_empty() && slug_pattern.is_match(&trigger);
		Ok(Self {
			trigger,
			slug_pattern,
			trigger_is_slug,
			match_any,
			min_chars,
		})
	}

	/// The trigger token, possibly empty.
	pub fn trigger(&self) -> &str {
		&self.trigger
	}

	/// Returns true if `s` as a whole satisfies the slug pattern.
	pub fn is_slug(&self, s: &str) -> bool {
		self.slug_pattern.is_match(s)
	}

	/// Returns true if the trigger token itself satisfies the slug pattern.
	///
	/// Such a trigger cannot be told apart from slug text by the pattern, so
	/// scanning treats each position as a potential trigger start.
	pub fn trigger_is_slug(&self) -> bool {
		self.trigger_is_slug
	}
}

/// Text mutation settings applied when a candidate is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationConfig {
	/// Inserted after an accepted candidate.
	pub spacer: String,
	/// Punctuation eligible for the post-commit spacer swap.
	pub space_removers: SmallVec<[char; 4]>,
	/// Display cap for overlay rows, 0 for unbounded.
	pub max_options: usize,
}

impl MutationConfig {
	/// Builds mutation settings, requiring every space remover to be one char.
	pub fn new(spacer: impl Into<String>, space_removers: &[impl AsRef<str>], max_options: usize) -> Result<Self> {
		let space_removers = space_removers
			.iter()
			.map(|entry| {
				let entry = entry.as_ref();
				let mut chars = entry.chars();
				match (chars.next(), chars.next()) {
					(Some(c), None) => Ok(c),
					_ => Err(ConfigError::InvalidSpaceRemover(entry.to_string())),
				}
			})
			.collect::<Result<_>>()?;
		Ok(Self {
			spacer: spacer.into(),
			space_removers,
			max_options,
		})
	}

	/// Returns true if `c` is a configured space remover.
	pub fn is_space_remover(&self, c: char) -> bool {
		self.space_removers.contains(&c)
	}

	/// The spacer as a single char, when it is exactly one.
	pub fn spacer_char(&self) -> Option<char> {
		let mut chars = self.spacer.chars();
		match (chars.next(), chars.next()) {
			(Some(c), None) => Some(c),
			_ => None,
		}
	}

	/// Number of rows to display out of `available`.
	pub fn visible_rows(&self, available: usize) -> usize {
		if self.max_options == 0 {
			available
		} else {
			available.min(self.max_options)
		}
	}
}

/// Caller-supplied overlay offsets in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Placement {
	pub offset_x: f32,
	pub offset_y: f32,
}

/// Fully validated configuration.
#[derive(Debug, Clone)]
pub struct CompiledConfig {
	pub trigger: TriggerSpec,
	pub mutation: MutationConfig,
	pub placement: Placement,
	/// Only ask for more candidates when none matched.
	pub request_only_if_no_options: bool,
	/// Enabled strategies in precedence order, without duplicates.
	pub strategies: Vec<StrategyKind>,
	pub key_dispatch: KeyDispatch,
}
