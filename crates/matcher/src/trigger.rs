//! Trigger matcher.

use mention_config::TriggerSpec;
use mention_primitives::text::{char_slice, fold_case};

use crate::filter::filter_candidates;

/// The span before the caret to replace, and the candidates matching it.
///
/// `match_start + match_length` is always the caret the match was computed for.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Match {
	/// Char offset where the slug starts.
	pub match_start: usize,
	/// Slug length in chars.
	pub match_length: usize,
	/// Pool entries matching the slug, in pool order.
	pub candidates: Vec<String>,
}

impl Match {
	/// Char offset just past the slug.
	pub fn end(&self) -> usize {
		self.match_start + self.match_length
	}

	/// The slug as it appears in `text`.
	pub fn slug<'a>(&self, text: &'a str) -> &'a str {
		char_slice(text, self.match_start, self.end())
	}
}

/// Finds the slug ending at `caret` and filters `pool` against it.
///
/// Matching is case-insensitive: `text` and the trigger are both folded before
/// scanning. Returns `None` when no trigger boundary precedes the caret, or when
/// slug text is interrupted by a character outside the slug pattern. A match
/// with no candidates is still a match.
pub fn find_match(text: &str, caret: usize, pool: &[String], spec: &TriggerSpec) -> Option<Match> {
	let folded = fold_case(text);
	let chars: Vec<char> = folded.chars().collect();
	let caret = caret.min(chars.len());
	let trigger: Vec<char> = fold_case(spec.trigger()).chars().collect();

	let match_start = if trigger.is_empty() {
		scan_untriggered(&folded, caret, spec)?
	} else {
		scan_triggered(&folded, &chars, &trigger, caret, spec)?
	};

	let slug = char_slice(&folded, match_start, caret);
	let candidates = filter_candidates(pool, slug, spec.match_any);
	tracing::trace!(match_start, slug, candidates = candidates.len(), "slug matched");

	Some(Match {
		match_start,
		match_length: caret - match_start,
		candidates,
	})
}

/// Walks back from the caret until a trigger boundary is found.
fn scan_triggered(folded: &str, chars: &[char], trigger: &[char], caret: usize, spec: &TriggerSpec) -> Option<usize> {
	for i in (0..caret).rev() {
		// A slug-shaped trigger is indistinguishable from the slug, so the
		// trigger is tested as starting at `i` rather than ending there.
		let trigger_idx = if spec.trigger_is_slug() {
			i
		} else {
			(i + 1).checked_sub(trigger.len())?
		};

		let trigger_end = trigger_idx + trigger.len();
		if trigger_end <= caret && chars[trigger_idx..trigger_end] == *trigger {
			return Some(trigger_end);
		}

		if !spec.is_slug(char_slice(folded, i, caret)) {
			return None;
		}
	}
	None
}

/// Walks back from the caret while the text keeps satisfying the slug pattern.
fn scan_untriggered(folded: &str, caret: usize, spec: &TriggerSpec) -> Option<usize> {
	let mut start = caret;
	for i in (0..caret).rev() {
		if !spec.is_slug(char_slice(folded, i, caret)) {
			break;
		}
		start = i;
	}
	(start < caret).then_some(start)
}
