//! Text mutation engine.
//!
//! Applies an accepted candidate over a [`Match`] span, and performs the
//! one-shot spacer/punctuation swap right after a commit:
//!
//! ```text
//! "@wonderjenny ,|"  ->  "@wonderjenny, |"
//! ```

use mention_config::{MutationConfig, TriggerSpec};
use mention_matcher::{Match, find_match};
use mention_primitives::text::{char_len, char_slice};

/// New text and caret produced by a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
	pub text: String,
	pub caret: usize,
}

/// Whether the next input change may trigger the spacer swap.
///
/// Armed by a successful commit and consumed by the next input change,
/// whether or not the swap fires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpacerCorrection {
	#[default]
	Disarmed,
	Armed,
}

impl SpacerCorrection {
	pub fn is_armed(self) -> bool {
		matches!(self, Self::Armed)
	}
}

/// Replaces the slug covered by `m` with `candidate` followed by `spacer`.
///
/// The caret lands one char past the candidate, i.e. after a single-char spacer.
pub fn apply_candidate(text: &str, m: &Match, candidate: &str, spacer: &str) -> Replacement {
	let len = char_len(text);
	let head = char_slice(text, 0, m.match_start);
	let tail = char_slice(text, m.end(), len);
	let text = format!("{head}{candidate}{spacer}{tail}");
	let caret = (m.match_start + char_len(candidate) + 1).min(char_len(&text));
	Replacement { text, caret }
}

/// Swaps a spacer and a freshly typed space remover after a commit.
///
/// `old` is the text before the edit, `new` the text after it, and `caret`
/// the caret after it. Fires only when the first differing char of `new` is
/// a space remover typed right after the spacer, the char before the spacer
/// is not itself a space remover, and the text before the spacer still ends
/// in a mention.
pub fn correct_spacer(
	old: &str,
	new: &str,
	caret: usize,
	mutation: &MutationConfig,
	trigger: &TriggerSpec,
	pool: &[String],
) -> Option<Replacement> {
	let spacer = mutation.spacer_char()?;
	let new_chars: Vec<char> = new.chars().collect();
	if mutation.space_removers.is_empty() || new_chars.len() <= 2 {
		return None;
	}
	let old_chars: Vec<char> = old.chars().collect();

	let i = (0..old_chars.len().max(new_chars.len())).find(|&i| old_chars.get(i) != new_chars.get(i))?;
	if i < 2 || i >= new_chars.len() {
		return None;
	}
	let (before, prev, typed) = (new_chars[i - 2], new_chars[i - 1], new_chars[i]);
	if prev != spacer || mutation.is_space_remover(before) || !mutation.is_space_remover(typed) {
		return None;
	}

	let head: String = new_chars[..i - 2].iter().collect();
	find_match(&head, caret.checked_sub(3)?, pool, trigger)?;

	let mut swapped = new_chars;
	swapped.swap(i - 1, i);
	tracing::debug!(at = i, removed = %typed, "spacer swapped after commit");
	Some(Replacement {
		text: swapped.into_iter().collect(),
		caret: i + 1,
	})
}
