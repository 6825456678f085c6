//! Mention session state machine.
//!
//! A session is `Closed` until a fresh [`Match`] passes the visibility policy,
//! then `Open` until the trigger is lost, the user cancels, the viewport is
//! resized, or a candidate is committed. The match is recomputed from scratch
//! on every text or caret change.

use mention_config::CompiledConfig;
use mention_matcher::{Match, find_match, highlight_span};
use mention_primitives::text::eq_folded;
use mention_primitives::{Document, Point};
use tracing::{debug, trace};

use crate::locator::{ScrollController, Viewport, overlay_anchor};
use crate::mutation::{Replacement, SpacerCorrection, apply_candidate, correct_spacer};
use crate::render::{RenderPlan, RenderRow};
use crate::scroll::{Direction, scroll_offset, step};

/// State of an open overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenSession {
	pub matched: Match,
	/// Slug text as typed, used for highlighting.
	pub slug: String,
	/// Active row. May briefly exceed the candidate count after the pool
	/// shrinks; rendering recovers by resetting it.
	pub active: usize,
	pub scroll_offset: f32,
	pub anchor: Point,
}

/// Whether the overlay is showing.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
	#[default]
	Closed,
	Open(OpenSession),
}

/// Fire-and-forget request for more candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionsRequest {
	/// The slug as typed.
	pub slug: String,
}

/// Returns true if a match is worth showing.
///
/// The slug must reach `min_chars`, and a lone candidate that already equals
/// the slug is never offered.
pub fn is_worth_showing(m: &Match, slug: &str, min_chars: usize) -> bool {
	m.match_length >= min_chars
		&& match m.candidates.as_slice() {
			[] => false,
			[only] => !eq_folded(only, slug),
			_ => true,
		}
}

/// Trigger-anchored suggestion session.
#[derive(Debug, Clone, Default)]
pub struct MentionSession {
	state: SessionState,
	correction: SpacerCorrection,
}

impl MentionSession {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn state(&self) -> &SessionState {
		&self.state
	}

	pub fn is_open(&self) -> bool {
		matches!(self.state, SessionState::Open(_))
	}

	/// Active row while open.
	pub fn active(&self) -> Option<usize> {
		match &self.state {
			SessionState::Open(open) => Some(open.active),
			SessionState::Closed => None,
		}
	}

	/// Current match while open.
	pub fn current_match(&self) -> Option<&Match> {
		match &self.state {
			SessionState::Open(open) => Some(&open.matched),
			SessionState::Closed => None,
		}
	}

	/// Whether the next input change may trigger the spacer swap.
	pub fn correction(&self) -> SpacerCorrection {
		self.correction
	}

	/// Recomputes the match for `doc` and applies the visibility policy.
	///
	/// An already open session keeps its active row and scroll offset; a fresh
	/// one scrolls the host list back to the top. When the policy rejects the
	/// match, the session closes and may ask for more candidates.
	pub fn evaluate<V: Viewport + ?Sized>(
		&mut self,
		doc: &Document,
		pool: &[String],
		config: &CompiledConfig,
		viewport: &mut V,
	) -> Option<OptionsRequest> {
		let Some(matched) = find_match(&doc.text, doc.caret, pool, &config.trigger) else {
			trace!(caret = doc.caret, "no slug before caret");
			self.close();
			return None;
		};
		let slug = matched.slug(&doc.text).to_string();

		if !is_worth_showing(&matched, &slug, config.trigger.min_chars) {
			let request =
				(!config.request_only_if_no_options || matched.candidates.is_empty()).then(|| OptionsRequest { slug });
			self.close();
			return request;
		}

		let anchor = overlay_anchor(&*viewport, &doc.text, doc.caret, &config.placement);
		match &mut self.state {
			SessionState::Open(open) => {
				open.matched = matched;
				open.slug = slug;
				open.anchor = anchor;
			}
			SessionState::Closed => {
				debug!(slug = %slug, candidates = matched.candidates.len(), "mention session opened");
				viewport.scroll_to(0.0);
				self.state = SessionState::Open(OpenSession {
					matched,
					slug,
					active: 0,
					scroll_offset: 0.0,
					anchor,
				});
			}
		}
		None
	}

	/// Moves the active row and keeps it scrolled into view.
	///
	/// Returns false when closed.
	pub fn navigate<S: ScrollController + ?Sized>(&mut self, direction: Direction, scroll: &mut S) -> bool {
		let SessionState::Open(open) = &mut self.state else {
			return false;
		};
		let count = open.matched.candidates.len();
		open.active = step(open.active, count, direction);
		let metrics = scroll.metrics(open.active);
		open.scroll_offset = scroll_offset(open.scroll_offset, direction, open.active, count, &metrics);
		scroll.scroll_to(open.scroll_offset);
		trace!(active = open.active, offset = open.scroll_offset, "mention selection moved");
		true
	}

	/// Commits the active row.
	pub fn commit_active(&mut self, doc: &Document, config: &CompiledConfig) -> Option<Replacement> {
		let index = self.active()?;
		self.commit(index, doc, config)
	}

	/// Commits row `index` into `doc`, closes the session and arms the spacer swap.
	///
	/// A stale index commits nothing and resets the selection.
	pub fn commit(&mut self, index: usize, doc: &Document, config: &CompiledConfig) -> Option<Replacement> {
		let SessionState::Open(open) = &mut self.state else {
			return None;
		};
		let Some(candidate) = open.matched.candidates.get(index) else {
			open.active = 0;
			return None;
		};
		let replacement = apply_candidate(&doc.text, &open.matched, candidate, &config.mutation.spacer);
		debug!(candidate = %candidate, caret = replacement.caret, "mention committed");
		self.state = SessionState::Closed;
		self.correction = SpacerCorrection::Armed;
		Some(replacement)
	}

	/// Closes the session and resets the selection.
	pub fn close(&mut self) {
		if self.is_open() {
			debug!("mention session closed");
		}
		self.state = SessionState::Closed;
	}

	/// Consumes the armed spacer swap against an input change.
	///
	/// Returns the corrected text when the swap fires. The flag is cleared
	/// either way, so the swap happens at most once per commit.
	pub fn correct(&mut self, old: &str, doc: &Document, pool: &[String], config: &CompiledConfig) -> Option<Replacement> {
		if !std::mem::take(&mut self.correction).is_armed() {
			return None;
		}
		correct_spacer(old, &doc.text, doc.caret, &config.mutation, &config.trigger, pool)
	}

	/// Builds the overlay rows, capped by `max-options`.
	///
	/// An active row outside the candidates is reset to the first row and
	/// nothing is drawn for this pass.
	pub fn render(&mut self, config: &CompiledConfig) -> Option<RenderPlan> {
		let SessionState::Open(open) = &mut self.state else {
			return None;
		};
		let count = open.matched.candidates.len();
		if count == 0 {
			return None;
		}
		if open.active >= count {
			trace!(active = open.active, count, "stale mention selection reset");
			open.active = 0;
			return None;
		}

		let rows = open
			.matched
			.candidates
			.iter()
			.take(config.mutation.visible_rows(count))
			.enumerate()
			.map(|(idx, label)| RenderRow {
				label: label.clone(),
				highlight: highlight_span(label, &open.slug),
				active: idx == open.active,
			})
			.collect();

		Some(RenderPlan {
			anchor: Some(open.anchor),
			rows,
			scroll_offset: open.scroll_offset,
		})
	}
}
