use mention_config::{CompiledConfig, StrategyKind};
use mention_matcher::filter_field;
use mention_primitives::text::char_len;
use mention_primitives::{Key, KeyCode};
use tracing::debug;

use super::{CancelReason, InputOutcome, KeyOutcome, StrategyContext, SuggestionStrategy};
use crate::mutation::Replacement;
use crate::render::{RenderPlan, RenderRow};
use crate::scroll::{Direction, step};

/// Whole-field dropdown: filters the pool by the entire value and replaces
/// the entire value on commit. Ignores triggers and the caret.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldStrategy {
	value: String,
	filtered: Vec<String>,
	active: usize,
	shown: bool,
}

impl FieldStrategy {
	pub fn new() -> Self {
		Self::default()
	}

	/// Candidates matching the current value.
	pub fn filtered(&self) -> &[String] {
		&self.filtered
	}

	fn reset(&mut self) {
		self.active = 0;
		self.shown = false;
		self.filtered.clear();
	}

	fn take(&mut self, index: usize) -> Option<Replacement> {
		let candidate = self.filtered.get(index)?.clone();
		debug!(candidate = %candidate, "field suggestion committed");
		self.reset();
		let caret = char_len(&candidate);
		Some(Replacement { text: candidate, caret })
	}
}

impl SuggestionStrategy for FieldStrategy {
	fn kind(&self) -> StrategyKind {
		StrategyKind::Field
	}

	fn is_open(&self) -> bool {
		self.shown && !self.value.is_empty() && !self.filtered.is_empty()
	}

	fn active(&self) -> Option<usize> {
		self.is_open().then_some(self.active)
	}

	fn on_input(&mut self, _old: &str, ctx: &mut StrategyContext<'_>) -> InputOutcome {
		self.value.clone_from(&ctx.doc.text);
		self.filtered = filter_field(ctx.pool, &self.value);
		self.active = 0;
		self.shown = true;
		InputOutcome::Idle
	}

	fn on_key(&mut self, key: &Key, _ctx: &mut StrategyContext<'_>) -> KeyOutcome {
		if !self.is_open() || !key.modifiers.is_empty() {
			return KeyOutcome::Ignored;
		}
		match key.code {
			KeyCode::Enter => match self.take(self.active) {
				Some(replacement) => KeyOutcome::Commit(replacement),
				None => KeyOutcome::Ignored,
			},
			KeyCode::Down => {
				self.active = step(self.active, self.filtered.len(), Direction::Down);
				KeyOutcome::Handled
			}
			KeyCode::Up => {
				self.active = step(self.active, self.filtered.len(), Direction::Up);
				KeyOutcome::Handled
			}
			_ => KeyOutcome::Ignored,
		}
	}

	fn commit_at(&mut self, index: usize, _ctx: &mut StrategyContext<'_>) -> Option<Replacement> {
		self.take(index)
	}

	fn cancel(&mut self, reason: CancelReason) {
		if reason == CancelReason::Escape {
			self.shown = false;
		}
	}

	fn render(&mut self, _config: &CompiledConfig) -> Option<RenderPlan> {
		if !self.is_open() {
			return None;
		}
		let rows = self
			.filtered
			.iter()
			.enumerate()
			.map(|(idx, label)| RenderRow {
				label: label.clone(),
				highlight: None,
				active: idx == self.active,
			})
			.collect();
		Some(RenderPlan {
			anchor: None,
			rows,
			scroll_offset: 0.0,
		})
	}
}
