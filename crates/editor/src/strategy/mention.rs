use mention_config::{CompiledConfig, StrategyKind};
use mention_primitives::{Key, KeyCode};

use super::{CancelReason, InputOutcome, KeyOutcome, StrategyContext, SuggestionStrategy};
use crate::mutation::Replacement;
use crate::render::RenderPlan;
use crate::scroll::Direction;
use crate::session::MentionSession;

/// Trigger-anchored overlay strategy backed by a [`MentionSession`].
#[derive(Debug, Clone, Default)]
pub struct MentionStrategy {
	session: MentionSession,
}

impl MentionStrategy {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn session(&self) -> &MentionSession {
		&self.session
	}

	fn evaluate(&mut self, ctx: &mut StrategyContext<'_>) -> InputOutcome {
		match self.session.evaluate(ctx.doc, ctx.pool, ctx.config, &mut *ctx.viewport) {
			Some(request) => InputOutcome::Request(request.slug),
			None => InputOutcome::Idle,
		}
	}
}

impl SuggestionStrategy for MentionStrategy {
	fn kind(&self) -> StrategyKind {
		StrategyKind::Mention
	}

	fn is_open(&self) -> bool {
		self.session.is_open()
	}

	fn active(&self) -> Option<usize> {
		self.session.active()
	}

	fn on_input(&mut self, old: &str, ctx: &mut StrategyContext<'_>) -> InputOutcome {
		if ctx.doc.is_empty() {
			self.session.close();
			return InputOutcome::Idle;
		}
		if ctx.doc.caret == 0 {
			return self.evaluate(ctx);
		}
		if let Some(fixed) = self.session.correct(old, ctx.doc, ctx.pool, ctx.config) {
			return InputOutcome::Corrected(fixed);
		}
		self.evaluate(ctx)
	}

	fn on_caret(&mut self, ctx: &mut StrategyContext<'_>) -> InputOutcome {
		self.evaluate(ctx)
	}

	fn on_pool_changed(&mut self, ctx: &mut StrategyContext<'_>) -> InputOutcome {
		self.evaluate(ctx)
	}

	fn on_key(&mut self, key: &Key, ctx: &mut StrategyContext<'_>) -> KeyOutcome {
		if !self.session.is_open() || !key.modifiers.is_empty() {
			return KeyOutcome::Ignored;
		}
		match key.code {
			KeyCode::Up => {
				self.session.navigate(Direction::Up, &mut *ctx.viewport);
				KeyOutcome::Handled
			}
			KeyCode::Down => {
				self.session.navigate(Direction::Down, &mut *ctx.viewport);
				KeyOutcome::Handled
			}
			KeyCode::Enter => match self.session.commit_active(ctx.doc, ctx.config) {
				Some(replacement) => KeyOutcome::Commit(replacement),
				None => KeyOutcome::Handled,
			},
			KeyCode::Escape => {
				self.session.close();
				KeyOutcome::Handled
			}
			_ => KeyOutcome::Ignored,
		}
	}

	fn commit_at(&mut self, index: usize, ctx: &mut StrategyContext<'_>) -> Option<Replacement> {
		self.session.commit(index, ctx.doc, ctx.config)
	}

	fn cancel(&mut self, _reason: CancelReason) {
		self.session.close();
	}

	fn render(&mut self, config: &CompiledConfig) -> Option<RenderPlan> {
		self.session.render(config)
	}
}
