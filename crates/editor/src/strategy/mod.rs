//! Suggestion strategies attachable to one input.
//!
//! Each strategy owns its own selection state and reacts to input changes,
//! keys and cancellation independently. [`AutocompleteField`] composes the
//! enabled strategies in the configured precedence order.
//!
//! [`AutocompleteField`]: crate::AutocompleteField

mod field;
mod mention;

pub use field::FieldStrategy;
use mention_config::{CompiledConfig, StrategyKind};
use mention_primitives::{Document, Key};
pub use mention::MentionStrategy;

use crate::locator::Viewport;
use crate::mutation::Replacement;
use crate::render::RenderPlan;

/// Everything a strategy may read or drive while handling an event.
pub struct StrategyContext<'a> {
	/// The input after the event.
	pub doc: &'a Document,
	/// Caller-owned candidate pool.
	pub pool: &'a [String],
	pub config: &'a CompiledConfig,
	pub viewport: &'a mut dyn Viewport,
}

/// Result of offering an input change to a strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
	/// Nothing for the host to do.
	Idle,
	/// Ask the host for more candidates matching this slug.
	Request(String),
	/// The strategy rewrote the text; the host must adopt it.
	Corrected(Replacement),
}

/// Result of offering a key to a strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
	/// Not for this strategy.
	Ignored,
	/// Consumed without changing the text.
	Handled,
	/// Consumed and committed a suggestion.
	Commit(Replacement),
}

/// Why a strategy is being dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
	Escape,
	Resize,
}

/// A pluggable suggestion mechanism.
pub trait SuggestionStrategy {
	fn kind(&self) -> StrategyKind;

	/// Whether suggestions are currently showing.
	fn is_open(&self) -> bool;

	/// Active row, while open.
	fn active(&self) -> Option<usize>;

	/// Called after the text changed from `old` to `ctx.doc`.
	fn on_input(&mut self, old: &str, ctx: &mut StrategyContext<'_>) -> InputOutcome;

	/// Called after only the caret moved.
	fn on_caret(&mut self, _ctx: &mut StrategyContext<'_>) -> InputOutcome {
		InputOutcome::Idle
	}

	/// Called after the candidate pool changed size.
	fn on_pool_changed(&mut self, _ctx: &mut StrategyContext<'_>) -> InputOutcome {
		InputOutcome::Idle
	}

	fn on_key(&mut self, key: &Key, ctx: &mut StrategyContext<'_>) -> KeyOutcome;

	/// Commits row `index`, typically from a pointer click.
	fn commit_at(&mut self, index: usize, ctx: &mut StrategyContext<'_>) -> Option<Replacement>;

	fn cancel(&mut self, reason: CancelReason);

	/// Rows to draw this pass, if any.
	fn render(&mut self, config: &CompiledConfig) -> Option<RenderPlan>;
}

/// Builds the strategy for `kind`.
pub fn build(kind: StrategyKind) -> Box<dyn SuggestionStrategy> {
	match kind {
		StrategyKind::Mention => Box::new(MentionStrategy::new()),
		StrategyKind::Field => Box::new(FieldStrategy::new()),
	}
}

#[cfg(test)]
mod tests;
