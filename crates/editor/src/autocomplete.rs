//! Input front door composing the enabled suggestion strategies.

use mention_config::{CompiledConfig, KeyDispatch, StrategyKind};
use mention_primitives::{Document, Key, KeyCode};
use tracing::trace;

use crate::locator::Viewport;
use crate::mutation::Replacement;
use crate::render::RenderPlan;
use crate::strategy::{self, CancelReason, InputOutcome, KeyOutcome, StrategyContext, SuggestionStrategy};

/// Callbacks into the embedding input widget. All default to no-ops.
pub trait FieldHost {
	/// The text changed, either by the user or by a commit.
	fn on_change(&mut self, _text: &str) {}

	/// More candidates matching `slug` are wanted. The host answers, if at
	/// all, by calling [`AutocompleteField::set_candidates`].
	fn on_request_options(&mut self, _slug: &str) {}

	/// A key no strategy intercepted.
	fn on_key_down(&mut self, _key: &Key) {}

	fn on_blur(&mut self) {}

	fn on_focus_change(&mut self, _focused: bool) {}

	/// The core moved the caret after rewriting the text.
	fn on_caret_moved(&mut self, _caret: usize) {}
}

impl FieldHost for () {}

/// Whether a key reached the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyHandling {
	/// A strategy consumed the key.
	Intercepted,
	/// The key was passed to [`FieldHost::on_key_down`].
	Forwarded,
}

/// An input with inline suggestions.
///
/// The host reports every text, caret, key, focus and resize event; the
/// field runs the strategies synchronously and reports back through
/// [`FieldHost`].
pub struct AutocompleteField<H, V> {
	config: CompiledConfig,
	pool: Vec<String>,
	doc: Document,
	strategies: Vec<Box<dyn SuggestionStrategy>>,
	focused: bool,
	host: H,
	viewport: V,
}

impl<H: FieldHost, V: Viewport> AutocompleteField<H, V> {
	/// Creates an empty field with the strategies listed in `config`.
	pub fn new(config: CompiledConfig, host: H, viewport: V) -> Self {
		let strategies = config.strategies.iter().copied().map(strategy::build).collect();
		Self {
			config,
			pool: Vec::new(),
			doc: Document::default(),
			strategies,
			focused: false,
			host,
			viewport,
		}
	}

	/// Sets the initial text without notifying the host.
	pub fn with_text(mut self, text: impl Into<String>) -> Self {
		self.doc = Document::at_end(text);
		self
	}

	/// Sets the initial candidate pool without evaluating it.
	pub fn with_candidates(mut self, pool: Vec<String>) -> Self {
		self.pool = pool;
		self
	}

	pub fn config(&self) -> &CompiledConfig {
		&self.config
	}

	pub fn document(&self) -> &Document {
		&self.doc
	}

	pub fn candidates(&self) -> &[String] {
		&self.pool
	}

	pub fn host(&self) -> &H {
		&self.host
	}

	pub fn host_mut(&mut self) -> &mut H {
		&mut self.host
	}

	pub fn viewport(&self) -> &V {
		&self.viewport
	}

	pub fn is_focused(&self) -> bool {
		self.focused
	}

	/// The enabled strategy of `kind`, if any.
	pub fn strategy(&self, kind: StrategyKind) -> Option<&dyn SuggestionStrategy> {
		self.strategies.iter().find(|s| s.kind() == kind).map(|s| &**s)
	}

	/// Whether strategy `kind` is enabled and showing.
	pub fn is_open(&self, kind: StrategyKind) -> bool {
		self.strategy(kind).is_some_and(|s| s.is_open())
	}

	/// Active row of strategy `kind`, while open.
	pub fn active(&self, kind: StrategyKind) -> Option<usize> {
		self.strategy(kind).and_then(|s| s.active())
	}

	/// The host's text changed; `caret` is the caret after the change.
	pub fn input(&mut self, text: impl Into<String>, caret: usize) {
		let old = std::mem::replace(&mut self.doc, Document::new(text, caret)).text;
		trace!(caret = self.doc.caret, "input changed");
		self.notify_input(&old, None);
		self.host.on_change(&self.doc.text);
	}

	/// Only the caret moved.
	pub fn set_caret(&mut self, caret: usize) {
		self.doc.set_caret(caret);
		let Self {
			strategies,
			doc,
			pool,
			config,
			viewport,
			host,
			..
		} = self;
		for strategy in strategies.iter_mut() {
			let mut ctx = StrategyContext {
				doc: &*doc,
				pool: &pool[..],
				config: &*config,
				viewport: &mut *viewport,
			};
			if let InputOutcome::Request(slug) = strategy.on_caret(&mut ctx) {
				host.on_request_options(&slug);
			}
		}
	}

	/// Replaces the caller-owned candidate pool.
	///
	/// Strategies re-evaluate only when the pool size changed.
	pub fn set_candidates(&mut self, pool: Vec<String>) {
		let resized = pool.len() != self.pool.len();
		self.pool = pool;
		if !resized {
			return;
		}
		let Self {
			strategies,
			doc,
			pool,
			config,
			viewport,
			host,
			..
		} = self;
		for strategy in strategies.iter_mut() {
			let mut ctx = StrategyContext {
				doc: &*doc,
				pool: &pool[..],
				config: &*config,
				viewport: &mut *viewport,
			};
			if let InputOutcome::Request(slug) = strategy.on_pool_changed(&mut ctx) {
				host.on_request_options(&slug);
			}
		}
	}

	/// Offers a key to the strategies, forwarding it to the host if none takes it.
	///
	/// Strategies only claim unmodified keys, so chords such as Ctrl+Enter
	/// always reach the host.
	pub fn handle_key(&mut self, key: Key) -> KeyHandling {
		if key.code == KeyCode::Escape && key.modifiers.is_empty() && self.strategies.iter().any(|s| s.is_open()) {
			for strategy in &mut self.strategies {
				strategy.cancel(CancelReason::Escape);
			}
			return KeyHandling::Intercepted;
		}

		let mut handled = false;
		let mut commit = None;
		{
			let Self {
				strategies,
				doc,
				pool,
				config,
				viewport,
				..
			} = self;
			for (idx, strategy) in strategies.iter_mut().enumerate() {
				let mut ctx = StrategyContext {
					doc: &*doc,
					pool: &pool[..],
					config: &*config,
					viewport: &mut *viewport,
				};
				match strategy.on_key(&key, &mut ctx) {
					KeyOutcome::Ignored => {}
					KeyOutcome::Handled => {
						handled = true;
						// Enter never reaches a second strategy, even when the first committed nothing.
						if config.key_dispatch == KeyDispatch::First || key.code == KeyCode::Enter {
							break;
						}
					}
					KeyOutcome::Commit(replacement) => {
						handled = true;
						commit = Some((idx, replacement));
						break;
					}
				}
			}
		}

		if let Some((idx, replacement)) = commit {
			self.apply_commit(idx, replacement);
		}
		if handled {
			KeyHandling::Intercepted
		} else {
			self.host.on_key_down(&key);
			KeyHandling::Forwarded
		}
	}

	/// Commits row `index` of strategy `kind`, as for a pointer click.
	///
	/// Returns false if the strategy is not enabled or has no such row.
	pub fn commit_at(&mut self, kind: StrategyKind, index: usize) -> bool {
		let Some(idx) = self.strategies.iter().position(|s| s.kind() == kind) else {
			return false;
		};
		let replacement = {
			let mut ctx = StrategyContext {
				doc: &self.doc,
				pool: &self.pool,
				config: &self.config,
				viewport: &mut self.viewport,
			};
			self.strategies[idx].commit_at(index, &mut ctx)
		};
		match replacement {
			Some(replacement) => {
				self.apply_commit(idx, replacement);
				true
			}
			None => false,
		}
	}

	/// The viewport was resized.
	pub fn resize(&mut self) {
		for strategy in &mut self.strategies {
			strategy.cancel(CancelReason::Resize);
		}
	}

	pub fn focus(&mut self) {
		self.focused = true;
		self.host.on_focus_change(true);
	}

	pub fn blur(&mut self) {
		self.focused = false;
		self.host.on_focus_change(false);
		self.host.on_blur();
	}

	/// Render plans of every showing strategy, in precedence order.
	pub fn render(&mut self) -> Vec<(StrategyKind, RenderPlan)> {
		let config = &self.config;
		self.strategies
			.iter_mut()
			.filter_map(|s| s.render(config).map(|plan| (s.kind(), plan)))
			.collect()
	}

	/// Adopts a committed replacement and lets the other strategies see it.
	fn apply_commit(&mut self, committer: usize, replacement: Replacement) {
		let old = std::mem::replace(&mut self.doc, Document::new(replacement.text, replacement.caret)).text;
		self.host.on_caret_moved(self.doc.caret);
		self.notify_input(&old, Some(committer));
		self.host.on_change(&self.doc.text);
	}

	/// Offers an input change to every strategy except `skip`.
	///
	/// A correction replaces the document before later strategies see it.
	fn notify_input(&mut self, old: &str, skip: Option<usize>) {
		let Self {
			strategies,
			doc,
			pool,
			config,
			viewport,
			host,
			..
		} = self;
		for (idx, strategy) in strategies.iter_mut().enumerate() {
			if skip == Some(idx) {
				continue;
			}
			let mut ctx = StrategyContext {
				doc: &*doc,
				pool: &pool[..],
				config: &*config,
				viewport: &mut *viewport,
			};
			match strategy.on_input(old, &mut ctx) {
				InputOutcome::Idle => {}
				InputOutcome::Request(slug) => host.on_request_options(&slug),
				InputOutcome::Corrected(fixed) => {
					*doc = Document::new(fixed.text, fixed.caret);
					host.on_caret_moved(doc.caret);
				}
			}
		}
	}
}
