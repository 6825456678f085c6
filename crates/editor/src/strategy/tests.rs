use mention_config::{AutocompleteOptions, CompiledConfig, StrategyKind};
use mention_primitives::{Document, Key, KeyCode, Rect};
use pretty_assertions::assert_eq;

use super::*;
use crate::locator::GridViewport;

struct Fixture {
	config: CompiledConfig,
	pool: Vec<String>,
	viewport: GridViewport,
}

impl Fixture {
	fn new(pool: &[&str]) -> Self {
		Self {
			config: AutocompleteOptions::default().compile().unwrap(),
			pool: pool.iter().map(|s| s.to_string()).collect(),
			viewport: GridViewport::new(Rect::new(0.0, 0.0, 400.0, 20.0), 8.0, 20.0, 4),
		}
	}

	fn input(&mut self, strategy: &mut dyn SuggestionStrategy, old: &str, doc: &Document) -> InputOutcome {
		let mut ctx = StrategyContext {
			doc,
			pool: &self.pool,
			config: &self.config,
			viewport: &mut self.viewport,
		};
		strategy.on_input(old, &mut ctx)
	}

	fn key(&mut self, strategy: &mut dyn SuggestionStrategy, doc: &Document, code: KeyCode) -> KeyOutcome {
		let mut ctx = StrategyContext {
			doc,
			pool: &self.pool,
			config: &self.config,
			viewport: &mut self.viewport,
		};
		strategy.on_key(&Key::new(code), &mut ctx)
	}
}

#[test]
fn build_respects_kind() {
	assert_eq!(build(StrategyKind::Mention).kind(), StrategyKind::Mention);
	assert_eq!(build(StrategyKind::Field).kind(), StrategyKind::Field);
}

#[test]
fn mention_keys_are_ignored_while_closed() {
	let mut fx = Fixture::new(&["john"]);
	let mut mention = MentionStrategy::new();
	let doc = Document::at_end("hello");
	assert_eq!(fx.input(&mut mention, "", &doc), InputOutcome::Idle);
	for code in [KeyCode::Up, KeyCode::Down, KeyCode::Enter, KeyCode::Escape] {
		assert_eq!(fx.key(&mut mention, &doc, code), KeyOutcome::Ignored);
	}
}

#[test]
fn mention_enter_commits_active_row() {
	let mut fx = Fixture::new(&["john", "joanna"]);
	let mut mention = MentionStrategy::new();
	let doc = Document::at_end("@jo");
	fx.input(&mut mention, "@j", &doc);
	assert!(mention.is_open());
	assert_eq!(fx.key(&mut mention, &doc, KeyCode::Down), KeyOutcome::Handled);
	let outcome = fx.key(&mut mention, &doc, KeyCode::Enter);
	assert_eq!(
		outcome,
		KeyOutcome::Commit(Replacement {
			text: "@joanna ".to_string(),
			caret: 8,
		})
	);
	assert!(!mention.is_open());
}

#[test]
fn mention_other_keys_pass_through_while_open() {
	let mut fx = Fixture::new(&["john", "joanna"]);
	let mut mention = MentionStrategy::new();
	let doc = Document::at_end("@jo");
	fx.input(&mut mention, "", &doc);
	assert_eq!(fx.key(&mut mention, &doc, KeyCode::Char('x')), KeyOutcome::Ignored);
	assert_eq!(fx.key(&mut mention, &doc, KeyCode::Tab), KeyOutcome::Ignored);
	assert!(mention.is_open());
}

#[test]
fn mention_empty_text_closes() {
	let mut fx = Fixture::new(&["john", "joanna"]);
	let mut mention = MentionStrategy::new();
	fx.input(&mut mention, "", &Document::at_end("@jo"));
	fx.input(&mut mention, "@jo", &Document::default());
	assert!(!mention.is_open());
}

#[test]
fn mention_correction_wins_over_evaluation() {
	let mut fx = Fixture::new(&["john", "joanna"]);
	let mut mention = MentionStrategy::new();
	let doc = Document::at_end("@jo");
	fx.input(&mut mention, "", &doc);
	let KeyOutcome::Commit(rep) = fx.key(&mut mention, &doc, KeyCode::Enter) else {
		panic!("expected commit");
	};
	let typed = Document::at_end(format!("{}.", rep.text));
	let outcome = fx.input(&mut mention, &rep.text, &typed);
	assert_eq!(
		outcome,
		InputOutcome::Corrected(Replacement {
			text: "@john. ".to_string(),
			caret: 7,
		})
	);
}

#[test]
fn field_filters_whole_value() {
	let mut fx = Fixture::new(&["Red", "green", "blue"]);
	let mut field = FieldStrategy::new();
	fx.input(&mut field, "", &Document::at_end("RE"));
	assert_eq!(field.filtered(), &["Red".to_string(), "green".to_string()]);
	assert!(field.is_open());
	assert_eq!(field.active(), Some(0));
}

#[test]
fn field_is_hidden_for_empty_value() {
	let mut fx = Fixture::new(&["red"]);
	let mut field = FieldStrategy::new();
	fx.input(&mut field, "r", &Document::default());
	assert!(!field.is_open());
	assert_eq!(field.render(&fx.config), None);
	assert_eq!(fx.key(&mut field, &Document::default(), KeyCode::Enter), KeyOutcome::Ignored);
}

#[test]
fn field_navigation_wraps_and_commit_replaces_everything() {
	let mut fx = Fixture::new(&["alpha", "palace", "salami"]);
	let mut field = FieldStrategy::new();
	let doc = Document::at_end("al");
	fx.input(&mut field, "", &doc);
	assert_eq!(fx.key(&mut field, &doc, KeyCode::Up), KeyOutcome::Handled);
	assert_eq!(field.active(), Some(2));
	assert_eq!(fx.key(&mut field, &doc, KeyCode::Down), KeyOutcome::Handled);
	assert_eq!(field.active(), Some(0));
	fx.key(&mut field, &doc, KeyCode::Down);

	let outcome = fx.key(&mut field, &doc, KeyCode::Enter);
	assert_eq!(
		outcome,
		KeyOutcome::Commit(Replacement {
			text: "palace".to_string(),
			caret: 6,
		})
	);
	assert!(!field.is_open());
}

#[test]
fn field_escape_hides_but_resize_does_not() {
	let mut fx = Fixture::new(&["alpha"]);
	let mut field = FieldStrategy::new();
	fx.input(&mut field, "", &Document::at_end("a"));
	field.cancel(CancelReason::Resize);
	assert!(field.is_open());
	field.cancel(CancelReason::Escape);
	assert!(!field.is_open());
}

#[test]
fn field_render_lists_every_match() {
	let mut fx = Fixture::new(&["a1", "a2", "a3", "a4", "a5", "a6", "a7", "b"]);
	let mut field = FieldStrategy::new();
	fx.input(&mut field, "", &Document::at_end("a"));
	let plan = field.render(&fx.config).unwrap();
	assert_eq!(plan.rows.len(), 7);
	assert_eq!(plan.anchor, None);
	assert_eq!(plan.active_row(), Some(0));
}
