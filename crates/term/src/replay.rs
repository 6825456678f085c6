//! Scripted sessions.
//!
//! A script is a TOML document with an initial text and candidate pool,
//! optional `[options]`, and `[[steps]]` tagged by `op`:
//!
//! ```toml
//! candidates = ["john", "joanna"]
//!
//! [[steps]]
//! op = "type"
//! text = "@jo"
//!
//! [[steps]]
//! op = "key"
//! key = "down"
//! ```
//!
//! Keys that no strategy intercepts are applied to the text the way a plain
//! single-line input would, so typing and editing go through the same
//! key-then-input sequence a real host produces.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context;
use mention_config::{AutocompleteOptions, CompiledConfig, StrategyKind};
use mention_editor::{AutocompleteField, FieldHost, GridViewport, KeyHandling};
use mention_primitives::{Key, KeyCode, Rect, text::char_len};
use serde::Deserialize;
use tracing::debug;

const CELL_WIDTH: f32 = 8.0;
const ROW_HEIGHT: f32 = 20.0;
const INPUT_COLUMNS: f32 = 80.0;
const FALLBACK_ROWS: usize = 6;

/// A replay script.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Script {
	/// Text the field starts with; the caret starts at its end.
	pub text: String,
	pub candidates: Vec<String>,
	/// Replaces the options from `--config` when present.
	pub options: Option<AutocompleteOptions>,
	pub steps: Vec<Step>,
}

/// One scripted host event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum Step {
	/// Types each char as a key press followed by an input change.
	Type { text: String },
	/// A single key press such as `"down"` or `"ctrl+n"`.
	Key { key: String },
	/// Moves the caret without editing.
	Caret { at: usize },
	Resize,
	/// Replaces the candidate pool.
	Pool { candidates: Vec<String> },
	/// Pointer commit of a visible row.
	Click { strategy: StrategyKind, row: usize },
	Focus,
	Blur,
}

impl Script {
	pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
		toml::from_str(src).context("invalid replay script")
	}

	pub fn load(path: &Path) -> anyhow::Result<Self> {
		let src = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
		Self::from_toml_str(&src)
	}

	/// Options the script runs with, falling back to `fallback`.
	pub fn compile(&self, fallback: &AutocompleteOptions) -> anyhow::Result<CompiledConfig> {
		let options = self.options.as_ref().unwrap_or(fallback);
		Ok(options.compile()?)
	}
}

/// Host that queues what the field reported since the last step.
#[derive(Debug, Default)]
struct Recorder {
	events: Vec<String>,
}

impl FieldHost for Recorder {
	fn on_request_options(&mut self, slug: &str) {
		self.events.push(format!("request {slug:?}"));
	}

	fn on_blur(&mut self) {
		self.events.push("blur".to_string());
	}

	fn on_focus_change(&mut self, focused: bool) {
		self.events.push(format!("focus {focused}"));
	}

	fn on_caret_moved(&mut self, caret: usize) {
		self.events.push(format!("caret {caret}"));
	}
}

type Field = AutocompleteField<Recorder, GridViewport>;

/// Runs `script` and returns one line per step.
pub fn run(script: &Script, config: CompiledConfig) -> anyhow::Result<Vec<String>> {
	let rows = config.mutation.visible_rows(FALLBACK_ROWS);
	let input = Rect::new(0.0, 0.0, INPUT_COLUMNS * CELL_WIDTH, ROW_HEIGHT);
	let viewport = GridViewport::new(input, CELL_WIDTH, ROW_HEIGHT, rows);
	let mut field = AutocompleteField::new(config, Recorder::default(), viewport)
		.with_text(script.text.clone())
		.with_candidates(script.candidates.clone());

	let mut lines = Vec::with_capacity(script.steps.len());
	for (idx, step) in script.steps.iter().enumerate() {
		debug!(step = idx, ?step, "replaying");
		apply(&mut field, step).with_context(|| format!("step {}", idx + 1))?;
		lines.push(describe(&mut field));
	}
	Ok(lines)
}

fn apply(field: &mut Field, step: &Step) -> anyhow::Result<()> {
	match step {
		Step::Type { text } => {
			for c in text.chars() {
				press(field, Key::char(c));
			}
		}
		Step::Key { key } => {
			let key: Key = key.parse()?;
			press(field, key);
		}
		Step::Caret { at } => field.set_caret(*at),
		Step::Resize => field.resize(),
		Step::Pool { candidates } => field.set_candidates(candidates.clone()),
		Step::Click { strategy, row } => {
			if !field.commit_at(*strategy, *row) {
				field.host_mut().events.push(format!("click {row} ignored"));
			}
		}
		Step::Focus => field.focus(),
		Step::Blur => field.blur(),
	}
	Ok(())
}

/// Offers `key` to the field and edits the text if it came back unhandled.
fn press(field: &mut Field, key: Key) {
	if field.handle_key(key) == KeyHandling::Intercepted {
		return;
	}
	let mut doc = field.document().clone();
	match key.code {
		KeyCode::Char(c) if !key.modifiers.ctrl && !key.modifiers.alt => {
			doc.insert(c.encode_utf8(&mut [0; 4]));
		}
		KeyCode::Backspace => {
			if !doc.backspace() {
				return;
			}
		}
		KeyCode::Left => return field.set_caret(doc.caret.saturating_sub(1)),
		KeyCode::Right => return field.set_caret(doc.caret + 1),
		KeyCode::Home => return field.set_caret(0),
		KeyCode::End => return field.set_caret(char_len(&doc.text)),
		_ => return,
	}
	field.input(doc.text, doc.caret);
}

/// `"text" caret=N`, followed by host events and every showing list.
fn describe(field: &mut Field) -> String {
	let doc = field.document();
	let mut line = format!("{:?} caret={}", doc.text, doc.caret);
	for event in field.host_mut().events.drain(..) {
		let _ = write!(line, " | {event}");
	}
	for (kind, plan) in field.render() {
		let name = match kind {
			StrategyKind::Mention => "mention",
			StrategyKind::Field => "field",
		};
		let _ = write!(line, " | {name}:");
		for row in &plan.rows {
			let marker = if row.active { ">" } else { "" };
			let _ = write!(line, " {marker}{}", row.label);
		}
	}
	line
}

#[cfg(test)]
mod tests;
