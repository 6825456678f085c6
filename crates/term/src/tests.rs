use std::io::Write as _;

use mention_config::AutocompleteOptions;
use pretty_assertions::assert_eq;

use crate::{Query, probe};

fn query(text: &str, candidates: &[&str]) -> Query {
	Query {
		text: text.to_string(),
		caret: None,
		trigger: None,
		any: false,
		candidates: candidates.iter().map(|s| s.to_string()).collect(),
	}
}

#[test]
fn probe_prints_match_json() {
	let mut q = query("Hello @jo", &["john", "joanna", "joseph", "bob"]);
	q.caret = Some(9);
	let json = probe(&AutocompleteOptions::default(), &q).unwrap();
	assert_eq!(
		json,
		r#"{"match_start":7,"match_length":2,"candidates":["john","joanna","joseph"]}"#
	);
}

#[test]
fn probe_prints_null_without_trigger() {
	let json = probe(&AutocompleteOptions::default(), &query("hello", &["hello"])).unwrap();
	assert_eq!(json, "null");
}

#[test]
fn probe_overrides_trigger_and_matching() {
	let mut q = query("foobar", &["foo", "xfoobarx"]);
	q.trigger = Some(String::new());
	q.any = true;
	let json = probe(&AutocompleteOptions::default(), &q).unwrap();
	assert_eq!(json, r#"{"match_start":0,"match_length":6,"candidates":["xfoobarx"]}"#);
}

#[test]
fn probe_uses_loaded_options() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(file, "trigger = \"#\"").unwrap();
	let options = AutocompleteOptions::load(file.path()).unwrap();

	let json = probe(&options, &query("see #ba", &["bar", "baz"])).unwrap();
	assert_eq!(json, r#"{"match_start":5,"match_length":2,"candidates":["bar","baz"]}"#);
}

#[test]
fn probe_rejects_invalid_pattern() {
	let options = AutocompleteOptions {
		slug_pattern: "[".to_string(),
		..Default::default()
	};
	assert!(probe(&options, &query("@x", &[])).is_err());
}

#[test]
fn primitives_serialize_for_reports() {
	use mention_primitives::{Document, Key, KeyCode, Modifiers};

	let doc = Document::new("@jo", 3);
	assert_eq!(serde_json::to_string(&doc).unwrap(), r#"{"text":"@jo","caret":3}"#);

	let key = Key::new(KeyCode::Enter).with_modifiers(Modifiers::NONE.ctrl());
	let json = serde_json::to_string(&key).unwrap();
	assert_eq!(serde_json::from_str::<Key>(&json).unwrap(), key);
}
