use mention_config::AutocompleteOptions;
use pretty_assertions::assert_eq;

use super::*;

fn replay(src: &str) -> Vec<String> {
	let script = Script::from_toml_str(src).unwrap();
	let config = script.compile(&AutocompleteOptions::default()).unwrap();
	run(&script, config).unwrap()
}

#[test]
fn mention_commit_and_spacer_swap() {
	let lines = replay(
		r#"
candidates = ["john", "joanna"]

[[steps]]
op = "type"
text = "@jo"

[[steps]]
op = "key"
key = "down"

[[steps]]
op = "key"
key = "enter"

[[steps]]
op = "type"
text = ","
"#,
	);
	assert_eq!(
		lines,
		vec![
			r#""@jo" caret=3 | mention: >john joanna"#,
			r#""@jo" caret=3 | mention: john >joanna"#,
			r#""@joanna " caret=8 | caret 8"#,
			r#""@joanna, " caret=9 | caret 9"#,
		]
	);
}

#[test]
fn requests_then_pool_then_escape() {
	let lines = replay(
		r#"
[[steps]]
op = "type"
text = "@x"

[[steps]]
op = "pool"
candidates = ["xavier"]

[[steps]]
op = "key"
key = "backspace"

[[steps]]
op = "key"
key = "escape"

[[steps]]
op = "click"
strategy = "mention"
row = 0
"#,
	);
	assert_eq!(
		lines,
		vec![
			r#""@x" caret=2 | request "" | request "x""#,
			r#""@x" caret=2 | mention: >xavier"#,
			r#""@" caret=1 | mention: >xavier"#,
			r#""@" caret=1"#,
			r#""@" caret=1 | click 0 ignored"#,
		]
	);
}

#[test]
fn field_dropdown_from_script_options() {
	let lines = replay(
		r#"
candidates = ["Berlin", "Bern", "Oslo"]

[options]
strategies = ["field"]

[[steps]]
op = "type"
text = "ber"

[[steps]]
op = "key"
key = "down"

[[steps]]
op = "click"
strategy = "field"
row = 0
"#,
	);
	assert_eq!(
		lines,
		vec![
			r#""ber" caret=3 | field: >Berlin Bern"#,
			r#""ber" caret=3 | field: Berlin >Bern"#,
			r#""Berlin" caret=6 | caret 6"#,
		]
	);
}

#[test]
fn caret_and_focus_steps() {
	let lines = replay(
		r#"
text = "@jo and"
candidates = ["john", "joanna"]

[[steps]]
op = "focus"

[[steps]]
op = "caret"
at = 3

[[steps]]
op = "key"
key = "end"

[[steps]]
op = "blur"
"#,
	);
	assert_eq!(
		lines,
		vec![
			r#""@jo and" caret=7 | focus true"#,
			r#""@jo and" caret=3 | mention: >john joanna"#,
			r#""@jo and" caret=7"#,
			r#""@jo and" caret=7 | focus false | blur"#,
		]
	);
}

#[test]
fn bad_key_names_the_step() {
	let script = Script::from_toml_str(
		r#"
[[steps]]
op = "resize"

[[steps]]
op = "key"
key = "hyper+q"
"#,
	)
	.unwrap();
	let config = script.compile(&AutocompleteOptions::default()).unwrap();
	let err = run(&script, config).unwrap_err();
	assert_eq!(err.to_string(), "step 2");
}

#[test]
fn unknown_script_keys_are_rejected() {
	assert!(Script::from_toml_str("candidate = []").is_err());
	assert!(Script::from_toml_str("[[steps]]\nop = \"jump\"").is_err());
}
