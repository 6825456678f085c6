use super::*;

#[test]
fn parse_named_keys() {
	assert_eq!("down".parse::<KeyCode>(), Ok(KeyCode::Down));
	assert_eq!("Return".parse::<KeyCode>(), Ok(KeyCode::Enter));
	assert_eq!("esc".parse::<KeyCode>(), Ok(KeyCode::Escape));
	assert_eq!(",".parse::<KeyCode>(), Ok(KeyCode::Char(',')));
}

#[test]
fn parse_plus_is_a_char_not_a_separator() {
	assert_eq!("+".parse::<Key>(), Ok(Key::char('+')));
	assert_eq!("ctrl++".parse::<Key>(), Ok(Key::char('+').with_modifiers(Modifiers::NONE.ctrl())));
}

#[test]
fn parse_modifier_chain() {
	let key: Key = "ctrl+shift+up".parse().unwrap();
	assert_eq!(key.code, KeyCode::Up);
	assert!(key.modifiers.ctrl);
	assert!(key.modifiers.shift);
	assert!(!key.modifiers.alt);
}

#[test]
fn parse_rejects_unknown_names() {
	assert_eq!("hyper".parse::<KeyCode>(), Err(ParseKeyError("hyper".to_string())));
	assert!("meta+a".parse::<Key>().is_err());
}

#[test]
fn display_roundtrips_named_keys() {
	for code in [KeyCode::Up, KeyCode::Enter, KeyCode::Escape, KeyCode::Char(' '), KeyCode::Char('x')] {
		assert_eq!(code.to_string().parse::<KeyCode>(), Ok(code));
	}
}
