//! Key event types consumed by completion sessions.

mod modifiers;

use std::fmt;
use std::str::FromStr;

pub use modifiers::Modifiers;
use thiserror::Error;

/// Key codes the completion core distinguishes.
///
/// Everything a session does not intercept is forwarded to the host as-is,
/// so only keys a host commonly needs to see again are enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyCode {
	/// A printable character.
	Char(char),
	Up,
	Down,
	Left,
	Right,
	Home,
	End,
	/// Enter / Return.
	Enter,
	Escape,
	Tab,
	Backspace,
	Delete,
}

/// A key press with modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Key {
	pub code: KeyCode,
	pub modifiers: Modifiers,
}

impl Key {
	/// Creates a key without modifiers.
	pub const fn new(code: KeyCode) -> Self {
		Self {
			code,
			modifiers: Modifiers::NONE,
		}
	}

	/// Creates a printable character key without modifiers.
	pub const fn char(c: char) -> Self {
		Self::new(KeyCode::Char(c))
	}

	/// Returns a copy with the given modifiers.
	pub const fn with_modifiers(self, modifiers: Modifiers) -> Self {
		Self { modifiers, ..self }
	}
}

impl From<KeyCode> for Key {
	fn from(code: KeyCode) -> Self {
		Self::new(code)
	}
}

/// Error returned when a key name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown key: {0:?}")]
pub struct ParseKeyError(pub String);

impl FromStr for KeyCode {
	type Err = ParseKeyError;

	/// Parses `up`, `down`, `enter`/`return`, `esc`/`escape`, ... or a single char.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let mut chars = s.chars();
		if let (Some(c), None) = (chars.next(), chars.next()) {
			return Ok(Self::Char(c));
		}
		let code = match s.to_ascii_lowercase().as_str() {
			"up" => Self::Up,
			"down" => Self::Down,
			"left" => Self::Left,
			"right" => Self::Right,
			"home" => Self::Home,
			"end" => Self::End,
			"enter" | "return" | "ret" => Self::Enter,
			"esc" | "escape" => Self::Escape,
			"tab" => Self::Tab,
			"backspace" | "bs" => Self::Backspace,
			"del" | "delete" => Self::Delete,
			"space" => Self::Char(' '),
			_ => return Err(ParseKeyError(s.to_string())),
		};
		Ok(code)
	}
}

impl FromStr for Key {
	type Err = ParseKeyError;

	/// Parses an optional `ctrl+`/`alt+`/`shift+` prefix chain followed by a key name.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let mut modifiers = Modifiers::NONE;
		let mut rest = s;
		while let Some((head, tail)) = rest.split_once('+') {
			if tail.is_empty() {
				break;
			}
			modifiers = match head.to_ascii_lowercase().as_str() {
				"ctrl" | "c" => modifiers.ctrl(),
				"alt" | "a" => modifiers.alt(),
				"shift" | "s" => modifiers.shift(),
				_ => return Err(ParseKeyError(s.to_string())),
			};
			rest = tail;
		}
		Ok(Key::new(rest.parse()?).with_modifiers(modifiers))
	}
}

impl fmt::Display for KeyCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Char(' ') => f.write_str("space"),
			Self::Char(c) => write!(f, "{c}"),
			Self::Up => f.write_str("up"),
			Self::Down => f.write_str("down"),
			Self::Left => f.write_str("left"),
			Self::Right => f.write_str("right"),
			Self::Home => f.write_str("home"),
			Self::End => f.write_str("end"),
			Self::Enter => f.write_str("enter"),
			Self::Escape => f.write_str("esc"),
			Self::Tab => f.write_str("tab"),
			Self::Backspace => f.write_str("backspace"),
			Self::Delete => f.write_str("del"),
		}
	}
}

#[cfg(test)]
mod tests;
