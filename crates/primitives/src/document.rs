use crate::text::{byte_offset, char_len};

/// Snapshot of the host input: its text and the caret as a char offset.
///
/// The caret is kept within `0..=char_len(text)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
	/// Full text of the input.
	pub text: String,
	/// Caret position in chars.
	pub caret: usize,
}

impl Document {
	/// Creates a document, clamping the caret to the end of `text`.
	pub fn new(text: impl Into<String>, caret: usize) -> Self {
		let text = text.into();
		let caret = caret.min(char_len(&text));
		Self { text, caret }
	}

	/// Creates a document with the caret at the end of `text`.
	pub fn at_end(text: impl Into<String>) -> Self {
		let text = text.into();
		let caret = char_len(&text);
		Self { text, caret }
	}

	/// Length of the text in chars.
	pub fn len_chars(&self) -> usize {
		char_len(&self.text)
	}

	/// Returns true if the text is empty.
	pub fn is_empty(&self) -> bool {
		self.text.is_empty()
	}

	/// Moves the caret, clamping to the text.
	pub fn set_caret(&mut self, caret: usize) {
		self.caret = caret.min(self.len_chars());
	}

	/// Inserts `s` at the caret and moves the caret past it.
	pub fn insert(&mut self, s: &str) {
		let at = byte_offset(&self.text, self.caret);
		self.text.insert_str(at, s);
		self.caret += char_len(s);
	}

	/// Deletes the char before the caret. Returns false at the start of the text.
	pub fn backspace(&mut self) -> bool {
		if self.caret == 0 {
			return false;
		}
		let from = byte_offset(&self.text, self.caret - 1);
		let to = byte_offset(&self.text, self.caret);
		self.text.replace_range(from..to, "");
		self.caret -= 1;
		true
	}
}
