//! Char-indexed string helpers.
//!
//! Every offset handled by the completion core counts Unicode scalar values,
//! never bytes. These helpers are the only place the two are converted.

/// Returns the number of chars in `s`.
pub fn char_len(s: &str) -> usize {
	s.chars().count()
}

/// Converts a char index into a byte offset, clamping to the end of `s`.
pub fn byte_offset(s: &str, char_idx: usize) -> usize {
	s.char_indices().nth(char_idx).map_or(s.len(), |(byte, _)| byte)
}

/// Returns the substring covering chars `start..end`, clamped to `s`.
///
/// An inverted range yields an empty slice.
pub fn char_slice(s: &str, start: usize, end: usize) -> &str {
	if end <= start {
		return "";
	}
	let from = byte_offset(s, start);
	let to = byte_offset(s, end);
	&s[from..to]
}

/// Simple case folding that keeps char offsets stable.
///
/// Each char maps to the first char of its lowercase form, so the folded
/// string has exactly as many chars as the input.
pub fn fold_case(s: &str) -> String {
	s.chars().map(fold_char).collect()
}

/// Folds a single char, see [`fold_case`].
pub fn fold_char(c: char) -> char {
	c.to_lowercase().next().unwrap_or(c)
}

/// Case-insensitive equality under [`fold_case`].
pub fn eq_folded(a: &str, b: &str) -> bool {
	a.chars().map(fold_char).eq(b.chars().map(fold_char))
}

#[cfg(test)]
mod tests;
