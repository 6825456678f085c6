use proptest::prelude::*;

use super::*;

#[test]
fn byte_offset_handles_multibyte_chars() {
	let s = "héllo @иван";
	assert_eq!(byte_offset(s, 0), 0);
	assert_eq!(byte_offset(s, 2), 3);
	assert_eq!(byte_offset(s, 100), s.len());
}

#[test]
fn char_slice_clamps_and_tolerates_inverted_ranges() {
	let s = "@иван";
	assert_eq!(char_slice(s, 1, 3), "ив");
	assert_eq!(char_slice(s, 3, 1), "");
	assert_eq!(char_slice(s, 2, 99), "ван");
}

#[test]
fn fold_case_is_case_insensitive() {
	assert_eq!(fold_case("JoHN"), "john");
	assert_eq!(fold_case("ИВАН"), "иван");
	assert!(eq_folded("Joanna", "jOANNA"));
	assert!(!eq_folded("jo", "joe"));
}

proptest! {
	#[test]
	fn fold_case_preserves_char_count(s in "\\PC{0,32}") {
		prop_assert_eq!(char_len(&fold_case(&s)), char_len(&s));
	}

	#[test]
	fn char_slice_concatenation_roundtrips(s in "\\PC{0,24}", split in 0usize..30) {
		let len = char_len(&s);
		let at = split.min(len);
		let joined = format!("{}{}", char_slice(&s, 0, at), char_slice(&s, at, len));
		prop_assert_eq!(joined, s);
	}
}
