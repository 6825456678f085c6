//! Case-insensitive candidate filters.

use std::ops::Range;

use mention_primitives::text::{char_len, fold_case};

/// Keeps candidates containing `slug`, at index 0 unless `match_any` is set.
///
/// Comparison is case-insensitive and pool order is preserved.
pub fn filter_candidates(pool: &[String], slug: &str, match_any: bool) -> Vec<String> {
	let slug = fold_case(slug);
	pool.iter()
		.filter(|candidate| {
			let folded = fold_case(candidate);
			if match_any {
				folded.contains(&slug)
			} else {
				folded.starts_with(&slug)
			}
		})
		.cloned()
		.collect()
}

/// Keeps every candidate containing the whole field `value`, case-insensitively.
pub fn filter_field(pool: &[String], value: &str) -> Vec<String> {
	filter_candidates(pool, value, true)
}

/// Char span of the first case-insensitive occurrence of `slug` in `candidate`.
pub fn highlight_span(candidate: &str, slug: &str) -> Option<Range<usize>> {
	let folded = fold_case(candidate);
	let needle = fold_case(slug);
	let byte = folded.find(&needle)?;
	let start = char_len(&folded[..byte]);
	Some(start..start + char_len(&needle))
}
