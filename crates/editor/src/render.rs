//! Render plans handed to the presentation layer.

use std::ops::Range;

use mention_primitives::Point;

/// One visible suggestion row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRow {
	/// Candidate text.
	pub label: String,
	/// Char span of the typed slug inside `label`, for emphasis.
	pub highlight: Option<Range<usize>>,
	/// Whether this row is the active selection.
	pub active: bool,
}

/// What a strategy wants drawn this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
	/// Overlay anchor, or `None` for a dropdown laid out under the input.
	pub anchor: Option<Point>,
	/// Rows in display order.
	pub rows: Vec<RenderRow>,
	/// Scroll offset of the list in pixels.
	pub scroll_offset: f32,
}

impl RenderPlan {
	/// Index of the active row, if it is among the visible rows.
	pub fn active_row(&self) -> Option<usize> {
		self.rows.iter().position(|row| row.active)
	}

	/// Labels of all rows.
	pub fn labels(&self) -> Vec<&str> {
		self.rows.iter().map(|row| row.label.as_str()).collect()
	}
}
