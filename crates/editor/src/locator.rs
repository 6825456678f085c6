//! Caret and viewport collaborators.
//!
//! The core never measures text or touches a rendered list. A host supplies
//! caret coordinates through [`CaretLocator`] and list measurements through
//! [`ScrollController`], and receives scroll offsets back.

use mention_config::{OVERLAY_MIN_WIDTH, OVERLAY_Y_OFFSET, Placement};
use mention_primitives::{Point, Rect};

use crate::scroll::ListMetrics;

/// Maps a caret offset to pixel coordinates.
pub trait CaretLocator {
	/// Caret position relative to the input's origin.
	fn caret_position(&self, text: &str, caret: usize) -> Point;

	/// Bounding rectangle of the input.
	fn input_rect(&self) -> Rect;
}

/// Measures and scrolls the rendered candidate list.
pub trait ScrollController {
	/// Measurements taken with row `active` highlighted.
	fn metrics(&self, active: usize) -> ListMetrics;

	/// Applies a new scroll offset.
	fn scroll_to(&mut self, offset: f32);
}

/// A host surface providing both collaborators.
pub trait Viewport: CaretLocator + ScrollController {}

impl<T: CaretLocator + ScrollController> Viewport for T {}

/// Computes where the overlay list is anchored for a caret.
///
/// The left edge is clamped so an overlay of [`OVERLAY_MIN_WIDTH`] still fits
/// inside the input, and the top is pushed down by [`OVERLAY_Y_OFFSET`] to clear
/// the caret's line.
pub fn overlay_anchor<L: CaretLocator + ?Sized>(locator: &L, text: &str, caret: usize, placement: &Placement) -> Point {
	let caret_pos = locator.caret_position(text, caret);
	let rect = locator.input_rect();
	let top = caret_pos.top + rect.y + OVERLAY_Y_OFFSET;
	let left = (caret_pos.left + rect.x).min(rect.right() - OVERLAY_MIN_WIDTH);
	Point::new(top, left).offset(placement.offset_x, placement.offset_y)
}

/// Grid viewport for monospace surfaces such as terminals.
///
/// Caret coordinates come from the caret's line and column; the list shows
/// `visible_rows` rows of `row_height` directly below the input.
#[derive(Debug, Clone, PartialEq)]
pub struct GridViewport {
	pub input: Rect,
	pub cell_width: f32,
	pub row_height: f32,
	pub visible_rows: usize,
	/// Last offset applied through [`ScrollController::scroll_to`].
	pub scroll: f32,
}

impl GridViewport {
	pub fn new(input: Rect, cell_width: f32, row_height: f32, visible_rows: usize) -> Self {
		Self {
			input,
			cell_width,
			row_height,
			visible_rows,
			scroll: 0.0,
		}
	}
}

impl CaretLocator for GridViewport {
	fn caret_position(&self, text: &str, caret: usize) -> Point {
		let before: String = text.chars().take(caret).collect();
		let line = before.matches('\n').count();
		let column = before.rsplit('\n').next().map_or(0, |l| l.chars().count());
		Point::new(line as f32 * self.row_height, column as f32 * self.cell_width)
	}

	fn input_rect(&self) -> Rect {
		self.input
	}
}

impl ScrollController for GridViewport {
	fn metrics(&self, active: usize) -> ListMetrics {
		let input_bottom = self.input.bottom();
		ListMetrics {
			list_height: self.visible_rows as f32 * self.row_height,
			item_height: self.row_height,
			active_item_top: input_bottom + active as f32 * self.row_height - self.scroll,
			input_bottom,
		}
	}

	fn scroll_to(&mut self, offset: f32) {
		self.scroll = offset;
	}
}
