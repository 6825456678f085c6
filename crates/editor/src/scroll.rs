//! Scroll bookkeeping for the candidate list.

/// Direction of a selection move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
	Up,
	Down,
}

/// Measurements of the rendered candidate list, in pixels.
///
/// `active_item_top` and `input_bottom` share one coordinate space, so the
/// list's visible window spans `input_bottom..input_bottom + list_height`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ListMetrics {
	/// Height of the visible list viewport.
	pub list_height: f32,
	/// Height of one row.
	pub item_height: f32,
	/// Top edge of the newly active row.
	pub active_item_top: f32,
	/// Bottom edge of the anchor input.
	pub input_bottom: f32,
}

/// Wrapping selection move over `count` rows.
pub fn step(active: usize, count: usize, direction: Direction) -> usize {
	if count == 0 {
		return 0;
	}
	match direction {
		Direction::Down => (active + 1) % count,
		Direction::Up => (count + active % count - 1) % count,
	}
}

/// Scroll offset keeping the active row visible after a move.
///
/// `active` is the index selected by the move and `count` the number of rows.
/// Wrapping to the first row resets the offset, and wrapping to the last row
/// jumps to the end of the list.
pub fn scroll_offset(current: f32, direction: Direction, active: usize, count: usize, metrics: &ListMetrics) -> f32 {
	let next = match direction {
		Direction::Down if active == 0 => 0.0,
		Direction::Down if metrics.active_item_top >= metrics.list_height + metrics.input_bottom => {
			current + metrics.item_height
		}
		Direction::Up if active + 1 == count => metrics.item_height * count as f32 - metrics.list_height,
		Direction::Up if metrics.active_item_top <= metrics.input_bottom => current - metrics.item_height,
		_ => current,
	};
	next.max(0.0)
}
