/// A pixel position, measured from the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
	pub top: f32,
	pub left: f32,
}

impl Point {
	pub const fn new(top: f32, left: f32) -> Self {
		Self { top, left }
	}

	/// Returns this point shifted by `dx` horizontally and `dy` vertically.
	pub fn offset(self, dx: f32, dy: f32) -> Self {
		Self {
			top: self.top + dy,
			left: self.left + dx,
		}
	}
}

/// An axis-aligned pixel rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
	pub x: f32,
	pub y: f32,
	pub width: f32,
	pub height: f32,
}

impl Rect {
	pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
		Self { x, y, width, height }
	}

	pub fn right(&self) -> f32 {
		self.x + self.width
	}

	pub fn bottom(&self) -> f32 {
		self.y + self.height
	}
}
