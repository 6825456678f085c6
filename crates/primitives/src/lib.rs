//! Core types for inline completion: documents, char offsets, keys and geometry.

/// Editable text snapshot with a caret.
pub mod document;
/// Pixel geometry used for overlay placement.
pub mod geometry;
/// Key event types.
pub mod key;
/// Char-indexed string helpers.
pub mod text;

pub use document::Document;
pub use geometry::{Point, Rect};
pub use key::{Key, KeyCode, Modifiers, ParseKeyError};
