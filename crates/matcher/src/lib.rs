//! Slug extraction and candidate filtering.
//!
//! [`find_match`] scans backward from the caret for the configured trigger and
//! returns the span to replace together with the matching candidates.
//! [`filter_field`] is the simpler whole-value filter used by the field
//! dropdown.

pub mod filter;
pub mod trigger;

pub use filter::{filter_candidates, filter_field, highlight_span};
pub use trigger::{Match, find_match};
