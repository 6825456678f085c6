//! Inline mention completion for text inputs.
//!
//! The pieces, leaves first:
//!
//! - [`mutation`]: writing an accepted candidate back into the text, and the
//!   one-shot spacer swap after a commit.
//! - [`locator`]: the caret and scroll collaborators a host implements.
//! - [`session`]: the open/closed state machine with selection and scrolling.
//! - [`strategy`]: the trigger-anchored overlay and the whole-field dropdown
//!   behind one [`SuggestionStrategy`] trait.
//! - [`AutocompleteField`]: the front door a host drives with input, caret,
//!   key, focus and resize events.

pub mod autocomplete;
pub mod locator;
pub mod mutation;
pub mod render;
pub mod scroll;
pub mod session;
pub mod strategy;

pub use autocomplete::{AutocompleteField, FieldHost, KeyHandling};
pub use locator::{CaretLocator, GridViewport, ScrollController, Viewport, overlay_anchor};
pub use mention_matcher::Match;
pub use mutation::{Replacement, SpacerCorrection};
pub use render::{RenderPlan, RenderRow};
pub use scroll::{Direction, ListMetrics};
pub use session::{MentionSession, OptionsRequest, SessionState};
pub use strategy::{CancelReason, FieldStrategy, InputOutcome, KeyOutcome, MentionStrategy, StrategyContext, SuggestionStrategy};
