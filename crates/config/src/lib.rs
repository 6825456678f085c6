//! Options for inline mention completion.
//!
//! Options are written in TOML and deserialized into [`AutocompleteOptions`],
//! then validated exactly once by [`AutocompleteOptions::compile`]. Everything
//! downstream consumes the resulting [`CompiledConfig`], so a bad pattern is
//! reported before any matching happens.
//!
//! ```toml
//! trigger = "@"
//! slug-pattern = '^[A-Za-z0-9\-_]+$'
//! match-any = false
//! min-chars = 1
//! max-options = 6
//! request-only-if-no-options = true
//! space-removers = [",", ".", "!", "?"]
//! spacer = " "
//! offset-x = 0
//! offset-y = 4
//!
//! # Suggestion strategies, in precedence order.
//! strategies = ["mention", "field"]
//! key-dispatch = "all"
//! ```

pub mod compiled;
pub mod error;
pub mod options;

pub use compiled::{CompiledConfig, MutationConfig, OVERLAY_MIN_WIDTH, OVERLAY_Y_OFFSET, Placement, TriggerSpec};
pub use error::{ConfigError, Result};
pub use options::{AutocompleteOptions, DEFAULT_SLUG_PATTERN, KeyDispatch, StrategyKind};
