//! # Block Parsing
//!
//! Two-phase, line-oriented block parsing over an article body.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is trimmed and run
//!    through an ordered table of rules; the first rule that claims it
//!    decides its `LineClass`. Unclaimed lines are paragraph text.
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` folds the
//!    classified lines, tracking one open paragraph or list, and emits
//!    `Block`s as they close
//!
//! ## Modules
//!
//! - **`types`**: `Block` and `ListKind`
//! - **`kinds`**: per-block syntax with owned markers (Heading, ThematicBreak, BlockQuote, ListItem)
//! - **`classify`**: `MarkdownLineClassifier` and its rule table
//! - **`builder`**: `BlockBuilder` state machine
//!
//! ## Key Invariants
//!
//! - Blocks come out in the order of their first source line
//! - Nothing is nested: lists are flat, quotes are one line
//! - Malformed syntax degrades to paragraph text, never to an error

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::{Block, ListKind};
