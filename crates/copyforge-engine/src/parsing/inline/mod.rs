//! # Inline Formatting
//!
//! Rewrites emphasis and code spans inside one line of text. There is no
//! state across lines; block parsing calls [`format_inline`] on every piece
//! of textual content it emits.
//!
//! ## Modules
//!
//! - **`kinds`**: `InlineKind` with owned delimiters, tags and pass order
//! - **`formatter`**: `format_inline()`, the ordered substitution passes
//!
//! ## Pass Order
//!
//! `***` before `**` before `*` before `` ` ``. Code spans run last, so
//! asterisks inside backticks are still formatted.

pub mod formatter;
pub mod kinds;

pub use formatter::format_inline;
pub use kinds::InlineKind;
