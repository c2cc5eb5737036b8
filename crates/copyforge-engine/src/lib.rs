//! Markdown rendering and static publishing for generated articles.
//!
//! The core is [`parsing`]: frontmatter extraction, a line-oriented block
//! state machine, inline span formatting and a reading-time estimate. It
//! never fails on malformed input. [`assemble`] and [`publish`] wrap the
//! rendered body into pages and hand them to a content store.

pub mod article;
pub mod assemble;
pub mod html;
pub mod io;
pub mod parsing;
pub mod publish;
pub mod slug;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use article::{ArticleOptions, RenderedArticle};
pub use assemble::{PageContext, PageTemplate, Slot, TemplateError};
pub use html::{block_to_html, render_html};
pub use parsing::{
    ParsedDoc, RenderOptions,
    blocks::{Block, ListKind},
    frontmatter::{Header, extract},
    inline::format_inline,
    parse_document,
    reading_time::{estimate, estimate_with_rate, word_count},
    render, render_with,
};
pub use publish::{
    ContentStore, FsContentStore, GenerationError, PublishError, PublishOutcome, Publisher,
    SiteInfo, Stamp, StoreError, TextGenerator, generate_and_publish,
};
pub use slug::slugify;
