use crate::{
    html::render_html,
    parsing::{
        RenderOptions,
        blocks::Block,
        frontmatter::Header,
        parse_document,
        reading_time::{self, DEFAULT_WORDS_PER_MINUTE},
    },
};

/// Settings for turning a raw document into a [`RenderedArticle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleOptions {
    pub render: RenderOptions,
    pub words_per_minute: u32,
}

impl Default for ArticleOptions {
    fn default() -> Self {
        Self {
            render: RenderOptions::default(),
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }
}

/// Everything the page assembler needs from one document.
#[derive(Debug, Clone)]
pub struct RenderedArticle {
    pub header: Header,
    pub blocks: Vec<Block>,
    pub body_html: String,
    /// Words in the Markdown body, frontmatter excluded.
    pub word_count: usize,
    pub reading_time: u32,
}

impl RenderedArticle {
    pub fn from_document(document: &str, options: ArticleOptions) -> Self {
        let parsed = parse_document(document, options.render);
        let body_html = render_html(&parsed.blocks);
        Self {
            word_count: reading_time::word_count(parsed.body),
            reading_time: reading_time::estimate_with_rate(parsed.body, options.words_per_minute),
            header: parsed.header,
            blocks: parsed.blocks,
            body_html,
        }
    }

    /// The frontmatter title, if any.
    pub fn title(&self) -> Option<&str> {
        self.header.get("title").filter(|t| !t.trim().is_empty())
    }
}
