pub mod blocks;
pub mod frontmatter;
pub mod inline;
pub mod invariants;
pub mod lines;
pub mod reading_time;

#[cfg(test)]
mod tests;

use blocks::{Block, BlockBuilder, MarkdownLineClassifier};
use frontmatter::Header;
use lines::lines_with_spans;

/// Knobs for a render pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// HTML-escape source text before inline formatting. Off by default:
    /// article bodies are trusted, machine-generated prose.
    pub escape_html: bool,
}

/// A document split into its header and body, with the body rendered.
#[derive(Debug)]
pub struct ParsedDoc<'a> {
    pub header: Header,
    pub body: &'a str,
    pub blocks: Vec<Block>,
}

/// Renders an article body into blocks with default options.
pub fn render(body: &str) -> Vec<Block> {
    render_with(body, RenderOptions::default())
}

/// Renders an article body into blocks.
///
/// Never fails: anything the classifier does not recognise is paragraph
/// text.
pub fn render_with(body: &str, options: RenderOptions) -> Vec<Block> {
    let classifier = MarkdownLineClassifier;
    let blocks = lines_with_spans(body)
        .map(|lr| {
            log::trace!(
                "line {}..{}: {}",
                lr.span.start,
                lr.span.end,
                classifier.rule_name(lr.text)
            );
            classifier.classify(lr.text)
        })
        .fold(BlockBuilder::new(options), BlockBuilder::push)
        .finish();
    if cfg!(debug_assertions) {
        invariants::check(&blocks);
    }
    blocks
}

/// Splits off the frontmatter and renders what remains.
pub fn parse_document(document: &str, options: RenderOptions) -> ParsedDoc<'_> {
    let (header, body) = frontmatter::extract(document);
    let blocks = render_with(body, options);
    log::debug!(
        "parsed document: {} header keys, {} blocks",
        header.len(),
        blocks.len()
    );
    ParsedDoc {
        header,
        body,
        blocks,
    }
}
