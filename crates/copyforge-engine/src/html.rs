//! Flattens rendered blocks into HTML text, one string per block.

use crate::parsing::blocks::{Block, ListKind};

/// HTML for a single block. List blocks span several lines.
pub fn block_to_html(block: &Block) -> String {
    match block {
        Block::Heading { level, text } => format!("<h{level}>{text}</h{level}>"),
        Block::Paragraph(text) => format!("<p>{text}</p>"),
        Block::Blockquote(text) => format!("<blockquote>{text}</blockquote>"),
        Block::HorizontalRule => "<hr>".to_string(),
        Block::List { kind, items } => {
            let tag = match kind {
                ListKind::Unordered => "ul",
                ListKind::Ordered => "ol",
            };
            let mut out = format!("<{tag}>\n");
            for item in items {
                out.push_str("<li>");
                out.push_str(item);
                out.push_str("</li>\n");
            }
            out.push_str(&format!("</{tag}>"));
            out
        }
    }
}

/// Newline-joined HTML for a block sequence.
pub fn render_html(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(block_to_html)
        .collect::<Vec<_>>()
        .join("\n")
}
