use super::blocks::{Block, kinds::Heading};

/// Structural checks every render must satisfy. Panics with the offending
/// block; intended for tests and fixtures.
pub fn check(blocks: &[Block]) {
    for b in blocks {
        match b {
            Block::Heading { level, text } => {
                assert!(
                    (1..=Heading::MAX_LEVEL as u8).contains(level),
                    "heading level out of range: {b:?}"
                );
                assert!(!text.is_empty(), "empty heading text: {b:?}");
            }
            Block::Paragraph(text) => {
                assert!(!text.trim().is_empty(), "empty paragraph: {b:?}");
            }
            Block::List { items, .. } => {
                assert!(!items.is_empty(), "list without items: {b:?}");
            }
            Block::Blockquote(_) | Block::HorizontalRule => {}
        }
    }
}
