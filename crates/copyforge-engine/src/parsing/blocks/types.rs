/// Which kind of list a run of list lines belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `-`, `*` or `+` markers, rendered as `<ul>`.
    Unordered,
    /// `1.` style markers, rendered as `<ol>` with native numbering.
    Ordered,
}

/// One rendered top-level block.
///
/// Text fields already hold inline-formatted HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `#` through `####`.
    Heading { level: u8, text: String },
    /// Consecutive plain lines joined with a single space.
    Paragraph(String),
    /// A run of list lines of the same kind, one entry per item.
    List { kind: ListKind, items: Vec<String> },
    /// A single `>` line.
    Blockquote(String),
    /// `---`, `***` or `___` (three or more).
    HorizontalRule,
}

impl Block {
    /// Short name used in logs and the `stats` command.
    pub fn name(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "heading",
            Block::Paragraph(_) => "paragraph",
            Block::List {
                kind: ListKind::Unordered,
                ..
            } => "unordered-list",
            Block::List {
                kind: ListKind::Ordered,
                ..
            } => "ordered-list",
            Block::Blockquote(_) => "blockquote",
            Block::HorizontalRule => "horizontal-rule",
        }
    }
}
