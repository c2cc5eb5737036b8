use crate::parsing::{RenderOptions, inline::format_inline};

use super::{
    classify::LineClass,
    types::{Block, ListKind},
};

/// What the builder currently has open.
///
/// A paragraph and a list are never open at the same time: text closes a
/// list, and a list item flushes a paragraph.
#[derive(Debug, Default, PartialEq, Eq)]
enum RenderState {
    #[default]
    Idle,
    InParagraph(Vec<String>),
    InUnorderedList(Vec<String>),
    InOrderedList(Vec<String>),
}

/// Phase 2 of block parsing: folds classified lines into [`Block`]s.
///
/// Single forward pass, one line at a time. Every piece of text is run
/// through the inline formatter before it is stored.
pub struct BlockBuilder {
    options: RenderOptions,
    state: RenderState,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            state: RenderState::Idle,
            out: vec![],
        }
    }

    /// Consumes one classified line. Shaped for `Iterator::fold`.
    pub fn push(mut self, class: LineClass<'_>) -> Self {
        match class {
            LineClass::Blank => self.flush_all(),
            LineClass::Heading { level, text } => {
                self.flush_all();
                let text = self.inline(text);
                self.out.push(Block::Heading { level, text });
            }
            LineClass::HorizontalRule => {
                self.flush_all();
                self.out.push(Block::HorizontalRule);
            }
            LineClass::Blockquote(text) => {
                self.flush_all();
                let text = self.inline(text);
                self.out.push(Block::Blockquote(text));
            }
            LineClass::ListItem { kind, text } => {
                self.flush_paragraph();
                let item = self.inline(text);
                self.push_item(kind, item);
            }
            LineClass::Text(text) => {
                self.flush_list();
                let line = self.inline(text);
                self.extend_paragraph(line);
            }
        }
        self
    }

    /// EOF flush: paragraph first, then list, as if one more blank line
    /// had been seen.
    pub fn finish(mut self) -> Vec<Block> {
        self.flush_all();
        self.out
    }

    fn inline(&self, text: &str) -> String {
        if self.options.escape_html {
            format_inline(&html_escape::encode_text(text))
        } else {
            format_inline(text)
        }
    }

    fn push_item(&mut self, kind: ListKind, item: String) {
        self.state = match (std::mem::take(&mut self.state), kind) {
            (RenderState::InUnorderedList(mut items), ListKind::Unordered) => {
                items.push(item);
                RenderState::InUnorderedList(items)
            }
            (RenderState::InOrderedList(mut items), ListKind::Ordered) => {
                items.push(item);
                RenderState::InOrderedList(items)
            }
            (other, kind) => {
                // A list of the other kind is closed before the new one opens.
                self.close(other);
                match kind {
                    ListKind::Unordered => RenderState::InUnorderedList(vec![item]),
                    ListKind::Ordered => RenderState::InOrderedList(vec![item]),
                }
            }
        };
    }

    fn extend_paragraph(&mut self, line: String) {
        match &mut self.state {
            RenderState::InParagraph(lines) => lines.push(line),
            _ => self.state = RenderState::InParagraph(vec![line]),
        }
    }

    fn flush_all(&mut self) {
        self.flush_paragraph();
        self.flush_list();
    }

    fn flush_paragraph(&mut self) {
        if matches!(self.state, RenderState::InParagraph(_)) {
            let prev = std::mem::take(&mut self.state);
            self.close(prev);
        }
    }

    fn flush_list(&mut self) {
        if matches!(
            self.state,
            RenderState::InUnorderedList(_) | RenderState::InOrderedList(_)
        ) {
            let prev = std::mem::take(&mut self.state);
            self.close(prev);
        }
    }

    /// Emits the block for a state that is being left.
    fn close(&mut self, state: RenderState) {
        match state {
            RenderState::Idle => {}
            RenderState::InParagraph(lines) => {
                let text = lines.join(" ");
                // Buffer may hold nothing printable; emit no empty <p>.
                if !text.trim().is_empty() {
                    self.out.push(Block::Paragraph(text));
                }
            }
            RenderState::InUnorderedList(items) => self.out.push(Block::List {
                kind: ListKind::Unordered,
                items,
            }),
            RenderState::InOrderedList(items) => self.out.push(Block::List {
                kind: ListKind::Ordered,
                items,
            }),
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn build(lines: &[LineClass<'_>]) -> Vec<Block> {
        lines
            .iter()
            .copied()
            .fold(BlockBuilder::default(), BlockBuilder::push)
            .finish()
    }

    #[test]
    fn paragraph_lines_join_with_space() {
        let blocks = build(&[LineClass::Text("one"), LineClass::Text("two")]);
        assert_eq!(blocks, vec![Block::Paragraph("one two".into())]);
    }

    #[test]
    fn switching_list_kind_closes_previous_list() {
        let blocks = build(&[
            LineClass::ListItem {
                kind: ListKind::Unordered,
                text: "a",
            },
            LineClass::ListItem {
                kind: ListKind::Ordered,
                text: "b",
            },
        ]);
        assert_eq!(
            blocks,
            vec![
                Block::List {
                    kind: ListKind::Unordered,
                    items: vec!["a".into()]
                },
                Block::List {
                    kind: ListKind::Ordered,
                    items: vec!["b".into()]
                },
            ]
        );
    }

    #[test]
    fn list_item_flushes_paragraph() {
        let blocks = build(&[
            LineClass::Text("intro"),
            LineClass::ListItem {
                kind: ListKind::Ordered,
                text: "step",
            },
        ]);
        assert_eq!(blocks[0], Block::Paragraph("intro".into()));
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn empty_text_never_becomes_a_paragraph() {
        let blocks = build(&[LineClass::Text(""), LineClass::Blank]);
        assert!(blocks.is_empty());
    }

    #[test]
    fn escaping_runs_before_inline_formatting() {
        let builder = BlockBuilder::new(RenderOptions { escape_html: true });
        let blocks = builder
            .push(LineClass::Text("<b>x</b> **y** & z"))
            .finish();
        assert_eq!(
            blocks,
            vec![Block::Paragraph(
                "&lt;b&gt;x&lt;/b&gt; <strong>y</strong> &amp; z".into()
            )]
        );
    }

    #[test]
    fn state_is_idle_after_blank() {
        let builder = BlockBuilder::default()
            .push(LineClass::Text("a"))
            .push(LineClass::Blank);
        assert_eq!(builder.state, RenderState::Idle);
        assert_eq!(builder.out.len(), 1);
    }
}
