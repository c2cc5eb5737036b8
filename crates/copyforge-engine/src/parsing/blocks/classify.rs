use super::{
    kinds::{BlockQuote, Heading, ListItem, ThematicBreak},
    types::ListKind,
};

/// Classification of a single line using only that line.
///
/// This is phase 1 of block parsing. No lookahead, no context: the same
/// line always classifies the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    Blank,
    Heading { level: u8, text: &'a str },
    HorizontalRule,
    Blockquote(&'a str),
    ListItem { kind: ListKind, text: &'a str },
    Text(&'a str),
}

/// One entry of the dispatch table: returns `Some` if it claims the line.
type Rule = for<'a> fn(&'a str) -> Option<LineClass<'a>>;

/// Rules in priority order, first match wins. The order is behavioural:
/// `---` must be a rule before it can be a bullet, `***` before `* `.
const RULES: [(&str, Rule); 5] = [
    ("blank", blank),
    ("heading", heading),
    ("horizontal-rule", horizontal_rule),
    ("blockquote", blockquote),
    ("list-item", list_item),
];

fn blank(line: &str) -> Option<LineClass<'_>> {
    line.is_empty().then_some(LineClass::Blank)
}

fn heading(line: &str) -> Option<LineClass<'_>> {
    Heading::parse(line).map(|(level, text)| LineClass::Heading { level, text })
}

fn horizontal_rule(line: &str) -> Option<LineClass<'_>> {
    ThematicBreak::matches(line).then_some(LineClass::HorizontalRule)
}

fn blockquote(line: &str) -> Option<LineClass<'_>> {
    BlockQuote::strip_prefix(line).map(LineClass::Blockquote)
}

fn list_item(line: &str) -> Option<LineClass<'_>> {
    ListItem::parse(line).map(|(kind, text)| LineClass::ListItem { kind, text })
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Surrounding whitespace is trimmed first, so indented markers are
    /// still recognised. Anything no rule claims is paragraph text.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let trimmed = line.trim();
        RULES
            .iter()
            .find_map(|(_, rule)| rule(trimmed))
            .unwrap_or(LineClass::Text(trimmed))
    }

    /// Name of the rule that claims `line`, or `"text"`. Used for tracing.
    pub fn rule_name(&self, line: &str) -> &'static str {
        let trimmed = line.trim();
        RULES
            .iter()
            .find(|(_, rule)| rule(trimmed).is_some())
            .map_or("text", |(name, _)| *name)
    }
}
