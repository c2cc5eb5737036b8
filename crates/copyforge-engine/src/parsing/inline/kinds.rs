/// An inline span kind with its owned delimiter and HTML wrapping.
///
/// All knowledge about a span's syntax lives here rather than in the
/// formatter loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineKind {
    BoldItalic,
    Bold,
    Italic,
    Code,
}

/// Substitution order. Longer asterisk runs must come first or the shorter
/// patterns would eat their delimiters.
pub const SPANS: [InlineKind; 4] = [
    InlineKind::BoldItalic,
    InlineKind::Bold,
    InlineKind::Italic,
    InlineKind::Code,
];

impl InlineKind {
    pub const fn delimiter(self) -> &'static str {
        match self {
            InlineKind::BoldItalic => "***",
            InlineKind::Bold => "**",
            InlineKind::Italic => "*",
            InlineKind::Code => "`",
        }
    }

    /// Opening and closing tags wrapped around the span's inner text.
    pub const fn tags(self) -> (&'static str, &'static str) {
        match self {
            InlineKind::BoldItalic => ("<strong><em>", "</em></strong>"),
            InlineKind::Bold => ("<strong>", "</strong>"),
            InlineKind::Italic => ("<em>", "</em>"),
            InlineKind::Code => ("<code>", "</code>"),
        }
    }
}
