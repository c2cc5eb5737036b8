/// A byte range `[start, end)` into the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

/// A reference to a single line of the source with its byte span.
#[derive(Debug, Clone, Copy)]
pub struct LineRef<'a> {
    /// Byte span of this line in the source (includes the newline if present).
    pub span: Span,
    /// The line text without its terminator (`\n` or `\r\n`).
    pub text: &'a str,
}

/// Returns an iterator over lines with their byte spans.
///
/// Spans keep the newline so the end of one line is the start of the next,
/// which lets the frontmatter extractor hand back the body as an exact
/// suffix of the document.
pub fn lines_with_spans(s: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let mut offset = 0usize;
    s.split_inclusive('\n').map(move |raw| {
        let start = offset;
        offset += raw.len();
        LineRef {
            span: Span { start, end: offset },
            text: raw.trim_end_matches(['\r', '\n']),
        }
    })
}
