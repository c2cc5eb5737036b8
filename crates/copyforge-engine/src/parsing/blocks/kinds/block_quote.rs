/// Single-level blockquote with owned prefix constant.
///
/// Nested quotes are not recognised: `>> text` yields the text `> text`.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips the `>` prefix and the whitespace after it.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX).map(str::trim_start)
    }
}
