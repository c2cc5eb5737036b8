/// ATX heading with owned marker constants.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    /// Deepest heading level recognised; `#####` is plain text.
    pub const MAX_LEVEL: usize = 4;

    /// Parses `#.. text`, returning `(level, text)`.
    ///
    /// The marker run must be followed by whitespace and non-empty text.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let level = line.chars().take_while(|&c| c == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        let rest = &line[level..];
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let text = rest.trim();
        if text.is_empty() {
            return None;
        }
        Some((level as u8, text))
    }
}
