use crate::parsing::blocks::types::ListKind;

/// List item markers.
pub struct ListItem;

impl ListItem {
    pub const BULLETS: [char; 3] = ['-', '*', '+'];
    pub const ORDINAL_SUFFIX: char = '.';

    /// Parses a list marker line, returning the list kind and item text.
    /// Bullets are tried before ordinals.
    pub fn parse(line: &str) -> Option<(ListKind, &str)> {
        Self::bullet(line)
            .map(|text| (ListKind::Unordered, text))
            .or_else(|| Self::ordinal(line).map(|text| (ListKind::Ordered, text)))
    }

    /// `-`, `*` or `+` followed by a space.
    fn bullet(line: &str) -> Option<&str> {
        Self::BULLETS
            .iter()
            .find_map(|&b| line.strip_prefix(b))
            .and_then(|rest| rest.strip_prefix(' '))
            .map(str::trim_start)
    }

    /// One or more ASCII digits, `.`, then a space. The digits are discarded.
    fn ordinal(line: &str) -> Option<&str> {
        let digits = line.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        line[digits..]
            .strip_prefix(Self::ORDINAL_SUFFIX)?
            .strip_prefix(' ')
            .map(str::trim_start)
    }
}
