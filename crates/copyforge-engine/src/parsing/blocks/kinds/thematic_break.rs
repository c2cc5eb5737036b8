/// Horizontal rule: one rule character repeated at least three times.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const CHARS: [char; 3] = ['-', '*', '_'];
    pub const MIN_RUN: usize = 3;

    /// True if `line` (already trimmed) is a rule like `---` or `*****`.
    ///
    /// Mixed characters (`-*-`) and interior spaces (`- - -`) do not count.
    pub fn matches(line: &str) -> bool {
        let mut chars = line.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        Self::CHARS.contains(&first)
            && chars.all(|c| c == first)
            && line.len() >= Self::MIN_RUN
    }
}
