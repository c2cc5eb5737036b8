use chrono::NaiveDate;

use crate::parsing::frontmatter::Header;

/// Date format used in file names, page headers and the sitemap.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Values the publisher decides for an article, whatever its source says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    pub date: String,
    pub slug: String,
    pub word_count: usize,
}

impl Stamp {
    pub fn new(date: NaiveDate, slug: impl Into<String>, word_count: usize) -> Self {
        Self {
            date: date.format(DATE_FORMAT).to_string(),
            slug: slug.into(),
            word_count,
        }
    }

    /// Store file name: `<date>-<slug>.html`.
    pub fn file_name(&self) -> String {
        format!("{}-{}.html", self.date, self.slug)
    }

    /// Replaces `{{DATE}}`, `{{SLUG}}` and `{{WORD_COUNT}}` anywhere in the
    /// document. Other `{{...}}` text is left alone.
    pub fn fill_placeholders(&self, document: &str) -> String {
        document
            .replace("{{DATE}}", &self.date)
            .replace("{{SLUG}}", &self.slug)
            .replace("{{WORD_COUNT}}", &self.word_count.to_string())
    }

    /// Overwrites `date` and `word_count` in the header. Existing keys keep
    /// their position; missing ones are appended.
    pub fn apply_to(&self, header: &mut Header) {
        header.insert("date", self.date.as_str());
        header.insert("word_count", self.word_count.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::frontmatter::extract;
    use pretty_assertions::assert_eq;

    fn stamp() -> Stamp {
        Stamp::new(
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            "pricing-101",
            812,
        )
    }

    #[test]
    fn file_name_is_date_prefixed() {
        assert_eq!(stamp().file_name(), "2026-03-01-pricing-101.html");
    }

    #[test]
    fn placeholders_are_filled() {
        let doc = "---\ndate: \"{{DATE}}\"\n---\nSee /{{SLUG}} ({{WORD_COUNT}} words). {{OTHER}}";
        assert_eq!(
            stamp().fill_placeholders(doc),
            "---\ndate: \"2026-03-01\"\n---\nSee /pricing-101 (812 words). {{OTHER}}"
        );
    }

    #[test]
    fn header_values_are_overwritten_in_place() {
        let (mut header, _) = extract("---\ntitle: T\ndate: \"1999-01-01\"\nword_count: 0\n---\n");
        stamp().apply_to(&mut header);

        let entries: Vec<_> = header.iter().collect();
        assert_eq!(
            entries,
            vec![
                ("title", "T"),
                ("date", "2026-03-01"),
                ("word_count", "812"),
            ]
        );
    }

    #[test]
    fn missing_header_values_are_added() {
        let mut header = Header::new();
        stamp().apply_to(&mut header);
        assert_eq!(header.get("date"), Some("2026-03-01"));
        assert_eq!(header.get("word_count"), Some("812"));
    }
}
