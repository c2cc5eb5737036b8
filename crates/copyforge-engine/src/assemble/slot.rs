/// A named hole in a page template, written `{{NAME}}`.
///
/// The set is closed: templates may only use these names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Title,
    Description,
    Date,
    Author,
    ReadingTime,
    WordCount,
    Body,
    SiteName,
    CanonicalUrl,
}

impl Slot {
    pub const ALL: [Slot; 9] = [
        Slot::Title,
        Slot::Description,
        Slot::Date,
        Slot::Author,
        Slot::ReadingTime,
        Slot::WordCount,
        Slot::Body,
        Slot::SiteName,
        Slot::CanonicalUrl,
    ];

    /// The placeholder name as written between the braces.
    pub const fn name(self) -> &'static str {
        match self {
            Slot::Title => "TITLE",
            Slot::Description => "DESCRIPTION",
            Slot::Date => "DATE",
            Slot::Author => "AUTHOR",
            Slot::ReadingTime => "READING_TIME",
            Slot::WordCount => "WORD_COUNT",
            Slot::Body => "BODY",
            Slot::SiteName => "SITE_NAME",
            Slot::CanonicalUrl => "CANONICAL_URL",
        }
    }

    pub fn from_name(name: &str) -> Option<Slot> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    /// Frontmatter keys that feed this slot, most preferred first.
    pub const fn header_keys(self) -> &'static [&'static str] {
        match self {
            Slot::Title => &["title"],
            Slot::Description => &["description", "meta_description"],
            Slot::Date => &["date"],
            Slot::Author => &["author"],
            _ => &[],
        }
    }
}
