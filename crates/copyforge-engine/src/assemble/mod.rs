//! # Page Assembly
//!
//! Wraps a rendered article body in a full HTML page. Templates use a
//! closed set of `{{SLOT}}` placeholders (see [`Slot`]); every slot has a
//! defined value even when the article's frontmatter lacks the key.
//!
//! Header-derived values are attribute-escaped. The body is inserted as-is.

pub mod slot;
pub mod template;

pub use slot::Slot;
pub use template::{PageTemplate, TemplateError};

use crate::article::RenderedArticle;

/// Title used when the frontmatter has none.
pub const DEFAULT_TITLE: &str = "Untitled";

/// Built-in page layout.
pub const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{{TITLE}} | {{SITE_NAME}}</title>
<meta name="description" content="{{DESCRIPTION}}">
<link rel="canonical" href="{{CANONICAL_URL}}">
</head>
<body>
<article>
<header>
<h1>{{TITLE}}</h1>
<p class="meta"><time>{{DATE}}</time> · {{AUTHOR}} · {{READING_TIME}} min read</p>
</header>
{{BODY}}
</article>
</body>
</html>
"#;

/// Site-level values that do not come from the article itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContext {
    pub site_name: String,
    pub canonical_url: String,
    /// Used when the frontmatter has no `author`.
    pub default_author: Option<String>,
}

impl PageTemplate {
    /// The built-in layout.
    pub fn builtin() -> Self {
        Self::parse(DEFAULT_TEMPLATE).expect("built-in template is valid")
    }

    /// Produces the full page for `article`.
    pub fn assemble(&self, article: &RenderedArticle, ctx: &PageContext) -> String {
        self.fill(|slot| slot_value(slot, article, ctx))
    }
}

fn header_value<'a>(slot: Slot, article: &'a RenderedArticle) -> Option<&'a str> {
    slot.header_keys()
        .iter()
        .find_map(|key| article.header.get(key))
        .filter(|v| !v.trim().is_empty())
}

fn escaped(value: &str) -> String {
    html_escape::encode_quoted_attribute(value).into_owned()
}

/// The value for one slot, with its default when the source is absent.
fn slot_value(slot: Slot, article: &RenderedArticle, ctx: &PageContext) -> String {
    match slot {
        Slot::Title => escaped(header_value(slot, article).unwrap_or(DEFAULT_TITLE)),
        Slot::Description | Slot::Date => escaped(header_value(slot, article).unwrap_or("")),
        Slot::Author => escaped(
            header_value(slot, article)
                .or(ctx.default_author.as_deref())
                .unwrap_or(""),
        ),
        Slot::ReadingTime => article.reading_time.to_string(),
        Slot::WordCount => article.word_count.to_string(),
        Slot::Body => article.body_html.clone(),
        Slot::SiteName => escaped(&ctx.site_name),
        Slot::CanonicalUrl => escaped(&ctx.canonical_url),
    }
}
