//! Site-wide pages rebuilt from whatever the store holds: `sitemap.xml` and
//! the article listing. Both are derived from file names alone.

use std::sync::LazyLock;

use regex::Regex;
use relative_path::RelativePath;

pub const SITEMAP_PATH: &str = "sitemap.xml";
pub const INDEX_FILE: &str = "index.html";

/// Folder holding tool pages published by other means; listed in the
/// sitemap at a higher priority than articles.
pub const TOOLS_FOLDER: &str = "tools";

/// Files in a content folder that are not pages.
const NOT_PAGES: [&str; 3] = [".gitkeep", "README.md", INDEX_FILE];

static DATE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2})-").expect("date prefix pattern is valid")
});

/// Whether a stored file is a content page.
pub fn is_page(path: &RelativePath) -> bool {
    path.file_name()
        .is_some_and(|name| !NOT_PAGES.contains(&name))
}

/// File name without its extension or `YYYY-MM-DD-` prefix.
pub fn page_slug(file_name: &str) -> &str {
    let stem = file_name
        .strip_suffix(".html")
        .or_else(|| file_name.strip_suffix(".md"))
        .unwrap_or(file_name);
    match DATE_PREFIX.find(stem) {
        Some(m) => &stem[m.end()..],
        None => stem,
    }
}

/// The `YYYY-MM-DD` a file name starts with, if any.
pub fn page_date(file_name: &str) -> Option<&str> {
    DATE_PREFIX
        .captures(file_name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// `pricing-101-guide` -> `Pricing 101 Guide`.
pub fn slug_to_title(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Public URL of a stored page. Root-relative when no base URL is set.
pub fn page_url(base_url: &str, path: &RelativePath) -> String {
    format!("{}/{path}", base_url.trim_end_matches('/'))
}

fn priority(path: &RelativePath) -> &'static str {
    match path.iter().next() {
        Some(TOOLS_FOLDER) => "0.8",
        _ => "0.6",
    }
}

/// `sitemap.xml` listing the site root and every page, stamped `lastmod`.
pub fn build_sitemap<P: AsRef<RelativePath>>(pages: &[P], base_url: &str, lastmod: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let mut out = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    push_url(&mut out, &format!("{base}/"), lastmod, "daily", "1.0");
    for page in pages {
        let page = page.as_ref();
        push_url(&mut out, &page_url(base, page), lastmod, "monthly", priority(page));
    }
    out.push_str("</urlset>");
    out
}

fn push_url(out: &mut String, loc: &str, lastmod: &str, changefreq: &str, priority: &str) {
    out.push_str("  <url>\n");
    out.push_str(&format!("    <loc>{}</loc>\n", html_escape::encode_text(loc)));
    out.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
    out.push_str(&format!("    <changefreq>{changefreq}</changefreq>\n"));
    out.push_str(&format!("    <priority>{priority}</priority>\n"));
    out.push_str("  </url>\n");
}

/// The article listing, newest first. Date-prefixed names sort by date;
/// titles come from the slug since pages are not re-read.
pub fn build_articles_index<P: AsRef<RelativePath>>(
    pages: &[P],
    base_url: &str,
    site_name: &str,
) -> String {
    let mut articles: Vec<&RelativePath> = pages.iter().map(AsRef::as_ref).collect();
    articles.sort_by(|a, b| b.file_name().cmp(&a.file_name()));

    let mut items = String::new();
    for path in articles {
        let name = path.file_name().unwrap_or_default();
        let title = slug_to_title(page_slug(name));
        items.push_str("\n    <li class=\"item\">\n");
        items.push_str(&format!(
            "      <a href=\"{}\">{}</a>\n",
            html_escape::encode_quoted_attribute(&page_url(base_url, path)),
            html_escape::encode_text(&title)
        ));
        if let Some(date) = page_date(name) {
            items.push_str(&format!("      <span class=\"date\">{date}</span>\n"));
        }
        items.push_str("    </li>");
    }
    if items.is_empty() {
        items.push_str("\n    <li>No articles yet. Check back soon.</li>");
    }

    let title = match site_name {
        "" => "Articles".to_string(),
        name => format!("Articles | {}", html_escape::encode_text(name)),
    };
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         </head>\n\
         <body>\n\
         <a href=\"/\" class=\"back\">Home</a>\n\
         <h1>Articles</h1>\n\
         <ul>{items}\n\
         </ul>\n\
         </body>\n\
         </html>\n"
    )
}
