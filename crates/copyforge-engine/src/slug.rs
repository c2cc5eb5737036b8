/// Longest slug kept. Longer titles are cut, then trailing dashes removed so
/// a slug never ends mid-separator.
pub const MAX_SLUG_LEN: usize = 55;

pub const FALLBACK_SLUG: &str = "untitled";

/// URL-safe slug: lowercase ASCII letters and digits, runs of anything else
/// collapsed to a single `-`.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    // Only ASCII is pushed, so byte truncation is on a char boundary.
    slug.truncate(MAX_SLUG_LEN);
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}
