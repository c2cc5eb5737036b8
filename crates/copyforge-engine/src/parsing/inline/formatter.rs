use std::sync::LazyLock;

use regex::Regex;

use super::kinds::{InlineKind, SPANS};

/// A compiled substitution pass: one delimiter pair, one wrapping.
struct Pass {
    kind: InlineKind,
    pattern: Regex,
}

static PASSES: LazyLock<Vec<Pass>> = LazyLock::new(|| {
    SPANS
        .iter()
        .map(|&kind| {
            let delim = regex::escape(kind.delimiter());
            Pass {
                kind,
                pattern: Regex::new(&format!("{delim}(.+?){delim}"))
                    .expect("inline span pattern is valid"),
            }
        })
        .collect()
});

/// Rewrites bold, italic and code spans inside a single line.
///
/// Passes run in [`SPANS`] order over the output of the previous pass, each
/// matching the shortest span between its delimiters. Markers consumed by
/// an earlier pass are gone before a later one runs; anything left over
/// (unbalanced `*`, a lone backtick) stays as literal text.
///
/// The result is HTML-bearing and not escaped.
pub fn format_inline(line: &str) -> String {
    let mut out = line.to_string();
    for pass in PASSES.iter() {
        if !out.contains(pass.kind.delimiter()) {
            continue;
        }
        let (open, close) = pass.kind.tags();
        out = pass
            .pattern
            .replace_all(&out, |caps: &regex::Captures<'_>| {
                format!("{open}{}{close}", &caps[1])
            })
            .into_owned();
    }
    out
}
