use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static BROKEN_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<head>\w)-[ \t]*\r?\n[ \t]*(?P<tail>\w)").unwrap());

/// Normalizes text pulled out of a PDF: NFKC-folds ligatures, rejoins
/// words hyphenated across line breaks, collapses runs of whitespace and
/// keeps at most one blank line between paragraphs.
pub fn sanitize_extracted_text(raw: &str) -> String {
    let folded: String = raw.nfkc().collect();
    let rejoined = BROKEN_WORD.replace_all(&folded, "$head$tail");

    let mut out = String::with_capacity(rejoined.len());
    let mut pending_break: Option<&str> = None;

    for line in rejoined.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !out.is_empty() {
                pending_break = Some("\n\n");
            }
            continue;
        }
        if let Some(sep) = pending_break.take() {
            out.push_str(sep);
        } else if !out.is_empty() {
            out.push('\n');
        }
        push_collapsed(line, &mut out);
    }

    out
}

fn push_collapsed(line: &str, out: &mut String) {
    let mut in_gap = false;
    for ch in line.chars() {
        if ch.is_whitespace() {
            if !in_gap {
                out.push(' ');
                in_gap = true;
            }
        } else {
            out.push(ch);
            in_gap = false;
        }
    }
}
