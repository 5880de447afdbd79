// File: src/core/search.rs
use crate::core::normalizer::normalize;
use regex::RegexBuilder;

const MARK_OPEN: &str = "<mark class=\"bg-warning\">";
const MARK_CLOSE: &str = "</mark>";

/// Lowercases and normalizes a search term.
pub fn normalize_search_term(term: &str) -> String {
    normalize(&term.to_lowercase())
}

/// Whether `term` occurs in `text` once both are normalized.
pub fn search(text: &str, term: &str) -> bool {
    normalize_search_term(text).contains(&normalize_search_term(term))
}

/// Wraps every case-insensitive occurrence of the normalized term in a
/// `<mark>` element.
///
/// The pattern is built from the normalized term while the text is left
/// as-is, so text that still carries diacritics or unfolded letters around
/// the match is not highlighted.
pub fn highlight(text: &str, term: &str) -> String {
    if term.is_empty() {
        return text.to_string();
    }

    let normalized = normalize_search_term(term);
    if normalized.is_empty() {
        return text.to_string();
    }

    match RegexBuilder::new(&regex::escape(&normalized))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re
            .replace_all(text, |caps: &regex::Captures| {
                format!("{MARK_OPEN}{}{MARK_CLOSE}", &caps[0])
            })
            .into_owned(),
        Err(err) => {
            tracing::warn!("highlight pattern rejected: {}", err);
            text.to_string()
        }
    }
}
