// File: src/correction.rs
use crate::error::{ArabicError, Result};
use crate::lexicon::Lexicon;
use regex::{Regex, RegexBuilder};
use std::sync::OnceLock;

/// Applies the lexicon's correction and suggestion tables.
///
/// Suggestion keys are compiled once into case-insensitive patterns. Both
/// tables are applied entry by entry in declared order, each entry rewriting
/// the output of the previous one.
#[derive(Debug, Clone)]
pub struct TextRewriter {
    corrections: Vec<(String, String)>,
    suggestions: Vec<(Regex, String)>,
}

impl TextRewriter {
    pub fn new(lexicon: &Lexicon) -> Result<Self> {
        let suggestions = lexicon
            .suggestions
            .iter()
            .map(|(english, arabic)| {
                RegexBuilder::new(&regex::escape(english))
                    .case_insensitive(true)
                    .build()
                    .map(|re| (re, arabic.clone()))
                    .map_err(|e| ArabicError::Config(format!("suggestion key {english:?}: {e}")))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            corrections: lexicon.corrections.clone(),
            suggestions,
        })
    }

    /// Case-sensitive, global replacement of every misspelling.
    pub fn correct_spelling(&self, text: &str) -> String {
        let mut corrected = text.to_string();
        for (wrong, right) in &self.corrections {
            if wrong.is_empty() {
                continue;
            }
            corrected = corrected.replace(wrong.as_str(), right);
        }
        corrected
    }

    /// Case-insensitive, global replacement of English terms with Arabic ones.
    pub fn suggest_alternatives(&self, text: &str) -> String {
        let mut suggested = text.to_string();
        for (pattern, arabic) in &self.suggestions {
            suggested = pattern
                .replace_all(&suggested, regex::NoExpand(arabic.as_str()))
                .into_owned();
        }
        suggested
    }
}

fn bundled_rewriter() -> Option<&'static TextRewriter> {
    static BUNDLED: OnceLock<Option<TextRewriter>> = OnceLock::new();
    BUNDLED
        .get_or_init(|| match TextRewriter::new(Lexicon::bundled()) {
            Ok(rewriter) => Some(rewriter),
            Err(err) => {
                tracing::warn!("bundled lexicon failed to compile: {}", err);
                None
            }
        })
        .as_ref()
}

/// Spelling correction with the bundled table.
pub fn correct_spelling(text: &str) -> String {
    match bundled_rewriter() {
        Some(rewriter) => rewriter.correct_spelling(text),
        None => text.to_string(),
    }
}

/// English → Arabic suggestions with the bundled table.
pub fn suggest_alternatives(text: &str) -> String {
    match bundled_rewriter() {
        Some(rewriter) => rewriter.suggest_alternatives(text),
        None => text.to_string(),
    }
}
