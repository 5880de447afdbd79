// File: src/core/analysis.rs
use crate::core::normalizer::normalize;
use crate::core::script::is_arabic;
use crate::core::types::TextAnalysis;
use crate::lexicon::Lexicon;
use std::collections::HashSet;

/// Minimum raw token length for keyword extraction.
pub const DEFAULT_KEYWORD_MIN_LENGTH: usize = 3;

const ARABIC_QUESTION_MARK: char = '؟';

/// Number of whitespace-separated tokens that contain Arabic.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().filter(|word| is_arabic(word)).count()
}

/// Arabic keywords of at least `min_length` characters, normalized and
/// de-duplicated in first-seen order.
///
/// Length is measured on the raw token, before diacritics are stripped.
pub fn extract_keywords(text: &str, min_length: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    text.split_whitespace()
        .filter(|word| is_arabic(word) && word.chars().count() >= min_length)
        .map(normalize)
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

/// Question detection with the bundled interrogatives.
pub fn is_question(text: &str) -> bool {
    is_question_with(text, &Lexicon::bundled().question_words)
}

/// True if the text has an Arabic question mark or contains any of
/// `question_words`.
///
/// Matching is plain substring containment, so an interrogative embedded in
/// a longer word also counts ("من" inside "أمن").
pub fn is_question_with<S: AsRef<str>>(text: &str, question_words: &[S]) -> bool {
    text.contains(ARABIC_QUESTION_MARK)
        || question_words
            .iter()
            .any(|word| text.contains(word.as_ref()))
}

/// Runs every per-input analysis at once.
pub fn analyze(text: &str, lexicon: &Lexicon, min_length: usize) -> TextAnalysis {
    TextAnalysis {
        normalized: normalize(text),
        word_count: count_words(text),
        keywords: extract_keywords(text, min_length),
        is_question: is_question_with(text, &lexicon.question_words),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_words() {
        assert_eq!(count_words("  أفضل 10 نصائح for YouTube "), 2);
        assert_eq!(count_words(""), 0);
    }

    #[test]
    fn test_extract_keywords_dedup() {
        assert_eq!(extract_keywords("هل هل كتاب", 3), vec!["كتاب"]);
    }

    #[test]
    fn test_extract_keywords_first_seen_order() {
        let keywords = extract_keywords("مدرسة كتاب مدرسه قلم كتاب", 3);
        assert_eq!(keywords, vec!["مدرسه", "كتاب", "قلم"]);
    }

    #[test]
    fn test_extract_keywords_skips_latin_and_short() {
        let keywords = extract_keywords("video في أفضل", 3);
        assert_eq!(keywords, vec!["افضل"]);
    }

    #[test]
    fn test_is_question_mark() {
        assert!(is_question("هل هذا صحيح؟"));
        assert!(is_question("صحيح؟"));
    }

    #[test]
    fn test_is_question_word() {
        assert!(is_question("كيف تبدأ قناتك"));
        assert!(!is_question("قناة جديدة"));
    }

    #[test]
    fn test_is_question_substring_match() {
        // "من" appears inside "الأمن".
        assert!(is_question("الأمن"));
    }

    #[test]
    fn test_analyze() {
        let analysis = analyze("كيف تصنع فيديو؟", Lexicon::bundled(), 3);
        assert_eq!(analysis.word_count, 3);
        assert!(analysis.is_question);
        assert_eq!(analysis.keywords, vec!["كىف", "تصنع", "فىدىو؟"]);
    }
}
