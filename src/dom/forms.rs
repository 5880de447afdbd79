// File: src/dom/forms.rs
//! Channel and title fields of the analyzer forms.

use crate::dom::DomAdapter;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

pub const CHANNEL_INPUT_ID: &str = "channel_input";
pub const TITLE_LENGTH_ID: &str = "titleLength";
pub const LENGTH_INDICATOR_ID: &str = "lengthIndicator";

const CHANNEL_PATTERNS: &[&str] = &[
    r"^https?://(www\.)?youtube\.com/@[A-Za-z0-9_-]+",
    r"^https?://(www\.)?youtube\.com/c/[A-Za-z0-9_-]+",
    r"^https?://(www\.)?youtube\.com/user/[A-Za-z0-9_-]+",
    r"^https?://(www\.)?youtube\.com/channel/UC[A-Za-z0-9_-]{22}",
    r"^@[A-Za-z0-9_-]+$",
    r"^UC[A-Za-z0-9_-]{22}$",
    r"^[A-Za-z0-9_-]+$",
];

fn channel_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        CHANNEL_PATTERNS
            .iter()
            .filter_map(|pattern| match Regex::new(pattern) {
                Ok(re) => Some(re),
                Err(err) => {
                    tracing::warn!("invalid channel pattern {}: {}", pattern, err);
                    None
                }
            })
            .collect()
    })
}

/// Channel URL, `@handle`, channel id or bare username.
pub fn is_valid_channel_input(input: &str) -> bool {
    let input = input.trim();
    !input.is_empty() && channel_patterns().iter().any(|re| re.is_match(input))
}

/// Prefixes a bare username with `@`; channel ids and URLs pass through.
pub fn format_channel_input(input: &str) -> String {
    let input = input.trim();
    let bare_username = !input.is_empty()
        && input
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if bare_username && !input.starts_with("UC") {
        format!("@{input}")
    } else {
        input.to_string()
    }
}

/// How a title's length compares to the 40–70 character sweet spot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleLengthAssessment {
    pub length: usize,
    pub badge_class: &'static str,
    pub indicator_class: &'static str,
    pub indicator_text: &'static str,
}

pub fn assess_title_length(title: &str) -> TitleLengthAssessment {
    let length = title.chars().count();
    let (badge_class, indicator_class, indicator_text) = match length {
        40..=70 => ("bg-success", "text-success", "طول مثالي"),
        30..=39 => ("bg-warning", "text-warning", "قصير نسبياً"),
        71..=80 => ("bg-warning", "text-warning", "طويل نسبياً"),
        0..=29 => ("bg-danger", "text-danger", "قصير جداً"),
        _ => ("bg-danger", "text-danger", "طويل جداً"),
    };
    TitleLengthAssessment {
        length,
        badge_class,
        indicator_class,
        indicator_text,
    }
}

/// Marks `#channel_input` valid or invalid; an empty value clears both marks.
pub fn validate_channel_field<D: DomAdapter>(dom: &D, value: &str) {
    let Some(field) = dom.element_by_id(CHANNEL_INPUT_ID) else {
        return;
    };

    if value.is_empty() {
        dom.remove_class(&field, "is-invalid");
        dom.remove_class(&field, "is-valid");
    } else if is_valid_channel_input(value) {
        dom.remove_class(&field, "is-invalid");
        dom.add_class(&field, "is-valid");
    } else {
        dom.remove_class(&field, "is-valid");
        dom.add_class(&field, "is-invalid");
    }
}

/// Updates the length badge and its indicator for the current title.
pub fn update_title_metrics<D: DomAdapter>(dom: &D, title: &str) -> TitleLengthAssessment {
    let assessment = assess_title_length(title);

    if let Some(badge) = dom.element_by_id(TITLE_LENGTH_ID) {
        dom.set_text_content(&badge, &assessment.length.to_string());
        dom.set_attribute(&badge, "class", &format!("badge {}", assessment.badge_class));

        if let Some(indicator) = dom.element_by_id(LENGTH_INDICATOR_ID) {
            dom.set_text_content(&indicator, assessment.indicator_text);
            dom.set_attribute(&indicator, "class", assessment.indicator_class);
        }
    }
    assessment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::HtmlDocument;

    #[test]
    fn test_valid_channel_inputs() {
        assert!(is_valid_channel_input("https://www.youtube.com/@arabic_tech"));
        assert!(is_valid_channel_input("https://youtube.com/c/MyChannel"));
        assert!(is_valid_channel_input(" @handle-1 "));
        assert!(is_valid_channel_input("UCabcdefghijklmnopqrstuv"));
        assert!(is_valid_channel_input("username"));
    }

    #[test]
    fn test_invalid_channel_inputs() {
        assert!(!is_valid_channel_input(""));
        assert!(!is_valid_channel_input("   "));
        assert!(!is_valid_channel_input("قناة عربية"));
        assert!(!is_valid_channel_input("https://vimeo.com/user"));
    }

    #[test]
    fn test_format_channel_input() {
        assert_eq!(format_channel_input(" techguy "), "@techguy");
        assert_eq!(format_channel_input("@techguy"), "@techguy");
        assert_eq!(format_channel_input("UCabcdefghijklmnopqrstuv"), "UCabcdefghijklmnopqrstuv");
        assert_eq!(
            format_channel_input("https://youtube.com/@x"),
            "https://youtube.com/@x"
        );
    }

    #[test]
    fn test_assess_title_length_bands() {
        assert_eq!(assess_title_length(&"a".repeat(50)).badge_class, "bg-success");
        assert_eq!(assess_title_length(&"a".repeat(35)).indicator_text, "قصير نسبياً");
        assert_eq!(assess_title_length(&"a".repeat(75)).indicator_text, "طويل نسبياً");
        assert_eq!(assess_title_length(&"a".repeat(10)).indicator_text, "قصير جداً");
        assert_eq!(assess_title_length(&"a".repeat(90)).indicator_text, "طويل جداً");
    }

    #[test]
    fn test_title_length_counts_characters() {
        let title = "كيف تبدأ قناة يوتيوب ناجحة في عام ٢٠٢٤ خطوة بخطوة";
        assert_eq!(assess_title_length(title).length, title.chars().count());
    }

    #[test]
    fn test_validate_channel_field() {
        let doc = HtmlDocument::parse(r#"<input id="channel_input" class="form-control">"#).unwrap();
        let field = doc.element_by_id(CHANNEL_INPUT_ID).unwrap();

        validate_channel_field(&doc, "not a channel!");
        assert!(doc.has_class(&field, "is-invalid"));

        validate_channel_field(&doc, "@valid");
        assert!(doc.has_class(&field, "is-valid"));
        assert!(!doc.has_class(&field, "is-invalid"));

        validate_channel_field(&doc, "");
        assert!(!doc.has_class(&field, "is-valid"));
        assert!(doc.has_class(&field, "form-control"));
    }

    #[test]
    fn test_update_title_metrics() {
        let doc = HtmlDocument::parse(
            r#"<span id="titleLength" class="badge bg-secondary">0</span><small id="lengthIndicator"></small>"#,
        )
        .unwrap();

        update_title_metrics(&doc, "قصير");
        let badge = doc.element_by_id(TITLE_LENGTH_ID).unwrap();
        let indicator = doc.element_by_id(LENGTH_INDICATOR_ID).unwrap();
        assert_eq!(doc.text_content(&badge), "4");
        assert_eq!(doc.attribute(&badge, "class").as_deref(), Some("badge bg-danger"));
        assert_eq!(doc.text_content(&indicator), "قصير جداً");
        assert_eq!(doc.attribute(&indicator, "class").as_deref(), Some("text-danger"));
    }
}
