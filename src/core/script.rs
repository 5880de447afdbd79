//! Script detection for Arabic and Latin text.
//!
//! All checks work on Unicode scalar values, so presentation forms and
//! extended Arabic blocks are recognised as well as the base block.

use crate::core::types::{Script, TextDirection};

/// Share of Arabic characters above which text counts as primarily Arabic.
const PRIMARY_ARABIC_RATIO: f64 = 0.5;

/// Check if a character falls in one of the Arabic blocks.
#[inline]
pub fn is_arabic_char(c: char) -> bool {
    matches!(c as u32,
        0x0600..=0x06FF |  // Arabic
        0x0750..=0x077F |  // Arabic Supplement
        0x08A0..=0x08FF |  // Arabic Extended-A
        0xFB50..=0xFDFF |  // Arabic Presentation Forms-A
        0xFE70..=0xFEFF    // Arabic Presentation Forms-B
    )
}

/// Narrower set accepted in personal names: no presentation forms.
#[inline]
fn is_arabic_name_char(c: char) -> bool {
    matches!(c as u32, 0x0600..=0x06FF | 0x0750..=0x077F)
}

/// True if any character of `text` is Arabic.
pub fn is_arabic(text: &str) -> bool {
    text.chars().any(is_arabic_char)
}

/// True if more than half of the non-whitespace characters are Arabic.
///
/// Empty and whitespace-only input is never primarily Arabic.
pub fn is_primarily_arabic(text: &str) -> bool {
    let mut arabic = 0usize;
    let mut total = 0usize;
    for c in text.chars().filter(|c| !c.is_whitespace()) {
        total += 1;
        if is_arabic_char(c) {
            arabic += 1;
        }
    }

    if arabic == 0 || total == 0 {
        return false;
    }
    (arabic as f64 / total as f64) > PRIMARY_ARABIC_RATIO
}

/// True if the text has an ASCII letter and no Arabic at all.
/// Mixed text is classified as Arabic.
pub fn is_latin(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_alphabetic()) && !is_arabic(text)
}

pub fn classify(text: &str) -> Script {
    if is_arabic(text) {
        Script::Arabic
    } else if is_latin(text) {
        Script::Latin
    } else {
        Script::Neutral
    }
}

/// Direction an input field should switch to for its current value.
/// `None` means leave the field as it is.
pub fn input_direction(text: &str) -> Option<TextDirection> {
    match classify(text) {
        Script::Arabic => Some(TextDirection::Rtl),
        Script::Latin => Some(TextDirection::Ltr),
        Script::Neutral => None,
    }
}

/// A name made only of Arabic letters and spaces.
pub fn is_valid_arabic_name(name: &str) -> bool {
    let trimmed = name.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| is_arabic_name_char(c) || c.is_whitespace())
}
