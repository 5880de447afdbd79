// File: src/core/digits.rs

/// Arabic-Indic digits ٠ to ٩, indexed by value.
pub const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

/// Maps an ASCII digit to its Arabic-Indic form; other characters pass through.
#[inline]
pub fn to_arabic_indic_char(c: char) -> char {
    match c.to_digit(10) {
        Some(d) if c.is_ascii_digit() => ARABIC_INDIC_DIGITS[d as usize],
        _ => c,
    }
}

/// Value of an Arabic-Indic (U+0660..U+0669) or extended Arabic-Indic
/// (U+06F0..U+06F9) digit.
#[inline]
pub fn arabic_digit_value(c: char) -> Option<u32> {
    match c {
        '\u{0660}'..='\u{0669}' => Some(c as u32 - 0x0660),
        '\u{06F0}'..='\u{06F9}' => Some(c as u32 - 0x06F0),
        _ => None,
    }
}

pub fn to_arabic_indic(text: &str) -> String {
    text.chars().map(to_arabic_indic_char).collect()
}

/// Converts Arabic-Indic digits back to ASCII digits.
pub fn to_western_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{0660}'..='\u{0669}' => {
                char::from_digit(c as u32 - 0x0660, 10).unwrap_or(c)
            }
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_arabic_indic() {
        assert_eq!(to_arabic_indic("2024"), "٢٠٢٤");
        assert_eq!(to_arabic_indic("v1.5"), "v١.٥");
    }

    #[test]
    fn test_to_western_digits() {
        assert_eq!(to_western_digits("٢٠٢٤ م"), "2024 م");
    }

    #[test]
    fn test_extended_digit_value() {
        assert_eq!(arabic_digit_value('۷'), Some(7));
        assert_eq!(arabic_digit_value('٣'), Some(3));
        assert_eq!(arabic_digit_value('3'), None);
    }
}
