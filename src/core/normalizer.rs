//! Arabic text normalization
//!
//! `normalize` folds letter variants and strips tashkeel so that spelling
//! differences do not defeat comparison. `clean_text` is narrower: it only
//! tidies whitespace and removes diacritics.

/// Alef variants folded to plain alef (ا)
const ALEF_VARIANTS: &[char] = &[
    '\u{0625}', // Alef with hamza below (إ)
    '\u{0623}', // Alef with hamza above (أ)
    '\u{0622}', // Alef with madda (آ)
    '\u{0627}', // Plain alef (ا)
];

const ALEF: char = '\u{0627}';
const TEH_MARBUTA: char = '\u{0629}';
const HEH: char = '\u{0647}';
const YEH: char = '\u{064A}';
const ALEF_MAKSURA: char = '\u{0649}';
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Tashkeel: fathatan (U+064B) through sukun (U+0652).
#[inline]
pub fn is_diacritic(c: char) -> bool {
    ('\u{064B}'..='\u{0652}').contains(&c)
}

/// Whitespace plus the byte order mark, which pasted text often carries.
fn trim_edges(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
}

#[inline]
fn fold_letter(c: char) -> char {
    if ALEF_VARIANTS.contains(&c) {
        ALEF
    } else if c == TEH_MARBUTA {
        HEH
    } else if c == YEH {
        ALEF_MAKSURA
    } else {
        c
    }
}

/// Normalize Arabic text for comparison
///
/// - Replace alef variants (إ أ آ ا) with plain alef (ا)
/// - Replace ta marbuta (ة) with ha (ه)
/// - Replace ya (ي) with alef maqsura (ى)
/// - Remove diacritics (U+064B to U+0652)
/// - Trim surrounding whitespace
///
/// Folding and diacritic removal touch disjoint code points, so the steps
/// commute and the function is idempotent.
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .chars()
        .filter(|&c| !is_diacritic(c))
        .map(fold_letter)
        .collect();
    trim_edges(&folded).to_string()
}

/// Collapse whitespace runs to one space, drop diacritics, trim.
///
/// Whitespace is collapsed before diacritics are removed, so a diacritic
/// standing alone between two spaces leaves both spaces behind.
pub fn clean_text(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    let mut in_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_space {
                collapsed.push(' ');
                in_space = true;
            }
        } else {
            collapsed.push(c);
            in_space = false;
        }
    }

    let stripped: String = collapsed.chars().filter(|&c| !is_diacritic(c)).collect();
    trim_edges(&stripped).to_string()
}
