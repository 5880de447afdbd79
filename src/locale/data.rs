// File: src/locale/data.rs

/// Number and calendar conventions for one locale tag.
#[derive(Debug)]
pub struct LocaleData {
    pub tag: &'static str,
    /// Render digits as Arabic-Indic (٠١٢…) instead of ASCII.
    pub native_digits: bool,
    pub group_separator: char,
    pub decimal_separator: char,
    pub percent_sign: &'static str,
    pub minus_sign: &'static str,
    pub not_a_number: &'static str,
    pub am: &'static str,
    pub pm: &'static str,
    pub months: [&'static str; 12],
    pub short_months: [&'static str; 12],
    pub currency_symbols: &'static [(&'static str, &'static str)],
}

const ARABIC_MONTHS: [&str; 12] = [
    "يناير", "فبراير", "مارس", "أبريل", "مايو", "يونيو",
    "يوليو", "أغسطس", "سبتمبر", "أكتوبر", "نوفمبر", "ديسمبر",
];

// Trailing U+200F keeps the dotted abbreviation attached on the RTL side.
const ARABIC_CURRENCY_SYMBOLS: &[(&str, &str)] = &[
    ("SAR", "ر.س.\u{200F}"),
    ("EGP", "ج.م.\u{200F}"),
    ("AED", "د.إ.\u{200F}"),
    ("KWD", "د.ك.\u{200F}"),
    ("QAR", "ر.ق.\u{200F}"),
    ("BHD", "د.ب.\u{200F}"),
    ("OMR", "ر.ع.\u{200F}"),
    ("JOD", "د.أ.\u{200F}"),
    ("USD", "US$"),
    ("EUR", "€"),
    ("GBP", "UK£"),
];

const fn arabic(tag: &'static str) -> LocaleData {
    LocaleData {
        tag,
        native_digits: true,
        group_separator: '\u{066C}',
        decimal_separator: '\u{066B}',
        percent_sign: "\u{066A}\u{061C}",
        minus_sign: "\u{061C}-",
        not_a_number: "ليس رقمًا",
        am: "ص",
        pm: "م",
        months: ARABIC_MONTHS,
        // CLDR Arabic abbreviated month names are the full names.
        short_months: ARABIC_MONTHS,
        currency_symbols: ARABIC_CURRENCY_SYMBOLS,
    }
}

static SUPPORTED: [LocaleData; 3] = [arabic("ar-SA"), arabic("ar-EG"), arabic("ar")];

pub fn default_locale() -> &'static LocaleData {
    &SUPPORTED[0]
}

/// Looks up a locale by tag; `_` is accepted in place of `-`.
pub fn lookup(tag: &str) -> Option<&'static LocaleData> {
    let tag = tag.trim().replace('_', "-");
    SUPPORTED.iter().find(|data| data.tag.eq_ignore_ascii_case(&tag))
}

/// ISO 4217 minor units; two unless listed.
pub fn currency_fraction_digits(code: &str) -> usize {
    match code {
        "JPY" | "KRW" | "CLP" | "ISK" | "VND" => 0,
        "KWD" | "BHD" | "OMR" | "JOD" | "TND" | "LYD" | "IQD" => 3,
        _ => 2,
    }
}

impl LocaleData {
    pub fn currency_symbol(&self, code: &str) -> Option<&'static str> {
        self.currency_symbols
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, symbol)| *symbol)
    }
}
