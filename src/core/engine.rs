use crate::config::EngineConfig;
use crate::core::types::{TextAnalysis, TextDirection};
use crate::core::{analysis, digits, normalizer, script, search};
use crate::correction::TextRewriter;
use crate::error::Result;
use crate::keyboard::{KeyboardLayout, KeyboardMode, KeyboardState};
use crate::lexicon::Lexicon;
use crate::locale::{format_compact, parse_date_input, DateStyle, LocaleFormatter};
use crate::persistence::{load_from_disk, save_to_disk};
use std::path::{Path, PathBuf};

/// One entry point for text utilities, validation, search, formatting and
/// the keyboard toggle, built from an explicit [`EngineConfig`].
///
/// The only mutable state is the keyboard mode.
#[derive(Debug, Clone)]
pub struct ArabicEngine {
    config: EngineConfig,
    lexicon: Lexicon,
    rewriter: TextRewriter,
    formatter: LocaleFormatter,
    keyboard: KeyboardState,
    state_path: Option<PathBuf>,
}

impl ArabicEngine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        let lexicon = config.load_lexicon()?;
        let rewriter = TextRewriter::new(&lexicon)?;
        let formatter = LocaleFormatter::new(&config.locale)?.with_default_currency(&config.currency)?;
        tracing::debug!(locale = %config.locale, currency = %config.currency, "engine ready");
        Ok(Self {
            config,
            lexicon,
            rewriter,
            formatter,
            keyboard: KeyboardState::default(),
            state_path: None,
        })
    }

    /// Restores the engine saved at `path`, or starts from defaults when the
    /// file is missing or unreadable. Later [`save_state`](Self::save_state)
    /// calls write back to `path`.
    pub fn from_file_or_new(path: &Path) -> Result<Self> {
        Self::from_file_or(path, EngineConfig::default())
    }

    /// Like [`from_file_or_new`](Self::from_file_or_new), starting from
    /// `config` when there is nothing to restore.
    pub fn from_file_or(path: &Path, config: EngineConfig) -> Result<Self> {
        let mut engine = match load_from_disk(path) {
            Ok(engine) => engine,
            Err(err) => {
                if path.exists() {
                    tracing::warn!("could not restore state from {}: {}", path.display(), err);
                }
                Self::new(config)?
            }
        };
        engine.state_path = Some(path.to_path_buf());
        Ok(engine)
    }

    pub fn save_state(&self) -> Result<()> {
        match &self.state_path {
            Some(path) => save_to_disk(self, path),
            None => Ok(()),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn formatter(&self) -> &LocaleFormatter {
        &self.formatter
    }

    // Utils

    pub fn is_arabic(&self, text: &str) -> bool {
        script::is_arabic(text)
    }

    pub fn is_primarily_arabic(&self, text: &str) -> bool {
        script::is_primarily_arabic(text)
    }

    pub fn is_latin(&self, text: &str) -> bool {
        script::is_latin(text)
    }

    /// Direction an input holding `text` should take, if its script decides one.
    pub fn text_direction(&self, text: &str) -> Option<TextDirection> {
        script::input_direction(text)
    }

    pub fn normalize(&self, text: &str) -> String {
        normalizer::normalize(text)
    }

    pub fn clean_text(&self, text: &str) -> String {
        normalizer::clean_text(text)
    }

    pub fn count_words(&self, text: &str) -> usize {
        analysis::count_words(text)
    }

    pub fn extract_keywords(&self, text: &str) -> Vec<String> {
        analysis::extract_keywords(text, self.config.keyword_min_length)
    }

    pub fn is_question(&self, text: &str) -> bool {
        analysis::is_question_with(text, &self.lexicon.question_words)
    }

    pub fn analyze(&self, text: &str) -> TextAnalysis {
        analysis::analyze(text, &self.lexicon, self.config.keyword_min_length)
    }

    pub fn to_arabic_indic(&self, text: &str) -> String {
        digits::to_arabic_indic(text)
    }

    pub fn to_western_digits(&self, text: &str) -> String {
        digits::to_western_digits(text)
    }

    // Validation

    pub fn is_valid_arabic_name(&self, name: &str) -> bool {
        script::is_valid_arabic_name(name)
    }

    pub fn correct_spelling(&self, text: &str) -> String {
        self.rewriter.correct_spelling(text)
    }

    pub fn suggest_alternatives(&self, text: &str) -> String {
        self.rewriter.suggest_alternatives(text)
    }

    // Search

    pub fn search(&self, text: &str, term: &str) -> bool {
        search::search(text, term)
    }

    pub fn highlight(&self, text: &str, term: &str) -> String {
        search::highlight(text, term)
    }

    // Formatting

    pub fn format_number(&self, value: f64) -> String {
        self.formatter.format_number(value)
    }

    pub fn format_percent(&self, value: f64) -> String {
        self.formatter.format_percent(value)
    }

    /// Formats in `currency`, or in the configured currency when `None`.
    pub fn format_currency(&self, amount: f64, currency: Option<&str>) -> Result<String> {
        match currency {
            Some(code) => self.formatter.format_currency(amount, code),
            None => Ok(self.formatter.format_default_currency(amount)),
        }
    }

    pub fn format_date(&self, input: &str, style: DateStyle) -> Result<String> {
        let date = parse_date_input(input)?;
        Ok(self.formatter.format_date(&date, style))
    }

    pub fn format_time(&self, input: &str) -> Result<String> {
        let time = parse_date_input(input)?;
        Ok(self.formatter.format_time(&time))
    }

    pub fn format_compact(&self, value: f64) -> String {
        format_compact(value)
    }

    // Keyboard

    pub fn keyboard_mode(&self) -> KeyboardMode {
        self.keyboard.mode()
    }

    pub fn set_keyboard_mode(&mut self, mode: KeyboardMode) {
        self.keyboard = KeyboardState::new(mode);
    }

    pub fn toggle_keyboard(&mut self) -> KeyboardLayout {
        self.keyboard.toggle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArabicError;

    fn engine() -> ArabicEngine {
        ArabicEngine::new(EngineConfig::default()).unwrap()
    }

    #[test]
    fn test_unsupported_locale_rejected() {
        let config = EngineConfig {
            locale: "fr-FR".to_string(),
            ..EngineConfig::default()
        };
        assert!(matches!(
            ArabicEngine::new(config),
            Err(ArabicError::UnsupportedLocale(_))
        ));
    }

    #[test]
    fn test_invalid_currency_rejected() {
        let config = EngineConfig {
            currency: "riyal".to_string(),
            ..EngineConfig::default()
        };
        assert!(matches!(
            ArabicEngine::new(config),
            Err(ArabicError::InvalidCurrency(_))
        ));
    }

    #[test]
    fn test_keyword_min_length_from_config() {
        let config = EngineConfig {
            keyword_min_length: 5,
            ..EngineConfig::default()
        };
        let engine = ArabicEngine::new(config).unwrap();
        assert_eq!(engine.extract_keywords("كتاب المدرسة"), vec!["المدرسه"]);
    }

    #[test]
    fn test_facade_delegates() {
        let engine = engine();
        assert_eq!(engine.text_direction("مرحبا"), Some(TextDirection::Rtl));
        assert_eq!(engine.text_direction("hello"), Some(TextDirection::Ltr));
        assert_eq!(engine.text_direction("42"), None);
        assert!(engine.is_question("كيف حالك"));
        assert_eq!(engine.correct_spelling("بسم اللة"), "بسم الله");
        assert!(engine.search("المدرسة", "مدرسه"));
    }

    #[test]
    fn test_format_date_from_string() {
        let engine = engine();
        assert_eq!(
            engine.format_date("2024-03-15", DateStyle::Long).unwrap(),
            "١٥ مارس ٢٠٢٤"
        );
        assert!(matches!(
            engine.format_date("yesterday", DateStyle::Long),
            Err(ArabicError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_keyboard_toggle() {
        let mut engine = engine();
        assert_eq!(engine.keyboard_mode(), KeyboardMode::Arabic);
        let layout = engine.toggle_keyboard();
        assert_eq!(layout.mode, KeyboardMode::English);
        assert_eq!(engine.keyboard_mode(), KeyboardMode::English);
    }

    #[test]
    fn test_save_state_without_path_is_noop() {
        assert!(engine().save_state().is_ok());
    }
}
