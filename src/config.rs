// File: src/config.rs
use crate::core::analysis::DEFAULT_KEYWORD_MIN_LENGTH;
use crate::error::{ArabicError, Result};
use crate::lexicon::Lexicon;
use crate::locale::{DEFAULT_CURRENCY, DEFAULT_LOCALE};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Settings an [`ArabicEngine`](crate::ArabicEngine) is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub locale: String,
    pub currency: String,
    pub keyword_min_length: usize,
    /// JSON lexicon replacing the bundled tables.
    pub lexicon_path: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            keyword_min_length: DEFAULT_KEYWORD_MIN_LENGTH,
            lexicon_path: None,
        }
    }
}

impl EngineConfig {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let config: EngineConfig = serde_json::from_reader(reader)?;
        if config.keyword_min_length == 0 {
            return Err(ArabicError::Config(
                "keyword_min_length must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }

    pub fn load_lexicon(&self) -> Result<Lexicon> {
        match &self.lexicon_path {
            Some(path) => Lexicon::from_json_file(path),
            None => Ok(Lexicon::bundled().clone()),
        }
    }
}
