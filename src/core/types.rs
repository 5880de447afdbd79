// src/core/types.rs
use serde::{Deserialize, Serialize};

/// The dominant writing system of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Arabic,
    Latin,
    /// Neither Arabic code points nor ASCII letters (digits, punctuation, empty).
    Neutral,
}

/// Writing direction applied to a document or an input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Rtl,
    Ltr,
}

impl TextDirection {
    /// Value of the CSS `direction` property / HTML `dir` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            TextDirection::Rtl => "rtl",
            TextDirection::Ltr => "ltr",
        }
    }

    /// The `text-align` that goes with this direction.
    pub fn text_align(self) -> &'static str {
        match self {
            TextDirection::Rtl => "right",
            TextDirection::Ltr => "left",
        }
    }
}

/// Everything computed for a single input value in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextAnalysis {
    pub normalized: String,
    pub word_count: usize,
    pub keywords: Vec<String>,
    pub is_question: bool,
}
