// File: src/lexicon.rs
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::OnceLock;

/// Common misspellings and their corrections, in application order.
const CORRECTIONS: &[(&str, &str)] = &[
    ("اللة", "الله"),
    ("انشاء", "إنشاء"),
    ("بناء", "بناء"),
    ("مساء", "مساء"),
    ("اصدقاء", "أصدقاء"),
];

/// English terms and their Arabic counterparts. Declared order is
/// application order.
const SUGGESTIONS: &[(&str, &str)] = &[
    ("video", "فيديو"),
    ("channel", "قناة"),
    ("youtube", "يوتيوب"),
    ("content", "محتوى"),
    ("subscribe", "اشترك"),
    ("like", "إعجاب"),
    ("comment", "تعليق"),
    ("share", "مشاركة"),
    ("tutorial", "درس تعليمي"),
    ("review", "مراجعة"),
    ("tips", "نصائح"),
    ("guide", "دليل"),
    ("how to", "كيفية"),
    ("best", "أفضل"),
    ("new", "جديد"),
    ("update", "تحديث"),
];

const QUESTION_WORDS: &[&str] = &["ما", "ماذا", "من", "متى", "أين", "كيف", "لماذا", "هل", "أي"];

/// The word tables the text functions consult.
///
/// A lexicon is plain data: it is built once (bundled or from a JSON file)
/// and only read afterwards. Table order is application order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    pub corrections: Vec<(String, String)>,
    pub suggestions: Vec<(String, String)>,
    pub question_words: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        let pairs = |table: &[(&str, &str)]| {
            table
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect()
        };
        Self {
            corrections: pairs(CORRECTIONS),
            suggestions: pairs(SUGGESTIONS),
            question_words: QUESTION_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl Lexicon {
    /// The tables shipped with the crate.
    pub fn bundled() -> &'static Lexicon {
        static BUNDLED: OnceLock<Lexicon> = OnceLock::new();
        BUNDLED.get_or_init(Lexicon::default)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}
