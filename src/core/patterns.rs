//! 文字比對用的固定樣式與西班牙文停用詞

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// 連續的文字字元（字母、數字、底線，Unicode）
pub const WORD_PATTERN: &str = r"\w+";

/// 兩個帶小數點的數字，可為負數，中間可有分號與空白
pub const COORDINATE_PATTERN: &str = r"(-?[0-9]+\.[0-9]+)\s*;?\s*(-?[0-9]+\.[0-9]+)";

pub static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(WORD_PATTERN).expect("WORD_PATTERN is a valid regex"));

pub static COORDINATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(COORDINATE_PATTERN).expect("COORDINATE_PATTERN is a valid regex"));

/// 冠詞、連接詞、介系詞、代名詞、指示詞
pub const STOPWORDS: &[&str] = &[
    "el", "la", "los", "las", "un", "una", "unos", "unas", "y", "o", "pero", "a", "ante", "bajo",
    "con", "contra", "de", "desde", "en", "entre", "hacia", "hasta", "para", "por", "sin",
    "sobre", "tras", "que", "quien", "quienes", "cual", "cuales", "me", "te", "se", "nos", "lo",
    "le", "les", "mi", "tu", "su", "nuestro", "nuestra", "nuestros", "nuestras", "vosotros",
    "vosotras", "ellos", "ellas", "yo", "tú", "él", "ella", "nosotros", "nosotras", "esto", "eso",
    "aquello", "este", "ese", "aquel", "estos", "esos", "aquellos", "estas", "esas", "aquellas",
    "no", "si", "es", "ya", "va", "hay",
];

static STOPWORD_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| STOPWORDS.iter().copied().collect());

/// 輸入需已轉為小寫
pub fn is_stopword(word: &str) -> bool {
    STOPWORD_SET.contains(word)
}

/// 小寫化後切出所有詞，保留出現順序
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
