//! 針對資料集快照的查詢，皆為純函式，不會失敗也不會修改資料集

use crate::core::patterns::{is_stopword, tokenize, COORDINATE_RE};
use crate::domain::model::{CoordinateMatch, Dataset, Query, QueryOutcome, Record, TopWords, WordCount};
use std::collections::{HashMap, HashSet};

/// 預設的高頻詞數量
pub const DEFAULT_TOP_N: usize = 10;

/// 回傳訊息內容包含 `needle`（不分大小寫）的所有記錄，保留原順序。
///
/// 空字串會比對到所有有訊息欄位的記錄。
pub fn search_messages(dataset: &Dataset, needle: &str) -> Vec<Record> {
    let needle = needle.to_lowercase();
    dataset
        .records()
        .iter()
        .filter(|record| {
            record
                .message()
                .is_some_and(|message| message.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// 依出現順序累積的詞頻表
#[derive(Default)]
struct FrequencyTable {
    index: HashMap<String, usize>,
    entries: Vec<WordCount>,
}

impl FrequencyTable {
    fn add(&mut self, word: String) {
        match self.index.get(&word) {
            Some(&pos) => self.entries[pos].count += 1,
            None => {
                self.index.insert(word.clone(), self.entries.len());
                self.entries.push(WordCount::new(word, 1));
            }
        }
    }

    /// 穩定排序，同次數時先出現者在前
    fn into_ranked(mut self, limit: usize) -> Vec<WordCount> {
        self.entries.sort_by(|a, b| b.count.cmp(&a.count));
        self.entries.truncate(limit);
        self.entries
    }
}

fn content_words(message: &str) -> impl Iterator<Item = String> {
    tokenize(message).into_iter().filter(|word| !is_stopword(word))
}

/// 每個識別碼最常用的 `limit` 個詞（已去除停用詞）。
///
/// 同一識別碼的所有記錄合併計算。沒有任何有效詞的識別碼不會出現在結果中。
/// 缺少識別欄位的記錄歸在空字串底下。
pub fn top_words(dataset: &Dataset, limit: usize) -> TopWords {
    let mut tables: HashMap<String, FrequencyTable> = HashMap::new();

    for record in dataset.records() {
        let Some(message) = record.message() else {
            continue;
        };
        let identifier = record.identifier().unwrap_or_default();
        let table = tables.entry(identifier.to_string()).or_default();
        for word in content_words(message) {
            table.add(word);
        }
    }

    tables
        .into_iter()
        .map(|(identifier, table)| (identifier, table.into_ranked(limit)))
        .filter(|(_, words)| !words.is_empty())
        .collect()
}

/// 簡化模式：全域去重的詞彙清單，依首次出現順序，不計次數
pub fn distinct_words(dataset: &Dataset, limit: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut words = Vec::new();

    for message in dataset.records().iter().filter_map(Record::message) {
        for word in content_words(message) {
            if words.len() >= limit {
                return words;
            }
            if seen.insert(word.clone()) {
                words.push(word);
            }
        }
    }

    words
}

/// 擷取訊息中所有的座標對，依記錄順序再依文字位置排列。不檢查經緯度範圍。
pub fn extract_coordinates(dataset: &Dataset) -> Vec<CoordinateMatch> {
    let mut matches = Vec::new();

    for record in dataset.records() {
        let Some(message) = record.message() else {
            continue;
        };
        for caps in COORDINATE_RE.captures_iter(message) {
            matches.push(CoordinateMatch {
                identifier: record.identifier().unwrap_or_default().to_string(),
                latitude: caps[1].to_string(),
                longitude: caps[2].to_string(),
                source_message: message.to_string(),
            });
        }
    }

    matches
}

/// 依查詢種類分派
pub fn execute(dataset: &Dataset, query: &Query) -> QueryOutcome {
    match query {
        Query::Search { needle } => QueryOutcome::Messages(search_messages(dataset, needle)),
        Query::TopWords { limit } => QueryOutcome::TopWords(top_words(dataset, *limit)),
        Query::DistinctWords { limit } => {
            QueryOutcome::DistinctWords(distinct_words(dataset, *limit))
        }
        Query::Coordinates => QueryOutcome::Coordinates(extract_coordinates(dataset)),
    }
}
