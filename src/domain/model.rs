use crate::utils::error::{InsightError, Result};
use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// 識別欄位（電話號碼）
pub const IDENTIFIER_FIELD: &str = "Telefono";
/// 訊息內容欄位
pub const MESSAGE_FIELD: &str = "Mensaje";

/// 一列資料：欄位名稱到儲存格內容的有序對應，順序與標題列一致
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// 重複的欄位名稱以第一個為準
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    pub fn identifier(&self) -> Option<&str> {
        self.get(IDENTIFIER_FIELD)
    }

    pub fn message(&self) -> Option<&str> {
        self.get(MESSAGE_FIELD)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// 一次上傳的完整資料集；建立後不再修改
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Dataset {
    columns: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, records: Vec<Record>) -> Self {
        Self { columns, records }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

impl WordCount {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// 每個識別碼的高頻詞，依識別碼排序
pub type TopWords = BTreeMap<String, Vec<WordCount>>;

/// 經緯度保留原始文字，不轉為浮點數
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoordinateMatch {
    pub identifier: String,
    pub latitude: String,
    pub longitude: String,
    pub source_message: String,
}

/// 最近一次成功載入的摘要
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub source: String,
    pub records: usize,
    pub columns: Vec<String>,
    pub loaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    Search,
    TopWords,
    DistinctWords,
    Coordinates,
}

impl QueryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKind::Search => "buscar_mensajes",
            QueryKind::TopWords => "ver_palabras",
            QueryKind::DistinctWords => "distinct-words",
            QueryKind::Coordinates => "ver_coordenadas",
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryKind {
    type Err = InsightError;

    fn from_str(selector: &str) -> Result<Self> {
        match selector.trim().to_ascii_lowercase().as_str() {
            "buscar_mensajes" | "search" => Ok(QueryKind::Search),
            "ver_palabras" | "top-words" | "top_words" => Ok(QueryKind::TopWords),
            "ver_palabras_lista" | "distinct-words" | "distinct_words" => {
                Ok(QueryKind::DistinctWords)
            }
            "ver_coordenadas" | "coordinates" => Ok(QueryKind::Coordinates),
            _ => Err(InsightError::InvalidQuery {
                selector: selector.to_string(),
            }),
        }
    }
}

/// 可執行的查詢
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Search { needle: String },
    TopWords { limit: usize },
    DistinctWords { limit: usize },
    Coordinates,
}

impl Query {
    /// 由外部選擇器建立查詢；缺少搜尋字串時視為空字串
    pub fn from_selector(selector: &str, needle: Option<&str>, limit: usize) -> Result<Self> {
        let query = match selector.parse::<QueryKind>()? {
            QueryKind::Search => Query::Search {
                needle: needle.unwrap_or_default().to_string(),
            },
            QueryKind::TopWords => Query::TopWords { limit },
            QueryKind::DistinctWords => Query::DistinctWords { limit },
            QueryKind::Coordinates => Query::Coordinates,
        };
        Ok(query)
    }

    pub fn kind(&self) -> QueryKind {
        match self {
            Query::Search { .. } => QueryKind::Search,
            Query::TopWords { .. } => QueryKind::TopWords,
            Query::DistinctWords { .. } => QueryKind::DistinctWords,
            Query::Coordinates => QueryKind::Coordinates,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "query", content = "results", rename_all = "snake_case")]
pub enum QueryOutcome {
    Messages(Vec<Record>),
    TopWords(TopWords),
    DistinctWords(Vec<String>),
    Coordinates(Vec<CoordinateMatch>),
}

impl QueryOutcome {
    pub fn len(&self) -> usize {
        match self {
            QueryOutcome::Messages(records) => records.len(),
            QueryOutcome::TopWords(words) => words.len(),
            QueryOutcome::DistinctWords(words) => words.len(),
            QueryOutcome::Coordinates(matches) => matches.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
