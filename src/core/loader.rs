use crate::domain::model::{Dataset, Record};
use crate::utils::error::{InsightError, Result};

/// 固定的欄位分隔符號
pub const DELIMITER: u8 = b';';

/// 將上傳的位元組解析為資料集。
///
/// 第一列為標題列；之後每列依位置對應欄位名稱。缺少的尾端欄位視為不存在，
/// 多出的欄位直接捨棄。完全空白的輸入或只有標題列時回傳空資料集。
pub fn load(bytes: &[u8]) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers = reader.headers().map_err(InsightError::from_csv)?.clone();

    if headers.is_empty() {
        tracing::debug!("Input has no rows, returning empty dataset");
        return Ok(Dataset::empty());
    }

    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(InsightError::ParseError {
            message: "header row is empty".to_string(),
        });
    }

    let columns: Vec<String> = headers.iter().map(str::to_string).collect();
    let mut records = Vec::new();

    for row in reader.records() {
        let row = row.map_err(InsightError::from_csv)?;
        let fields = columns
            .iter()
            .zip(row.iter())
            .map(|(name, value)| (name.clone(), value.to_string()))
            .collect();
        records.push(Record::new(fields));
    }

    tracing::debug!(
        "Parsed {} records with columns [{}]",
        records.len(),
        columns.join(", ")
    );
    Ok(Dataset::new(columns, records))
}
