use crate::domain::model::{QueryOutcome, Record, IDENTIFIER_FIELD, MESSAGE_FIELD};
use crate::utils::error::{InsightError, Result};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = InsightError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(InsightError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: "Valid values: text, json".to_string(),
            }),
        }
    }
}

pub fn render(outcome: &QueryOutcome, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(outcome)?),
        OutputFormat::Text => Ok(render_text(outcome)),
    }
}

/// 電話與訊息以外的欄位，格式為 `名稱=值`
fn extra_columns(record: &Record) -> String {
    record
        .fields()
        .filter(|(name, _)| *name != IDENTIFIER_FIELD && *name != MESSAGE_FIELD)
        .map(|(name, value)| format!("{}={}", name, value))
        .collect::<Vec<_>>()
        .join(", ")
}

/// 批次輸出：JSON 為單一陣列，文字以空行分隔
pub fn render_all(outcomes: &[QueryOutcome], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(outcomes)?),
        OutputFormat::Text => Ok(outcomes
            .iter()
            .map(render_text)
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

// write! 到 String 不會失敗
fn render_text(outcome: &QueryOutcome) -> String {
    let mut out = String::new();

    match outcome {
        QueryOutcome::Messages(records) => {
            let _ = writeln!(out, "Mensajes encontrados: {}", records.len());
            for record in records {
                let _ = write!(
                    out,
                    "  [{}] {}",
                    record.identifier().unwrap_or("-"),
                    record.message().unwrap_or_default()
                );
                let extra = extra_columns(record);
                if extra.is_empty() {
                    let _ = writeln!(out);
                } else {
                    let _ = writeln!(out, "  ({})", extra);
                }
            }
        }
        QueryOutcome::TopWords(by_identifier) => {
            let _ = writeln!(out, "Palabras más usadas por teléfono: {}", by_identifier.len());
            for (identifier, words) in by_identifier {
                let _ = writeln!(out, "  {}", if identifier.is_empty() { "-" } else { identifier });
                for entry in words {
                    let _ = writeln!(out, "    {:<20} {}", entry.word, entry.count);
                }
            }
        }
        QueryOutcome::DistinctWords(words) => {
            let _ = writeln!(out, "Palabras: {}", words.len());
            for word in words {
                let _ = writeln!(out, "  {}", word);
            }
        }
        QueryOutcome::Coordinates(matches) => {
            let _ = writeln!(out, "Coordenadas encontradas: {}", matches.len());
            for m in matches {
                let _ = writeln!(
                    out,
                    "  [{}] {}, {}  ({})",
                    m.identifier, m.latitude, m.longitude, m.source_message
                );
            }
        }
    }

    out
}
