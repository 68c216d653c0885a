#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::core::query::DEFAULT_TOP_N;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

/// 支援的輸出格式
pub const OUTPUT_FORMATS: &[&str] = &["text", "json"];
/// 接受的上傳副檔名
pub const INPUT_EXTENSIONS: &[&str] = &["csv", "txt"];
pub const MAX_TOP_N: usize = 1000;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "message-insight")]
#[command(about = "Search, word-frequency and coordinate analysis over ';'-delimited message exports")]
pub struct CliConfig {
    /// Path to the ';'-delimited export
    #[arg(long)]
    pub file: String,

    /// Query selector: buscar_mensajes, ver_palabras, ver_coordenadas, distinct-words
    #[arg(long, default_value = "ver_palabras")]
    pub action: String,

    /// Text to look for when searching messages
    #[arg(long)]
    pub cadena: Option<String>,

    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    pub top_n: usize,

    #[arg(long, default_value = "text")]
    pub format: String,

    /// Write the rendered result here instead of stdout
    #[arg(long)]
    pub output: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.file
    }

    fn top_n(&self) -> usize {
        self.top_n
    }

    fn output_format(&self) -> &str {
        &self.format
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("file", &self.file)?;
        validation::validate_file_extension("file", &self.file, INPUT_EXTENSIONS)?;
        validation::validate_range("top_n", self.top_n, 1, MAX_TOP_N)?;
        validation::validate_one_of("format", &self.format, OUTPUT_FORMATS)?;
        self.action.parse::<crate::domain::model::QueryKind>()?;
        if let Some(output) = &self.output {
            validation::validate_path("output", output)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::utils::error::InsightError;

    #[test]
    fn test_cli_defaults() {
        let config = CliConfig::parse_from(["message-insight", "--file", "mensajes.csv"]);
        assert_eq!(config.action, "ver_palabras");
        assert_eq!(config.top_n, 10);
        assert_eq!(config.format, "text");
        assert!(config.cadena.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_rejects_unknown_action() {
        let config = CliConfig::parse_from([
            "message-insight",
            "--file",
            "mensajes.csv",
            "--action",
            "exportar",
        ]);
        assert!(matches!(config.validate(), Err(InsightError::InvalidQuery { .. })));
    }

    #[test]
    fn test_cli_rejects_bad_format_and_top_n() {
        let mut config = CliConfig::parse_from(["message-insight", "--file", "m.csv", "--format", "html"]);
        assert!(config.validate().is_err());
        config.format = "json".to_string();
        config.top_n = 0;
        assert!(config.validate().is_err());
    }
}
