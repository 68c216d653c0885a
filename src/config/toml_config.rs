use crate::config::{INPUT_EXTENSIONS, MAX_TOP_N, OUTPUT_FORMATS};
use crate::core::query::DEFAULT_TOP_N;
use crate::core::ConfigProvider;
use crate::domain::model::Query;
use crate::utils::error::{InsightError, Result};
use crate::utils::validation::{self, Validate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

static ENV_VAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub queries: Vec<QueryConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InputConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DefaultsConfig {
    pub top_n: Option<usize>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    pub action: String,
    pub needle: Option<String>,
    pub top_n: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(InsightError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| InsightError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// 將 [[queries]] 轉為可執行的查詢，未指定時以 ver_palabras 為預設
    pub fn build_queries(&self) -> Result<Vec<Query>> {
        if self.queries.is_empty() {
            return Ok(vec![Query::TopWords {
                limit: self.top_n(),
            }]);
        }

        self.queries
            .iter()
            .map(|q| {
                Query::from_selector(
                    &q.action,
                    q.needle.as_deref(),
                    q.top_n.unwrap_or_else(|| self.top_n()),
                )
            })
            .collect()
    }

    pub fn validate_config(&self) -> Result<()> {
        let input_path = validation::validate_required_field("input.path", &self.input.path)?;
        validation::validate_path("input.path", input_path)?;
        validation::validate_file_extension("input.path", input_path, INPUT_EXTENSIONS)?;
        validation::validate_range("defaults.top_n", self.top_n(), 1, MAX_TOP_N)?;
        validation::validate_one_of("defaults.format", self.output_format(), OUTPUT_FORMATS)?;

        for (index, query) in self.queries.iter().enumerate() {
            if let Some(top_n) = query.top_n {
                validation::validate_range(&format!("queries[{}].top_n", index), top_n, 1, MAX_TOP_N)?;
            }
        }
        self.build_queries()?;

        if let Some(path) = self.output_path() {
            validation::validate_path("output.path", path)?;
        }
        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    /// 未設定時為空字串，由 validate 回報 MissingConfigError
    fn input_path(&self) -> &str {
        self.input.path.as_deref().unwrap_or_default()
    }

    fn top_n(&self) -> usize {
        self.defaults.top_n.unwrap_or(DEFAULT_TOP_N)
    }

    fn output_format(&self) -> &str {
        self.defaults.format.as_deref().unwrap_or("text")
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.path.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
