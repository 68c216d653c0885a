use thiserror::Error;

#[derive(Error, Debug)]
pub enum InsightError {
    #[error("CSV parse error: {message}")]
    ParseError { message: String },

    #[error("Invalid query selector: '{selector}'")]
    InvalidQuery { selector: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Query,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl InsightError {
    /// 將 csv 解碼錯誤轉為 ParseError，保留行號資訊
    pub fn from_csv(err: csv::Error) -> Self {
        let message = match err.position() {
            Some(pos) => format!("line {}: {}", pos.line(), err),
            None => err.to_string(),
        };
        InsightError::ParseError { message }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            InsightError::ParseError { .. } => ErrorCategory::Input,
            InsightError::InvalidQuery { .. } => ErrorCategory::Query,
            InsightError::ConfigValidationError { .. }
            | InsightError::InvalidConfigValueError { .. }
            | InsightError::MissingConfigError { .. } => ErrorCategory::Configuration,
            InsightError::IoError(_) | InsightError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Query => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            InsightError::ParseError { .. } => {
                "Check that the file is UTF-8 text with a ';'-delimited header row"
            }
            InsightError::InvalidQuery { .. } => {
                "Use one of: buscar_mensajes, ver_palabras, ver_coordenadas, distinct-words"
            }
            InsightError::IoError(_) => "Verify the file path exists and is readable",
            InsightError::SerializationError(_) => "Retry with --format text",
            InsightError::MissingConfigError { .. } => "Add the missing field to the configuration",
            InsightError::ConfigValidationError { .. }
            | InsightError::InvalidConfigValueError { .. } => {
                "Review the configuration values and try again"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            InsightError::ParseError { message } => {
                format!("The uploaded file could not be read as a table ({})", message)
            }
            InsightError::InvalidQuery { selector } => {
                format!("Unknown action '{}'", selector)
            }
            InsightError::IoError(e) => format!("File access failed: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, InsightError>;
