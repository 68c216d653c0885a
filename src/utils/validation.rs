use crate::utils::error::{InsightError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(InsightError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(InsightError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extension(field_name: &str, file: &str, allowed_extensions: &[&str]) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    match std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if allowed_set.contains(extension.to_ascii_lowercase().as_str()) => Ok(()),
        Some(extension) => Err(InsightError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(InsightError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| InsightError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(InsightError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Valid values: {}", allowed.join(", ")),
    })
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(InsightError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input.path", "mensajes.csv").is_ok());
        assert!(validate_path("input.path", "").is_err());
        assert!(validate_path("input.path", "bad\0path.csv").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("input.path", "data.csv", &["csv", "txt"]).is_ok());
        assert!(validate_file_extension("input.path", "DATA.CSV", &["csv", "txt"]).is_ok());
        assert!(validate_file_extension("input.path", "data.xlsx", &["csv", "txt"]).is_err());
        assert!(validate_file_extension("input.path", "data", &["csv", "txt"]).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("mensajes.csv".to_string());
        let missing: Option<String> = None;
        assert_eq!(validate_required_field("input.path", &present).unwrap(), "mensajes.csv");
        assert!(matches!(
            validate_required_field("input.path", &missing),
            Err(InsightError::MissingConfigError { ref field }) if field == "input.path"
        ));
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("top_n", 10usize, 1, 1000).is_ok());
        assert!(validate_range("top_n", 0usize, 1, 1000).is_err());
        assert!(validate_range("top_n", 1001usize, 1, 1000).is_err());
    }
}
