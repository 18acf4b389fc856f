use crate::utils::error::{FixtureError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(FixtureError::ConfigError {
            message: format!("{field_name}: path cannot be empty"),
        });
    }

    if path.contains('\0') {
        return Err(FixtureError::ConfigError {
            message: format!("{field_name}: path contains null bytes"),
        });
    }

    Ok(())
}

pub fn validate_export_formats(field_name: &str, formats: &[String]) -> Result<()> {
    const ALLOWED: [&str; 3] = ["csv", "json", "zip"];
    let allowed_set: HashSet<&str> = ALLOWED.iter().copied().collect();

    if formats.is_empty() {
        return Err(FixtureError::ConfigError {
            message: format!("{field_name}: at least one export format is required"),
        });
    }

    for format in formats {
        if !allowed_set.contains(format.as_str()) {
            return Err(FixtureError::ConfigError {
                message: format!(
                    "{field_name}: unsupported format '{}'. Allowed formats: {}",
                    format,
                    ALLOWED.join(", ")
                ),
            });
        }
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FixtureError::ConfigError {
            message: format!("{field_name}: value cannot be empty or whitespace-only"),
        });
    }
    Ok(())
}
