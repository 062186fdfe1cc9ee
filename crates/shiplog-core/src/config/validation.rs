//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_ticket(config)?;
    validate_changelog(config)?;
    validate_keywords(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_ticket(config: &Config) -> Result<()> {
    let code = &config.ticket.project_code;

    if code.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "ticket.project_code".to_string(),
            message: "project code cannot be empty".to_string(),
        }
        .into());
    }

    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ConfigError::InvalidValue {
            field: "ticket.project_code".to_string(),
            message: "project code must be ASCII alphanumeric".to_string(),
        }
        .into());
    }

    Ok(())
}

fn validate_changelog(config: &Config) -> Result<()> {
    if config.changelog.file.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.file".to_string(),
            message: "file path cannot be empty".to_string(),
        }
        .into());
    }

    if config.changelog.date_format.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.date_format".to_string(),
            message: "date format cannot be empty".to_string(),
        }
        .into());
    }

    Ok(())
}

fn validate_keywords(config: &Config) -> Result<()> {
    let sets = [
        ("keywords.excluded", &config.keywords.excluded),
        ("keywords.breaking", &config.keywords.breaking),
        ("keywords.changed", &config.keywords.changed),
        ("keywords.fixed", &config.keywords.fixed),
    ];

    for (field, set) in sets {
        if set.iter().any(|k| k.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: field.to_string(),
                message: "keywords cannot be empty strings".to_string(),
            }
            .into());
        }
    }

    Ok(())
}
