//! Validation utilities

use crate::types::*;

/// Validate that an account code is valid
pub fn validate_account_code(code: &str) -> LedgerResult<()> {
    if code.trim().is_empty() {
        return Err(LedgerError::Validation(
            "Account code cannot be empty".to_string(),
        ));
    }

    if code.len() > 64 {
        return Err(LedgerError::Validation(
            "Account code cannot exceed 64 characters".to_string(),
        ));
    }

    // Codes are used as foreign keys and in URLs by the HTTP layer
    if !code
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(LedgerError::Validation(
            "Account code can only contain alphanumeric characters, dashes, and underscores"
                .to_string(),
        ));
    }

    Ok(())
}

/// Validate that an account name is valid
pub fn validate_account_name(name: &str) -> LedgerResult<()> {
    if name.trim().is_empty() {
        return Err(LedgerError::Validation(
            "Account name cannot be empty".to_string(),
        ));
    }

    if name.len() > 255 {
        return Err(LedgerError::Validation(
            "Account name cannot exceed 255 characters".to_string(),
        ));
    }

    Ok(())
}
