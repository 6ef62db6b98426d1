// Shared field checks for registration input

use super::errors::{RosterError, RosterResult};

/// Returns the value unchanged, or a validation error naming the field when
/// nothing but whitespace was supplied.
pub fn required_text(field: &str, value: &str) -> RosterResult<String> {
    if value.trim().is_empty() {
        return Err(RosterError::validation(format!("{} is required", field)));
    }
    Ok(value.to_string())
}
