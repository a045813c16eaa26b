//! Argument guards for value-object constructors.
//!
//! Each guard returns its input on success so it can be used inline:
//!
//! ```ignore
//! let code = guard::exact_length(code, 2, "two_letter_code")?;
//! ```

use crate::error::{ValueObjectError, ValueObjectResult};

/// Rejects empty and whitespace-only strings.
pub fn not_blank<'a>(value: &'a str, parameter: &str) -> ValueObjectResult<&'a str> {
    if value.trim().is_empty() {
        return Err(ValueObjectError::invalid_argument(
            parameter,
            "value cannot be empty or whitespace",
        ));
    }
    Ok(value)
}

/// Rejects empty slices.
pub fn not_empty<'a, T>(items: &'a [T], parameter: &str) -> ValueObjectResult<&'a [T]> {
    if items.is_empty() {
        return Err(ValueObjectError::invalid_argument(parameter, "value cannot be empty"));
    }
    Ok(items)
}

/// Requires exactly `length` characters (not bytes).
pub fn exact_length<'a>(
    value: &'a str,
    length: usize,
    parameter: &str,
) -> ValueObjectResult<&'a str> {
    let actual = value.chars().count();
    if actual != length {
        return Err(ValueObjectError::invalid_argument(
            parameter,
            format!("expected length {length}, got {actual}"),
        ));
    }
    Ok(value)
}
