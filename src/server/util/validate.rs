use crate::server::error::validation::ValidationError;

/// Rejects empty (or whitespace-only) required text.
pub fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }

    Ok(())
}

/// Rejects text longer than `max` characters.
pub fn max_length(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }

    Ok(())
}

/// Combined `required` and `max_length` check for mandatory text fields.
pub fn required_text(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), ValidationError> {
    required(field, value)?;
    max_length(field, value, max)
}

/// Length check for optional text, `None` always passes.
pub fn optional_text(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<(), ValidationError> {
    match value {
        Some(value) => max_length(field, value, max),
        None => Ok(()),
    }
}

/// Rejects explicit order values below 1.
pub fn order(value: Option<i32>) -> Result<(), ValidationError> {
    match value {
        Some(value) if value < 1 => Err(ValidationError::InvalidOrder),
        _ => Ok(()),
    }
}

/// Rejects negative values of an optional counter.
pub fn non_negative(field: &'static str, value: Option<i32>) -> Result<(), ValidationError> {
    match value {
        Some(value) if value < 0 => Err(ValidationError::Negative { field }),
        _ => Ok(()),
    }
}
