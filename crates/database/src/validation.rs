//! Input validation for entries before they reach the store.

use std::fmt;

use crate::models::NewEntry;

/// Validation error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Empty value where one is required.
    Empty(String),
    /// Value too long.
    TooLong {
        field: String,
        max: usize,
        actual: usize,
    },
    /// JSON null where an object or value is required.
    NullData,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Empty(field) => write!(f, "{} cannot be empty", field),
            ValidationError::TooLong { field, max, actual } => {
                write!(f, "{} is too long ({} chars, max {})", field, actual, max)
            }
            ValidationError::NullData => write!(f, "data cannot be null"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Maximum allowed length for category labels.
pub const MAX_CATEGORY_LENGTH: usize = 64;

/// Validate an entry before insertion.
///
/// The schema already requires `category` and `data` to be non-null; this
/// additionally rejects empty and oversized categories and a JSON `null`
/// payload, which would satisfy the column constraint while carrying
/// nothing.
pub fn validate_new_entry(entry: &NewEntry) -> Result<(), ValidationError> {
    let category = entry.category.trim();

    if category.is_empty() {
        return Err(ValidationError::Empty("category".to_string()));
    }

    if category.len() > MAX_CATEGORY_LENGTH {
        return Err(ValidationError::TooLong {
            field: "category".to_string(),
            max: MAX_CATEGORY_LENGTH,
            actual: category.len(),
        });
    }

    if entry.data.is_null() {
        return Err(ValidationError::NullData);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_entry_valid() {
        let entry = NewEntry::new(1, "finance", json!({"amount": 47}));
        assert!(validate_new_entry(&entry).is_ok());
    }

    #[test]
    fn test_validate_entry_empty_category() {
        let entry = NewEntry::new(1, "", json!({}));
        assert!(matches!(
            validate_new_entry(&entry),
            Err(ValidationError::Empty(_))
        ));

        // Whitespace-only counts as empty
        let entry = NewEntry::new(1, "   ", json!({}));
        assert!(matches!(
            validate_new_entry(&entry),
            Err(ValidationError::Empty(_))
        ));
    }

    #[test]
    fn test_validate_entry_category_too_long() {
        let entry = NewEntry::new(1, "x".repeat(100), json!({}));
        assert!(matches!(
            validate_new_entry(&entry),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn test_validate_entry_null_data() {
        let entry = NewEntry::new(1, "finance", json!(null));
        assert_eq!(validate_new_entry(&entry), Err(ValidationError::NullData));
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::Empty("category".to_string());
        assert_eq!(err.to_string(), "category cannot be empty");

        let err = ValidationError::TooLong {
            field: "category".to_string(),
            max: 64,
            actual: 100,
        };
        assert_eq!(err.to_string(), "category is too long (100 chars, max 64)");
    }
}
