//! Input checks shared by the services

use error_common::{CareError, CareResult};

/// Trimmed `value`, or a validation error naming `field` when blank
pub fn require_text(field: &str, value: &str) -> CareResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CareError::validation(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

/// Trimmed optional path; blank becomes `None`
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text() {
        assert_eq!(require_text("Name", "  Asha ").unwrap(), "Asha");
        let err = require_text("Name", "   ").unwrap_err();
        assert_eq!(err, CareError::validation("Name is required"));
    }

    #[test]
    fn test_optional_text() {
        assert_eq!(optional_text(Some(" /tmp/a.png ")), Some("/tmp/a.png".to_string()));
        assert_eq!(optional_text(Some("  ")), None);
        assert_eq!(optional_text(None), None);
    }
}
