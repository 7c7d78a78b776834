use super::ApiError;

pub fn validate_id(kind: &str, id: i32) -> Result<i32, ApiError> {
    if id <= 0 {
        return Err(ApiError::validation(format!(
            "Invalid {} ID: {}. ID must be a positive integer",
            kind, id
        )));
    }
    Ok(id)
}

/// Search terms are trimmed; an empty term is allowed and matches everything.
#[must_use]
pub fn normalize_search_term(term: &str) -> &str {
    term.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_id() {
        assert!(validate_id("venue", 1).is_ok());
        assert!(validate_id("artist", 12345).is_ok());
        assert!(validate_id("venue", 0).is_err());
        assert!(validate_id("artist", -1).is_err());
    }

    #[test]
    fn test_normalize_search_term() {
        assert_eq!(normalize_search_term("  hop "), "hop");
        assert_eq!(normalize_search_term("   "), "");
    }
}
