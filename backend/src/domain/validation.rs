//! Checks applied after a body has parsed into its typed shape.
//!
//! Shape errors (missing fields, unknown enum values, non-numeric amounts) are
//! already rejected by deserialization; only the upsert key is checked here.

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid {entity} data: id cannot be empty")]
    EmptyId { entity: &'static str },
}

pub fn require_id(entity: &'static str, id: &str) -> Result<(), ValidationError> {
    if id.is_empty() {
        return Err(ValidationError::EmptyId { entity });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_id() {
        assert!(require_id("beneficiary", "b1").is_ok());
        assert_eq!(
            require_id("transaction", ""),
            Err(ValidationError::EmptyId { entity: "transaction" })
        );
        // Whitespace is a legal, if odd, id that must stay deletable
        assert!(require_id("transaction", "   ").is_ok());
    }

    #[test]
    fn test_error_message_names_entity() {
        let err = require_id("beneficiary", "").unwrap_err();
        assert_eq!(err.to_string(), "Invalid beneficiary data: id cannot be empty");
    }
}
