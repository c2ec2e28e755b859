use crate::utils::error::{GenomeCheckError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GenomeCheckError::ConfigError {
            message: format!("{} cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}

/// Process arguments cannot carry NUL bytes.
pub fn validate_argument(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    if value.contains('\0') {
        return Err(GenomeCheckError::ConfigError {
            message: format!("{} contains null bytes: {:?}", field_name, value),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("program", "datasets").is_ok());
        assert!(validate_non_empty_string("program", "").is_err());
        assert!(validate_non_empty_string("program", "   ").is_err());
    }

    #[test]
    fn test_validate_argument_rejects_nul() {
        assert!(validate_argument("assembly_level", "complete").is_ok());
        assert!(validate_argument("assembly_level", "comp\0lete").is_err());
    }
}
