// Error handling utilities for consistent error messages and exit codes

use std::process;
use crate::status::StatusError;

/// Exit with a user error (exit code 1)
/// User errors are for invalid input, unrecognized statuses, bad config, etc.
pub fn user_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

/// Exit with an internal error (exit code >1)
/// Internal errors mean the status catalog or alias table is broken
pub fn internal_error(message: &str) -> ! {
    eprintln!("Internal error: {}", message);
    process::exit(2);
}

/// True if the error chain carries a catalog/alias integrity failure.
/// Everything else is reported as a user error.
pub fn is_internal(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<StatusError>(),
            Some(StatusError::CatalogMismatch(_))
                | Some(StatusError::MissingSelfAlias(_))
                | Some(StatusError::UnknownStatusKey(_))
        )
    })
}

/// Validate that a status argument list is not empty
pub fn validate_inputs(inputs: &[String]) -> Result<(), String> {
    if inputs.is_empty() {
        Err("At least one status value is required".to_string())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use crate::models::StatusKey;

    #[test]
    fn test_is_internal() {
        let err = anyhow::Error::new(StatusError::CatalogMismatch("x".to_string()));
        assert!(is_internal(&err));

        let wrapped: anyhow::Result<()> = Err(StatusError::MissingSelfAlias(StatusKey::Pending))
            .context("Alias table self-test failed");
        assert!(is_internal(&wrapped.unwrap_err()));

        let user = anyhow::Error::new(StatusError::UnrecognizedStatus("x".to_string()));
        assert!(!is_internal(&user));
        assert!(!is_internal(&anyhow::anyhow!("line 3: unknown locale")));
    }

    #[test]
    fn test_validate_inputs() {
        assert!(validate_inputs(&["pending".to_string()]).is_ok());
        assert!(validate_inputs(&[]).is_err());
    }
}
