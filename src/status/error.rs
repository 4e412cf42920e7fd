use thiserror::Error;
use crate::models::StatusKey;

/// Errors raised by the status model
///
/// Only `UnrecognizedStatus` comes from external data, and only through the
/// strict normalization path. The rest indicate a broken catalog or alias
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusError {
    #[error("Unknown status key '{0}'")]
    UnknownStatusKey(String),

    #[error("Unrecognized status '{0}'")]
    UnrecognizedStatus(String),

    #[error("Alias '{alias}' maps to both {existing} and {conflicting}")]
    AmbiguousAlias {
        alias: String,
        existing: StatusKey,
        conflicting: StatusKey,
    },

    #[error("Invalid alias '{0}': aliases cannot be empty")]
    InvalidAlias(String),

    #[error("Canonical key {0} does not resolve to itself")]
    MissingSelfAlias(StatusKey),

    #[error("Status catalog is inconsistent: {0}")]
    CatalogMismatch(String),
}
