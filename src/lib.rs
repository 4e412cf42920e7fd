//! befast-status - Order status normalization and classification for the
//! BeFast delivery marketplace
//!
//! This library provides:
//! - The canonical status catalog (labels, categories, progress, colors, icons)
//! - Alias resolution for legacy, Spanish and logistics-provider spellings
//! - Normalization of arbitrary status strings, defaulting to PENDING
//! - Classification into categories and workflow flags
//! - The `befast-status` command-line interface
//!
//! # Example
//!
//! ```
//! use befast_status::{normalize, StatusCategory, StatusKey};
//!
//! let key = normalize("picked_up");
//! assert_eq!(key, StatusKey::PickedUp);
//! assert_eq!(key.category(), StatusCategory::InProgress);
//! assert!(key.is_active());
//! assert!(!key.can_cancel());
//! ```

pub mod models;
pub mod status;
pub mod config;
pub mod cli;
pub mod utils;

pub use models::{ClassificationResult, Locale, StatusCategory, StatusDefinition, StatusKey};
pub use status::{
    can_cancel, category, classify, classify_in, is_active, is_completed, normalize, progress,
    try_normalize, AliasTable, Catalog, Normalizer, StatusError, UnknownPolicy,
};
