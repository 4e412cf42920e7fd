// Order status model: catalog, alias resolution, normalization, classification

pub mod error;
pub mod catalog;
pub mod alias;
pub mod normalizer;
pub mod classifier;

pub use error::StatusError;
pub use catalog::Catalog;
pub use alias::{fold_alias, AliasTable};
pub use normalizer::{normalize, try_normalize, Normalizer, UnknownPolicy};
pub use classifier::{
    can_cancel, category, classify, classify_in, is_active, is_completed, progress, summarize,
    StatusSummary,
};

/// Run the catalog and built-in alias table self-tests
pub fn self_test() -> Result<(), StatusError> {
    Catalog::verify()?;
    AliasTable::builtin().verify()
}
