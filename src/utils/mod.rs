pub mod fuzzy;

pub use fuzzy::{levenshtein_distance, suggest_statuses};
