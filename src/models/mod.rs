// Core data models for order statuses
// Canonical keys, categories, and the static definition records

pub mod status;
pub mod definition;

pub use status::*;
pub use definition::*;
