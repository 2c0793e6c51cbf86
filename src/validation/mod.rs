//! Validation module.

mod validate;

pub use validate::{validate_catalog, validate_record, ValidationResult};
