//! Transformations from catalog values to database values.

mod absorption;
mod dispersion;

pub use absorption::{derive_absorption, extinction_coefficient};
pub use dispersion::map_dispersion;
