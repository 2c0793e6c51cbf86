//! Data model types for AGF to YAML conversion.

mod dispersion;
mod glass;

pub use dispersion::{AbsorptionPoint, DispersionBlock, FormulaKind, TargetFormula, Term};
pub use glass::{sanitize_name, GlassRecord, GlassStatus, RawNumber, Resistance, TransmittanceSample};
