//! Dispersion formula identifiers and the mapped output block.

use serde::Serialize;

/// Vendor dispersion formula, as numbered in the AGF `NM` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FormulaKind {
    /// Schott power series (1).
    Schott = 1,
    /// Three-term Sellmeier (2).
    Sellmeier1 = 2,
    /// Herzberger (3).
    Herzberger = 3,
    /// Four-term Sellmeier (6).
    Sellmeier3 = 6,
    /// Extended power series up to λ⁻¹² (11).
    Extended = 11,
    /// Schott series with λ⁴ and λ⁶ terms (12).
    Extended2 = 12,
    /// Power series with λ⁴ and terms up to λ⁻¹² (13).
    Extended3 = 13,
}

impl FormulaKind {
    /// Map a catalog formula code, `None` for unsupported codes.
    pub fn from_id(id: u32) -> Option<Self> {
        match id {
            1 => Some(FormulaKind::Schott),
            2 => Some(FormulaKind::Sellmeier1),
            3 => Some(FormulaKind::Herzberger),
            6 => Some(FormulaKind::Sellmeier3),
            11 => Some(FormulaKind::Extended),
            12 => Some(FormulaKind::Extended2),
            13 => Some(FormulaKind::Extended3),
            _ => None,
        }
    }

    pub fn id(&self) -> u32 {
        *self as u32
    }
}

/// Formula numbering of the target database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TargetFormula {
    /// Sellmeier: n²-1 = C1 + Σ B λ²/(λ²-C).
    Formula2,
    /// Polynomial: n² = C1 + Σ C λ^e.
    Formula3,
    /// RefractiveIndex.INFO formula 4 (mixed rational and power terms).
    Formula4,
}

impl TargetFormula {
    pub fn number(&self) -> u8 {
        match self {
            TargetFormula::Formula2 => 2,
            TargetFormula::Formula3 => 3,
            TargetFormula::Formula4 => 4,
        }
    }
}

impl std::fmt::Display for TargetFormula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "formula {}", self.number())
    }
}

/// One entry of a `coefficients:` line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Term {
    /// A catalog coefficient, written as a float.
    Coefficient(f64),
    /// An exponent tag or fixed constant, written as an integer.
    Integer(i32),
}

/// Dispersion entry of a record's `DATA` list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DispersionBlock {
    pub formula: TargetFormula,
    /// Validity range in µm.
    pub range: (f64, f64),
    pub terms: Vec<Term>,
}

/// Extinction coefficient derived from one transmittance sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AbsorptionPoint {
    /// Wavelength in µm.
    pub wavelength: f64,
    pub k: f64,
}
