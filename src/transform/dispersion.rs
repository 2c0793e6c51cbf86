//! Mapping of vendor dispersion formulas onto the database formula family.
//!
//! The mapping only renames and reorders catalog coefficients; nothing is
//! refitted. Power-series formulas pair each non-zero coefficient with its
//! exponent, Sellmeier formulas keep `(B, C)` pairs, Herzberger is written
//! as a fixed five-coefficient formula 4.

use crate::error::{ConvertError, Result};
use crate::model::{DispersionBlock, FormulaKind, GlassRecord, TargetFormula, Term};

/// Exponents of formula 1. The leading constant has none.
const SCHOTT_EXPONENTS: &[Option<i32>] = &[None, Some(2), Some(-2), Some(-4), Some(-6), Some(-8)];

/// Exponents of formula 11.
const EXTENDED_EXPONENTS: &[Option<i32>] = &[
    None,
    Some(2),
    Some(-2),
    Some(-4),
    Some(-6),
    Some(-8),
    Some(-10),
    Some(-12),
];

/// Exponents of formula 12, in catalog order.
const EXTENDED2_EXPONENTS: &[Option<i32>] = &[
    None,
    Some(2),
    Some(-2),
    Some(-4),
    Some(-6),
    Some(-8),
    Some(4),
    Some(6),
];

/// Exponents of formula 13.
const EXTENDED3_EXPONENTS: &[Option<i32>] = &[
    None,
    Some(2),
    Some(4),
    Some(-2),
    Some(-4),
    Some(-6),
    Some(-8),
    Some(-10),
    Some(-12),
];

/// Maximum number of `(B, C)` pairs in a Sellmeier formula.
const SELLMEIER_PAIRS: usize = 8;

/// Coefficients consumed by the Herzberger mapping.
const HERZBERGER_COEFFICIENTS: usize = 5;

/// Build the dispersion block of a record.
pub fn map_dispersion(record: &GlassRecord) -> Result<DispersionBlock> {
    let kind =
        FormulaKind::from_id(record.formula_id).ok_or_else(|| ConvertError::UnknownFormula {
            name: record.name.clone(),
            formula_id: record.formula_id,
        })?;

    let range = record
        .wavelength_range
        .ok_or_else(|| ConvertError::MissingRange {
            name: record.name.clone(),
        })?;

    let coefficients = &record.disp_coefficients;
    let (formula, terms) = match kind {
        FormulaKind::Schott => (
            TargetFormula::Formula3,
            power_series(coefficients, SCHOTT_EXPONENTS),
        ),
        FormulaKind::Sellmeier1 | FormulaKind::Sellmeier3 => {
            (TargetFormula::Formula2, sellmeier_terms(coefficients))
        }
        FormulaKind::Herzberger => (TargetFormula::Formula4, herzberger_terms(record)?),
        FormulaKind::Extended => (
            TargetFormula::Formula3,
            power_series(coefficients, EXTENDED_EXPONENTS),
        ),
        FormulaKind::Extended2 => (
            TargetFormula::Formula3,
            power_series(coefficients, EXTENDED2_EXPONENTS),
        ),
        FormulaKind::Extended3 => (
            TargetFormula::Formula3,
            power_series(coefficients, EXTENDED3_EXPONENTS),
        ),
    };

    Ok(DispersionBlock {
        formula,
        range,
        terms,
    })
}

/// Non-zero coefficients, each followed by its exponent. Coefficients beyond
/// the exponent table are ignored.
fn power_series(coefficients: &[f64], exponents: &[Option<i32>]) -> Vec<Term> {
    let mut terms = Vec::new();

    for (&c, &exponent) in coefficients.iter().zip(exponents) {
        if c == 0.0 {
            continue;
        }
        terms.push(Term::Coefficient(c));
        if let Some(e) = exponent {
            terms.push(Term::Integer(e));
        }
    }

    terms
}

/// Leading zero constant, then every complete pair whose B is non-zero.
fn sellmeier_terms(coefficients: &[f64]) -> Vec<Term> {
    let mut terms = vec![Term::Integer(0)];

    for pair in coefficients.chunks_exact(2).take(SELLMEIER_PAIRS) {
        if pair[0] != 0.0 {
            terms.push(Term::Coefficient(pair[0]));
            terms.push(Term::Coefficient(pair[1]));
        }
    }

    terms
}

/// `A+1 B 2 C 2 D 0 E 2`, written even when coefficients are zero.
fn herzberger_terms(record: &GlassRecord) -> Result<Vec<Term>> {
    let c = record
        .disp_coefficients
        .get(..HERZBERGER_COEFFICIENTS)
        .ok_or_else(|| ConvertError::MissingCoefficients {
            name: record.name.clone(),
            formula_id: record.formula_id,
            expected: HERZBERGER_COEFFICIENTS,
            found: record.disp_coefficients.len(),
        })?;

    Ok(vec![
        Term::Coefficient(c[0] + 1.0),
        Term::Coefficient(c[1]),
        Term::Integer(2),
        Term::Coefficient(c[2]),
        Term::Integer(2),
        Term::Coefficient(c[3]),
        Term::Integer(0),
        Term::Coefficient(c[4]),
        Term::Integer(2),
    ])
}
