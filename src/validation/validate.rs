//! Plausibility checks for parsed glass records.

use crate::config::RESISTANCE_ABSENT;
use crate::model::GlassRecord;
use crate::transform::map_dispersion;

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Documented grade ranges per resistance key.
const GRADE_RANGES: &[(&str, &[(f64, f64)])] = &[
    ("climatic_resistance", &[(1.0, 4.0)]),
    ("stain_resistance", &[(0.0, 5.0)]),
    ("acid_resistance", &[(1.0, 4.0), (51.0, 53.0)]),
    ("alkali_resistance", &[(1.0, 4.0)]),
    ("phosphate_resistance", &[(1.0, 4.0)]),
];

/// Validate all records of a catalog.
pub fn validate_catalog(records: &[GlassRecord]) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if records.is_empty() {
        result.add_warning("Catalog contains no glass (no NM lines)");
    }

    for record in records {
        result.merge(validate_record(record));
    }

    result
}

/// Validate a single record. Errors mark records the converter would reject.
pub fn validate_record(record: &GlassRecord) -> ValidationResult {
    let mut result = ValidationResult::ok();
    let name = &record.name;

    if let Err(e) = map_dispersion(record) {
        result.add_error(e.to_string());
    }

    if let Some((min, max)) = record.wavelength_range {
        if min >= max {
            result.add_warning(format!(
                "{name}: wavelength range {min}..{max} is empty or reversed"
            ));
        }
    }

    if let Some(status) = record.status {
        if record.glass_status().is_none() {
            result.add_warning(format!("{name}: unknown glass status {status}"));
        }
    }

    let grades = [
        record.resistance.climatic,
        record.resistance.stain,
        record.resistance.acid,
        record.resistance.alkali,
        record.resistance.phosphate,
    ];
    for ((key, ranges), grade) in GRADE_RANGES.iter().zip(grades) {
        let Some(grade) = grade.filter(|&g| g != RESISTANCE_ABSENT) else {
            continue;
        };
        if !ranges.iter().any(|&(lo, hi)| grade >= lo && grade <= hi) {
            result.add_warning(format!("{name}: {key} {grade} outside documented grades"));
        }
    }

    for sample in &record.transmittance {
        if !(0.0..=1.0).contains(&sample.transmittance) {
            result.add_warning(format!(
                "{name}: transmittance {} at {} µm outside 0..1",
                sample.transmittance, sample.wavelength
            ));
        }
        if sample.thickness <= 0.0 {
            result.add_warning(format!(
                "{name}: non-positive sample thickness {} at {} µm",
                sample.thickness, sample.wavelength
            ));
        }
    }

    result
}
