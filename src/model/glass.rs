//! GlassRecord - one glass type read from a vendor catalog.

use crate::config::STAR_REPLACEMENT;
use serde::Serialize;

/// Catalog status of a glass (1-5 in the `NM` line).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GlassStatus {
    Standard = 1,
    Preferred = 2,
    Special = 3,
    Obsolete = 4,
    Melt = 5,
}

impl GlassStatus {
    /// Map a catalog status code, `None` outside 1..=5.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(GlassStatus::Standard),
            2 => Some(GlassStatus::Preferred),
            3 => Some(GlassStatus::Special),
            4 => Some(GlassStatus::Obsolete),
            5 => Some(GlassStatus::Melt),
            _ => None,
        }
    }

    /// Name written to the `glass_status` key.
    pub fn as_str(&self) -> &'static str {
        match self {
            GlassStatus::Standard => "standard",
            GlassStatus::Preferred => "preferred",
            GlassStatus::Special => "special",
            GlassStatus::Obsolete => "obsolete",
            GlassStatus::Melt => "melt",
        }
    }
}

impl std::fmt::Display for GlassStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A numeric catalog value that is written back verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawNumber {
    /// Text as it appears in the catalog.
    pub raw: String,
    /// Parsed value, used for the emission predicates.
    pub value: f64,
}

impl RawNumber {
    pub fn new(raw: impl Into<String>, value: f64) -> Self {
        Self {
            raw: raw.into(),
            value,
        }
    }
}

/// One `IT` line: internal transmittance measured at a wavelength.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransmittanceSample {
    /// Wavelength in µm.
    pub wavelength: f64,
    /// Internal transmittance, 0..1.
    pub transmittance: f64,
    /// Sample thickness in mm.
    pub thickness: f64,
}

/// Environmental resistance grades from the `OD` line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Resistance {
    /// Climatic resistance: 1 (high) - 4 (low).
    pub climatic: Option<f64>,
    /// Stain resistance: 0 (high) - 5 (low).
    pub stain: Option<f64>,
    /// Acid resistance: 1 (high) - 4 (low), 51-53 (very low).
    pub acid: Option<f64>,
    /// Alkali resistance: 1 (high) - 4 (low).
    pub alkali: Option<f64>,
    /// Phosphate resistance: 1 (high) - 4 (low).
    pub phosphate: Option<f64>,
}

/// One optical glass from a catalog, assembled from the lines between two `NM` tags.
#[derive(Debug, Clone, Serialize)]
pub struct GlassRecord {
    // === Identity ===
    /// Catalog name, unique within the catalog.
    pub name: String,
    /// Line of the `NM` tag that opened this record.
    pub line: usize,

    // === Classification ===
    /// Vendor dispersion formula code.
    pub formula_id: u32,
    /// Numeric glass code.
    pub glass_code: Option<RawNumber>,
    /// Status code from the `NM` line.
    pub status: Option<i64>,
    /// Melt frequency from the `NM` line.
    pub melt_frequency: Option<RawNumber>,

    // === Optical constants ===
    /// Refractive index at the d-line, passed through.
    pub nd: String,
    /// Abbe number, passed through.
    pub vd: String,

    // === Dispersion ===
    /// Validity range (µm) of the dispersion formula.
    pub wavelength_range: Option<(f64, f64)>,
    /// Raw dispersion coefficients (`CD`).
    pub disp_coefficients: Vec<f64>,
    /// Thermal dispersion coefficients D0 D1 D2 E0 E1 λtk and reference temperature (`TD`).
    pub thermal_coefficients: Vec<f64>,

    // === Thermal and mechanical properties (`ED`) ===
    /// CTE -30..+70 °C, 1e-6/K.
    pub cte1: Option<f64>,
    /// CTE +20..+300 °C, 1e-6/K.
    pub cte2: Option<f64>,
    /// Density, g/cm³.
    pub density: Option<f64>,
    /// Deviation of the relative partial dispersion.
    pub dpgf: Option<f64>,

    pub resistance: Resistance,

    /// Free-text comment tokens (`GC`).
    pub comments: Vec<String>,

    /// Transmittance samples (`IT`), in catalog order.
    pub transmittance: Vec<TransmittanceSample>,
}

impl GlassRecord {
    /// Open a new record for an `NM` line.
    pub fn new(name: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            line,
            formula_id: 0,
            glass_code: None,
            status: None,
            melt_frequency: None,
            nd: String::new(),
            vd: String::new(),
            wavelength_range: None,
            disp_coefficients: Vec::new(),
            thermal_coefficients: Vec::new(),
            cte1: None,
            cte2: None,
            density: None,
            dpgf: None,
            resistance: Resistance::default(),
            comments: Vec::new(),
            transmittance: Vec::new(),
        }
    }

    /// Output file stem: the name with `*` spelled out.
    pub fn file_stem(&self) -> String {
        sanitize_name(&self.name)
    }

    /// Catalog status, if the code is one of the known values.
    pub fn glass_status(&self) -> Option<GlassStatus> {
        self.status.and_then(GlassStatus::from_code)
    }

    /// Reference temperature (°C) of the thermal dispersion coefficients.
    pub fn reference_temperature(&self) -> Option<f64> {
        self.thermal_coefficients.get(6).copied()
    }

    /// The six thermal dispersion coefficients, if all are given and one is non-zero.
    pub fn thermal_dispersion(&self) -> Option<&[f64]> {
        let coefficients = self.thermal_coefficients.get(..6)?;
        coefficients
            .iter()
            .any(|&c| c != 0.0)
            .then_some(coefficients)
    }

    /// Comment tokens joined with single spaces.
    pub fn comment_text(&self) -> Option<String> {
        if self.comments.is_empty() {
            None
        } else {
            Some(self.comments.join(" "))
        }
    }
}

/// Replace characters that are reserved in database file names.
pub fn sanitize_name(name: &str) -> String {
    name.replace('*', STAR_REPLACEMENT)
}
