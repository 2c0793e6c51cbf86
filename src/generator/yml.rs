//! YAML record generator for the refractiveindex.info database.

use crate::config::{
    CTE_DECIMALS, CTE_SCALE, GLASS_CODE_THRESHOLD, OUTPUT_EXTENSION, RESISTANCE_ABSENT,
};
use crate::error::Result;
use crate::model::{AbsorptionPoint, DispersionBlock, GlassRecord, Term};
use crate::transform::{derive_absorption, map_dispersion};
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::number::{format_float, format_scientific, round_decimals};

/// Header written at the top of every record.
pub const LICENSE_HEADER: &str = "\
# this file is part of refractiveindex.info database
# refractiveindex.info database is in the public domain
# copyright and related rights waived via CC0 1.0
";

/// Line buffer with the database's fixed indentation levels.
struct YmlWriter {
    buffer: String,
}

impl YmlWriter {
    fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    fn line(&mut self, content: &str) {
        self.buffer.push_str(content);
        self.buffer.push('\n');
    }

    /// `key: "value"` at top level.
    fn quoted(&mut self, key: &str, value: &str) {
        self.line(&format!("{key}: \"{value}\""));
    }

    /// `key: value` inside the SPECS block.
    fn spec(&mut self, key: &str, value: impl Display) {
        self.line(&format!("    {key}: {value}"));
    }

    fn finish(self) -> String {
        self.buffer
    }
}

/// Render one record with its mapped dispersion and absorption data.
pub fn render_record(
    record: &GlassRecord,
    dispersion: &DispersionBlock,
    absorption: &[AbsorptionPoint],
    references: &str,
) -> String {
    let mut w = YmlWriter::new();

    w.line(LICENSE_HEADER);
    w.quoted("REFERENCES", references);
    if let Some(comments) = record.comment_text() {
        w.quoted("COMMENTS", &escape_quoted(&comments));
    }

    w.line("DATA:");
    write_dispersion(&mut w, dispersion);
    write_absorption(&mut w, absorption);

    write_specs(&mut w, record);

    w.finish()
}

/// Map and render a record in one step.
pub fn render_yml(record: &GlassRecord, references: &str) -> Result<String> {
    let dispersion = map_dispersion(record)?;
    let absorption = derive_absorption(&record.transmittance);
    Ok(render_record(record, &dispersion, &absorption, references))
}

/// Path of the record file inside `dir`.
pub fn record_path(dir: &Path, record: &GlassRecord) -> PathBuf {
    dir.join(format!("{}.{}", record.file_stem(), OUTPUT_EXTENSION))
}

/// Create the output directory if it does not exist yet.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Render a record and write it to `{dir}/{name}.yml`, replacing any existing file.
pub fn write_record(record: &GlassRecord, dir: &Path, references: &str) -> Result<PathBuf> {
    let content = render_yml(record, references)?;
    let path = record_path(dir, record);
    fs::write(&path, content)?;
    debug!("Wrote {}", path.display());
    Ok(path)
}

fn write_dispersion(w: &mut YmlWriter, block: &DispersionBlock) {
    // Older database files end this line with a space; it stays dropped.
    w.line(&format!("  - type: {}", block.formula));
    w.line(&format!(
        "    range: {} {}",
        format_float(block.range.0),
        format_float(block.range.1)
    ));

    let mut coefficients = String::from("    coefficients:");
    for term in &block.terms {
        coefficients.push(' ');
        coefficients.push_str(&format_term(term));
    }
    w.line(&coefficients);
}

fn write_absorption(w: &mut YmlWriter, points: &[AbsorptionPoint]) {
    w.line("  - type: tabulated k");
    w.line("    data: |");
    for point in points {
        w.line(&format!(
            "        {:.3} {}",
            point.wavelength,
            format_scientific(point.k, 4)
        ));
    }
}

fn write_specs(w: &mut YmlWriter, record: &GlassRecord) {
    w.line("SPECS:");
    w.spec("n_is_absolute", "false");
    w.spec("λ_is_vacuum", "false");

    if let Some(temperature) = record.reference_temperature() {
        w.spec("temperature", format!("{:.1} °C", temperature));
    }
    if let Some(coefficients) = record.thermal_dispersion() {
        let joined: Vec<String> = coefficients.iter().map(|&c| format_float(c)).collect();
        w.spec("coefficients_of_thermal_dispersion", joined.join(" "));
    }

    w.spec("n_d", &record.nd);
    w.spec("V_d", &record.vd);

    if let Some(code) = record
        .glass_code
        .as_ref()
        .filter(|c| c.value > GLASS_CODE_THRESHOLD)
    {
        w.spec("glass_code", &code.raw);
    }
    if let Some(status) = record.glass_status() {
        w.spec("glass_status", status);
    }
    if let Some(freq) = record.melt_frequency.as_ref().filter(|m| m.value != 0.0) {
        w.spec("glass_melt_frequency", &freq.raw);
    }

    if let Some(density) = non_zero(record.density) {
        w.spec("density", format!("{} g/cm<sup>3</sup>", format_float(density)));
    }
    if let Some(cte) = non_zero(record.cte1) {
        w.spec("coefficient_of_thermal_expansion_1", format_cte(cte));
    }
    if let Some(cte) = non_zero(record.cte2) {
        w.spec("coefficient_of_thermal_expansion_2", format_cte(cte));
    }
    if let Some(dpgf) = non_zero(record.dpgf) {
        w.spec("ΔP_gF", format_float(dpgf));
    }

    let grades = [
        ("climatic_resistance", record.resistance.climatic),
        ("stain_resistance", record.resistance.stain),
        ("acid_resistance", record.resistance.acid),
        ("alkali_resistance", record.resistance.alkali),
        ("phosphate_resistance", record.resistance.phosphate),
    ];
    for (key, grade) in grades {
        if let Some(grade) = grade.filter(|&g| g != RESISTANCE_ABSENT) {
            w.spec(key, format_float(grade));
        }
    }
}

fn format_term(term: &Term) -> String {
    match term {
        Term::Coefficient(value) => format_float(*value),
        Term::Integer(value) => value.to_string(),
    }
}

/// CTE in K⁻¹ from the catalog's 1e-6/K value.
fn format_cte(cte: f64) -> String {
    format!(
        "{} K<sup>-1</sup>",
        format_float(round_decimals(cte * CTE_SCALE, CTE_DECIMALS))
    )
}

fn non_zero(value: Option<f64>) -> Option<f64> {
    value.filter(|&v| v != 0.0)
}

/// Escape a value for a double-quoted YAML scalar.
fn escape_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
