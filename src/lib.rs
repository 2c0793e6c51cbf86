//! agf2yml - Zemax AGF glass catalogs to refractiveindex.info YAML records.
//!
//! The conversion is a single forward pipeline run once per glass:
//! the [`AgfReader`] assembles a [`GlassRecord`] per `NM` block,
//! [`map_dispersion`] re-expresses its dispersion coefficients in the
//! database's formula numbering, and [`write_record`] renders the record
//! as one `.yml` file.
//!
//! # Example
//!
//! ```no_run
//! use agf2yml_rs::{find_catalog, CatalogConverter};
//!
//! let catalog = find_catalog("schott").unwrap();
//! let summary = CatalogConverter::for_catalog(catalog)
//!     .convert_file(&catalog.input_path())
//!     .unwrap();
//! println!("{} glasses", summary.records());
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod parser;
pub mod transform;
pub mod validation;

// Re-exports for convenience
pub use config::{catalog_keys, find_catalog, Catalog, CATALOGS};
pub use error::{ConvertError, Result};
pub use generator::{ensure_output_dir, render_yml, write_record};
pub use model::{DispersionBlock, FormulaKind, GlassRecord, GlassStatus, TargetFormula, Term};
pub use parser::{parse_agf, parse_agf_file, read_catalog_file, AgfReader};
pub use transform::{derive_absorption, map_dispersion};
pub use validation::{validate_catalog, validate_record, ValidationResult};

use std::path::{Path, PathBuf};
use tracing::info;

/// Files produced by one catalog conversion.
#[derive(Debug, Default)]
pub struct ConversionSummary {
    /// Written record files, in catalog order.
    pub files: Vec<PathBuf>,
}

impl ConversionSummary {
    /// Number of converted glass records.
    pub fn records(&self) -> usize {
        self.files.len()
    }
}

/// Converts AGF catalogs into a directory of YAML records.
#[derive(Debug, Clone)]
pub struct CatalogConverter {
    out_dir: PathBuf,
    references: String,
    /// Print `"{index}: {name}"` / `"ok"` per glass to stdout.
    progress: bool,
}

impl CatalogConverter {
    /// Create a converter writing into `out_dir`.
    pub fn new(out_dir: impl Into<PathBuf>, references: impl Into<String>) -> Self {
        Self {
            out_dir: out_dir.into(),
            references: references.into(),
            progress: true,
        }
    }

    /// Create a converter for a built-in catalog's output directory and references.
    pub fn for_catalog(catalog: &Catalog) -> Self {
        Self::new(catalog.output_dir(), catalog.references)
    }

    /// Disable the per-glass progress lines.
    pub fn quiet(mut self) -> Self {
        self.progress = false;
        self
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Convert an AGF file.
    pub fn convert_file(&self, input: &Path) -> Result<ConversionSummary> {
        info!("Processing: {}", input.display());
        let content = read_catalog_file(input)?;
        self.convert_str(&content)
    }

    /// Convert in-memory AGF content.
    ///
    /// Records are written as soon as they are complete; the first error
    /// stops the conversion and leaves earlier files in place.
    pub fn convert_str(&self, content: &str) -> Result<ConversionSummary> {
        ensure_output_dir(&self.out_dir)?;

        let mut summary = ConversionSummary::default();

        for (index, record) in parse_agf(content).enumerate() {
            let record = record?;

            if self.progress {
                println!("{}: {}", index + 1, record.name);
            }
            let path = write_record(&record, &self.out_dir, &self.references)?;
            if self.progress {
                println!("ok");
            }

            summary.files.push(path);
        }

        info!(
            "Converted {} glass(es) into {}",
            summary.records(),
            self.out_dir.display()
        );

        Ok(summary)
    }
}

/// Convert a built-in catalog from its configured input file.
pub fn convert_catalog(catalog: &Catalog) -> Result<ConversionSummary> {
    CatalogConverter::for_catalog(catalog).convert_file(&catalog.input_path())
}
