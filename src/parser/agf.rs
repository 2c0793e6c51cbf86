//! Streaming AGF catalog reader.

use crate::error::{ConvertError, Result};
use crate::model::{GlassRecord, RawNumber, Resistance, TransmittanceSample};
use std::path::Path;
use tracing::debug;

use super::decode::read_catalog_file;
use super::fields::{parse_optional_number, TaggedLine};

/// Climatic resistance grade some vendors give as a range.
const CR_RANGE_TOKEN: &str = "3-4";
const CR_RANGE_VALUE: &str = "3.5";

/// Reads glass records from AGF lines, one record per `NM` block.
///
/// The reader is lazy: a record is yielded when the next `NM` line (or the
/// end of input) closes it. After an error the iterator is exhausted.
pub struct AgfReader<I> {
    lines: I,
    /// Record opened by the last `NM` line.
    current: Option<GlassRecord>,
    /// Number of lines consumed so far.
    line_no: usize,
    finished: bool,
}

impl<I> AgfReader<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    /// Create a reader over catalog lines.
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            current: None,
            line_no: 0,
            finished: false,
        }
    }

    /// Apply one line to the open record. Returns the previous record when
    /// an `NM` line closes it.
    fn apply_line(&mut self, text: &str) -> Result<Option<GlassRecord>> {
        let Some(line) = TaggedLine::split(text, self.line_no) else {
            return Ok(None);
        };

        if line.tag() == "NM" {
            let record = parse_name_line(&line)?;
            debug!("Line {}: glass {}", line.line, record.name);
            return Ok(self.current.replace(record));
        }

        let Some(record) = self.current.as_mut() else {
            debug!("Line {}: {} before first NM, skipped", line.line, line.tag());
            return Ok(None);
        };

        match line.tag() {
            "LD" => {
                let min = line.number(1, "wl_min")?;
                let max = line.number(2, "wl_max")?;
                record.wavelength_range = Some((min, max));
            }
            "CD" => record.disp_coefficients = line.numbers_from(1, "disp_coefficients")?,
            "TD" => record.thermal_coefficients = line.numbers_from(1, "thermal_coefficients")?,
            "ED" => {
                record.cte1 = line.optional_number(1, "cte1")?;
                record.cte2 = line.optional_number(2, "cte2")?;
                record.density = line.optional_number(3, "density")?;
                record.dpgf = line.optional_number(4, "dpgf")?;
            }
            "OD" => {
                if line.len() > 2 {
                    record.resistance = parse_resistance(&line)?;
                }
            }
            "IT" => {
                if line.len() > 3 {
                    record.transmittance.push(TransmittanceSample {
                        wavelength: line.number(1, "wavelength")?,
                        transmittance: line.number(2, "transmittance")?,
                        thickness: line.number(3, "thickness")?,
                    });
                } else {
                    debug!("Line {}: incomplete IT line skipped", line.line);
                }
            }
            "GC" => {
                record.comments = line.rest(1).iter().map(|s| s.to_string()).collect();
            }
            _ => {}
        }

        Ok(None)
    }
}

impl<I> Iterator for AgfReader<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = Result<GlassRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        while let Some(text) = self.lines.next() {
            self.line_no += 1;
            match self.apply_line(text.as_ref()) {
                Ok(Some(record)) => return Some(Ok(record)),
                Ok(None) => {}
                Err(e) => {
                    self.finished = true;
                    self.current = None;
                    return Some(Err(e));
                }
            }
        }

        self.finished = true;
        self.current.take().map(Ok)
    }
}

/// Parse an `NM` line into a fresh record.
///
/// `NM name formula glass_code nd vd exclude_sub status melt_freq`
fn parse_name_line(line: &TaggedLine<'_>) -> Result<GlassRecord> {
    let name = line.require(1, "name")?;
    let mut record = GlassRecord::new(name, line.line);

    let formula = line.number(2, "formula_id")?;
    if formula < 0.0 || formula.fract() != 0.0 {
        return Err(ConvertError::ParseError {
            line: line.line,
            message: format!(
                "formula id '{}' is not a non-negative integer",
                line.require(2, "formula_id")?
            ),
        });
    }
    record.formula_id = formula as u32;

    let code = line.require(3, "glass_code")?;
    record.glass_code = parse_optional_number(code, line.line, "glass_code")?
        .map(|value| RawNumber::new(code, value));
    record.nd = line.require(4, "nd")?.to_string();
    record.vd = line.require(5, "vd")?.to_string();

    if let Some(status) = line.get(7) {
        record.status = parse_optional_number(status, line.line, "status")?.map(|v| v as i64);
    }
    if let Some(freq) = line.get(8) {
        record.melt_frequency = parse_optional_number(freq, line.line, "melt_frequency")?
            .map(|value| RawNumber::new(freq, value));
    }

    Ok(record)
}

/// Parse the resistance grades of an `OD` line.
///
/// `OD rel_cost CR FR SR AR PR`
fn parse_resistance(line: &TaggedLine<'_>) -> Result<Resistance> {
    let climatic = match line.require(2, "climatic_resistance")? {
        CR_RANGE_TOKEN => CR_RANGE_VALUE,
        token => token,
    };

    Ok(Resistance {
        climatic: parse_optional_number(climatic, line.line, "climatic_resistance")?,
        stain: line.optional_number(3, "stain_resistance")?,
        acid: line.optional_number(4, "acid_resistance")?,
        alkali: line.optional_number(5, "alkali_resistance")?,
        phosphate: line.optional_number(6, "phosphate_resistance")?,
    })
}

/// Create a reader over in-memory catalog content.
pub fn parse_agf(content: &str) -> AgfReader<std::str::Lines<'_>> {
    AgfReader::new(content.lines())
}

/// Parse every glass record of an AGF file.
pub fn parse_agf_file(path: &Path) -> Result<Vec<GlassRecord>> {
    let content = read_catalog_file(path)?;
    parse_agf(&content).collect()
}
