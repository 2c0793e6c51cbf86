//! Integration tests for AGF to YAML conversion.
//!
//! Each test converts a small catalog into a temporary directory and checks
//! the written records.

use agf2yml_rs::{parse_agf, CatalogConverter, ConvertError};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const REFS: &str = "Test catalog";

const BK7: &str = "\
NM BK7 2 517642 1.5168 64.17 1 0
LD 0.3 2.5
CD 1.03961212 0.00600069867 0.231792344 0.0200179144 1.01046945 103.560653 0 0 0 0
IT 0.3 0.992 10
IT 2.5 0.8 10
";

const N_BK7_FULL: &str = "\
NM N-BK7 2 517642.251 1.5168 64.17 0 1 2
GC lead and arsenic free
ED 7.1 8.3 2.51 -0.0009 0
CD 1.03961212 0.00600069867 0.231792344 0.0200179144 1.01046945 103.560653 0 0 0 0
TD 1.86e-6 1.31e-8 -1.37e-11 4.34e-7 6.27e-10 0.17 20
OD 1 2 0 1 2.3 2
LD 0.3 2.5
IT 0.31 0.29 25
IT 0.32 0.6 25
";

// ==================== Helpers ====================

fn convert(content: &str) -> (TempDir, Vec<String>) {
    let dir = TempDir::new().unwrap();
    let summary = CatalogConverter::new(dir.path(), REFS)
        .quiet()
        .convert_str(content)
        .unwrap();
    let names = summary
        .files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    (dir, names)
}

fn read(dir: &Path, file: &str) -> String {
    fs::read_to_string(dir.join(file)).unwrap()
}

/// Lines of the `data: |` block of the tabulated k entry.
fn k_lines(content: &str) -> Vec<&str> {
    content
        .lines()
        .skip_while(|l| *l != "    data: |")
        .skip(1)
        .take_while(|l| l.starts_with("        "))
        .collect()
}

fn data_lines(content: &str) -> Vec<&str> {
    content
        .lines()
        .skip_while(|l| *l != "DATA:")
        .skip(1)
        .take(3)
        .collect()
}

// ==================== End to end ====================

#[test]
fn test_bk7_end_to_end() {
    let (dir, files) = convert(BK7);
    assert_eq!(files, vec!["BK7.yml"]);

    let content = read(dir.path(), "BK7.yml");
    assert_eq!(
        data_lines(&content),
        vec![
            "  - type: formula 2",
            "    range: 0.3 2.5",
            "    coefficients: 0 1.03961212 0.00600069867 0.231792344 0.0200179144 1.01046945 103.560653",
        ]
    );

    let k = k_lines(&content);
    assert_eq!(k, vec!["        0.300 1.9175E-08", "        2.500 4.4393E-06"]);

    let last_k: f64 = k[1].split_whitespace().nth(1).unwrap().parse().unwrap();
    assert!(last_k > 0.0 && last_k.is_finite());

    assert!(content.contains("    glass_code: 517642\n"));
    // status 0 is not a catalog status
    assert!(!content.contains("glass_status"));
    assert!(!content.contains("glass_melt_frequency"));
}

#[test]
fn test_full_record_snapshot() {
    let (dir, _) = convert(N_BK7_FULL);
    let content = read(dir.path(), "N-BK7.yml");

    insta::assert_snapshot!(content, @r#"
# this file is part of refractiveindex.info database
# refractiveindex.info database is in the public domain
# copyright and related rights waived via CC0 1.0

REFERENCES: "Test catalog"
COMMENTS: "lead and arsenic free"
DATA:
  - type: formula 2
    range: 0.3 2.5
    coefficients: 0 1.03961212 0.00600069867 0.231792344 0.0200179144 1.01046945 103.560653
  - type: tabulated k
    data: |
        0.310 1.2215E-06
        0.320 5.2032E-07
SPECS:
    n_is_absolute: false
    λ_is_vacuum: false
    temperature: 20.0 °C
    coefficients_of_thermal_dispersion: 1.86e-06 1.31e-08 -1.37e-11 4.34e-07 6.27e-10 0.17
    n_d: 1.5168
    V_d: 64.17
    glass_code: 517642.251
    glass_status: standard
    glass_melt_frequency: 2
    density: 2.51 g/cm<sup>3</sup>
    coefficient_of_thermal_expansion_1: 7.1e-06 K<sup>-1</sup>
    coefficient_of_thermal_expansion_2: 8.3e-06 K<sup>-1</sup>
    ΔP_gF: -0.0009
    climatic_resistance: 2.0
    stain_resistance: 0.0
    acid_resistance: 1.0
    alkali_resistance: 2.3
    phosphate_resistance: 2.0
"#);
}

// ==================== Record isolation ====================

#[test]
fn test_two_nm_blocks_two_files() {
    let content = "\
NM FIRST 2 0 1.5 60
LD 0.3 2.5
CD 1.0 0.01
IT 0.4 0.9 10
GC first comment
NM SECOND 1 0 1.6 40
LD 0.4 2.0
CD 2.5 -0.01
";
    let (dir, files) = convert(content);
    assert_eq!(files, vec!["FIRST.yml", "SECOND.yml"]);

    let first = read(dir.path(), "FIRST.yml");
    let second = read(dir.path(), "SECOND.yml");

    assert!(first.contains("COMMENTS: \"first comment\""));
    assert!(!second.contains("COMMENTS"));
    assert_eq!(k_lines(&first).len(), 1);
    assert!(k_lines(&second).is_empty());
    assert!(second.contains("  - type: formula 3\n    range: 0.4 2.0\n    coefficients: 2.5 -0.01 2\n"));
}

#[test]
fn test_filename_sanitized() {
    let (dir, files) = convert("NM F*K9 2 0 1.5 60\nLD 0.3 2.5\nCD 1 0.1\n");
    assert_eq!(files, vec!["FstarK9.yml"]);
    assert!(dir.path().join("FstarK9.yml").exists());
}

#[test]
fn test_conversion_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let converter = CatalogConverter::new(dir.path(), REFS).quiet();

    converter.convert_str(N_BK7_FULL).unwrap();
    let first = fs::read(dir.path().join("N-BK7.yml")).unwrap();

    converter.convert_str(N_BK7_FULL).unwrap();
    let second = fs::read(dir.path().join("N-BK7.yml")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_output_directory_created() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("output").join("schott");
    CatalogConverter::new(&out, REFS)
        .quiet()
        .convert_str(BK7)
        .unwrap();
    assert!(out.join("BK7.yml").is_file());
}

// ==================== Formula mapping ====================

#[test]
fn test_formula_1_all_zero_coefficients() {
    let (dir, _) = convert("NM Z 1 0 1.5 60\nLD 0.3 2.5\nCD 0 0 0 0 0 0\n");
    let content = read(dir.path(), "Z.yml");
    assert_eq!(
        data_lines(&content),
        vec!["  - type: formula 3", "    range: 0.3 2.5", "    coefficients:"]
    );
}

#[test]
fn test_formula_3_always_five_coefficients() {
    let (dir, _) = convert("NM H 3 0 1.5 60\nLD 0.4 1.0\nCD 0 0 0 0 0 0\n");
    let content = read(dir.path(), "H.yml");
    assert_eq!(
        data_lines(&content),
        vec![
            "  - type: formula 4",
            "    range: 0.4 1.0",
            "    coefficients: 1.0 0.0 2 0.0 2 0.0 0 0.0 2",
        ]
    );
}

#[test]
fn test_formula_6_uses_sellmeier_mapping() {
    let (dir, _) = convert("NM S3 6 0 1.5 60\nLD 0.4 1.0\nCD 1.2 0.01 0 0 0.5 90\n");
    let content = read(dir.path(), "S3.yml");
    assert!(content.contains("    coefficients: 0 1.2 0.01 0.5 90.0\n"));
}

#[test]
fn test_formula_12_not_treated_as_sellmeier() {
    let (dir, _) = convert("NM E2 12 0 1.5 60\nLD 0.4 1.0\nCD 2.0 0 0 0 0 0 1e-5 0\n");
    let content = read(dir.path(), "E2.yml");
    assert_eq!(
        data_lines(&content),
        vec![
            "  - type: formula 3",
            "    range: 0.4 1.0",
            "    coefficients: 2.0 1e-05 4",
        ]
    );
}

#[test]
fn test_formula_13_exponents() {
    let (dir, _) = convert("NM E3 13 0 1.5 60\nLD 0.4 1.0\nCD 2.0 0.1 0.2 0.3 0 0 0 0 0.4\n");
    let content = read(dir.path(), "E3.yml");
    assert_eq!(
        data_lines(&content),
        vec![
            "  - type: formula 3",
            "    range: 0.4 1.0",
            "    coefficients: 2.0 0.1 2 0.2 4 0.3 -2 0.4 -12",
        ]
    );
}

#[test]
fn test_unknown_formula_stops_conversion() {
    let dir = TempDir::new().unwrap();
    let content = "\
NM GOOD 2 0 1.5 60
LD 0.3 2.5
CD 1 0.1
NM BAD 5 0 1.5 60
LD 0.3 2.5
CD 1 0.1
";
    let err = CatalogConverter::new(dir.path(), REFS)
        .quiet()
        .convert_str(content)
        .unwrap_err();

    assert!(matches!(
        err,
        ConvertError::UnknownFormula { ref name, formula_id: 5 } if name == "BAD"
    ));
    assert!(dir.path().join("GOOD.yml").exists());
    assert!(!dir.path().join("BAD.yml").exists());
}

#[test]
fn test_parse_error_reports_line() {
    let dir = TempDir::new().unwrap();
    let err = CatalogConverter::new(dir.path(), REFS)
        .quiet()
        .convert_str("NM A 2 0 1.5 60\nLD 0.3 2.5\nED 1 2\n")
        .unwrap_err();
    assert_eq!(err.line(), Some(3));
    assert_eq!(err.to_string(), "Line 3: tag ED is missing field 'density'");
}

// ==================== Sentinel suppression ====================

#[test]
fn test_sentinels_omit_spec_keys() {
    let content = "\
NM S 2 0 1.5 60 0 2
LD 0.3 2.5
CD 1 0.1
ED - - - -
OD 1 -1 - -1 - -1
";
    let (dir, _) = convert(content);
    let record = read(dir.path(), "S.yml");

    for key in [
        "density",
        "coefficient_of_thermal_expansion_1",
        "coefficient_of_thermal_expansion_2",
        "ΔP_gF",
        "climatic_resistance",
        "stain_resistance",
        "acid_resistance",
        "alkali_resistance",
        "phosphate_resistance",
        "glass_code",
        "temperature",
    ] {
        assert!(!record.contains(key), "{key} should be omitted");
    }
    assert!(record.ends_with("    glass_status: preferred\n"));
}

#[test]
fn test_zero_transmittance_point_dropped() {
    let (dir, _) = convert("NM T 2 0 1.5 60\nLD 0.3 2.5\nCD 1 0.1\nIT 0.3 0 10\nIT 0.4 0.5 10\n");
    let content = read(dir.path(), "T.yml");
    let k = k_lines(&content);
    assert_eq!(k.len(), 1);
    assert!(k[0].starts_with("        0.400 "));
}

// ==================== File input ====================

#[test]
fn test_convert_utf16_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("catalog.agf");

    let mut bytes = vec![0xFF, 0xFE];
    for unit in BK7.replace('\n', "\r\n").encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    fs::write(&input, bytes).unwrap();

    let out = dir.path().join("out");
    let summary = CatalogConverter::new(&out, REFS)
        .quiet()
        .convert_file(&input)
        .unwrap();

    assert_eq!(summary.records(), 1);
    let content = read(&out, "BK7.yml");
    assert_eq!(k_lines(&content).len(), 2);
}

#[test]
fn test_empty_file_rejected() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("empty.agf");
    fs::write(&input, "\n  \n").unwrap();

    let err = CatalogConverter::new(dir.path(), REFS)
        .quiet()
        .convert_file(&input)
        .unwrap_err();
    assert!(matches!(err, ConvertError::EmptyFile { .. }));
}

#[test]
fn test_reader_and_converter_agree_on_count() {
    let records: Vec<_> = parse_agf(&format!("{BK7}{N_BK7_FULL}"))
        .collect::<Result<_, _>>()
        .unwrap();
    let (_dir, files) = convert(&format!("{BK7}{N_BK7_FULL}"));
    assert_eq!(records.len(), files.len());
}
