//! Error types for AGF to YAML conversion.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for catalog processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// Empty file (-2)
    EmptyFile = -2,
    /// General parse error (-3)
    ParseError = -3,
    /// Unknown catalog key (-4)
    UnknownCatalog = -4,
    /// I/O failure while reading the catalog or writing records (-5)
    Io = -5,
    /// Unsupported dispersion formula (E100)
    UnknownFormula = 100,
    /// Coefficient list too short for its formula (E101)
    MissingCoefficients = 101,
    /// Formula without a wavelength range (E102)
    MissingRange = 102,
}

/// Main error type for the converter.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("Line {line}: tag {tag} is missing field '{field}'")]
    MissingField {
        line: usize,
        tag: String,
        field: String,
    },

    #[error("Invalid numeric value for '{field}' at line {line}: '{value}'")]
    InvalidNumber {
        line: usize,
        field: String,
        value: String,
    },

    #[error("Glass {name}: unsupported dispersion formula {formula_id}")]
    UnknownFormula { name: String, formula_id: u32 },

    #[error("Glass {name}: formula {formula_id} needs {expected} coefficients, found {found}")]
    MissingCoefficients {
        name: String,
        formula_id: u32,
        expected: usize,
        found: usize,
    },

    #[error("Glass {name}: no wavelength range (LD) given for the dispersion formula")]
    MissingRange { name: String },

    #[error("Unknown catalog '{name}' (valid: {known})")]
    UnknownCatalog { name: String, known: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ConvertError::FileNotFound { .. } => ErrorCode::FileNotFound,
            ConvertError::EmptyFile { .. } => ErrorCode::EmptyFile,
            ConvertError::ParseError { .. } => ErrorCode::ParseError,
            ConvertError::MissingField { .. } => ErrorCode::ParseError,
            ConvertError::InvalidNumber { .. } => ErrorCode::ParseError,
            ConvertError::UnknownFormula { .. } => ErrorCode::UnknownFormula,
            ConvertError::MissingCoefficients { .. } => ErrorCode::MissingCoefficients,
            ConvertError::MissingRange { .. } => ErrorCode::MissingRange,
            ConvertError::UnknownCatalog { .. } => ErrorCode::UnknownCatalog,
            ConvertError::Io(_) => ErrorCode::Io,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }

    /// Source line of a parse error, if the error came from the reader.
    pub fn line(&self) -> Option<usize> {
        match self {
            ConvertError::ParseError { line, .. }
            | ConvertError::MissingField { line, .. }
            | ConvertError::InvalidNumber { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Result type alias for converter operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
