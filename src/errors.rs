//! Error types with rich diagnostics using miette
//!
//! Parse errors carry the measurement string and a span so the offending
//! token is underlined when the report is rendered.

use std::fmt;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Source context for error reporting
#[derive(Debug, Clone)]
pub struct SourceContext {
    /// Name of the source shown in the report header
    pub name: String,
    /// The full measurement text
    pub source: String,
}

impl SourceContext {
    /// Create a new source context
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Context for a measurement string passed straight to the parser
    pub fn measurement(source: impl Into<String>) -> Self {
        Self::new("<measurement>", source)
    }

    /// Create a NamedSource for miette
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.source.clone())
    }
}

// ============================================================================
// Parse Errors
// ============================================================================

/// Errors that occur while parsing a measurement string
#[derive(Error, Diagnostic, Debug)]
pub enum ParseError {
    #[error("unable to parse measurement")]
    #[diagnostic(
        code(pagesizes::parse::no_measurement),
        help("write a number followed by a unit, e.g. `12.34 mm` or `5\"`")
    )]
    NoMeasurement {
        #[source_code]
        src: NamedSource<String>,
        #[label("no measurement found here")]
        span: SourceSpan,
    },

    #[error("unable to parse measurement")]
    #[diagnostic(
        code(pagesizes::parse::missing_unit),
        help("add a unit suffix such as `pt`, `mm` or `in`")
    )]
    MissingUnit {
        #[source_code]
        src: NamedSource<String>,
        #[label("this number has no unit")]
        span: SourceSpan,
    },

    #[error("too many measurements")]
    #[diagnostic(
        code(pagesizes::parse::too_many_measurements),
        help("a measurement string must describe exactly one length")
    )]
    TooManyMeasurements {
        count: usize,
        #[source_code]
        src: NamedSource<String>,
        #[label("first measurement")]
        first: SourceSpan,
        #[label("another measurement")]
        second: SourceSpan,
    },

    #[error("unknown unit: {unit}")]
    #[diagnostic(
        code(pagesizes::parse::unknown_unit),
        help("known units: pt, mm, cm, um, in, pc, dd, cc, nd, nc, sp")
    )]
    UnknownUnit {
        unit: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown unit")]
        span: SourceSpan,
    },
}

// ============================================================================
// Arithmetic Errors
// ============================================================================

/// Invalid operator combinations on lengths.
///
/// Only one dimensional class (length) is modelled, so anything that would
/// yield length², length⁻¹ or a dimensionless ratio is rejected.
#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionalError {
    #[error("multiplying a unit by another unit is not allowed")]
    #[diagnostic(
        code(pagesizes::arith::multiply_units),
        help("scale a unit by a plain number instead")
    )]
    MultiplyUnits,

    #[error("dividing a unit by another unit is not allowed")]
    #[diagnostic(
        code(pagesizes::arith::divide_units),
        help("compare `as_pt()` values to get a ratio")
    )]
    DivideUnits,

    #[error("dividing by a unit is not allowed")]
    #[diagnostic(code(pagesizes::arith::divide_by_unit))]
    DivideByUnit,

    #[error("modulo division of a unit by another unit is not allowed")]
    #[diagnostic(code(pagesizes::arith::modulo_units))]
    ModuloUnits,

    #[error("modulo division by a unit is not allowed")]
    #[diagnostic(code(pagesizes::arith::modulo_by_unit))]
    ModuloByUnit,

    #[error("powers are not supported for units")]
    #[diagnostic(
        code(pagesizes::arith::power),
        help("areas and other non-length quantities have no representation")
    )]
    Power,

    #[error("division by zero")]
    #[diagnostic(code(pagesizes::arith::division_by_zero))]
    DivisionByZero,
}

// ============================================================================
// Numeric Errors
// ============================================================================

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is negative when non-negative required
    Negative,
}

impl NumericError {
    /// Reject NaN and infinite values
    pub(crate) fn check_finite(val: f64) -> Result<f64, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else {
            Ok(val)
        }
    }

    /// Reject NaN, infinite and negative values
    pub(crate) fn check_non_negative(val: f64) -> Result<f64, NumericError> {
        let val = Self::check_finite(val)?;
        if val < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(val)
        }
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}
