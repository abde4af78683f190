//! Strongly-typed length values, canonically stored in points.
//!
//! A [`Unit`] keeps its magnitude in PostScript points (1/72 inch) and
//! remembers a [`LengthUnit`] tag purely for display and for interpreting
//! bare numbers in arithmetic. Conversions go through exact decimals so the
//! factor multiplication never compounds binary floating-point error.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};
use std::str::FromStr;

use miette::SourceSpan;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

use crate::errors::{DimensionalError, NumericError, ParseError, SourceContext};
use crate::log::warn;

/// Medium mathematical space, used between value and unit name in `Display`.
const UNIT_SPACE: char = '\u{205F}';

/// The physical units a length can be expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    /// PostScript point, the canonical unit
    Pt,
    Inch,
    Cm,
    Mm,
    /// Micrometre
    Um,
    Pica,
    Didot,
    Cicero,
    NewDidot,
    NewCicero,
    /// TeX scaled point, 1/65536 pt
    ScaledPoint,
}

impl LengthUnit {
    /// Every unit, in table order
    pub const ALL: [LengthUnit; 11] = [
        LengthUnit::Pt,
        LengthUnit::Inch,
        LengthUnit::Cm,
        LengthUnit::Mm,
        LengthUnit::Um,
        LengthUnit::Pica,
        LengthUnit::Didot,
        LengthUnit::Cicero,
        LengthUnit::NewDidot,
        LengthUnit::NewCicero,
        LengthUnit::ScaledPoint,
    ];

    /// Display name, as used by `Debug`/`Display` of [`Unit`]
    pub fn name(self) -> &'static str {
        match self {
            LengthUnit::Pt => "pt",
            LengthUnit::Inch => "inch",
            LengthUnit::Cm => "cm",
            LengthUnit::Mm => "mm",
            LengthUnit::Um => "µm",
            LengthUnit::Pica => "pc",
            LengthUnit::Didot => "dd",
            LengthUnit::Cicero => "cc",
            LengthUnit::NewDidot => "nd",
            LengthUnit::NewCicero => "nc",
            LengthUnit::ScaledPoint => "sp",
        }
    }

    /// Exact number of points in one of this unit
    pub fn points_per_unit_exact(self) -> Decimal {
        match self {
            LengthUnit::Pt => Decimal::ONE,
            LengthUnit::Inch => dec!(72),
            LengthUnit::Cm => dec!(72) / dec!(2.54),
            LengthUnit::Mm => LengthUnit::Cm.points_per_unit_exact() * dec!(0.1),
            LengthUnit::Um => LengthUnit::Mm.points_per_unit_exact() * dec!(0.01),
            LengthUnit::Pica => dec!(12),
            LengthUnit::Didot => dec!(1.07),
            LengthUnit::Cicero => dec!(1.07) * dec!(12),
            LengthUnit::NewDidot => dec!(1.067),
            LengthUnit::NewCicero => dec!(1.067) * dec!(12),
            LengthUnit::ScaledPoint => Decimal::ONE / dec!(65536),
        }
    }

    /// Number of points in one of this unit
    #[inline]
    pub fn points_per_unit(self) -> f64 {
        self.points_per_unit_exact().to_f64().unwrap_or(f64::NAN)
    }

    /// Convert a magnitude in this unit to points.
    pub fn to_points(self, value: f64) -> f64 {
        exact(value)
            .and_then(|d| self.exact_to_points(d))
            .unwrap_or_else(|| {
                warn!(value, unit = self.name(), "no exact form, converting in binary");
                value * self.points_per_unit()
            })
    }

    /// Convert a point magnitude to this unit.
    pub fn from_points(self, points: f64) -> f64 {
        exact(points)
            .and_then(|d| d.checked_div(self.points_per_unit_exact()))
            .and_then(|d| d.to_f64())
            .unwrap_or_else(|| {
                warn!(points, unit = self.name(), "no exact form, converting in binary");
                points / self.points_per_unit()
            })
    }

    /// Multiply an exact magnitude by the exact factor.
    ///
    /// Parsed literals and `Unit::new` both land here, so the same decimal
    /// always yields the same bits.
    pub(crate) fn exact_to_points(self, value: Decimal) -> Option<f64> {
        value
            .normalize()
            .checked_mul(self.points_per_unit_exact())
            .and_then(|d| d.to_f64())
    }

    /// Look up a unit by its measurement-string suffix.
    pub fn from_suffix(suffix: &str) -> Option<LengthUnit> {
        let unit = match suffix {
            "pt" => LengthUnit::Pt,
            "mm" => LengthUnit::Mm,
            "cm" => LengthUnit::Cm,
            // latin "u", micro sign, greek mu
            "um" | "µm" | "μm" => LengthUnit::Um,
            "in" | "inch" | "\"" => LengthUnit::Inch,
            "pc" | "pica" => LengthUnit::Pica,
            "dd" => LengthUnit::Didot,
            "cc" => LengthUnit::Cicero,
            "nd" => LengthUnit::NewDidot,
            "nc" => LengthUnit::NewCicero,
            "sp" => LengthUnit::ScaledPoint,
            _ => return None,
        };
        Some(unit)
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LengthUnit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LengthUnit::from_suffix(s).ok_or_else(|| ParseError::UnknownUnit {
            unit: s.to_string(),
            src: SourceContext::new("<unit>", s).named_source(),
            span: SourceSpan::from((0, s.len())),
        })
    }
}

/// Largest relative drift tolerated between a float and its decimal form.
const DECIMAL_DRIFT: f64 = 1e-12;

/// Exact decimal form of a float, via its shortest round-trip rendering.
fn exact(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    let decimal = value.to_string().parse::<Decimal>().ok()?;
    is_faithful(decimal, value).then_some(decimal)
}

/// Whether `decimal` still carries the significant digits of `value`.
///
/// Decimal parsing rounds away fractional digits past scale 28, which zeroes
/// tiny magnitudes instead of failing.
pub(crate) fn is_faithful(decimal: Decimal, value: f64) -> bool {
    decimal
        .to_f64()
        .is_some_and(|back| (back - value).abs() <= value.abs() * DECIMAL_DRIFT)
}

/// Remainder whose sign follows the divisor, pairing with `floor` division.
fn floor_rem(x: f64, n: f64) -> f64 {
    let r = x % n;
    if r != 0.0 && (r < 0.0) != (n < 0.0) { r + n } else { r }
}

/// A length: magnitude in points plus the unit it is presented in.
#[derive(Clone, Copy)]
pub struct Unit {
    pt: f64,
    unit: LengthUnit,
}

impl Unit {
    /// Create a length of `value` expressed in `unit`.
    pub fn new(value: f64, unit: LengthUnit) -> Unit {
        Unit {
            pt: unit.to_points(value),
            unit,
        }
    }

    /// Create a length with validation (rejects NaN/infinite)
    pub fn try_new(value: f64, unit: LengthUnit) -> Result<Unit, NumericError> {
        NumericError::check_finite(value).map(|v| Unit::new(v, unit))
    }

    /// Create a length tagged `unit` from a magnitude already in points.
    #[inline]
    pub const fn from_pt(points: f64, unit: LengthUnit) -> Unit {
        Unit { pt: points, unit }
    }

    pub(crate) fn from_exact(value: Decimal, unit: LengthUnit) -> Unit {
        let pt = unit.exact_to_points(value).unwrap_or_else(|| {
            warn!(%value, unit = unit.name(), "decimal overflow, converting in binary");
            value.to_f64().unwrap_or(f64::NAN) * unit.points_per_unit()
        });
        Unit { pt, unit }
    }

    pub fn pt(value: f64) -> Unit {
        Unit::new(value, LengthUnit::Pt)
    }

    pub fn inch(value: f64) -> Unit {
        Unit::new(value, LengthUnit::Inch)
    }

    pub fn cm(value: f64) -> Unit {
        Unit::new(value, LengthUnit::Cm)
    }

    pub fn mm(value: f64) -> Unit {
        Unit::new(value, LengthUnit::Mm)
    }

    pub fn um(value: f64) -> Unit {
        Unit::new(value, LengthUnit::Um)
    }

    pub fn pica(value: f64) -> Unit {
        Unit::new(value, LengthUnit::Pica)
    }

    pub fn didot(value: f64) -> Unit {
        Unit::new(value, LengthUnit::Didot)
    }

    pub fn cicero(value: f64) -> Unit {
        Unit::new(value, LengthUnit::Cicero)
    }

    pub fn new_didot(value: f64) -> Unit {
        Unit::new(value, LengthUnit::NewDidot)
    }

    pub fn new_cicero(value: f64) -> Unit {
        Unit::new(value, LengthUnit::NewCicero)
    }

    pub fn scaled_point(value: f64) -> Unit {
        Unit::new(value, LengthUnit::ScaledPoint)
    }

    /// The canonical magnitude in points
    #[inline]
    pub fn as_pt(self) -> f64 {
        self.pt
    }

    /// The magnitude expressed in this length's own unit
    pub fn value(self) -> f64 {
        self.unit.from_points(self.pt)
    }

    #[inline]
    pub fn unit(self) -> LengthUnit {
        self.unit
    }

    #[inline]
    pub fn name(self) -> &'static str {
        self.unit.name()
    }

    /// Re-tag this length, keeping its magnitude
    pub fn convert(self, unit: LengthUnit) -> Unit {
        Unit::from_pt(self.pt, unit)
    }

    /// Read a bare number in this length's unit, as points.
    fn number_as_pt(self, n: f64) -> f64 {
        self.unit.to_points(n)
    }

    /// Addition never fails; provided so every operator has a `try_*` form.
    pub fn try_add(self, rhs: impl Into<Operand>) -> Result<Unit, DimensionalError> {
        match rhs.into() {
            Operand::Number(n) => Ok(self + n),
            Operand::Length(u) => Ok(self + u),
        }
    }

    pub fn try_sub(self, rhs: impl Into<Operand>) -> Result<Unit, DimensionalError> {
        match rhs.into() {
            Operand::Number(n) => Ok(self - n),
            Operand::Length(u) => Ok(self - u),
        }
    }

    /// Multiply by a dimensionless number; `unit * unit` is rejected.
    pub fn try_mul(self, rhs: impl Into<Operand>) -> Result<Unit, DimensionalError> {
        match rhs.into() {
            Operand::Number(n) => Ok(self * n),
            Operand::Length(_) => Err(DimensionalError::MultiplyUnits),
        }
    }

    /// True division by a dimensionless number.
    pub fn try_div(self, rhs: impl Into<Operand>) -> Result<Unit, DimensionalError> {
        match rhs.into() {
            Operand::Number(n) if n == 0.0 => Err(DimensionalError::DivisionByZero),
            Operand::Number(n) => Ok(self / n),
            Operand::Length(_) => Err(DimensionalError::DivideUnits),
        }
    }

    /// Floor division of the magnitude in this unit by a dimensionless number.
    pub fn try_floor_div(self, rhs: impl Into<Operand>) -> Result<Unit, DimensionalError> {
        match rhs.into() {
            Operand::Number(n) if n == 0.0 => Err(DimensionalError::DivisionByZero),
            Operand::Number(n) => Ok(Unit::new((self.value() / n).floor(), self.unit)),
            Operand::Length(_) => Err(DimensionalError::DivideUnits),
        }
    }

    /// Remainder of the magnitude in this unit, with the sign of the divisor.
    ///
    /// Pairs with [`Unit::try_floor_div`]: `q * n + r` gives back the magnitude.
    pub fn try_rem(self, rhs: impl Into<Operand>) -> Result<Unit, DimensionalError> {
        match rhs.into() {
            Operand::Number(n) if n == 0.0 => Err(DimensionalError::DivisionByZero),
            Operand::Number(n) => Ok(self % n),
            Operand::Length(_) => Err(DimensionalError::ModuloUnits),
        }
    }

    /// Always fails: length² and friends have no representation.
    pub fn try_pow(self, _rhs: impl Into<Operand>) -> Result<Unit, DimensionalError> {
        Err(DimensionalError::Power)
    }
}

impl PartialEq for Unit {
    fn eq(&self, other: &Unit) -> bool {
        self.pt == other.pt
    }
}

impl PartialOrd for Unit {
    fn partial_cmp(&self, other: &Unit) -> Option<Ordering> {
        self.pt.partial_cmp(&other.pt)
    }
}

impl Default for Unit {
    fn default() -> Unit {
        Unit::from_pt(0.0, LengthUnit::Pt)
    }
}

// Unit ± Unit mixes tags, so the result is plain points.
impl Add for Unit {
    type Output = Unit;
    fn add(self, rhs: Unit) -> Unit {
        Unit::from_pt(self.pt + rhs.pt, LengthUnit::Pt)
    }
}

impl Sub for Unit {
    type Output = Unit;
    fn sub(self, rhs: Unit) -> Unit {
        Unit::from_pt(self.pt - rhs.pt, LengthUnit::Pt)
    }
}

// Bare numbers are read in the unit's own tag, which the result keeps.
impl Add<f64> for Unit {
    type Output = Unit;
    fn add(self, rhs: f64) -> Unit {
        Unit::from_pt(self.pt + self.number_as_pt(rhs), self.unit)
    }
}

impl Add<Unit> for f64 {
    type Output = Unit;
    fn add(self, rhs: Unit) -> Unit {
        rhs + self
    }
}

impl Sub<f64> for Unit {
    type Output = Unit;
    fn sub(self, rhs: f64) -> Unit {
        Unit::from_pt(self.pt - self.number_as_pt(rhs), self.unit)
    }
}

impl Sub<Unit> for f64 {
    type Output = Unit;
    fn sub(self, rhs: Unit) -> Unit {
        Unit::from_pt(rhs.number_as_pt(self) - rhs.pt, rhs.unit)
    }
}

impl Mul<f64> for Unit {
    type Output = Unit;
    fn mul(self, rhs: f64) -> Unit {
        Unit::from_pt(self.pt * rhs, self.unit)
    }
}

impl Mul<Unit> for f64 {
    type Output = Unit;
    fn mul(self, rhs: Unit) -> Unit {
        rhs * self
    }
}

// NOTE: Unit * Unit, Unit / Unit and f64 / Unit are intentionally NOT
// implemented as traits. Use the `try_*` methods or `Operand::apply`.

/// Unchecked: a zero divisor yields an infinite length. See [`Unit::try_div`].
impl Div<f64> for Unit {
    type Output = Unit;
    fn div(self, rhs: f64) -> Unit {
        Unit::from_pt(self.pt / rhs, self.unit)
    }
}

impl Rem<f64> for Unit {
    type Output = Unit;
    fn rem(self, rhs: f64) -> Unit {
        Unit::new(floor_rem(self.value(), rhs), self.unit)
    }
}

impl Neg for Unit {
    type Output = Unit;
    fn neg(self) -> Unit {
        Unit::from_pt(-self.pt, self.unit)
    }
}

impl fmt::Debug for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Unit '{:.3} {}': {:.3}pt>", self.value(), self.name(), self.pt)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Unit '{:.3}{}{}': {:.3}pt>",
            self.value(),
            UNIT_SPACE,
            self.name(),
            self.pt
        )
    }
}

impl FromStr for Unit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_measurement(s)
    }
}

// ============================================================================
// Dynamic arithmetic
// ============================================================================

/// Binary operators accepted by [`Operand::apply`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    FloorDiv,
    Rem,
    Pow,
}

/// Either side of an arithmetic expression: a bare number or a length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand {
    Number(f64),
    Length(Unit),
}

impl From<f64> for Operand {
    fn from(n: f64) -> Operand {
        Operand::Number(n)
    }
}

impl From<i32> for Operand {
    fn from(n: i32) -> Operand {
        Operand::Number(f64::from(n))
    }
}

impl From<Unit> for Operand {
    fn from(u: Unit) -> Operand {
        Operand::Length(u)
    }
}

impl Operand {
    /// Evaluate `self op rhs`, enforcing the dimensional rules.
    pub fn apply(self, op: ArithOp, rhs: impl Into<Operand>) -> Result<Operand, DimensionalError> {
        use Operand::*;
        let rhs = rhs.into();
        let result = match (self, rhs, op) {
            // Powers never involve a length
            (Length(_), _, ArithOp::Pow) | (_, Length(_), ArithOp::Pow) => {
                return Err(DimensionalError::Power);
            }
            // Length on the left: the typed methods hold the rules
            (Length(a), b, ArithOp::Add) => Length(a.try_add(b)?),
            (Length(a), b, ArithOp::Sub) => Length(a.try_sub(b)?),
            (Length(a), b, ArithOp::Mul) => Length(a.try_mul(b)?),
            (Length(a), b, ArithOp::Div) => Length(a.try_div(b)?),
            (Length(a), b, ArithOp::FloorDiv) => Length(a.try_floor_div(b)?),
            (Length(a), b, ArithOp::Rem) => Length(a.try_rem(b)?),
            // Number on the left of a length
            (Number(a), Length(b), ArithOp::Add) => Length(a + b),
            (Number(a), Length(b), ArithOp::Sub) => Length(a - b),
            (Number(a), Length(b), ArithOp::Mul) => Length(a * b),
            (Number(_), Length(_), ArithOp::Div | ArithOp::FloorDiv) => {
                return Err(DimensionalError::DivideByUnit);
            }
            (Number(_), Length(_), ArithOp::Rem) => {
                return Err(DimensionalError::ModuloByUnit);
            }
            // Plain numbers
            (Number(a), Number(b), ArithOp::Add) => Number(a + b),
            (Number(a), Number(b), ArithOp::Sub) => Number(a - b),
            (Number(a), Number(b), ArithOp::Mul) => Number(a * b),
            (Number(_), Number(b), ArithOp::Div | ArithOp::FloorDiv | ArithOp::Rem)
                if b == 0.0 =>
            {
                return Err(DimensionalError::DivisionByZero);
            }
            (Number(a), Number(b), ArithOp::Div) => Number(a / b),
            (Number(a), Number(b), ArithOp::FloorDiv) => Number((a / b).floor()),
            (Number(a), Number(b), ArithOp::Rem) => Number(floor_rem(a, b)),
            (Number(a), Number(b), ArithOp::Pow) => Number(a.powf(b)),
        };
        Ok(result)
    }

    /// The length, if this operand is one
    pub fn as_length(self) -> Option<Unit> {
        match self {
            Operand::Length(u) => Some(u),
            Operand::Number(_) => None,
        }
    }
}

// ============================================================================
// convert_from
// ============================================================================

/// Anything that can say how many points one of it is worth.
pub trait PointFactor {
    fn points_per_unit(&self) -> f64;
}

impl PointFactor for LengthUnit {
    fn points_per_unit(&self) -> f64 {
        LengthUnit::points_per_unit(*self)
    }
}

/// A length's point value doubles as a factor (`inch` is 72pt)
impl PointFactor for Unit {
    fn points_per_unit(&self) -> f64 {
        self.pt
    }
}

impl PointFactor for f64 {
    fn points_per_unit(&self) -> f64 {
        *self
    }
}

/// A value or sequence of values that can be scaled into points.
pub trait Convertible {
    type Output;
    fn scale_by(self, factor: f64) -> Self::Output;
}

impl Convertible for f64 {
    type Output = f64;
    fn scale_by(self, factor: f64) -> f64 {
        self * factor
    }
}

impl Convertible for (f64, f64) {
    type Output = (f64, f64);
    fn scale_by(self, factor: f64) -> (f64, f64) {
        (self.0 * factor, self.1 * factor)
    }
}

impl<const N: usize> Convertible for [f64; N] {
    type Output = [f64; N];
    fn scale_by(self, factor: f64) -> [f64; N] {
        self.map(|v| v * factor)
    }
}

impl Convertible for &[f64] {
    type Output = Vec<f64>;
    fn scale_by(self, factor: f64) -> Vec<f64> {
        self.iter().map(|v| v * factor).collect()
    }
}

impl Convertible for Vec<f64> {
    type Output = Vec<f64>;
    fn scale_by(self, factor: f64) -> Vec<f64> {
        self.into_iter().map(|v| v * factor).collect()
    }
}

/// Convert `value` (a number or a sequence of numbers) from the unit `from`
/// into points.
///
/// `from` is a [`LengthUnit`], a [`Unit`] whose point value is the factor, or
/// a bare number of points per unit.
pub fn convert_from<V: Convertible, F: PointFactor>(value: V, from: F) -> V::Output {
    value.scale_by(from.points_per_unit())
}
