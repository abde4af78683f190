//! Width × height pairs of lengths.

use std::fmt;

use crate::errors::NumericError;
use crate::units::{LengthUnit, Unit};

/// Absolute tolerance when comparing a size against a bare `(w, h)` pair
const TUPLE_TOLERANCE: f64 = 1e-8;

/// A page or card size.
///
/// Both dimensions are [`Unit`]s, so they are stored in points; the display
/// unit only changes how they are read back. Equality compares points.
///
/// Dimensions are never negative, NaN or infinite: every public constructor
/// checks them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    width: Unit,
    height: Unit,
}

impl Size {
    /// Convert `width` and `height` from `unit` into a point size.
    pub fn new(width: f64, height: f64, unit: LengthUnit) -> Result<Size, NumericError> {
        Size::with_unit(width, height, unit).map(Size::to_pt)
    }

    /// A size whose values are read, and presented, in `unit`.
    pub fn with_unit(width: f64, height: f64, unit: LengthUnit) -> Result<Size, NumericError> {
        let width = NumericError::check_non_negative(width)?;
        let height = NumericError::check_non_negative(height)?;
        Ok(Size::unchecked(width, height, unit))
    }

    /// Build a size from a `(width, height)` pair in `unit`.
    pub fn from_size((width, height): (f64, f64), unit: LengthUnit) -> Result<Size, NumericError> {
        Size::with_unit(width, height, unit)
    }

    /// For dimensions already known to be valid, such as the named table.
    pub(crate) fn unchecked(width: f64, height: f64, unit: LengthUnit) -> Size {
        Size {
            width: Unit::new(width, unit),
            height: Unit::new(height, unit),
        }
    }

    /// Re-project a size into `unit`.
    pub fn from_pt(size: Size, unit: LengthUnit) -> Size {
        size.convert(unit)
    }

    #[inline]
    pub fn width(&self) -> Unit {
        self.width
    }

    #[inline]
    pub fn height(&self) -> Unit {
        self.height
    }

    /// The display unit
    #[inline]
    pub fn unit(&self) -> LengthUnit {
        self.width.unit()
    }

    /// Width and height in the display unit
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.width.value(), self.height.value())
    }

    /// Width and height in points
    pub fn as_pt_tuple(&self) -> (f64, f64) {
        (self.width.as_pt(), self.height.as_pt())
    }

    pub fn is_portrait(&self) -> bool {
        self.width < self.height
    }

    /// Squares count as landscape.
    pub fn is_landscape(&self) -> bool {
        self.width >= self.height
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// This size in landscape orientation
    pub fn landscape(self) -> Size {
        if self.is_portrait() { self.swapped() } else { self }
    }

    /// This size in portrait orientation
    pub fn portrait(self) -> Size {
        if self.is_landscape() { self.swapped() } else { self }
    }

    fn swapped(self) -> Size {
        Size {
            width: self.height,
            height: self.width,
        }
    }

    /// Present this size in `unit`, going through points.
    pub fn convert(self, unit: LengthUnit) -> Size {
        Size {
            width: self.width.convert(unit),
            height: self.height.convert(unit),
        }
    }

    pub fn to_pt(self) -> Size {
        self.convert(LengthUnit::Pt)
    }

    pub fn mm(self) -> Size {
        self.convert(LengthUnit::Mm)
    }

    pub fn cm(self) -> Size {
        self.convert(LengthUnit::Cm)
    }

    pub fn inch(self) -> Size {
        self.convert(LengthUnit::Inch)
    }

    pub fn um(self) -> Size {
        self.convert(LengthUnit::Um)
    }

    pub fn pica(self) -> Size {
        self.convert(LengthUnit::Pica)
    }

    pub fn pc(self) -> Size {
        self.pica()
    }

    pub fn didot(self) -> Size {
        self.convert(LengthUnit::Didot)
    }

    pub fn dd(self) -> Size {
        self.didot()
    }

    pub fn cicero(self) -> Size {
        self.convert(LengthUnit::Cicero)
    }

    pub fn cc(self) -> Size {
        self.cicero()
    }

    pub fn new_didot(self) -> Size {
        self.convert(LengthUnit::NewDidot)
    }

    pub fn nd(self) -> Size {
        self.new_didot()
    }

    pub fn new_cicero(self) -> Size {
        self.convert(LengthUnit::NewCicero)
    }

    pub fn nc(self) -> Size {
        self.new_cicero()
    }

    pub fn scaled_point(self) -> Size {
        self.convert(LengthUnit::ScaledPoint)
    }

    pub fn sp(self) -> Size {
        self.scaled_point()
    }
}

/// A bare pair is taken to be in points
impl TryFrom<(f64, f64)> for Size {
    type Error = NumericError;

    fn try_from(pair: (f64, f64)) -> Result<Size, NumericError> {
        Size::from_size(pair, LengthUnit::Pt)
    }
}

/// Compares the values in the display unit, not points, within an absolute
/// tolerance of `1e-8` so conversions that land an ulp off still match.
impl PartialEq<(f64, f64)> for Size {
    fn eq(&self, other: &(f64, f64)) -> bool {
        let (width, height) = self.as_tuple();
        (width - other.0).abs() <= TUPLE_TOLERANCE && (height - other.1).abs() <= TUPLE_TOLERANCE
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (width, height) = self.as_tuple();
        write!(
            f,
            "Size(width={}, height={}, unit={})",
            width.round(),
            height.round(),
            self.unit()
        )
    }
}
