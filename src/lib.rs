//! Physical lengths, page sizes and measurement strings.
//!
//! Every length is stored in PostScript points (1/72 inch) and carries the
//! unit it should be presented in:
//!
//! ```
//! use pagesizes::{LengthUnit, Size, parse_measurement, sizes};
//!
//! let margin = parse_measurement("12.5 mm")?;
//! assert!((margin.as_pt() - 35.433).abs() < 1e-3);
//!
//! let a4 = sizes::A4.to_pt();
//! assert!(a4.is_portrait());
//! assert_eq!(a4.landscape().portrait(), a4);
//!
//! let card = Size::new(85.6, 53.98, LengthUnit::Mm)?;
//! assert!(card.is_landscape());
//! assert_eq!(card.mm(), (85.6, 53.98));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod errors;
mod log;
pub mod parse;
pub mod size;
pub mod sizes;
pub mod units;

pub use errors::{DimensionalError, NumericError, ParseError};
pub use parse::{parse_measurement, tokenize};
pub use size::Size;
pub use sizes::PaperSize;
pub use units::{ArithOp, Convertible, LengthUnit, Operand, PointFactor, Unit, convert_from};
