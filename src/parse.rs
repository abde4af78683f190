//! Measurement-string parsing
//!
//! A single regex pass collects every `(number, suffix)` token; exactly one
//! must be present for the string to describe a length.

use std::sync::LazyLock;

use miette::SourceSpan;
use regex_lite::Regex;
use rust_decimal::Decimal;

use crate::errors::{ParseError, SourceContext};
use crate::log::debug;
use crate::units::{LengthUnit, Unit, is_faithful};

static MEASUREMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(\d*\.?\d+)\s*([A-Za-zμµ"']*)"#).expect("measurement pattern compiles")
});

/// One `(number, suffix)` pair found in a measurement string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// The numeric literal, e.g. `12.34` or `.5`
    pub number: &'a str,
    /// The unit suffix, possibly empty
    pub suffix: &'a str,
    /// Byte span of the number
    pub number_span: (usize, usize),
    /// Byte span of the suffix
    pub suffix_span: (usize, usize),
}

impl Token<'_> {
    /// Byte span covering the whole token
    pub fn span(&self) -> SourceSpan {
        let start = self.number_span.0;
        let end = self.suffix_span.1.max(self.number_span.1);
        SourceSpan::from((start, end - start))
    }
}

fn span_of(m: &regex_lite::Match<'_>) -> (usize, usize) {
    (m.start(), m.end())
}

/// Collect every measurement-like token in `text`.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    MEASUREMENT_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let number = caps.get(1)?;
            let suffix = caps.get(2)?;
            Some(Token {
                number: number.as_str(),
                suffix: suffix.as_str(),
                number_span: span_of(&number),
                suffix_span: span_of(&suffix),
            })
        })
        .collect()
}

/// Parse a literal such as `12.34` or `.34` into an exact decimal.
///
/// `None` when the literal overflows the decimal range or carries more
/// fractional digits than it can hold.
fn parse_decimal(literal: &str, approx: f64) -> Option<Decimal> {
    let literal = if literal.starts_with('.') {
        format!("0{literal}")
    } else {
        literal.to_string()
    };
    literal
        .parse::<Decimal>()
        .ok()
        .filter(|d| is_faithful(*d, approx))
}

/// Parse a measurement such as `"12.34 mm"`, `'5"'` or `"10μm"` into a [`Unit`].
///
/// The string must contain exactly one number followed by a known unit
/// suffix. The number is read as an exact decimal before being scaled to
/// points.
pub fn parse_measurement(text: &str) -> Result<Unit, ParseError> {
    let ctx = SourceContext::measurement(text);
    let tokens = tokenize(text);
    debug!(text, count = tokens.len(), "tokenized measurement");

    let token = match tokens.as_slice() {
        [] => {
            return Err(ParseError::NoMeasurement {
                src: ctx.named_source(),
                span: SourceSpan::from((0, text.len())),
            });
        }
        [token] => token,
        [first, second, ..] => {
            return Err(ParseError::TooManyMeasurements {
                count: tokens.len(),
                src: ctx.named_source(),
                first: first.span(),
                second: second.span(),
            });
        }
    };

    if token.suffix.is_empty() {
        return Err(ParseError::MissingUnit {
            src: ctx.named_source(),
            span: token.span(),
        });
    }

    let unit = LengthUnit::from_suffix(token.suffix).ok_or_else(|| ParseError::UnknownUnit {
        unit: token.suffix.to_string(),
        src: ctx.named_source(),
        span: SourceSpan::from((
            token.suffix_span.0,
            token.suffix_span.1 - token.suffix_span.0,
        )),
    })?;

    // The regex only admits digits and one dot, so this cannot fail.
    let approx = token.number.parse::<f64>().map_err(|_| ParseError::NoMeasurement {
        src: ctx.named_source(),
        span: token.span(),
    })?;

    let parsed = match parse_decimal(token.number, approx) {
        Some(value) => Unit::from_exact(value, unit),
        None => Unit::new(approx, unit),
    };
    debug!(number = token.number, unit = unit.name(), pt = parsed.as_pt(), "parsed measurement");
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(text: &str) -> Vec<(&str, &str)> {
        tokenize(text).into_iter().map(|t| (t.number, t.suffix)).collect()
    }

    #[test]
    fn tokenize_finds_number_and_suffix() {
        assert_eq!(pairs("12.34mm"), [("12.34", "mm")]);
        assert_eq!(pairs("12.34 mm"), [("12.34", "mm")]);
        assert_eq!(pairs(".34 mm"), [(".34", "mm")]);
        assert_eq!(pairs("12.34in"), [("12.34", "in")]);
        assert_eq!(pairs(".34 in"), [(".34", "in")]);
        assert_eq!(pairs("12.34\""), [("12.34", "\"")]);
        assert_eq!(pairs(".34 \""), [(".34", "\"")]);
        assert_eq!(pairs("10μm"), [("10", "μm")]);
    }

    #[test]
    fn tokenize_edge_cases() {
        assert_eq!(pairs("12.34mm .34\""), [("12.34", "mm"), (".34", "\"")]);
        assert_eq!(pairs("12"), [("12", "")]);
        assert!(pairs("").is_empty());
        assert!(pairs("bananas").is_empty());
    }

    #[test]
    fn token_spans() {
        let tokens = tokenize("  5 pc");
        assert_eq!(tokens[0].number_span, (2, 3));
        assert_eq!(tokens[0].suffix_span, (4, 6));
        assert_eq!(tokens[0].span(), SourceSpan::from((2, 4)));
    }

    #[test]
    fn parse_known_units() {
        let cases = [
            ("12mm", Unit::mm(12.0)),
            ("12 mm", Unit::mm(12.0)),
            ("12.34 mm", Unit::mm(12.34)),
            ("12um", Unit::um(12.0)),
            ("12 μm", Unit::um(12.0)),
            ("12µm", Unit::um(12.0)),
            ("12 in", Unit::inch(12.0)),
            ("12 inch", Unit::inch(12.0)),
            ("12\"", Unit::inch(12.0)),
            ("12cm", Unit::cm(12.0)),
            ("12 pc", Unit::pica(12.0)),
            ("12pica", Unit::pica(12.0)),
            ("12pt", Unit::pt(12.0)),
            ("3 dd", Unit::didot(3.0)),
            ("3cc", Unit::cicero(3.0)),
            ("3nd", Unit::new_didot(3.0)),
            ("3 nc", Unit::new_cicero(3.0)),
            ("65536sp", Unit::scaled_point(65536.0)),
            ("5in", Unit::inch(5.0)),
        ];
        for (text, expected) in cases {
            let parsed = parse_measurement(text);
            assert!(parsed.is_ok(), "failed to parse {text:?}: {:?}", parsed.err());
            let parsed = parsed.unwrap();
            assert_eq!(parsed, expected, "{text:?}");
            assert_eq!(parsed.unit(), expected.unit(), "{text:?}");
        }
    }

    #[test]
    fn parse_is_exact_at_the_boundary() {
        let parsed = parse_measurement("12.34\"").unwrap();
        assert_eq!(parsed.as_pt(), 888.48);
        let parsed = parse_measurement(".1 pt").unwrap();
        assert_eq!(parsed.as_pt(), 0.1);
        let parsed = parse_measurement("12mm").unwrap();
        assert!((parsed.as_pt() - 12.0 * 2.834_645_669_29).abs() < 1e-8);
        let parsed = parse_measurement("65536sp").unwrap();
        assert_eq!(parsed.as_pt(), 1.0);
    }

    #[test]
    fn literals_beyond_decimal_precision_keep_their_value() {
        let tiny = parse_measurement("0.0000000000000000000000000000001pt").unwrap();
        assert_eq!(tiny.as_pt(), 1e-31);
        let huge = parse_measurement("100000000000000000000000000000000pt").unwrap();
        assert_eq!(huge.as_pt(), 1e32);
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            parse_measurement("12.34mm .34\""),
            Err(ParseError::TooManyMeasurements { count: 2, .. })
        ));
        assert!(matches!(parse_measurement(""), Err(ParseError::NoMeasurement { .. })));
        assert!(matches!(parse_measurement("bananas"), Err(ParseError::NoMeasurement { .. })));
        assert!(matches!(parse_measurement("mm"), Err(ParseError::NoMeasurement { .. })));
        assert!(matches!(parse_measurement("12"), Err(ParseError::MissingUnit { .. })));
        assert!(matches!(
            parse_measurement("12'"),
            Err(ParseError::UnknownUnit { ref unit, .. }) if unit == "'"
        ));
    }

    #[test]
    fn error_messages() {
        let msg = |text: &str| parse_measurement(text).err().map(|e| e.to_string());
        assert_eq!(msg("").as_deref(), Some("unable to parse measurement"));
        assert_eq!(msg("12").as_deref(), Some("unable to parse measurement"));
        assert_eq!(msg("1mm 2mm").as_deref(), Some("too many measurements"));
        assert_eq!(msg("12 ft").as_deref(), Some("unknown unit: ft"));
    }

    #[test]
    fn from_str_delegates() {
        let u: Unit = "72pt".parse().unwrap();
        assert_eq!(u, Unit::inch(1.0));
        assert!("seven".parse::<Unit>().is_err());
    }
}
