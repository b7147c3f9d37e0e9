use crate::error::GenError;
use randnum_format::{Number, NumberKind};
use regex::Regex;
use std::sync::OnceLock;

/// Decimal number with optional sign, thousands commas, fraction and
/// exponent, padded by whitespace: `1,000`, `-2.5e3`, `.5`, `7.`
fn number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\s*([+-]?(?:\d[\d,]*(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)\s*$")
            .expect("bound pattern is valid")
    })
}

/// Parse bound text as a finite decimal number
pub fn parse_bound(text: &str) -> Option<f64> {
    let caps = number_pattern().captures(text)?;
    let cleaned = caps[1].replace(',', "");
    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Integer or floating-point generation, decided from the bound text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Integer,
    Float,
}

impl Mode {
    /// Integer mode iff neither bound's text contains a decimal point.
    ///
    /// Purely textual: `"2.0"` selects float mode although it is whole.
    pub fn detect(min: &str, max: &str) -> Mode {
        if min.contains('.') || max.contains('.') {
            Mode::Float
        } else {
            Mode::Integer
        }
    }

    pub fn kind(&self) -> NumberKind {
        match self {
            Mode::Integer => NumberKind::Integer,
            Mode::Float => NumberKind::Float,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Mode::Integer => write!(f, "integer"),
            Mode::Float => write!(f, "float"),
        }
    }
}

/// Validated range to draw from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueRange {
    /// Inclusive on both ends
    Integer { low: i64, high: i64 },
    /// Half-open [low, high); a single point when low == high
    Float { low: f64, high: f64 },
}

impl ValueRange {
    /// Validate the raw bound text and build the range.
    ///
    /// The minimum is checked before the maximum, then their order.
    pub fn parse(min: &str, max: &str) -> Result<Self, GenError> {
        let low = parse_bound(min).ok_or_else(|| GenError::InvalidMinimum(min.to_string()))?;
        let high = parse_bound(max).ok_or_else(|| GenError::InvalidMaximum(max.to_string()))?;

        if low > high {
            return Err(GenError::InvertedRange {
                min: min.to_string(),
                max: max.to_string(),
            });
        }

        Ok(match Mode::detect(min, max) {
            // `as` truncates toward zero and saturates at the i64 limits
            Mode::Integer => ValueRange::Integer {
                low: low as i64,
                high: high as i64,
            },
            Mode::Float => ValueRange::Float { low, high },
        })
    }

    pub fn mode(&self) -> Mode {
        match self {
            ValueRange::Integer { .. } => Mode::Integer,
            ValueRange::Float { .. } => Mode::Float,
        }
    }

    /// Whether `number` is a value this range can produce
    pub fn contains(&self, number: Number) -> bool {
        match (*self, number) {
            (ValueRange::Integer { low, high }, Number::Integer(v)) => (low..=high).contains(&v),
            (ValueRange::Float { low, high }, Number::Float(v)) => {
                if low == high {
                    v == low
                } else {
                    (low..high).contains(&v)
                }
            }
            _ => false,
        }
    }
}
