use crate::digits::Digits;

/// A generated value waiting to be rendered
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

/// Whether values are drawn as integers or floats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    Integer,
    Float,
}

impl Number {
    pub fn is_negative(&self) -> bool {
        match *self {
            Number::Integer(v) => v < 0,
            Number::Float(v) => v < 0.0,
        }
    }

    /// Exact decimal digits of the magnitude
    pub(crate) fn exact_digits(&self) -> Digits {
        match *self {
            Number::Integer(v) => Digits::from_u64(v.unsigned_abs()),
            Number::Float(v) => Digits::from_f64_exact(v),
        }
    }

    /// Fewest digits that still identify the value
    pub(crate) fn shortest_digits(&self) -> Digits {
        match *self {
            Number::Integer(v) => Digits::from_u64(v.unsigned_abs()),
            Number::Float(v) => Digits::from_f64_shortest(v),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}
