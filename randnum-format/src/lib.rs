//! Numeric format specifiers for randnum output.
//!
//! A specifier is the text that would follow `:` in a `{0:format}` item:
//! either a standard one (`F2`, `N0`, `X8`, `E3`, ...) or a custom pattern
//! built from `0`, `#`, `.`, `,`, `%`, exponents, literals, and up to three
//! `;`-separated sections. Output always uses invariant conventions (`.` for
//! the decimal point, `,` for groups of three).

mod ast;
mod custom;
mod digits;
mod error;
mod number;
mod parser;
mod standard;

pub use ast::*;
pub use error::FormatError;
pub use number::{Number, NumberKind};
pub use parser::{parse, MAX_PRECISION};

impl NumberFormat {
    /// Parse a specifier; see [`parse`]
    pub fn parse(spec: &str) -> Result<Self, FormatError> {
        parser::parse(spec)
    }

    /// Reject specifiers that cannot render values of `kind`
    pub fn check(&self, kind: NumberKind) -> Result<(), FormatError> {
        match self {
            NumberFormat::Standard(spec)
                if kind == NumberKind::Float && spec.kind.is_integer_only() =>
            {
                Err(FormatError::IntegerOnly(spec.kind.letter()))
            }
            _ => Ok(()),
        }
    }

    /// Render one value
    pub fn render(&self, number: Number) -> Result<String, FormatError> {
        match self {
            NumberFormat::Default => Ok(standard::render_default(number)),
            NumberFormat::Standard(spec) => standard::render(spec, number),
            NumberFormat::Custom(format) => Ok(custom::render(format, number)),
        }
    }
}

impl std::str::FromStr for NumberFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s)
    }
}
