use crate::parser::Rule;

/// Format specifier error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The specifier does not follow the grammar
    Syntax { spec: String, message: String },
    /// A lone letter that names no standard specifier
    UnknownSpecifier(char),
    /// Precision too large to honour
    PrecisionOutOfRange(String),
    /// `D` or `X` applied to floating-point values
    IntegerOnly(char),
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            FormatError::Syntax { spec, message } => {
                write!(f, "Invalid format specifier '{}': {}", spec, message)
            }
            FormatError::UnknownSpecifier(letter) => {
                write!(f, "Invalid format specifier '{}': unknown standard format", letter)
            }
            FormatError::PrecisionOutOfRange(precision) => {
                write!(f, "Invalid format specifier: precision {} is out of range", precision)
            }
            FormatError::IntegerOnly(letter) => write!(
                f,
                "Invalid format specifier '{}': only supported for integer values",
                letter
            ),
        }
    }
}

impl std::error::Error for FormatError {}

impl From<pest::error::Error<Rule>> for FormatError {
    fn from(err: pest::error::Error<Rule>) -> Self {
        FormatError::Syntax {
            spec: err.line().to_string(),
            message: err.variant.message().into_owned(),
        }
    }
}
