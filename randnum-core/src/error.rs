use randnum_format::FormatError;
use std::io;

/// Generation error type
#[derive(Debug)]
pub enum GenError {
    /// Minimum text is not a finite decimal number
    InvalidMinimum(String),
    /// Maximum text is not a finite decimal number
    InvalidMaximum(String),
    /// Minimum is greater than maximum
    InvertedRange { min: String, max: String },
    /// Format specifier is malformed or unusable for the mode
    Format(FormatError),
    /// Writing the output failed
    Io(io::Error),
}

impl std::fmt::Display for GenError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            GenError::InvalidMinimum(raw) => write!(f, "Invalid minimum value: {}", raw),
            GenError::InvalidMaximum(raw) => write!(f, "Invalid maximum value: {}", raw),
            GenError::InvertedRange { min, .. } => write!(f, "Invalid minimum value: {}", min),
            GenError::Format(err) => write!(f, "{}", err),
            GenError::Io(err) => write!(f, "Failed to write output: {}", err),
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenError::Format(err) => Some(err),
            GenError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FormatError> for GenError {
    fn from(err: FormatError) -> Self {
        GenError::Format(err)
    }
}

impl From<io::Error> for GenError {
    fn from(err: io::Error) -> Self {
        GenError::Io(err)
    }
}
