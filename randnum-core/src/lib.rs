mod bounds;
mod error;
mod generator;
mod run;

pub use bounds::{parse_bound, Mode, ValueRange};
pub use error::GenError;
pub use generator::NumberGenerator;
pub use randnum_format::{FormatError, Number, NumberFormat, NumberKind};
pub use run::{run, Request, Summary};
