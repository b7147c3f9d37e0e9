use crate::bounds::{Mode, ValueRange};
use crate::error::GenError;
use crate::generator::NumberGenerator;
use randnum_format::NumberFormat;
use std::io::Write;

/// One invocation's worth of options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// PRNG seed; a clock-derived seed is used when absent
    pub seed: Option<i64>,
    pub min: String,
    pub max: String,
    pub count: usize,
    pub format: Option<String>,
}

impl Default for Request {
    fn default() -> Self {
        Request {
            seed: None,
            min: "0".to_string(),
            max: "1.0".to_string(),
            count: 1,
            format: None,
        }
    }
}

/// What a successful run did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Seed actually used, in the form `--seed` accepts, so time-seeded runs
    /// can be replayed
    pub seed: i64,
    pub mode: Mode,
    pub produced: usize,
}

/// Validate the request, then write `count` values to `out`, one per line.
///
/// Nothing is written unless the bounds and the format are valid.
pub fn run<W: Write>(request: &Request, out: &mut W) -> Result<Summary, GenError> {
    let range = ValueRange::parse(&request.min, &request.max)?;

    let format = match &request.format {
        Some(spec) => NumberFormat::parse(spec)?,
        None => NumberFormat::Default,
    };
    format.check(range.mode().kind())?;

    let seed = request
        .seed
        .unwrap_or_else(|| xoshiro::entropy_seed() as i64);

    // Negative seeds reuse their bit pattern
    let mut generator = NumberGenerator::new(range, seed as u64);
    let mut produced = 0;

    for number in generator.by_ref().take(request.count) {
        writeln!(out, "{}", format.render(number)?)?;
        produced += 1;
    }
    out.flush()?;

    Ok(Summary {
        seed,
        mode: range.mode(),
        produced,
    })
}
