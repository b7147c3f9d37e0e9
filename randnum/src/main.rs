use clap::Parser;
use randnum_core::{run, GenError, Request};
use std::io::{self, BufWriter, ErrorKind};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "randnum", version)]
#[command(about = "Random number generator")]
#[command(
    long_about = "Random number generator.\n\n\
    Generates random numbers in [min, max].\n\
    If the minimum and maximum values are integers, the random numbers will be integers,\n\
    otherwise they will be doubles.\n\n\
    Exit codes:\n  \
    0 = Success\n  \
    1 = Invalid bounds or format\n  \
    2 = Invalid arguments"
)]
struct Args {
    /// The seed to use for the random number generator (defaults to current time)
    #[arg(short = 's', long = "seed", value_name = "integer", allow_negative_numbers = true)]
    seed: Option<i64>,

    /// The minimum value for the random number generator
    #[arg(
        short = 'm',
        long = "min",
        value_name = "number",
        default_value = "0",
        allow_negative_numbers = true
    )]
    min: String,

    /// The maximum value for the random number generator
    #[arg(
        short = 'x',
        long = "max",
        value_name = "number",
        default_value = "1.0",
        allow_negative_numbers = true
    )]
    max: String,

    /// The number of random numbers to generate
    #[arg(short = 'c', long = "count", value_name = "integer", default_value = "1")]
    count: usize,

    /// The format to use for the random numbers, e.g. F2, N0, X8, 000 or #,##0.00
    #[arg(short = 'f', long = "format", value_name = "string")]
    format: Option<String>,

    /// Print the seed and a summary to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

impl Args {
    fn to_request(&self) -> Request {
        Request {
            seed: self.seed,
            min: self.min.clone(),
            max: self.max.clone(),
            count: self.count,
            format: self.format.clone(),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match run(&args.to_request(), &mut out) {
        Ok(summary) => {
            // Print statistics to stderr, keeping stdout for the values
            if args.verbose {
                eprintln!("Seed {}", summary.seed);
                eprintln!("Produced {} {} values", summary.produced, summary.mode);
            }
            ExitCode::SUCCESS
        }
        // Reader went away (e.g. piped into `head`); nothing left to do
        Err(GenError::Io(e)) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
