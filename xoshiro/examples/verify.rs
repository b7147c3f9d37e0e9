//! Print bounded draws for a seed, to eyeball range coverage.
//!
//! Usage: verify [seed] [low] [high] [count]
use xoshiro::Xoshiro256PlusPlus;

fn arg<T: std::str::FromStr>(args: &[String], index: usize, default: T) -> T {
    args.get(index)
        .and_then(|text| text.parse().ok())
        .unwrap_or(default)
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let seed: u64 = arg(&args, 1, 1);
    let low: i64 = arg(&args, 2, 1);
    let high: i64 = arg(&args, 3, 6);
    let count: usize = arg(&args, 4, 20);

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    for _ in 0..count {
        let int = rng.next_in_range(low, high);
        let unit = rng.next_f64();
        println!("{:>20}  {:.17}", int, unit);
    }
}
