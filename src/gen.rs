use anyhow::{Result, bail};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use tracing::info;

/// Generate a seeded test triple. Roughly half the indices satisfy the
/// match condition; the rest draw the third element from a widened
/// range and may still match by coincidence.
pub fn generate(
    size: usize,
    min_val: i64,
    max_val: i64,
    seed: u64,
) -> Result<(Vec<i64>, Vec<i64>, Vec<i64>)> {
    if size == 0 {
        bail!("size must be positive");
    }
    if min_val > max_val {
        bail!("min value {} exceeds max value {}", min_val, max_val);
    }
    info!(size, min_val, max_val, seed, "generating test triple");

    let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
    let a: Vec<i64> = (0..size).map(|_| rng.gen_range(min_val..=max_val)).collect();
    let b: Vec<i64> = (0..size).map(|_| rng.gen_range(min_val..=max_val)).collect();

    let mut c = Vec::with_capacity(size);
    for i in 0..size {
        if rng.gen::<f64>() < 0.5 {
            c.push(a[i] + b[i]);
        } else {
            c.push(rng.gen_range(min_val * 2..=max_val * 2));
        }
    }

    Ok((a, b, c))
}
