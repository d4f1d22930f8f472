// File: crates/simplify-core/tests/common/mod.rs
// Purpose: Deterministic fixtures and checks shared by the integration tests.

#![allow(dead_code)]

use simplify_core::geometry::sq_seg_dist;
use simplify_core::Point;

/// Small LCG so fixtures are reproducible without extra dependencies.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self { Self(seed ^ 0x9E37_79B9_7F4A_7C15) }

    /// Uniform in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

pub fn random_walk(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = Lcg::new(seed);
    let mut y = 0.0f64;
    (0..n)
        .map(|i| {
            y += (rng.next_f64() - 0.5) * 2.0;
            Point::new(i as f64, y)
        })
        .collect()
}

/// Flat signal at `level` with uniform jitter of +/- `amplitude`.
pub fn jitter(n: usize, dx: f64, level: f64, amplitude: f64, seed: u64) -> Vec<Point> {
    let mut rng = Lcg::new(seed);
    (0..n)
        .map(|i| Point::new(i as f64 * dx, level + (rng.next_f64() - 0.5) * 2.0 * amplitude))
        .collect()
}

pub fn sine(n: usize, dx: f64, amplitude: f64) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let x = i as f64 * dx;
            Point::new(x, (x * 0.5).sin() * amplitude)
        })
        .collect()
}

/// Indices of `output` inside `input` if `output` is an order-preserving subsequence.
pub fn subsequence_indices(input: &[Point], output: &[Point]) -> Option<Vec<usize>> {
    let mut idx = Vec::with_capacity(output.len());
    let mut from = 0usize;
    for p in output {
        let off = input[from..].iter().position(|q| q.x.to_bits() == p.x.to_bits() && q.y.to_bits() == p.y.to_bits())?;
        idx.push(from + off);
        from += off + 1;
    }
    Some(idx)
}

/// Largest distance from a dropped point to the output segment spanning it.
pub fn max_deviation(input: &[Point], kept: &[usize]) -> f64 {
    let mut worst = 0.0f64;
    for w in kept.windows(2) {
        let (a, b) = (input[w[0]], input[w[1]]);
        for p in &input[w[0] + 1..w[1]] {
            worst = worst.max(sq_seg_dist(*p, a, b));
        }
    }
    worst.sqrt()
}
