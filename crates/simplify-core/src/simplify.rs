// File: crates/simplify-core/src/simplify.rs
// Summary: Point-series simplification (radial pre-filter + perpendicular-distance divide and conquer).

use log::trace;

use crate::error::{InvalidInput, SimplifyError};
use crate::geometry::{sq_dist, sq_seg_dist};
use crate::options::{Quality, SimplifyOptions};
use crate::types::Point;

/// Simplify `points`, returning an order-preserving subsequence that keeps the
/// first and last point and stays within `options.tolerance` of the input curve.
///
/// Series shorter than 3 points and a zero tolerance are returned unchanged.
/// Non-finite coordinates or an invalid tolerance fail before any work is done.
pub fn simplify(points: &[Point], options: &SimplifyOptions) -> Result<Vec<Point>, SimplifyError> {
    let kept = simplify_indices(points, options)?;
    Ok(kept.into_iter().map(|i| points[i]).collect())
}

/// Tuple flavour of [`simplify`] for `(x, y)` chart data.
pub fn simplify_xy(points: &[(f64, f64)], options: &SimplifyOptions) -> Result<Vec<(f64, f64)>, SimplifyError> {
    let pts: Vec<Point> = points.iter().map(|&p| Point::from(p)).collect();
    let kept = simplify_indices(&pts, options)?;
    Ok(kept.into_iter().map(|i| points[i]).collect())
}

/// Indices (strictly increasing) of the input points that survive simplification.
pub fn simplify_indices(points: &[Point], options: &SimplifyOptions) -> Result<Vec<usize>, SimplifyError> {
    options.validate()?;
    check_finite(points)?;

    let n = points.len();
    if n < 3 || options.is_noop() {
        return Ok((0..n).collect());
    }

    let sq_tol = options.sq_tolerance();
    let kept = match options.quality {
        Quality::Precise => perpendicular_indices(points, sq_tol),
        Quality::Fast => {
            let radial = radial_indices(points, sq_tol);
            let reduced: Vec<Point> = radial.iter().map(|&i| points[i]).collect();
            perpendicular_indices(&reduced, sq_tol)
                .into_iter()
                .map(|k| radial[k])
                .collect()
        }
    };
    trace!("simplify: {} -> {} points ({}, tolerance {})", n, kept.len(), options.quality, options.tolerance);
    Ok(kept)
}

/// Stage A on its own: drop every point closer than `sqrt(sq_tolerance)` to the
/// last kept point. The final input point is always kept.
pub fn radial_prefilter(points: &[Point], sq_tolerance: f64) -> Vec<Point> {
    radial_indices(points, sq_tolerance).into_iter().map(|i| points[i]).collect()
}

fn check_finite(points: &[Point]) -> Result<(), SimplifyError> {
    match points.iter().position(|p| !p.is_finite()) {
        Some(index) => {
            let p = points[index];
            Err(InvalidInput::NonFiniteCoordinate { index, x: p.x, y: p.y }.into())
        }
        None => Ok(()),
    }
}

fn radial_indices(points: &[Point], sq_tolerance: f64) -> Vec<usize> {
    let n = points.len();
    if n == 0 { return Vec::new(); }
    let mut kept = Vec::with_capacity(n);
    kept.push(0);
    let mut anchor = points[0];
    for (i, &p) in points.iter().enumerate().skip(1) {
        if sq_dist(p, anchor) >= sq_tolerance {
            kept.push(i);
            anchor = p;
        }
    }
    if n > 1 && kept.last() != Some(&(n - 1)) {
        kept.push(n - 1);
    }
    kept
}

/// Stage B. Ranges waiting to be split live on an explicit stack so depth never
/// touches the call stack; every pending range has a disjoint interior, so the
/// stack holds at most `n` entries.
fn perpendicular_indices(points: &[Point], sq_tolerance: f64) -> Vec<usize> {
    let n = points.len();
    if n < 3 { return (0..n).collect(); }

    let mut keep = vec![false; n];
    keep[0] = true;
    keep[n - 1] = true;

    let mut stack: Vec<(usize, usize)> = vec![(0, n - 1)];
    while let Some((first, last)) = stack.pop() {
        if last - first < 2 { continue; }

        let a = points[first];
        let b = points[last];
        let mut max_sq = -1.0f64;
        let mut max_idx = first;
        for (i, &p) in points.iter().enumerate().take(last).skip(first + 1) {
            let d = sq_seg_dist(p, a, b);
            // strict: the first maximum wins ties
            if d > max_sq {
                max_sq = d;
                max_idx = i;
            }
        }

        if max_sq >= sq_tolerance {
            keep[max_idx] = true;
            stack.push((max_idx, last));
            stack.push((first, max_idx));
        }
    }

    keep.iter().enumerate().filter(|(_, &k)| k).map(|(i, _)| i).collect()
}

/// Point counts for the same input under each stage combination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrefilterReport {
    pub input: usize,
    /// Stage A only.
    pub radial_only: usize,
    /// Stage B only (`Quality::Precise`).
    pub precise: usize,
    /// Stage A then Stage B (`Quality::Fast`).
    pub fast: usize,
}

impl PrefilterReport {
    /// Points the pre-filter removes on top of what the precise pass removes.
    /// Negative when the fast path keeps more points than the precise one.
    pub fn extra_reduction(&self) -> isize {
        self.precise as isize - self.fast as isize
    }

    /// Fraction of the input kept by the fast path.
    pub fn fast_ratio(&self) -> f64 {
        if self.input == 0 { 1.0 } else { self.fast as f64 / self.input as f64 }
    }
}

/// Run every stage combination at `tolerance` and report the surviving counts.
pub fn prefilter_report(points: &[Point], tolerance: f64) -> Result<PrefilterReport, SimplifyError> {
    let precise = simplify_indices(points, &SimplifyOptions::precise(tolerance))?.len();
    let fast = simplify_indices(points, &SimplifyOptions::fast(tolerance))?.len();
    let radial_only = if points.len() < 3 || tolerance == 0.0 {
        points.len()
    } else {
        radial_indices(points, tolerance * tolerance).len()
    };
    Ok(PrefilterReport { input: points.len(), radial_only, precise, fast })
}
