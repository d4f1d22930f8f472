// File: crates/simplify-core/src/geometry.rs
// Summary: Squared-distance helpers used by the simplifier.

use crate::types::Point;

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

/// Squared Euclidean distance between two points.
#[inline]
pub fn sq_dist(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

/// Above this magnitude squaring a coordinate span can overflow to infinity.
const SCALE_LIMIT: f64 = 1e150;

/// Squared distance from `p` to the closed segment `a`..`b`.
///
/// When the projection of `p` falls outside the segment the distance to the
/// nearer endpoint is returned; a degenerate segment (`a == b`) degrades to
/// point distance. Very large coordinates are normalised before squaring, so
/// the result saturates to infinity instead of becoming NaN.
#[inline]
pub fn sq_seg_dist(p: Point, a: Point, b: Point) -> f64 {
    let m = [p.x, p.y, a.x, a.y, b.x, b.y].iter().fold(0.0f64, |m, v| m.max(v.abs()));
    if m > SCALE_LIMIT {
        let s = |q: Point| Point::new(q.x / m, q.y / m);
        return sq_seg_dist_unscaled(s(p), s(a), s(b)) * m * m;
    }
    sq_seg_dist_unscaled(p, a, b)
}

fn sq_seg_dist_unscaled(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return sq_dist(p, a);
    }
    let t = clamp(((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq, 0.0, 1.0);
    let proj = Point::new(a.x + dx * t, a.y + dy * t);
    sq_dist(p, proj)
}
