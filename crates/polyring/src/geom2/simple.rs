//! Ring simplicity: no two non-adjacent edges intersect.
//!
//! O(n²) pair scan with early exit. Drawn rings hold tens of points, so no
//! spatial index.

use std::borrow::Cow;

use super::segment::intersects_with;
use super::types::{GeomCfg, Point, Segment};
use crate::error::GeomError;

/// Canonical open ring: every run of cyclically consecutive equal points is
/// collapsed to one point, the run wrapping from the last point to the first
/// included.
///
/// An explicit closure (`last == first`) is one such run, so `[a, b, c, a]`,
/// `[a, a, b, c]` and `[b, c, a, a]` all become the triangle `a, b, c` up to
/// rotation. Borrows when nothing collapses.
pub fn open_ring(ring: &[Point]) -> Cow<'_, [Point]> {
    let n = ring.len();
    if n < 2 || (0..n).all(|i| ring[i] != ring[(i + 1) % n]) {
        return Cow::Borrowed(ring);
    }
    let mut out: Vec<Point> = Vec::with_capacity(n);
    for p in ring {
        if out.last() != Some(p) {
            out.push(*p);
        }
    }
    // neighbours now differ, so at most one wraparound point is left over
    if out.len() >= 2 && out.first() == out.last() {
        out.pop();
    }
    Cow::Owned(out)
}

/// Cyclic edges of the canonical ring: edge `i` joins `i` to `(i+1) mod n`.
pub fn edges(ring: &[Point]) -> impl Iterator<Item = Segment> + '_ {
    let ring = open_ring(ring);
    let n = ring.len();
    (0..n).map(move |i| Segment::new(ring[i], ring[(i + 1) % n]))
}

/// First intersecting pair of non-adjacent edges `(i, j)`, `i < j`, in scan
/// order. Indices refer to the canonical ring.
///
/// Adjacent pairs (`j == i+1` and the wraparound pair `(0, n-1)`) are skipped;
/// they share an endpoint by construction.
pub fn first_crossing(ring: &[Point], cfg: GeomCfg) -> Option<(usize, usize)> {
    scan(&open_ring(ring), cfg)
}

fn scan(ring: &[Point], cfg: GeomCfg) -> Option<(usize, usize)> {
    let n = ring.len();
    let edge = |k: usize| Segment::new(ring[k], ring[(k + 1) % n]);
    for i in 0..n {
        let ei = edge(i);
        for j in (i + 2)..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            if intersects_with(&ei, &edge(j), cfg) {
                return Some((i, j));
            }
        }
    }
    None
}

/// Strict simplicity check.
///
/// Errors, in order of precedence: `NonFinite` (index into the input),
/// `TooFewPoints` (canonical length), `SelfIntersection` (canonical edges).
pub fn check_simple(ring: &[Point], cfg: GeomCfg) -> Result<(), GeomError> {
    if let Some(index) = ring.iter().position(|p| !(p.x.is_finite() && p.y.is_finite())) {
        return Err(GeomError::NonFinite { index });
    }
    let ring = open_ring(ring);
    if ring.len() < 3 {
        return Err(GeomError::TooFewPoints { got: ring.len() });
    }
    match scan(&ring, cfg) {
        Some((first, second)) => Err(GeomError::SelfIntersection { first, second }),
        None => Ok(()),
    }
}

/// Lenient check with default tolerances: `false` for any ring that fails
/// [`check_simple`], including fewer than 3 distinct points.
#[inline]
pub fn is_simple_polygon(ring: &[Point]) -> bool {
    is_simple_polygon_with(ring, GeomCfg::default())
}

#[inline]
pub fn is_simple_polygon_with(ring: &[Point], cfg: GeomCfg) -> bool {
    check_simple(ring, cfg).is_ok()
}
