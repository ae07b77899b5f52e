//! Orientation predicate and closed-segment intersection test.
//!
//! The intersection test has no notion of ring adjacency: two edges that share
//! an endpoint intersect. Callers that scan rings skip adjacent pairs.

use super::types::{GeomCfg, Orientation, Point, Segment};

/// Turn of `p → q → r` with a relative tolerance.
///
/// Collinear when `|(q-p) × (r-p)| <= eps * |q-p| * max(|r-p|, |r-q|)`.
/// The bound is symmetric in `p, q`, so reversing the reference segment flips
/// the sign without changing the collinear band. A zero-length `p → q` makes
/// every `r` collinear. Non-finite input also lands in `Collinear`.
#[inline]
pub fn orient(p: Point, q: Point, r: Point, eps: f64) -> Orientation {
    let pq = q - p;
    let pr = r - p;
    let cross = pq.x * pr.y - pq.y * pr.x;
    let tol = eps * pq.norm() * pr.norm().max((r - q).norm());
    if cross > tol {
        Orientation::CounterClockwise
    } else if cross < -tol {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Closed-segment intersection with default tolerances.
#[inline]
pub fn intersects(a: &Segment, b: &Segment) -> bool {
    intersects_with(a, b, GeomCfg::default())
}

/// True iff the closed segments `a` and `b` share at least one point.
///
/// General position: proper crossing iff each segment's endpoints lie strictly
/// on opposite sides of the other. A collinear triple falls back to
/// bounding-box containment of the point in the segment it was tested against.
pub fn intersects_with(a: &Segment, b: &Segment, cfg: GeomCfg) -> bool {
    let eps = cfg.eps_orient;
    let d1 = orient(b.a, b.b, a.a, eps);
    let d2 = orient(b.a, b.b, a.b, eps);
    let d3 = orient(a.a, a.b, b.a, eps);
    let d4 = orient(a.a, a.b, b.b, eps);

    if d1.opposes(d2) && d3.opposes(d4) {
        return true;
    }

    let tol_a = eps * (a.b - a.a).norm();
    let tol_b = eps * (b.b - b.a).norm();
    (d1 == Orientation::Collinear && b.bbox_contains(a.a, tol_b))
        || (d2 == Orientation::Collinear && b.bbox_contains(a.b, tol_b))
        || (d3 == Orientation::Collinear && a.bbox_contains(b.a, tol_a))
        || (d4 == Orientation::Collinear && a.bbox_contains(b.b, tol_a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn seg(ax: f64, ay: f64, bx: f64, by: f64) -> Segment {
        Segment::new(vector![ax, ay], vector![bx, by])
    }

    #[test]
    fn orient_signs() {
        let eps = GeomCfg::default().eps_orient;
        let p = vector![0.0, 0.0];
        let q = vector![1.0, 0.0];
        assert_eq!(orient(p, q, vector![0.5, 1.0], eps), Orientation::CounterClockwise);
        assert_eq!(orient(p, q, vector![0.5, -1.0], eps), Orientation::Clockwise);
        assert_eq!(orient(p, q, vector![3.0, 0.0], eps), Orientation::Collinear);
        // zero-length reference: everything is collinear
        assert_eq!(orient(p, p, vector![3.0, 7.0], eps), Orientation::Collinear);
        // NaN never claims a strict turn
        assert_eq!(orient(p, q, vector![f64::NAN, 1.0], eps), Orientation::Collinear);
    }

    #[test]
    fn orient_band_is_relative() {
        let eps = GeomCfg::default().eps_orient;
        // tiny lng/lat-sized triangle far from the origin is still a strict turn
        let p = vector![120.000_000, 30.000_000];
        let q = vector![120.000_010, 30.000_000];
        let r = vector![120.000_005, 30.000_001];
        assert_eq!(orient(p, q, r, eps), Orientation::CounterClockwise);
        // a deviation of 1e-12 over unit length is inside the band
        let r_flat = vector![120.5, 30.0 + 1e-12];
        assert_eq!(
            orient(vector![120.0, 30.0], vector![121.0, 30.0], r_flat, eps),
            Orientation::Collinear
        );
    }

    #[test]
    fn proper_crossing() {
        assert!(intersects(&seg(0.0, 0.0, 4.0, 4.0), &seg(0.0, 4.0, 4.0, 0.0)));
        assert!(!intersects(&seg(0.0, 0.0, 1.0, 1.0), &seg(0.0, 4.0, 1.0, 3.0)));
    }

    #[test]
    fn touching_and_shared_endpoints() {
        // T-junction
        assert!(intersects(&seg(0.0, 0.0, 2.0, 0.0), &seg(1.0, 0.0, 1.0, 1.0)));
        // shared endpoint (adjacency is the caller's business)
        assert!(intersects(&seg(0.0, 0.0, 1.0, 0.0), &seg(1.0, 0.0, 1.0, 1.0)));
        // near miss
        assert!(!intersects(&seg(0.0, 0.0, 2.0, 0.0), &seg(1.0, 0.1, 1.0, 1.0)));
    }

    #[test]
    fn collinear_overlap_and_gap() {
        assert!(intersects(&seg(0.0, 0.0, 2.0, 0.0), &seg(1.0, 0.0, 3.0, 0.0)));
        assert!(intersects(&seg(0.0, 0.0, 4.0, 0.0), &seg(1.0, 0.0, 2.0, 0.0)));
        assert!(!intersects(&seg(0.0, 0.0, 1.0, 0.0), &seg(2.0, 0.0, 3.0, 0.0)));
        // parallel, offset
        assert!(!intersects(&seg(0.0, 0.0, 2.0, 0.0), &seg(0.0, 1.0, 2.0, 1.0)));
    }

    #[test]
    fn zero_length_segments() {
        let dot = seg(1.0, 0.0, 1.0, 0.0);
        assert!(intersects(&dot, &seg(0.0, 0.0, 2.0, 0.0)));
        assert!(!intersects(&dot, &seg(0.0, 1.0, 2.0, 1.0)));
        // on the carrier line but outside the segment
        assert!(!intersects(&seg(5.0, 0.0, 5.0, 0.0), &seg(0.0, 0.0, 2.0, 0.0)));
        assert!(intersects(&dot, &dot));
        assert!(!intersects(&dot, &seg(2.0, 0.0, 2.0, 0.0)));
    }

    #[test]
    fn symmetric_and_direction_free() {
        let cases = [
            (seg(0.0, 0.0, 4.0, 4.0), seg(0.0, 4.0, 4.0, 0.0)),
            (seg(0.0, 0.0, 2.0, 0.0), seg(1.0, 0.0, 1.0, 1.0)),
            (seg(0.0, 0.0, 1.0, 0.0), seg(2.0, 0.0, 3.0, 0.0)),
            (seg(0.0, 0.0, 1.0, 1.0), seg(3.0, 0.0, 0.0, 3.0)),
        ];
        for (a, b) in cases {
            let want = intersects(&a, &b);
            assert_eq!(intersects(&b, &a), want);
            assert_eq!(intersects(&a.reversed(), &b), want);
            assert_eq!(intersects(&a, &b.reversed()), want);
        }
    }
}
