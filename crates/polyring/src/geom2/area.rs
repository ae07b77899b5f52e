//! Shoelace signed area and area-weighted centroid.
//!
//! Sums are taken relative to the ring's first point. For lng/lat input the raw
//! products `x_i * y_{i+1}` are ~1e4 while the area may be ~1e-6, so the
//! untranslated formula cancels away most significant digits.

use nalgebra::Vector2;

use super::simple::open_ring;
use super::types::{GeomCfg, Orientation, Point};
use crate::error::GeomError;

/// Signed area and centroid of a non-degenerate ring.
///
/// `signed_area > 0` for counterclockwise order. `centroid` is in the input's
/// axis order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AreaCentroid {
    pub signed_area: f64,
    pub centroid: Point,
}

/// `(2A, Σ (x_i + x_{i+1}) c_i, Σ (y_i + y_{i+1}) c_i)` relative to `ring[0]`,
/// with `c_i = x_i y_{i+1} - x_{i+1} y_i`.
fn shoelace(ring: &[Point]) -> (f64, f64, f64) {
    let n = ring.len();
    let origin = ring[0];
    let mut a2 = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;
    for i in 0..n {
        let p = ring[i] - origin;
        let q = ring[(i + 1) % n] - origin;
        let cross = p.x * q.y - q.x * p.y;
        a2 += cross;
        cx += (p.x + q.x) * cross;
        cy += (p.y + q.y) * cross;
    }
    (a2, cx, cy)
}

/// Shoelace signed area; `0.0` for fewer than 3 points.
pub fn signed_area(ring: &[Point]) -> f64 {
    let ring = open_ring(ring);
    if ring.len() < 3 {
        return 0.0;
    }
    0.5 * shoelace(&ring).0
}

/// Signed area and area-weighted centroid.
///
/// Fails with `DegenerateGeometry` for fewer than 3 points or when
/// `|A| <= cfg.eps_area * diag²` (`diag` = bounding-box diagonal), and with
/// `NonFinite` (index into the input) for NaN/infinite coordinates.
/// Consecutive duplicates collapse first, as in [`open_ring`].
pub fn area_centroid(ring: &[Point], cfg: GeomCfg) -> Result<AreaCentroid, GeomError> {
    if let Some(index) = ring.iter().position(|p| !(p.x.is_finite() && p.y.is_finite())) {
        return Err(GeomError::NonFinite { index });
    }
    let ring = open_ring(ring);
    if ring.len() < 3 {
        return Err(GeomError::DegenerateGeometry);
    }
    let (a2, cx, cy) = shoelace(&ring);
    let a = 0.5 * a2;

    let (lo, hi) = ring.iter().skip(1).fold((ring[0], ring[0]), |(lo, hi), p| {
        (lo.inf(p), hi.sup(p))
    });
    let diag2 = (hi - lo).norm_squared();
    // also rejects diag2 == 0 (all points coincide)
    if !(a.abs() > cfg.eps_area * diag2) {
        return Err(GeomError::DegenerateGeometry);
    }

    let centroid = ring[0] + Vector2::new(cx / (6.0 * a), cy / (6.0 * a));
    Ok(AreaCentroid {
        signed_area: a,
        centroid,
    })
}

/// Area-weighted centroid with default tolerances.
#[inline]
pub fn centroid(ring: &[Point]) -> Result<Point, GeomError> {
    area_centroid(ring, GeomCfg::default()).map(|ac| ac.centroid)
}

/// Winding of a non-degenerate ring; `None` when the area vanishes.
pub fn winding(ring: &[Point], cfg: GeomCfg) -> Option<Orientation> {
    let ac = area_centroid(ring, cfg).ok()?;
    Some(if ac.signed_area > 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Clockwise
    })
}

/// Point with minimal `x` (first one on ties). Non-finite `x` is skipped.
///
/// Anchor for controls placed to the left of a drawn ring.
pub fn leftmost(ring: &[Point]) -> Option<Point> {
    open_ring(ring)
        .iter()
        .filter(|p| p.x.is_finite())
        .fold(None, |best: Option<Point>, p| match best {
            Some(b) if b.x <= p.x => Some(b),
            _ => Some(*p),
        })
}
