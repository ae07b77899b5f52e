//! Basic 2D types and tolerances used by ring predicates.
//!
//! - `GeomCfg`: centralizes epsilons for orientation and area degeneracy.
//! - `Segment`: closed segment between two points.
//! - `Orientation`: sign of a turn `p → q → r`.

use nalgebra::Vector2;

/// A ring vertex: `x = longitude`, `y = latitude` (or planar x/y).
pub type Point = Vector2<f64>;

/// Geometry configuration (tolerances).
///
/// - `eps_orient`: a triple `p, q, r` is collinear when
///   `|(q-p) × (r-p)| <= eps_orient * |q-p| * max(|r-p|, |r-q|)`,
///   i.e. the sine of the turn angle is below `eps_orient`.
/// - `eps_area`: a ring is degenerate when `|A| <= eps_area * diag²`, with
///   `diag` the bounding-box diagonal of the ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub eps_orient: f64,
    pub eps_area: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_orient: 1e-9,
            eps_area: 1e-12,
        }
    }
}

/// Turn direction of an ordered triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    Collinear,
}

impl Orientation {
    /// True for two strict turns of opposite sense.
    #[inline]
    pub fn opposes(self, other: Orientation) -> bool {
        matches!(
            (self, other),
            (Orientation::CounterClockwise, Orientation::Clockwise)
                | (Orientation::Clockwise, Orientation::CounterClockwise)
        )
    }
}

/// Closed segment `[a, b]`; `a == b` is allowed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }
    #[inline]
    pub fn reversed(&self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }
    /// Bounding-box containment of `p`, with slack `tol` on each side.
    #[inline]
    pub fn bbox_contains(&self, p: Point, tol: f64) -> bool {
        p.x >= self.a.x.min(self.b.x) - tol
            && p.x <= self.a.x.max(self.b.x) + tol
            && p.y >= self.a.y.min(self.b.y) - tol
            && p.y <= self.a.y.max(self.b.y) + tol
    }
}
