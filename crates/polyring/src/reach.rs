//! Distance windows around a lng/lat target.
//!
//! A view that must show a set of points, but never more than `limit_m`
//! metres around a target, either fits all points (none is farther) or fits
//! the four window points north/east/south/west of the target.
//!
//! Spherical earth with the WGS-84 equatorial radius; `x = lng`, `y = lat`
//! in degrees. Local offsets degrade near the poles: east-west scaling stops
//! growing past [`MAX_SCALED_LAT`].

use nalgebra::Vector2;

use crate::geom2::Point;

/// Earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Great-circle (haversine) distance in metres.
pub fn distance_m(a: Point, b: Point) -> f64 {
    let (lat1, lat2) = (a.y.to_radians(), b.y.to_radians());
    let dlat = lat2 - lat1;
    let dlng = (b.x - a.x).to_radians();
    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().min(1.0).asin()
}

/// Latitude (degrees) beyond which `offset_m` scales east-west offsets as if
/// at this latitude. Bounds the longitude shift at the poles, where a metre
/// east has no meaningful length in degrees.
pub const MAX_SCALED_LAT: f64 = 89.9;

/// Point `east_m` metres east and `north_m` metres north of `p`.
///
/// The result's latitude is clamped to `[-90, 90]`.
pub fn offset_m(p: Point, east_m: f64, north_m: f64) -> Point {
    let lat = p.y.clamp(-MAX_SCALED_LAT, MAX_SCALED_LAT);
    let cos_lat = lat.to_radians().cos();
    Vector2::new(
        p.x + (east_m / (EARTH_RADIUS_M * cos_lat)).to_degrees(),
        (p.y + (north_m / EARTH_RADIUS_M).to_degrees()).clamp(-90.0, 90.0),
    )
}

/// Four points bounding the window around a target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Window {
    pub top: Point,
    pub right: Point,
    pub bottom: Point,
    pub left: Point,
}

impl Window {
    #[inline]
    pub fn points(&self) -> [Point; 4] {
        [self.top, self.right, self.bottom, self.left]
    }
}

/// Window of half-size `limit_m` around `target`.
pub fn window(target: Point, limit_m: f64) -> Window {
    Window {
        top: offset_m(target, 0.0, limit_m),
        right: offset_m(target, limit_m, 0.0),
        bottom: offset_m(target, 0.0, -limit_m),
        left: offset_m(target, -limit_m, 0.0),
    }
}

/// What the view has to fit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fit {
    /// Every point lies within the distance: fit all of them.
    All,
    /// Some point is too far: fit the window only.
    Window(Window),
}

/// True if any point is farther than `limit_m` from `target`.
pub fn exceeds(target: Point, points: &[Point], limit_m: f64) -> bool {
    points.iter().any(|p| distance_m(target, *p) > limit_m)
}

pub fn fit(target: Point, points: &[Point], limit_m: f64) -> Fit {
    if exceeds(target, points, limit_m) {
        Fit::Window(window(target, limit_m))
    } else {
        Fit::All
    }
}
