//! Polygon ring geometry for drawn map overlays.
//!
//! Scope
//! - Validate user-drawn rings (reject self-intersecting boundaries).
//! - Signed area and area-weighted centroid of a ring.
//! - Small pure helpers around rings: plot-spot text codec and distance windows.
//!
//! Conventions
//! - A point is `Vec2<f64>` with `x = longitude`, `y = latitude` (or planar x/y).
//!   Geometry is planar; no spherical correction outside `reach`.
//! - Rings are implicitly closed. Consecutive duplicate points (an explicit
//!   closure among them) collapse before analysis, see [`geom2::open_ring`].
//! - Every function is pure; inputs are borrowed and never retained.

pub mod api;
pub mod error;
pub mod geom2;
pub mod reach;
pub mod spots;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{GeomError, SpotsError};
pub use geom2::{GeomCfg, Point, Segment};
pub use nalgebra::Vector2 as Vec2;

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_ring_radial, RadialCfg, ReplayToken};
    pub use crate::geom2::{
        area_centroid, centroid, check_simple, intersects, is_simple_polygon, open_ring,
        signed_area, AreaCentroid, GeomCfg, Orientation, Point, Segment,
    };
    pub use crate::{GeomError, SpotsError};
    pub use nalgebra::Vector2 as Vec2;
}
