//! Curated API surface for callers (drawing front ends, the CLI).
//!
//! Prefer these re-exports over reaching into submodules; internal layout may
//! move, these names stay.

// Ring geometry
pub use crate::geom2::{
    area_centroid, centroid, check_simple, edges, first_crossing, intersects, intersects_with,
    is_simple_polygon, is_simple_polygon_with, leftmost, open_ring, orient, signed_area, winding,
    AreaCentroid, GeomCfg, Orientation, Point, Segment,
};
// Random rings
pub use crate::geom2::rand::{draw_ring_radial, RadialCfg as RingRadialCfg, ReplayToken as RingReplay};
// Plot spots
pub use crate::spots::{format as format_spots, parse as parse_spots};
// Distance windows
pub use crate::reach::{distance_m, exceeds, fit, offset_m, window, Fit, Window};
// Errors
pub use crate::error::{GeomError, SpotsError};
