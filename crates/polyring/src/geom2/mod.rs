//! Planar ring geometry (simplicity check, signed area, centroid).
//!
//! Purpose
//! - Reject self-intersecting rings drawn by users before they are accepted.
//! - Compute signed area and area-weighted centroid of a ring.
//!
//! Conventions
//! - Rings are implicitly closed: edge `i` joins point `i` to point `(i+1) mod n`.
//!   Runs of equal consecutive points, the wraparound included, collapse to one
//!   point in [`open_ring`], so an explicit closure is harmless in any rotation.
//! - Points keep their axis order. `x` in is `x` out; there is no lat/lng swap.
//! - Tolerances live in [`GeomCfg`]; orientation uses a relative (angle-like)
//!   epsilon, so results are invariant under translation and uniform scaling.
//!
//! Code cross-refs: `segment::{orient, intersects}`, `simple::first_crossing`,
//! `area::area_centroid`, `rand::draw_ring_radial`.

mod area;
pub mod rand;
mod segment;
mod simple;
mod types;

pub use area::{area_centroid, centroid, leftmost, signed_area, winding, AreaCentroid};
pub use segment::{intersects, intersects_with, orient};
pub use simple::{
    check_simple, edges, first_crossing, is_simple_polygon, is_simple_polygon_with, open_ring,
};
pub use types::{GeomCfg, Orientation, Point, Segment};
