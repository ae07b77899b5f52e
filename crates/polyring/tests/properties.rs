//! Property tests for ring predicates.
//!
//! Coordinates are small integers so every orientation is computed exactly;
//! the relative tolerance band never decides an outcome here.

use nalgebra::Vector2;
use polyring::api::{
    area_centroid, centroid, draw_ring_radial, format_spots, intersects, is_simple_polygon,
    parse_spots, signed_area, GeomCfg, Point, RingRadialCfg, RingReplay, Segment,
};
use proptest::prelude::*;

fn int_point() -> impl Strategy<Value = Point> {
    (-8i32..=8, -8i32..=8).prop_map(|(x, y)| Vector2::new(x as f64, y as f64))
}

fn int_ring() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec(int_point(), 3..9)
}

fn int_segment() -> impl Strategy<Value = Segment> {
    (int_point(), int_point()).prop_map(|(a, b)| Segment::new(a, b))
}

proptest! {
    #[test]
    fn simplicity_is_rotation_invariant(ring in int_ring(), k in 0usize..16) {
        let mut rotated = ring.clone();
        rotated.rotate_left(k % ring.len());
        prop_assert_eq!(is_simple_polygon(&ring), is_simple_polygon(&rotated));
    }

    #[test]
    fn simplicity_is_reversal_invariant(ring in int_ring()) {
        let rev: Vec<Point> = ring.iter().rev().copied().collect();
        prop_assert_eq!(is_simple_polygon(&ring), is_simple_polygon(&rev));
    }

    #[test]
    fn intersects_is_symmetric(a in int_segment(), b in int_segment()) {
        let want = intersects(&a, &b);
        prop_assert_eq!(intersects(&b, &a), want);
        prop_assert_eq!(intersects(&a.reversed(), &b), want);
        prop_assert_eq!(intersects(&a, &b.reversed()), want);
    }

    #[test]
    fn segment_touches_itself(a in int_segment()) {
        prop_assert!(intersects(&a, &a));
    }

    #[test]
    fn calls_are_idempotent(ring in int_ring()) {
        prop_assert_eq!(is_simple_polygon(&ring), is_simple_polygon(&ring));
        let first = area_centroid(&ring, GeomCfg::default());
        let second = area_centroid(&ring, GeomCfg::default());
        prop_assert_eq!(first, second);
        prop_assert_eq!(signed_area(&ring).to_bits(), signed_area(&ring).to_bits());
    }

    #[test]
    fn reversal_negates_area(ring in int_ring()) {
        let rev: Vec<Point> = ring.iter().rev().copied().collect();
        prop_assert!((signed_area(&ring) + signed_area(&rev)).abs() < 1e-9);
    }

    #[test]
    fn centroid_follows_translation(seed in 0u64..1000, dx in -200.0f64..200.0, dy in -80.0f64..80.0) {
        let ring = draw_ring_radial(RingRadialCfg::default(), RingReplay { seed, index: 0 });
        let moved: Vec<Point> = ring.iter().map(|p| p + Vector2::new(dx, dy)).collect();
        let c0 = centroid(&ring).unwrap();
        let c1 = centroid(&moved).unwrap();
        prop_assert!((c1 - c0 - Vector2::new(dx, dy)).norm() < 1e-9);
    }

    #[test]
    fn radial_draws_are_simple(seed in any::<u64>(), index in any::<u64>()) {
        let cfg = RingRadialCfg {
            min_vertices: 3,
            max_vertices: 40,
            ..RingRadialCfg::default()
        };
        let ring = draw_ring_radial(cfg, RingReplay { seed, index });
        prop_assert!(is_simple_polygon(&ring));
    }

    #[test]
    fn spots_round_trip(ring in prop::collection::vec((-180.0f64..180.0, -90.0f64..90.0), 0..12)) {
        let ring: Vec<Point> = ring.into_iter().map(|(x, y)| Vector2::new(x, y)).collect();
        prop_assert_eq!(parse_spots(&format_spots(&ring)).unwrap(), ring);
    }
}
