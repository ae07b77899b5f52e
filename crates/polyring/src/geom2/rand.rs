//! Seeded random rings for benches and property tests.
//!
//! A ring is drawn as a star around `center`: one vertex per angular sector,
//! with the angle wobbling inside its sector and the radius wobbling around
//! `radius`. Angles stay strictly increasing, so every ray from `center` meets
//! the boundary once and the ring is simple and counterclockwise. Concave
//! rings are kept on purpose; no convex hull is taken.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Point;

/// Shape of a drawn ring.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    /// Inclusive vertex range; both ends are raised to at least 3.
    pub min_vertices: usize,
    pub max_vertices: usize,
    /// Angle wobble as a share of one sector, at most 0.49.
    pub angle_jitter: f64,
    /// Radius wobble as a share of `radius`, at most 0.95.
    pub radius_jitter: f64,
    pub radius: f64,
    pub center: Point,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            min_vertices: 12,
            max_vertices: 12,
            angle_jitter: 0.3,
            radius_jitter: 0.5,
            radius: 1.0,
            center: Vector2::zeros(),
        }
    }
}

/// Names one draw: the same `(seed, index)` always yields the same ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    fn rng(self) -> StdRng {
        let mut key = [0u8; 32];
        key[..8].copy_from_slice(&self.seed.to_le_bytes());
        key[8..16].copy_from_slice(&self.index.to_le_bytes());
        StdRng::from_seed(key)
    }
}

/// Draws a simple counterclockwise ring around `cfg.center`.
pub fn draw_ring_radial(cfg: RadialCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.rng();
    let lo = cfg.min_vertices.max(3);
    let n = rng.gen_range(lo..=cfg.max_vertices.max(lo));
    let sector = std::f64::consts::TAU / n as f64;
    let wobble = cfg.angle_jitter.clamp(0.0, 0.49) * sector;
    let stretch = cfg.radius_jitter.clamp(0.0, 0.95);
    let radius = cfg.radius.max(1e-9);
    let start = rng.gen_range(0.0..sector);

    (0..n)
        .map(|k| {
            let theta = start + k as f64 * sector + rng.gen_range(-1.0..=1.0) * wobble;
            let r = radius * (1.0 + rng.gen_range(-1.0..=1.0) * stretch);
            cfg.center + r * Vector2::new(theta.cos(), theta.sin())
        })
        .collect()
}
