use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use nalgebra::Vector2;
use polyring::api::{
    area_centroid, check_simple, fit, leftmost, open_ring, parse_spots, Fit, GeomCfg, GeomError,
    Point,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser)]
#[command(name = "polyring")]
#[command(about = "Validate drawn rings, compute centroids, fit distance windows")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

/// Ring given inline as plot spots or as a file holding plot spots.
#[derive(Args, Clone, Debug)]
struct RingSource {
    /// Plot spots, e.g. "120.1,30.2;120.2,30.2;120.15,30.3"
    #[arg(long, conflicts_with = "input", required_unless_present = "input")]
    spots: Option<String>,
    /// File containing plot spots
    #[arg(long)]
    input: Option<PathBuf>,
}

impl RingSource {
    fn load(&self) -> Result<Vec<Point>> {
        let text = match (&self.spots, &self.input) {
            (Some(s), _) => s.clone(),
            (None, Some(path)) => std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?,
            (None, None) => bail!("either --spots or --input is required"),
        };
        let ring = parse_spots(&text).context("decoding plot spots")?;
        tracing::debug!(points = ring.len(), "ring_loaded");
        Ok(ring)
    }

    fn describe(&self) -> String {
        match (&self.spots, &self.input) {
            (_, Some(path)) => path.display().to_string(),
            _ => "inline".to_string(),
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Check a ring for self-intersections and compute area and centroid
    Check {
        #[command(flatten)]
        src: RingSource,
        /// Fail (non-zero exit) when the ring is rejected
        #[arg(long)]
        strict: bool,
        #[arg(long, default_value_t = GeomCfg::default().eps_orient)]
        eps_orient: f64,
        #[arg(long, default_value_t = GeomCfg::default().eps_area)]
        eps_area: f64,
        /// Also write the report here, with a provenance sidecar
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Decide whether a view around a target must be clamped to a window
    Reach {
        /// Target as "lng,lat"
        #[arg(long, value_parser = parse_lnglat)]
        target: Point,
        /// Window half-size in metres
        #[arg(long)]
        distance: f64,
        #[command(flatten)]
        src: RingSource,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Check {
            src,
            strict,
            eps_orient,
            eps_area,
            out,
        } => check(
            src,
            GeomCfg {
                eps_orient,
                eps_area,
            },
            strict,
            out,
        ),
        Action::Reach {
            target,
            distance,
            src,
        } => reach(target, distance, src),
        Action::Report => report(),
    }
}

/// JSON report for one ring. Coordinates keep the input's `[lng, lat]` order.
#[derive(Debug, Serialize)]
struct RingReport {
    points: usize,
    simple: bool,
    crossing: Option<[usize; 2]>,
    signed_area: Option<f64>,
    centroid: Option<[f64; 2]>,
    leftmost: Option<[f64; 2]>,
    error: Option<String>,
}

impl RingReport {
    fn accepted(&self) -> bool {
        self.simple && self.centroid.is_some()
    }
}

fn check_ring(ring: &[Point], cfg: GeomCfg) -> RingReport {
    let mut report = RingReport {
        points: open_ring(ring).len(),
        simple: false,
        crossing: None,
        signed_area: None,
        centroid: None,
        leftmost: leftmost(ring).map(|p| [p.x, p.y]),
        error: None,
    };
    match check_simple(ring, cfg) {
        Ok(()) => report.simple = true,
        Err(err) => {
            if let GeomError::SelfIntersection { first, second } = err {
                report.crossing = Some([first, second]);
            }
            report.error = Some(err.to_string());
        }
    }
    match area_centroid(ring, cfg) {
        Ok(ac) => {
            report.signed_area = Some(ac.signed_area);
            report.centroid = Some([ac.centroid.x, ac.centroid.y]);
        }
        Err(err) => {
            report.error.get_or_insert_with(|| err.to_string());
        }
    }
    report
}

fn check(src: RingSource, cfg: GeomCfg, strict: bool, out: Option<PathBuf>) -> Result<()> {
    let ring = src.load()?;
    let report = check_ring(&ring, cfg);
    tracing::info!(
        points = report.points,
        simple = report.simple,
        error = ?report.error,
        "check"
    );
    let body = serde_json::to_string_pretty(&report)?;
    println!("{body}");

    if let Some(out) = out {
        if let Some(parent) = out.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        std::fs::write(&out, body.as_bytes())
            .with_context(|| format!("writing {}", out.display()))?;
        let params = serde_json::json!({
            "cmd": "check",
            "source": src.describe(),
            "eps_orient": cfg.eps_orient,
            "eps_area": cfg.eps_area,
            "strict": strict,
        });
        let sidecar = provenance::write_sidecar(&out, params)?;
        tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "report_written");
    }

    if strict && !report.accepted() {
        bail!(
            "ring rejected: {}",
            report.error.as_deref().unwrap_or("unknown reason")
        );
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct ReachReport {
    target: [f64; 2],
    distance: f64,
    exceeds: bool,
    /// top, right, bottom, left
    window: Option<[[f64; 2]; 4]>,
}

fn reach_report(target: Point, distance: f64, ring: &[Point]) -> ReachReport {
    let window = match fit(target, ring, distance) {
        Fit::All => None,
        Fit::Window(w) => Some(w.points().map(|p| [p.x, p.y])),
    };
    ReachReport {
        target: [target.x, target.y],
        distance,
        exceeds: window.is_some(),
        window,
    }
}

fn reach(target: Point, distance: f64, src: RingSource) -> Result<()> {
    if !(distance.is_finite() && distance > 0.0) {
        bail!("--distance must be a positive number of metres, got {distance}");
    }
    let ring = src.load()?;
    let report = reach_report(target, distance, &ring);
    tracing::info!(distance, exceeds = report.exceeds, "reach");
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn report() -> Result<()> {
    let block = provenance::Provenance::new(serde_json::json!({}));
    println!("{}", serde_json::to_string_pretty(&block)?);
    Ok(())
}

fn parse_lnglat(s: &str) -> Result<Point, String> {
    let (lng, lat) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"lng,lat\", got {s:?}"))?;
    let lng: f64 = lng.trim().parse().map_err(|e| format!("lng: {e}"))?;
    let lat: f64 = lat.trim().parse().map_err(|e| format!("lat: {e}"))?;
    if !(lng.is_finite() && lat.is_finite()) {
        return Err("coordinates must be finite".to_string());
    }
    Ok(Vector2::new(lng, lat))
}
