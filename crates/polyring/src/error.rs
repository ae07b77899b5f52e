//! Error taxonomy for ring geometry and plot-spot decoding.

use thiserror::Error;

/// Failures of ring analysis. All are deterministic functions of the input.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum GeomError {
    /// Signed area is zero within tolerance (collinear or collapsed ring).
    #[error("ring is degenerate: signed area vanishes within tolerance")]
    DegenerateGeometry,
    /// Fewer than three points once consecutive duplicates collapse.
    #[error("ring needs at least 3 points, got {got}")]
    TooFewPoints { got: usize },
    /// A coordinate is NaN or infinite.
    #[error("point {index} has a non-finite coordinate")]
    NonFinite { index: usize },
    /// Two non-adjacent edges share a point.
    #[error("edges {first} and {second} intersect")]
    SelfIntersection { first: usize, second: usize },
}

/// Failures decoding a `"lng,lat;lng,lat"` plot-spot string.
///
/// `entry` is the zero-based index of the `;`-separated entry, counting
/// skipped empty entries.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SpotsError {
    #[error("entry {entry}: expected `lng,lat`")]
    MissingCoordinate { entry: usize },
    #[error("entry {entry}: more than two coordinates")]
    TooManyCoordinates { entry: usize },
    #[error("entry {entry}: `{text}` is not a number")]
    BadNumber { entry: usize, text: String },
    #[error("entry {entry}: coordinate is not finite")]
    NonFinite { entry: usize },
}
