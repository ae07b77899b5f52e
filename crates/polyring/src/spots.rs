//! Plot-spot codec: the `"lng,lat;lng,lat;..."` text form of a ring.
//!
//! Rings are stored this way by the drawing front end. Parsing is tolerant of
//! whitespace and empty entries (a trailing `;` is common); everything else is
//! reported with the offending entry index.

use nalgebra::Vector2;

use crate::error::SpotsError;
use crate::geom2::Point;

/// Decode plot spots into points (`x = lng`, `y = lat`).
pub fn parse(s: &str) -> Result<Vec<Point>, SpotsError> {
    let mut out = Vec::new();
    for (entry, raw) in s.split(';').enumerate() {
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }
        let mut parts = raw.split(',');
        let lng = parts.next().unwrap_or_default();
        let lat = parts
            .next()
            .ok_or(SpotsError::MissingCoordinate { entry })?;
        if parts.next().is_some() {
            return Err(SpotsError::TooManyCoordinates { entry });
        }
        out.push(Vector2::new(number(lng, entry)?, number(lat, entry)?));
    }
    Ok(out)
}

fn number(text: &str, entry: usize) -> Result<f64, SpotsError> {
    let text = text.trim();
    let v: f64 = text.parse().map_err(|_| SpotsError::BadNumber {
        entry,
        text: text.to_string(),
    })?;
    if !v.is_finite() {
        return Err(SpotsError::NonFinite { entry });
    }
    Ok(v)
}

/// Encode points as plot spots. `f64` display is shortest round-trip, so
/// `parse(&format(r)) == r` for finite rings.
pub fn format(ring: &[Point]) -> String {
    ring.iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(";")
}
