/// Geometry mechanics: points, the base polygon, and the jump.
use serde::{Deserialize, Serialize};

use crate::error::{ChaosError, ChaosResult};

/// A 2D coordinate. Vertexes and generated points share this type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Vertexes of a regular polygon on the unit circle, at angles 2πk/count.
pub fn regular_polygon(count: usize) -> ChaosResult<Vec<Point>> {
    if count < 2 {
        return Err(ChaosError::configuration(format!(
            "a base polygon needs at least 2 vertexes, got {count}"
        )));
    }
    let step = std::f64::consts::TAU / count as f64;
    Ok((0..count)
        .map(|k| {
            let (sin, cos) = (step * k as f64).sin_cos();
            Point::new(cos, sin)
        })
        .collect())
}

/// Jump a `factor` of the way from `from` toward `to`: from + factor * (to - from).
#[inline]
pub fn jump(from: Point, to: Point, factor: f64) -> Point {
    if factor == 1.0 {
        return to;
    }
    Point::new(
        from.x + factor * (to.x - from.x),
        from.y + factor * (to.y - from.y),
    )
}

/// Arithmetic mean of the points; the origin for an empty slice.
pub fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::default();
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point::new(sx / n, sy / n)
}
