use crate::foundation::core::{BezPath, Point};
use crate::foundation::error::{BlobscapeError, BlobscapeResult};
use crate::foundation::rng::SeededRandom;
use crate::geometry::path_data::path_data;

/// Fewest vertices a blob may have.
pub const MIN_COMPLEXITY: u32 = 3;

/// Generate a closed, smooth blob outline inside a `width x height` box.
///
/// `complexity` vertices are placed at evenly spaced angles around the box center. Each
/// vertex radius is `base * (1 - contrast + draw * contrast)` with `base = min(width, height) / 2`
/// and `draw` taken from a [`SeededRandom`] seeded by `seed`. The vertices are joined with
/// Catmull-Rom style cubic segments, so the outline is C1 continuous at every vertex.
///
/// `contrast` is not clamped: values outside `[0, 1]` deliberately push vertices outside the
/// nominal envelope. Non-finite contrast and `complexity < 3` are rejected.
pub fn generate_blob_path(
    width: f64,
    height: f64,
    seed: &str,
    complexity: u32,
    contrast: f64,
) -> BlobscapeResult<BezPath> {
    let points = blob_vertices(width, height, seed, complexity, contrast)?;
    tracing::trace!(seed, complexity, contrast, "generated blob vertices");
    Ok(smooth_closed_path(&points))
}

/// [`generate_blob_path`] serialized as SVG path data.
pub fn generate_blob_path_data(
    width: f64,
    height: f64,
    seed: &str,
    complexity: u32,
    contrast: f64,
) -> BlobscapeResult<String> {
    generate_blob_path(width, height, seed, complexity, contrast).map(|p| path_data(&p))
}

/// The blob's vertices, in angular order starting at angle zero (positive x axis).
pub fn blob_vertices(
    width: f64,
    height: f64,
    seed: &str,
    complexity: u32,
    contrast: f64,
) -> BlobscapeResult<Vec<Point>> {
    if complexity < MIN_COMPLEXITY {
        return Err(BlobscapeError::geometry(format!(
            "blob complexity must be >= {MIN_COMPLEXITY} (got {complexity})"
        )));
    }
    if !contrast.is_finite() {
        return Err(BlobscapeError::geometry("blob contrast must be finite"));
    }

    let mut rng = SeededRandom::from_str_seed(seed);
    let base_radius = width.min(height) / 2.0;
    let cx = width / 2.0;
    let cy = height / 2.0;
    let step = 360.0 / f64::from(complexity);

    let points = (0..complexity)
        .map(|i| {
            let angle = (f64::from(i) * step).to_radians();
            let radius = base_radius * (1.0 - contrast + rng.next() * contrast);
            Point::new(cx + radius * angle.cos(), cy + radius * angle.sin())
        })
        .collect();
    Ok(points)
}

/// Join points into a closed curve of cubic segments, one per point.
///
/// Segment `i` runs from `p[i]` to `p[i+1]` with control points
/// `p[i] + (p[i+1] - p[i-1]) / 6` and `p[i+1] - (p[i+2] - p[i]) / 6` (indices wrap).
pub fn smooth_closed_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let n = points.len();
    if n == 0 {
        return path;
    }

    path.move_to(points[0]);
    for i in 0..n {
        let p0 = points[(i + n - 1) % n];
        let p1 = points[i];
        let p2 = points[(i + 1) % n];
        let p3 = points[(i + 2) % n];

        // Exact per-component `/ 6.0`; golden path strings depend on it.
        let c1 = Point::new(p1.x + (p2.x - p0.x) / 6.0, p1.y + (p2.y - p0.y) / 6.0);
        let c2 = Point::new(p2.x - (p3.x - p1.x) / 6.0, p2.y - (p3.y - p1.y) / 6.0);
        path.curve_to(c1, c2, p2);
    }
    path.close_path();
    path
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/blob.rs"]
mod tests;
