use crate::foundation::error::{BlobscapeError, BlobscapeResult};

pub use kurbo::{Affine, BezPath, PathEl, Point, Rect, Vec2};

/// Logical canvas size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Canvas width.
    pub width: u32,
    /// Canvas height.
    pub height: u32,
}

impl Canvas {
    /// Build a canvas, rejecting zero dimensions.
    pub fn new(width: u32, height: u32) -> BlobscapeResult<Self> {
        if width == 0 || height == 0 {
            return Err(BlobscapeError::validation("canvas width/height must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Length of the shorter side; shape sizes are expressed relative to it.
    pub fn min_side(self) -> f64 {
        f64::from(self.width.min(self.height))
    }

    /// Canvas center point.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    /// Map a position given in percent of the canvas (0..100) to pixels.
    pub fn point_from_percent(self, x_pct: f64, y_pct: f64) -> Point {
        Point::new(
            f64::from(self.width) * x_pct / 100.0,
            f64::from(self.height) * y_pct / 100.0,
        )
    }

    /// Map a size given in percent of the shorter side to pixels.
    pub fn size_from_percent(self, size_pct: f64) -> f64 {
        self.min_side() * size_pct / 100.0
    }
}
