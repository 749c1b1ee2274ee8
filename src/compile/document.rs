use crate::{
    color::space::Color,
    compile::animation::{ColorCycle, MotionTrack},
    foundation::core::{BezPath, Canvas, Point},
    scene::model::{BlendMode, GradientKind},
};

/// Compiled scene, ready to serialize with [`RenderDocument::to_svg`].
///
/// Everything the markup needs is resolved here: pixel geometry, element ids, filter
/// parameters and animation keyframes. Serialization does no further computation.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderDocument {
    /// Root size.
    pub canvas: Canvas,
    /// Full-canvas fill painted first.
    pub background: Background,
    /// Shapes in paint order.
    pub shapes: Vec<RenderShape>,
    /// Grain painted last.
    pub noise: NoiseOverlay,
}

/// Resolved background fill.
#[derive(Clone, Debug, PartialEq)]
pub enum Background {
    /// Flat color.
    Solid(Color),
    /// Two-stop gradient over the whole canvas.
    Gradient {
        /// Geometry; unknown kinds keep their name and render as a left-to-right linear ramp.
        kind: GradientKind,
        /// Start stop.
        from: Color,
        /// End stop.
        to: Color,
        /// Linear direction in degrees, clockwise from left-to-right.
        angle_degrees: f64,
    },
}

/// One compiled shape.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderShape {
    /// Element id; markup-safe and unique within the document.
    pub key: String,
    /// Pixel geometry.
    pub geometry: ShapeGeometry,
    /// Solid fill.
    pub fill: Color,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Gaussian standard deviation in pixels, when blurred.
    pub blur: Option<f64>,
    /// Compositing mode, passed through as written.
    pub blend: BlendMode,
    /// Looping transform animation.
    pub motion: Option<MotionTrack>,
    /// Looping fill animation.
    pub color_cycle: Option<ColorCycle>,
}

impl RenderShape {
    /// Id of the shape's blur filter, when it has one.
    pub fn filter_id(&self) -> Option<String> {
        self.blur.map(|_| format!("blur-{}", self.key))
    }
}

/// Compiled shape geometry.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeGeometry {
    /// Blob outline in canvas pixels.
    Path(BezPath),
    /// Circle primitive.
    Circle {
        /// Center in pixels.
        center: Point,
        /// Radius in pixels.
        radius: f64,
    },
}

/// Full-canvas grain composited over everything with an overlay blend.
#[derive(Clone, Debug, PartialEq)]
pub struct NoiseOverlay {
    /// Turbulence base frequency.
    pub base_frequency: f64,
    /// Turbulence octaves.
    pub octaves: u32,
    /// Overlay opacity in `[0, 1]`.
    pub opacity: f64,
    /// Seed loop duration in seconds, when the grain shimmers.
    pub shimmer_s: Option<f64>,
}
