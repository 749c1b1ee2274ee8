use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{
    color::space::Color,
    foundation::core::Canvas,
    foundation::error::{BlobscapeError, BlobscapeResult},
    geometry::blob::MIN_COMPLEXITY,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Full declarative description of one generated background.
///
/// A scene config is:
/// - produced by a recipe (see [`crate::RecipeRegistry`]) or loaded from JSON / a preset
/// - consumed once by [`crate::compile_scene`], which never mutates it
///
/// Only `width`/`height` are required in JSON; every other field falls back to its default.
pub struct SceneConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Background fill.
    #[serde(default)]
    pub base_color: BaseColor,
    /// Grain overlay strength, `0..=100`.
    #[serde(default)]
    pub noise_amount: f64,
    /// Grain feature size; larger means coarser grain. Must be `> 0`.
    #[serde(default = "default_noise_scale")]
    pub noise_scale: f64,
    /// Shapes in paint order (later shapes draw on top).
    #[serde(default)]
    pub shapes: Vec<Shape>,
    /// Motion intensities, mapped to concrete timing by the compiler.
    #[serde(default)]
    pub animation: AnimationIntent,
}

fn default_noise_scale() -> f64 {
    1.0
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
/// Background fill: a flat color or a two-stop gradient.
pub enum BaseColor {
    /// Flat fill, written as a color string.
    Solid(Color),
    /// Two-stop gradient, written as an object.
    Gradient(Gradient),
}

impl Default for BaseColor {
    fn default() -> Self {
        Self::Solid(Color::default())
    }
}

impl BaseColor {
    /// Whether the fill reads as dark (mean lightness of its stops below 50%).
    pub fn is_dark(&self) -> bool {
        match self {
            Self::Solid(c) => c.is_dark(),
            Self::Gradient(g) => (g.color1.to_hsl().l + g.color2.to_hsl().l) / 2.0 < 50.0,
        }
    }

    /// Representative color (the solid fill or the first gradient stop).
    pub fn primary(&self) -> Color {
        match self {
            Self::Solid(c) => *c,
            Self::Gradient(g) => g.color1,
        }
    }

    fn normalized(&self) -> Self {
        match self {
            Self::Solid(c) => Self::Solid(c.normalized()),
            Self::Gradient(g) => Self::Gradient(Gradient {
                kind: g.kind.clone(),
                color1: g.color1.normalized(),
                color2: g.color2.normalized(),
                angle_degrees: g.angle_degrees,
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Two-stop gradient descriptor.
pub struct Gradient {
    /// Gradient geometry.
    pub kind: GradientKind,
    /// Start stop.
    pub color1: Color,
    /// End stop.
    pub color2: Color,
    /// Direction for linear gradients (0 = left to right, clockwise).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle_degrees: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
/// Gradient geometry. Unknown names are kept verbatim and passed through to the output.
pub enum GradientKind {
    /// `linear`.
    Linear,
    /// `radial`.
    Radial,
    /// Anything else.
    Other(String),
}

impl GradientKind {
    /// Name as written in scene JSON.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Linear => "linear",
            Self::Radial => "radial",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for GradientKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "linear" => Self::Linear,
            "radial" => Self::Radial,
            _ => Self::Other(s),
        }
    }
}

impl From<GradientKind> for String {
    fn from(k: GradientKind) -> Self {
        k.as_str().to_owned()
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One visual element of a scene.
pub struct Shape {
    /// Identifier, unique within a scene. Blob geometry is seeded from it.
    pub id: String,
    /// Geometry variant.
    #[serde(flatten)]
    pub kind: ShapeKind,
    /// Horizontal anchor in percent of canvas width.
    pub x: f64,
    /// Vertical anchor in percent of canvas height.
    pub y: f64,
    /// Size in percent of the canvas's shorter side.
    pub size_percent: f64,
    /// Fill color (solid only).
    pub color: Color,
    /// Fill opacity, `0..=1`.
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    /// Gaussian blur standard deviation in pixels; `0` disables the blur filter.
    #[serde(default)]
    pub blur_radius: f64,
    /// Compositing mode against what is painted below.
    #[serde(default)]
    pub blend_mode: BlendMode,
}

fn default_opacity() -> f64 {
    1.0
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// Shape geometry. Only blobs carry a vertex count.
pub enum ShapeKind {
    /// Organic closed curve with `complexity` vertices (`>= 3`).
    Blob {
        /// Vertex count.
        complexity: u32,
    },
    /// Plain circle.
    Circle,
}

impl Shape {
    /// Blob shape with default opacity, no blur and normal blending.
    pub fn blob(
        id: impl Into<String>,
        complexity: u32,
        x: f64,
        y: f64,
        size_percent: f64,
        color: Color,
    ) -> Self {
        Self::new(id, ShapeKind::Blob { complexity }, x, y, size_percent, color)
    }

    /// Circle shape with default opacity, no blur and normal blending.
    pub fn circle(id: impl Into<String>, x: f64, y: f64, size_percent: f64, color: Color) -> Self {
        Self::new(id, ShapeKind::Circle, x, y, size_percent, color)
    }

    fn new(
        id: impl Into<String>,
        kind: ShapeKind,
        x: f64,
        y: f64,
        size_percent: f64,
        color: Color,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            x,
            y,
            size_percent,
            color,
            opacity: 1.0,
            blur_radius: 0.0,
            blend_mode: BlendMode::Normal,
        }
    }

    /// Set opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Set blur radius.
    pub fn with_blur(mut self, blur_radius: f64) -> Self {
        self.blur_radius = blur_radius;
        self
    }

    /// Set blend mode.
    pub fn with_blend(mut self, blend_mode: BlendMode) -> Self {
        self.blend_mode = blend_mode;
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
/// CSS compositing mode. Unknown names are kept verbatim and passed through to the output.
pub enum BlendMode {
    /// `normal`.
    #[default]
    Normal,
    /// `multiply`.
    Multiply,
    /// `screen`.
    Screen,
    /// `overlay`.
    Overlay,
    /// `darken`.
    Darken,
    /// `lighten`.
    Lighten,
    /// `color-dodge`.
    ColorDodge,
    /// `color-burn`.
    ColorBurn,
    /// `hard-light`.
    HardLight,
    /// `soft-light`.
    SoftLight,
    /// `difference`.
    Difference,
    /// `exclusion`.
    Exclusion,
    /// `hue`.
    Hue,
    /// `saturation`.
    Saturation,
    /// `color`.
    Color,
    /// `luminosity`.
    Luminosity,
    /// `plus-lighter`.
    PlusLighter,
    /// Anything else.
    Other(String),
}

impl BlendMode {
    /// CSS name.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Normal => "normal",
            Self::Multiply => "multiply",
            Self::Screen => "screen",
            Self::Overlay => "overlay",
            Self::Darken => "darken",
            Self::Lighten => "lighten",
            Self::ColorDodge => "color-dodge",
            Self::ColorBurn => "color-burn",
            Self::HardLight => "hard-light",
            Self::SoftLight => "soft-light",
            Self::Difference => "difference",
            Self::Exclusion => "exclusion",
            Self::Hue => "hue",
            Self::Saturation => "saturation",
            Self::Color => "color",
            Self::Luminosity => "luminosity",
            Self::PlusLighter => "plus-lighter",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for BlendMode {
    fn from(s: String) -> Self {
        match s.as_str() {
            "normal" => Self::Normal,
            "multiply" => Self::Multiply,
            "screen" => Self::Screen,
            "overlay" => Self::Overlay,
            "darken" => Self::Darken,
            "lighten" => Self::Lighten,
            "color-dodge" => Self::ColorDodge,
            "color-burn" => Self::ColorBurn,
            "hard-light" => Self::HardLight,
            "soft-light" => Self::SoftLight,
            "difference" => Self::Difference,
            "exclusion" => Self::Exclusion,
            "hue" => Self::Hue,
            "saturation" => Self::Saturation,
            "color" => Self::Color,
            "luminosity" => Self::Luminosity,
            "plus-lighter" => Self::PlusLighter,
            _ => Self::Other(s),
        }
    }
}

impl From<BlendMode> for String {
    fn from(m: BlendMode) -> Self {
        m.as_str().to_owned()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Caller-specified motion intensities. Missing fields are zero / disabled.
pub struct AnimationIntent {
    /// Master switch for per-shape motion.
    pub enabled: bool,
    /// Global tempo multiplier.
    pub speed: f64,
    /// Drift distance.
    pub flow: f64,
    /// Breathing (scale) amount.
    pub pulse: f64,
    /// Rotation sway amount.
    pub rotate: f64,
    /// Grain shimmer rate; `0` keeps the grain static.
    pub noise_anim: f64,
    /// Cycle each shape's hue through two 120° shifted variants.
    pub color_cycle: bool,
    /// Tempo multiplier for the hue cycle.
    pub color_cycle_speed: f64,
}

impl SceneConfig {
    /// Empty scene: black background, no grain, no shapes, no motion.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            base_color: BaseColor::default(),
            noise_amount: 0.0,
            noise_scale: default_noise_scale(),
            shapes: Vec::new(),
            animation: AnimationIntent::default(),
        }
    }

    /// Parse a scene config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> BlobscapeResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| BlobscapeError::serde(format!("parse scene config JSON: {e}")))
    }

    /// Parse a scene config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> BlobscapeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            BlobscapeError::validation(format!("open scene config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> BlobscapeResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| BlobscapeError::serde(format!("serialize scene config: {e}")))
    }

    /// Canvas dimensions.
    pub fn canvas(&self) -> BlobscapeResult<Canvas> {
        Canvas::new(self.width, self.height)
    }

    /// Check the invariants that make a scene uncompilable.
    ///
    /// Shape placement must be finite. Everything else (color notation, ranges of
    /// opacity/noise, unknown blend modes) is normalized or passed through downstream.
    pub fn validate(&self) -> BlobscapeResult<()> {
        self.canvas()?;
        for shape in &self.shapes {
            if let ShapeKind::Blob { complexity } = shape.kind
                && complexity < MIN_COMPLEXITY
            {
                return Err(BlobscapeError::validation(format!(
                    "shape '{}' has complexity {complexity} (must be >= {MIN_COMPLEXITY})",
                    shape.id
                )));
            }
            let placement = [
                ("x", shape.x),
                ("y", shape.y),
                ("size_percent", shape.size_percent),
            ];
            for (field, v) in placement {
                if !v.is_finite() {
                    return Err(BlobscapeError::validation(format!(
                        "shape '{}' has non-finite {field} ({v})",
                        shape.id
                    )));
                }
            }
        }
        Ok(())
    }

    /// Copy with every color re-tagged into canonical HSL form.
    pub fn normalized(&self) -> Self {
        let mut out = self.clone();
        out.base_color = self.base_color.normalized();
        for shape in &mut out.shapes {
            shape.color = shape.color.normalized();
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
