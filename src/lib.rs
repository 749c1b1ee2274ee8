//! Blobscape is a deterministic procedural background generator.
//!
//! A named recipe turns a base [`SceneConfig`] and a seed into a concrete scene (background,
//! soft blob and circle shapes, grain, ambient motion), which [`compile_scene`] turns into a
//! [`RenderDocument`] and finally self-contained SVG with SMIL animation:
//!
//! - Pick a base config ([`preset`], [`default_base`] or [`SceneConfig::from_path`])
//! - Run [`generate`] with a [`RecipeRegistry`] and a `u32` seed
//! - Write [`RenderDocument::to_svg`], or [`rasterize_svg`] for a still PNG preview
//!
//! The same `(recipe, base, seed)` always produces byte-identical markup.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod color;
mod compile;
mod foundation;
mod geometry;
mod pipeline;
mod recipes;
mod render;
mod scene;

pub use crate::foundation::core::{Affine, BezPath, Canvas, PathEl, Point, Rect, Vec2};
pub use crate::foundation::error::{BlobscapeError, BlobscapeResult};
pub use crate::foundation::math::clamp;
pub use crate::foundation::rng::{STRING_SEED_MODULUS, SeededRandom, seed_from_str};

pub use crate::color::space::{
    Color, Hsl, Rgb8, format_hsl, hex_to_hsl, hsl_to_hex, hsl_to_rgb, parse_hex, parse_hsl,
    rgb_to_hsl, shift_color, shift_color_str,
};
pub use crate::geometry::blob::{
    MIN_COMPLEXITY, blob_vertices, generate_blob_path, generate_blob_path_data,
    smooth_closed_path,
};
pub use crate::geometry::path_data::path_data;

pub use crate::scene::model::{
    AnimationIntent, BaseColor, BlendMode, Gradient, GradientKind, SceneConfig, Shape, ShapeKind,
};
pub use crate::scene::presets::{PRESET_NAMES, default_base, preset};

pub use crate::recipes::registry::{Recipe, RecipeFn, RecipeRegistry, SceneOverrides};

pub use crate::compile::animation::{ColorCycle, IndexHash, KEY_TIMES, Keyframe, MotionTrack};
pub use crate::compile::compiler::{BLOB_CONTRAST, compile_scene};
pub use crate::compile::document::{
    Background, NoiseOverlay, RenderDocument, RenderShape, ShapeGeometry,
};

pub use crate::pipeline::{Generated, generate, generate_svg};
pub use crate::render::raster::{RasterImage, rasterize_svg};
