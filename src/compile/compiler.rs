use std::collections::HashSet;

use kurbo::Shape as _;

use crate::{
    compile::animation::{color_cycle, motion_track, noise_shimmer},
    compile::document::{Background, NoiseOverlay, RenderDocument, RenderShape, ShapeGeometry},
    foundation::core::{Affine, Canvas},
    foundation::error::BlobscapeResult,
    foundation::math::clamp,
    geometry::blob::generate_blob_path,
    scene::model::{BaseColor, SceneConfig, Shape, ShapeKind},
};

/// Radius variance applied to every compiled blob.
pub const BLOB_CONTRAST: f64 = 0.4;

const NOISE_FREQUENCY: f64 = 0.8;
const MIN_NOISE_SCALE: f64 = 0.05;
const MAX_NOISE_FREQUENCY: f64 = 4.0;
const NOISE_OCTAVES: u32 = 3;

/// Compile a finished scene config into a [`RenderDocument`].
///
/// The config is read, never modified. Blob geometry is seeded by each shape's id and
/// animation timing by each shape's index, so neither depends on the rest of the scene.
/// Unknown blend modes and gradient kinds pass through untouched.
#[tracing::instrument(
    skip(scene),
    fields(width = scene.width, height = scene.height, shapes = scene.shapes.len())
)]
pub fn compile_scene(scene: &SceneConfig) -> BlobscapeResult<RenderDocument> {
    scene.validate()?;
    let canvas = scene.canvas()?;

    let mut keys = HashSet::with_capacity(scene.shapes.len());
    let shapes = scene
        .shapes
        .iter()
        .enumerate()
        .map(|(index, shape)| {
            let key = unique_key(&mut keys, &shape.id, index);
            compile_shape(canvas, scene, index, shape, key)
        })
        .collect::<BlobscapeResult<Vec<_>>>()?;

    let noise = NoiseOverlay {
        base_frequency: noise_frequency(scene.noise_scale),
        octaves: NOISE_OCTAVES,
        opacity: clamp(scene.noise_amount / 100.0, 0.0, 1.0),
        shimmer_s: noise_shimmer(&scene.animation),
    };

    tracing::debug!(shapes = shapes.len(), "compiled scene");
    Ok(RenderDocument {
        canvas,
        background: background(&scene.base_color),
        shapes,
        noise,
    })
}

fn compile_shape(
    canvas: Canvas,
    scene: &SceneConfig,
    index: usize,
    shape: &Shape,
    key: String,
) -> BlobscapeResult<RenderShape> {
    let anchor = canvas.point_from_percent(shape.x, shape.y);
    let size = canvas.size_from_percent(shape.size_percent).max(0.0);

    let geometry = match shape.kind {
        ShapeKind::Circle => ShapeGeometry::Circle {
            center: anchor,
            radius: size / 2.0,
        },
        ShapeKind::Blob { complexity } => {
            let mut path =
                generate_blob_path(size, size, &shape.id, complexity, BLOB_CONTRAST)?;
            let center = path.bounding_box().center();
            path.apply_affine(Affine::translate(anchor - center));
            ShapeGeometry::Path(path)
        }
    };

    let fill = shape.color.normalized();
    Ok(RenderShape {
        key,
        geometry,
        fill,
        opacity: clamp(shape.opacity, 0.0, 1.0),
        blur: (shape.blur_radius.is_finite() && shape.blur_radius > 0.0)
            .then_some(shape.blur_radius),
        blend: shape.blend_mode.clone(),
        motion: motion_track(index, &scene.animation, anchor, canvas.min_side()),
        color_cycle: color_cycle(index, &scene.animation, fill),
    })
}

fn background(base: &BaseColor) -> Background {
    match base {
        BaseColor::Solid(c) => Background::Solid(c.normalized()),
        BaseColor::Gradient(g) => Background::Gradient {
            kind: g.kind.clone(),
            from: g.color1.normalized(),
            to: g.color2.normalized(),
            angle_degrees: g.angle_degrees.map_or(0.0, |a| finite_or(a, 0.0)),
        },
    }
}

/// Markup-safe id, made unique by suffixing a counter on collision.
fn unique_key(taken: &mut HashSet<String>, id: &str, index: usize) -> String {
    let mut base = sanitize_id(id);
    if base.is_empty() {
        base = format!("shape-{index}");
    }
    let mut key = base.clone();
    let mut n = index;
    while !taken.insert(key.clone()) {
        key = format!("{base}-{n}");
        n += 1;
    }
    key
}

/// Replace anything outside `[A-Za-z0-9_-]` with `_`.
pub(crate) fn sanitize_id(id: &str) -> String {
    id.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Turbulence base frequency; larger scale means coarser grain.
pub(crate) fn noise_frequency(noise_scale: f64) -> f64 {
    let scale = finite_or(noise_scale, 1.0).max(MIN_NOISE_SCALE);
    (NOISE_FREQUENCY / scale).min(MAX_NOISE_FREQUENCY)
}

fn finite_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() { v } else { fallback }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/compiler.rs"]
mod tests;
