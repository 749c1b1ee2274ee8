use std::ops::Range;

use crate::{
    color::space::Color,
    foundation::rng::SeededRandom,
    scene::model::BlendMode,
};

/// Modes that only brighten what is below; suited to dark backgrounds.
static LIGHTENING: [BlendMode; 4] = [
    BlendMode::Screen,
    BlendMode::Lighten,
    BlendMode::ColorDodge,
    BlendMode::PlusLighter,
];

/// Modes that only darken what is below; suited to light backgrounds.
static DARKENING: [BlendMode; 3] = [BlendMode::Multiply, BlendMode::Darken, BlendMode::ColorBurn];

/// Blend modes that keep shapes visible against the background.
pub(crate) fn blend_palette(dark_background: bool) -> &'static [BlendMode] {
    if dark_background {
        &LIGHTENING
    } else {
        &DARKENING
    }
}

/// Pick a blend mode from [`blend_palette`].
pub(crate) fn pick_blend(rng: &mut SeededRandom, dark_background: bool) -> BlendMode {
    rng.pick(blend_palette(dark_background))
        .cloned()
        .unwrap_or_default()
}

/// Sample an HSL color; the hue range may exceed 360 and is wrapped.
pub(crate) fn sample_hsl(
    rng: &mut SeededRandom,
    hue: Range<f64>,
    sat: Range<f64>,
    light: Range<f64>,
) -> Color {
    let h = rng.range(hue.start, hue.end);
    let s = rng.range(sat.start, sat.end);
    let l = rng.range(light.start, light.end);
    Color::hsl(h, s, l)
}

/// Shape count in `[min, max]`.
pub(crate) fn shape_count(rng: &mut SeededRandom, min: usize, max: usize) -> usize {
    rng.int_range(min as u32, max as u32) as usize
}

/// Scene-unique shape id: `<prefix>-<index>-<6 hex digits>`.
///
/// The suffix comes from the scene's random source, so blob geometry (seeded by id) changes
/// with the scene seed while staying reproducible for a fixed seed.
pub(crate) fn shape_id(rng: &mut SeededRandom, prefix: &str, index: usize) -> String {
    format!("{prefix}-{index}-{:06x}", rng.next_u32() & 0x00FF_FFFF)
}

/// Anchor position in percent, keeping `margin` percent away from every edge.
pub(crate) fn anchor(rng: &mut SeededRandom, margin: f64) -> (f64, f64) {
    (
        rng.range(margin, 100.0 - margin),
        rng.range(margin, 100.0 - margin),
    )
}

/// Blur radius as a fraction of the canvas's shorter side.
pub(crate) fn blur_px(rng: &mut SeededRandom, min_side: f64, fraction: Range<f64>) -> f64 {
    (min_side * rng.range(fraction.start, fraction.end)).round()
}
