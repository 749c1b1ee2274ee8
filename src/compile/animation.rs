use crate::{
    color::space::{Color, shift_color},
    foundation::core::{Point, Vec2},
    scene::model::AnimationIntent,
};

/// Key times shared by every looping track.
pub const KEY_TIMES: &str = "0;0.33;0.66;1";

const BASE_MOTION_S: f64 = 20.0;
const BASE_COLOR_CYCLE_S: f64 = 12.0;
const MIN_TEMPO: f64 = 0.1;
const FLOW_FRACTION: f64 = 0.06;
const PULSE_SCALE: f64 = 0.12;
const ROTATE_DEG: f64 = 20.0;
const MIN_SHIMMER_S: f64 = 0.05;

/// Three cheap, independent hashes of a shape's position in the scene, each in `[0, 0.9]`.
///
/// Animation timing is derived from these instead of a random source, so a shape's timing
/// depends on its index alone and never on the shapes around it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexHash {
    /// `(index * 13) mod 10 / 10`; flow direction and color-cycle delay.
    pub h1: f64,
    /// `(index * 29) mod 10 / 10`; motion duration.
    pub h2: f64,
    /// `(index * 37) mod 10 / 10`; motion delay and color-cycle duration.
    pub h3: f64,
}

impl IndexHash {
    /// Hashes for the shape at `index`.
    pub fn of(index: usize) -> Self {
        // (i * k) mod 10 == ((i mod 10) * k) mod 10, without overflow for large i.
        let d = index % 10;
        let h = |k: usize| ((d * k) % 10) as f64 / 10.0;
        Self {
            h1: h(13),
            h2: h(29),
            h3: h(37),
        }
    }
}

/// Transform state at one key time, relative to the shape's rest pose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    /// Drift in pixels.
    pub offset: Vec2,
    /// Uniform scale about the anchor.
    pub scale: f64,
    /// Rotation about the anchor, in degrees.
    pub rotate_deg: f64,
}

impl Keyframe {
    /// Untransformed pose; first and last key of every track.
    pub const REST: Self = Self {
        offset: Vec2::ZERO,
        scale: 1.0,
        rotate_deg: 0.0,
    };

    /// Translation that, composed before `scale(s)`, both applies the drift and keeps the
    /// anchor fixed under scaling.
    pub fn translate(&self, anchor: Point) -> Vec2 {
        self.offset + anchor.to_vec2() * (1.0 - self.scale)
    }
}

/// Looping translate/scale/rotate oscillation around a shape's anchor.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionTrack {
    /// Loop length in seconds.
    pub duration_s: f64,
    /// Negative begin offset; desynchronizes loops without a visible start.
    pub begin_s: f64,
    /// Pivot for scale and rotation.
    pub anchor: Point,
    /// Poses at [`KEY_TIMES`].
    pub keyframes: [Keyframe; 4],
}

/// Looping fill animation through two hue-rotated variants of the base color.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorCycle {
    /// Loop length in seconds.
    pub duration_s: f64,
    /// Negative begin offset.
    pub begin_s: f64,
    /// Fill at [`KEY_TIMES`]: base, +120°, +240°, base.
    pub values: [Color; 4],
}

/// Motion for the shape at `index`, or `None` when motion is disabled or has no amplitude.
pub fn motion_track(
    index: usize,
    intent: &AnimationIntent,
    anchor: Point,
    min_side: f64,
) -> Option<MotionTrack> {
    if !intent.enabled {
        return None;
    }
    let flow = finite_or_zero(intent.flow) * FLOW_FRACTION * min_side;
    let pulse = finite_or_zero(intent.pulse) * PULSE_SCALE;
    let rotate = finite_or_zero(intent.rotate) * ROTATE_DEG;
    if flow == 0.0 && pulse == 0.0 && rotate == 0.0 {
        return None;
    }

    let IndexHash { h1, h2, h3 } = IndexHash::of(index);
    let duration_s = BASE_MOTION_S / tempo(intent.speed) * (0.75 + 0.5 * h2);
    let dir = Vec2::from_angle((h1 * 360.0).to_radians());
    let d = dir * flow;

    let k1 = Keyframe {
        offset: d,
        scale: 1.0 + pulse,
        rotate_deg: rotate,
    };
    let k2 = Keyframe {
        offset: Vec2::new(-0.6 * d.y, 0.6 * d.x),
        scale: 1.0 - pulse / 2.0,
        rotate_deg: -rotate / 2.0,
    };

    Some(MotionTrack {
        duration_s,
        begin_s: -(h3 * duration_s),
        anchor,
        keyframes: [Keyframe::REST, k1, k2, Keyframe::REST],
    })
}

/// Color cycle for the shape at `index`, or `None` when cycling is off.
pub fn color_cycle(index: usize, intent: &AnimationIntent, color: Color) -> Option<ColorCycle> {
    if !intent.color_cycle {
        return None;
    }
    let IndexHash { h1, h3, .. } = IndexHash::of(index);
    let duration_s = BASE_COLOR_CYCLE_S / tempo(intent.color_cycle_speed) * (0.8 + 0.4 * h3);
    Some(ColorCycle {
        duration_s,
        begin_s: -(h1 * duration_s),
        values: [
            color,
            shift_color(color, 120.0, 0.0, 0.0),
            shift_color(color, 240.0, 0.0, 0.0),
            color,
        ],
    })
}

/// Loop duration of the grain seed animation, or `None` for static grain.
pub fn noise_shimmer(intent: &AnimationIntent) -> Option<f64> {
    let rate = intent.noise_anim;
    (rate.is_finite() && rate > 0.0).then(|| (1.0 / rate).max(MIN_SHIMMER_S))
}

fn tempo(v: f64) -> f64 {
    if v.is_finite() { v.max(MIN_TEMPO) } else { MIN_TEMPO }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/animation.rs"]
mod tests;
