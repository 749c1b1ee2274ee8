//! Built-in recipes. Each documents its shape-count range in its [`Recipe`] entry; the
//! bodies must never emit outside it.

use crate::{
    color::space::{Color, shift_color},
    foundation::rng::SeededRandom,
    recipes::palette::{anchor, blur_px, pick_blend, sample_hsl, shape_count, shape_id},
    recipes::registry::{Recipe, SceneOverrides},
    scene::model::{AnimationIntent, BaseColor, BlendMode, Gradient, GradientKind, SceneConfig, Shape},
};

pub(crate) static BUILTIN: [Recipe; 10] = [
    Recipe::new("aurora", "soft multi-tone ambient glow", 3, 6, aurora),
    Recipe::new("vivid", "saturated, high-contrast color fields", 4, 7, vivid),
    Recipe::new("starfield", "scattered bright points on deep space", 12, 24, starfield),
    Recipe::new("grid", "grid-aligned flat color discs", 4, 9, grid),
    Recipe::new("glitch", "RGB-offset channel triplets", 9, 15, glitch),
    Recipe::new("lava", "warm molten blobs, always moving", 3, 6, lava),
    Recipe::new("pastel", "light paper with soft tinted blobs", 3, 7, pastel),
    Recipe::new("noir", "monochrome smoke", 3, 6, noir),
    Recipe::new("sunset", "warm blobs over a dusk gradient", 3, 6, sunset),
    Recipe::new("ocean", "teal and blue shapes in a radial deep", 4, 7, ocean),
];

fn min_side(base: &SceneConfig) -> f64 {
    f64::from(base.width.min(base.height))
}

fn aurora(base: &SceneConfig, rng: &mut SeededRandom) -> SceneOverrides {
    let dark = base.base_color.is_dark();
    let anchor_hue = base.base_color.primary().to_hsl().h;
    let n = shape_count(rng, 3, 6);
    let light = if dark { 45.0..65.0 } else { 55.0..75.0 };

    let shapes = (0..n)
        .map(|i| {
            let id = shape_id(rng, "aurora", i);
            let (x, y) = anchor(rng, 10.0);
            let color = sample_hsl(
                rng,
                anchor_hue + 120.0..anchor_hue + 260.0,
                50.0..80.0,
                light.clone(),
            );
            Shape::blob(id, rng.int_range(5, 8), x, y, rng.range(40.0, 80.0), color)
                .with_opacity(rng.range(0.5, 0.8))
                .with_blur(blur_px(rng, min_side(base), 0.06..0.12))
                .with_blend(pick_blend(rng, dark))
        })
        .collect();

    SceneOverrides {
        noise_amount: Some(rng.range(12.0, 20.0)),
        shapes,
        ..SceneOverrides::default()
    }
}

fn vivid(base: &SceneConfig, rng: &mut SeededRandom) -> SceneOverrides {
    let bg_hue = base.base_color.primary().to_hsl().h;
    let n = shape_count(rng, 4, 7);
    let start_hue = rng.range(0.0, 360.0);

    let shapes = (0..n)
        .map(|i| {
            let id = shape_id(rng, "vivid", i);
            let (x, y) = anchor(rng, 5.0);
            // Spread hues around the wheel so neighbours contrast.
            let hue = start_hue + (i as f64) * 360.0 / (n as f64) + rng.range(-15.0, 15.0);
            let color = Color::hsl(hue, rng.range(85.0, 100.0), rng.range(50.0, 60.0));
            Shape::blob(id, rng.int_range(4, 7), x, y, rng.range(30.0, 60.0), color)
                .with_opacity(rng.range(0.75, 1.0))
                .with_blur(blur_px(rng, min_side(base), 0.02..0.05))
                .with_blend(pick_blend(rng, true))
        })
        .collect();

    SceneOverrides {
        base_color: Some(BaseColor::Solid(Color::hsl(bg_hue, 40.0, 8.0))),
        noise_amount: Some(8.0),
        shapes,
        ..SceneOverrides::default()
    }
}

fn starfield(base: &SceneConfig, rng: &mut SeededRandom) -> SceneOverrides {
    let bg_hue = base.base_color.primary().to_hsl().h;
    let n = shape_count(rng, 12, 24);

    let shapes = (0..n)
        .map(|i| {
            let id = shape_id(rng, "star", i);
            let (x, y) = anchor(rng, 1.0);
            let color = sample_hsl(rng, 180.0..260.0, 0.0..30.0, 80.0..100.0);
            Shape::circle(id, x, y, rng.range(0.4, 2.5), color)
                .with_opacity(rng.range(0.5, 1.0))
                .with_blur(rng.range(0.0, 2.0).round())
                .with_blend(BlendMode::Screen)
        })
        .collect();

    SceneOverrides {
        base_color: Some(BaseColor::Solid(Color::hsl(bg_hue, 50.0, 4.0))),
        noise_amount: Some(6.0),
        noise_scale: Some(0.6),
        shapes,
        animation: Some(AnimationIntent {
            pulse: base.animation.pulse.max(0.4),
            ..base.animation
        }),
    }
}

fn grid(base: &SceneConfig, rng: &mut SeededRandom) -> SceneOverrides {
    let cols = rng.int_range(2, 3) as usize;
    let rows = rng.int_range(2, 3) as usize;
    let hue = rng.range(0.0, 360.0);
    let dark = base.base_color.is_dark();
    let light = if dark { 55.0 } else { 45.0 };

    let cell_w = 100.0 / cols as f64;
    let cell_h = 100.0 / rows as f64;
    let cell_short = cell_w.min(cell_h);

    let mut shapes = Vec::with_capacity(cols * rows);
    for row in 0..rows {
        for col in 0..cols {
            let i = row * cols + col;
            let id = shape_id(rng, "cell", i);
            let color = Color::hsl(hue + (i as f64) * 30.0, 65.0, light);
            shapes.push(Shape::circle(
                id,
                cell_w * (col as f64 + 0.5),
                cell_h * (row as f64 + 0.5),
                cell_short * 0.6,
                color,
            ));
        }
    }

    SceneOverrides {
        noise_amount: Some(4.0),
        shapes,
        animation: Some(AnimationIntent {
            rotate: 0.0,
            ..base.animation
        }),
        ..SceneOverrides::default()
    }
}

fn glitch(base: &SceneConfig, rng: &mut SeededRandom) -> SceneOverrides {
    let dark = base.base_color.is_dark();
    let triplets = shape_count(rng, 3, 5);
    // Additive primaries on dark backgrounds, subtractive ones on light.
    let (channels, blend) = if dark {
        ([0.0, 120.0, 240.0], BlendMode::Screen)
    } else {
        ([180.0, 300.0, 60.0], BlendMode::Multiply)
    };

    let mut shapes = Vec::with_capacity(triplets * 3);
    for t in 0..triplets {
        let (x, y) = anchor(rng, 15.0);
        let size = rng.range(15.0, 35.0);
        let offset = rng.range(0.8, 2.5);
        for (c, hue) in channels.iter().enumerate() {
            let id = shape_id(rng, "glitch", t * 3 + c);
            let dx = (c as f64 - 1.0) * offset;
            shapes.push(
                Shape::circle(id, x + dx, y, size, Color::hsl(*hue, 100.0, 50.0))
                    .with_opacity(0.85)
                    .with_blend(blend.clone()),
            );
        }
    }

    SceneOverrides {
        base_color: Some(BaseColor::Solid(if dark {
            Color::hsl(0.0, 0.0, 5.0)
        } else {
            Color::hsl(0.0, 0.0, 96.0)
        })),
        noise_amount: Some(25.0),
        noise_scale: Some(0.5),
        shapes,
        ..SceneOverrides::default()
    }
}

fn lava(base: &SceneConfig, rng: &mut SeededRandom) -> SceneOverrides {
    let n = shape_count(rng, 3, 6);

    let shapes = (0..n)
        .map(|i| {
            let id = shape_id(rng, "lava", i);
            let (x, y) = anchor(rng, 10.0);
            let color = sample_hsl(rng, 0.0..40.0, 80.0..100.0, 45.0..60.0);
            Shape::blob(id, rng.int_range(5, 9), x, y, rng.range(35.0, 70.0), color)
                .with_opacity(rng.range(0.7, 0.95))
                .with_blur(blur_px(rng, min_side(base), 0.03..0.07))
                .with_blend(pick_blend(rng, true))
        })
        .collect();

    // Lava moves even when the caller asked for a still scene.
    let a = base.animation;
    SceneOverrides {
        base_color: Some(BaseColor::Solid(Color::hsl(10.0, 60.0, 7.0))),
        noise_amount: Some(14.0),
        shapes,
        animation: Some(AnimationIntent {
            enabled: true,
            speed: a.speed.max(0.8),
            flow: a.flow.max(0.8),
            pulse: a.pulse.max(0.5),
            ..a
        }),
        ..SceneOverrides::default()
    }
}

fn pastel(base: &SceneConfig, rng: &mut SeededRandom) -> SceneOverrides {
    let bg_hue = base.base_color.primary().to_hsl().h;
    let n = shape_count(rng, 3, 7);

    let shapes = (0..n)
        .map(|i| {
            let id = shape_id(rng, "pastel", i);
            let (x, y) = anchor(rng, 8.0);
            let color = sample_hsl(rng, 0.0..360.0, 50.0..70.0, 75.0..88.0);
            Shape::blob(id, rng.int_range(4, 7), x, y, rng.range(35.0, 65.0), color)
                .with_opacity(rng.range(0.6, 0.9))
                .with_blur(blur_px(rng, min_side(base), 0.05..0.1))
                .with_blend(pick_blend(rng, false))
        })
        .collect();

    SceneOverrides {
        base_color: Some(BaseColor::Solid(Color::hsl(bg_hue, 30.0, 94.0))),
        noise_amount: Some(10.0),
        shapes,
        ..SceneOverrides::default()
    }
}

fn noir(base: &SceneConfig, rng: &mut SeededRandom) -> SceneOverrides {
    let n = shape_count(rng, 3, 6);

    let shapes = (0..n)
        .map(|i| {
            let id = shape_id(rng, "noir", i);
            let (x, y) = anchor(rng, 10.0);
            let color = Color::hsl(0.0, 0.0, rng.range(20.0, 70.0));
            Shape::blob(id, rng.int_range(5, 8), x, y, rng.range(40.0, 75.0), color)
                .with_opacity(rng.range(0.4, 0.7))
                .with_blur(blur_px(rng, min_side(base), 0.08..0.14))
                .with_blend(pick_blend(rng, true))
        })
        .collect();

    SceneOverrides {
        base_color: Some(BaseColor::Solid(Color::hsl(0.0, 0.0, 6.0))),
        noise_amount: Some(30.0),
        noise_scale: Some(0.7),
        shapes,
        animation: Some(AnimationIntent {
            color_cycle: false,
            ..base.animation
        }),
    }
}

fn sunset(base: &SceneConfig, rng: &mut SeededRandom) -> SceneOverrides {
    let top = Color::hsl(270.0 + rng.range(-10.0, 10.0), 60.0, 18.0);
    let bottom = shift_color(top, 70.0, 10.0, 27.0);
    let gradient = BaseColor::Gradient(Gradient {
        kind: GradientKind::Linear,
        color1: top,
        color2: bottom,
        angle_degrees: Some(90.0 + rng.range(-20.0, 20.0)),
    });
    let dark = gradient.is_dark();
    let n = shape_count(rng, 3, 6);

    let shapes = (0..n)
        .map(|i| {
            let id = shape_id(rng, "sunset", i);
            let (x, y) = anchor(rng, 10.0);
            let color = sample_hsl(rng, 350.0..410.0, 75.0..95.0, 55.0..70.0);
            Shape::blob(id, rng.int_range(5, 7), x, y, rng.range(30.0, 60.0), color)
                .with_opacity(rng.range(0.55, 0.85))
                .with_blur(blur_px(rng, min_side(base), 0.05..0.1))
                .with_blend(pick_blend(rng, dark))
        })
        .collect();

    SceneOverrides {
        base_color: Some(gradient),
        noise_amount: Some(12.0),
        shapes,
        ..SceneOverrides::default()
    }
}

fn ocean(base: &SceneConfig, rng: &mut SeededRandom) -> SceneOverrides {
    let gradient = BaseColor::Gradient(Gradient {
        kind: GradientKind::Radial,
        color1: Color::hsl(200.0, 70.0, 25.0),
        color2: Color::hsl(220.0, 80.0, 8.0),
        angle_degrees: None,
    });
    let dark = gradient.is_dark();
    let n = shape_count(rng, 4, 7);

    let shapes = (0..n)
        .map(|i| {
            let id = shape_id(rng, "ocean", i);
            let (x, y) = anchor(rng, 8.0);
            let color = sample_hsl(rng, 170.0..220.0, 60.0..85.0, 40.0..60.0);
            let size = rng.range(20.0, 55.0);
            let shape = if rng.chance(0.25) {
                Shape::circle(id, x, y, size, color)
            } else {
                Shape::blob(id, rng.int_range(5, 8), x, y, size, color)
            };
            shape
                .with_opacity(rng.range(0.5, 0.8))
                .with_blur(blur_px(rng, min_side(base), 0.04..0.09))
                .with_blend(pick_blend(rng, dark))
        })
        .collect();

    SceneOverrides {
        base_color: Some(gradient),
        noise_amount: Some(16.0),
        noise_scale: Some(1.3),
        shapes,
        ..SceneOverrides::default()
    }
}
