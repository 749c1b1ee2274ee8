use crate::{
    color::space::Color,
    scene::model::{AnimationIntent, BaseColor, Gradient, GradientKind, SceneConfig},
};

/// Names of the built-in base configs, in table order.
pub const PRESET_NAMES: [&str; 5] = ["hero-dark", "hero-light", "card", "banner", "mobile"];

/// Built-in base config by name. Presets carry canvas, fill, grain and motion; shapes come from
/// a recipe.
pub fn preset(name: &str) -> Option<SceneConfig> {
    let scene = match name {
        "hero-dark" => SceneConfig {
            base_color: BaseColor::Solid(Color::parse("#0b0d17")),
            noise_amount: 18.0,
            noise_scale: 1.0,
            animation: ambient_motion(),
            ..SceneConfig::new(1920, 1080)
        },
        "hero-light" => SceneConfig {
            base_color: BaseColor::Solid(Color::parse("#f4f1ea")),
            noise_amount: 12.0,
            noise_scale: 1.2,
            animation: ambient_motion(),
            ..SceneConfig::new(1920, 1080)
        },
        "card" => SceneConfig {
            base_color: BaseColor::Gradient(Gradient {
                kind: GradientKind::Linear,
                color1: Color::parse("#1d1b3a"),
                color2: Color::parse("#3a1c4a"),
                angle_degrees: Some(135.0),
            }),
            noise_amount: 10.0,
            noise_scale: 0.8,
            ..SceneConfig::new(800, 500)
        },
        "banner" => SceneConfig {
            base_color: BaseColor::Solid(Color::parse("#10131c")),
            noise_amount: 8.0,
            noise_scale: 1.5,
            animation: AnimationIntent {
                enabled: true,
                speed: 0.6,
                flow: 0.8,
                ..AnimationIntent::default()
            },
            ..SceneConfig::new(1500, 500)
        },
        "mobile" => SceneConfig {
            base_color: BaseColor::Solid(Color::parse("#0e1116")),
            noise_amount: 14.0,
            noise_scale: 0.9,
            animation: ambient_motion(),
            ..SceneConfig::new(1080, 1920)
        },
        _ => return None,
    };
    Some(scene)
}

/// Default base config for batch runs.
pub fn default_base() -> SceneConfig {
    SceneConfig {
        base_color: BaseColor::Solid(Color::parse("#0b0d17")),
        noise_amount: 15.0,
        noise_scale: 1.0,
        animation: ambient_motion(),
        ..SceneConfig::new(1920, 1080)
    }
}

fn ambient_motion() -> AnimationIntent {
    AnimationIntent {
        enabled: true,
        speed: 1.0,
        flow: 0.5,
        pulse: 0.3,
        rotate: 0.2,
        noise_anim: 0.0,
        color_cycle: false,
        color_cycle_speed: 1.0,
    }
}
