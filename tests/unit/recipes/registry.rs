use super::*;
use crate::{
    color::space::Color,
    scene::model::{BlendMode, ShapeKind},
    scene::presets::{default_base, preset},
};

fn noop(_: &SceneConfig, _: &mut SeededRandom) -> SceneOverrides {
    SceneOverrides::default()
}

#[test]
fn builtin_has_ten_unique_recipes() {
    let reg = RecipeRegistry::builtin();
    assert_eq!(reg.len(), 10);
    let mut names: Vec<_> = reg.names().collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 10);
    for name in [
        "aurora", "vivid", "starfield", "grid", "glitch", "lava", "pastel", "noir", "sunset",
        "ocean",
    ] {
        assert!(reg.get(name).is_some(), "missing {name}");
    }
}

#[test]
fn unknown_recipe_is_an_error_listing_known_names() {
    let reg = RecipeRegistry::builtin();
    let err = reg
        .apply("nope", &default_base(), &mut SeededRandom::new(1))
        .unwrap_err();
    assert!(matches!(err, BlobscapeError::Recipe(_)));
    assert!(err.to_string().contains("aurora"));
}

#[test]
fn register_rejects_duplicates_and_bad_ranges() {
    let mut reg = RecipeRegistry::empty();
    assert!(reg.is_empty());
    reg.register(Recipe::new("plain", "nothing", 0, 0, noop))
        .unwrap();
    assert!(reg.register(Recipe::new("plain", "again", 0, 0, noop)).is_err());
    assert!(reg.register(Recipe::new("odd", "inverted", 3, 1, noop)).is_err());
    assert_eq!(reg.len(), 1);
}

#[test]
fn noop_recipe_keeps_base_and_clears_shapes() {
    let mut reg = RecipeRegistry::empty();
    reg.register(Recipe::new("plain", "nothing", 0, 0, noop))
        .unwrap();
    let mut base = default_base();
    base.shapes
        .push(Shape::circle("old", 50.0, 50.0, 10.0, Color::parse("#fff")));
    let out = reg.apply("plain", &base, &mut SeededRandom::new(3)).unwrap();
    assert!(out.shapes.is_empty());
    assert_eq!(out.width, base.width);
    assert_eq!(out.noise_amount, base.noise_amount);
    assert_eq!(out.animation, base.animation);
}

#[test]
fn same_seed_same_scene() {
    let reg = RecipeRegistry::builtin();
    let base = default_base();
    for recipe in reg.iter() {
        let a = recipe.apply(&base, &mut SeededRandom::new(42));
        let b = recipe.apply(&base, &mut SeededRandom::new(42));
        assert_eq!(a, b, "{} is not deterministic", recipe.name);
    }
}

#[test]
fn different_seeds_usually_differ() {
    let reg = RecipeRegistry::builtin();
    let base = default_base();
    for recipe in reg.iter() {
        let a = recipe.apply(&base, &mut SeededRandom::new(1));
        let b = recipe.apply(&base, &mut SeededRandom::new(2));
        assert_ne!(a, b, "{} ignores its seed", recipe.name);
    }
}

#[test]
fn shape_counts_stay_in_declared_range() {
    let reg = RecipeRegistry::builtin();
    let bases = [default_base(), preset("hero-light").unwrap()];
    for recipe in reg.iter() {
        for base in &bases {
            for seed in 0..200 {
                let scene = recipe.apply(base, &mut SeededRandom::new(seed));
                let n = scene.shapes.len();
                assert!(
                    (recipe.min_shapes..=recipe.max_shapes).contains(&n),
                    "{} seed {seed}: {n} shapes",
                    recipe.name
                );
                scene.validate().unwrap();
            }
        }
    }
}

#[test]
fn shape_ids_are_unique_within_a_scene() {
    let reg = RecipeRegistry::builtin();
    for recipe in reg.iter() {
        let scene = recipe.apply(&default_base(), &mut SeededRandom::new(9));
        let mut ids: Vec<_> = scene.shapes.iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), before, "{} repeats ids", recipe.name);
    }
}

#[test]
fn lava_always_moves() {
    let reg = RecipeRegistry::builtin();
    let still = preset("card").unwrap();
    assert!(!still.animation.enabled);
    let scene = reg
        .apply("lava", &still, &mut SeededRandom::new(5))
        .unwrap();
    assert!(scene.animation.enabled);
    assert!(scene.animation.speed > 0.0);
    assert!(scene.animation.flow > 0.0);
}

#[test]
fn light_background_gets_darkening_blends() {
    let reg = RecipeRegistry::builtin();
    let light = preset("hero-light").unwrap();
    for seed in 0..20 {
        let scene = reg
            .apply("aurora", &light, &mut SeededRandom::new(seed))
            .unwrap();
        for shape in &scene.shapes {
            assert!(
                matches!(
                    shape.blend_mode,
                    BlendMode::Multiply | BlendMode::Darken | BlendMode::ColorBurn
                ),
                "{:?}",
                shape.blend_mode
            );
        }
    }
}

#[test]
fn pastel_darkens_onto_paper() {
    let reg = RecipeRegistry::builtin();
    let scene = reg
        .apply("pastel", &default_base(), &mut SeededRandom::new(8))
        .unwrap();
    assert!(!scene.base_color.is_dark());
    assert!(
        scene
            .shapes
            .iter()
            .all(|s| !matches!(s.blend_mode, BlendMode::Screen | BlendMode::Lighten))
    );
}

#[test]
fn grid_and_glitch_are_circles_and_sunset_is_blobs() {
    let reg = RecipeRegistry::builtin();
    let base = default_base();
    for name in ["grid", "glitch", "starfield"] {
        let scene = reg.apply(name, &base, &mut SeededRandom::new(4)).unwrap();
        assert!(scene.shapes.iter().all(|s| s.kind == ShapeKind::Circle));
    }
    let scene = reg.apply("sunset", &base, &mut SeededRandom::new(4)).unwrap();
    assert!(
        scene
            .shapes
            .iter()
            .all(|s| matches!(s.kind, ShapeKind::Blob { .. }))
    );
    assert!(matches!(scene.base_color, BaseColor::Gradient(_)));
}

#[test]
fn applied_colors_are_canonical_hsl() {
    let reg = RecipeRegistry::builtin();
    let mut base = default_base();
    base.base_color = BaseColor::Solid(Color::parse("#223344"));
    for recipe in reg.iter() {
        let scene = recipe.apply(&base, &mut SeededRandom::new(12));
        match &scene.base_color {
            BaseColor::Solid(c) => assert!(matches!(c, Color::Hsl(_))),
            BaseColor::Gradient(g) => {
                assert!(matches!(g.color1, Color::Hsl(_)));
                assert!(matches!(g.color2, Color::Hsl(_)));
            }
        }
        assert!(scene.shapes.iter().all(|s| matches!(s.color, Color::Hsl(_))));
    }
}
