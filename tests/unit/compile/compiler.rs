use kurbo::Shape as _;

use super::*;
use crate::{
    color::space::Color,
    foundation::error::BlobscapeError,
    scene::model::{AnimationIntent, BlendMode, Gradient, GradientKind},
};

fn scene() -> SceneConfig {
    let mut scene = SceneConfig::new(1000, 500);
    scene.base_color = BaseColor::Solid(Color::parse("#102030"));
    scene.noise_amount = 25.0;
    scene.shapes = vec![
        Shape::blob("a", 6, 30.0, 40.0, 50.0, Color::parse("#ff0000")).with_blur(20.0),
        Shape::circle("b", 70.0, 60.0, 20.0, Color::parse("#00ff00")).with_opacity(3.0),
        Shape::blob("c", 4, 50.0, 50.0, 10.0, Color::hsl(200.0, 50.0, 50.0))
            .with_blend(BlendMode::from("weird-mode".to_owned())),
    ];
    scene
}

#[test]
fn compiles_shapes_in_order() {
    let doc = compile_scene(&scene()).unwrap();
    assert_eq!(doc.shapes.len(), 3);
    let keys: Vec<_> = doc.shapes.iter().map(|s| s.key.as_str()).collect();
    assert_eq!(keys, ["a", "b", "c"]);
    assert_eq!(doc.background, Background::Solid(Color::parse("#102030").normalized()));
    assert_eq!(doc.noise.opacity, 0.25);
    assert_eq!(doc.noise.octaves, 3);
    assert!((doc.noise.base_frequency - 0.8).abs() < 1e-12);
}

#[test]
fn circle_radius_is_half_the_size() {
    let doc = compile_scene(&scene()).unwrap();
    match &doc.shapes[1].geometry {
        ShapeGeometry::Circle { center, radius } => {
            assert_eq!(*center, kurbo::Point::new(700.0, 300.0));
            assert_eq!(*radius, 50.0);
        }
        other => panic!("expected circle, got {other:?}"),
    }
    assert_eq!(doc.shapes[1].opacity, 1.0);
}

#[test]
fn blobs_are_centered_on_their_anchor() {
    let doc = compile_scene(&scene()).unwrap();
    let ShapeGeometry::Path(path) = &doc.shapes[0].geometry else {
        panic!("expected path");
    };
    let bbox = path.bounding_box();
    let c = bbox.center();
    assert!((c.x - 300.0).abs() < 1e-6, "{c:?}");
    assert!((c.y - 200.0).abs() < 1e-6, "{c:?}");
    assert!(bbox.width() > 100.0);
}

#[test]
fn blob_geometry_depends_only_on_id() {
    let a = compile_scene(&scene()).unwrap();
    let mut moved = scene();
    moved.shapes.remove(1);
    moved.shapes[0].x = 60.0;
    let b = compile_scene(&moved).unwrap();

    let (ShapeGeometry::Path(pa), ShapeGeometry::Path(pb)) =
        (&a.shapes[0].geometry, &b.shapes[0].geometry)
    else {
        panic!("expected paths");
    };
    let shift = pb.bounding_box().center() - pa.bounding_box().center();
    assert!((shift.x - 300.0).abs() < 1e-6);
    assert!(shift.y.abs() < 1e-6);
}

#[test]
fn blur_and_blend_pass_through() {
    let doc = compile_scene(&scene()).unwrap();
    assert_eq!(doc.shapes[0].blur, Some(20.0));
    assert_eq!(doc.shapes[0].filter_id().as_deref(), Some("blur-a"));
    assert_eq!(doc.shapes[1].blur, None);
    assert_eq!(doc.shapes[1].filter_id(), None);
    assert_eq!(doc.shapes[2].blend.as_str(), "weird-mode");
}

#[test]
fn no_motion_without_intent() {
    let doc = compile_scene(&scene()).unwrap();
    assert!(doc.shapes.iter().all(|s| s.motion.is_none()));
    assert!(doc.shapes.iter().all(|s| s.color_cycle.is_none()));
    assert!(doc.noise.shimmer_s.is_none());
}

#[test]
fn removing_a_later_shape_keeps_earlier_timing() {
    let mut full = scene();
    full.animation = AnimationIntent {
        enabled: true,
        speed: 1.0,
        flow: 0.5,
        pulse: 0.3,
        rotate: 0.2,
        color_cycle: true,
        color_cycle_speed: 1.0,
        noise_anim: 2.0,
    };
    let a = compile_scene(&full).unwrap();
    let mut shorter = full.clone();
    shorter.shapes.pop();
    let b = compile_scene(&shorter).unwrap();

    assert_eq!(a.shapes[..2], b.shapes[..]);
    assert_eq!(a.noise.shimmer_s, Some(0.5));
}

#[test]
fn invalid_scenes_are_rejected() {
    let mut bad = scene();
    bad.shapes.push(Shape::blob("d", 2, 0.0, 0.0, 10.0, Color::default()));
    assert!(matches!(
        compile_scene(&bad).unwrap_err(),
        BlobscapeError::Validation(_)
    ));

    let zero = SceneConfig::new(0, 100);
    assert!(matches!(
        compile_scene(&zero).unwrap_err(),
        BlobscapeError::Validation(_)
    ));
}

#[test]
fn non_finite_placement_is_rejected() {
    let c = Color::default();
    let cases = [
        Shape::blob("nan-x", 5, f64::NAN, 50.0, 20.0, c),
        Shape::blob("inf-y", 5, 50.0, f64::INFINITY, 20.0, c),
        Shape::circle("nan-size", 50.0, 50.0, f64::NAN, c),
    ];
    for shape in cases {
        let mut s = SceneConfig::new(100, 100);
        let id = shape.id.clone();
        s.shapes = vec![shape];
        match compile_scene(&s) {
            Err(BlobscapeError::Validation(msg)) => assert!(msg.contains(&id), "{msg}"),
            other => panic!("{id}: expected validation error, got {other:?}"),
        }
    }
}

#[test]
fn keys_are_sanitized_and_unique() {
    let mut s = SceneConfig::new(100, 100);
    let c = Color::default();
    s.shapes = vec![
        Shape::circle("a b", 50.0, 50.0, 10.0, c),
        Shape::circle("a_b", 50.0, 50.0, 10.0, c),
        Shape::circle("", 50.0, 50.0, 10.0, c),
        Shape::circle("a_b", 50.0, 50.0, 10.0, c),
    ];
    let doc = compile_scene(&s).unwrap();
    let keys: Vec<_> = doc.shapes.iter().map(|s| s.key.as_str()).collect();
    assert_eq!(keys, ["a_b", "a_b-1", "shape-2", "a_b-3"]);
}

#[test]
fn gradient_background_keeps_unknown_kind() {
    let mut s = SceneConfig::new(100, 100);
    s.base_color = BaseColor::Gradient(Gradient {
        kind: GradientKind::from("conic".to_owned()),
        color1: Color::parse("#000"),
        color2: Color::parse("#fff"),
        angle_degrees: None,
    });
    let doc = compile_scene(&s).unwrap();
    match doc.background {
        Background::Gradient {
            kind,
            angle_degrees,
            ..
        } => {
            assert_eq!(kind.as_str(), "conic");
            assert_eq!(angle_degrees, 0.0);
        }
        other => panic!("expected gradient, got {other:?}"),
    }
}

#[test]
fn noise_frequency_is_bounded() {
    assert!((noise_frequency(2.0) - 0.4).abs() < 1e-12);
    assert_eq!(noise_frequency(0.0), 4.0);
    assert_eq!(noise_frequency(-3.0), 4.0);
    assert!((noise_frequency(f64::NAN) - 0.8).abs() < 1e-12);
}

#[test]
fn sanitize_replaces_markup_characters() {
    assert_eq!(sanitize_id(r#"x"><script>"#), "x___script_");
    assert_eq!(sanitize_id("ok-id_9"), "ok-id_9");
}
