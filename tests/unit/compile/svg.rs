use super::*;
use crate::{
    color::space::Color,
    compile::compiler::compile_scene,
    foundation::core::{Canvas, Point},
    scene::model::{AnimationIntent, BaseColor, Gradient, SceneConfig, Shape},
};

fn still_doc() -> RenderDocument {
    RenderDocument {
        canvas: Canvas {
            width: 200,
            height: 100,
        },
        background: Background::Solid(Color::parse("#112233")),
        shapes: vec![RenderShape {
            key: "dot".to_owned(),
            geometry: ShapeGeometry::Circle {
                center: Point::new(50.0, 25.5),
                radius: 10.0,
            },
            fill: Color::parse("#ff0000"),
            opacity: 0.5,
            blur: None,
            blend: BlendMode::Normal,
            motion: None,
            color_cycle: None,
        }],
        noise: NoiseOverlay {
            base_frequency: 0.8,
            octaves: 3,
            opacity: 0.15,
            shimmer_s: None,
        },
    }
}

#[test]
fn still_document_markup() {
    let svg = still_doc().to_svg();
    assert!(svg.starts_with(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="100" viewBox="0 0 200 100">"#
    ));
    assert!(svg.contains(r##"<rect width="100%" height="100%" fill="#112233"/>"##));
    assert!(svg.contains(
        r##"<circle cx="50" cy="25.5" r="10" id="dot" fill="#ff0000" opacity="0.5"></circle>"##
    ));
    assert!(svg.contains(r#"baseFrequency="0.8" numOctaves="3""#));
    assert!(svg.contains(r#"opacity="0.15" style="mix-blend-mode: overlay"/>"#));
    assert!(!svg.contains("<animate"));
    assert!(!svg.contains("Gradient"));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn grain_overlay_is_painted_last() {
    let svg = still_doc().to_svg();
    let shapes = svg.find("<circle").unwrap();
    let grain = svg.find(r#"filter="url(#grain)""#).unwrap();
    assert!(grain > shapes);
}

#[test]
fn blur_filter_and_blend_style() {
    let mut doc = still_doc();
    doc.shapes[0].blur = Some(12.5);
    doc.shapes[0].blend = BlendMode::from(r#"odd"mode"#.to_owned());
    let svg = doc.to_svg();
    assert!(svg.contains(r#"<filter id="blur-dot""#));
    assert!(svg.contains(r#"<feGaussianBlur stdDeviation="12.5"/>"#));
    assert!(svg.contains(r#"filter="url(#blur-dot)""#));
    assert!(svg.contains(r#"style="mix-blend-mode: odd&quot;mode""#));
}

#[test]
fn gradient_backgrounds() {
    let mut doc = still_doc();
    doc.background = Background::Gradient {
        kind: GradientKind::Linear,
        from: Color::parse("#000000"),
        to: Color::parse("#ffffff"),
        angle_degrees: 0.0,
    };
    let svg = doc.to_svg();
    assert!(svg.contains(r#"<linearGradient id="bg-fill" x1="0" y1="0.5" x2="1" y2="0.5">"#));
    assert!(svg.contains(r##"<stop offset="1" stop-color="#ffffff"/>"##));
    assert!(svg.contains(r#"fill="url(#bg-fill)""#));

    doc.background = Background::Gradient {
        kind: GradientKind::Radial,
        from: Color::parse("#000000"),
        to: Color::parse("#ffffff"),
        angle_degrees: 0.0,
    };
    assert!(doc.to_svg().contains("<radialGradient id=\"bg-fill\""));
}

#[test]
fn unknown_gradient_kind_stays_well_formed() {
    for name in ["conic", "3d", "-x", ".dot", r#"a"<b>"#] {
        let mut doc = still_doc();
        doc.background = Background::Gradient {
            kind: GradientKind::from(name.to_owned()),
            from: Color::parse("#000000"),
            to: Color::parse("#ffffff"),
            angle_degrees: 0.0,
        };
        let svg = doc.to_svg();
        assert!(svg.contains(r#"<linearGradient id="bg-fill" data-kind=""#), "{name}");
        assert!(svg.contains(&format!(r#"data-kind="{}""#, escape_attr(name))));
        assert!(
            usvg::Tree::from_str(&svg, &usvg::Options::default()).is_ok(),
            "kind {name:?} produced unparseable markup"
        );
    }
}

#[test]
fn animated_scene_emits_smil() {
    let mut scene = SceneConfig::new(400, 400);
    scene.base_color = BaseColor::Gradient(Gradient {
        kind: GradientKind::Linear,
        color1: Color::parse("#202040"),
        color2: Color::parse("#402020"),
        angle_degrees: Some(90.0),
    });
    scene.shapes = vec![
        Shape::blob("b1", 5, 50.0, 50.0, 40.0, Color::parse("#3366cc")).with_blur(8.0),
    ];
    scene.animation = AnimationIntent {
        enabled: true,
        speed: 1.0,
        flow: 0.5,
        pulse: 0.5,
        rotate: 0.5,
        noise_anim: 4.0,
        color_cycle: true,
        color_cycle_speed: 1.0,
    };
    let svg = compile_scene(&scene).unwrap().to_svg();

    assert!(svg.contains(r#"<path d="M"#));
    for kind in ["translate", "scale", "rotate"] {
        assert!(svg.contains(&format!(r#"type="{kind}""#)), "missing {kind}");
    }
    assert_eq!(svg.matches(r#"additive="sum""#).count(), 3);
    assert!(svg.contains(r#"values="1;1.06;0.97;1""#));
    assert!(svg.contains(r#"values="0 200 200;10 200 200;-5 200 200;0 200 200""#));
    assert!(svg.contains(r#"dur="15s" begin="0s""#));
    assert!(svg.contains(r#"attributeName="fill""#));
    assert!(svg.contains(r#"attributeName="seed""#));
    assert!(svg.contains(r#"dur="0.25s" calcMode="discrete""#));
    assert!(svg.contains(r#"x1="0.5" y1="0" x2="0.5" y2="1""#));
}

#[test]
fn escapes_attribute_text() {
    assert_eq!(escape_attr(r#"a&b<c>"d'"#), "a&amp;b&lt;c&gt;&quot;d&apos;");
}
