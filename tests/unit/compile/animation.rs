use super::*;

fn moving() -> AnimationIntent {
    AnimationIntent {
        enabled: true,
        speed: 1.0,
        flow: 1.0,
        pulse: 0.5,
        rotate: 0.5,
        ..AnimationIntent::default()
    }
}

#[test]
fn index_hashes_match_formula() {
    assert_eq!(
        IndexHash::of(0),
        IndexHash {
            h1: 0.0,
            h2: 0.0,
            h3: 0.0
        }
    );
    let h = IndexHash::of(3);
    assert_eq!(h.h1, 0.9);
    assert_eq!(h.h2, 0.7);
    assert_eq!(h.h3, 0.1);
    assert_eq!(IndexHash::of(13), IndexHash::of(3));
    assert_eq!(IndexHash::of(usize::MAX), IndexHash::of(usize::MAX % 10));
}

#[test]
fn disabled_or_still_intent_has_no_motion() {
    let anchor = Point::new(10.0, 10.0);
    assert!(motion_track(0, &AnimationIntent::default(), anchor, 100.0).is_none());
    let still = AnimationIntent {
        enabled: true,
        speed: 1.0,
        ..AnimationIntent::default()
    };
    assert!(motion_track(0, &still, anchor, 100.0).is_none());
}

#[test]
fn motion_timing_follows_index() {
    let anchor = Point::new(500.0, 300.0);
    let t0 = motion_track(0, &moving(), anchor, 1000.0).unwrap();
    assert_eq!(t0.duration_s, 15.0);
    assert_eq!(t0.begin_s, 0.0);

    let t1 = motion_track(1, &moving(), anchor, 1000.0).unwrap();
    // h2 = 0.9, h3 = 0.7
    assert!((t1.duration_s - 20.0 * 1.2).abs() < 1e-9);
    assert!((t1.begin_s + 0.7 * t1.duration_s).abs() < 1e-9);
}

#[test]
fn slow_speed_is_floored() {
    let anchor = Point::ORIGIN;
    let mut intent = moving();
    intent.speed = 0.0;
    let t = motion_track(0, &intent, anchor, 100.0).unwrap();
    assert_eq!(t.duration_s, 150.0);
    intent.speed = f64::NAN;
    assert_eq!(motion_track(0, &intent, anchor, 100.0).unwrap().duration_s, 150.0);
}

#[test]
fn keyframes_loop_and_scale_around_anchor() {
    let anchor = Point::new(200.0, 100.0);
    let t = motion_track(2, &moving(), anchor, 1000.0).unwrap();
    assert_eq!(t.keyframes[0], Keyframe::REST);
    assert_eq!(t.keyframes[3], Keyframe::REST);

    let k1 = t.keyframes[1];
    assert!((k1.offset.hypot() - 60.0).abs() < 1e-9);
    assert!((k1.scale - 1.06).abs() < 1e-12);
    assert_eq!(k1.rotate_deg, 10.0);

    // translate(t) . scale(s) maps the anchor to anchor + offset.
    let moved = k1.translate(anchor) + anchor.to_vec2() * k1.scale;
    assert!((moved - (anchor.to_vec2() + k1.offset)).hypot() < 1e-9);

    let k2 = t.keyframes[2];
    assert!((k2.offset.hypot() - 36.0).abs() < 1e-9);
    assert_eq!(k2.rotate_deg, -5.0);
}

#[test]
fn color_cycle_rotates_hue() {
    let c = Color::hsl(30.0, 50.0, 50.0);
    assert!(color_cycle(0, &moving(), c).is_none());
    let intent = AnimationIntent {
        color_cycle: true,
        color_cycle_speed: 2.0,
        ..AnimationIntent::default()
    };
    let cycle = color_cycle(0, &intent, c).unwrap();
    assert!((cycle.duration_s - 4.8).abs() < 1e-9);
    assert_eq!(cycle.begin_s, 0.0);
    assert_eq!(cycle.values[0], c);
    assert_eq!(cycle.values[3], c);
    assert_eq!(cycle.values[1].to_hsl().h, 150.0);
    assert_eq!(cycle.values[2].to_hsl().h, 270.0);
}

#[test]
fn shimmer_requires_positive_rate() {
    let mut intent = AnimationIntent::default();
    assert_eq!(noise_shimmer(&intent), None);
    intent.noise_anim = 4.0;
    assert_eq!(noise_shimmer(&intent), Some(0.25));
    intent.noise_anim = 1000.0;
    assert_eq!(noise_shimmer(&intent), Some(0.05));
}
