// Host-side tests for easing curves and the two-phase bounce tween.

use rings_core::*;

const STEP: f32 = 1.0 / 64.0;

fn run(tween: &mut BounceTween, seconds: f32) {
    let steps = (seconds / STEP).round() as u32;
    for _ in 0..steps {
        tween.advance(STEP);
    }
}

#[test]
fn easing_endpoints_are_exact() {
    for ease in [Ease::Linear, Ease::CubicInOut, Ease::BounceOut] {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
        assert_eq!(ease.apply(-3.0), 0.0);
        assert_eq!(ease.apply(4.0), 1.0);
    }
}

#[test]
fn cubic_in_out_is_symmetric_and_monotonic() {
    assert!((Ease::CubicInOut.apply(0.5) - 0.5).abs() < 1e-6);
    let mut prev = 0.0;
    for i in 1..=100 {
        let t = i as f32 / 100.0;
        let v = Ease::CubicInOut.apply(t);
        assert!(v >= prev, "not monotonic at {t}");
        assert!((v + Ease::CubicInOut.apply(1.0 - t) - 1.0).abs() < 1e-5);
        prev = v;
    }
    // slow start, slow finish
    assert!(Ease::CubicInOut.apply(0.1) < 0.1);
    assert!(Ease::CubicInOut.apply(0.9) > 0.9);
}

#[test]
fn bounce_out_stays_in_unit_range_and_rebounds() {
    let samples: Vec<f32> = (0..=200).map(|i| Ease::BounceOut.apply(i as f32 / 200.0)).collect();
    assert!(samples.iter().all(|v| (0.0..=1.0 + 1e-5).contains(v)));
    // first contact with the ground, then back up
    let first_touch = Ease::BounceOut.apply(1.0 / 2.75);
    assert!((first_touch - 1.0).abs() < 1e-4);
    assert!(Ease::BounceOut.apply(1.5 / 2.75) < 0.8);
}

#[test]
fn one_cycle_returns_exactly_to_rest() {
    for &delay in &[0.0_f32, 0.08, 0.5, 1.84] {
        let mut tween = BounceTween::new(BounceSpec::default(), Pose::REST, delay, Repeat::Times(1));
        run(&mut tween, delay + BOUNCE_RISE_SEC + BOUNCE_FALL_SEC + 0.25);
        assert!(tween.is_finished(), "delay {delay}");
        assert_eq!(tween.pose(), Pose::REST);
        assert_eq!(tween.cycles_done(), 1);
    }
}

#[test]
fn forever_tween_reenters_rising_at_rest() {
    let mut tween = BounceTween::new(BounceSpec::default(), Pose::REST, 0.0, Repeat::Forever);
    tween.advance(BOUNCE_RISE_SEC);
    assert_eq!(tween.phase(), BouncePhase::Falling);
    assert_eq!(tween.pose().y, BOUNCE_PEAK_Y);
    assert_eq!(tween.pose().scale_y, BOUNCE_PEAK_SCALE_Y);
    tween.advance(BOUNCE_FALL_SEC);
    assert_eq!(tween.phase(), BouncePhase::Rising);
    assert_eq!(tween.pose(), Pose::REST);
    assert_eq!(tween.cycles_done(), 1);
    for _ in 0..5 {
        tween.advance(BOUNCE_RISE_SEC);
        tween.advance(BOUNCE_FALL_SEC);
    }
    assert_eq!(tween.cycles_done(), 6);
    assert!(!tween.is_finished());
}

#[test]
fn large_step_carries_across_phase_boundaries() {
    let mut tween = BounceTween::new(BounceSpec::default(), Pose::REST, 0.0, Repeat::Forever);
    // full cycle plus half of the next rise, in one call
    let pose = tween.advance(BOUNCE_RISE_SEC + BOUNCE_FALL_SEC + BOUNCE_RISE_SEC / 2.0);
    assert_eq!(tween.cycles_done(), 1);
    assert_eq!(tween.phase(), BouncePhase::Rising);
    let halfway = Pose::REST.lerp(
        Pose {
            y: BOUNCE_PEAK_Y,
            scale_y: BOUNCE_PEAK_SCALE_Y,
        },
        0.5,
    );
    assert!((pose.y - halfway.y).abs() < 1e-2);
    assert!((pose.scale_y - halfway.scale_y).abs() < 1e-4);
}

#[test]
fn rise_waits_for_its_delay() {
    let delay = 3.0 * BOUNCE_STAGGER_SEC;
    let mut tween = BounceTween::new(BounceSpec::default(), Pose::REST, delay, Repeat::Forever);
    assert!((tween.time_until_rise() - delay).abs() < 1e-6);
    tween.advance(delay - 0.001);
    assert_eq!(tween.pose(), Pose::REST);
    assert!(tween.time_until_rise() > 0.0);
    tween.advance(0.05);
    assert_eq!(tween.time_until_rise(), 0.0);
    assert!(tween.pose().y > 0.0);
    assert!(tween.pose().scale_y > REST_SCALE_Y);
}

#[test]
fn fall_has_no_delay() {
    let mut tween = BounceTween::new(BounceSpec::default(), Pose::REST, 0.3, Repeat::Forever);
    tween.advance(0.3 + BOUNCE_RISE_SEC);
    assert_eq!(tween.phase(), BouncePhase::Falling);
    tween.advance(0.01);
    assert!(tween.pose().y < BOUNCE_PEAK_Y);
}

#[test]
fn rise_is_bounded_by_peak() {
    let mut tween = BounceTween::new(BounceSpec::default(), Pose::REST, 0.0, Repeat::Forever);
    for _ in 0..200 {
        let p = tween.advance(STEP);
        assert!(p.y >= -1e-3 && p.y <= BOUNCE_PEAK_Y + 1e-3);
        assert!(p.scale_y >= REST_SCALE_Y - 1e-4 && p.scale_y <= BOUNCE_PEAK_SCALE_Y + 1e-4);
    }
}

#[test]
fn zero_repeats_never_moves() {
    let mut tween = BounceTween::new(BounceSpec::default(), Pose::REST, 0.0, Repeat::Times(0));
    assert!(tween.is_finished());
    assert_eq!(tween.advance(10.0), Pose::REST);
}

#[test]
fn animator_staggers_by_index_within_ring() {
    let mut scene = Scene::new(CLEAR_COLOR, FOG_DENSITY);
    let inner = scene.add_ring(48.0, 8);
    let outer = scene.add_ring(96.0, 16);
    let mut animator = BounceAnimator::new();
    animator.add_ring(&scene, &inner, BounceSpec::default(), BOUNCE_STAGGER_SEC);
    animator.add_ring(&scene, &outer, BounceSpec::default(), BOUNCE_STAGGER_SEC);
    assert_eq!(animator.len(), 24);
    for ring in [&inner, &outer] {
        for (i, id) in ring.ids().enumerate() {
            let tween = animator.tween(id).expect("tween");
            assert!((tween.delay() - i as f32 * BOUNCE_STAGGER_SEC).abs() < 1e-6);
            assert_eq!(tween.phase(), BouncePhase::Rising);
        }
    }

    // just past object 2's start: objects 0..=2 moved, 3.. still resting
    animator.step(2.0 * BOUNCE_STAGGER_SEC + 0.001, &mut scene);
    for (i, id) in inner.ids().enumerate() {
        let y = scene.object(id).expect("object").transform.position.y;
        if i <= 2 {
            assert!(y > 0.0, "object {i} should be rising");
        } else {
            assert_eq!(y, 0.0, "object {i} should still rest");
        }
    }
}

#[test]
fn animator_writes_pose_into_scene() {
    let mut scene = Scene::new(CLEAR_COLOR, FOG_DENSITY);
    let ring = scene.add_ring(48.0, 1);
    let mut animator = BounceAnimator::new();
    animator.add_ring(&scene, &ring, BounceSpec::default(), BOUNCE_STAGGER_SEC);
    let id = ObjectId(0);
    let x_before = scene.object(id).expect("object").transform.position.x;
    animator.step(BOUNCE_RISE_SEC, &mut scene);
    let t = scene.object(id).expect("object").transform;
    assert_eq!(t.position.y, BOUNCE_PEAK_Y);
    assert_eq!(t.scale.y, BOUNCE_PEAK_SCALE_Y);
    assert_eq!(t.position.x, x_before);
    assert_eq!(t.scale.x, 1.0);
}
