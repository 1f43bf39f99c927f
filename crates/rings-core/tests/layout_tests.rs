// Host-side tests for ring placement and scene accumulation.

use rings_core::*;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

const EPS: f32 = 1e-4;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

#[test]
fn ring_positions_lie_on_circle_evenly_spaced() {
    for &(radius, count) in &[(48.0_f32, 8_usize), (96.0, 16), (144.0, 24), (10.0, 3)] {
        let placements: Vec<_> = ring_placements(radius, count).collect();
        assert_eq!(placements.len(), count);
        for (i, p) in placements.iter().enumerate() {
            assert_eq!(p.index, i);
            assert!(close(p.position.y, 0.0));
            let r = (p.position.x * p.position.x + p.position.z * p.position.z).sqrt();
            assert!((r - radius).abs() < radius * 1e-5, "radius drift at {i}: {r}");
            assert!(close(p.angle, TAU * i as f32 / count as f32));
        }
        // consecutive neighbours are separated by the same chord
        let step = TAU / count as f32;
        let chord = 2.0 * radius * (step / 2.0).sin();
        for i in 0..count {
            let a = placements[i].position;
            let b = placements[(i + 1) % count].position;
            assert!((a.distance(b) - chord).abs() < radius * 1e-4);
        }
    }
}

#[test]
fn single_object_ring_sits_on_positive_x() {
    let p: Vec<_> = ring_placements(30.0, 1).collect();
    assert_eq!(p.len(), 1);
    assert!(close(p[0].position.x, 30.0));
    assert!(close(p[0].position.y, 0.0));
    assert!(close(p[0].position.z, 0.0));
}

#[test]
fn empty_ring_is_valid() {
    assert_eq!(ring_placements(48.0, 0).count(), 0);
    let mut scene = Scene::new(CLEAR_COLOR, FOG_DENSITY);
    let ring = scene.add_ring(48.0, 0);
    assert!(ring.is_empty());
    assert!(scene.objects().is_empty());
    assert_eq!(scene.rings().len(), 1);
}

#[test]
fn yaw_faces_along_ring() {
    for p in ring_placements(72.0, 12) {
        let expected = FRAC_PI_2 - p.position.z.atan2(p.position.x);
        assert!(close(p.yaw, expected));
        assert!(close(facing_yaw(p.position), p.yaw));
    }
}

#[test]
fn ring_of_eight_at_radius_48() {
    let placements: Vec<_> = ring_placements(48.0, 8).collect();
    let degrees: Vec<f32> = placements.iter().map(|p| p.angle.to_degrees()).collect();
    for (i, d) in degrees.iter().enumerate() {
        assert!((d - 45.0 * i as f32).abs() < 1e-3, "angle {i} = {d}");
    }
    let first = placements[0];
    assert!(close(first.position.x, 48.0));
    assert!(close(first.position.z, 0.0));
    assert!(close(first.yaw, FRAC_PI_2));
    // a quarter of the way round faces back towards the start
    let quarter = placements[2];
    assert!(close(quarter.position.z, 48.0));
    assert!(close(quarter.yaw, 0.0));
    let three_quarters = placements[6];
    assert!(close(three_quarters.position.z, -48.0));
    assert!(close(three_quarters.yaw, PI));
}

#[test]
fn add_ring_uses_fixed_object_width_and_rest_scale() {
    let mut scene = Scene::new(CLEAR_COLOR, FOG_DENSITY);
    let ring = scene.add_ring(96.0, 16);
    assert_eq!(ring.len(), 16);
    assert_eq!(ring.radius, 96.0);
    for id in ring.ids() {
        let object = scene.object(id).expect("object");
        assert_eq!(object.geometry.radius, OBJECT_WIDTH);
        assert_eq!(object.transform.scale.y, REST_SCALE_Y);
        assert_eq!(object.transform.scale.x, 1.0);
        assert_eq!(object.transform.scale.z, 1.0);
        let p = object.transform.position;
        assert!(((p.x * p.x + p.z * p.z).sqrt() - 96.0).abs() < 1e-3);
    }
}

#[test]
fn rings_accumulate_in_one_scene() {
    let mut scene = Scene::new(CLEAR_COLOR, FOG_DENSITY);
    let a = scene.add_ring(48.0, 8);
    let b = scene.add_ring(96.0, 16);
    let c = scene.add_ring(144.0, 24);
    scene.add_ground();
    assert_eq!(scene.objects().len(), 48);
    assert_eq!(scene.rings().len(), 3);
    let ids: Vec<_> = a.ids().chain(b.ids()).chain(c.ids()).collect();
    assert_eq!(ids.len(), 48);
    assert_eq!(ids.first(), Some(&ObjectId(0)));
    assert_eq!(ids.last(), Some(&ObjectId(47)));
    assert_eq!(b.ids().next(), Some(ObjectId(8)));
    let ground = scene.ground().expect("ground");
    assert_eq!(ground.transform.position.y, GROUND_Y);
}
