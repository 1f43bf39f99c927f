// Host-side tests for camera configuration, orbit and resize handling.

use glam::Vec3;
use instant::Instant;
use rings_core::*;
use std::f32::consts::FRAC_PI_2;
use std::time::Duration;

fn viewport(w: u32, h: u32, dpr: f64) -> Viewport {
    Viewport::new(w, h, dpr).expect("valid viewport")
}

#[test]
fn viewport_rejects_degenerate_input() {
    assert_eq!(
        Viewport::new(0, 600, 1.0),
        Err(SceneError::DegenerateViewport {
            width: 0,
            height: 600
        })
    );
    assert!(matches!(
        Viewport::new(800, 600, 0.0),
        Err(SceneError::InvalidPixelRatio(_))
    ));
    assert!(matches!(
        Viewport::new(800, 600, f64::NAN),
        Err(SceneError::InvalidPixelRatio(_))
    ));
}

#[test]
fn physical_size_scales_by_pixel_ratio() {
    let v = viewport(800, 600, 2.0);
    assert_eq!(
        v.physical_size(),
        SurfaceSize {
            width: 1600,
            height: 1200
        }
    );
    let v = viewport(333, 1, 1.5);
    assert_eq!(
        v.physical_size(),
        SurfaceSize {
            width: 500,
            height: 2
        }
    );
}

#[test]
fn camera_starts_behind_origin_looking_at_it() {
    let config = SceneConfig::new(viewport(1200, 600, 1.0));
    let cam_config = CameraConfig::from_scene(&config);
    assert!((cam_config.aspect - 2.0).abs() < 1e-6);
    assert_eq!(cam_config.target, Vec3::ZERO);
    let camera = Camera::from_config(&cam_config);
    assert_eq!(camera.eye, Vec3::new(0.0, config.camera_height, config.camera_distance));
    assert!((camera.fovy_radians - CAMERA_FOV_Y_DEGREES.to_radians()).abs() < 1e-6);
    // the origin projects to the centre of the screen
    let clip = camera.view_projection() * Vec3::ZERO.extend(1.0);
    assert!((clip.x / clip.w).abs() < 1e-5);
    assert!((clip.y / clip.w).abs() < 1e-5);
}

#[test]
fn camera_distance_is_derived_from_outer_ring() {
    let config = SceneConfig::new(viewport(800, 600, 1.0));
    assert!((config.camera_distance - outer_ring_radius() * CAMERA_DISTANCE_FACTOR).abs() < 1e-4);
    assert!(config.camera_distance > outer_ring_radius());
    assert_eq!(config.fog_density, FOG_DENSITY);
    assert_eq!(config.clear_color, CLEAR_COLOR);
}

#[test]
fn orbit_follows_sin_cos_of_elapsed_time() {
    let d = 360.0;
    let start = orbit_eye(d, 50.0, CAMERA_ORBIT_RATE, 0.0);
    assert_eq!(start, Vec3::new(0.0, 50.0, d));
    let t = FRAC_PI_2 / CAMERA_ORBIT_RATE;
    let quarter = orbit_eye(d, 50.0, CAMERA_ORBIT_RATE, t);
    assert!((quarter.x - d).abs() < 1e-3);
    assert!(quarter.z.abs() < 1e-3);
    assert_eq!(quarter.y, 50.0);
    for i in 0..50 {
        let e = orbit_eye(d, 50.0, CAMERA_ORBIT_RATE, i as f32 * 0.37);
        assert!(((e.x * e.x + e.z * e.z).sqrt() - d).abs() < 1e-2);
    }
}

#[test]
fn resize_is_idempotent() {
    let mut once = Stage::new(viewport(800, 600, 1.0));
    let mut twice = Stage::new(viewport(800, 600, 1.0));
    let target = viewport(1920, 1080, 1.25);
    let a = once.resize(target);
    let b1 = twice.resize(target);
    let b2 = twice.resize(target);
    assert_eq!(a, b1);
    assert_eq!(b1, b2);
    assert_eq!(once.camera().aspect, twice.camera().aspect);
    assert_eq!(
        once.camera().projection_matrix(),
        twice.camera().projection_matrix()
    );
    assert_eq!(once.config().viewport, twice.config().viewport);
    assert_eq!(
        a,
        SurfaceSize {
            width: 2400,
            height: 1350
        }
    );
}

#[test]
fn resize_updates_aspect_and_projection() {
    let mut stage = Stage::new(viewport(800, 800, 1.0));
    let before = stage.camera().projection_matrix();
    stage.resize(viewport(1600, 800, 1.0));
    assert!((stage.camera().aspect - 2.0).abs() < 1e-6);
    assert_ne!(stage.camera().projection_matrix(), before);
    let expected = glam::Mat4::perspective_rh(
        CAMERA_FOV_Y_DEGREES.to_radians(),
        2.0,
        CAMERA_NEAR,
        CAMERA_FAR,
    );
    assert_eq!(stage.camera().projection_matrix(), expected);
    assert_eq!(stage.config().viewport.width, 1600);
}

#[test]
fn resize_while_stopped_updates_projection_for_a_still_frame() {
    let mut stage = Stage::new(viewport(800, 800, 1.0));
    let t0 = Instant::now();
    stage.advance(t0);
    stage.advance(t0 + Duration::from_millis(700));
    stage.stop();
    let eye = stage.camera().eye;
    let time = stage.scene().time();

    let size = stage.resize(viewport(1200, 400, 2.0));
    assert!(!stage.is_running());
    assert_eq!(
        size,
        SurfaceSize {
            width: 2400,
            height: 800
        }
    );
    assert!((stage.camera().aspect - 3.0).abs() < 1e-6);
    let expected = glam::Mat4::perspective_rh(
        CAMERA_FOV_Y_DEGREES.to_radians(),
        3.0,
        CAMERA_NEAR,
        CAMERA_FAR,
    );
    assert_eq!(stage.camera().projection_matrix(), expected);
    // the still frame is redrawn from the paused pose
    assert_eq!(stage.camera().eye, eye);
    assert_eq!(stage.scene().time(), time);
    assert!(stage.advance(t0 + Duration::from_secs(2)).is_none());
}

#[test]
fn stage_orbits_camera_with_elapsed_time() {
    let mut stage = Stage::new(viewport(800, 600, 1.0));
    let d = stage.config().camera_distance;
    let h = stage.config().camera_height;
    let t0 = Instant::now();
    let first = stage.advance(t0).expect("running");
    assert_eq!(first.elapsed, 0.0);
    assert!(stage.camera().eye.x.abs() < 1e-4);
    assert!((stage.camera().eye.z - d).abs() < 1e-3);
    assert_eq!(stage.camera().eye.y, h);
    assert_eq!(stage.camera().target, Vec3::ZERO);

    let quarter = FRAC_PI_2 / CAMERA_ORBIT_RATE;
    let tick = stage
        .advance(t0 + Duration::from_secs_f32(quarter))
        .expect("running");
    assert!((tick.elapsed - quarter).abs() < 1e-3);
    assert!((stage.camera().eye.x - d).abs() < 0.1);
    assert!(stage.camera().eye.z.abs() < 0.5);
    assert_eq!(stage.scene().time(), tick.elapsed);
}
