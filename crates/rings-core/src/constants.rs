// Shared scene tuning constants used by both web and native frontends.

// Ring layout
pub const RING_BASE_RADIUS: f32 = 48.0; // radius of the innermost ring
pub const RING_COUNTS: [usize; 3] = [8, 16, 24]; // objects per ring, radius x1 / x2 / x3
pub const OBJECT_WIDTH: f32 = 12.0; // sphere radius of every ring object
pub const OBJECT_SEGMENTS: u32 = 32; // tessellation, both around and top-to-bottom
pub const REST_SCALE_Y: f32 = 1.1; // resting vertical stretch

// Ground
pub const GROUND_SIZE: f32 = 2000.0;
pub const GROUND_Y: f32 = -OBJECT_WIDTH * REST_SCALE_Y; // touches the bottom of resting objects

// Bounce
pub const BOUNCE_PEAK_Y: f32 = 140.0;
pub const BOUNCE_PEAK_SCALE_Y: f32 = 1.4;
pub const BOUNCE_RISE_SEC: f32 = 0.4;
pub const BOUNCE_FALL_SEC: f32 = 0.7;
pub const BOUNCE_STAGGER_SEC: f32 = 0.08; // per index within a ring
pub const MAX_TWEEN_STEP_SEC: f32 = 0.1; // frame gaps larger than this are clamped

// Camera
pub const CAMERA_FOV_Y_DEGREES: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 2000.0;
pub const CAMERA_DISTANCE_FACTOR: f32 = 2.5; // multiples of the outer ring radius
pub const CAMERA_HEIGHT_FACTOR: f32 = 0.5; // multiples of the camera distance
pub const CAMERA_ORBIT_RATE: f32 = 0.3; // radians per second of elapsed time

// Atmosphere
pub const CLEAR_COLOR: [f32; 3] = [0.07, 0.07, 0.11];
pub const FOG_DENSITY: f32 = 0.0018;

#[inline]
pub fn outer_ring_radius() -> f32 {
    RING_BASE_RADIUS * RING_COUNTS.len() as f32
}
