//! Two-phase bounce animation, stepped once per frame.
//!
//! Each object rises (position and vertical scale) and then falls back with
//! a bounce. Instead of chaining completion callbacks, a [`BounceTween`]
//! keeps the phase explicitly and carries surplus time across phase
//! boundaries in a loop.

use crate::constants::*;
use crate::ease::Ease;
use crate::scene::{ObjectId, Ring, Scene};

/// Upper bound on phase transitions in one `advance`, so zero-length
/// phases cannot spin.
const MAX_PHASES_PER_ADVANCE: u32 = 64;

/// The animated part of an object's transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub y: f32,
    pub scale_y: f32,
}

impl Pose {
    pub const REST: Pose = Pose {
        y: 0.0,
        scale_y: REST_SCALE_Y,
    };

    #[inline]
    pub fn lerp(self, to: Pose, k: f32) -> Pose {
        Pose {
            y: self.y + (to.y - self.y) * k,
            scale_y: self.scale_y + (to.scale_y - self.scale_y) * k,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BounceSpec {
    pub rest: Pose,
    pub peak: Pose,
    pub rise_sec: f32,
    pub fall_sec: f32,
    pub rise_ease: Ease,
    pub fall_ease: Ease,
}

impl Default for BounceSpec {
    fn default() -> Self {
        Self {
            rest: Pose::REST,
            peak: Pose {
                y: BOUNCE_PEAK_Y,
                scale_y: BOUNCE_PEAK_SCALE_Y,
            },
            rise_sec: BOUNCE_RISE_SEC,
            fall_sec: BOUNCE_FALL_SEC,
            rise_ease: Ease::CubicInOut,
            fall_ease: Ease::BounceOut,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BouncePhase {
    Rising,
    Falling,
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    Forever,
    /// Stop at rest after this many rise+fall cycles.
    Times(u32),
}

#[derive(Clone, Debug)]
pub struct BounceTween {
    spec: BounceSpec,
    delay: f32,
    repeat: Repeat,
    phase: BouncePhase,
    // seconds into the current phase; for Rising this includes the delay
    local_time: f32,
    from: Pose,
    current: Pose,
    cycles_done: u32,
}

impl BounceTween {
    /// Start in `Rising`, waiting `delay` seconds before moving away from `start`.
    pub fn new(spec: BounceSpec, start: Pose, delay: f32, repeat: Repeat) -> Self {
        let phase = match repeat {
            Repeat::Times(0) => BouncePhase::Finished,
            _ => BouncePhase::Rising,
        };
        Self {
            spec,
            delay: delay.max(0.0),
            repeat,
            phase,
            local_time: 0.0,
            from: start,
            current: start,
            cycles_done: 0,
        }
    }

    pub fn phase(&self) -> BouncePhase {
        self.phase
    }

    pub fn pose(&self) -> Pose {
        self.current
    }

    pub fn delay(&self) -> f32 {
        self.delay
    }

    pub fn cycles_done(&self) -> u32 {
        self.cycles_done
    }

    pub fn is_finished(&self) -> bool {
        self.phase == BouncePhase::Finished
    }

    /// Seconds left before the current rise starts moving; zero once it has.
    pub fn time_until_rise(&self) -> f32 {
        match self.phase {
            BouncePhase::Rising => (self.delay - self.local_time).max(0.0),
            _ => 0.0,
        }
    }

    /// Advance by `dt` seconds and return the new pose.
    pub fn advance(&mut self, dt: f32) -> Pose {
        let mut remaining = dt.max(0.0);
        for _ in 0..MAX_PHASES_PER_ADVANCE {
            let (lead, duration, target, ease) = match self.phase {
                BouncePhase::Rising => (
                    self.delay,
                    self.spec.rise_sec,
                    self.spec.peak,
                    self.spec.rise_ease,
                ),
                BouncePhase::Falling => (0.0, self.spec.fall_sec, self.spec.rest, self.spec.fall_ease),
                BouncePhase::Finished => return self.current,
            };
            let left_in_phase = lead + duration - self.local_time;
            if remaining < left_in_phase {
                self.local_time += remaining;
                if self.local_time > lead {
                    let progress = (self.local_time - lead) / duration;
                    self.current = self.from.lerp(target, ease.apply(progress));
                }
                return self.current;
            }
            remaining -= left_in_phase.max(0.0);
            self.current = target;
            self.complete_phase();
        }
        log::warn!("[tween] phase limit reached; dropping surplus time");
        self.current
    }

    fn complete_phase(&mut self) {
        self.phase = match self.phase {
            BouncePhase::Rising => BouncePhase::Falling,
            BouncePhase::Falling => {
                self.cycles_done += 1;
                match self.repeat {
                    Repeat::Times(n) if self.cycles_done >= n => BouncePhase::Finished,
                    _ => BouncePhase::Rising,
                }
            }
            BouncePhase::Finished => BouncePhase::Finished,
        };
        self.local_time = 0.0;
        self.from = self.current;
    }
}

#[derive(Clone, Debug)]
struct Track {
    id: ObjectId,
    tween: BounceTween,
}

/// Drives one [`BounceTween`] per object and writes the poses back into
/// the scene. It is the only writer of object position.y and scale.y.
#[derive(Clone, Debug, Default)]
pub struct BounceAnimator {
    tracks: Vec<Track>,
}

impl BounceAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Animate every object of `ring` forever, object `i` delayed by `i * stagger` seconds.
    pub fn add_ring(&mut self, scene: &Scene, ring: &Ring, spec: BounceSpec, stagger: f32) {
        for (i, id) in ring.ids().enumerate() {
            let start = scene
                .object(id)
                .map(|o| Pose {
                    y: o.transform.position.y,
                    scale_y: o.transform.scale.y,
                })
                .unwrap_or(spec.rest);
            self.tracks.push(Track {
                id,
                tween: BounceTween::new(spec, start, i as f32 * stagger, Repeat::Forever),
            });
        }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn tween(&self, id: ObjectId) -> Option<&BounceTween> {
        self.tracks.iter().find(|t| t.id == id).map(|t| &t.tween)
    }

    pub fn step(&mut self, dt: f32, scene: &mut Scene) {
        for track in &mut self.tracks {
            let pose = track.tween.advance(dt);
            if let Some(object) = scene.object_mut(track.id) {
                object.transform.position.y = pose.y;
                object.transform.scale.y = pose.scale_y;
            }
        }
    }
}
