//! Time-driven scene animation: an absolute-time keyframe mixer and a delta-time spin.

use glam::{EulerRot, Mat4, Vec3};
use std::f32::consts::TAU;

/// Playback handle the frame driver scrubs to wall-clock time.
pub trait AnimationMixer {
    /// Seek to an absolute time in seconds since scene start.
    fn set_time(&mut self, seconds: f64);
    /// Model-to-world transform of the animated object at the current time.
    fn model_transform(&self) -> Mat4;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopMode {
    #[default]
    Loop,
    /// Hold the last key once the clip ends.
    Clamp,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationKey {
    pub time: f32,
    pub rotation: Vec3,
}

/// Euler-rotation keyframes, sorted by time.
#[derive(Clone, Debug)]
pub struct RotationClip {
    pub name: String,
    keys: Vec<RotationKey>,
}

impl RotationClip {
    pub fn new(name: impl Into<String>, mut keys: Vec<RotationKey>) -> Self {
        keys.retain(|k| k.time.is_finite());
        keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self {
            name: name.into(),
            keys,
        }
    }

    pub fn duration(&self) -> f32 {
        self.keys.last().map(|k| k.time).unwrap_or(0.0)
    }

    pub fn keys(&self) -> &[RotationKey] {
        &self.keys
    }

    /// Linearly interpolated rotation at clip-local time `t`.
    pub fn sample(&self, t: f32) -> Vec3 {
        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(f), Some(l)) => (f, l),
            _ => return Vec3::ZERO,
        };
        if t <= first.time {
            return first.rotation;
        }
        if t >= last.time {
            return last.rotation;
        }
        let i = self.keys.partition_point(|k| k.time <= t);
        let a = &self.keys[i - 1];
        let b = &self.keys[i];
        let span = b.time - a.time;
        if span <= 0.0 {
            return b.rotation;
        }
        a.rotation.lerp(b.rotation, (t - a.time) / span)
    }
}

/// Plays one [`RotationClip`] on top of a fixed placement transform.
#[derive(Clone, Debug)]
pub struct ClipMixer {
    clip: RotationClip,
    loop_mode: LoopMode,
    placement: Mat4,
    local_time: f32,
    rotation: Vec3,
}

impl ClipMixer {
    pub fn new(clip: RotationClip, loop_mode: LoopMode, placement: Mat4) -> Self {
        let rotation = clip.sample(0.0);
        Self {
            clip,
            loop_mode,
            placement,
            local_time: 0.0,
            rotation,
        }
    }

    pub fn clip(&self) -> &RotationClip {
        &self.clip
    }

    pub fn local_time(&self) -> f32 {
        self.local_time
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }
}

impl AnimationMixer for ClipMixer {
    fn set_time(&mut self, seconds: f64) {
        let duration = self.clip.duration() as f64;
        let local = if duration <= 0.0 || !seconds.is_finite() {
            0.0
        } else {
            match self.loop_mode {
                LoopMode::Loop => seconds.rem_euclid(duration),
                LoopMode::Clamp => seconds.clamp(0.0, duration),
            }
        };
        self.local_time = local as f32;
        self.rotation = self.clip.sample(self.local_time);
    }

    fn model_transform(&self) -> Mat4 {
        self.placement
            * Mat4::from_euler(
                EulerRot::XYZ,
                self.rotation.x,
                self.rotation.y,
                self.rotation.z,
            )
    }
}

/// Rotation accumulated from frame deltas at a fixed rate on all three axes.
#[derive(Clone, Debug)]
pub struct Spin {
    pub rate: f32,
    pub rotation: Vec3,
    last_elapsed: Option<f64>,
}

impl Spin {
    pub fn new(rate: f32) -> Self {
        Self {
            rate,
            rotation: Vec3::ZERO,
            last_elapsed: None,
        }
    }

    /// Advance by the time since the previous call. The first call only records the time.
    pub fn advance(&mut self, elapsed_sec: f64) {
        let delta = match self.last_elapsed {
            Some(prev) => (elapsed_sec - prev).max(0.0) as f32,
            None => 0.0,
        };
        self.last_elapsed = Some(elapsed_sec);
        let step = delta * self.rate;
        let r = self.rotation + Vec3::splat(step);
        self.rotation = Vec3::new(r.x.rem_euclid(TAU), r.y.rem_euclid(TAU), r.z.rem_euclid(TAU));
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }
}
