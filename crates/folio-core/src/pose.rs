//! Camera poses and the clamped interpolation between them.
//!
//! A [`Pose`] is seven independent scalars (position xyz, Euler rotation xyz, zoom).
//! [`lerp_clamped`] interpolates each of them on its own and clamps the result into the
//! closed interval spanned by the two endpoints of that field, so a pose produced from two
//! in-range endpoints is always in range, whatever `t` the caller passes.

use glam::Vec3;

/// Camera position, Euler rotation (XYZ order, radians) and zoom factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Vec3,
    pub zoom: f32,
}

/// Pose the page opens with: looking straight down -Z from in front of the label.
pub const INITIAL_POSE: Pose = Pose {
    position: Vec3::new(0.0, 0.0, 30.0),
    rotation: Vec3::new(0.0, 0.0, 0.0),
    zoom: 1.0,
};

/// Pose reached after a full scroll: close on the model, turned towards it.
pub const FINAL_POSE: Pose = Pose {
    position: Vec3::new(6.0, -1.0, 12.0),
    rotation: Vec3::new(-0.12, 0.45, 0.0),
    zoom: 19.0,
};

impl Pose {
    pub const fn new(position: Vec3, rotation: Vec3, zoom: f32) -> Self {
        Self {
            position,
            rotation,
            zoom,
        }
    }

    /// The seven scalar fields in a fixed order (position, rotation, zoom).
    #[inline]
    pub fn to_fields(&self) -> [f32; 7] {
        [
            self.position.x,
            self.position.y,
            self.position.z,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
            self.zoom,
        ]
    }

    #[inline]
    pub fn from_fields(f: [f32; 7]) -> Self {
        Self {
            position: Vec3::new(f[0], f[1], f[2]),
            rotation: Vec3::new(f[3], f[4], f[5]),
            zoom: f[6],
        }
    }

    /// Euclidean distance over all seven fields.
    pub fn distance(&self, other: &Pose) -> f32 {
        self.to_fields()
            .iter()
            .zip(other.to_fields().iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f32>()
            .sqrt()
    }

    /// True when every field lies between the matching fields of `a` and `b`, inclusive.
    pub fn is_between(&self, a: &Pose, b: &Pose) -> bool {
        let (v, a, b) = (self.to_fields(), a.to_fields(), b.to_fields());
        (0..7).all(|i| v[i] >= a[i].min(b[i]) && v[i] <= a[i].max(b[i]))
    }
}

impl Default for Pose {
    fn default() -> Self {
        INITIAL_POSE
    }
}

/// Linear interpolation of one field, clamped into `[min(a, b), max(a, b)]`.
///
/// A NaN `t` counts as 0. Equal endpoints short-circuit so that an infinite `t` can't
/// produce `0 * inf`.
#[inline]
pub fn lerp_field(a: f32, b: f32, t: f32) -> f32 {
    if a == b {
        return a;
    }
    let t = if t.is_nan() { 0.0 } else { t };
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    (a + (b - a) * t).clamp(lo, hi)
}

/// Interpolate every field of `from` towards `to` by `t`, clamping per field.
pub fn lerp_clamped(from: &Pose, to: &Pose, t: f32) -> Pose {
    let a = from.to_fields();
    let b = to.to_fields();
    let mut out = [0.0_f32; 7];
    for i in 0..7 {
        out[i] = lerp_field(a[i], b[i], t);
    }
    Pose::from_fields(out)
}
