use crate::constants::{ORBIT_ANGULAR_SPEED, ORBIT_DEPTH, ORBIT_RADIUS_PER_PX};
use glam::Vec3;

/// Viewport size in logical (CSS) pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width.max(1) as f32 / self.height.max(1) as f32
    }
}

#[derive(Clone, Copy, Debug)]
pub struct OrbitParams {
    pub angular_speed: f32,
    pub radius_per_px: f32,
    pub depth: f32,
}

impl Default for OrbitParams {
    fn default() -> Self {
        Self {
            angular_speed: ORBIT_ANGULAR_SPEED,
            radius_per_px: ORBIT_RADIUS_PER_PX,
            depth: ORBIT_DEPTH,
        }
    }
}

/// Point light circling the scene as a pure function of elapsed time.
#[derive(Clone, Debug)]
pub struct OrbitLight {
    pub params: OrbitParams,
    pub color: [f32; 3],
    pub position: Vec3,
}

impl OrbitLight {
    pub fn new(params: OrbitParams, color: [f32; 3]) -> Self {
        Self {
            params,
            color,
            position: Vec3::new(0.0, 0.0, params.depth),
        }
    }

    /// Horizontal and vertical orbit radii for a viewport.
    pub fn radii(&self, viewport: Viewport) -> (f32, f32) {
        (
            viewport.width as f32 * self.params.radius_per_px,
            viewport.height as f32 * self.params.radius_per_px,
        )
    }

    /// Move the light to its orbit position at `elapsed_sec`.
    pub fn orbit(&mut self, elapsed_sec: f64, viewport: Viewport) {
        let (rx, ry) = self.radii(viewport);
        let angle = (elapsed_sec * self.params.angular_speed as f64) as f32;
        self.position = Vec3::new(angle.cos() * rx, angle.sin() * ry, self.params.depth);
    }
}
