//! Render camera shared by the web and native frontends.
//!
//! The camera keeps a cached projection matrix. Changing the pose, the aspect or the zoom
//! does not touch that cache; callers must follow up with
//! [`CameraRig::refresh_projection`], like a scene-graph camera's `updateProjectionMatrix`.

use crate::constants::{CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR};
use crate::pose::Pose;
use glam::{EulerRot, Mat4, Quat, Vec3, Vec4};

/// What the choreographer needs from a camera.
pub trait CameraRig {
    /// Copy position, rotation and zoom from `pose`.
    fn apply_pose(&mut self, pose: &Pose);
    /// Rebuild the projection from the current lens parameters.
    fn refresh_projection(&mut self);
}

/// Right-handed perspective camera posed by position + Euler rotation.
#[derive(Clone, Debug)]
pub struct SceneCamera {
    pub position: Vec3,
    pub rotation: Vec3,
    pub zoom: f32,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
    projection: Mat4,
}

impl SceneCamera {
    pub fn new(pose: &Pose, aspect: f32) -> Self {
        let mut cam = Self {
            position: pose.position,
            rotation: pose.rotation,
            zoom: pose.zoom,
            aspect: aspect.max(1e-3),
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
            projection: Mat4::IDENTITY,
        };
        cam.refresh_projection();
        cam
    }

    /// Update the aspect ratio after a resize. Needs a projection refresh.
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    /// Vertical field of view after zoom: `2 * atan(tan(fov / 2) / zoom)`.
    pub fn effective_fovy(&self) -> f32 {
        let zoom = if self.zoom > 0.0 { self.zoom } else { 1.0 };
        2.0 * ((self.fovy_radians * 0.5).tan() / zoom).atan()
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation(), self.position).inverse()
    }

    /// The projection as of the last refresh.
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection * self.view_matrix()
    }

    /// Project a world point to normalized `[0, 1]` screen coordinates (y down).
    /// Returns `None` for points behind the camera.
    pub fn project_to_screen(&self, world: Vec3) -> Option<[f32; 2]> {
        let clip = self.view_proj() * Vec4::from((world, 1.0));
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some([(ndc.x + 1.0) * 0.5, (1.0 - ndc.y) * 0.5])
    }
}

impl CameraRig for SceneCamera {
    fn apply_pose(&mut self, pose: &Pose) {
        self.position = pose.position;
        self.rotation = pose.rotation;
        self.zoom = pose.zoom;
    }

    fn refresh_projection(&mut self) {
        self.projection =
            Mat4::perspective_rh(self.effective_fovy(), self.aspect, self.znear, self.zfar);
    }
}
