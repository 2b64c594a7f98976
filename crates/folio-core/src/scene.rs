//! Static layout of the portfolio scene and the post-load mesh configuration pass.

use crate::animation::{ClipMixer, LoopMode, RotationClip, RotationKey};
use crate::constants::{GROUND_COLOR, LIGHT_COLOR, MODEL_COLOR, SPHERE_COLOR};
use glam::{EulerRot, Mat4, Quat, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeshKind {
    Model,
    Sphere,
    Ground,
}

/// Position / Euler rotation / scale of a scene object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Placement {
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale,
            Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z),
            self.position,
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub position: Vec3,
    pub size: f32,
}

/// Everything the frontends place in the scene before the first frame.
#[derive(Clone, Debug)]
pub struct SceneLayout {
    pub model: Placement,
    pub sphere: Placement,
    pub sphere_radius: f32,
    pub sphere_segments: (u32, u32),
    pub label: TextLabel,
    pub light_color: [f32; 3],
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self {
            model: Placement {
                position: Vec3::new(10.0, -2.0, 0.0),
                rotation: Vec3::new(0.2, 2.2, 0.0),
                scale: Vec3::new(5.0, 4.0, 5.0),
            },
            sphere: Placement {
                position: Vec3::new(-6.0, -1.0, 4.0),
                rotation: Vec3::ZERO,
                scale: Vec3::splat(4.0),
            },
            sphere_radius: 0.8,
            sphere_segments: (20, 10),
            label: TextLabel {
                text: "Pedro Dutra".to_string(),
                position: Vec3::new(-40.0, 12.0, 0.0),
                size: 3.0,
            },
            light_color: LIGHT_COLOR,
        }
    }
}

impl SceneLayout {
    /// Idle sway of the model: a slow looping yaw around its placement.
    pub fn model_mixer(&self) -> ClipMixer {
        let key = |time: f32, yaw: f32| RotationKey {
            time,
            rotation: Vec3::new(0.0, yaw, 0.0),
        };
        let clip = RotationClip::new(
            "model_sway",
            vec![key(0.0, 0.0), key(4.0, 0.35), key(8.0, 0.0), key(12.0, -0.35), key(16.0, 0.0)],
        );
        ClipMixer::new(clip, LoopMode::Loop, self.model.matrix())
    }

    /// Mesh list as it comes out of scene construction, before [`configure_meshes`].
    pub fn meshes(&self) -> Vec<MeshDescriptor> {
        vec![
            MeshDescriptor::new("model", MeshKind::Model, MODEL_COLOR, self.model.matrix()),
            MeshDescriptor::new("sphere", MeshKind::Sphere, SPHERE_COLOR, self.sphere.matrix()),
            MeshDescriptor::new("ground", MeshKind::Ground, GROUND_COLOR, Mat4::IDENTITY),
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MeshDescriptor {
    pub name: String,
    pub kind: MeshKind,
    pub color: [f32; 3],
    pub transform: Mat4,
    pub visible: bool,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl MeshDescriptor {
    pub fn new(name: &str, kind: MeshKind, color: [f32; 3], transform: Mat4) -> Self {
        Self {
            name: name.to_string(),
            kind,
            color,
            transform,
            visible: true,
            cast_shadow: false,
            receive_shadow: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ShadowSettings {
    pub cast: Vec<MeshKind>,
    pub receive: Vec<MeshKind>,
}

impl Default for ShadowSettings {
    fn default() -> Self {
        Self {
            cast: vec![MeshKind::Model, MeshKind::Sphere],
            receive: vec![MeshKind::Ground],
        }
    }
}

/// Set shadow flags on freshly built meshes. Returns the number of shadow casters.
pub fn configure_meshes(meshes: &mut [MeshDescriptor], settings: &ShadowSettings) -> usize {
    let mut casters = 0;
    for mesh in meshes.iter_mut() {
        mesh.cast_shadow = settings.cast.contains(&mesh.kind);
        mesh.receive_shadow = settings.receive.contains(&mesh.kind);
        if mesh.cast_shadow {
            casters += 1;
        }
    }
    log::info!(
        "[scene] configured {} meshes ({} shadow casters)",
        meshes.len(),
        casters
    );
    casters
}

/// True when at least one mesh receives shadows, i.e. the ground should be drawn.
pub fn has_shadow_receiver(meshes: &[MeshDescriptor]) -> bool {
    meshes.iter().any(|m| m.visible && m.receive_shadow)
}
