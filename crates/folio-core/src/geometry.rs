//! Line-list geometry for the wireframe renderer.
//!
//! Shapes are kept as object-space segments; [`build_frame_vertices`] transforms them into
//! world space each frame, adds planar shadows for casters and a marker for the light.

use crate::constants::{GROUND_Y, SHADOW_DIM};
use crate::driver::FrameView;
use crate::scene::{has_shadow_receiver, MeshKind, SceneLayout};
use glam::{Mat4, Vec3};
use std::f32::consts::{PI, TAU};

pub type Segment = [Vec3; 2];

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// Axis-aligned unit cube centred on the origin.
pub fn wire_box() -> Vec<Segment> {
    let c = |x: f32, y: f32, z: f32| Vec3::new(x, y, z) * 0.5;
    let corners = [
        c(-1.0, -1.0, -1.0),
        c(1.0, -1.0, -1.0),
        c(1.0, 1.0, -1.0),
        c(-1.0, 1.0, -1.0),
        c(-1.0, -1.0, 1.0),
        c(1.0, -1.0, 1.0),
        c(1.0, 1.0, 1.0),
        c(-1.0, 1.0, 1.0),
    ];
    const EDGES: [(usize, usize); 12] = [
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 0),
        (4, 5),
        (5, 6),
        (6, 7),
        (7, 4),
        (0, 4),
        (1, 5),
        (2, 6),
        (3, 7),
    ];
    EDGES.iter().map(|&(a, b)| [corners[a], corners[b]]).collect()
}

/// UV sphere wireframe: `height_segments - 1` latitude rings and `width_segments` meridians.
pub fn wire_sphere(radius: f32, width_segments: u32, height_segments: u32) -> Vec<Segment> {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let point = |u: u32, v: u32| {
        let phi = u as f32 / ws as f32 * TAU;
        let theta = v as f32 / hs as f32 * PI;
        Vec3::new(
            -radius * phi.cos() * theta.sin(),
            radius * theta.cos(),
            radius * phi.sin() * theta.sin(),
        )
    };
    let mut out = Vec::with_capacity((ws * (hs - 1) + ws * hs) as usize);
    for v in 1..hs {
        for u in 0..ws {
            out.push([point(u, v), point(u + 1, v)]);
        }
    }
    for u in 0..ws {
        for v in 0..hs {
            out.push([point(u, v), point(u, v + 1)]);
        }
    }
    out
}

/// Square grid on the plane `y = 0`, `divisions` cells per side.
pub fn ground_grid(half_extent: f32, divisions: u32) -> Vec<Segment> {
    let n = divisions.max(1);
    let step = 2.0 * half_extent / n as f32;
    let mut out = Vec::with_capacity(2 * (n as usize + 1));
    for i in 0..=n {
        let k = -half_extent + i as f32 * step;
        out.push([Vec3::new(k, 0.0, -half_extent), Vec3::new(k, 0.0, half_extent)]);
        out.push([Vec3::new(-half_extent, 0.0, k), Vec3::new(half_extent, 0.0, k)]);
    }
    out
}

/// Three short axis-aligned strokes crossing at the origin.
pub fn light_marker(size: f32) -> Vec<Segment> {
    let h = size * 0.5;
    vec![
        [Vec3::new(-h, 0.0, 0.0), Vec3::new(h, 0.0, 0.0)],
        [Vec3::new(0.0, -h, 0.0), Vec3::new(0.0, h, 0.0)],
        [Vec3::new(0.0, 0.0, -h), Vec3::new(0.0, 0.0, h)],
    ]
}

/// Flattens world geometry onto the ground plane.
pub fn planar_shadow_matrix() -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, GROUND_Y + 0.01, 0.0))
        * Mat4::from_scale(Vec3::new(1.0, 0.0, 1.0))
}

/// Object-space shapes for each mesh kind, built once from the layout.
#[derive(Clone, Debug)]
pub struct MeshShapes {
    pub model: Vec<Segment>,
    pub sphere: Vec<Segment>,
    pub ground: Vec<Segment>,
    pub marker: Vec<Segment>,
}

impl MeshShapes {
    pub fn from_layout(layout: &SceneLayout) -> Self {
        let (ws, hs) = layout.sphere_segments;
        Self {
            model: wire_box(),
            sphere: wire_sphere(layout.sphere_radius, ws, hs),
            ground: ground_grid(40.0, 20)
                .into_iter()
                .map(|[a, b]| [a + Vec3::Y * GROUND_Y, b + Vec3::Y * GROUND_Y])
                .collect(),
            marker: light_marker(1.5),
        }
    }

    pub fn for_kind(&self, kind: MeshKind) -> &[Segment] {
        match kind {
            MeshKind::Model => &self.model,
            MeshKind::Sphere => &self.sphere,
            MeshKind::Ground => &self.ground,
        }
    }
}

fn push_segments(out: &mut Vec<LineVertex>, segments: &[Segment], m: Mat4, color: [f32; 3]) {
    for [a, b] in segments {
        out.push(LineVertex {
            position: m.transform_point3(*a).to_array(),
            color,
        });
        out.push(LineVertex {
            position: m.transform_point3(*b).to_array(),
            color,
        });
    }
}

/// World-space line list for one frame.
///
/// The ground is only drawn when some mesh receives shadows; casters are drawn a second
/// time squashed onto it, dimmed.
pub fn build_frame_vertices(frame: &FrameView<'_>, shapes: &MeshShapes) -> Vec<LineVertex> {
    let mut out = Vec::new();
    let ground_visible = has_shadow_receiver(frame.meshes);
    let shadow = planar_shadow_matrix();

    for mesh in frame.meshes.iter().filter(|m| m.visible) {
        if mesh.kind == MeshKind::Ground && !ground_visible {
            continue;
        }
        let segments = shapes.for_kind(mesh.kind);
        push_segments(&mut out, segments, mesh.transform, mesh.color);
        if mesh.cast_shadow && ground_visible {
            let dim = mesh.color.map(|c| c * SHADOW_DIM);
            push_segments(&mut out, segments, shadow * mesh.transform, dim);
        }
    }

    push_segments(
        &mut out,
        &shapes.marker,
        Mat4::from_translation(frame.light.position),
        frame.light.color,
    );
    out
}
