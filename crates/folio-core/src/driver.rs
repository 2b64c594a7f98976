//! Per-frame scene driver.
//!
//! [`SceneAnimationDriver::tick`] runs one frame in a fixed order: read the clock, scrub the
//! mixer to that absolute time, orbit the light and spin the sphere, advance the camera
//! choreography, render once. Scheduling the next tick is the host's job
//! (`requestAnimationFrame` on the web, redraw requests on native).

use crate::animation::{AnimationMixer, Spin};
use crate::camera::{CameraRig, SceneCamera};
use crate::choreographer::CameraChoreographer;
use crate::constants::SPIN_RATE;
use crate::light::{OrbitLight, Viewport};
use crate::scene::{MeshDescriptor, MeshKind, SceneLayout};
use glam::Mat4;
use instant::Instant;

/// Monotonic seconds since the scene started.
pub trait ElapsedClock {
    fn elapsed_seconds(&self) -> f64;
}

/// Wall clock backed by `instant`, which maps to `performance.now()` on wasm.
#[derive(Clone, Debug)]
pub struct InstantClock {
    start: Instant,
}

impl InstantClock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for InstantClock {
    fn default() -> Self {
        Self::start()
    }
}

impl ElapsedClock for InstantClock {
    fn elapsed_seconds(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("surface lost or outdated")]
    SurfaceLost,
    #[error("out of GPU memory")]
    OutOfMemory,
    #[error("timed out acquiring the next frame")]
    Timeout,
    #[error("render failed: {0}")]
    Other(String),
}

/// Read-only snapshot handed to the renderer once per tick.
pub struct FrameView<'a> {
    pub elapsed: f64,
    pub camera: &'a SceneCamera,
    pub light: &'a OrbitLight,
    pub meshes: &'a [MeshDescriptor],
}

pub trait SceneRenderer {
    fn render(&mut self, frame: &FrameView<'_>) -> Result<(), RenderError>;
}

/// Objects the driver animates. The mixer shows up later, once the model is built.
pub struct SceneAnimationContext<K: ElapsedClock> {
    pub clock: K,
    pub camera: SceneCamera,
    pub light: OrbitLight,
    pub mixer: Option<Box<dyn AnimationMixer>>,
}

pub struct SceneAnimationDriver<K: ElapsedClock> {
    ctx: SceneAnimationContext<K>,
    meshes: Vec<MeshDescriptor>,
    model_placement: Mat4,
    sphere_placement: Mat4,
    spin: Spin,
    viewport: Viewport,
    frames: u64,
}

impl<K: ElapsedClock> SceneAnimationDriver<K> {
    pub fn new(
        ctx: SceneAnimationContext<K>,
        layout: &SceneLayout,
        meshes: Vec<MeshDescriptor>,
        viewport: Viewport,
    ) -> Self {
        Self {
            ctx,
            meshes,
            model_placement: layout.model.matrix(),
            sphere_placement: layout.sphere.matrix(),
            spin: Spin::new(SPIN_RATE),
            viewport,
            frames: 0,
        }
    }

    pub fn attach_mixer(&mut self, mixer: Box<dyn AnimationMixer>) {
        self.ctx.mixer = Some(mixer);
        log::info!("[scene] animation mixer attached");
    }

    pub fn has_mixer(&self) -> bool {
        self.ctx.mixer.is_some()
    }

    pub fn camera(&self) -> &SceneCamera {
        &self.ctx.camera
    }

    pub fn light(&self) -> &OrbitLight {
        &self.ctx.light
    }

    pub fn meshes(&self) -> &[MeshDescriptor] {
        &self.meshes
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn spin(&self) -> &Spin {
        &self.spin
    }

    /// Number of completed ticks.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// New drawable size: updates orbit radii and the camera aspect.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport.width == 0 || viewport.height == 0 || viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        self.ctx.camera.set_aspect(viewport.width, viewport.height);
        self.ctx.camera.refresh_projection();
    }

    /// Run one frame. A render failure is returned after every other step has run.
    pub fn tick<R: SceneRenderer + ?Sized>(
        &mut self,
        choreographer: &mut CameraChoreographer,
        renderer: &mut R,
    ) -> Result<(), RenderError> {
        let elapsed = self.ctx.clock.elapsed_seconds();

        if let Some(mixer) = self.ctx.mixer.as_mut() {
            mixer.set_time(elapsed);
        }

        self.ctx.light.orbit(elapsed, self.viewport);
        self.spin.advance(elapsed);
        self.update_mesh_transforms();

        choreographer.advance(&mut self.ctx.camera);

        self.frames += 1;
        let frame = FrameView {
            elapsed,
            camera: &self.ctx.camera,
            light: &self.ctx.light,
            meshes: &self.meshes,
        };
        renderer.render(&frame)
    }

    fn update_mesh_transforms(&mut self) {
        let model = match &self.ctx.mixer {
            Some(mixer) => mixer.model_transform(),
            None => self.model_placement,
        };
        let sphere = self.sphere_placement * self.spin.matrix();
        for mesh in self.meshes.iter_mut() {
            match mesh.kind {
                MeshKind::Model => mesh.transform = model,
                MeshKind::Sphere => mesh.transform = sphere,
                MeshKind::Ground => {}
            }
        }
    }
}
