// Host-side tests for the per-frame scene driver and what it animates.

use folio_core::geometry::{build_frame_vertices, MeshShapes};
use folio_core::{
    configure_meshes, has_shadow_receiver, AnimationMixer, CameraChoreographer,
    ChoreographyParams, ClipMixer, ElapsedClock, FrameView, LoopMode, MeshKind, OrbitLight,
    OrbitParams, RenderError, RotationClip, RotationKey, SceneAnimationContext,
    SceneAnimationDriver, SceneCamera, SceneLayout, SceneRenderer, ScrollPolicy, ShadowSettings,
    Spin, Viewport, FINAL_POSE, INITIAL_POSE,
};
use glam::{Mat4, Vec3};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone, Default)]
struct ManualClock(Rc<Cell<f64>>);

impl ElapsedClock for ManualClock {
    fn elapsed_seconds(&self) -> f64 {
        self.0.get()
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Rendered {
    elapsed: f64,
    camera_zoom: f32,
    light: Vec3,
}

#[derive(Default)]
struct RecordingRenderer {
    frames: Vec<Rendered>,
    fail_with: Option<RenderError>,
}

impl SceneRenderer for RecordingRenderer {
    fn render(&mut self, frame: &FrameView<'_>) -> Result<(), RenderError> {
        self.frames.push(Rendered {
            elapsed: frame.elapsed,
            camera_zoom: frame.camera.zoom,
            light: frame.light.position,
        });
        match &self.fail_with {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

/// Mixer that logs every seek into a shared list.
struct SeekLog(Rc<RefCell<Vec<f64>>>);

impl AnimationMixer for SeekLog {
    fn set_time(&mut self, seconds: f64) {
        self.0.borrow_mut().push(seconds);
    }

    fn model_transform(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0))
    }
}

fn viewport() -> Viewport {
    Viewport::new(1000, 500)
}

fn driver(clock: ManualClock) -> SceneAnimationDriver<ManualClock> {
    let layout = SceneLayout::default();
    let mut meshes = layout.meshes();
    configure_meshes(&mut meshes, &ShadowSettings::default());
    SceneAnimationDriver::new(
        SceneAnimationContext {
            clock,
            camera: SceneCamera::new(&INITIAL_POSE, viewport().aspect()),
            light: OrbitLight::new(OrbitParams::default(), layout.light_color),
            mixer: None,
        },
        &layout,
        meshes,
        viewport(),
    )
}

fn choreographer() -> CameraChoreographer {
    CameraChoreographer::new(ChoreographyParams {
        policy: ScrollPolicy::TargetDirection,
        ..Default::default()
    })
}

#[test]
fn tick_without_mixer_runs_every_other_step() {
    let clock = ManualClock::default();
    let mut d = driver(clock.clone());
    let mut c = choreographer();
    let mut r = RecordingRenderer::default();
    assert!(!d.has_mixer());

    c.handle_input(Some(1.0));
    clock.0.set(2.5);
    assert_eq!(d.tick(&mut c, &mut r), Ok(()));

    assert_eq!(d.frames(), 1);
    assert_eq!(r.frames.len(), 1);
    assert_eq!(r.frames[0].elapsed, 2.5);
    // light moved off its initial spot, camera advanced one step
    assert_ne!(d.light().position, Vec3::new(0.0, 0.0, OrbitParams::default().depth));
    assert!(c.progress() > 0.0);
    assert!(d.camera().zoom > 1.0);
    // the model keeps its placement
    let model = d.meshes().iter().find(|m| m.kind == MeshKind::Model);
    assert_eq!(
        model.map(|m| m.transform),
        Some(SceneLayout::default().model.matrix())
    );
}

#[test]
fn renders_exactly_once_per_tick() {
    let clock = ManualClock::default();
    let mut d = driver(clock.clone());
    let mut c = choreographer();
    let mut r = RecordingRenderer::default();
    for i in 0..7 {
        clock.0.set(i as f64 / 60.0);
        d.tick(&mut c, &mut r).unwrap();
    }
    assert_eq!(r.frames.len(), 7);
    assert_eq!(d.frames(), 7);
}

#[test]
fn mixer_is_seeked_to_absolute_time() {
    let clock = ManualClock::default();
    let mut d = driver(clock.clone());
    let mut c = choreographer();
    let mut r = RecordingRenderer::default();
    let seeks = Rc::new(RefCell::new(Vec::new()));
    d.attach_mixer(Box::new(SeekLog(seeks.clone())));
    assert!(d.has_mixer());

    for t in [0.0, 0.016, 5.0, 4.0, 100.25] {
        clock.0.set(t);
        d.tick(&mut c, &mut r).unwrap();
    }
    assert_eq!(*seeks.borrow(), vec![0.0, 0.016, 5.0, 4.0, 100.25]);

    let model = d.meshes().iter().find(|m| m.kind == MeshKind::Model);
    assert_eq!(
        model.map(|m| m.transform),
        Some(Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)))
    );
}

#[test]
fn camera_is_advanced_before_render() {
    let clock = ManualClock::default();
    let mut d = driver(clock.clone());
    let mut c = choreographer();
    let mut r = RecordingRenderer::default();
    c.handle_input(Some(1.0));
    d.tick(&mut c, &mut r).unwrap();
    // the renderer saw the pose written in this very tick
    assert_eq!(r.frames[0].camera_zoom, c.current().zoom);
    assert!(r.frames[0].camera_zoom > INITIAL_POSE.zoom);
}

#[test]
fn full_scroll_reaches_final_pose_through_the_driver() {
    let clock = ManualClock::default();
    let mut d = driver(clock.clone());
    let mut c = choreographer();
    let mut r = RecordingRenderer::default();
    c.handle_input(Some(1.0));
    for i in 0..200 {
        clock.0.set(i as f64 / 60.0);
        d.tick(&mut c, &mut r).unwrap();
    }
    assert!(c.is_idle());
    assert_eq!(d.camera().zoom, FINAL_POSE.zoom);
    assert_eq!(d.camera().position, FINAL_POSE.position);
}

#[test]
fn render_error_is_returned_after_the_frame_ran() {
    let clock = ManualClock::default();
    let mut d = driver(clock.clone());
    let mut c = choreographer();
    let mut r = RecordingRenderer {
        fail_with: Some(RenderError::SurfaceLost),
        ..Default::default()
    };
    c.handle_input(Some(1.0));
    clock.0.set(1.0);
    assert_eq!(d.tick(&mut c, &mut r), Err(RenderError::SurfaceLost));
    assert_eq!(d.frames(), 1);
    assert!(c.progress() > 0.0);
}

#[test]
fn light_orbits_as_a_function_of_time() {
    let params = OrbitParams::default();
    let mut light = OrbitLight::new(params, [1.0, 1.0, 1.0]);
    let vp = viewport();
    let (rx, ry) = light.radii(vp);
    assert!((rx - 1000.0 * params.radius_per_px).abs() < 1e-5);
    assert!((ry - 500.0 * params.radius_per_px).abs() < 1e-5);

    light.orbit(0.0, vp);
    assert!((light.position.x - rx).abs() < 1e-5);
    assert!(light.position.y.abs() < 1e-5);
    assert_eq!(light.position.z, params.depth);

    let t = 3.0;
    light.orbit(t, vp);
    let a = (t as f32) * params.angular_speed;
    assert!((light.position.x - a.cos() * rx).abs() < 1e-4);
    assert!((light.position.y - a.sin() * ry).abs() < 1e-4);

    // same time, same place
    let at_t = light.position;
    light.orbit(10.0, vp);
    light.orbit(t, vp);
    assert_eq!(light.position, at_t);
}

#[test]
fn resize_updates_camera_aspect_and_orbit_radii() {
    let clock = ManualClock::default();
    let mut d = driver(clock.clone());
    let before = d.camera().projection_matrix();
    d.resize(Viewport::new(400, 800));
    assert_eq!(d.viewport(), Viewport::new(400, 800));
    assert!((d.camera().aspect - 0.5).abs() < 1e-6);
    assert_ne!(d.camera().projection_matrix(), before);

    // zero sizes are ignored
    d.resize(Viewport::new(0, 800));
    assert_eq!(d.viewport(), Viewport::new(400, 800));
}

#[test]
fn spin_uses_frame_deltas() {
    let mut spin = Spin::new(0.5);
    spin.advance(10.0);
    assert_eq!(spin.rotation, Vec3::ZERO);
    spin.advance(12.0);
    assert!((spin.rotation.x - 1.0).abs() < 1e-6);
    assert_eq!(spin.rotation.x, spin.rotation.z);
    // clock going backwards never spins in reverse
    spin.advance(11.0);
    assert!((spin.rotation.y - 1.0).abs() < 1e-6);
}

#[test]
fn sphere_spins_with_the_driver() {
    let clock = ManualClock::default();
    let mut d = driver(clock.clone());
    let mut c = choreographer();
    let mut r = RecordingRenderer::default();
    clock.0.set(1.0);
    d.tick(&mut c, &mut r).unwrap();
    clock.0.set(2.0);
    d.tick(&mut c, &mut r).unwrap();
    assert!(d.spin().rotation.x > 0.0);
    let sphere = d.meshes().iter().find(|m| m.kind == MeshKind::Sphere);
    assert_ne!(
        sphere.map(|m| m.transform),
        Some(SceneLayout::default().sphere.matrix())
    );
}

#[test]
fn clip_mixer_loops_and_clamps() {
    let key = |time: f32, y: f32| RotationKey {
        time,
        rotation: Vec3::new(0.0, y, 0.0),
    };
    let clip = RotationClip::new("sway", vec![key(4.0, 2.0), key(0.0, 0.0), key(f32::NAN, 9.0)]);
    assert_eq!(clip.keys().len(), 2);
    assert_eq!(clip.duration(), 4.0);
    assert!((clip.sample(1.0).y - 0.5).abs() < 1e-6);

    let mut looping = ClipMixer::new(clip.clone(), LoopMode::Loop, Mat4::IDENTITY);
    looping.set_time(9.0);
    assert!((looping.local_time() - 1.0).abs() < 1e-6);
    assert!((looping.rotation().y - 0.5).abs() < 1e-6);

    let mut clamped = ClipMixer::new(clip, LoopMode::Clamp, Mat4::IDENTITY);
    clamped.set_time(9.0);
    assert_eq!(clamped.local_time(), 4.0);
    assert_eq!(clamped.rotation().y, 2.0);
    clamped.set_time(f64::NAN);
    assert_eq!(clamped.local_time(), 0.0);
}

#[test]
fn layout_mixer_is_deterministic_in_time() {
    let layout = SceneLayout::default();
    let mut a = layout.model_mixer();
    let mut b = layout.model_mixer();
    a.set_time(3.0);
    b.set_time(1.0);
    b.set_time(3.0 + a.clip().duration() as f64);
    assert!((a.rotation() - b.rotation()).length() < 1e-5);
}

#[test]
fn configure_meshes_sets_shadow_flags() {
    let layout = SceneLayout::default();
    let mut meshes = layout.meshes();
    assert!(!has_shadow_receiver(&meshes));
    let casters = configure_meshes(&mut meshes, &ShadowSettings::default());
    assert_eq!(casters, 2);
    for m in &meshes {
        match m.kind {
            MeshKind::Model | MeshKind::Sphere => assert!(m.cast_shadow && !m.receive_shadow),
            MeshKind::Ground => assert!(m.receive_shadow && !m.cast_shadow),
        }
    }
    assert!(has_shadow_receiver(&meshes));
}

#[test]
fn frame_vertices_include_shadows_only_with_a_receiver() {
    let layout = SceneLayout::default();
    let shapes = MeshShapes::from_layout(&layout);
    let camera = SceneCamera::new(&INITIAL_POSE, 1.0);
    let light = OrbitLight::new(OrbitParams::default(), layout.light_color);

    let plain = layout.meshes();
    let plain_count = build_frame_vertices(
        &FrameView {
            elapsed: 0.0,
            camera: &camera,
            light: &light,
            meshes: &plain,
        },
        &shapes,
    )
    .len();
    let expected_plain = 2 * (shapes.model.len() + shapes.sphere.len() + shapes.marker.len());
    assert_eq!(plain_count, expected_plain);

    let mut shadowed = layout.meshes();
    configure_meshes(&mut shadowed, &ShadowSettings::default());
    let shadowed_count = build_frame_vertices(
        &FrameView {
            elapsed: 0.0,
            camera: &camera,
            light: &light,
            meshes: &shadowed,
        },
        &shapes,
    )
    .len();
    assert_eq!(
        shadowed_count,
        expected_plain + 2 * (shapes.ground.len() + shapes.model.len() + shapes.sphere.len())
    );
}

#[test]
fn camera_projects_label_anchor_on_screen() {
    let layout = SceneLayout::default();
    let camera = SceneCamera::new(&INITIAL_POSE, 16.0 / 9.0);
    let centre = camera.project_to_screen(Vec3::ZERO);
    let [x, y] = centre.unwrap();
    assert!((x - 0.5).abs() < 1e-5 && (y - 0.5).abs() < 1e-5);

    // the label sits to the upper left of the centre
    let [lx, ly] = camera.project_to_screen(layout.label.position).unwrap();
    assert!(lx < 0.5 && ly < 0.5);

    // behind the camera
    assert!(camera
        .project_to_screen(INITIAL_POSE.position + Vec3::Z * 5.0)
        .is_none());
}

#[test]
fn zoom_narrows_the_field_of_view() {
    let mut wide = SceneCamera::new(&INITIAL_POSE, 1.0);
    let narrow = SceneCamera::new(&FINAL_POSE, 1.0);
    assert!(narrow.effective_fovy() < wide.effective_fovy());
    assert!((wide.effective_fovy() - wide.fovy_radians).abs() < 1e-6);
    wide.zoom = 0.0;
    assert!((wide.effective_fovy() - wide.fovy_radians).abs() < 1e-6);
}
