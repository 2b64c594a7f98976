use std::sync::Arc;

use clap::Parser;
use folio_core::render::GpuState;
use folio_core::{
    configure_meshes, CameraChoreographer, ChoreographyParams, InstantClock, OrbitLight,
    OrbitParams, RenderError, SceneAnimationContext, SceneAnimationDriver, SceneCamera,
    SceneLayout, ShadowSettings, Viewport,
};
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{Event, MouseScrollDelta, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::WindowBuilder;

mod input;

fn wheel_delta(delta: MouseScrollDelta) -> Option<f32> {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => input::line_delta(y),
        MouseScrollDelta::PixelDelta(pos) => input::pixel_delta(pos.y),
    }
}

/// Scene viewport in logical pixels, so the light orbit doesn't grow with the display scale.
fn logical_viewport(size: PhysicalSize<u32>, scale_factor: f64) -> Viewport {
    let logical = size.to_logical::<u32>(scale_factor);
    Viewport::new(logical.width.max(1), logical.height.max(1))
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(e) = run() {
        log::error!("{e:?}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let options =
        input::NativeOptions::try_parse_from(std::env::args()).unwrap_or_else(|e| e.exit());
    log::info!("[camera] scroll policy: {}", options.scroll);

    let layout = SceneLayout::default();
    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(format!("{} (native)", layout.label.text))
            .with_inner_size(LogicalSize::new(1280.0, 720.0))
            .build(&event_loop)?,
    );

    let size = window.inner_size();
    let mut gpu = pollster::block_on(GpuState::new(
        window.clone(),
        size.width,
        size.height,
        &layout,
    ))?;

    let mut choreographer = CameraChoreographer::new(ChoreographyParams {
        policy: options.scroll,
        ..Default::default()
    });

    let mut meshes = layout.meshes();
    configure_meshes(&mut meshes, &ShadowSettings::default());
    let viewport = logical_viewport(size, window.scale_factor());
    let camera = SceneCamera::new(choreographer.current(), viewport.aspect());
    let mut driver = SceneAnimationDriver::new(
        SceneAnimationContext {
            clock: InstantClock::start(),
            camera,
            light: OrbitLight::new(OrbitParams::default(), layout.light_color),
            mixer: None,
        },
        &layout,
        meshes,
        viewport,
    );
    driver.attach_mixer(Box::new(layout.model_mixer()));

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => {
                gpu.resize(size.width, size.height);
                driver.resize(logical_viewport(size, window.scale_factor()));
            }
            WindowEvent::MouseWheel { delta, .. } => {
                choreographer.handle_input(wheel_delta(delta));
            }
            WindowEvent::RedrawRequested => match driver.tick(&mut choreographer, &mut gpu) {
                Ok(()) => {}
                Err(RenderError::SurfaceLost) => gpu.reconfigure(),
                Err(RenderError::OutOfMemory) => {
                    log::error!("render error: out of GPU memory, exiting");
                    elwt.exit();
                }
                Err(e) => log::warn!("render error: {e}"),
            },
            _ => {}
        },
        Event::AboutToWait => window.request_redraw(),
        _ => {}
    })?;
    Ok(())
}
