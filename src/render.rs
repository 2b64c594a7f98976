use crate::overlay::LabelOverlay;
use folio_core::render::GpuState;
use folio_core::{FrameView, RenderError, SceneRenderer, SceneLayout};
use web_sys as web;

/// Canvas renderer plus the DOM label. The GPU half shows up once WebGPU is ready;
/// until then (or when WebGPU is unavailable) only the label is placed.
pub struct WebRenderer {
    pub gpu: Option<GpuState<'static>>,
    pub label: Option<LabelOverlay>,
}

impl WebRenderer {
    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if let Some(g) = &mut self.gpu {
            if g.size() != (width, height) {
                g.resize(width, height);
            }
        }
    }

    pub fn recover(&mut self) {
        if let Some(g) = &mut self.gpu {
            g.reconfigure();
        }
    }
}

impl SceneRenderer for WebRenderer {
    fn render(&mut self, frame: &FrameView<'_>) -> Result<(), RenderError> {
        if let Some(label) = &mut self.label {
            label.place(frame.camera);
        }
        match &mut self.gpu {
            Some(g) => g.render(frame),
            None => Ok(()),
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    layout: &SceneLayout,
) -> Option<GpuState<'static>> {
    let target = wgpu::SurfaceTarget::Canvas(canvas.clone());
    match GpuState::new(target, canvas.width(), canvas.height(), layout).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}
