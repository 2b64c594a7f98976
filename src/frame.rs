use crate::dom;
use crate::render::WebRenderer;
use folio_core::{CameraChoreographer, InstantClock, RenderError, SceneAnimationDriver};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub driver: SceneAnimationDriver<InstantClock>,
    pub choreographer: Rc<RefCell<CameraChoreographer>>,
    pub renderer: WebRenderer,
    pub canvas: web::HtmlCanvasElement,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let viewport = dom::canvas_viewport(&self.canvas);
        self.driver.resize(viewport);
        self.renderer
            .resize_if_needed(self.canvas.width().max(1), self.canvas.height().max(1));

        let result = {
            let mut choreographer = self.choreographer.borrow_mut();
            self.driver.tick(&mut choreographer, &mut self.renderer)
        };
        match result {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => self.renderer.recover(),
            Err(e) => log::error!("render error: {}", e),
        }
    }
}

/// Handle to the `requestAnimationFrame` loop started by [`start_loop`].
pub struct AnimationLoop {
    running: Rc<Cell<bool>>,
    request_id: Rc<Cell<Option<i32>>>,
}

impl AnimationLoop {
    /// Stop rescheduling and drop the pending frame request.
    pub fn cancel(&self) {
        if !self.running.replace(false) {
            return;
        }
        if let (Some(id), Some(w)) = (self.request_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        log::info!("[frame] loop cancelled");
    }
}

fn request_frame(
    tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    request_id: &Rc<Cell<Option<i32>>>,
) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        request_id.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> AnimationLoop {
    let running = Rc::new(Cell::new(true));
    let request_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let running_tick = running.clone();
    let request_id_tick = request_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone, &request_id_tick);
    }) as Box<dyn FnMut()>));
    request_frame(&tick, &request_id);
    log::info!("[frame] loop started");

    AnimationLoop {
        running,
        request_id,
    }
}
