#![cfg(target_arch = "wasm32")]
use folio_core::{
    configure_meshes, CameraChoreographer, ChoreographyParams, InstantClock, OrbitLight,
    OrbitParams, SceneAnimationContext, SceneAnimationDriver, SceneCamera, SceneLayout,
    ScrollPolicy, ShadowSettings,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

thread_local! {
    static ANIMATION: RefCell<Option<frame::AnimationLoop>> = const { RefCell::new(None) };
}

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn scroll_policy_from_location() -> ScrollPolicy {
    match input::policy_from_query(&dom::location_search(), constants::SCROLL_QUERY_KEY) {
        Ok(Some(policy)) => policy,
        Ok(None) => ScrollPolicy::default(),
        Err(e) => {
            log::warn!("{}; using {}", e, ScrollPolicy::default());
            ScrollPolicy::default()
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stop the render loop. The last frame stays on screen.
#[wasm_bindgen]
pub fn stop() {
    ANIMATION.with(|a| {
        if let Some(anim) = a.borrow_mut().take() {
            anim.cancel();
        }
    });
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let policy = scroll_policy_from_location();
    log::info!("[camera] scroll policy: {}", policy);
    let choreographer = Rc::new(RefCell::new(CameraChoreographer::new(ChoreographyParams {
        policy,
        ..Default::default()
    })));

    let layout = SceneLayout::default();
    let mut meshes = layout.meshes();
    configure_meshes(&mut meshes, &ShadowSettings::default());

    let viewport = dom::canvas_viewport(&canvas);
    let camera = SceneCamera::new(choreographer.borrow().current(), viewport.aspect());
    let driver = SceneAnimationDriver::new(
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

    events::wire_wheel(&window, choreographer.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        driver,
        choreographer,
        renderer: render::WebRenderer {
            gpu: None,
            label: overlay::LabelOverlay::mount(&document, &layout.label),
        },
        canvas: canvas.clone(),
    }));
    let animation = frame::start_loop(frame_ctx.clone());
    ANIMATION.with(|a| *a.borrow_mut() = Some(animation));

    // The loop is already ticking; GPU and model join it when ready.
    let gpu = render::init_gpu(&canvas, &layout).await;
    let mut ctx = frame_ctx.borrow_mut();
    ctx.renderer.gpu = gpu;
    ctx.driver.attach_mixer(Box::new(layout.model_mixer()));
    Ok(())
}
