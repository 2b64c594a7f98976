use crate::input;
use folio_core::CameraChoreographer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Forward wheel events on `target` to the choreographer. The listener is passive and never
/// touches the camera; the frame loop picks the change up on its next tick.
pub fn wire_wheel(target: &web::EventTarget, choreographer: Rc<RefCell<CameraChoreographer>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let delta = input::wheel_delta(ev.delta_y());
        choreographer.borrow_mut().handle_input(delta);
    }) as Box<dyn FnMut(web::WheelEvent)>);

    let options = web::AddEventListenerOptions::new();
    options.set_passive(true);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        closure.as_ref().unchecked_ref(),
        &options,
    ) {
        log::error!("wheel listener error: {:?}", e);
    }
    closure.forget();
}
