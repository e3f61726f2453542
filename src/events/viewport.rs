use crate::dom;
use crate::frame::{self, FrameContext};
use crate::labels::LabelOverlay;
use room_core::{LoopHandle, RoomApp, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything that follows the container's size.
#[derive(Clone)]
pub struct ResizeTargets {
    pub app: Rc<RefCell<RoomApp>>,
    pub container: web::HtmlElement,
    pub canvas: web::HtmlCanvasElement,
    pub labels: Rc<LabelOverlay>,
}

/// Measure the container and bring canvas, overlay and camera in line with it.
pub fn apply_resize(t: &ResizeTargets) {
    let (width, height) = dom::container_size(&t.container);
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let pixel_ratio = t.app.borrow().config().pixel_ratio(dpr);
    dom::sync_canvas_size(&t.canvas, width, height, pixel_ratio);
    t.labels.resize(width, height);
    t.app.borrow_mut().resize(Viewport::new(width, height));
}

pub fn wire_resize(targets: ResizeTargets) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        apply_resize(&targets);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Stop the frame loop on `pagehide` and restart it when the page comes back
/// from the back/forward cache.
pub fn wire_page_lifecycle(frame_ctx: Rc<RefCell<FrameContext<'static>>>, handle: LoopHandle) {
    let Some(window) = web::window() else {
        return;
    };

    let hide_handle = handle.clone();
    let on_hide = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        hide_handle.stop();
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("pagehide", on_hide.as_ref().unchecked_ref());
    on_hide.forget();

    let on_show =
        wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
            if ev.persisted() && handle.resume() {
                frame::start_loop(frame_ctx.clone(), &handle);
            }
        }) as Box<dyn FnMut(web::PageTransitionEvent)>);
    _ = window.add_event_listener_with_callback("pageshow", on_show.as_ref().unchecked_ref());
    on_show.forget();
}
