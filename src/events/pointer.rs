use crate::input;
use crate::panel::PanelView;
use room_core::RoomApp;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub app: Rc<RefCell<RoomApp>>,
    pub container: web::HtmlElement,
    pub canvas: web::HtmlCanvasElement,
    pub panel: PanelView,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
    wire_click(&w);
    wire_close_button(&w);
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let rect = input::client_rect(&w.container);
        let mut app = w.app.borrow_mut();
        app.pointer_moved(input::pointer_client(&ev), rect);
        if app.controls_mut().is_dragging() {
            let local = input::pointer_local(&ev, &w.canvas);
            let height = app.viewport().height;
            app.controls_mut().drag_to(local, height);
        }
    }) as Box<dyn FnMut(_)>);
    _ = w
        .container
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        let local = input::pointer_local(&ev, &w.canvas);
        w.app.borrow_mut().controls_mut().begin_drag(local);
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        _ = w.canvas.release_pointer_capture(ev.pointer_id());
        w.app.borrow_mut().controls_mut().end_drag();
    }) as Box<dyn FnMut(_)>);
    for kind in ["pointerup", "pointercancel"] {
        _ = w
            .canvas
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        // Keep the page from scrolling while zooming.
        ev.prevent_default();
        w.app.borrow_mut().controls_mut().dolly(ev.delta_y() as f32);
    }) as Box<dyn FnMut(_)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = w
        .canvas
        .add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
    closure.forget();
}

fn wire_click(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        let mut app = w.app.borrow_mut();
        if let Some(content) = app.click() {
            log::info!("[panel] open: {}", content.title);
            w.panel.render(app.panel());
        }
    }) as Box<dyn FnMut(_)>);
    _ = w
        .container
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_close_button(w: &InputWiring) {
    let app = w.app.clone();
    let panel = w.panel.clone();
    let button = w.panel.close_control().clone();
    crate::dom::add_click_listener(&button, move || {
        close_panel(&app, &panel);
    });
}

/// Close the panel and mirror the change into the DOM. No-op when already closed.
pub(super) fn close_panel(app: &Rc<RefCell<RoomApp>>, panel: &PanelView) {
    let mut app = app.borrow_mut();
    if app.close_panel() {
        log::info!("[panel] closed");
        panel.render(app.panel());
    }
}
