use super::pointer::close_panel;
use crate::constants::CLOSE_KEY;
use crate::panel::PanelView;
use room_core::RoomApp;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Escape closes the info panel.
pub fn wire_close_key(app: Rc<RefCell<RoomApp>>, panel: PanelView) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                if ev.key() == CLOSE_KEY && app.borrow().panel().is_open() {
                    close_panel(&app, &panel);
                    ev.prevent_default();
                }
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
