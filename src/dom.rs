use room_core::SetupError;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Required element lookup; absence is a setup error.
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> Result<T, SetupError> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| SetupError::MissingElement { id: id.to_string() })?;
    el.dyn_into::<T>()
        .map_err(|_| SetupError::UnexpectedElementType {
            id: id.to_string(),
            expected: std::any::type_name::<T>(),
        })
}

#[inline]
pub fn add_click_listener(el: &web::EventTarget, mut handler: impl FnMut() + 'static) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Container size in CSS pixels.
#[inline]
pub fn container_size(container: &web::HtmlElement) -> (f32, f32) {
    (container.client_width() as f32, container.client_height() as f32)
}

/// Size a canvas: CSS box to `width`×`height`, backing store scaled by `pixel_ratio`.
pub fn sync_canvas_size(canvas: &web::HtmlCanvasElement, width: f32, height: f32, pixel_ratio: f64) {
    let style = canvas.style();
    _ = style.set_property("width", &format!("{width}px"));
    _ = style.set_property("height", &format!("{height}px"));
    let w_px = (width as f64 * pixel_ratio) as u32;
    let h_px = (height as f64 * pixel_ratio) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
}

#[inline]
pub fn set_cursor(el: &web::HtmlElement, cursor: &str) {
    _ = el.style().set_property("cursor", cursor);
}

#[inline]
pub fn set_display(el: &web::HtmlElement, display: &str) {
    _ = el.style().set_property("display", display);
}
