use glam::Vec2;
use room_core::ClientRect;
use web_sys as web;

#[inline]
pub fn client_rect(el: &web::Element) -> ClientRect {
    let rect = el.get_bounding_client_rect();
    ClientRect {
        left: rect.left() as f32,
        top: rect.top() as f32,
        width: rect.width() as f32,
        height: rect.height() as f32,
    }
}

#[inline]
pub fn pointer_client(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Pointer position relative to `el`'s top-left in CSS pixels.
#[inline]
pub fn pointer_local(ev: &web::MouseEvent, el: &web::Element) -> Vec2 {
    let rect = client_rect(el);
    pointer_client(ev) - Vec2::new(rect.left, rect.top)
}
