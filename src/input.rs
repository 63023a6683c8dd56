use glam::Vec2;
use web_sys as web;

// ---------------- Pointer helpers ----------------

/// Pointer position in CSS pixels relative to the viewer container.
#[inline]
pub fn pointer_container_px(ev: &web::PointerEvent, container: &web::HtmlElement) -> Vec2 {
    let rect = container.get_bounding_client_rect();
    let x = ev.client_x() as f32 - rect.left() as f32;
    let y = ev.client_y() as f32 - rect.top() as f32;
    Vec2::new(x, y)
}
