use glam::Vec2;
use web_sys as web;

/// Position in canvas pixels for a pointer event. The particle canvas spans
/// the viewport at CSS scale, so client coordinates map straight through.
#[inline]
pub fn event_canvas_px(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}
