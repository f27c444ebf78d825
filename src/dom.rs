use anyhow::anyhow;
use web_sys as web;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

#[inline]
pub fn window() -> anyhow::Result<web::Window> {
    web::window().ok_or_else(|| anyhow!("no window"))
}

#[inline]
pub fn document(window: &web::Window) -> anyhow::Result<web::Document> {
    window.document().ok_or_else(|| anyhow!("no document"))
}

/// True when the environment asks for reduced motion. Checked once before
/// mounting; the effects themselves carry no reduced-motion branch.
pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

/// Size the canvas backing store to the window's inner dimensions.
/// Only the surface resizes; the particle population is fixed at mount.
pub fn sync_canvas_viewport_size(window: &web::Window, canvas: &web::HtmlCanvasElement) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    canvas.set_width(w.max(1.0) as u32);
    canvas.set_height(h.max(1.0) as u32);
}

pub fn create_svg_element(document: &web::Document, name: &str) -> anyhow::Result<web::Element> {
    document
        .create_element_ns(Some(SVG_NS), name)
        .map_err(|e| anyhow!("create <{name}>: {e:?}"))
}

/// Read a numeric attribute such as `data-max-active`, if present and parseable.
pub fn attr_f64(el: &web::Element, name: &str) -> Option<f64> {
    el.get_attribute(name).and_then(|s| s.trim().parse().ok())
}
