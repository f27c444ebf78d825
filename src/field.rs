//! Particle field background effect.
//!
//! Drives the core simulation against a fullscreen 2d canvas: pointer moves
//! update a shared position read by the step, the resize listener resizes
//! only the backing surface, and the simulation advances on every other
//! scheduled frame to bound CPU cost.

use crate::constants::{FIELD_CANVAS_ID, LINK_ALPHA, LINK_WIDTH, PARTICLE_COLOR};
use crate::core::particles::{ParticleField, SIM_FRAME_STRIDE};
use crate::core::rng::UnitRng;
use crate::dom;
use crate::events::ListenerGuard;
use crate::frame;
use crate::input;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FieldHandle {
    pump: Rc<RefCell<frame::Pump>>,
    listeners: Vec<ListenerGuard>,
    torn_down: bool,
}

impl FieldHandle {
    /// Stop the frame loop and detach every listener. Idempotent.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        frame::stop(&self.pump);
        for guard in &mut self.listeners {
            guard.detach();
        }
        self.listeners.clear();
        log::info!("[field] torn down");
    }
}

impl Drop for FieldHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Mount the particle field onto its host canvas.
///
/// Purely decorative: a missing canvas or an unavailable 2d context means no
/// work at all, not an error.
pub fn mount(
    window: &web::Window,
    document: &web::Document,
) -> anyhow::Result<Option<FieldHandle>> {
    let Some(el) = document.get_element_by_id(FIELD_CANVAS_ID) else {
        log::warn!("[field] host #{FIELD_CANVAS_ID} missing; effect disabled");
        return Ok(None);
    };
    let canvas: web::HtmlCanvasElement = match el.dyn_into() {
        Ok(canvas) => canvas,
        Err(_) => {
            log::warn!("[field] #{FIELD_CANVAS_ID} is not a canvas; effect disabled");
            return Ok(None);
        }
    };
    dom::sync_canvas_viewport_size(window, &canvas);

    let ctx = match canvas.get_context("2d") {
        Ok(Some(obj)) => match obj.dyn_into::<web::CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => {
                log::warn!("[field] unexpected 2d context type; effect disabled");
                return Ok(None);
            }
        },
        _ => {
            log::warn!("[field] no 2d context; effect disabled");
            return Ok(None);
        }
    };

    let mut rng = UnitRng(StdRng::from_entropy());
    let field = ParticleField::spawn(canvas.width() as f32, canvas.height() as f32, &mut rng);
    let population = field.particles.len();

    // Shared with the mousemove handler; handler writes, step reads. The
    // two only ever interleave between callbacks, never run concurrently.
    let pointer = Rc::new(Cell::new(Vec2::ZERO));

    let mut listeners = Vec::new();
    {
        let pointer = pointer.clone();
        let target: &web::EventTarget = window.as_ref();
        listeners.push(ListenerGuard::listen(target, "mousemove", move |ev| {
            if let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() {
                pointer.set(input::event_canvas_px(mouse));
            }
        }));
    }
    {
        let window_r = window.clone();
        let canvas_r = canvas.clone();
        let target: &web::EventTarget = window.as_ref();
        listeners.push(ListenerGuard::listen(target, "resize", move |_| {
            dom::sync_canvas_viewport_size(&window_r, &canvas_r);
        }));
    }

    let state = Rc::new(RefCell::new(FieldState {
        field,
        links: Vec::new(),
        frame_count: 0,
    }));
    let pump = frame::start_loop(window.clone(), move || {
        let mut s = state.borrow_mut();
        s.frame_count += 1;
        if s.frame_count % SIM_FRAME_STRIDE != 0 {
            return;
        }
        let FieldState { field, links, .. } = &mut *s;
        field.step(pointer.get());
        field.links(links);
        draw(&ctx, &canvas, field, links);
    });

    log::info!("[field] mounted {population} particles");
    Ok(Some(FieldHandle {
        pump,
        listeners,
        torn_down: false,
    }))
}

struct FieldState {
    field: ParticleField,
    links: Vec<(Vec2, Vec2)>,
    frame_count: u64,
}

fn draw(
    ctx: &web::CanvasRenderingContext2d,
    canvas: &web::HtmlCanvasElement,
    field: &ParticleField,
    links: &[(Vec2, Vec2)],
) {
    ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);

    ctx.set_fill_style_str(PARTICLE_COLOR);
    for p in &field.particles {
        ctx.set_global_alpha(p.opacity as f64);
        ctx.begin_path();
        _ = ctx.arc(p.pos.x as f64, p.pos.y as f64, p.radius as f64, 0.0, TAU);
        ctx.fill();
    }

    ctx.set_stroke_style_str(PARTICLE_COLOR);
    ctx.set_global_alpha(LINK_ALPHA);
    ctx.set_line_width(LINK_WIDTH);
    for (a, b) in links {
        ctx.begin_path();
        ctx.move_to(a.x as f64, a.y as f64);
        ctx.line_to(b.x as f64, b.y as f64);
        ctx.stroke();
    }
    ctx.set_global_alpha(1.0);
}
