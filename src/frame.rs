//! requestAnimationFrame pump shared by both effects.
//!
//! Each mounted effect gets its own pump: a [`RafScheduler`] implementing
//! the core [`FrameScheduler`] trait over the browser frame queue, plus the
//! [`EffectLifecycle`] that tracks the single outstanding request. Stopping
//! the pump cancels the pending frame and drops the tick closure, so no
//! callback can touch the effect's state after unmount.

use crate::core::lifecycle::{EffectLifecycle, FrameScheduler};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `FrameScheduler` over the browser's animation-frame queue.
pub struct RafScheduler {
    window: web::Window,
    tick: TickSlot,
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> i32 {
        match self.tick.borrow().as_ref() {
            Some(cb) => self
                .window
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .unwrap_or(0),
            None => 0,
        }
    }

    fn cancel_frame(&mut self, handle: i32) {
        if handle != 0 {
            self.window.cancel_animation_frame(handle).ok();
        }
    }
}

pub struct Pump {
    pub lifecycle: EffectLifecycle,
    pub scheduler: RafScheduler,
}

/// Start a per-mount frame loop invoking `on_frame` every animation frame.
///
/// Must not be stopped from inside `on_frame`; teardown comes from host
/// events, never from the tick itself.
pub fn start_loop(window: web::Window, mut on_frame: impl FnMut() + 'static) -> Rc<RefCell<Pump>> {
    let tick_slot: TickSlot = Rc::new(RefCell::new(None));
    let pump = Rc::new(RefCell::new(Pump {
        lifecycle: EffectLifecycle::new(),
        scheduler: RafScheduler {
            window,
            tick: tick_slot.clone(),
        },
    }));

    let pump_tick = pump.clone();
    *tick_slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let live = {
            let mut p = pump_tick.borrow_mut();
            let Pump {
                lifecycle,
                scheduler,
            } = &mut *p;
            lifecycle.frame_fired(scheduler)
        };
        if live {
            on_frame();
        }
    }) as Box<dyn FnMut()>));

    {
        let mut p = pump.borrow_mut();
        let Pump {
            lifecycle,
            scheduler,
        } = &mut *p;
        lifecycle.begin(scheduler);
    }
    pump
}

/// Cancel the pending frame and release the tick closure. Idempotent.
pub fn stop(pump: &Rc<RefCell<Pump>>) {
    let mut p = pump.borrow_mut();
    let Pump {
        lifecycle,
        scheduler,
    } = &mut *p;
    lifecycle.shutdown(scheduler);
    // Break the closure <-> pump reference cycle so mount state can drop.
    scheduler.tick.borrow_mut().take();
}
