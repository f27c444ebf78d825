//! Owned event listeners.
//!
//! The teardown contract requires every listener attached at mount to be
//! detached at unmount, so wiring returns a guard that keeps the closure
//! alive and removes the listener when dropped. Nothing here calls
//! `Closure::forget`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct ListenerGuard {
    target: web::EventTarget,
    kind: &'static str,
    closure: Option<Closure<dyn FnMut(web::Event)>>,
}

impl ListenerGuard {
    pub fn listen(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            kind,
            closure: Some(closure),
        }
    }

    /// Detach now. Dropping the guard does the same; a second call is a no-op.
    pub fn detach(&mut self) {
        if let Some(closure) = self.closure.take() {
            _ = self
                .target
                .remove_event_listener_with_callback(self.kind, closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.detach();
    }
}
