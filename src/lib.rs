#![cfg(target_arch = "wasm32")]
//! Ambient background effects for the web: a "metro shower" of animated SVG
//! beams with bounded concurrency, and a pointer-reactive particle field on
//! a 2d canvas.
//!
//! Both effects attach to host elements by id (see `constants`), regenerate
//! their random state on every mount, and tear down exhaustively on unmount.
//! Under a reduced-motion preference nothing is mounted at all.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

mod beams;
pub mod constants;
pub mod core;
mod dom;
mod events;
mod field;
mod frame;
mod input;

struct Mounted {
    beams: Option<beams::BeamsHandle>,
    field: Option<field::FieldHandle>,
}

thread_local! {
    static MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ambient-web starting");

    if let Err(e) = mount_inner() {
        log::error!("mount error: {e:?}");
    }
    Ok(())
}

/// Attach both effects to their host elements. An existing mount is torn
/// down first, so calling this repeatedly reshuffles rather than stacks.
#[wasm_bindgen]
pub fn mount_effects() {
    if let Err(e) = mount_inner() {
        log::error!("mount error: {e:?}");
    }
}

fn mount_inner() -> anyhow::Result<()> {
    unmount_effects();

    let window = dom::window()?;
    if dom::prefers_reduced_motion(&window) {
        log::info!("reduced motion requested; background effects not mounted");
        return Ok(());
    }
    let document = dom::document(&window)?;

    let beams = beams::mount(&window, &document)?;
    let field = field::mount(&window, &document)?;
    MOUNTED.with(|m| *m.borrow_mut() = Some(Mounted { beams, field }));
    Ok(())
}

/// Tear both effects down: cancel pending frames, detach listeners, remove
/// generated DOM. Safe to call repeatedly.
#[wasm_bindgen]
pub fn unmount_effects() {
    MOUNTED.with(|m| {
        if let Some(mut mounted) = m.borrow_mut().take() {
            if let Some(beams) = &mut mounted.beams {
                beams.teardown();
            }
            if let Some(field) = &mut mounted.field {
                field.teardown();
            }
        }
    });
}
