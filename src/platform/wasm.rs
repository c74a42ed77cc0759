//! WASM exports
//!
//! The host allocates nothing: it calls `init` once, then reads and writes
//! the ball, canvas and save buffers through the pointers returned here.
//! Every export is a no-op (or returns null / zero) before `init`.

#![allow(non_snake_case)]

use std::cell::RefCell;
use std::ptr;

use wasm_bindgen::prelude::*;

use crate::session::Session;
use crate::sim::Ball;
use crate::tuning::Tuning;

thread_local! {
    static SESSION: RefCell<Option<Session>> = const { RefCell::new(None) };
}

fn with_session<R>(default: R, f: impl FnOnce(&mut Session) -> R) -> R {
    SESSION.with(|cell| match cell.borrow_mut().as_mut() {
        Some(session) => f(session),
        None => {
            log::warn!("chamber export called before init");
            default
        }
    })
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // A second init (e.g. module re-instantiated) keeps the first logger
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Create the session. Chamber ids: 0 guard (also what a host that omits the
/// argument passes), 1 simple, 2 portals. Unknown ids fall back to the guard.
#[unsafe(no_mangle)]
pub extern "C" fn init(max_num_balls: usize, max_canvas_size: usize, chamber_id: u32) {
    let kind = super::chamber_from_id(chamber_id);
    let session = Session::new(kind, max_num_balls, max_canvas_size, &Tuning::default());
    SESSION.with(|cell| *cell.borrow_mut() = Some(session));
}

#[unsafe(no_mangle)]
pub extern "C" fn ballsMemory() -> *mut Ball {
    with_session(ptr::null_mut(), |s| s.balls_ptr())
}

#[unsafe(no_mangle)]
pub extern "C" fn canvasMemory() -> *mut u32 {
    with_session(ptr::null_mut(), |s| s.canvas_ptr())
}

#[unsafe(no_mangle)]
pub extern "C" fn saveMemory() -> *mut u8 {
    with_session(ptr::null_mut(), |s| s.save_ptr())
}

#[unsafe(no_mangle)]
pub extern "C" fn saveSize() -> usize {
    with_session(0, |s| s.save_bytes().len())
}

#[unsafe(no_mangle)]
pub extern "C" fn save() {
    with_session((), |s| s.save());
}

#[unsafe(no_mangle)]
pub extern "C" fn load() {
    with_session((), |s| {
        if let Err(err) = s.load() {
            log::warn!("load failed: {err}");
        }
    });
}

#[unsafe(no_mangle)]
pub extern "C" fn step(num_balls: usize, dt: f32) {
    with_session((), |s| s.step(num_balls, dt));
}

#[unsafe(no_mangle)]
pub extern "C" fn render(canvas_width: usize, canvas_height: usize) {
    with_session((), |s| s.render(canvas_width, canvas_height));
}
