//! WebAssembly FFI bindings for the Crux Core
//!
//! The web shell renders the signup and recovery screens and talks to the
//! Core only through these three functions.

use lazy_static::lazy_static;
use wasm_bindgen::prelude::wasm_bindgen;

use crux_core::{bridge::Bridge, Core};

use crate::{ffi, App};

lazy_static! {
    static ref CORE: Bridge<App> = Bridge::new(Core::new());
}

/// Set up logging when the WASM module is loaded
#[wasm_bindgen(start)]
pub fn init_wasm() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };

    let _ = console_log::init_with_level(level);
}

/// Feed a serialized [`Event`](crate::Event) into the Core, returning the serialized effects
#[wasm_bindgen]
pub fn process_event(event_bytes: &[u8]) -> Vec<u8> {
    ffi::process_event(&CORE, event_bytes)
}

/// Serialized [`ViewModel`](crate::ViewModel) for rendering
#[wasm_bindgen]
pub fn view() -> Vec<u8> {
    ffi::view(&CORE)
}

/// Resolve an HTTP or step tracker effect with the Shell's serialized output
#[wasm_bindgen]
pub fn handle_response(id: u32, response_bytes: &[u8]) -> Vec<u8> {
    ffi::handle_response(&CORE, id, response_bytes)
}
