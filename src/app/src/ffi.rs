//! Serialized Core access shared by the FFI entry points
//!
//! Bridge failures (an event or effect output the Core cannot decode, a view
//! model it cannot encode) are logged and answered with an empty buffer, so a
//! malformed message from the Shell never takes the Core down and leaves the
//! model untouched.

use crux_core::bridge::{Bridge, EffectId};

use crate::App;

/// Feed a serialized [`Event`](crate::Event) into the Core, returning the serialized effects
pub fn process_event(bridge: &Bridge<App>, event_bytes: &[u8]) -> Vec<u8> {
    let mut effects = Vec::new();
    if let Err(e) = bridge.update(event_bytes, &mut effects) {
        log::error!("failed to process event: {e}");
        effects.clear();
    }
    effects
}

/// Serialized [`ViewModel`](crate::ViewModel) for rendering
pub fn view(bridge: &Bridge<App>) -> Vec<u8> {
    let mut view = Vec::new();
    if let Err(e) = bridge.view(&mut view) {
        log::error!("failed to serialize view model: {e}");
        view.clear();
    }
    view
}

/// Resolve an HTTP or step tracker effect with the Shell's serialized output
pub fn handle_response(bridge: &Bridge<App>, id: u32, response_bytes: &[u8]) -> Vec<u8> {
    let mut effects = Vec::new();
    if let Err(e) = bridge.resolve(EffectId(id), response_bytes, &mut effects) {
        log::error!("failed to resolve effect {id}: {e}");
        effects.clear();
    }
    effects
}
