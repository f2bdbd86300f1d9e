mod reset;
mod verify;

use crux_core::Command;

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::Reset(event) => reset::handle(event, model),
        Event::Verify(event) => verify::handle(event, model),
    }
}
