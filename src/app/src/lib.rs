pub mod actions;
pub mod commands;
pub mod events;
pub mod ffi;
pub mod http_helpers;
pub mod macros;
pub mod model;
pub mod reducer;
pub mod types;
pub mod update;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

use crux_core::Command;

// Re-export core types
pub use crate::{
    actions::ResetAction,
    commands::signup_progress::{SignupStepOperation, SignupStepOutput},
    events::{Event, ResetEvent, VerifyEvent},
    http_helpers::{build_url, BASE_URL, LOOKUP_ENDPOINT, REQUEST_RESET_ENDPOINT},
    model::{Model, ViewModel},
    reducer::reduce,
    types::*,
};
pub use crux_http::Result as HttpResult;

#[crux_macros::effect(typegen)]
pub enum Effect {
    Render(crux_core::render::RenderOperation),
    Http(crux_http::protocol::HttpRequest),
    SignupProgress(SignupStepOperation),
}

pub type HttpCmd = crux_http::command::Http<Effect, Event>;
pub type SignupProgressCmd = crate::commands::signup_progress::SignupProgress<Effect, Event>;

/// The Core application
#[derive(Default)]
pub struct App;

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Effect = Effect;

    fn update(&self, event: Self::Event, model: &mut Self::Model) -> Command<Effect, Event> {
        update::update(event, model)
    }

    fn view(&self, model: &Self::Model) -> Self::ViewModel {
        ViewModel::from(model)
    }
}
