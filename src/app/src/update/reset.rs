use crux_core::{render::render, Command};

use crate::actions::ResetAction;
use crate::events::{Event, ResetEvent};
use crate::http_helpers::{
    build_url, build_url_with_query, process_json_response, process_status_response,
    LOOKUP_ENDPOINT, REQUEST_RESET_ENDPOINT,
};
use crate::model::Model;
use crate::reducer::reduce;
use crate::types::{LookupResponse, PasswordResetRequest, RemoteError};
use crate::{Effect, HttpCmd};

/// Handle account-recovery reset events
pub fn handle(event: ResetEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        ResetEvent::FetchOptions { user } => fetch_reset_options(user, model),

        ResetEvent::OptionsResponse(request_id, result) => dispatch(
            model,
            match result {
                Ok(items) => ResetAction::OptionsReceive { request_id, items },
                Err(error) => ResetAction::OptionsError { request_id, error },
            },
        ),

        ResetEvent::RequestPasswordReset { user, method } => {
            request_password_reset(PasswordResetRequest { user, method }, model)
        }

        ResetEvent::PasswordResetResponse(request_id, result) => dispatch(
            model,
            match result {
                Ok(()) => ResetAction::ResetRequestSuccess { request_id },
                Err(error) => ResetAction::ResetRequestError { request_id, error },
            },
        ),

        ResetEvent::UpdateUserData(update) => dispatch(model, ResetAction::UpdateUserData(update)),

        ResetEvent::PickOption { method } => {
            dispatch(model, ResetAction::PickResetOption { method })
        }
    }
}

/// Apply an action to the reset state, rendering only when something changed
fn dispatch(model: &mut Model, action: ResetAction) -> Command<Effect, Event> {
    log::debug!("dispatch {action:?}");

    let previous = model.reset.clone();
    model.reset = reduce(std::mem::take(&mut model.reset), action);

    if model.reset != previous {
        render()
    } else {
        Command::done()
    }
}

fn fetch_reset_options(user: String, model: &mut Model) -> Command<Effect, Event> {
    let started = dispatch(model, ResetAction::OptionsRequest);
    let request_id = model.reset.options.request.latest;

    let url = match build_url_with_query(LOOKUP_ENDPOINT, &[("user", &user)]) {
        Ok(url) => url,
        Err(e) => {
            log::error!("failed to create lookup request: {e}");
            return dispatch(
                model,
                ResetAction::OptionsError {
                    request_id,
                    error: RemoteError::new(None, e),
                },
            );
        }
    };

    Command::all([
        started,
        HttpCmd::get(url).build().then_send(move |result| {
            let result = process_json_response::<LookupResponse>(result).map(Into::into);
            Event::Reset(ResetEvent::OptionsResponse(request_id, result))
        }),
    ])
}

fn request_password_reset(
    request: PasswordResetRequest,
    model: &mut Model,
) -> Command<Effect, Event> {
    let started = dispatch(model, ResetAction::ResetRequest);
    let request_id = model.reset.reset_request.latest;

    match HttpCmd::post(build_url(REQUEST_RESET_ENDPOINT))
        .header("Content-Type", "application/json")
        .body_json(&request)
    {
        Ok(builder) => Command::all([
            started,
            builder.build().then_send(move |result| {
                Event::Reset(ResetEvent::PasswordResetResponse(
                    request_id,
                    process_status_response(result),
                ))
            }),
        ]),
        Err(e) => {
            log::error!("failed to create request-reset request: {e}");
            dispatch(
                model,
                ResetAction::ResetRequestError {
                    request_id,
                    error: RemoteError::new(None, e.to_string()),
                },
            )
        }
    }
}
