use crate::actions::ResetAction;
use crate::types::ResetState;

/// Apply one action to the reset state.
///
/// Pure: the new state depends only on `state` and `action`. Sub-trees an
/// action does not concern are passed through unchanged.
pub fn reduce(mut state: ResetState, action: ResetAction) -> ResetState {
    match action {
        ResetAction::OptionsRequest => {
            state.options.request.start();
        }
        ResetAction::OptionsReceive { request_id, items } => {
            if state.options.request.fulfill(request_id) {
                state.options.items = items;
            }
        }
        ResetAction::OptionsError { request_id, error } => {
            state.options.request.reject(request_id, error);
        }
        ResetAction::ResetRequest => {
            state.reset_request.start();
        }
        ResetAction::ResetRequestSuccess { request_id } => {
            state.reset_request.fulfill(request_id);
        }
        ResetAction::ResetRequestError { request_id, error } => {
            state.reset_request.reject(request_id, error);
        }
        ResetAction::UpdateUserData(update) => state.user_data.apply(update),
        ResetAction::PickResetOption { method } => state.picked_method = Some(method),
    }

    state
}
