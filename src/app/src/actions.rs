//! Account-recovery reset actions
//!
//! Every change to [`ResetState`](crate::types::ResetState) is described by
//! one of these actions and applied by [`reduce`](crate::reducer::reduce).
//! The request-start actions carry no id; the reducer issues one and the
//! matching settle action must echo it back.

use serde::{Deserialize, Serialize};

use crate::types::{RemoteError, RequestId, ResetOption, UserDataUpdate};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResetAction {
    OptionsRequest,
    OptionsReceive {
        request_id: RequestId,
        items: Vec<ResetOption>,
    },
    OptionsError {
        request_id: RequestId,
        error: RemoteError,
    },
    ResetRequest,
    ResetRequestSuccess {
        request_id: RequestId,
    },
    ResetRequestError {
        request_id: RequestId,
        error: RemoteError,
    },
    UpdateUserData(UserDataUpdate),
    PickResetOption {
        method: String,
    },
}

pub fn update_login(user: impl Into<String>) -> ResetAction {
    ResetAction::UpdateUserData(UserDataUpdate::login(user))
}

pub fn update_firstname(first_name: impl Into<String>) -> ResetAction {
    ResetAction::UpdateUserData(UserDataUpdate::first_name(first_name))
}

pub fn update_lastname(last_name: impl Into<String>) -> ResetAction {
    ResetAction::UpdateUserData(UserDataUpdate::last_name(last_name))
}

pub fn update_site_url(url: impl Into<String>) -> ResetAction {
    ResetAction::UpdateUserData(UserDataUpdate::site_url(url))
}

/// Record the recovery channel the user picked, e.g. `"primary-email"`
pub fn pick_password_reset_option(method: impl Into<String>) -> ResetAction {
    ResetAction::PickResetOption {
        method: method.into(),
    }
}
