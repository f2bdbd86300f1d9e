use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::commands::signup_progress::SignupStepOutput;
use crate::types::*;

/// Events that can happen in the app, grouped by domain
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    Reset(ResetEvent),
    Verify(VerifyEvent),
}

/// Account-recovery reset events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum ResetEvent {
    /// Look up the recovery channels of a user
    FetchOptions {
        user: String,
    },
    /// Ask the server to send a reset link through the chosen channel
    RequestPasswordReset {
        user: String,
        method: String,
    },
    UpdateUserData(UserDataUpdate),
    PickOption {
        method: String,
    },

    // HTTP responses (internal events, skipped from serialization)
    #[serde(skip)]
    OptionsResponse(RequestId, Result<Vec<ResetOption>, RemoteError>),
    #[serde(skip)]
    PasswordResetResponse(RequestId, Result<(), RemoteError>),
}

/// Signup email verification step events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum VerifyEvent {
    Mount(StepProps),
    PropsChanged(StepProps),
    StepStatusChanged(StepStatus),
    ChangeCode { code: String },
    Save { form: BTreeMap<String, String> },
    /// Form submission; the Shell suppresses the browser's default submit
    Submit,

    // Step tracker responses (internal events)
    #[serde(skip)]
    TrackerResponse(SignupStepOutput),
}
