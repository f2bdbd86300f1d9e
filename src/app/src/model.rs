use serde::{Deserialize, Serialize};

use crate::types::*;

/// Application Model - the complete state
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    pub reset: ResetState,
    pub verify: VerifyStepState,
}

/// What the rendering layer needs from the verify step
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerifyStepView {
    pub header_text: String,
    pub sub_header_text: String,
    pub fallback_header_text: String,
    pub submit_button_text: String,
    pub submitting: bool,
    pub user_creation_started: bool,
}

/// View model handed to the Shell; texts are untranslated
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    pub reset: ResetState,
    pub is_requesting_options: bool,
    pub options_error: Option<RemoteError>,
    pub verify: VerifyStepView,
}

impl From<&Model> for ViewModel {
    fn from(model: &Model) -> Self {
        let verify = &model.verify;
        let sub_header_text = if verify.sub_header_text.is_empty() {
            VERIFY_SUB_HEADER_TEXT.to_string()
        } else {
            verify.sub_header_text.clone()
        };

        Self {
            reset: model.reset.clone(),
            is_requesting_options: model.reset.options.is_requesting(),
            options_error: model.reset.options.error().cloned(),
            verify: VerifyStepView {
                header_text: VERIFY_HEADER_TEXT.to_string(),
                sub_header_text,
                fallback_header_text: VERIFY_FALLBACK_HEADER_TEXT.to_string(),
                submit_button_text: verify.submit_button_text().to_string(),
                submitting: verify.submitting,
                user_creation_started: verify.user_creation_started(),
            },
        }
    }
}
