use serde::{Deserialize, Serialize};

/// Flow that only creates an account; never gets the welcome sub-header
pub const USER_FIRST_FLOW: &str = "userfirst";

pub const VERIFY_HEADER_TEXT: &str = "Verify your email address";
pub const VERIFY_SUB_HEADER_TEXT: &str = "Enter the code sent to your email address";
pub const VERIFY_FALLBACK_HEADER_TEXT: &str = "Create your account.";
pub const WELCOME_SUB_HEADER_TEXT: &str = "Welcome to the wonderful WordPress.com community";

/// Progress of a signup step as reported by the step tracker
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    #[default]
    Unknown,
    Pending,
    Completed,
    Invalid,
}

/// Flow context handed to the verify step by the flow framework
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StepProps {
    pub flow_name: String,
    pub step_name: String,
    /// Number of steps in the flow, as known to the flow definitions
    pub flow_step_count: usize,
    #[serde(default)]
    pub sub_header_text: String,
}

/// Transient state of the email verification step
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerifyStepState {
    pub props: StepProps,
    pub status: StepStatus,
    pub submitting: bool,
    pub sub_header_text: String,
    pub code: String,
}

impl VerifyStepState {
    /// Sub-header for the given flow context.
    ///
    /// Account-only flows (a single step, other than `userfirst`) greet the
    /// user instead of showing the supplied text.
    pub fn sub_header_for(props: &StepProps) -> String {
        if props.flow_step_count == 1 && props.flow_name != USER_FIRST_FLOW {
            WELCOME_SUB_HEADER_TEXT.to_string()
        } else {
            props.sub_header_text.clone()
        }
    }

    pub fn user_creation_pending(&self) -> bool {
        self.status == StepStatus::Pending
    }

    pub fn user_creation_complete(&self) -> bool {
        self.status == StepStatus::Completed
    }

    pub fn user_creation_started(&self) -> bool {
        self.user_creation_pending() || self.user_creation_complete()
    }

    pub fn submit_button_text(&self) -> &'static str {
        match self.status {
            StepStatus::Pending => "Creating Your Account…",
            StepStatus::Completed => "Account created - Go to next step",
            _ => "Create My Account",
        }
    }
}
