//! Signup progress command definitions.
//!
//! The step tracker lives in the Shell; the Core only asks it to save or
//! submit a step and learns whether the tracker took the request.

use std::collections::BTreeMap;
use std::marker::PhantomData;

use crux_core::{capability::Operation, command, Command};
use serde::{Deserialize, Serialize};

// Operations that the Shell's step tracker performs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SignupStepOperation {
    #[serde(rename_all = "camelCase")]
    Save {
        step_name: String,
        form: BTreeMap<String, String>,
    },
    #[serde(rename_all = "camelCase")]
    Submit { step_name: String, code: String },
}

// What the step tracker did with the request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum SignupStepOutput {
    Accepted,
    Rejected { message: String },
}

impl Operation for SignupStepOperation {
    type Output = SignupStepOutput;
}

/// Command-based step tracker API
pub struct SignupProgress<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> SignupProgress<Effect, Event>
where
    Effect: Send + From<crux_core::Request<SignupStepOperation>> + 'static,
    Event: Send + 'static,
{
    /// Store the form of a step without advancing the flow
    pub fn save(
        step_name: String,
        form: BTreeMap<String, String>,
    ) -> command::RequestBuilder<Effect, Event, impl std::future::Future<Output = SignupStepOutput>>
    {
        Command::request_from_shell(SignupStepOperation::Save { step_name, form })
    }

    /// Submit a step for processing by the flow
    pub fn submit(
        step_name: String,
        code: String,
    ) -> command::RequestBuilder<Effect, Event, impl std::future::Future<Output = SignupStepOutput>>
    {
        Command::request_from_shell(SignupStepOperation::Submit { step_name, code })
    }
}
