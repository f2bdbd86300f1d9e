use crux_core::{render::render, Command};

use crate::commands::signup_progress::SignupStepOutput;
use crate::events::{Event, VerifyEvent};
use crate::model::Model;
use crate::types::{StepStatus, VerifyStepState};
use crate::update_field;
use crate::{Effect, SignupProgressCmd};

/// Handle signup verify step events
pub fn handle(event: VerifyEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        VerifyEvent::Mount(props) => {
            model.verify = VerifyStepState {
                sub_header_text: VerifyStepState::sub_header_for(&props),
                props,
                ..Default::default()
            };
            render()
        }

        VerifyEvent::PropsChanged(props) => {
            let step = &mut model.verify;
            if step.props.flow_name != props.flow_name
                || step.props.sub_header_text != props.sub_header_text
            {
                step.sub_header_text = VerifyStepState::sub_header_for(&props);
            }
            update_field!(model.verify.props, props)
        }

        VerifyEvent::StepStatusChanged(StepStatus::Invalid) => update_field!(
            model.verify.status, StepStatus::Invalid;
            model.verify.submitting, false
        ),

        VerifyEvent::StepStatusChanged(status) => update_field!(model.verify.status, status),

        VerifyEvent::ChangeCode { code } => update_field!(model.verify.code, code),

        VerifyEvent::Save { form } => {
            SignupProgressCmd::save(model.verify.props.step_name.clone(), form)
                .then_send(|output| Event::Verify(VerifyEvent::TrackerResponse(output)))
        }

        VerifyEvent::Submit => {
            model.verify.submitting = true;
            Command::all([
                render(),
                SignupProgressCmd::submit(
                    model.verify.props.step_name.clone(),
                    model.verify.code.clone(),
                )
                    .then_send(|output| Event::Verify(VerifyEvent::TrackerResponse(output))),
            ])
        }

        VerifyEvent::TrackerResponse(SignupStepOutput::Accepted) => Command::done(),

        VerifyEvent::TrackerResponse(SignupStepOutput::Rejected { message }) => {
            log::warn!(
                "step tracker rejected step {}: {message}",
                model.verify.props.step_name
            );
            update_field!(model.verify.submitting, false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::signup_progress::SignupStepOperation;
    use crate::types::{StepProps, WELCOME_SUB_HEADER_TEXT};
    use crate::update::update;
    use crux_core::Request;
    use std::collections::BTreeMap;

    fn props(flow_name: &str, flow_step_count: usize) -> StepProps {
        StepProps {
            flow_name: flow_name.to_string(),
            step_name: "verify".to_string(),
            flow_step_count,
            sub_header_text: "Check your inbox".to_string(),
        }
    }

    fn mounted(props: StepProps) -> Model {
        let mut model = Model::default();
        let _ = update(Event::Verify(VerifyEvent::Mount(props)), &mut model);
        model
    }

    fn take_tracker_request(cmd: &mut Command<Effect, Event>) -> Request<SignupStepOperation> {
        cmd.effects()
            .find_map(|effect| match effect {
                Effect::SignupProgress(request) => Some(request),
                _ => None,
            })
            .expect("command should call the step tracker")
    }

    #[test]
    fn mount_computes_sub_header() {
        assert_eq!(
            mounted(props("account", 1)).verify.sub_header_text,
            WELCOME_SUB_HEADER_TEXT
        );
        assert_eq!(
            mounted(props("main", 3)).verify.sub_header_text,
            "Check your inbox"
        );
    }

    #[test]
    fn flow_change_recomputes_sub_header() {
        let mut model = mounted(props("main", 3));

        let _ = update(
            Event::Verify(VerifyEvent::PropsChanged(props("account", 1))),
            &mut model,
        );

        assert_eq!(model.verify.sub_header_text, WELCOME_SUB_HEADER_TEXT);
        assert_eq!(model.verify.props.flow_name, "account");
    }

    #[test]
    fn submit_forwards_step_name_and_code() {
        let mut model = mounted(props("main", 3));
        let _ = update(
            Event::Verify(VerifyEvent::ChangeCode {
                code: "123456".to_string(),
            }),
            &mut model,
        );

        let mut cmd = update(Event::Verify(VerifyEvent::Submit), &mut model);
        let request = take_tracker_request(&mut cmd);

        assert!(model.verify.submitting);
        assert_eq!(
            request.operation,
            SignupStepOperation::Submit {
                step_name: "verify".to_string(),
                code: "123456".to_string(),
            }
        );
    }

    #[test]
    fn submitted_request_outlives_the_model() {
        let mut model = mounted(props("main", 3));
        model.verify.code = "111111".to_string();

        let mut cmd = update(Event::Verify(VerifyEvent::Submit), &mut model);
        drop(model);

        let mut request = take_tracker_request(&mut cmd);
        assert_eq!(
            request.operation,
            SignupStepOperation::Submit {
                step_name: "verify".to_string(),
                code: "111111".to_string(),
            }
        );
        request
            .resolve(SignupStepOutput::Accepted)
            .expect("request should resolve");
        assert!(cmd.events().next().is_some());
    }

    #[test]
    fn invalid_step_clears_submitting() {
        let mut model = mounted(props("main", 3));
        let _ = update(Event::Verify(VerifyEvent::Submit), &mut model);
        assert!(model.verify.submitting);

        let _ = update(
            Event::Verify(VerifyEvent::StepStatusChanged(StepStatus::Invalid)),
            &mut model,
        );

        assert!(!model.verify.submitting);
        assert_eq!(model.verify.status, StepStatus::Invalid);
    }

    #[test]
    fn pending_step_keeps_submitting() {
        let mut model = mounted(props("main", 3));
        let _ = update(Event::Verify(VerifyEvent::Submit), &mut model);

        let _ = update(
            Event::Verify(VerifyEvent::StepStatusChanged(StepStatus::Pending)),
            &mut model,
        );

        assert!(model.verify.submitting);
        assert!(model.verify.user_creation_pending());
    }

    #[test]
    fn rejected_submission_clears_submitting() {
        let mut model = mounted(props("main", 3));
        let mut cmd = update(Event::Verify(VerifyEvent::Submit), &mut model);
        let mut request = take_tracker_request(&mut cmd);

        request
            .resolve(SignupStepOutput::Rejected {
                message: "tracker offline".to_string(),
            })
            .expect("request should resolve");
        for event in cmd.events().collect::<Vec<_>>() {
            let _ = update(event, &mut model);
        }

        assert!(!model.verify.submitting);
    }

    #[test]
    fn save_forwards_form() {
        let mut model = mounted(props("main", 3));
        let form = BTreeMap::from([("code".to_string(), "42".to_string())]);

        let mut cmd = update(
            Event::Verify(VerifyEvent::Save { form: form.clone() }),
            &mut model,
        );

        assert_eq!(
            take_tracker_request(&mut cmd).operation,
            SignupStepOperation::Save {
                step_name: "verify".to_string(),
                form,
            }
        );
        assert!(!model.verify.submitting);
    }
}
