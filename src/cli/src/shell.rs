use crate::{http_client::HttpClient, progress::StepTracker};
use account_recovery_core::{App, Effect, Event, ViewModel};
use anyhow::{Result, anyhow};
use crux_core::Core;
use log::debug;
use std::collections::VecDeque;

/// Native Shell: feeds events into the Core and carries out its effects
pub struct Shell<T: StepTracker> {
    core: Core<App>,
    http: HttpClient,
    tracker: T,
}

impl<T: StepTracker> Shell<T> {
    pub fn new(http: HttpClient, tracker: T) -> Self {
        Self {
            core: Core::new(),
            http,
            tracker,
        }
    }

    /// Process one event until the Core has no outstanding effects
    ///
    /// Remote failures are part of the returned view model; an error is only
    /// returned when an effect could not be resolved at all.
    pub async fn dispatch(&self, event: Event) -> Result<ViewModel> {
        debug!("event {event:?}");

        let mut effects: VecDeque<Effect> = self.core.process_event(event).into();

        while let Some(effect) = effects.pop_front() {
            let next = match effect {
                Effect::Render(_) => {
                    debug!("render");
                    continue;
                }
                Effect::Http(mut request) => {
                    let result = self.http.execute(&request.operation).await;
                    self.core
                        .resolve(&mut request, result)
                        .map_err(|e| anyhow!("failed to resolve HTTP request: {e:?}"))?
                }
                Effect::SignupProgress(mut request) => {
                    let output = self.tracker.track(&request.operation);
                    self.core
                        .resolve(&mut request, output)
                        .map_err(|e| anyhow!("failed to resolve step tracker request: {e:?}"))?
                }
            };
            effects.extend(next);
        }

        Ok(self.core.view())
    }

    pub fn view(&self) -> ViewModel {
        self.core.view()
    }
}
