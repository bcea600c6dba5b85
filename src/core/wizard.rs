use tracing::{error, info};

use super::{form::FormField, steps::WizardStep};
use crate::{
    error::Result,
    services::Planner,
    types::{TripRequest, TripResponse},
};

/// Result slot of the wizard. Anything but `Idle` hides the step screens.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PlanStatus {
    #[default]
    Idle,
    Loading,
    Failed(String),
    Ready(TripResponse),
}

/// What the wizard should show right now
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen<'a> {
    Loading,
    Error(&'a str),
    Result(&'a TripResponse),
    Step(WizardStep),
}

/// Linear form wizard: a step counter, the request being edited and the result slot
#[derive(Debug, Clone, Default)]
pub struct Wizard {
    step: WizardStep,
    form: TripRequest,
    status: PlanStatus,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a pre-filled request instead of the defaults
    pub fn with_form(form: TripRequest) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn form(&self) -> &TripRequest {
        &self.form
    }

    pub fn status(&self) -> &PlanStatus {
        &self.status
    }

    pub fn response(&self) -> Option<&TripResponse> {
        match &self.status {
            PlanStatus::Ready(response) => Some(response),
            _ => None,
        }
    }

    pub fn next(&mut self) {
        self.step = self.step.next();
    }

    pub fn prev(&mut self) {
        self.step = self.step.prev();
    }

    pub fn edit(&mut self, field: FormField, input: &str) -> Result<()> {
        self.form.apply(field, input)
    }

    /// Reset step, form data and result slot to their initial values.
    pub fn restart(&mut self) {
        *self = Self::default();
    }

    /// Mark a submission as in flight, clearing any previous result or error.
    pub fn begin_submit(&mut self) {
        self.status = PlanStatus::Loading;
    }

    /// Store the outcome of the in-flight submission.
    pub fn finish_submit(&mut self, outcome: Result<TripResponse>) {
        self.status = match outcome {
            Ok(response) => {
                info!(title = %response.trip_title, "Trip plan ready");
                PlanStatus::Ready(response)
            }
            Err(err) => {
                error!(code = err.error_code(), "Trip plan request failed: {}", err);
                PlanStatus::Failed(err.user_message())
            }
        };
    }

    /// Send the current form to `planner` and store the outcome.
    pub async fn submit<P>(&mut self, planner: &P)
    where
        P: Planner + ?Sized,
    {
        self.begin_submit();
        let outcome = planner.plan(&self.form).await;
        self.finish_submit(outcome);
    }

    pub fn screen(&self) -> Screen<'_> {
        match &self.status {
            PlanStatus::Loading => Screen::Loading,
            PlanStatus::Failed(message) => Screen::Error(message),
            PlanStatus::Ready(response) => Screen::Result(response),
            PlanStatus::Idle => Screen::Step(self.step),
        }
    }
}
