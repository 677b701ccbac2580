use std::cell::Cell;

use super::form::{Application, ApplicationForm};
use super::store::{RecordStore, StoreError};
use crate::utils::logging::log_error;

pub const BUSY_LABEL: &str = "Submitting...";
pub const IDLE_LABEL: &str = "Apply";
pub const DUPLICATE_MESSAGE: &str =
    "This student ID has already applied. Duplicate applications are not accepted.";
pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again in a moment.";

pub fn success_message(name: &str) -> String {
    format!("{}, your application has been received! We'll be in touch soon.", name)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Name or student id missing, nothing happened
    Skipped,
    /// Another submission is still waiting on the store
    InFlight,
    Submitted { name: String },
    Duplicate,
    Failed(StoreError),
}

/// The parts of the form the controller drives
pub trait FormView {
    /// `Submitting` disables the submit control and shows the busy label,
    /// `Idle` restores both.
    fn set_phase(&self, phase: Phase);
    fn reset_fields(&self);
}

pub trait Toaster {
    fn show(&self, message: &str);
}

/// Join-form workflow: existence check by student id, then write.
///
/// The check and the write are two separate store calls. Two submissions for
/// the same id racing each other can both see "absent" and both write; only a
/// create-if-absent primitive on the store would close that gap.
pub struct ApplicationController<S, V, T> {
    store: S,
    view: V,
    toaster: T,
    in_flight: Cell<bool>,
}

impl<S, V, T> ApplicationController<S, V, T>
where
    S: RecordStore,
    V: FormView,
    T: Toaster,
{
    pub fn new(store: S, view: V, toaster: T) -> Self {
        Self {
            store,
            view,
            toaster,
            in_flight: Cell::new(false),
        }
    }

    pub async fn submit(&self, form: ApplicationForm) -> SubmitOutcome {
        let Some(application) = form.validate() else {
            return SubmitOutcome::Skipped;
        };
        // Set before the first await, so a second submit event that arrives
        // before the busy state renders is turned away here.
        if self.in_flight.replace(true) {
            return SubmitOutcome::InFlight;
        }

        self.view.set_phase(Phase::Submitting);
        let outcome = match self.check_and_write(&application).await {
            Ok(true) => {
                self.view.reset_fields();
                self.toaster.show(&success_message(&application.name));
                SubmitOutcome::Submitted { name: application.name }
            }
            Ok(false) => {
                self.toaster.show(DUPLICATE_MESSAGE);
                SubmitOutcome::Duplicate
            }
            Err(e) => {
                log_error("Application submit failed:", &e.to_string());
                self.toaster.show(FAILURE_MESSAGE);
                SubmitOutcome::Failed(e)
            }
        };
        self.view.set_phase(Phase::Idle);
        self.in_flight.set(false);
        outcome
    }

    /// `Ok(false)` when a record already exists under the student id.
    async fn check_and_write(&self, application: &Application) -> Result<bool, StoreError> {
        if self.store.get(&application.student_id).await?.is_some() {
            return Ok(false);
        }
        self.store.put(application).await?;
        Ok(true)
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }
}
