use crate::clock::{Clock, SystemClock};
use crate::domain::{Field, FieldErrors, FormInput, Submission};

/// Everything the controller needs from a display. Implemented by the HTML page, and by recording
/// doubles in tests.
pub trait FormView {
    /// An empty `message` marks the field valid and restores its neutral style.
    fn set_field_error(&mut self, field: Field, message: &str);
    fn append_result_row(&mut self, submission: &Submission);
    /// Empties every input and unticks the checkbox. Rows already in the table stay.
    fn reset_form(&mut self);
    fn set_timestamp(&mut self, timestamp: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    ErrorDisplayed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(Submission),
    Rejected(FieldErrors),
}

/// Drives a [`FormView`] through submit and clear actions.
#[derive(Debug)]
pub struct FormController<C = SystemClock> {
    clock: C,
    minimum_age: u32,
    state: FormState,
}

impl FormController<SystemClock> {
    pub fn new(minimum_age: u32) -> Self {
        Self::with_clock(SystemClock, minimum_age)
    }
}

impl<C: Clock> FormController<C> {
    pub fn with_clock(clock: C, minimum_age: u32) -> Self {
        Self {
            clock,
            minimum_age,
            state: FormState::Idle,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// Stamps a fresh timestamp on the view. Called once when the page is first shown.
    pub fn start<V: FormView>(&self, view: &mut V) {
        view.set_timestamp(&self.clock.timestamp());
    }

    /// Validates every field of `input`. Any message leaves the form in `ErrorDisplayed` with the
    /// messages shown; otherwise one row is appended and the form is reset.
    #[tracing::instrument(name = "Submitting the registration form", skip(self, input, view))]
    pub fn submit<V: FormView>(&mut self, input: &FormInput, view: &mut V) -> SubmitOutcome {
        clear_errors(view);
        let timestamp = self.clock.timestamp();
        view.set_timestamp(&timestamp);

        match Submission::parse(input, timestamp, self.clock.today(), self.minimum_age) {
            Ok(submission) => {
                view.append_result_row(&submission);
                view.reset_form();
                view.set_timestamp(&self.clock.timestamp());
                self.state = FormState::Idle;
                tracing::info!("Registration accepted");
                SubmitOutcome::Accepted(submission)
            }
            Err(errors) => {
                for (field, message) in errors.iter() {
                    view.set_field_error(field, message);
                }
                self.state = FormState::ErrorDisplayed;
                let invalid = errors
                    .invalid_fields()
                    .iter()
                    .map(Field::id)
                    .collect::<Vec<_>>()
                    .join(",");
                tracing::info!(invalid_fields = %invalid, "Registration rejected");
                SubmitOutcome::Rejected(errors)
            }
        }
    }

    #[tracing::instrument(name = "Clearing the registration form", skip(self, view))]
    pub fn clear<V: FormView>(&mut self, view: &mut V) {
        view.reset_form();
        clear_errors(view);
        view.set_timestamp(&self.clock.timestamp());
        self.state = FormState::Idle;
    }
}

fn clear_errors<V: FormView>(view: &mut V) {
    for field in Field::ALL {
        view.set_field_error(field, "");
    }
}
