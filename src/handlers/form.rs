use std::time::Duration;

use chrono::{NaiveDate, Utc};
use log::info;

use crate::db::EmployeeStore;
use crate::errors::AppError;
use crate::models::employee::{fields, EmployeeRecord};
use crate::models::step::FormStep;
use crate::utils::validation::{self, ErrorMap};

/// Everything the form UI renders from. Default is step 1 with a fresh
/// record and no errors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub current_step: FormStep,
    pub form_data: EmployeeRecord,
    pub errors: ErrorMap,
    pub submitting: bool,
    pub submit_success: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    FieldChanged { field: String, value: String },
    Next,
    Previous,
    Reset,
    SubmitStarted,
    SubmitFinished,
    SuccessExpired,
}

/// Pure state transition. `today` anchors the age check so the reducer
/// stays referentially transparent.
pub fn reduce(state: FormState, action: FormAction, today: NaiveDate) -> FormState {
    let mut state = state;
    match action {
        FormAction::FieldChanged { field, value } => {
            // IFSC and PAN are normalized as they are typed.
            let value = match field.as_str() {
                fields::IFSC_CODE | fields::PAN_NUMBER => value.to_uppercase(),
                _ => value,
            };
            // A pending error for the field clears as soon as it is edited.
            if state.form_data.set_field(&field, value) {
                state.errors.remove(field.as_str());
            }
            state
        }
        FormAction::Next => {
            let step_errors =
                validation::validate_step_on(&state.form_data, state.current_step, today);
            if step_errors.is_empty() {
                if let Some(next) = state.current_step.next() {
                    state.current_step = next;
                }
                state.errors.clear();
            } else {
                state.errors = step_errors;
            }
            state
        }
        FormAction::Previous => {
            if let Some(previous) = state.current_step.previous() {
                state.current_step = previous;
            }
            state.errors.clear();
            state
        }
        FormAction::Reset => FormState::default(),
        FormAction::SubmitStarted => {
            state.submitting = true;
            state
        }
        FormAction::SubmitFinished => FormState {
            submit_success: true,
            ..FormState::default()
        },
        FormAction::SuccessExpired => {
            state.submit_success = false;
            state
        }
    }
}

/// Timers around submission. The delay simulates backend latency; neither
/// timer has cancellation semantics.
#[derive(Debug, Clone)]
pub struct FormConfig {
    pub submit_delay: Duration,
    pub success_duration: Duration,
}

impl Default for FormConfig {
    fn default() -> Self {
        FormConfig {
            submit_delay: Duration::from_millis(1500),
            success_duration: Duration::from_millis(5000),
        }
    }
}

impl FormConfig {
    /// Zero delays, for tests and headless drivers.
    pub fn immediate() -> Self {
        FormConfig {
            submit_delay: Duration::ZERO,
            success_duration: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Full-record validation failed; the errors are in the form state.
    Rejected,
    Saved { total: usize },
}

/// Owns the wheel state, the injected store handle and the loaded list of
/// saved submissions.
pub struct FormController<S: EmployeeStore> {
    state: FormState,
    store: S,
    config: FormConfig,
    saved: Vec<EmployeeRecord>,
}

impl<S: EmployeeStore> FormController<S> {
    pub fn new(store: S, config: FormConfig) -> Result<Self, AppError> {
        let saved = store.load()?;
        Ok(FormController {
            state: FormState::default(),
            store,
            config,
            saved,
        })
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Previously submitted records, oldest first.
    pub fn saved(&self) -> &[EmployeeRecord] {
        &self.saved
    }

    pub fn dispatch(&mut self, action: FormAction) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action, Utc::now().date_naive());
    }

    pub fn set_field(&mut self, field: &str, value: &str) {
        self.dispatch(FormAction::FieldChanged {
            field: field.to_string(),
            value: value.to_string(),
        });
    }

    pub fn next(&mut self) {
        self.dispatch(FormAction::Next);
    }

    pub fn previous(&mut self) {
        self.dispatch(FormAction::Previous);
    }

    pub fn reset(&mut self) {
        self.dispatch(FormAction::Reset);
    }

    /// Validate the whole record and, if clean, persist it after the
    /// configured delay. On success the wheel resets to step 1 and the
    /// success indicator is raised.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, AppError> {
        let errors = validation::validate_form(&self.state.form_data);
        if !errors.is_empty() {
            self.state.errors = errors;
            return Ok(SubmitOutcome::Rejected);
        }

        self.dispatch(FormAction::SubmitStarted);
        tokio::time::sleep(self.config.submit_delay).await;

        let record = self.state.form_data.clone();
        validation::validate_record(&record)?;
        self.saved = self.store.append(record)?;
        info!("Employee record saved, {} stored", self.saved.len());

        self.dispatch(FormAction::SubmitFinished);
        Ok(SubmitOutcome::Saved {
            total: self.saved.len(),
        })
    }

    /// Let the transient success indicator run out, then lower it.
    pub async fn expire_success(&mut self) {
        tokio::time::sleep(self.config.success_duration).await;
        self.dispatch(FormAction::SuccessExpired);
    }
}
