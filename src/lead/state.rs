//! Submission workflow state. The form owns exactly one `LeadFormState` and
//! every mutation goes through `LeadAction`, so the lifecycle is the same
//! whether it is driven by the browser or by a test: Idle -> Submitting ->
//! Succeeded/Failed -> Idle.

use std::rc::Rc;

use yew::prelude::*;

use crate::lead::submit::SubmitError;
use crate::lead::validate::{Field, FieldErrors, LeadFields};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeadFormState {
    pub fields: LeadFields,
    pub errors: FieldErrors,
    pub status: SubmitStatus,
}

impl Default for LeadFormState {
    fn default() -> Self {
        Self {
            fields: LeadFields::default(),
            errors: FieldErrors::default(),
            status: SubmitStatus::Idle,
        }
    }
}

pub enum LeadAction {
    /// A field changed; its stale error is dropped and a finished attempt
    /// (either outcome) rolls back to Idle.
    Edit(Field, String),
    /// Validation rejected the draft; the workflow never enters Submitting.
    Reject(FieldErrors),
    /// Validation passed and the request is in flight.
    Begin,
    /// The collaborator answered. Success clears the form; failure keeps
    /// every value the user typed.
    Finish(Result<(), SubmitError>),
    /// The transient notice was dismissed.
    Acknowledge,
}

impl Reducible for LeadFormState {
    type Action = LeadAction;

    fn reduce(self: Rc<Self>, action: LeadAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            LeadAction::Edit(field, value) => {
                next.fields.set(field, value);
                next.errors.clear(field);
                if matches!(next.status, SubmitStatus::Succeeded | SubmitStatus::Failed) {
                    next.status = SubmitStatus::Idle;
                }
            }
            LeadAction::Reject(errors) => {
                next.errors = errors;
            }
            LeadAction::Begin => {
                next.errors = FieldErrors::default();
                next.status = SubmitStatus::Submitting;
            }
            LeadAction::Finish(Ok(())) => {
                next.fields = LeadFields::default();
                next.errors = FieldErrors::default();
                next.status = SubmitStatus::Succeeded;
            }
            LeadAction::Finish(Err(_)) => {
                next.status = SubmitStatus::Failed;
            }
            LeadAction::Acknowledge => {
                next.status = SubmitStatus::Idle;
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::validate::{validate, ValidationError};

    fn reduce(state: LeadFormState, action: LeadAction) -> LeadFormState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn filled_state() -> LeadFormState {
        let mut state = LeadFormState::default();
        let edits = [
            (Field::FirstName, "Fahad"),
            (Field::Email, "fahad@example.com"),
            (Field::CountryCode, "+971"),
            (Field::PhoneNumber, "501234567"),
            (Field::City, "Jeddah"),
            (Field::JobTitle, "Operations Manager"),
            (Field::BusinessName, "Al Noor Catering"),
            (Field::Timeline, "Within 1 month"),
            (Field::SelectedGuide, "coffee"),
        ];
        for (field, value) in edits {
            state = reduce(state, LeadAction::Edit(field, value.to_string()));
        }
        state
    }

    #[test]
    fn test_successful_submission_resets_form() {
        let mut state = filled_state();
        assert_eq!(state.status, SubmitStatus::Idle);

        let lead = validate(&state.fields).expect("filled draft is valid");
        assert_eq!(lead.selected_guide, "coffee");

        state = reduce(state, LeadAction::Begin);
        assert_eq!(state.status, SubmitStatus::Submitting);

        state = reduce(state, LeadAction::Finish(Ok(())));
        assert_eq!(state.status, SubmitStatus::Succeeded);
        assert_eq!(state.fields, LeadFields::default());
        assert!(state.errors.is_empty());

        state = reduce(state, LeadAction::Acknowledge);
        assert_eq!(state.status, SubmitStatus::Idle);
    }

    #[test]
    fn test_rejected_draft_stays_out_of_submitting() {
        let mut state = filled_state();
        state = reduce(state, LeadAction::Edit(Field::City, String::new()));

        let errors = validate(&state.fields).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::City), Some(ValidationError::Required));

        let before = state.fields.clone();
        state = reduce(state, LeadAction::Reject(errors));
        assert_eq!(state.status, SubmitStatus::Idle);
        assert_eq!(state.errors.get(Field::City), Some(ValidationError::Required));
        assert_eq!(state.fields, before);
    }

    #[test]
    fn test_failed_submission_keeps_fields() {
        let mut state = filled_state();
        state = reduce(state, LeadAction::Begin);

        let before = state.fields.clone();
        state = reduce(
            state,
            LeadAction::Finish(Err(SubmitError::Network("connection reset".to_string()))),
        );
        assert_eq!(state.status, SubmitStatus::Failed);
        assert_eq!(state.fields, before);
    }

    #[test]
    fn test_edit_clears_field_error_and_finished_status() {
        let mut state = filled_state();
        state = reduce(state, LeadAction::Edit(Field::City, String::new()));
        let errors = validate(&state.fields).unwrap_err();
        state = reduce(state, LeadAction::Reject(errors));

        state = reduce(state, LeadAction::Edit(Field::City, "Taif".to_string()));
        assert!(state.errors.get(Field::City).is_none());

        state = reduce(state, LeadAction::Begin);
        state = reduce(
            state,
            LeadAction::Finish(Err(SubmitError::Server("rate limited".to_string()))),
        );
        assert_eq!(state.status, SubmitStatus::Failed);

        state = reduce(state, LeadAction::Edit(Field::FirstName, "Noura".to_string()));
        assert_eq!(state.status, SubmitStatus::Idle);
        assert_eq!(state.fields.first_name, "Noura");
    }

    #[test]
    fn test_begin_clears_previous_errors() {
        let mut state = filled_state();
        state = reduce(state, LeadAction::Edit(Field::City, String::new()));
        let errors = validate(&state.fields).unwrap_err();
        state = reduce(state, LeadAction::Reject(errors));
        assert!(!state.errors.is_empty());

        state = reduce(state, LeadAction::Edit(Field::City, "Riyadh".to_string()));
        state = reduce(state, LeadAction::Begin);
        assert!(state.errors.is_empty());
        assert_eq!(state.status, SubmitStatus::Submitting);
    }
}
