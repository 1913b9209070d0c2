//! Client side of the contact form.
//!
//! [`ContactForm`] holds the draft the user is typing, the inline field
//! errors and the status of the current submission attempt.

use folio_extern_contracts::contact::ContactApiService;
use folio_models::contact::{
    validate, validate_field, ContactField, FieldErrors, RawContactSubmission,
};
use tracing::{debug, warn};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another attempt is still in flight.
    Ignored,
    /// Local validation failed. See [`ContactForm::errors`].
    Invalid,
    Success,
    Error,
}

#[derive(Debug)]
pub struct ContactForm<Api> {
    api: Api,
    draft: RawContactSubmission,
    errors: FieldErrors,
    status: SubmitStatus,
}

impl<Api> ContactForm<Api>
where
    Api: ContactApiService,
{
    pub fn new(api: Api) -> Self {
        Self {
            api,
            draft: RawContactSubmission::default(),
            errors: FieldErrors::new(),
            status: SubmitStatus::Idle,
        }
    }

    pub fn draft(&self) -> &RawContactSubmission {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: ContactField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Validate a single field after it lost focus and update its inline
    /// error.
    pub fn blur(&mut self, field: ContactField) {
        match validate_field(field, &self.draft) {
            Some(message) => self.errors.insert(field, message),
            None => self.errors.remove(&field),
        };
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.status == SubmitStatus::Submitting {
            debug!("submission already in progress");
            return SubmitOutcome::Ignored;
        }

        let submission = match validate(&self.draft) {
            Ok(submission) => submission,
            Err(errors) => {
                self.errors = errors;
                return SubmitOutcome::Invalid;
            }
        };
        self.errors.clear();

        self.status = SubmitStatus::Submitting;
        match self.api.submit(submission).await {
            Ok(()) => {
                self.status = SubmitStatus::Success;
                self.draft = RawContactSubmission::default();
                SubmitOutcome::Success
            }
            Err(err) => {
                warn!("failed to submit contact form: {err:#}");
                self.status = SubmitStatus::Error;
                SubmitOutcome::Error
            }
        }
    }

    pub fn reset(&mut self) {
        self.draft = RawContactSubmission::default();
        self.errors.clear();
        self.status = SubmitStatus::Idle;
    }
}
