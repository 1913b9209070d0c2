use std::future::Future;

use folio_models::contact::{FieldErrors, RawContactSubmission};
use thiserror::Error;

pub mod delivery;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Check a contact form submission and hand it to the site owner.
    ///
    /// The client side rules are enforced again, the submission is never
    /// trusted to be valid.
    fn submit(
        &self,
        submission: RawContactSubmission,
    ) -> impl Future<Output = Result<(), ContactSubmitError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("At least one of name, email and message is missing.")]
    MissingFields,
    #[error("At least one field is invalid.")]
    InvalidFields(FieldErrors),
    #[error("The mail server rejected the submission.")]
    Rejected,
    #[error("The mail server is temporarily unavailable.")]
    Unavailable,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_submit(
        mut self,
        submission: RawContactSubmission,
        result: Result<(), ContactSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
